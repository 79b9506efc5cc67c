//! Reader for programs written as text.
//!
//! ```text
//! bird(tina) <- chicken(tina).
//! flies(tina) -< bird(tina).
//! ~flies(tina) -< chicken(tina).
//! chicken(tina).
//! ```
//! `<-` marks a strict rule, `-<` a defeasible one, and a bare literal is a
//! strict fact. Arguments starting with an uppercase letter or `_` are
//! variables. The reader does no grounding.

use crate::{
    error::ParseError, preprocess::comments_removed, text::Text, Literal, Program, Rule,
    RuleType, Term,
};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char as nomchar, multispace0},
    combinator::{map as nommap, opt, value},
    error::{context, ParseError as NomParseError, VerboseError, VerboseErrorKind},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
};
pub type IResult<I, O, E = VerboseError<I>> = Result<(I, O), nom::Err<E>>;

type In<'a> = &'a str;

pub fn wsl<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: NomParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E> + 'a,
{
    preceded(multispace0, inner)
}

pub fn ident(s: In) -> IResult<In, In> {
    wsl(take_while1(|c: char| c.is_alphanumeric() || c == '_'))(s)
}

/// Variables start with an uppercase letter or `_`.
pub fn is_variable_name(s: &str) -> bool {
    s.starts_with(|c: char| c.is_uppercase() || c == '_')
}

pub fn term(s: In) -> IResult<In, Term> {
    let to_term = |s: In| {
        let text = Text::from_str(s);
        if is_variable_name(s) {
            Term::Variable(text)
        } else {
            Term::Constant(text)
        }
    };
    context("term", nommap(ident, to_term))(s)
}

pub fn sep(s: In) -> IResult<In, char> {
    wsl(nomchar(','))(s)
}

pub fn args(s: In) -> IResult<In, Vec<Term>> {
    let inner = separated_list1(sep, term);
    delimited(wsl(nomchar('(')), inner, context("`)`", wsl(nomchar(')'))))(s)
}

pub fn literal(s: In) -> IResult<In, Literal> {
    let negation = nommap(opt(wsl(nomchar('~'))), |neg: Option<char>| neg.is_some());
    let p = tuple((negation, ident, opt(args)));
    let to_literal = |(negated, predicate, args): (bool, In, Option<Vec<Term>>)| Literal {
        predicate: Text::from_str(predicate),
        args: args.unwrap_or_default(),
        negated,
    };
    context("literal", nommap(p, to_literal))(s)
}

pub fn arrow(s: In) -> IResult<In, RuleType> {
    let strict = value(RuleType::Strict, tag("<-"));
    let defeasible = value(RuleType::Defeasible, tag("-<"));
    wsl(alt((strict, defeasible)))(s)
}

pub fn rulesep(s: In) -> IResult<In, char> {
    context("`.`", wsl(nomchar('.')))(s)
}

pub fn rule(s: In) -> IResult<In, Rule> {
    let body = pair(arrow, separated_list0(sep, literal));
    let to_rule = |(head, body): (Literal, Option<(RuleType, Vec<Literal>)>)| match body {
        None => Rule::fact(head),
        Some((kind, body)) => Rule { head, body, kind },
    };
    nommap(terminated(pair(literal, opt(body)), rulesep), to_rule)(s)
}

pub fn program(s: In) -> IResult<In, Program> {
    nommap(terminated(many0(rule), multispace0), |rules| Program { rules })(s)
}

fn syntax_error(source: &str, err: VerboseError<In>) -> ParseError {
    let Some((at, kind)) = err.errors.first() else {
        return ParseError::Syntax { line: 1, column: 1, context: "rule".into() };
    };
    // prefer the innermost named context
    let context = err
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(name) => Some(name.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| match kind {
            VerboseErrorKind::Char(c) => format!("`{c}`"),
            VerboseErrorKind::Context(name) => name.to_string(),
            VerboseErrorKind::Nom(kind) => format!("{kind:?}"),
        });
    let consumed = &source[..source.len() - at.len()];
    let line = consumed.matches('\n').count() + 1;
    let column = consumed.len() - consumed.rfind('\n').map_or(0, |i| i + 1) + 1;
    ParseError::Syntax { line, column, context }
}

impl Program {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let source = comments_removed(source.to_string());
        let rest = match program(&source) {
            Ok(("", program)) => return Ok(program),
            Ok((rest, _)) => rest,
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => return Err(syntax_error(&source, e)),
            Err(nom::Err::Incomplete(_)) => source.as_str(),
        };
        // `many0` stops quietly at the first bad rule; parse it again for the reason
        match rule(rest) {
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(syntax_error(&source, e)),
            _ => Err(ParseError::Trailing { rest: rest.trim().to_string() }),
        }
    }
}
