use crate::{Literal, Outcome, Program, Rule, RuleType, Term};
use std::fmt::{Debug, Formatter, Result as FmtResult};

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Constant(c) => c.fmt(f),
            Self::Variable(v) => v.fmt(f),
        }
    }
}

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{:?}", self.predicate)?;
        if !self.args.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", arg)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl Debug for RuleType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Strict => write!(f, "<-"),
            Self::Defeasible => write!(f, "-<"),
        }
    }
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:?}", self.head)?;
        // strict facts print bare, as they are written
        if !(self.is_fact() && self.is_strict()) {
            write!(f, " {:?}", self.kind)?;
            for (i, literal) in self.body.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {:?}", literal)?;
            }
        }
        write!(f, ".")
    }
}

impl Debug for Program {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for rule in &self.rules {
            writeln!(f, "{:?}", rule)?;
        }
        Ok(())
    }
}

impl Debug for Outcome {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Unprovable => write!(f, "Unprovable"),
            Self::Provable(derivations) => f.debug_tuple("Provable").field(derivations).finish(),
        }
    }
}
