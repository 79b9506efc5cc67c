use defeasible::{Config, CycleHandling, Index, Outcome, Program, RuleType};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn stdin_to_string() -> std::io::Result<String> {
    use std::io::Read as _;
    let mut buffer = String::new();
    std::io::stdin().lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn timed<R>(func: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let r = func();
    (start.elapsed(), r)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut mode = RuleType::Defeasible;
    let mut config = Config::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => mode = RuleType::Strict,
            "--prune-cycles" => config = config.with_cycles(CycleHandling::Prune),
            other => {
                eprintln!("unknown argument `{other}`; expected --strict or --prune-cycles");
                return ExitCode::FAILURE;
            }
        }
    }

    let source = match stdin_to_string() {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read stdin: {err}");
            return ExitCode::FAILURE;
        }
    };
    let program = match Program::parse(&source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("PARSE ERROR {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(rule) = program.non_ground_rules().next() {
        eprintln!("ERROR: rule is not ground, ground it first:\n`{rule:?}`");
        return ExitCode::FAILURE;
    }
    println!("PROGRAM:\n{program:?}");

    let literals = program.sorted_literals();
    let index = Index::with_config(program.rules, config);
    for literal in &literals {
        println!("{literal:?}");
        let (dur, outcome) = timed(|| index.derive(literal, mode));
        tracing::debug!(?literal, ?dur, "derived");
        match outcome {
            Err(err) => println!("\terror: {err}"),
            Ok(Outcome::Unprovable) => println!("\timpossible"),
            Ok(Outcome::Provable(derivations)) if derivations.is_empty() => println!("\tempty"),
            Ok(Outcome::Provable(derivations)) => {
                for derivation in derivations {
                    let rendered: Vec<_> =
                        derivation.iter().map(|lit| format!("{lit:?}")).collect();
                    println!("\t{}", rendered.join(", "));
                }
            }
        }
        println!();
    }
    ExitCode::SUCCESS
}
