mod intent;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use leader_core::model::ContentCatalog;
use leader_core::{Grader, MATCH_CUTOFF, RandomSource};
use services::{Reply, SessionState, SkillError, SkillService};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::intent::Intent;

const BUNDLED_CATALOG: &str = include_str!("../assets/leadership_knowledge.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidCutoff { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidCutoff { raw } => {
                write!(f, "invalid --cutoff value (expected a number in (0, 1]): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  great-leader [--catalog <path>] [--seed <u64>] [--cutoff <0..1>]");
    eprintln!();
    eprintln!("Type 'tip', 'quiz', 'help' or 'stop'. Anything else is taken as an answer;");
    eprintln!("use 'answer a, b, c' to give several answers at once.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEADER_CATALOG, LEADER_SEED, LEADER_MATCH_CUTOFF, LEADER_LOG");
}

#[derive(Debug)]
struct Args {
    catalog: Option<PathBuf>,
    seed: Option<u64>,
    cutoff: f32,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog = std::env::var("LEADER_CATALOG").ok().map(PathBuf::from);
        let mut seed = match std::env::var("LEADER_SEED") {
            Ok(raw) => Some(parse_seed(raw)?),
            Err(_) => None,
        };
        let mut cutoff = match std::env::var("LEADER_MATCH_CUTOFF") {
            Ok(raw) => parse_cutoff(raw)?,
            Err(_) => MATCH_CUTOFF,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => catalog = Some(PathBuf::from(require_value(args, "--catalog")?)),
                "--seed" => seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--cutoff" => cutoff = parse_cutoff(require_value(args, "--cutoff")?)?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            seed,
            cutoff,
        })
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_cutoff(raw: String) -> Result<f32, ArgsError> {
    match raw.trim().parse::<f32>() {
        Ok(value) if value > 0.0 && value <= 1.0 => Ok(value),
        _ => Err(ArgsError::InvalidCutoff { raw }),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LEADER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<ContentCatalog, Box<dyn std::error::Error>> {
    let catalog = match path {
        Some(path) => ContentCatalog::from_path(path)?,
        None => ContentCatalog::from_json_str(BUNDLED_CATALOG)?,
    };
    info!(
        source = %path.map_or_else(|| "bundled".into(), |p| p.display().to_string()),
        tips = catalog.tips().len(),
        questions = catalog.quiz_questions().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn dispatch(
    service: &SkillService,
    state: &mut SessionState,
    intent: Intent,
) -> Result<Reply, SkillError> {
    match intent {
        Intent::GetNewTip => service.on_request_tip(state),
        Intent::PlayQuiz => service.on_start_quiz(state),
        Intent::Answer(answers) => Ok(service.on_submit_answers(state, answers)?.reply),
        Intent::Help => Ok(service.on_help()),
        Intent::Stop => Ok(service.on_stop()),
        Intent::Cancel => Ok(service.on_cancel()),
    }
}

fn render(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    writeln!(out, "{}", reply.speech)?;
    if let Some(card) = &reply.card {
        writeln!(out, "  [{}] {}", card.title, card.content)?;
    }
    out.flush()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = Arc::new(load_catalog(args.catalog.as_ref())?);
    let random = args
        .seed
        .map_or_else(RandomSource::default_source, RandomSource::seeded);
    let service = SkillService::new(catalog)
        .with_random(random)
        .with_grader(Grader::with_cutoff(args.cutoff));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (launch, mut state) = service.on_session_start();
    render(&mut out, &launch)?;

    for line in io::stdin().lock().lines() {
        let Some(intent) = Intent::parse(&line?) else {
            continue;
        };

        let reply = dispatch(&service, &mut state, intent)
            .unwrap_or_else(|err| service.on_error(&err));
        render(&mut out, &reply)?;
        if reply.end_session {
            break;
        }
    }

    service.on_session_end(state);
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_clean() {
        let catalog = ContentCatalog::from_json_str(BUNDLED_CATALOG).unwrap();
        assert!(!catalog.tips().is_empty());
        assert!(!catalog.quiz_questions().is_empty());
        assert!(catalog.lint().is_empty());
    }

    #[test]
    fn cutoff_must_be_a_ratio() {
        assert_eq!(parse_cutoff("0.9".into()).unwrap(), 0.9);
        assert!(parse_cutoff("0".into()).is_err());
        assert!(parse_cutoff("1.5".into()).is_err());
        assert!(parse_cutoff("high".into()).is_err());
    }

    #[test]
    fn answers_flow_through_dispatch() {
        let catalog = ContentCatalog::from_json_str(BUNDLED_CATALOG).unwrap();
        let service = SkillService::new(Arc::new(catalog)).with_random(RandomSource::seeded(4));
        let (_, mut state) = service.on_session_start();

        let reply = dispatch(&service, &mut state, Intent::Answer(vec!["x".into()])).unwrap();
        assert!(reply.speech.starts_with("There is no quiz question"));

        let reply = dispatch(&service, &mut state, Intent::Stop).unwrap();
        assert!(reply.end_session);
    }
}
