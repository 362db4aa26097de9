use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::Clock;
use study_core::Catalog;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_FILTER: &str = "info,services=debug";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
    InvalidSeed { raw: String },
    InvalidExportDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => {
                write!(f, "invalid --mismatch-delay-ms value: {raw}")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidExportDir { raw } => write!(f, "invalid --export-dir value: {raw:?}"),
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

struct DesktopApp {
    catalog: Catalog,
    mismatch_delay: Duration,
    shuffle_seed: Option<u64>,
    export_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Catalog {
        self.catalog
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    mismatch_delay: Duration,
    seed: Option<u64>,
    export_dir: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--mismatch-delay-ms <ms>] [--seed <u64>] [--export-dir <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --mismatch-delay-ms {DEFAULT_MISMATCH_DELAY_MS}");
    eprintln!("  --seed (random shuffle)");
    eprintln!("  --export-dir .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_MISMATCH_DELAY_MS, STUDY_SEED, STUDY_EXPORT_DIR, RUST_LOG");
}

/// Parsed arguments, or `None` when usage was requested.
type Parsed = Option<Args>;

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut mismatch_delay = match env("STUDY_MISMATCH_DELAY_MS") {
            Some(raw) => parse_delay(raw)?,
            None => Duration::from_millis(DEFAULT_MISMATCH_DELAY_MS),
        };
        let mut seed = env("STUDY_SEED").map(parse_seed).transpose()?;
        let mut export_dir = match env("STUDY_EXPORT_DIR") {
            Some(raw) => parse_export_dir(raw)?,
            None => PathBuf::from("."),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mismatch-delay-ms" => {
                    mismatch_delay = parse_delay(require_value(args, "--mismatch-delay-ms")?)?;
                }
                "--seed" => {
                    seed = Some(parse_seed(require_value(args, "--seed")?)?);
                }
                "--export-dir" => {
                    export_dir = parse_export_dir(require_value(args, "--export-dir")?)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            mismatch_delay,
            seed,
            export_dir,
        }))
    }
}

fn parse_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_export_dir(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidExportDir { raw });
    }
    Ok(PathBuf::from(raw))
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    init_logging();

    let catalog = Catalog::builtin();
    let sizes = catalog.sizes();
    info!(
        flashcards = sizes.flashcards,
        quiz_items = sizes.quiz_items,
        memory_pairs = sizes.memory_pairs,
        mismatch_delay_ms = parsed.mismatch_delay.as_millis(),
        seed = ?parsed.seed,
        export_dir = %parsed.export_dir.display(),
        "starting study app"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        mismatch_delay: parsed.mismatch_delay,
        shuffle_seed: parsed.seed,
        export_dir: parsed.export_dir,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Somatoform Study")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Parsed, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Args::parse(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap().unwrap();
        assert_eq!(args.mismatch_delay, Duration::from_millis(1000));
        assert_eq!(args.seed, None);
        assert_eq!(args.export_dir, PathBuf::from("."));
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--mismatch-delay-ms", "250", "--seed", "9"],
            &[("STUDY_MISMATCH_DELAY_MS", "800"), ("STUDY_SEED", "1"), ("STUDY_EXPORT_DIR", "/tmp/out")],
        )
        .unwrap()
        .unwrap();
        assert_eq!(args.mismatch_delay, Duration::from_millis(250));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--seed", "3", "-h"], &[]).unwrap(), None);
    }

    #[test]
    fn bad_values_are_reported() {
        assert_eq!(
            parse(&["--seed", "abc"], &[]).unwrap_err(),
            ArgsError::InvalidSeed { raw: "abc".into() }
        );
        assert_eq!(
            parse(&["--mismatch-delay-ms"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--mismatch-delay-ms" }
        );
        assert_eq!(
            parse(&["--verbose"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert_eq!(
            parse(&[], &[("STUDY_MISMATCH_DELAY_MS", "soon")]).unwrap_err(),
            ArgsError::InvalidDelay { raw: "soon".into() }
        );
    }
}
