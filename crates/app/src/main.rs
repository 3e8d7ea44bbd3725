use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lingo_core::model::{ExerciseType, Level, PracticeKey};
use services::{
    Clock, FallbackExerciseSource, HttpExerciseSource, PracticeConfig, PracticeLoopService,
    SpeechService,
};
use storage::{Storage, load_entries};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "services=info,storage=info,app=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLevel { raw: String },
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLevel { raw } => write!(f, "invalid --level value: {raw}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --language value: {raw:?}"),
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
    initial_key: PracticeKey,
    practice_loop: Arc<PracticeLoopService>,
    speech: SpeechService,
}

impl UiApp for DesktopApp {
    fn initial_key(&self) -> PracticeKey {
        self.initial_key.clone()
    }

    fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }

    fn speech(&self) -> SpeechService {
        self.speech.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--fallback <file.json>]");
    eprintln!("                      [--language <name>] [--level <A1..C2>] [--shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:5000");
    eprintln!("  --language Spanish");
    eprintln!("  --level A1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LINGO_API_BASE_URL, LINGO_API_KEY, LINGO_EXERCISE_MODEL,");
    eprintln!("  LINGO_REQUEST_TIMEOUT_SECS, LINGO_FALLBACK_PATH, LINGO_LANGUAGE, LINGO_LEVEL");
    eprintln!("  RUST_LOG (default {DEFAULT_LOG_FILTER})");
}

struct Args {
    config: PracticeConfig,
    shuffle: bool,
}

impl Args {
    /// Flags override whatever the environment provided.
    fn parse(
        mut config: PracticeConfig,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut shuffle = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => config.base_url = require_value(args, "--api-url")?,
                "--fallback" => {
                    config.fallback_path = Some(PathBuf::from(require_value(args, "--fallback")?));
                }
                "--language" => {
                    let value = require_value(args, "--language")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLanguage { raw: value });
                    }
                    config.language = value;
                }
                "--level" => {
                    let value = require_value(args, "--level")?;
                    config.level = value
                        .parse::<Level>()
                        .map_err(|_| ArgsError::InvalidLevel { raw: value.clone() })?;
                }
                "--shuffle" => shuffle = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { config, shuffle }))
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = PracticeConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(config, &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let Some(Args { config, shuffle }) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing();
    tracing::info!(base_url = %config.base_url, "starting lingo practice");

    let extra = match config.fallback_path.as_deref() {
        Some(path) => load_entries(path)?,
        None => Vec::new(),
    };
    let storage = Storage::builtin_with(extra)?;

    let remote = Arc::new(HttpExerciseSource::new(&config)?);
    let source = FallbackExerciseSource::new(remote, Arc::clone(&storage.fallback));
    let practice_loop = Arc::new(
        PracticeLoopService::new(Clock::system(), Arc::new(source)).with_shuffle_exercises(shuffle),
    );

    let initial_key = PracticeKey::parse(&config.language, ExerciseType::VocabularyMatch, config.level)
        .map_err(|_| ArgsError::InvalidLanguage {
            raw: config.language.clone(),
        })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        initial_key,
        practice_loop,
        speech: SpeechService::silent(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lingo Practice")
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
