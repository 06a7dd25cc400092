//! smart-coach: command line front end for `smart_coach`
//! =====================================================
//!
//! ```text
//! # One coaching call; the result is saved to history on success
//! $ smart-coach ask -b "We are a mid-size SaaS company and retention dropped 20%." \
//!                   -q "How do we improve retention?"
//!
//! # Background from a file, raw JSON out, nothing saved
//! $ smart-coach ask --background-file context.md -q "How do we grow?" --json --no-history
//!
//! # History
//! $ smart-coach history list
//! $ smart-coach history show <ID>
//! $ smart-coach history delete <ID>
//! $ smart-coach history clear
//!
//! $ smart-coach tips
//! ```
//!
//! The credential comes from `DEEPSEEK_API_KEY` (or a `.env` file) and the model id from
//! `DEEPSEEK_MODEL`, falling back to `deepseek-chat`.

mod hints;
mod render;
mod session;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use smart_coach::*;
use uuid::Uuid;

use render::{FailureView, ResultView, SessionLine, SessionView, Tips};
use session::{CoachingSession, JsonFileSessionStore, SessionStore};

#[derive(Debug, Parser)]
#[command(name = "smart-coach", version, about = "Turn a vague question into SMART questions")]
struct Cli {
    /// Session history file (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Ask the coach about one background and question
    Ask(AskArgs),

    /// Browse or edit saved sessions
    #[command(subcommand)]
    History(HistoryCmd),

    /// Show tips for writing the background and the question
    Tips,
}

#[derive(Debug, Args)]
struct AskArgs {
    /// Context for the question
    #[arg(
        long,
        short = 'b',
        required_unless_present = "background_file",
        conflicts_with = "background_file"
    )]
    background: Option<String>,

    /// Read the background from a file instead
    #[arg(long, value_name = "PATH")]
    background_file: Option<PathBuf>,

    /// The question to sharpen
    #[arg(long, short = 'q')]
    question: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Do not save the session
    #[arg(long)]
    no_history: bool,

    /// Override `DEEPSEEK_MODEL`
    #[arg(long)]
    model: Option<String>,

    /// Override the provider base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Subcommand)]
enum HistoryCmd {
    /// List sessions, newest first
    List,
    /// Show one session in full
    Show { id: Uuid },
    /// Delete one session
    Delete { id: Uuid },
    /// Delete every session
    Clear,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let store = match cli.store {
        Some(path) => JsonFileSessionStore::new(path),
        None => JsonFileSessionStore::default_location()?,
    };

    match cli.cmd {
        Cmd::Ask(args) => ask(args, &store).await,
        Cmd::History(cmd) => {
            history(cmd, &store)?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Tips => {
            print!("{}", Tips);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_coach(args: &AskArgs) -> Result<SmartCoach> {
    let mut builder = SmartCoach::deepseek().logger_name("smart_coach_cli");
    builder = match args.log_level {
        LogLevel::Off => builder.logging_enabled(false),
        LogLevel::Error => builder.log_level_error(),
        LogLevel::Warn => builder.log_level_warn(),
        LogLevel::Info => builder.log_level_info(),
        LogLevel::Debug => builder.log_level_debug(),
        LogLevel::Trace => builder.log_level_trace(),
    };
    if let Some(model) = &args.model {
        builder = builder.with_model(model);
    }
    if let Some(base_url) = &args.base_url {
        builder = builder.with_base_url(base_url);
    }
    Ok(builder.init()?)
}

async fn ask(args: AskArgs, store: &impl SessionStore) -> Result<ExitCode> {
    let background = match (&args.background, &args.background_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read background from {}", path.display()))?,
        (None, None) => anyhow::bail!("either --background or --background-file is required"),
    };

    for hint in hints::input_hints(&background, &args.question) {
        eprintln!("hint: {hint}");
    }

    let coach = build_coach(&args)?;
    let result = match coach
        .get_coaching_response(&background, &args.question)
        .await
    {
        Ok(result) => result,
        Err(error) => {
            eprint!(
                "{}",
                FailureView {
                    error: &error,
                    background: &background,
                    question: &args.question,
                }
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", ResultView(&result));
    }

    if !args.no_history {
        let session = CoachingSession::new(&background, &args.question, result);
        let id = session.id;
        store.record(session).context("failed to save session")?;
        if !args.json {
            println!("\nsaved as {id}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn history(cmd: HistoryCmd, store: &impl SessionStore) -> Result<()> {
    match cmd {
        HistoryCmd::List => {
            let sessions = store.load()?;
            if sessions.is_empty() {
                println!("No saved sessions.");
            }
            for session in &sessions {
                println!("{}", SessionLine(session));
            }
        }
        HistoryCmd::Show { id } => {
            let session = store
                .find(id)?
                .with_context(|| format!("no session with id {id}"))?;
            print!("{}", SessionView(&session));
        }
        HistoryCmd::Delete { id } => {
            if !store.delete(id)? {
                anyhow::bail!("no session with id {id}");
            }
            println!("Deleted {id}.");
        }
        HistoryCmd::Clear => {
            store.clear()?;
            println!("History cleared.");
        }
    }
    Ok(())
}
