use anyhow::Context;
use clap::{Parser, Subcommand};
use medbook_core::config::resolve_data_file;
use medbook_core::constants::DATA_FILE_ENV;
use medbook_core::{CoreConfig, LogicManager};
use medbook_storage::YamlAddressBookStorage;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod session;

#[derive(Parser)]
#[command(name = "medbook")]
#[command(about = "MedBook patient and specialist record manager")]
struct Cli {
    /// Path to the YAML data file (overrides MEDBOOK_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Repl,
    /// Run a single command and exit
    Exec {
        /// Command text, e.g. `list -pa`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output on stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medbook=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let data_file = resolve_data_file(cli.data_file, std::env::var(DATA_FILE_ENV).ok());
    let cfg = CoreConfig::new(data_file)?;
    let storage = YamlAddressBookStorage::from_config(&cfg);
    let mut logic = LogicManager::load(storage)
        .with_context(|| format!("could not load {}", cfg.data_file().display()))?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => session::run_repl(&mut logic, io::stdin().lock(), io::stdout().lock()),
        Commands::Exec { text } => {
            session::run_once(&mut logic, &text.join(" "), &mut io::stdout().lock())
        }
    }
}
