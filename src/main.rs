//! Snippetbox CLI - serve and inspect short-lived text snippets

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use snippetbox::commands;
use snippetbox::config::{self, SnippetboxConfig, ServeSettings};
use snippetbox::output::OutputMode;
use snippetbox::SnippetStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "snippetbox")]
#[command(version)]
#[command(about = "Snippetbox - share short-lived text snippets over the web")]
#[command(long_about = r#"
Snippetbox stores titled text snippets that disappear after 1, 7 or 365 days.

Example usage:
  snippetbox init
  snippetbox serve --addr localhost:4000 --dsn snippetbox.db
  snippetbox create --title "Hello" --content "World" --expires 7
  snippetbox latest
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Print command results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web application
    Serve {
        /// HTTP network address
        #[arg(long)]
        addr: Option<String>,

        /// SQLite database path or file: URI
        #[arg(long)]
        dsn: Option<String>,

        /// Maximum number of pooled database connections
        #[arg(long)]
        pool_size: Option<u32>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Create a snippet
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short = 'b', long)]
        content: String,

        /// Lifetime in days (1, 7 or 365)
        #[arg(short, long, default_value = "365")]
        expires: i64,

        /// SQLite database path or file: URI
        #[arg(long)]
        dsn: Option<String>,
    },

    /// Show a snippet by id
    View {
        id: i64,

        /// SQLite database path or file: URI
        #[arg(long)]
        dsn: Option<String>,
    },

    /// List the most recent snippets
    Latest {
        /// SQLite database path or file: URI
        #[arg(long)]
        dsn: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let output_mode = OutputMode::from_flag(cli.json);
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Serve { addr, dsn, pool_size, static_dir } => {
            let overrides = SnippetboxConfig { addr, dsn, pool_size, static_dir };
            commands::run_serve(overrides, config_path)
        }

        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(config::default_config_path);
            commands::run_init(&path, force, output_mode)
        }

        Commands::Create { title, content, expires, dsn } => {
            open_store(dsn, config_path)
                .and_then(|store| commands::run_create(&store, title, content, expires, output_mode))
        }

        Commands::View { id, dsn } => {
            open_store(dsn, config_path)
                .and_then(|store| commands::run_view(&store, id, output_mode))
        }

        Commands::Latest { dsn } => {
            open_store(dsn, config_path)
                .and_then(|store| commands::run_latest(&store, output_mode))
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if output_mode.is_human() => {
            snippetbox::ui::error(&format!("{:#}", e));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

/// Open the store for a one-off command, resolving the DSN like `serve` does.
fn open_store(dsn: Option<String>, config_path: Option<&std::path::Path>) -> anyhow::Result<SnippetStore> {
    let file = config::load_config(config_path)?;
    let settings = ServeSettings::resolve(SnippetboxConfig { dsn, ..Default::default() }, file);

    config::ensure_db_dir(&settings.dsn)?;
    tracing::debug!(dsn = %settings.dsn, "Opening database");
    Ok(SnippetStore::open(&settings.dsn, 1)?)
}
