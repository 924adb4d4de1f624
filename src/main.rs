mod bootstrap;
mod commands;

use clap::{Parser, Subcommand};
use glossa_core::config;

#[derive(Parser)]
#[command(
    name = "glossa",
    version,
    about = "glossa — runtime string localization with language fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "glossa.toml")]
    config: String,

    /// Active locale tag (e.g. "fr-FR"). Overrides the config file.
    #[arg(short, long, env = "GLOSSA_LOCALE")]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the localized string for each key.
    Get {
        /// Keys to look up.
        #[arg(required = true)]
        keys: Vec<String>,
        /// Fail if any key has no translation.
        #[arg(long)]
        strict: bool,
    },
    /// List registered languages and their entry counts.
    Languages,
    /// List fallback-language keys that a language does not translate.
    Missing {
        /// Language to check. Omit to check every registered language.
        language: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.glossa.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = bootstrap::build_registry(&cfg, &cli.config, cli.locale.as_deref());

    match cli.command {
        Commands::Get { keys, strict } => {
            let out = commands::get(&registry, &keys);
            for line in &out.lines {
                println!("{line}");
            }
            if strict && out.missing > 0 {
                anyhow::bail!("{} of {} keys have no translation", out.missing, keys.len());
            }
        }
        Commands::Languages => {
            print!("{}", commands::languages(&registry));
        }
        Commands::Missing { language } => {
            print!("{}", commands::missing(&registry, language.as_deref()));
        }
    }

    Ok(())
}
