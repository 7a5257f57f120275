//! LinkTree CLI
//!
//! Command-line interface for LinkTree profiles:
//! - Create a profile with links
//! - View a profile
//! - Show the signing address
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use linktree::config::{generate_default_config, Config};
use linktree::profile::{Link, Profile, ProfileDraft, ProfileService, Theme};
use linktree::wallet::{short_address, Wallet};
use linktree::SuiRpcClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "linktree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Link-in-bio profiles on the Sui ledger")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a profile
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Short biography
        #[arg(short, long)]
        bio: String,
        /// IPFS CID of the avatar image
        #[arg(short, long, default_value = "")]
        avatar_cid: String,
        /// Theme (dark, light, custom)
        #[arg(short, long, default_value = "dark")]
        theme: String,
        /// Links in label=url format, added in order
        #[arg(short, long = "link")]
        links: Vec<String>,
    },

    /// View a profile
    View {
        /// Profile object id (0x...)
        id: String,
    },

    /// Show the signing address
    Address,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        config,
        format,
    } = cli;

    match command {
        Commands::Create {
            name,
            bio,
            avatar_cid,
            theme,
            links,
        } => {
            let config = setup(config.as_deref())?;
            let links = links
                .iter()
                .map(|pair| {
                    Link::parse_pair(pair).with_context(|| format!("invalid link '{}'", pair))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            let draft = ProfileDraft {
                name,
                avatar_cid,
                bio,
                theme: Theme::from(theme.as_str()),
                links,
            };
            create(&config, &draft, &format).await
        }
        Commands::View { id } => {
            let config = setup(config.as_deref())?;
            view(&config, &id, &format).await
        }
        Commands::Address => {
            let config = setup(config.as_deref())?;
            address(&config, &format)
        }
        Commands::Config { output } => write_config(output.as_deref()),
    }
}

/// Load config and install a quiet logger unless a level was asked for
fn setup(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = load_config(path)?;

    let mut logging = config.logging.clone();
    if std::env::var("RUST_LOG").is_err() && std::env::var("LINKTREE_LOG_LEVEL").is_err() {
        logging.level = "warn".to_string();
    }
    linktree::logging::init(&logging).context("failed to initialize logging")?;

    Ok(config)
}

async fn create(config: &Config, draft: &ProfileDraft, format: &str) -> anyhow::Result<()> {
    draft.validate()?;

    let wallet = Wallet::load(&config.wallet)?;
    let service = profile_service(config)?;

    eprintln!("Connected: {}", short_address(wallet.address()));
    eprintln!("Creating profile...");

    let outcome = service.create(Some(&wallet), draft).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        _ => {
            println!("{}", outcome.message());
            println!();
            println!("Digest: {}", outcome.digest);
            for failure in &outcome.link_failures {
                println!(
                    "  skipped {} ({}): {}",
                    failure.link.label, failure.link.url, failure.error
                );
            }
        }
    }

    Ok(())
}

async fn view(config: &Config, id: &str, format: &str) -> anyhow::Result<()> {
    let service = profile_service(config)?;
    let profile = service.fetch(id).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&profile)?),
        _ => print_profile(&profile, &config.contract.ipfs_gateway),
    }

    Ok(())
}

fn address(config: &Config, format: &str) -> anyhow::Result<()> {
    let wallet = Wallet::load(&config.wallet)?;

    match format {
        "json" => println!(
            "{}",
            serde_json::json!({
                "address": wallet.address(),
                "short_address": short_address(wallet.address()),
            })
        ),
        _ => println!("{}", wallet.address()),
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("failed to load config from {:?}", path)),
        None => Ok(Config::load_default()),
    }
}

fn profile_service(config: &Config) -> anyhow::Result<ProfileService> {
    let ledger = SuiRpcClient::new(config.network.clone(), config.contract.gas_budget)?;
    Ok(ProfileService::new(Arc::new(ledger), config.contract.clone()))
}

fn write_config(output: Option<&Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if path.exists() {
                bail!("{:?} already exists", path);
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

fn print_profile(profile: &Profile, gateway: &str) {
    println!("{}", profile.name);
    println!("{}", "-".repeat(profile.name.chars().count().max(20)));
    println!("{}", profile.bio);
    println!();

    if let Some(url) = profile.avatar_url(gateway) {
        println!("{:<10} {}", "Avatar", url);
    }
    println!("{:<10} {}", "Theme", profile.theme);
    println!();

    if profile.links.is_empty() {
        println!("No links added yet");
    } else {
        let width = profile
            .links
            .iter()
            .map(|l| l.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);
        println!("{:<width$}  {}", "Label", "URL", width = width);
        println!("{}", "-".repeat(width + 40));
        for link in &profile.links {
            println!("{:<width$}  {}", link.label, link.url, width = width);
        }
    }

    println!();
    println!("Profile ID: {}", profile.id);
    println!("Last updated: {}", profile.updated_at_display());
}
