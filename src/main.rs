use std::process;

use apiurl::{ApiConfig, ApiUrl, ConfigError};
use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "apiurl",
    version,
    about = "Build absolute API URLs from the configured base address",
    long_about = r#"apiurl resolves the API base address from the environment (API_URL)
or a .env file and joins request paths onto it.

A single leading slash is stripped from each path before it is appended. No
separator is inserted, so the base should end with `/`.

Examples:
  1) Build URLs from the environment:
      API_URL=https://api.example.com/ apiurl build /users grades/12
  2) Override the base:
      apiurl build --base http://localhost:3000/api/ /auth/register
  3) Validate configuration:
      apiurl check-config --env-file .env.production
"#,
    after_help = "Use `apiurl <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build absolute URLs
    ///
    /// Print the absolute URL for each path, one per line. The base comes
    /// from API_URL unless `--base` is given.
    Build {
        /// Paths to append to the base
        #[arg(required = true)]
        paths: Vec<String>,
        /// Base URL to use instead of API_URL
        #[arg(long)]
        base: Option<String>,
        /// Print a JSON array of {path, url} objects
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration
    ///
    /// Check that every required environment variable is set and non-empty.
    /// Exits with status 1 and lists the missing variables otherwise.
    CheckConfig,
    /// Show resolved configuration
    ///
    /// Print the configuration that would be used by `build`, as a table or
    /// as JSON.
    ShowConfig {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct BuiltUrl<'a> {
    path: &'a str,
    url: String,
}

fn load_config_or_exit(env_file: Option<&str>) -> ApiConfig {
    match ApiConfig::load(env_file) {
        Ok(cfg) => cfg,
        Err(e) => exit_config_error(&e),
    }
}

fn exit_config_error(e: &ConfigError) -> ! {
    tracing::warn!(%e, "Configuration rejected");
    eprintln!("{}: {}", yansi::Paint::new("Invalid configuration").red(), e);
    process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to serialize output").red(), e);
            process::exit(1);
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let env_file = cli.env_file.as_deref();
    match cli.command {
        Commands::Build { paths, base, json } => {
            let api = match base {
                Some(base) => ApiUrl::new(base),
                None => ApiUrl::from(load_config_or_exit(env_file)),
            };
            if json {
                let built: Vec<BuiltUrl> = paths
                    .iter()
                    .map(|p| BuiltUrl { path: p, url: api.url(p) })
                    .collect();
                print_json(&built);
            } else {
                for p in &paths {
                    println!("{}", api.url(p));
                }
            }
        }
        Commands::CheckConfig => {
            let cfg = load_config_or_exit(env_file);
            println!(
                "{} (API_URL={})",
                yansi::Paint::new("Configuration looks valid").green(),
                cfg.api_url
            );
        }
        Commands::ShowConfig { json } => {
            let cfg = load_config_or_exit(env_file);
            if json {
                print_json(&cfg);
                return;
            }
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL);
            table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Variable", "Value"]);
            table.add_row(vec![apiurl::config::API_URL_VAR, cfg.api_url.as_str()]);
            println!("\n{table}");
        }
    }
}
