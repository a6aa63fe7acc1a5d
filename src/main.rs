use clap::{Parser, Subcommand};
use portfolio_index::{config, generate, listing, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "portfolio-index")]
#[command(about = "Build a one-page HTML index of a portfolio repository")]
#[command(long_about = "\
Build a one-page HTML index of a portfolio repository

Every project directory with a README becomes a card on the page. Run without
a command to build.

Repository structure:

  portfolio/
  ├── portfolio.toml               # Optional config (see gen-config)
  ├── web/
  │   └── alpha/
  │       └── README.md            # → card \"Alpha\" in Web projects
  ├── mobile/
  │   └── weather-app/
  │       └── README.md
  ├── scripts/
  │   └── python/                  # Listed by list-scripts
  └── _site/
      └── index.html               # Generated page

README extraction:
  Title:       first `# ` heading → directory name
  Description: body of the `## Описание` section → placeholder

Logging goes to stderr; set RUST_LOG=debug to see skipped directories.")]
#[command(version = version_string())]
struct Cli {
    /// Repository root containing the category directories
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the categories and write the index page (default)
    Build,
    /// Scan and show what would be listed, without writing
    Check,
    /// Print the scan result as JSON
    Scan,
    /// List the script directories between banners
    ListScripts,
    /// Print a stock portfolio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.root)?;
            let result = scan::scan(&cli.root, &site_config)?;
            output::print_scan_output(&result, &site_config);
            println!();
            let generated_at = chrono::Local::now().naive_local();
            let output_path = generate::generate(&cli.root, &result, &site_config, generated_at)?;
            output::print_build_summary(&result, &output_path);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.root)?;
            println!("==> Checking {}", cli.root.display());
            let result = scan::scan(&cli.root, &site_config)?;
            output::print_scan_output(&result, &site_config);
        }
        Command::Scan => {
            let site_config = config::load_config(&cli.root)?;
            let result = scan::scan(&cli.root, &site_config)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::ListScripts => {
            let site_config = config::load_config(&cli.root)?;
            let listing = listing::list_scripts(&cli.root, &site_config)?;
            output::print_script_listing(&listing);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
