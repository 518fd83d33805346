//! Vetrina - a terminal showcase browser
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vetrina::{ApiClient, Config};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    match parse_args()? {
        Command::Run => vetrina::app::run(),
        Command::Demo => vetrina::app::run_demo(),
        Command::Items => block_on(items_cli()),
        Command::Text { id } => block_on(text_cli(&id)),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Run,
    Demo,
    Items,
    Text { id: String },
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "--demo" | "demo" => Ok(Command::Demo),

        "items" => Ok(Command::Items),

        "text" => {
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing item id\nExample: vetrina text 1"))?
                .clone();
            Ok(Command::Text { id })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'vetrina --help' for usage"
        )),
    }
}

fn block_on<F>(future: F) -> Result<()>
where
    F: std::future::Future<Output = Result<()>>,
{
    tokio::runtime::Runtime::new()?.block_on(future)
}

async fn items_cli() -> Result<()> {
    let config = Config::load()?;
    let api = ApiClient::new(&config.base_url);

    let category = api.random_items().await?;

    println!("\n{}", category.title);
    println!("{}", "─".repeat(40));

    for item in &category.items {
        let image_marker = if item.image_path().is_some() {
            "  🖼"
        } else {
            ""
        };
        println!("  [{}] {} (#{}){}", item.id, item.name, item.color, image_marker);
    }

    Ok(())
}

async fn text_cli(id: &str) -> Result<()> {
    let config = Config::load()?;
    let api = ApiClient::new(&config.base_url);

    let text = api.item_text(id).await?;
    println!("{}", text.text);

    Ok(())
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
🗂 Vetrina - a terminal showcase browser

USAGE:
    vetrina                            Launch TUI
    vetrina [COMMAND]

COMMANDS:
    items                              Fetch and print a random collection
    text <id>                          Fetch and print one item's text
      Example:
        vetrina text 1

    demo                               Launch TUI with canned data (no network)

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Navigation
      j/↓           Move down
      k/↑           Move up
      g/G           Jump to top/bottom
      Enter         Open item detail
      Esc           Back to the list

    Actions
      r             Refresh / retry
      ?             Help
      q             Quit

CONFIG:
    {}

HOMEPAGE:
    {}
"#,
        vetrina::LOGO,
        config_path,
        vetrina::REPO_URL
    );
}

fn print_version() {
    println!("vetrina {}", vetrina::VERSION);
}
