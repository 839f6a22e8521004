use clap::{Parser, Subcommand};
use perpwire::domain::TradeIntent;
use perpwire::infrastructure::bootstrap::build_executor;
use perpwire::infrastructure::config::settings::Config;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "perpwire", version, about = "Open perpetual positions with market orders")]
struct Cli {
    /// Path to the TOML config file. Built-in defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one market order and print the result as JSON.
    Trade {
        #[arg(long)]
        symbol: String,
        /// "buy" opens a long; any other value opens a short unless strict_side is set.
        #[arg(long)]
        side: String,
        #[arg(long)]
        leverage: String,
        #[arg(long)]
        margin: String,
    },
    /// List supported symbols and their product ids.
    Symbols,
}

fn load_config(path: Option<&str>) -> perpwire::error::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::parse_toml(""),
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    match cli.command {
        Command::Symbols => {
            let table = match config.symbol_table() {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            for symbol in table.symbols() {
                if let Some(id) = table.get(symbol) {
                    println!("{symbol}\t{id}");
                }
            }
        }
        Command::Trade {
            symbol,
            side,
            leverage,
            margin,
        } => {
            let executor = match build_executor(&config) {
                Ok(e) => e,
                Err(e) => {
                    error!(error = %e, "Failed to initialize executor");
                    std::process::exit(1);
                }
            };

            let intent = TradeIntent::new(symbol, side, leverage, margin);
            match executor.execute(&intent).await {
                Ok(result) => match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!(error = %e, "Failed to render result");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    info!(retryable = e.is_retryable(), stage = %e.stage(), "Trade not submitted");
                    std::process::exit(1);
                }
            }
        }
    }
}
