use clap::{Parser, Subcommand};
use meter_cli::format_status_table;
use meter_core::{DashboardConfig, ProviderManager};

#[derive(Parser)]
#[command(name = "meter")]
#[command(about = "AI Spend Dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll every provider once and show the snapshot
    Status,
    /// List the providers and their configured credential variables
    Providers,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => show_status(cli.json).await,
        Commands::Providers => show_providers(cli.json),
    }
}

async fn show_status(json: bool) {
    let manager = ProviderManager::new(meter_core::http_client());
    let config = DashboardConfig::from_env();
    let snapshot = manager.snapshot(&config).await;

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json_str) => println!("{}", json_str),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
    } else {
        print!("{}", format_status_table(&snapshot));
    }
}

fn show_providers(json: bool) {
    use meter_core::ProviderKind;

    if json {
        let listing: Vec<_> = ProviderKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "provider": kind,
                    "label": kind.label(),
                    "credentialVar": kind.credential_var(),
                })
            })
            .collect();
        match serde_json::to_string_pretty(&listing) {
            Ok(json_str) => println!("{}", json_str),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
    } else {
        for kind in ProviderKind::ALL {
            println!("{:<18} key: {}", kind.label(), kind.credential_var());
        }
    }
}
