mod commands;
mod output;

use anyhow::Result;
use ceap_lib::Client;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ceap")]
#[command(about = "Consulta gastos CEAP dos deputados federais (dados abertos da Câmara)")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the deputy roster
    Deputados(commands::deputados::DeputadosArgs),
    /// Build the monthly CEAP compliance report for a bancada
    Bancada(commands::bancada::BancadaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ceap=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::new();

    match &cli.command {
        Commands::Deputados(args) => commands::deputados::run(args, &client, &format).await?,
        Commands::Bancada(args) => commands::bancada::run(args, &client, &format).await?,
    }

    Ok(())
}
