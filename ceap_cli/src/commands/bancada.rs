use std::time::Duration;

use anyhow::Result;
use ceap_lib::{build_bancada_dataset, BancadaParams, Client};
use clap::Args;

use crate::output::{print_bancada_table, print_json, OutputFormat};

#[derive(Args)]
pub struct BancadaArgs {
    /// Fiscal year (2008 onwards)
    #[arg(long)]
    pub ano: i32,

    /// Fiscal month (1-12)
    #[arg(long)]
    pub mes: u32,

    /// Restrict to one state's bancada (e.g. SP)
    #[arg(long)]
    pub uf: Option<String>,

    /// Concurrent expense fetches. The open data API has undocumented
    /// rate limits; raise this with care.
    #[arg(long, default_value = "3")]
    pub concurrency: usize,

    /// Delay in milliseconds after each deputy's aggregation
    #[arg(long, default_value = "150")]
    pub delay_ms: u64,
}

pub async fn run(args: &BancadaArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut params = BancadaParams::new(args.ano, args.mes)
        .with_limit(args.concurrency)
        .with_delay(Duration::from_millis(args.delay_ms));
    if let Some(ref uf) = args.uf {
        params = params.with_uf(uf);
    }

    let dataset = build_bancada_dataset(client, &params).await?;

    match format {
        OutputFormat::Json => print_json(&dataset)?,
        OutputFormat::Table => print_bancada_table(&dataset),
    }

    Ok(())
}
