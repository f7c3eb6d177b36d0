use anyhow::Result;
use ceap_lib::validacao;
use ceap_lib::{Client, DeputadoQuery};
use clap::Args;

use crate::output::{print_deputados_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DeputadosArgs {
    /// Filter by state code (e.g. SP, RJ)
    #[arg(long)]
    pub uf: Option<String>,

    /// Filter by party acronym (e.g. PT, PL)
    #[arg(long)]
    pub partido: Option<String>,

    /// Filter by (partial) parliamentary name
    #[arg(long)]
    pub nome: Option<String>,
}

pub async fn run(args: &DeputadosArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = DeputadoQuery::default();

    if let Some(ref uf) = args.uf {
        let validated = validacao::validar_uf(uf)?;
        query = query.with_sigla_uf(&validated);
    }
    if let Some(ref partido) = args.partido {
        query = query.with_sigla_partido(partido);
    }
    if let Some(ref nome) = args.nome {
        query = query.with_nome(nome);
    }

    let deputados = client.fetch_all_deputados(&query).await?;

    match format {
        OutputFormat::Json => print_json(&deputados)?,
        OutputFormat::Table => print_deputados_table(&deputados),
    }

    Ok(())
}
