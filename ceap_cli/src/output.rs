use anyhow::Result;
use ceap_lib::bancada::BancadaDataset;
use ceap_lib::types::Deputado;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct DeputadoRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Nome")]
    #[serde(rename = "Nome")]
    nome: String,
    #[tabled(rename = "Partido")]
    #[serde(rename = "Partido")]
    partido: String,
    #[tabled(rename = "UF")]
    #[serde(rename = "UF")]
    uf: String,
}

#[derive(Tabled, Serialize)]
struct BancadaRow {
    #[tabled(rename = "Nome")]
    #[serde(rename = "Nome")]
    nome: String,
    #[tabled(rename = "Partido")]
    #[serde(rename = "Partido")]
    partido: String,
    #[tabled(rename = "UF")]
    #[serde(rename = "UF")]
    uf: String,
    #[tabled(rename = "Total CEAP")]
    #[serde(rename = "Total CEAP")]
    total: String,
    #[tabled(rename = "Teto")]
    #[serde(rename = "Teto")]
    teto: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_deputados_table(deputados: &[Deputado]) {
    let rows: Vec<DeputadoRow> = deputados
        .iter()
        .map(|d| DeputadoRow {
            id: d.id,
            nome: d.nome.clone(),
            partido: d.sigla_partido.clone().unwrap_or_default(),
            uf: d.sigla_uf.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub fn print_bancada_table(dataset: &BancadaDataset) {
    let rows: Vec<BancadaRow> = dataset
        .deputados
        .iter()
        .map(|d| BancadaRow {
            nome: d.nome.clone(),
            partido: d.sigla_partido.clone().unwrap_or_default(),
            uf: d.sigla_uf.clone(),
            total: format_reais(d.total_ceap),
            teto: d
                .teto_ceap
                .map(format_reais)
                .unwrap_or_else(|| "-".to_string()),
            status: d.status.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));

    if !dataset.falhas.is_empty() {
        eprintln!(
            "aviso: {} deputado(s) sem dados nesta execução:",
            dataset.falhas.len()
        );
        for falha in &dataset.falhas {
            eprintln!("  {} ({}): {}", falha.nome, falha.id, falha.erro);
        }
    }
}

fn format_reais(valor: f64) -> String {
    format!("R$ {valor:.2}")
}
