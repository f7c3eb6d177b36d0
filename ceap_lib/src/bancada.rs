//! Assembly of the bancada compliance dataset: roster traversal, per-deputy
//! expense aggregation, and ceiling classification.

use std::time::Duration;

use camara_api::{Client, DeputadoQuery, DespesaQuery};
use serde::Serialize;

use crate::error::CeapError;
use crate::fan_out::{map_limit, FanOutConfig};
use crate::teto::{classificar, somar_despesas, teto_ceap, StatusCeap};
use crate::validacao::{validar_ano, validar_mes, validar_uf};

/// Parameters for one dataset build. Concurrency defaults to 3 workers
/// with a 150ms politeness delay; the open data API publishes no rate
/// limits, so the defaults stay deliberately gentle, but both knobs are
/// configurable.
#[derive(Clone, Debug)]
pub struct BancadaParams {
    pub ano: i32,
    pub mes: u32,
    /// Optional UF filter for the roster.
    pub uf: Option<String>,
    pub limit: usize,
    pub delay: Duration,
}

impl BancadaParams {
    pub fn new(ano: i32, mes: u32) -> Self {
        Self {
            ano,
            mes,
            uf: None,
            limit: 3,
            delay: Duration::from_millis(150),
        }
    }

    pub fn with_uf(mut self, uf: &str) -> Self {
        self.uf = Some(uf.to_string());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One deputy's row in the compliance dataset.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeputadoComCeap {
    pub id: i64,
    pub nome: String,
    pub sigla_partido: Option<String>,
    pub sigla_uf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_foto: Option<String>,
    pub ano: i32,
    pub mes: u32,
    /// Sum of valid net amounts for the period, in reais, cent precision.
    pub total_ceap: f64,
    /// The UF's monthly allowance, absent when the UF is not in the table.
    pub teto_ceap: Option<f64>,
    pub status: StatusCeap,
}

/// A deputy whose expense aggregation failed after the client's retries.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FalhaDeputado {
    pub id: i64,
    pub nome: String,
    pub erro: String,
}

/// The dataset plus the deputies that could not be aggregated. Callers
/// decide whether failures merit surfacing; the rows stand on their own.
#[derive(Serialize, Debug)]
pub struct BancadaDataset {
    pub deputados: Vec<DeputadoComCeap>,
    pub falhas: Vec<FalhaDeputado>,
}

/// Builds the bancada compliance dataset for a year/month.
///
/// The roster fetch is fatal on failure. The per-deputy fan-out is not:
/// a deputy whose expenses cannot be fetched lands in `falhas` and the
/// remaining rows are returned anyway. Rows are sorted by deputy id;
/// fan-out completion order is meaningless.
pub async fn build_bancada_dataset(
    client: &Client,
    params: &BancadaParams,
) -> Result<BancadaDataset, CeapError> {
    validar_ano(params.ano)?;
    validar_mes(params.mes)?;

    let mut query = DeputadoQuery::default();
    if let Some(ref uf) = params.uf {
        let uf = validar_uf(uf)?;
        query = query.with_sigla_uf(&uf);
    }

    let mut roster = client.fetch_all_deputados(&query).await?;
    // Page boundaries can duplicate a row; the dataset is keyed by id.
    roster.sort_by_key(|d| d.id);
    roster.dedup_by_key(|d| d.id);

    tracing::info!(deputados = roster.len(), ano = params.ano, mes = params.mes, "roster carregado");

    // Kept aside so failures can be attributed to a deputy by index.
    let resumo: Vec<(i64, String)> = roster
        .iter()
        .map(|d| (d.id, d.nome.clone()))
        .collect();

    let ano = params.ano;
    let mes = params.mes;
    let worker = {
        let client = client.clone();
        move |dep: camara_api::types::Deputado, _index: usize| {
            let client = client.clone();
            async move {
                let despesas = client
                    .fetch_all_despesas(
                        dep.id,
                        &DespesaQuery::default().with_ano(ano).with_mes(mes),
                    )
                    .await?;
                let total_ceap = somar_despesas(&despesas);
                let teto = teto_ceap(&dep.sigla_uf);
                let status = classificar(total_ceap, teto);
                Ok::<DeputadoComCeap, camara_api::Error>(DeputadoComCeap {
                    id: dep.id,
                    nome: dep.nome,
                    sigla_partido: dep.sigla_partido,
                    sigla_uf: dep.sigla_uf,
                    url_foto: dep.url_foto,
                    ano,
                    mes,
                    total_ceap,
                    teto_ceap: teto,
                    status,
                })
            }
        }
    };

    let config = FanOutConfig {
        limit: params.limit,
        delay: params.delay,
    };
    let outcome = map_limit(roster, config, worker).await;

    let mut deputados: Vec<DeputadoComCeap> =
        outcome.results.into_iter().map(|(_, row)| row).collect();
    deputados.sort_by_key(|row| row.id);

    let falhas: Vec<FalhaDeputado> = outcome
        .failures
        .into_iter()
        .map(|falha| {
            let (id, nome) = resumo[falha.index].clone();
            FalhaDeputado {
                id,
                nome,
                erro: falha.error.to_string(),
            }
        })
        .collect();

    tracing::info!(
        deputados = deputados.len(),
        falhas = falhas.len(),
        "bancada dataset montado"
    );

    Ok(BancadaDataset { deputados, falhas })
}
