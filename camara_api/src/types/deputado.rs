//! Deputy records returned by the `/deputados` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Roster entry returned by `GET /deputados`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Deputado {
    /// Stable numeric identifier assigned by the Chamber.
    pub id: i64,

    /// Parliamentary name.
    pub nome: String,

    /// Party acronym (e.g. "PT", "PL").
    pub sigla_partido: Option<String>,

    /// Two-letter state code of the deputy's bancada (uppercase).
    pub sigla_uf: String,

    /// Official portrait URL.
    pub url_foto: Option<String>,

    /// Institutional e-mail address.
    pub email: Option<String>,
}

/// Full profile returned by `GET /deputados/{id}`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeputadoDetalhe {
    pub id: i64,

    /// Civil (legal) name, as opposed to the parliamentary name.
    pub nome_civil: String,

    /// Current mandate status, nested under `ultimoStatus`.
    pub ultimo_status: UltimoStatus,

    pub cpf: Option<String>,

    pub sexo: Option<String>,

    pub data_nascimento: Option<NaiveDate>,

    /// State of birth, which may differ from the bancada's state.
    pub uf_nascimento: Option<String>,

    pub escolaridade: Option<String>,
}

/// The `ultimoStatus` block of a deputy profile.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UltimoStatus {
    pub nome: String,
    pub sigla_partido: Option<String>,
    pub sigla_uf: String,
    pub url_foto: Option<String>,
    /// Mandate condition, e.g. "Exercício".
    pub condicao_eleitoral: Option<String>,
    pub situacao: Option<String>,
}
