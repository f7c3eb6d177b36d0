//! Domain layer for CEAP spending compliance: bounded-concurrency fan-out
//! over the deputy roster, per-UF ceiling lookup, and the bancada dataset
//! assembly pipeline.
//!
//! Wraps the [`camara_api`] client. The central failure-handling decision
//! lives in [`fan_out`]: one deputy's aggregation failing never aborts the
//! batch; failures are reported alongside the successful rows.

pub mod bancada;
pub mod error;
pub mod fan_out;
pub mod teto;
pub mod validacao;

pub use camara_api;
pub use camara_api::types;
pub use camara_api::{Client, DeputadoQuery, DespesaQuery, Ordem, Query};

pub use bancada::{
    build_bancada_dataset, BancadaDataset, BancadaParams, DeputadoComCeap, FalhaDeputado,
};
pub use error::CeapError;
pub use fan_out::{map_limit, FanOutConfig, FanOutFailure, FanOutOutcome};
pub use teto::{arredondar_centavos, classificar, somar_despesas, teto_ceap, StatusCeap};
