//! Typed client for the Câmara dos Deputados open data API
//! (`https://dadosabertos.camara.leg.br/api/v2`).
//!
//! Every request runs under a hard timeout and a bounded exponential-backoff
//! retry loop for rate-limit and transport failures. Paginated collections
//! are materialized by following the `rel == "next"` link convention of the
//! API's response envelope.

mod client;
mod errors;
mod query;
mod retry;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    DeputadoQuery, DeputadoSortBy, DespesaQuery, DespesaSortBy, Ordem, Query,
};
pub use self::retry::RetryPolicy;
