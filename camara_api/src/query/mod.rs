mod common;
mod deputado;
mod despesa;

pub use self::common::{Ordem, Query, QueryCommon};
pub use self::deputado::{DeputadoQuery, DeputadoSortBy};
pub use self::despesa::{DespesaQuery, DespesaSortBy};
