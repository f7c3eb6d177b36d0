//! Response envelope and domain types returned by the open data API.

mod deputado;
mod despesa;
mod envelope;

pub use self::deputado::{Deputado, DeputadoDetalhe, UltimoStatus};
pub use self::despesa::Despesa;
pub use self::envelope::{Link, Pagina, Resposta};
