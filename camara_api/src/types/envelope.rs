//! The `{ dados, links }` envelope wrapping every API response.

use serde::{Deserialize, Serialize};

/// A hyperlink in a response's `links` array. Pagination is driven by the
/// entry whose `rel` is `"next"`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// One page of a paginated collection.
#[derive(Serialize, Deserialize, Debug)]
pub struct Pagina<T> {
    pub dados: Vec<T>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl<T> Pagina<T> {
    /// The href of the next page, if the API advertised one.
    pub fn proxima(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == "next")
            .map(|link| link.href.as_str())
    }
}

/// Envelope for single-resource endpoints, where `dados` is an object
/// rather than an array.
#[derive(Serialize, Deserialize, Debug)]
pub struct Resposta<T> {
    pub dados: T,
    #[serde(default)]
    pub links: Vec<Link>,
}
