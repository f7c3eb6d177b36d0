//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`Ordem`].

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination and sort order.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_pagina(mut self, pagina: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().pagina = pagina;
        self
    }

    /// Sets the number of results per page (`itens`).
    fn with_itens(mut self, itens: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().itens = Some(itens);
        self
    }

    /// Sets the sort order (ascending or descending).
    fn with_ordem(mut self, ordem: Ordem) -> Self
    where
        Self: Sized,
    {
        self.get_common().ordem = ordem;
        self
    }
}

/// Sort order for API results, serialized as `ASC`/`DESC`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Ordem {
    /// Ascending order. This is the default, for stable pagination.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Ordem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ordem::Asc => "ASC",
            Ordem::Desc => "DESC",
        }
    }
}

/// Fields shared by all query types: pagination and sort order.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub pagina: i64,
    /// Results per page. Defaults to 100, the API's maximum, to keep the
    /// number of pages (and therefore requests) low.
    pub itens: Option<i64>,
    /// Sort order. Defaults to ascending.
    pub ordem: Ordem,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            pagina: 1,
            itens: Some(100),
            ordem: Ordem::Asc,
        }
    }
}

impl QueryCommon {
    /// Appends the common pagination and ordering parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("pagina", &self.pagina.to_string());
        if let Some(itens) = self.itens {
            url.query_pairs_mut()
                .append_pair("itens", &itens.to_string());
        }
        url.query_pairs_mut().append_pair("ordem", self.ordem.as_str());
        url
    }
}
