//! Query builder for the `/deputados` roster endpoint.

use url::Url;

use super::common::{Query, QueryCommon};

/// Sort field for roster queries, serialized into `ordenarPor`.
#[derive(Clone, Copy, Default, Debug)]
pub enum DeputadoSortBy {
    /// Parliamentary name. This is the default.
    #[default]
    Nome,
    /// Numeric deputy id.
    Id,
    /// State code.
    SiglaUf,
}

impl DeputadoSortBy {
    fn as_str(&self) -> &'static str {
        match self {
            DeputadoSortBy::Nome => "nome",
            DeputadoSortBy::Id => "id",
            DeputadoSortBy::SiglaUf => "siglaUf",
        }
    }
}

/// Query parameters for `GET /deputados`.
#[derive(Clone, Default, Debug)]
pub struct DeputadoQuery {
    common: QueryCommon,
    sigla_uf: Option<String>,
    sigla_partido: Option<String>,
    nome: Option<String>,
    ordenar_por: DeputadoSortBy,
}

impl DeputadoQuery {
    /// Filters the roster by state code (e.g. "SP").
    pub fn with_sigla_uf(mut self, sigla_uf: &str) -> Self {
        self.sigla_uf = Some(sigla_uf.to_string());
        self
    }

    /// Filters the roster by party acronym (e.g. "PT").
    pub fn with_sigla_partido(mut self, sigla_partido: &str) -> Self {
        self.sigla_partido = Some(sigla_partido.to_string());
        self
    }

    /// Filters the roster by (partial) parliamentary name.
    pub fn with_nome(mut self, nome: &str) -> Self {
        self.nome = Some(nome.to_string());
        self
    }

    /// Sets the sort field.
    pub fn with_ordenar_por(mut self, ordenar_por: DeputadoSortBy) -> Self {
        self.ordenar_por = ordenar_por;
        self
    }
}

impl Query for DeputadoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(ref sigla_uf) = self.sigla_uf {
            url.query_pairs_mut().append_pair("siglaUf", sigla_uf);
        }
        if let Some(ref sigla_partido) = self.sigla_partido {
            url.query_pairs_mut()
                .append_pair("siglaPartido", sigla_partido);
        }
        if let Some(ref nome) = self.nome {
            url.query_pairs_mut().append_pair("nome", nome);
        }
        url.query_pairs_mut()
            .append_pair("ordenarPor", self.ordenar_por.as_str());
        url
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
