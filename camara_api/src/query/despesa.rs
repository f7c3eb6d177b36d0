//! Query builder for the `/deputados/{id}/despesas` endpoint.

use url::Url;

use super::common::{Query, QueryCommon};

/// Sort field for expense queries, serialized into `ordenarPor`.
#[derive(Clone, Copy, Default, Debug)]
pub enum DespesaSortBy {
    /// Fiscal year. This is the default.
    #[default]
    Ano,
    /// Fiscal month.
    Mes,
    /// Document face value.
    ValorDocumento,
}

impl DespesaSortBy {
    fn as_str(&self) -> &'static str {
        match self {
            DespesaSortBy::Ano => "ano",
            DespesaSortBy::Mes => "mes",
            DespesaSortBy::ValorDocumento => "valorDocumento",
        }
    }
}

/// Query parameters for `GET /deputados/{id}/despesas`.
#[derive(Clone, Default, Debug)]
pub struct DespesaQuery {
    common: QueryCommon,
    ano: Option<i32>,
    mes: Option<u32>,
    ordenar_por: DespesaSortBy,
}

impl DespesaQuery {
    /// Restricts expenses to a fiscal year.
    pub fn with_ano(mut self, ano: i32) -> Self {
        self.ano = Some(ano);
        self
    }

    /// Restricts expenses to a fiscal month (1-12).
    pub fn with_mes(mut self, mes: u32) -> Self {
        self.mes = Some(mes);
        self
    }

    /// Sets the sort field.
    pub fn with_ordenar_por(mut self, ordenar_por: DespesaSortBy) -> Self {
        self.ordenar_por = ordenar_por;
        self
    }
}

impl Query for DespesaQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(ano) = self.ano {
            url.query_pairs_mut().append_pair("ano", &ano.to_string());
        }
        if let Some(mes) = self.mes {
            url.query_pairs_mut().append_pair("mes", &mes.to_string());
        }
        url.query_pairs_mut()
            .append_pair("ordenarPor", self.ordenar_por.as_str());
        url
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
