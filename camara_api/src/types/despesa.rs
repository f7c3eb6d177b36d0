//! CEAP expense line items returned by `GET /deputados/{id}/despesas`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One reimbursement line item from a deputy's disclosed CEAP spending.
///
/// The upstream API is loose about monetary fields: depending on the
/// document they arrive as JSON numbers or numeric strings, and the
/// occasional row carries garbage. Monetary values therefore deserialize
/// through a tolerant coercion that maps anything non-numeric or
/// non-finite to `None` instead of failing the whole page.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Despesa {
    pub ano: i32,

    pub mes: u32,

    /// Expense category, e.g. "COMBUSTÍVEIS E LUBRIFICANTES.".
    pub tipo_despesa: Option<String>,

    pub cod_documento: Option<i64>,

    pub data_documento: Option<NaiveDateTime>,

    pub nome_fornecedor: Option<String>,

    pub cnpj_cpf_fornecedor: Option<String>,

    /// Face value of the supporting document.
    #[serde(default, deserialize_with = "valor_flexivel")]
    pub valor_documento: Option<f64>,

    /// Portion of the document value rejected by the Chamber's audit.
    #[serde(default, deserialize_with = "valor_flexivel")]
    pub valor_glosa: Option<f64>,

    /// Net reimbursed amount. This is the field CEAP totals are built from.
    #[serde(default, deserialize_with = "valor_flexivel")]
    pub valor_liquido: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValorBruto {
    Numero(f64),
    Texto(String),
}

/// Coerces a number-or-string monetary field, discarding non-finite and
/// unparseable values.
fn valor_flexivel<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let bruto = Option::<ValorBruto>::deserialize(deserializer)?;
    Ok(match bruto {
        Some(ValorBruto::Numero(v)) if v.is_finite() => Some(v),
        Some(ValorBruto::Texto(s)) => {
            s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    })
}
