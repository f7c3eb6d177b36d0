//! CEAP monthly ceiling table, compliance classification, and money
//! arithmetic.

use std::fmt;

use camara_api::types::Despesa;
use serde::{Deserialize, Serialize};

/// Monthly CEAP allowance per UF, in reais, from the Chamber's regulatory
/// table (Ato da Mesa 43/2009, as updated). The ceiling grows with the
/// state's distance from Brasília, which is why DF sits at the bottom and
/// Roraima at the top.
pub const TETOS_CEAP: &[(&str, f64)] = &[
    ("AC", 44632.46),
    ("AL", 40944.10),
    ("AM", 43570.12),
    ("AP", 43374.78),
    ("BA", 39828.08),
    ("CE", 42451.77),
    ("DF", 30788.66),
    ("ES", 37423.91),
    ("GO", 35507.06),
    ("MA", 42151.69),
    ("MG", 36092.71),
    ("MS", 40542.84),
    ("MT", 39428.03),
    ("PA", 42227.45),
    ("PB", 42032.56),
    ("PE", 41676.80),
    ("PI", 40971.77),
    ("PR", 38871.86),
    ("RJ", 35759.97),
    ("RN", 42731.99),
    ("RO", 43672.49),
    ("RR", 45612.53),
    ("RS", 40875.90),
    ("SC", 39877.78),
    ("SE", 40139.26),
    ("SP", 37043.53),
    ("TO", 39503.61),
];

/// Looks up the monthly CEAP ceiling for a UF. Returns `None` for codes
/// outside the regulatory table (e.g. a deputy record with a blank or
/// foreign UF).
pub fn teto_ceap(uf: &str) -> Option<f64> {
    TETOS_CEAP
        .iter()
        .find(|(sigla, _)| sigla.eq_ignore_ascii_case(uf))
        .map(|(_, teto)| *teto)
}

/// Compliance status of one deputy's monthly CEAP total against their UF's
/// ceiling.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCeap {
    /// Total within the ceiling.
    Regular,
    /// Total exceeds the ceiling.
    Irregular,
    /// No ceiling is known for the deputy's UF.
    #[serde(rename = "Sem teto UF")]
    SemTetoUf,
}

impl fmt::Display for StatusCeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusCeap::Regular => "Regular",
            StatusCeap::Irregular => "Irregular",
            StatusCeap::SemTetoUf => "Sem teto UF",
        };
        f.write_str(s)
    }
}

/// Classifies a monthly total against a ceiling. Pure function of its
/// inputs.
pub fn classificar(total: f64, teto: Option<f64>) -> StatusCeap {
    match teto {
        None => StatusCeap::SemTetoUf,
        Some(teto) if total > teto => StatusCeap::Irregular,
        Some(_) => StatusCeap::Regular,
    }
}

/// Rounds to cent precision, half away from zero.
pub fn arredondar_centavos(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

/// Sums the net reimbursed amounts of a deputy's expense records, rounded
/// to centavos. Absent, non-finite, and negative line items are discarded
/// rather than subtracted, so the result is never below zero.
pub fn somar_despesas(despesas: &[Despesa]) -> f64 {
    let total: f64 = despesas
        .iter()
        .filter_map(|d| d.valor_liquido)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .sum();
    arredondar_centavos(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn despesa(valor_liquido: Option<f64>) -> Despesa {
        serde_json::from_value(serde_json::json!({
            "ano": 2024,
            "mes": 5,
            "valorLiquido": valor_liquido
        }))
        .unwrap()
    }

    #[test]
    fn classificacao_cobre_os_tres_status() {
        assert_eq!(
            classificar(50_000.0, Some(44632.46)),
            StatusCeap::Irregular
        );
        assert_eq!(classificar(40_000.0, Some(44632.46)), StatusCeap::Regular);
        assert_eq!(classificar(40_000.0, None), StatusCeap::SemTetoUf);
    }

    #[test]
    fn total_exatamente_no_teto_e_regular() {
        assert_eq!(classificar(44632.46, Some(44632.46)), StatusCeap::Regular);
    }

    #[test]
    fn tabela_cobre_as_27_ufs() {
        assert_eq!(TETOS_CEAP.len(), 27);
        assert_eq!(teto_ceap("RR"), Some(45612.53));
        assert_eq!(teto_ceap("df"), Some(30788.66), "lookup is case-insensitive");
        assert_eq!(teto_ceap("EX"), None);
        assert_eq!(teto_ceap(""), None);
    }

    #[test]
    fn arredondamento_e_metade_para_longe_de_zero() {
        assert_eq!(arredondar_centavos(20.005), 20.01);
        assert_eq!(arredondar_centavos(20.004), 20.0);
        assert_eq!(arredondar_centavos(-20.005), -20.01);
    }

    #[test]
    fn soma_arredonda_sem_deriva_de_ponto_flutuante() {
        let despesas = vec![despesa(Some(10.005)), despesa(Some(10.005))];
        assert_eq!(somar_despesas(&despesas), 20.01);

        // Thousands of cent-sized items must not accumulate drift.
        let muitas: Vec<Despesa> = (0..10_000).map(|_| despesa(Some(0.01))).collect();
        assert_eq!(somar_despesas(&muitas), 100.0);
    }

    #[test]
    fn soma_descarta_negativos_e_ausentes() {
        let despesas = vec![
            despesa(Some(100.0)),
            despesa(Some(-50.0)),
            despesa(None),
            despesa(Some(25.5)),
        ];
        assert_eq!(somar_despesas(&despesas), 125.5);
    }

    #[test]
    fn soma_de_lista_vazia_e_zero() {
        assert_eq!(somar_despesas(&[]), 0.0);
    }

    #[test]
    fn status_serializa_com_os_rotulos_da_api() {
        assert_eq!(
            serde_json::to_string(&StatusCeap::SemTetoUf).unwrap(),
            "\"Sem teto UF\""
        );
        assert_eq!(
            serde_json::to_string(&StatusCeap::Irregular).unwrap(),
            "\"Irregular\""
        );
        assert_eq!(StatusCeap::SemTetoUf.to_string(), "Sem teto UF");
    }
}
