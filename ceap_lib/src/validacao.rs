//! Validation of user-supplied parameters before they reach the API.

use chrono::Datelike;

use crate::error::CeapError;

/// The 27 federative units, in the order the Chamber lists them.
pub const UFS: [&str; 27] = [
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB",
    "PE", "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];

/// CEAP disclosure data starts here.
const PRIMEIRO_ANO: i32 = 2008;

/// Validates and normalizes a UF code to uppercase.
pub fn validar_uf(uf: &str) -> Result<String, CeapError> {
    let normalizado = uf.trim().to_ascii_uppercase();
    if UFS.contains(&normalizado.as_str()) {
        Ok(normalizado)
    } else {
        Err(CeapError::InvalidInput(format!(
            "UF desconhecida: {uf:?} (esperado um código de duas letras, e.g. SP)"
        )))
    }
}

/// Validates a fiscal year against the disclosure window.
pub fn validar_ano(ano: i32) -> Result<i32, CeapError> {
    let atual = chrono::Utc::now().year();
    if (PRIMEIRO_ANO..=atual).contains(&ano) {
        Ok(ano)
    } else {
        Err(CeapError::InvalidInput(format!(
            "ano fora do intervalo de divulgação ({PRIMEIRO_ANO}-{atual}): {ano}"
        )))
    }
}

/// Validates a fiscal month.
pub fn validar_mes(mes: u32) -> Result<u32, CeapError> {
    if (1..=12).contains(&mes) {
        Ok(mes)
    } else {
        Err(CeapError::InvalidInput(format!("mês inválido: {mes}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uf_normaliza_para_maiusculas() {
        assert_eq!(validar_uf("sp").unwrap(), "SP");
        assert_eq!(validar_uf(" RJ ").unwrap(), "RJ");
    }

    #[test]
    fn uf_desconhecida_e_rejeitada() {
        assert!(validar_uf("XX").is_err());
        assert!(validar_uf("").is_err());
        assert!(validar_uf("São Paulo").is_err());
    }

    #[test]
    fn ano_fora_da_janela_e_rejeitado() {
        assert!(validar_ano(2024).is_ok());
        assert!(validar_ano(2007).is_err());
        assert!(validar_ano(9999).is_err());
    }

    #[test]
    fn mes_valido_e_um_a_doze() {
        assert!(validar_mes(1).is_ok());
        assert!(validar_mes(12).is_ok());
        assert!(validar_mes(0).is_err());
        assert!(validar_mes(13).is_err());
    }
}
