// src/shared/decimal.rs

//! Valores monetários trafegam como números JSON (`350.0`), não como strings.
//! Use com `#[serde(with = "crate::shared::decimal")]`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(valor: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Parte do texto decimal: o f64 resultante é o mais próximo e imprime os mesmos dígitos
    let texto = valor.to_string();
    match texto.parse::<f64>() {
        Ok(numero) if numero.is_finite() => serializer.serialize_f64(numero),
        _ => serializer.serialize_str(&texto),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    // Aceita também texto ("350.00"), comum em formulários
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entrada {
        Numero(serde_json::Number),
        Texto(String),
    }

    let texto = match Entrada::deserialize(deserializer)? {
        Entrada::Numero(numero) => numero.to_string(),
        Entrada::Texto(texto) => texto,
    };
    BigDecimal::from_str(texto.trim()).map_err(de::Error::custom)
}
