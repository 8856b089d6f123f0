// src/common/coerce.rs

// Conversão tolerante das entradas do formulário.
// Valores numéricos inválidos viram zero, datas inválidas viram "sem data".

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Lê os dígitos iniciais (como `parseInt`). Negativos e lixo viram 0.
pub fn parse_int_or_zero(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return 0;
    }

    // Só sobra overflow como falha possível: satura em vez de zerar.
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Lê o prefixo decimal (como `parseFloat`). Sem prefixo válido vira 0.
pub fn parse_decimal_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    let prefix = trimmed[..end].trim_end_matches('.');
    let prefix = prefix.strip_prefix('+').unwrap_or(prefix);

    Decimal::from_str(prefix).unwrap_or(Decimal::ZERO)
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}

// Os formulários JSON aceitam tanto números quanto texto.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Unsigned(u64),
    Float(f64),
    Text(String),
    Flag(bool),
}

fn loose_to_u32(value: Option<Loose>) -> u32 {
    match value {
        Some(Loose::Unsigned(n)) => u32::try_from(n).unwrap_or(u32::MAX),
        Some(Loose::Float(f)) if f.is_finite() && f > 0.0 => parse_int_or_zero(&f.to_string()),
        Some(Loose::Text(s)) => parse_int_or_zero(&s),
        _ => 0,
    }
}

fn loose_to_decimal(value: Option<Loose>) -> Decimal {
    match value {
        Some(Loose::Unsigned(n)) => Decimal::from(n),
        // `to_string` gera a menor representação exata ("99.99")
        Some(Loose::Float(f)) if f.is_finite() => parse_decimal_or_zero(&f.to_string()),
        Some(Loose::Text(s)) => parse_decimal_or_zero(&s),
        _ => Decimal::ZERO,
    }
}

/// Deserializers para `#[serde(deserialize_with = "...")]`.
pub mod lenient {
    use super::*;

    pub fn u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(loose_to_u32(Option::<Loose>::deserialize(deserializer)?))
    }

    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(loose_to_decimal(Option::<Loose>::deserialize(deserializer)?))
    }

    pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Loose>::deserialize(deserializer)? {
            Some(Loose::Text(s)) => parse_date(&s),
            _ => None,
        })
    }
}
