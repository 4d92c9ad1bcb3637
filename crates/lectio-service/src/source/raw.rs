//! Raw liturgy record as published by the liturgy provider.
//!
//! The provider's payload is Portuguese-keyed and only partially populated
//! on many days. Every field is optional; a field holding an unexpected
//! shape is treated as absent rather than failing the whole record.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawLiturgy {
    #[serde(alias = "liturgia", deserialize_with = "lenient")]
    pub celebration: Option<String>,
    #[serde(alias = "cor", deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(alias = "leituras", deserialize_with = "lenient")]
    pub readings: RawReadings,
    #[serde(alias = "antifonas", deserialize_with = "lenient")]
    pub antiphons: RawAntiphons,
}

/// Reading lists per liturgical part. Vigils publish several per part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawReadings {
    #[serde(alias = "primeiraLeitura", deserialize_with = "one_or_many")]
    pub first_reading: Vec<RawReading>,
    #[serde(alias = "salmo", deserialize_with = "one_or_many")]
    pub psalm: Vec<RawReading>,
    #[serde(alias = "segundaLeitura", deserialize_with = "one_or_many")]
    pub second_reading: Vec<RawReading>,
    #[serde(alias = "evangelho", deserialize_with = "one_or_many")]
    pub gospel: Vec<RawReading>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawReading {
    #[serde(alias = "referencia", deserialize_with = "lenient")]
    pub reference: Option<String>,
    #[serde(alias = "titulo", deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(alias = "refrao", deserialize_with = "lenient")]
    pub refrain: Option<String>,
    #[serde(alias = "texto", deserialize_with = "lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawAntiphons {
    #[serde(alias = "entrada", deserialize_with = "lenient")]
    pub entrance: Option<String>,
    #[serde(alias = "comunhao", deserialize_with = "lenient")]
    pub communion: Option<String>,
}

/// Deserializes `T`, falling back to its default for null or any value of
/// another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Value(T),
        Other(IgnoredAny),
    }

    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => value,
        Lenient::Other(_) => T::default(),
    })
}

/// Accepts a list, a single object, or anything else as an empty list.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
        Other(IgnoredAny),
    }

    Ok(match OneOrMany::<T>::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
        OneOrMany::Other(_) => Vec::new(),
    })
}
