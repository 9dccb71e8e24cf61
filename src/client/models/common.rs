//! Shared response shapes and field helpers

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Plain acknowledgement returned by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

/// One field of a partial update
///
/// Update endpoints only touch the fields present in the body, so a field can
/// be left alone ([`Patch::Keep`], omitted from the JSON), cleared
/// ([`Patch::Clear`], sent as `null`) or given a value ([`Patch::Set`]).
/// Pair it with `#[serde(default, skip_serializing_if = "Patch::is_keep")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// The value this patch writes, `None` for both `Keep` and `Clear`
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Keep | Patch::Clear => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
        }
    }
}

/// A present field is `Clear` when `null` and `Set` otherwise; an absent one
/// falls back to `Keep` through `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

/// Deserialize a monetary amount sent either as a JSON number or as a
/// decimal string (`"1299.00"`).
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountValue {
        Number(f64),
        Text(String),
    }

    match Option::<AmountValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AmountValue::Number(n)) => Ok(Some(n)),
        Some(AmountValue::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(AmountValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{}': {}", s, e))),
    }
}
