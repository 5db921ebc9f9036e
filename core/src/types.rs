//! Core types for the ENOT SDK
//!
//! Defines the data model shared by the signing, transport and client layers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::EnotError;

/// Currencies accepted by the payment page
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
    Uah,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Rub, Currency::Usd, Currency::Eur, Currency::Uah];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Uah => "UAH",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

impl FromStr for Currency {
    type Err = EnotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnotError::InvalidCurrency(s.to_string()))
    }
}

/// Merchant credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub merchant_id: String,
    pub secret_word: String,
    pub api_key: String,
    pub email: String,
}

impl Credentials {
    pub fn new(
        merchant_id: impl Into<String>,
        secret_word: impl Into<String>,
        api_key: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret_word: secret_word.into(),
            api_key: api_key.into(),
            email: email.into(),
        }
    }
}

// Secrets never show up in logs or panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("secret_word", &"***")
            .field("api_key", &"***")
            .field("email", &self.email)
            .finish()
    }
}

/// 16-byte payment signature (MD5 digest)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 16]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Signature(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, EnotError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 16 {
            return Err(EnotError::InvalidSignature(format!(
                "expected 16 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes);
        Ok(Signature(arr))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

/// Ordered request parameters
///
/// Keys keep their insertion order. Inserting a key that is already present
/// replaces the value in place, so merging caller fields over defaults keeps
/// the defaults' positions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Overlay `other` on top of `self`
    pub fn merge(&mut self, other: Params) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Parse a `key=value` pair as given on a command line
    pub fn parse_pair(pair: &str) -> Result<(String, Value), EnotError> {
        let (key, value) = pair.split_once('=').ok_or_else(|| EnotError::InvalidParameter {
            key: pair.to_string(),
            reason: "expected key=value".to_string(),
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(EnotError::InvalidParameter {
                key: pair.to_string(),
                reason: "key must not be empty".to_string(),
            });
        }
        Ok((key.to_string(), Value::String(value.to_string())))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map)
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Decoded JSON object returned by the gateway
///
/// The gateway's payloads are not fixed by this SDK; callers read fields
/// directly or turn the document into their own type with
/// [`Document::deserialize_into`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new(map: Map<String, Value>) -> Self {
        Document(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, EnotError> {
        Ok(serde_json::from_value(Value::Object(self.0))?)
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    /// Fails with the original value when it is not a JSON object
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Document(map)),
            other => Err(other),
        }
    }
}
