//! Typed access to the fields of a JSON request body.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

use crate::{Error, Result};

/// A parsed request body. Always a JSON object.
#[derive(Debug, Clone, Default)]
pub struct Fields(Map<String, Json>);

impl Fields {
    /// Parse raw body bytes. Anything but a JSON object is `InvalidBody`.
    pub fn parse(body: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<Json>(body) {
            Ok(Json::Object(map)) => Ok(Self(map)),
            _ => Err(Error::InvalidBody),
        }
    }

    /// `null` counts as absent.
    pub fn has(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|v| !v.is_null())
    }

    /// Fail with every required name listed if any one of them is absent.
    pub fn require(&self, names: &[&'static str]) -> Result<()> {
        if names.iter().all(|name| self.has(name)) {
            Ok(())
        } else {
            Err(Error::MissingFields(names.to_vec()))
        }
    }

    /// Deserialize a required field.
    pub fn get<T: DeserializeOwned>(&self, name: &'static str) -> Result<T> {
        self.get_opt(name)?.ok_or_else(|| Error::MissingFields(vec![name]))
    }

    /// Deserialize an optional field; absent or `null` is `Ok(None)`.
    pub fn get_opt<T: DeserializeOwned>(&self, name: &'static str) -> Result<Option<T>> {
        match self.0.get(name) {
            None | Some(Json::Null) => Ok(None),
            Some(raw) => T::deserialize(raw).map(Some).map_err(|e| Error::InvalidField {
                field: name,
                message: e.to_string(),
            }),
        }
    }
}
