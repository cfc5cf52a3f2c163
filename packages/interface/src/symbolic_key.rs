use std::{fmt, str::FromStr};

use cosmwasm_std::{StdError, StdResult};
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

pub const SYMBOLIC_KEY_LENGTH: usize = 32;

/// Fixed-width identifier that stands in for a human readable name when resolving
/// protocol addresses and roles. Encoded in JSON as a lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolicKey([u8; SYMBOLIC_KEY_LENGTH]);

impl SymbolicKey {
    pub const ZERO: SymbolicKey = SymbolicKey([0u8; SYMBOLIC_KEY_LENGTH]);

    pub const fn new(bytes: [u8; SYMBOLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Derives the key as the SHA-256 digest of the given name.
    pub fn from_name(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());

        let mut bytes = [0u8; SYMBOLIC_KEY_LENGTH];
        bytes.copy_from_slice(&digest);

        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> StdResult<Self> {
        if bytes.len() != SYMBOLIC_KEY_LENGTH {
            return Err(StdError::generic_err(format!(
                "symbolic key must be {SYMBOLIC_KEY_LENGTH} bytes long, got {}",
                bytes.len()
            )));
        }

        let mut key = [0u8; SYMBOLIC_KEY_LENGTH];
        key.copy_from_slice(bytes);

        Ok(Self(key))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for SymbolicKey {
    type Err = StdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim_start_matches("0x"))
            .map_err(|e| StdError::generic_err(format!("invalid symbolic key {s}: {e}")))?;

        Self::from_slice(&bytes)
    }
}

impl fmt::Display for SymbolicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for SymbolicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolicKey({})", self.to_hex())
    }
}

impl Serialize for SymbolicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SymbolicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SymbolicKeyVisitor)
    }
}

struct SymbolicKeyVisitor;

impl de::Visitor<'_> for SymbolicKeyVisitor {
    type Value = SymbolicKey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex encoded 32 byte symbolic key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        SymbolicKey::from_str(v).map_err(E::custom)
    }
}

impl JsonSchema for SymbolicKey {
    fn schema_name() -> String {
        "SymbolicKey".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}
