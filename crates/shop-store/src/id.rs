//! Document identifiers.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Lowercase-hex encoding used for identifiers, salts, and digests.
pub(crate) fn encode_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // infallible on String
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// A 24-character lowercase-hex document identifier.
///
/// Always valid by construction: [`ObjectId::new`] draws 12 bytes of OS
/// entropy, and deserialization routes through [`ObjectId::parse`] so an
/// ill-shaped id is rejected at the boundary instead of silently stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(String);

impl ObjectId {
    pub const LEN: usize = 24;

    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        use rand_core::{OsRng, RngCore};
        let mut bytes = [0u8; Self::LEN / 2];
        OsRng.fill_bytes(&mut bytes);
        Self(encode_hex(&bytes))
    }

    /// Validate an existing identifier string.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let ok = raw.len() == Self::LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if ok {
            Ok(Self(raw.to_string()))
        } else {
            Err(StoreError::validation(format!(
                "invalid document id: {raw:?}"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Deserializes as a plain string, then routes through `parse` so invalid
// values are rejected at deserialization time — not silently accepted.
impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_the_token_shape() {
        let id = ObjectId::new();
        assert_eq!(id.as_str().len(), 24);
        assert!(id
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(ObjectId::new(), ObjectId::new());
    }

    #[test]
    fn parse_accepts_well_formed_ids() {
        assert!(ObjectId::parse("f398d576bcaf672382ff2ac6").is_ok());
    }

    #[test]
    fn parse_rejects_ill_formed_ids() {
        assert!(ObjectId::parse("short").is_err());
        assert!(ObjectId::parse("F398D576BCAF672382FF2AC6").is_err());
        assert!(ObjectId::parse("g398d576bcaf672382ff2ac6").is_err());
        assert!(ObjectId::parse("f398d576bcaf672382ff2ac65").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<ObjectId, _> = serde_json::from_str("\"f398d576bcaf672382ff2ac6\"");
        assert!(ok.is_ok());
        let bad: Result<ObjectId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(bad.is_err());
    }
}
