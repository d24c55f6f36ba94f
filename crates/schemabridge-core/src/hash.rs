//! Content fingerprints for row types.
//!
//! A fingerprint is blake3 over the serde JSON encoding, so two rows hash
//! equal exactly when names, types, nullability and order all match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Lowercase hex, 64 chars.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn hash_serde<T: Serialize>(v: &T) -> Result<Hash256> {
    let encoded = serde_json::to_vec(v)?;
    Ok(digest(&encoded))
}

fn digest(bytes: &[u8]) -> Hash256 {
    Hash256(*blake3::hash(bytes).as_bytes())
}
