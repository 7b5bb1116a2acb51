//! Identifier Generation
//!
//! Produces the short random handles flags are stored under.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// URL-safe alphabet, 64 symbols so every random byte maps without bias.
const ALPHABET: &[u8; 64] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 21;

/// Failure to produce an identifier.
#[derive(Error, Debug)]
#[error("failed to generate id: {0}")]
pub struct IdError(pub String);

/// Source of unique, unguessable flag identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<String, IdError>;
}

/// Nano ID style generator backed by the operating system RNG.
#[derive(Debug, Clone)]
pub struct NanoIdGenerator {
    length: usize,
}

impl NanoIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> Result<String, IdError> {
        let mut bytes = vec![0u8; self.length];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| IdError(e.to_string()))?;

        Ok(bytes
            .iter()
            .map(|b| ALPHABET[(b & 63) as usize] as char)
            .collect())
    }
}
