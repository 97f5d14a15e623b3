//! Vector encodings used by the store.
//!
//! Catalog embeddings are stored as little-endian f32 BLOBs; cached query
//! vectors as JSON arrays, the form handed back as a search argument.

use menagerie_core::{Error, Result};
use ndarray::Array1;

/// Encode a vector as little-endian f32 bytes.
pub fn encode_f32_blob(vector: &[f32]) -> Vec<u8> {
    vector.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Decode little-endian f32 bytes.
pub fn decode_f32_blob(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::Storage(format!(
            "Embedding blob length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Encode a vector as a JSON array string.
pub fn encode_json(vector: &[f32]) -> Result<String> {
    Ok(serde_json::to_string(vector)?)
}

/// Decode a JSON array string into a vector.
pub fn decode_json(text: &str) -> Result<Vec<f32>> {
    Ok(serde_json::from_str(text)?)
}

/// Scale to unit length. Returns None for (near) zero vectors.
pub fn l2_normalize(vector: Array1<f32>) -> Option<Array1<f32>> {
    let norm = vector.dot(&vector).sqrt();
    if !norm.is_finite() || norm < 1e-9 {
        return None;
    }
    Some(vector / norm)
}
