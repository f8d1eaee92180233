//! JSON encoding for vectors.
//!
//! A vector is encoded as a bare array of numbers, e.g. `[1.0,2.0,3.0]`.
//! Decoding re-validates the element count, so `[]` is rejected. Encoding
//! rejects NaN and infinite components, which JSON cannot represent.

use crate::{vector::Vector, Result, VectorError};
use anyhow::Context;
use std::io::{Read, Write};
use tracing::debug;

pub fn to_json(vector: &Vector) -> Result<String> {
    ensure_finite(vector)?;
    serde_json::to_string(vector).map_err(|e| VectorError::SerializationError(e.to_string()))
}

pub fn to_json_pretty(vector: &Vector) -> Result<String> {
    ensure_finite(vector)?;
    serde_json::to_string_pretty(vector)
        .map_err(|e| VectorError::SerializationError(e.to_string()))
}

pub fn from_json(json: &str) -> Result<Vector> {
    serde_json::from_str(json).map_err(|e| VectorError::SerializationError(e.to_string()))
}

pub fn write_json<W: Write>(vector: &Vector, writer: W) -> Result<()> {
    let json = to_json(vector)?;
    write_all(writer, json.as_bytes())
}

pub fn read_json<R: Read>(reader: R) -> Result<Vector> {
    from_json(&read_all(reader)?)
}

pub fn write_vectors<W: Write>(vectors: &[Vector], writer: W) -> Result<()> {
    for vector in vectors {
        ensure_finite(vector)?;
    }
    let json = serde_json::to_string_pretty(vectors)
        .map_err(|e| VectorError::SerializationError(e.to_string()))?;
    debug!(count = vectors.len(), bytes = json.len(), "writing vectors");
    write_all(writer, json.as_bytes())
}

pub fn read_vectors<R: Read>(reader: R) -> Result<Vec<Vector>> {
    let contents = read_all(reader)?;
    let vectors: Vec<Vector> = serde_json::from_str(&contents)
        .map_err(|e| VectorError::SerializationError(e.to_string()))?;
    debug!(count = vectors.len(), "read vectors");
    Ok(vectors)
}

// serde_json writes non-finite floats as `null`, which does not decode.
fn ensure_finite(vector: &Vector) -> Result<()> {
    match vector.iter().position(|v| !v.is_finite()) {
        Some(index) => {
            debug!(index, value = vector[index], "refusing to encode non-finite component");
            Err(VectorError::SerializationError(format!(
                "component {} is {}, which JSON cannot represent",
                index, vector[index]
            )))
        }
        None => Ok(()),
    }
}

fn write_all<W: Write>(mut writer: W, bytes: &[u8]) -> Result<()> {
    writer
        .write_all(bytes)
        .context("Failed to write vector JSON")?;
    writer.flush().context("Failed to flush vector JSON")?;
    Ok(())
}

fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .context("Failed to read vector JSON")?;
    Ok(contents)
}
