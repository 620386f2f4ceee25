//! Field-by-field binary stream.
//!
//! Each primitive is encoded with bincode's default options: fixed-width
//! little-endian integers and floats, `bool` as one byte, strings as a `u64`
//! length followed by UTF-8 bytes.

use std::io::{Read, Write};

use bincode::Options;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::PersistenceError;

/// Writes primitives to an underlying [`Write`].
pub struct StreamWriter<W> {
    inner: W,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), PersistenceError> {
        self.put(&value)
    }

    pub fn write_f32(&mut self, value: f32) -> Result<(), PersistenceError> {
        self.put(&value)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), PersistenceError> {
        self.put(&value)
    }

    pub fn write_str(&mut self, value: &str) -> Result<(), PersistenceError> {
        if value.len() as u64 > MAX_STRING_LEN {
            return Err(PersistenceError::Malformed(format!(
                "string of {} bytes exceeds {MAX_STRING_LEN}",
                value.len()
            )));
        }
        self.put(value)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn put<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), PersistenceError> {
        bincode::serialize_into(&mut self.inner, value)?;
        Ok(())
    }
}

/// Longest string a stream may carry, in bytes.
pub const MAX_STRING_LEN: u64 = 4096;

/// Length prefix of an encoded string.
const LEN_PREFIX: u64 = 8;

/// Reads primitives written by [`StreamWriter`].
///
/// Every read is bounded, so a corrupt length prefix fails with
/// [`PersistenceError::Codec`] instead of allocating.
pub struct StreamReader<R> {
    inner: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn read_i32(&mut self) -> Result<i32, PersistenceError> {
        self.take()
    }

    pub fn read_f32(&mut self) -> Result<f32, PersistenceError> {
        self.take()
    }

    pub fn read_bool(&mut self) -> Result<bool, PersistenceError> {
        self.take()
    }

    pub fn read_string(&mut self) -> Result<String, PersistenceError> {
        self.take()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn take<T: DeserializeOwned>(&mut self) -> Result<T, PersistenceError> {
        Ok(bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .with_limit(LEN_PREFIX + MAX_STRING_LEN)
            .deserialize_from(&mut self.inner)?)
    }
}
