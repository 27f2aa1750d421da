//! Snapshot - Save/Load Generator State
//!
//! Compact binary serialization of the full generator state, for embedding
//! applications that persist or transmit a stream position and resume it
//! later.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the exact output
//!   sequence of the generator it was saved from
//! - **Atomicity**: A failed load leaves the target generator untouched;
//!   input is validated fully before any state is written
//! - **Canonical empty form**: An uninitialized generator saves to zero
//!   bytes, and loading zero bytes resets to uninitialized
//!
//! # Byte Layout
//!
//! All fields little-endian:
//!
//! | Offset | Length | Field                               |
//! |--------|--------|-------------------------------------|
//! | 0      | 2496   | 312 x 8-byte state words, in order  |
//! | 2496   | 2      | 16-bit cursor, value in [0, 311]    |
//!
//! A cursor sitting at the exhausted position (312) is never written out:
//! the twist is a pure function of the state array, so `save` applies it
//! to a copy and stores cursor 0 instead. The restored generator produces
//! the identical continuation and every persisted cursor stays in range.

use super::mt19937_64::{Mt64Generator, NN};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Exact size in bytes of a saved initialized generator
///
/// 312 state words of 8 bytes each, plus the 16-bit cursor.
pub const SNAPSHOT_LEN: usize = NN * 8 + 2;

/// Errors that can occur when restoring generator state
///
/// These are data-integrity errors, not transient failures: bad input
/// stays bad, so nothing is retried and every error leaves the target
/// generator exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("snapshot index out of range: {index}")]
    IndexOutOfRange { index: u16 },
}

impl Mt64Generator {
    /// Serialize the generator state to bytes
    ///
    /// Returns zero bytes for an uninitialized generator (the canonical
    /// "no state" marker, not an error) and exactly
    /// [`SNAPSHOT_LEN`] bytes otherwise.
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::{Mt64Generator, SNAPSHOT_LEN};
    ///
    /// assert!(Mt64Generator::default().save().is_empty());
    /// assert_eq!(Mt64Generator::new(42).save().len(), SNAPSHOT_LEN);
    /// ```
    pub fn save(&self) -> Vec<u8> {
        if !self.init {
            return Vec::new();
        }

        // Never persist the exhausted cursor position: twist a copy and
        // store cursor 0, which continues the stream identically.
        let mut rng = self.clone();
        if rng.index >= NN {
            rng.twist();
        }

        let mut buf = Vec::with_capacity(SNAPSHOT_LEN);
        for word in &rng.state {
            buf.extend_from_slice(&word.to_le_bytes());
        }
        buf.extend_from_slice(&(rng.index as u16).to_le_bytes());
        buf
    }

    /// Replace the generator state from bytes produced by [`save`](Mt64Generator::save)
    ///
    /// Empty input resets the generator to uninitialized, mirroring
    /// `save`'s empty-output convention. Any other input must be exactly
    /// [`SNAPSHOT_LEN`] bytes with an in-range cursor; otherwise an error
    /// is returned and the prior state is left unmodified.
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt64Generator;
    ///
    /// let mut original = Mt64Generator::new(42);
    /// let bytes = original.save();
    ///
    /// let mut restored = Mt64Generator::default();
    /// restored.load(&bytes).unwrap();
    /// assert_eq!(restored.next_u64(), original.next_u64());
    /// ```
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        if bytes.is_empty() {
            *self = Mt64Generator::default();
            return Ok(());
        }

        if bytes.len() != SNAPSHOT_LEN {
            return Err(SnapshotError::SizeMismatch {
                expected: SNAPSHOT_LEN,
                actual: bytes.len(),
            });
        }

        let index = u16::from_le_bytes([bytes[NN * 8], bytes[NN * 8 + 1]]);
        if usize::from(index) >= NN {
            return Err(SnapshotError::IndexOutOfRange { index });
        }

        // Input fully validated; state replacement is all-or-nothing from
        // the caller's perspective.
        for (slot, chunk) in self.state.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *slot = u64::from_le_bytes(word);
        }
        self.index = usize::from(index);
        self.init = true;
        Ok(())
    }
}

// Serde support delegates to the canonical byte form above, so a generator
// can ride along inside a larger serialized checkpoint. Deserialization
// applies the same validation as `load`.

impl Serialize for Mt64Generator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.save())
    }
}

impl<'de> Deserialize<'de> for Mt64Generator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Mt64Generator;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a generator snapshot of 0 or {} bytes", SNAPSHOT_LEN)
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let mut rng = Mt64Generator::default();
                rng.load(bytes).map_err(E::custom)?;
                Ok(rng)
            }

            // Formats without a native bytes type (JSON) hand the payload
            // over as a sequence of integers.
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                self.visit_bytes(&bytes)
            }
        }

        deserializer.deserialize_bytes(SnapshotVisitor)
    }
}
