//! MT19937-64 Core - Deterministic Pseudorandom Number Generation
//!
//! 64-bit Mersenne Twister (period 2^19937-1) with save/restore of the
//! full generator state.
//!
//! # Architecture
//!
//! - **rng**: The generator state machine (seeding, twist, temper) and
//!   the compact binary snapshot format
//!
//! # Critical Invariants
//!
//! 1. Two generators seeded identically produce bit-identical output
//!    sequences indefinitely
//! 2. All seeding and twisting arithmetic wraps modulo 2^64
//! 3. A failed snapshot load never modifies the target generator
//!
//! # Security
//!
//! NOT cryptographically secure. Do not use for keys, tokens, or any
//! value an adversary must not predict.

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{Mt64Generator, SnapshotError, SNAPSHOT_LEN};
