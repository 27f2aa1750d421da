//! Deterministic random number generation
//!
//! MT19937-64 generator plus the binary snapshot format for persisting a
//! stream position. Same seed → same sequence, indefinitely.

mod mt19937_64;
mod snapshot;

pub use mt19937_64::Mt64Generator;
pub use snapshot::{SnapshotError, SNAPSHOT_LEN};
