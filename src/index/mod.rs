// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make search fast.
//!
//! - **Inverted index**: per-field ordered vocabulary → posting lists
//! - **Document store**: id → record, where raw input gets validated
//! - **Snapshot**: both of the above, frozen, plus the cell that publishes it

pub mod inverted;
pub mod snapshot;
pub mod store;

pub use inverted::{FieldIndex, FieldStats, IndexStats, InvertedIndex};
pub use snapshot::{Snapshot, SnapshotCell, SnapshotInfo};
pub use store::DocumentStore;
