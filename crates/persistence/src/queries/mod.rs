// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `markers`: Marker listing and per-college filtering
//! - `stats`: Stats row listing and per-college lookup
//!
//! Rows are always returned in ascending primary key order. College
//! filtering is done in Rust on the loaded rows so that matching is an exact,
//! case-sensitive comparison regardless of the column collation.

pub mod markers;
pub mod stats;

pub use markers::{list_markers, list_markers_for_college};
pub use stats::{find_stats_for_college, list_stats};
