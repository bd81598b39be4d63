// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `markers`: Marker creation
//! - `stats`: Counter updates and stats seeding
//!
//! Counter updates are planned by `freefood_domain::counters` against a
//! snapshot read inside the transaction, then written back with field-level
//! `UPDATE` statements in that same transaction.

pub mod markers;
pub mod stats;

pub use markers::insert_marker;
pub use stats::{seed_stats, update_fed_today, update_food_events};
