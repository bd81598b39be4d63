// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and counter rules for the Free Food University API.
//!
//! Two record kinds exist:
//!
//! - [`Marker`]: a single food-sharing event
//! - [`Stats`]: aggregate counters for one college, including the
//!   synthetic `all` roll-up row
//!
//! Counter arithmetic lives in [`counters`] and is pure: callers load rows,
//! plan the update here, then write the planned rows back inside one
//! transaction.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

pub mod counters;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use counters::{FedTodayChange, plan_fed_today_update, plan_food_events_update};
pub use error::DomainError;
pub use types::{
    ALL_COLLEGES, CollegeKind, Marker, PLACEHOLDER_COLLEGES, Stats, counts_toward_rollup,
};
