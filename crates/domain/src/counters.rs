// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Counter arithmetic for stats rows.
//!
//! Both planners take the full set of rows in store order and return the
//! rows that must be written back, with their new counter values. They never
//! create or drop rows.
//!
//! ## Fed today
//!
//! The named college's row and the `all` row receive the same delta. The
//! `all` row is not re-aggregated from the colleges.
//!
//! ## Food events
//!
//! Updates are applied to a snapshot first, then the roll-up is summed from
//! the updated snapshot, so the named college always contributes its new
//! value to the `all` row.

use crate::error::DomainError;
use crate::types::{CollegeKind, Stats, counts_toward_rollup};

/// A requested change to a college's `fed_today` counter.
///
/// The sentinel `-1` means "reset to zero" rather than "subtract one".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FedTodayChange(i64);

impl FedTodayChange {
    /// The raw value that resets `fed_today`.
    pub const RESET: i64 = -1;

    /// Wraps a raw change value.
    #[must_use]
    pub const fn new(delta: i64) -> Self {
        Self(delta)
    }

    /// The raw change value as sent by the client.
    #[must_use]
    pub const fn delta(self) -> i64 {
        self.0
    }

    /// Whether this change resets `fed_today` to zero.
    #[must_use]
    pub const fn is_reset(self) -> bool {
        self.0 == Self::RESET
    }

    /// The amount credited to `fed_all_time`. Negative changes credit nothing.
    #[must_use]
    pub const fn credited(self) -> i64 {
        if self.0 > 0 { self.0 } else { 0 }
    }

    /// Applies this change to one row.
    ///
    /// # Errors
    ///
    /// Returns an error if either counter would overflow.
    pub fn apply(self, stats: &Stats) -> Result<Stats, DomainError> {
        let fed_today: i64 = if self.is_reset() {
            0
        } else {
            stats
                .fed_today
                .checked_add(self.0)
                .ok_or_else(|| overflow(stats, "fed_today"))?
        };
        let fed_all_time: i64 = stats
            .fed_all_time
            .checked_add(self.credited())
            .ok_or_else(|| overflow(stats, "fed_all_time"))?;

        Ok(Stats {
            fed_today,
            fed_all_time,
            ..stats.clone()
        })
    }
}

/// Plans a `fed_today` update for `college`.
///
/// Every row whose college equals `college` or is the `all` row is updated
/// exactly once with the same change. Rows are returned in input order.
///
/// # Errors
///
/// Returns an error if any counter would overflow.
pub fn plan_fed_today_update(
    rows: &[Stats],
    college: &str,
    change: FedTodayChange,
) -> Result<Vec<Stats>, DomainError> {
    rows.iter()
        .filter(|row| row.college == college || row.kind() == CollegeKind::Rollup)
        .map(|row| change.apply(row))
        .collect()
}

/// Plans a `food_events` update for `college`.
///
/// Adds `change` to every row matching `college`, then sets every `all` row
/// to the sum of `food_events` over rows that count toward the roll-up.
/// Returns the matching rows and the `all` rows in input order.
///
/// # Errors
///
/// Returns an error if a row's counter or the roll-up sum would overflow.
pub fn plan_food_events_update(
    rows: &[Stats],
    college: &str,
    change: i64,
) -> Result<Vec<Stats>, DomainError> {
    let mut snapshot: Vec<Stats> = rows.to_vec();

    for row in snapshot.iter_mut().filter(|row| row.college == college) {
        row.food_events = row
            .food_events
            .checked_add(change)
            .ok_or_else(|| overflow(row, "food_events"))?;
    }

    let mut all_food_events: i64 = 0;
    for row in snapshot
        .iter()
        .filter(|row| counts_toward_rollup(&row.college))
    {
        all_food_events = all_food_events
            .checked_add(row.food_events)
            .ok_or_else(|| overflow(row, "food_events"))?;
    }

    for row in snapshot
        .iter_mut()
        .filter(|row| row.kind() == CollegeKind::Rollup)
    {
        row.food_events = all_food_events;
    }

    Ok(snapshot
        .into_iter()
        .filter(|row| row.college == college || row.kind() == CollegeKind::Rollup)
        .collect())
}

fn overflow(stats: &Stats, counter: &'static str) -> DomainError {
    DomainError::CounterOverflow {
        college: stats.college.clone(),
        counter,
    }
}
