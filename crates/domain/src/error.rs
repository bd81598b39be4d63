// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while applying domain rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A counter update would overflow a 64-bit integer.
    CounterOverflow {
        /// The college whose row was being updated.
        college: String,
        /// The name of the counter column.
        counter: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CounterOverflow { college, counter } => {
                write!(f, "Counter '{counter}' overflowed for college '{college}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
