//! Strongly typed identifiers for server-assigned entity ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw server id
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw numeric id as sent over the wire
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = crate::error::KanbanError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|e| crate::error::KanbanError::invalid_value($label, e.to_string()))
            }
        }
    };
}

define_id!(
    /// Identifier of a board
    BoardId,
    "board id"
);
define_id!(
    /// Identifier of a column
    ColumnId,
    "column id"
);
define_id!(
    /// Identifier of a task
    TaskId,
    "task id"
);
