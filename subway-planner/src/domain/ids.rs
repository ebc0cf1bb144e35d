//! Identifier types for stations and lines.
//!
//! Identifiers wrap `Arc<str>` so the graph, the solver's scratch maps and
//! the reconstructed path can all hold copies without reallocating.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

macro_rules! impl_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(Arc::from(s.as_ref()))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Arc::from(s))
            }
        }
    };
}

impl_identifier!(
    /// Unique identifier of a station within a network.
    ///
    /// ```
    /// use subway_planner::domain::StationId;
    ///
    /// let id = StationId::new("central");
    /// assert_eq!(id.as_str(), "central");
    /// assert_eq!(format!("{id:?}"), "StationId(central)");
    /// ```
    StationId
);

impl_identifier!(
    /// Identifier of a line.
    LineId
);
