use std::fmt::Display;

use crate::pattern::PatternError;

/// A registration the tree cannot be sealed with. Returned from
/// [`RouterBuilder::build`](super::RouterBuilder::build) so misconfiguration
/// fails at startup, never at match time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Pattern(PatternError),
    MissingHandler { route: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(error) => error.fmt(f),
            Self::MissingHandler { route } => {
                write!(f, "route {route:?} has no handler configured")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<PatternError> for ConfigError {
    fn from(value: PatternError) -> Self {
        Self::Pattern(value)
    }
}
