pub mod host;
pub mod path;

use std::fmt::Display;

pub use host::HostPattern;
pub use path::{PathPattern, Segment};

/// A structurally invalid route or host pattern, reported when the scope
/// tree is sealed rather than silently misbehaving at match time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    DuplicateParam { pattern: String, name: String },
    WildcardNotLast { pattern: String },
    EmptyParamName { pattern: String },
    EmptyHostPattern { pattern: String },
}

impl Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateParam { pattern, name } => {
                write!(f, "pattern {pattern:?} declares parameter {name:?} twice")
            }
            Self::WildcardNotLast { pattern } => {
                write!(f, "pattern {pattern:?} has segments after a greedy wildcard")
            }
            Self::EmptyParamName { pattern } => {
                write!(f, "pattern {pattern:?} declares a parameter without a name")
            }
            Self::EmptyHostPattern { pattern } => {
                write!(f, "host pattern {pattern:?} has no host part")
            }
        }
    }
}

impl std::error::Error for PatternError {}
