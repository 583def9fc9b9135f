use std::fmt;

/// Errors surfaced by structural validation of a plan, before any year is
/// simulated. Out-of-range but structurally valid values (negative growth,
/// zero spending) are not errors; they are simulated as given.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A portfolio record has an empty (or all-whitespace) name
    EmptyEntityName { index: usize },
    /// Two portfolio records share the same name
    DuplicateEntityName(String),
    /// A life event record has an empty name
    EmptyEventName { index: usize },
    /// A required numeric field is NaN or infinite
    NonFiniteNumber {
        entity: String,
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyEntityName { index } => {
                write!(f, "portfolio record {index} has no name")
            }
            ConfigError::DuplicateEntityName(name) => {
                write!(f, "duplicate portfolio entry name {name:?}")
            }
            ConfigError::EmptyEventName { index } => {
                write!(f, "life event record {index} has no name")
            }
            ConfigError::NonFiniteNumber { entity, field } => {
                write!(f, "{entity:?} has a non-finite {field}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;
