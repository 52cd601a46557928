use crate::value::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Requirement
///
/// Human-readable requirement phrase attached to loud-policy failures.
/// The phrases are part of the message format and must stay stable.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Requirement {
    Int,
    Float,
    Bool,
    Text,
    Number,
    Scalar,
    Unsigned,
    Signed,
    Positive,
    Negative,
    Collection,
    CollectionNonEmpty,
    List,
    ListNonEmpty,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "string",
            Self::Number => "float|int",
            Self::Scalar => "float|int|bool|string",
            Self::Unsigned => ">= 0",
            Self::Signed => "<= 0",
            Self::Positive => "> 0",
            Self::Negative => "< 0",
            Self::Collection => "an assoc. array",
            Self::CollectionNonEmpty => "a non-empty assoc. array",
            Self::List => "a list",
            Self::ListNonEmpty => "a non-empty list",
        };
        write!(f, "{phrase}")
    }
}

///
/// CastError
///
/// Coercion assertion failure: the single error kind raised by the loud
/// policy wrappers. The default message is the canonical export of the
/// offending input followed by the requirement phrase.
///

#[derive(Clone, Debug, ThisError)]
#[error("{message}")]
pub struct CastError {
    pub requirement: Requirement,
    pub message: String,
}

impl CastError {
    pub(crate) fn new(value: &Value, requirement: Requirement, message: Option<&str>) -> Self {
        let message = message.map_or_else(
            || format!("{} must be {requirement}", value.export()),
            ToString::to_string,
        );

        Self {
            requirement,
            message,
        }
    }
}
