// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while declaring, composing and accessing properties.

use alloc::string::{String, ToString};
use thiserror::Error;

/// An error from a property group, a glyph schema or a glyph instance.
///
/// `owner` is the name of the group or glyph kind the error concerns.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// No property of that name is declared.
    #[error("`{owner}` has no property named `{name}`")]
    NotFound {
        /// Group or glyph kind that was searched.
        owner: String,
        /// The missing property name.
        name: String,
    },
    /// Two sources declare the same property name.
    #[error("property `{name}` of `{owner}` is declared by both {first} and {second}")]
    SchemaConflict {
        /// Group or glyph kind being composed.
        owner: String,
        /// The duplicated property name.
        name: String,
        /// Where the name was declared first.
        first: String,
        /// Where the name was declared again.
        second: String,
    },
    /// A value does not match the property's declared type.
    #[error("`{owner}.{name}` expects {expected}, got {found}")]
    InvalidValue {
        /// Group or glyph kind that owns the property.
        owner: String,
        /// The property name.
        name: String,
        /// Description of the declared type.
        expected: &'static str,
        /// Type of the rejected value.
        found: &'static str,
    },
    /// A string names no variant of an enumeration.
    #[error("`{name}` is not a variant of {enumeration}")]
    UnknownVariant {
        /// The enumeration's type name.
        enumeration: &'static str,
        /// The unrecognized name.
        name: String,
    },
}

impl PropertyError {
    /// Creates a [`PropertyError::NotFound`].
    #[must_use]
    pub fn not_found(owner: &str, name: &str) -> Self {
        Self::NotFound {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the property name the error concerns, if any.
    #[must_use]
    pub fn property_name(&self) -> &str {
        match self {
            Self::NotFound { name, .. }
            | Self::SchemaConflict { name, .. }
            | Self::InvalidValue { name, .. }
            | Self::UnknownVariant { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_owner_and_property() {
        let err = PropertyError::not_found("Wedge", "colour");
        assert_eq!(err.to_string(), "`Wedge` has no property named `colour`");
        assert_eq!(err.property_name(), "colour");

        let err = PropertyError::SchemaConflict {
            owner: "Broken".into(),
            name: "line_color".into(),
            first: "own attributes".into(),
            second: "group `line`".into(),
        };
        assert_eq!(
            err.to_string(),
            "property `line_color` of `Broken` is declared by both own attributes and group `line`"
        );
    }

    #[test]
    fn invalid_value_message() {
        let err = PropertyError::InvalidValue {
            owner: "Step".into(),
            name: "mode".into(),
            expected: "StepMode",
            found: "int",
        };
        assert_eq!(err.to_string(), "`Step.mode` expects StepMode, got int");
    }
}
