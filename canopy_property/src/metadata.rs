// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property metadata definitions.
//!
//! This module provides [`PropertyMetadata`] for storing a property's declared
//! type and default, and [`PropertyMetadataBuilder`] for ergonomic construction.

use crate::kind::{UnitKind, ValueKind};
use crate::value::Value;

/// Metadata for a declared property.
///
/// This contains the property's declared type, its default value, and whether
/// it carries a companion `<name>_units` attribute.
///
/// # Example
///
/// ```rust
/// use canopy_property::{PropertyMetadataBuilder, SpatialUnits, UnitKind, ValueKind};
///
/// let metadata = PropertyMetadataBuilder::new(ValueKind::Distance)
///     .units_default(SpatialUnits::Screen)
///     .build();
///
/// assert!(metadata.default_value().is_null());
/// assert_eq!(metadata.units(), Some(UnitKind::Spatial));
/// assert_eq!(metadata.units_default(), Some(&SpatialUnits::Screen.into()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyMetadata {
    kind: ValueKind,
    default_value: Value,
    units: Option<UnitKind>,
    units_default: Option<Value>,
}

impl PropertyMetadata {
    /// Creates new property metadata for `kind` with a null default.
    ///
    /// Distances and angles carry units; see [`ValueKind::units`].
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            default_value: Value::Null,
            units: kind.units(),
            units_default: None,
        }
    }

    /// Returns the declared type.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns a reference to the default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Returns the unit family of the companion attribute, if the property has one.
    #[must_use]
    #[inline]
    pub fn units(&self) -> Option<UnitKind> {
        self.units
    }

    /// Returns the per-property override of the companion's default, if any.
    #[must_use]
    #[inline]
    pub fn units_default(&self) -> Option<&Value> {
        self.units_default.as_ref()
    }

    /// Checks a value against the declared type.
    ///
    /// See [`ValueKind::coerce`].
    pub fn coerce(&self, value: Value) -> Result<Value, Value> {
        self.kind.coerce(value)
    }

    /// Returns this metadata with a different default value.
    #[must_use]
    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = value;
        self
    }
}

/// Builder for [`PropertyMetadata`].
///
/// # Example
///
/// ```rust
/// use canopy_property::{Direction, PropertyMetadataBuilder, ValueKind};
///
/// let metadata = PropertyMetadataBuilder::new(ValueKind::of_enum::<Direction>())
///     .default_value(Direction::Anticlock)
///     .build();
///
/// assert_eq!(*metadata.default_value(), Direction::Anticlock);
/// ```
#[derive(Clone, Debug)]
pub struct PropertyMetadataBuilder {
    metadata: PropertyMetadata,
}

impl PropertyMetadataBuilder {
    /// Creates a new builder for a property of type `kind`.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self {
            metadata: PropertyMetadata::new(kind),
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.metadata.default_value = value.into();
        self
    }

    /// Gives the property a companion `<name>_units` attribute of `units`.
    #[must_use]
    pub fn with_units(mut self, units: UnitKind) -> Self {
        self.metadata.units = Some(units);
        self
    }

    /// Removes the companion units attribute implied by the declared type.
    #[must_use]
    pub fn without_units(mut self) -> Self {
        self.metadata.units = None;
        self.metadata.units_default = None;
        self
    }

    /// Overrides the library-wide default of the companion units attribute.
    #[must_use]
    pub fn units_default(mut self, value: impl Into<Value>) -> Self {
        self.metadata.units_default = Some(value.into());
        self
    }

    /// Builds the [`PropertyMetadata`].
    #[must_use]
    pub fn build(self) -> PropertyMetadata {
        self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AngleUnits, StepMode};
    use alloc::format;

    #[test]
    fn metadata_defaults() {
        let metadata = PropertyMetadata::new(ValueKind::Number);
        assert_eq!(metadata.kind(), ValueKind::Number);
        assert!(metadata.default_value().is_null());
        assert_eq!(metadata.units(), None);
        assert_eq!(metadata.units_default(), None);
    }

    #[test]
    fn metadata_units_from_kind() {
        let angle = PropertyMetadata::new(ValueKind::Angle);
        assert_eq!(angle.units(), Some(UnitKind::Angle));
    }

    #[test]
    fn metadata_builder() {
        let metadata = PropertyMetadataBuilder::new(ValueKind::Angle)
            .default_value(0.0)
            .units_default(AngleUnits::Deg)
            .build();

        assert_eq!(metadata.default_value(), &Value::Float(0.0));
        assert_eq!(metadata.units_default(), Some(&AngleUnits::Deg.into()));
    }

    #[test]
    fn metadata_builder_units_toggles() {
        let plain = PropertyMetadataBuilder::new(ValueKind::Distance)
            .units_default(AngleUnits::Deg)
            .without_units()
            .build();
        assert_eq!(plain.units(), None);
        assert_eq!(plain.units_default(), None);

        let flagged = PropertyMetadataBuilder::new(ValueKind::Number)
            .with_units(UnitKind::Spatial)
            .build();
        assert_eq!(flagged.units(), Some(UnitKind::Spatial));
    }

    #[test]
    fn metadata_coerce_uses_kind() {
        let metadata = PropertyMetadataBuilder::new(ValueKind::of_enum::<StepMode>())
            .default_value(StepMode::Before)
            .build();
        assert_eq!(metadata.coerce("after".into()), Ok(StepMode::After.into()));
        assert!(metadata.coerce(Value::Int(1)).is_err());
    }

    #[test]
    fn metadata_debug() {
        let metadata = PropertyMetadataBuilder::new(ValueKind::Int)
            .default_value(42)
            .build();

        let debug = format!("{:?}", metadata);
        assert!(debug.contains("PropertyMetadata"));
        assert!(debug.contains("42"));
    }
}
