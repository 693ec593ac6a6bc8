// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named property groups.
//!
//! This module provides [`PropertyGroup`], an immutable, ordered bundle of
//! property declarations shared by many glyph kinds, and
//! [`PropertyGroupBuilder`] for declaring one.

use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::error::PropertyError;
use crate::id::PropertyId;
use crate::kind::{UnitDefaults, UnitKind};
use crate::metadata::PropertyMetadata;
use crate::value::Value;

/// A declared property: its name and metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRegistration {
    name: Cow<'static, str>,
    metadata: PropertyMetadata,
}

impl PropertyRegistration {
    /// Creates a registration.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, metadata: PropertyMetadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property metadata.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> &PropertyMetadata {
        &self.metadata
    }

    /// Returns the declared default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &Value {
        self.metadata.default_value()
    }

    /// Returns the companion `<name>_units` registration, if this property carries units.
    ///
    /// The companion defaults to the property's own units override, falling
    /// back to `defaults`.
    #[must_use]
    pub fn companion_units(&self, defaults: &UnitDefaults) -> Option<Self> {
        let units = self.metadata.units()?;
        let default_value = self
            .metadata
            .units_default()
            .cloned()
            .unwrap_or_else(|| defaults.default_for(units));
        Some(Self {
            name: UnitKind::companion_name(&self.name),
            metadata: PropertyMetadata::new(units.value_kind()).with_default_value(default_value),
        })
    }

    /// Replaces the default value after checking it against the declared type.
    pub fn override_default(&mut self, owner: &str, value: Value) -> Result<(), PropertyError> {
        let value = self.check(owner, value)?;
        self.metadata = self.metadata.clone().with_default_value(value);
        Ok(())
    }

    /// Checks the declared default against the declared type, normalizing it.
    pub fn validated(mut self, owner: &str) -> Result<Self, PropertyError> {
        let default_value = self.metadata.default_value().clone();
        self.override_default(owner, default_value)?;
        Ok(self)
    }

    /// Checks `value` against the declared type, returning the value to store.
    pub fn check(&self, owner: &str, value: Value) -> Result<Value, PropertyError> {
        self.metadata
            .coerce(value)
            .map_err(|rejected| PropertyError::InvalidValue {
                owner: owner.to_string(),
                name: self.name.to_string(),
                expected: self.metadata.kind().describe(),
                found: rejected.type_name(),
            })
    }
}

/// A named, immutable, ordered collection of property declarations.
///
/// Groups are built once and then shared by every glyph kind that mixes them
/// in. Unit-bearing properties are followed by their `<name>_units`
/// companion, so [`attribute_names`](Self::attribute_names) lists exactly the
/// attributes a glyph gains from the group.
///
/// # Example
///
/// ```rust
/// use canopy_property::{PropertyGroupBuilder, PropertyMetadataBuilder, ValueKind};
///
/// let group = PropertyGroupBuilder::new("marker")
///     .register(
///         "size",
///         PropertyMetadataBuilder::new(ValueKind::ScreenDistance)
///             .default_value(4.0)
///             .build(),
///     )
///     .register(
///         "angle",
///         PropertyMetadataBuilder::new(ValueKind::Angle)
///             .default_value(0.0)
///             .build(),
///     )
///     .build()
///     .unwrap();
///
/// let names: Vec<_> = group.attribute_names().collect();
/// assert_eq!(names, ["size", "angle", "angle_units"]);
/// assert_eq!(*group.default_for("size").unwrap(), 4.0);
/// assert!(group.default_for("colour").is_err());
/// ```
#[derive(Clone)]
pub struct PropertyGroup {
    name: &'static str,
    properties: Vec<PropertyRegistration>,
    by_name: HashMap<Cow<'static, str>, PropertyId>,
}

impl PropertyGroup {
    /// Returns the group name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of attributes, unit companions included.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the group declares nothing.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns the attribute names in declaration order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.iter().map(PropertyRegistration::name)
    }

    /// Returns `true` if the group declares `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Looks up an attribute's position by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    /// Returns the registration of `name`.
    pub fn get(&self, name: &str) -> Result<&PropertyRegistration, PropertyError> {
        self.by_name(name)
            .map(|id| &self.properties[id.position()])
            .ok_or_else(|| PropertyError::not_found(self.name, name))
    }

    /// Returns the declared default of `name`.
    pub fn default_for(&self, name: &str) -> Result<&Value, PropertyError> {
        self.get(name).map(PropertyRegistration::default_value)
    }

    /// Returns the registrations in declaration order.
    #[must_use]
    pub fn registrations(&self) -> &[PropertyRegistration] {
        &self.properties
    }

    /// Returns an iterator over all attributes with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &PropertyRegistration)> {
        self.properties
            .iter()
            .enumerate()
            .map(|(i, r)| (PropertyId::from_position(i), r))
    }
}

impl fmt::Debug for PropertyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyGroup")
            .field("name", &self.name)
            .field("properties", &self.attribute_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`PropertyGroup`].
#[derive(Debug)]
pub struct PropertyGroupBuilder {
    name: &'static str,
    properties: Vec<PropertyRegistration>,
    unit_defaults: UnitDefaults,
}

impl PropertyGroupBuilder {
    /// Creates a builder for a group called `name`.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            properties: Vec::new(),
            unit_defaults: UnitDefaults::default(),
        }
    }

    /// Sets the defaults used for companion unit attributes.
    #[must_use]
    pub fn unit_defaults(mut self, defaults: UnitDefaults) -> Self {
        self.unit_defaults = defaults;
        self
    }

    /// Declares a property.
    #[must_use]
    pub fn register(
        mut self,
        name: impl Into<Cow<'static, str>>,
        metadata: PropertyMetadata,
    ) -> Self {
        self.properties.push(PropertyRegistration::new(name, metadata));
        self
    }

    /// Builds the group, expanding unit companions.
    ///
    /// Fails with [`PropertyError::SchemaConflict`] if a name is declared twice
    /// and with [`PropertyError::InvalidValue`] if a default does not match its
    /// declared type.
    pub fn build(self) -> Result<PropertyGroup, PropertyError> {
        let mut properties = Vec::with_capacity(self.properties.len());
        let mut by_name = HashMap::with_capacity(self.properties.len());

        for registration in self.properties {
            let companion = registration.companion_units(&self.unit_defaults);
            for registration in core::iter::once(registration).chain(companion) {
                let registration = registration.validated(self.name)?;
                if by_name.contains_key(registration.name()) {
                    return Err(PropertyError::SchemaConflict {
                        owner: self.name.to_string(),
                        name: registration.name().to_string(),
                        first: alloc::format!("group `{}`", self.name),
                        second: alloc::format!("group `{}`", self.name),
                    });
                }
                by_name.insert(
                    registration.name.clone(),
                    PropertyId::from_position(properties.len()),
                );
                properties.push(registration);
            }
        }

        tracing::debug!(
            group = self.name,
            attributes = properties.len(),
            "built property group"
        );
        Ok(PropertyGroup {
            name: self.name,
            properties,
            by_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AngleUnits, SpatialUnits};
    use crate::kind::ValueKind;
    use crate::metadata::PropertyMetadataBuilder;
    use alloc::{format, vec, vec::Vec};

    fn number() -> PropertyMetadata {
        PropertyMetadata::new(ValueKind::Number)
    }

    #[test]
    fn group_preserves_declaration_order() {
        let group = PropertyGroupBuilder::new("test")
            .register("b", number())
            .register("a", number())
            .build()
            .unwrap();

        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        let names: Vec<_> = group.attribute_names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(group.by_name("a"), Some(PropertyId::new(1)));
    }

    #[test]
    fn group_expands_units_after_their_property() {
        let group = PropertyGroupBuilder::new("test")
            .register("radius", PropertyMetadata::new(ValueKind::Distance))
            .register("after", number())
            .build()
            .unwrap();

        let names: Vec<_> = group.attribute_names().collect();
        assert_eq!(names, vec!["radius", "radius_units", "after"]);
        assert_eq!(
            *group.default_for("radius_units").unwrap(),
            SpatialUnits::Data
        );
    }

    #[test]
    fn group_units_respect_overrides() {
        let group = PropertyGroupBuilder::new("test")
            .unit_defaults(UnitDefaults::default().with_angle(AngleUnits::Deg))
            .register("angle", PropertyMetadata::new(ValueKind::Angle))
            .register(
                "size",
                PropertyMetadataBuilder::new(ValueKind::Distance)
                    .units_default(SpatialUnits::Screen)
                    .build(),
            )
            .build()
            .unwrap();

        assert_eq!(*group.default_for("angle_units").unwrap(), AngleUnits::Deg);
        assert_eq!(*group.default_for("size_units").unwrap(), SpatialUnits::Screen);
    }

    #[test]
    fn group_lookup_of_unknown_name_fails() {
        let group = PropertyGroupBuilder::new("fill").build().unwrap();
        assert!(group.is_empty());
        assert_eq!(
            group.default_for("fill_color"),
            Err(PropertyError::not_found("fill", "fill_color"))
        );
    }

    #[test]
    fn group_rejects_duplicate_names() {
        let err = PropertyGroupBuilder::new("test")
            .register("x", number())
            .register("x", number())
            .build()
            .unwrap_err();
        assert!(matches!(err, PropertyError::SchemaConflict { ref name, .. } if name == "x"));
    }

    #[test]
    fn group_rejects_companion_collision() {
        let err = PropertyGroupBuilder::new("test")
            .register("width", PropertyMetadata::new(ValueKind::Distance))
            .register("width_units", number())
            .build()
            .unwrap_err();
        assert_eq!(err.property_name(), "width_units");
    }

    #[test]
    fn group_rejects_ill_typed_default() {
        let err = PropertyGroupBuilder::new("test")
            .register(
                "flag",
                PropertyMetadataBuilder::new(ValueKind::Bool)
                    .default_value("yes")
                    .build(),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PropertyError::InvalidValue {
                owner: "test".into(),
                name: "flag".into(),
                expected: "bool",
                found: "string",
            }
        );
    }

    #[test]
    fn group_normalizes_defaults() {
        let group = PropertyGroupBuilder::new("test")
            .register(
                "color",
                PropertyMetadataBuilder::new(ValueKind::Color)
                    .default_value("black")
                    .build(),
            )
            .build()
            .unwrap();
        assert_eq!(
            *group.default_for("color").unwrap(),
            peniko::Color::BLACK
        );
    }

    #[test]
    fn group_iter_and_debug() {
        let group = PropertyGroupBuilder::new("test")
            .register("x", number())
            .register("y", number())
            .build()
            .unwrap();

        let ids: Vec<_> = group.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(group.registrations()[1].name(), "y");

        let debug = format!("{:?}", group);
        assert!(debug.contains("PropertyGroup"));
        assert!(debug.contains("\"y\""));
    }
}
