// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composing glyph schemas from own attributes and property groups.

use std::borrow::Cow;

use canopy_property::{
    PropertyError, PropertyGroup, PropertyId, PropertyMetadata, PropertyRegistration,
    UnitDefaults, Value,
};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::schema::{AttributeSource, GlyphSchema, SchemaAttribute};

/// Builder for [`GlyphSchema`].
///
/// Own attributes come first, in declaration order, each unit-bearing one
/// followed by its `<name>_units` companion. Mixed-in groups follow in
/// mix-in order. Own attributes and groups must be disjoint: a repeated
/// name fails the build with [`PropertyError::SchemaConflict`].
///
/// Glyph-level defaults set with [`override_default`](Self::override_default)
/// take precedence over the declaring group's default.
///
/// # Example
///
/// ```rust
/// use canopy_glyph::SchemaBuilder;
/// use canopy_property::{
///     Direction, GroupCatalog, GroupTag, PropertyMetadata, ValueKind,
/// };
///
/// let groups = GroupCatalog::standard().unwrap();
/// let schema = SchemaBuilder::new("Arc")
///     .own("radius", PropertyMetadata::new(ValueKind::Distance))
///     .own("direction", PropertyMetadata::new(ValueKind::of_enum::<Direction>()))
///     .mixin(groups.get(GroupTag::Line))
///     .override_default("direction", Direction::Anticlock)
///     .override_default("line_width", 2.0)
///     .build()
///     .unwrap();
///
/// let names: Vec<_> = schema.attribute_names().take(3).collect();
/// assert_eq!(names, ["radius", "radius_units", "direction"]);
/// assert_eq!(*schema.default_for("direction").unwrap(), "anticlock");
/// assert_eq!(*schema.default_for("line_width").unwrap(), 2.0);
/// ```
#[derive(Debug)]
pub struct SchemaBuilder<'g> {
    name: &'static str,
    own: Vec<PropertyRegistration>,
    groups: SmallVec<[&'g PropertyGroup; 4]>,
    overrides: Vec<(Cow<'static, str>, Value)>,
    unit_defaults: UnitDefaults,
}

impl<'g> SchemaBuilder<'g> {
    /// Creates a builder for the glyph kind called `name`.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            own: Vec::new(),
            groups: SmallVec::new(),
            overrides: Vec::new(),
            unit_defaults: UnitDefaults::default(),
        }
    }

    /// Sets the defaults used for the companions of own unit-bearing attributes.
    ///
    /// Group attributes keep the unit defaults their group was built with.
    #[must_use]
    pub fn unit_defaults(mut self, defaults: UnitDefaults) -> Self {
        self.unit_defaults = defaults;
        self
    }

    /// Declares an attribute of the glyph kind itself.
    #[must_use]
    pub fn own(mut self, name: impl Into<Cow<'static, str>>, metadata: PropertyMetadata) -> Self {
        self.own.push(PropertyRegistration::new(name, metadata));
        self
    }

    /// Mixes in every attribute of `group`.
    #[must_use]
    pub fn mixin(mut self, group: &'g PropertyGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Replaces the default of an attribute, own or mixed in.
    #[must_use]
    pub fn override_default(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Builds the schema.
    ///
    /// Fails with [`PropertyError::SchemaConflict`] on a repeated name,
    /// [`PropertyError::NotFound`] when an override names no attribute and
    /// [`PropertyError::InvalidValue`] when a default does not fit its type.
    pub fn build(self) -> Result<GlyphSchema, PropertyError> {
        let capacity = self.own.len() * 2 + self.groups.iter().map(|g| g.len()).sum::<usize>();
        let mut composer = Composer {
            owner: self.name,
            attributes: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        };

        for registration in self.own {
            let companion = registration.companion_units(&self.unit_defaults);
            for registration in std::iter::once(registration).chain(companion) {
                composer.push(registration, AttributeSource::Own)?;
            }
        }
        for group in &self.groups {
            for registration in group.registrations() {
                composer.push(registration.clone(), AttributeSource::Group(group.name()))?;
            }
        }

        let mut overridden = Vec::with_capacity(self.overrides.len());
        for (name, value) in self.overrides {
            let id = composer.index_of(&name)?;
            composer.attributes[id.position()]
                .registration
                .override_default(self.name, value)?;
            overridden.push(id);
        }
        // Group defaults were checked when the group was built.
        for (position, attribute) in composer.attributes.iter_mut().enumerate() {
            if attribute.source != AttributeSource::Own
                || overridden.contains(&PropertyId::from_position(position))
            {
                continue;
            }
            let declared = attribute.registration.default_value().clone();
            attribute.registration.override_default(self.name, declared)?;
        }

        let groups: SmallVec<[&'static str; 4]> = self.groups.iter().map(|g| g.name()).collect();
        tracing::debug!(
            glyph = self.name,
            attributes = composer.attributes.len(),
            groups = ?groups,
            "composed glyph schema"
        );
        Ok(GlyphSchema {
            name: self.name,
            attributes: composer.attributes,
            by_name: composer.by_name,
            groups,
        })
    }
}

struct Composer {
    owner: &'static str,
    attributes: Vec<SchemaAttribute>,
    by_name: HashMap<String, PropertyId>,
}

impl Composer {
    fn push(
        &mut self,
        registration: PropertyRegistration,
        source: AttributeSource,
    ) -> Result<(), PropertyError> {
        if let Some(existing) = self.by_name.get(registration.name()) {
            let first = self.attributes[existing.position()].source;
            tracing::warn!(
                glyph = self.owner,
                attribute = registration.name(),
                %first,
                second = %source,
                "attribute declared twice"
            );
            return Err(PropertyError::SchemaConflict {
                owner: self.owner.to_string(),
                name: registration.name().to_string(),
                first: first.to_string(),
                second: source.to_string(),
            });
        }
        self.by_name.insert(
            registration.name().to_string(),
            PropertyId::from_position(self.attributes.len()),
        );
        self.attributes.push(SchemaAttribute {
            registration,
            source,
        });
        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<PropertyId, PropertyError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| PropertyError::not_found(self.owner, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_property::{
        AngleUnits, Direction, GroupCatalog, GroupTag, LineJoin, PropertyMetadataBuilder,
        SpatialUnits, StepMode, ValueKind,
    };

    fn number() -> PropertyMetadata {
        PropertyMetadata::new(ValueKind::Number)
    }

    #[test]
    fn own_attributes_precede_groups() {
        let groups = GroupCatalog::standard().unwrap();
        let schema = SchemaBuilder::new("Segment")
            .own("x0", number())
            .own("y0", number())
            .mixin(groups.get(GroupTag::Line))
            .mixin(groups.get(GroupTag::Glyph))
            .build()
            .unwrap();

        let names: Vec<_> = schema.attribute_names().collect();
        assert_eq!(names[..3], ["x0", "y0", "line_color"]);
        assert_eq!(names.last(), Some(&"subscribed_events"));
        assert_eq!(schema.len(), 2 + 7 + 5);
        assert_eq!(schema.groups(), ["line", "glyph"]);
    }

    #[test]
    fn own_units_use_builder_defaults() {
        let schema = SchemaBuilder::new("Ray")
            .unit_defaults(
                UnitDefaults::default()
                    .with_spatial(SpatialUnits::Screen)
                    .with_angle(AngleUnits::Deg),
            )
            .own("angle", PropertyMetadata::new(ValueKind::Angle))
            .own("length", PropertyMetadata::new(ValueKind::Distance))
            .build()
            .unwrap();

        assert_eq!(*schema.default_for("angle_units").unwrap(), AngleUnits::Deg);
        assert_eq!(
            *schema.default_for("length_units").unwrap(),
            SpatialUnits::Screen
        );
    }

    #[test]
    fn own_units_override() {
        let schema = SchemaBuilder::new("Oval")
            .own(
                "width",
                PropertyMetadataBuilder::new(ValueKind::Distance)
                    .units_default(SpatialUnits::Screen)
                    .build(),
            )
            .override_default("width_units", "data")
            .build()
            .unwrap();
        assert_eq!(*schema.default_for("width_units").unwrap(), SpatialUnits::Data);
    }

    #[test]
    fn overrides_take_precedence_over_group_defaults() {
        let groups = GroupCatalog::standard().unwrap();
        let schema = SchemaBuilder::new("Step")
            .own("mode", PropertyMetadata::new(ValueKind::of_enum::<StepMode>()))
            .mixin(groups.get(GroupTag::Line))
            .override_default("mode", "before")
            .override_default("line_join", LineJoin::Round)
            .build()
            .unwrap();

        assert_eq!(*schema.default_for("mode").unwrap(), StepMode::Before);
        assert_eq!(*schema.default_for("line_join").unwrap(), LineJoin::Round);
        // The shared group is untouched.
        assert_eq!(
            *groups.get(GroupTag::Line).default_for("line_join").unwrap(),
            LineJoin::Bevel
        );
    }

    #[test]
    fn own_and_group_collision_is_a_conflict() {
        let groups = GroupCatalog::standard().unwrap();
        let err = SchemaBuilder::new("Broken")
            .own("fill_color", number())
            .mixin(groups.get(GroupTag::Fill))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            PropertyError::SchemaConflict {
                owner: "Broken".into(),
                name: "fill_color".into(),
                first: "own attributes".into(),
                second: "group `fill`".into(),
            }
        );
    }

    #[test]
    fn group_and_group_collision_is_a_conflict() {
        let groups = GroupCatalog::standard().unwrap();
        let err = SchemaBuilder::new("Twice")
            .mixin(groups.get(GroupTag::Line))
            .mixin(groups.get(GroupTag::Line))
            .build()
            .unwrap_err();
        assert_eq!(err.property_name(), "line_color");
    }

    #[test]
    fn companion_collision_is_a_conflict() {
        let groups = GroupCatalog::standard().unwrap();
        // `angle` brings `angle_units`, which the marker group also declares.
        let err = SchemaBuilder::new("Spinner")
            .own("angle", PropertyMetadata::new(ValueKind::Angle))
            .mixin(groups.get(GroupTag::Marker))
            .build()
            .unwrap_err();
        assert_eq!(err.property_name(), "angle");
    }

    #[test]
    fn override_supplies_missing_own_default() {
        let schema = SchemaBuilder::new("Wedge")
            .own("direction", PropertyMetadata::new(ValueKind::of_enum::<Direction>()))
            .override_default("direction", Direction::Clock)
            .build()
            .unwrap();
        assert_eq!(*schema.default_for("direction").unwrap(), Direction::Clock);
        assert_eq!(*schema.default_for("direction").unwrap(), "clock");
    }

    #[test]
    fn own_default_is_checked_without_override() {
        let err = SchemaBuilder::new("Wedge")
            .own("direction", PropertyMetadata::new(ValueKind::of_enum::<Direction>()))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PropertyError::InvalidValue { name, found: "null", .. } if name == "direction"
        ));
    }

    #[test]
    fn unknown_override_is_not_found() {
        let err = SchemaBuilder::new("Line")
            .own("x", number())
            .override_default("colour", "red")
            .build()
            .unwrap_err();
        assert_eq!(err, PropertyError::not_found("Line", "colour"));
    }

    #[test]
    fn ill_typed_override_is_rejected() {
        let err = SchemaBuilder::new("Step")
            .own("mode", PropertyMetadata::new(ValueKind::of_enum::<StepMode>()))
            .override_default("mode", "sideways")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PropertyError::InvalidValue { expected: "StepMode", found: "string", .. }
        ));
    }

    #[test]
    fn composition_is_repeatable() {
        let groups = GroupCatalog::standard().unwrap();
        let build = || {
            SchemaBuilder::new("Patch")
                .own("x", number())
                .own("y", number())
                .mixin(groups.get(GroupTag::Fill))
                .mixin(groups.get(GroupTag::Hatch))
                .build()
                .unwrap()
        };
        let (a, b) = (build(), build());
        assert_eq!(a.attributes(), b.attributes());
    }
}
