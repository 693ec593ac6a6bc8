// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened per-kind attribute schemas.

use std::fmt;

use canopy_property::{
    PropertyError, PropertyId, PropertyMetadata, PropertyRegistration, Value, ValueKind,
};
use hashbrown::HashMap;
use smallvec::SmallVec;

/// Where a schema attribute was declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeSource {
    /// Declared by the glyph kind itself, unit companions included.
    Own,
    /// Contributed by the named property group.
    Group(&'static str),
}

impl fmt::Display for AttributeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Own => f.write_str("own attributes"),
            Self::Group(name) => write!(f, "group `{name}`"),
        }
    }
}

/// One attribute of a [`GlyphSchema`].
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaAttribute {
    pub(crate) registration: PropertyRegistration,
    pub(crate) source: AttributeSource,
}

impl SchemaAttribute {
    /// Returns the attribute name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        self.registration.name()
    }

    /// Returns the attribute's declared type.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.registration.metadata().kind()
    }

    /// Returns the attribute metadata.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> &PropertyMetadata {
        self.registration.metadata()
    }

    /// Returns the default value, after any glyph-level override.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &Value {
        self.registration.default_value()
    }

    /// Returns where the attribute was declared.
    #[must_use]
    #[inline]
    pub fn source(&self) -> AttributeSource {
        self.source
    }

    /// Returns the underlying registration.
    #[must_use]
    pub fn registration(&self) -> &PropertyRegistration {
        &self.registration
    }
}

/// The complete, flattened attribute schema of one glyph kind.
///
/// A schema lists the kind's own attributes first, then the attributes of
/// each mixed-in group in mix-in order. Every name appears exactly once.
/// Schemas are built by [`SchemaBuilder`](crate::SchemaBuilder) and are
/// immutable afterwards.
#[derive(Clone)]
pub struct GlyphSchema {
    pub(crate) name: &'static str,
    pub(crate) attributes: Vec<SchemaAttribute>,
    pub(crate) by_name: HashMap<String, PropertyId>,
    pub(crate) groups: SmallVec<[&'static str; 4]>,
}

impl GlyphSchema {
    /// Returns the glyph kind name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of attributes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the schema has no attributes.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns every attribute name in schema order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.attributes.iter().map(SchemaAttribute::name)
    }

    /// Returns the names of the kind's own attributes, unit companions included.
    pub fn own_attribute_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.attributes
            .iter()
            .filter(|attribute| attribute.source == AttributeSource::Own)
            .map(SchemaAttribute::name)
    }

    /// Returns the names of the mixed-in groups, in mix-in order.
    #[must_use]
    pub fn groups(&self) -> &[&'static str] {
        &self.groups
    }

    /// Returns `true` if the group called `group` is mixed in.
    #[must_use]
    pub fn mixes_in(&self, group: &str) -> bool {
        self.groups.iter().any(|mixed| *mixed == group)
    }

    /// Returns `true` if the schema declares `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Looks up the position of `name`.
    pub fn index_of(&self, name: &str) -> Result<PropertyId, PropertyError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| PropertyError::not_found(self.name, name))
    }

    /// Returns the attribute called `name`.
    pub fn get(&self, name: &str) -> Result<&SchemaAttribute, PropertyError> {
        self.index_of(name).map(|id| &self.attributes[id.position()])
    }

    /// Returns the attribute at `id`, if it belongs to this schema.
    #[must_use]
    pub fn attribute(&self, id: PropertyId) -> Option<&SchemaAttribute> {
        self.attributes.get(id.position())
    }

    /// Returns the declared default of `name`.
    pub fn default_for(&self, name: &str) -> Result<&Value, PropertyError> {
        self.get(name).map(SchemaAttribute::default_value)
    }

    /// Returns every attribute in schema order.
    #[must_use]
    pub fn attributes(&self) -> &[SchemaAttribute] {
        &self.attributes
    }
}

impl fmt::Debug for GlyphSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphSchema")
            .field("name", &self.name)
            .field("groups", &self.groups)
            .field("attributes", &self.attribute_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaBuilder;
    use canopy_property::{GroupCatalog, GroupTag};

    fn wedge_like(groups: &GroupCatalog) -> GlyphSchema {
        SchemaBuilder::new("WedgeLike")
            .own("x", PropertyMetadata::new(ValueKind::Number))
            .own("radius", PropertyMetadata::new(ValueKind::Distance))
            .mixin(groups.get(GroupTag::Fill))
            .build()
            .unwrap()
    }

    #[test]
    fn schema_lookup_and_sources() {
        let groups = GroupCatalog::standard().unwrap();
        let schema = wedge_like(&groups);

        assert_eq!(schema.name(), "WedgeLike");
        assert_eq!(schema.len(), 5);
        assert!(!schema.is_empty());
        assert_eq!(schema.index_of("radius_units").unwrap(), PropertyId::new(2));
        assert_eq!(schema.get("x").unwrap().source(), AttributeSource::Own);
        assert_eq!(
            schema.get("fill_alpha").unwrap().source(),
            AttributeSource::Group("fill")
        );
        assert_eq!(schema.get("fill_alpha").unwrap().kind(), ValueKind::Alpha);
        assert!(schema.contains("fill_color"));
        assert!(schema.attribute(PropertyId::new(99)).is_none());
    }

    #[test]
    fn schema_own_names_and_groups() {
        let groups = GroupCatalog::standard().unwrap();
        let schema = wedge_like(&groups);

        let own: Vec<_> = schema.own_attribute_names().collect();
        assert_eq!(own, ["x", "radius", "radius_units"]);
        assert_eq!(schema.groups(), ["fill"]);
        assert!(schema.mixes_in("fill"));
        assert!(!schema.mixes_in("line"));
    }

    #[test]
    fn schema_unknown_name_is_not_found() {
        let groups = GroupCatalog::standard().unwrap();
        let schema = wedge_like(&groups);

        let err = schema.default_for("line_color").unwrap_err();
        assert_eq!(err, PropertyError::not_found("WedgeLike", "line_color"));
    }

    #[test]
    fn source_display() {
        assert_eq!(AttributeSource::Own.to_string(), "own attributes");
        assert_eq!(AttributeSource::Group("line").to_string(), "group `line`");
    }

    #[test]
    fn schema_debug_lists_names() {
        let groups = GroupCatalog::standard().unwrap();
        let debug = format!("{:?}", wedge_like(&groups));
        assert!(debug.contains("WedgeLike"));
        assert!(debug.contains("\"radius_units\""));
    }
}
