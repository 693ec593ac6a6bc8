// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph instances.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use canopy_property::{PropertyError, PropertyId, Value, ValueStore};

use crate::catalog::{GlyphKind, catalog};
use crate::schema::GlyphSchema;

/// An instance of a glyph kind.
///
/// A glyph shares its [`GlyphSchema`] and stores only the values set
/// explicitly; every other attribute reads as its declared default. Every
/// attribute therefore always has a value, possibly [`Value::Null`].
///
/// # Example
///
/// ```rust
/// use canopy_glyph::{Glyph, GlyphKind};
///
/// let mut wedge = Glyph::of(GlyphKind::Wedge);
/// assert!(wedge["x"].is_null());
/// assert_eq!(wedge["direction"], "anticlock");
///
/// wedge.set("radius", 0.5).unwrap();
/// wedge.set("fill_color", "firebrick").unwrap();
/// assert_eq!(wedge["radius"], 0.5);
/// assert!(wedge.set("colour", "red").is_err());
/// ```
#[derive(Clone)]
pub struct Glyph {
    schema: Arc<GlyphSchema>,
    values: ValueStore,
}

impl Glyph {
    /// Creates a glyph with every attribute at its default.
    #[must_use]
    pub fn new(schema: Arc<GlyphSchema>) -> Self {
        Self {
            schema,
            values: ValueStore::new(),
        }
    }

    /// Creates a glyph of a built-in kind with every attribute at its default.
    #[must_use]
    pub fn of(kind: GlyphKind) -> Self {
        Self::new(Arc::clone(catalog().schema(kind)))
    }

    /// Creates a glyph with the given attributes set and all others at their defaults.
    ///
    /// Fails on the first unknown name or ill-typed value.
    pub fn with_values<I, K, V>(schema: Arc<GlyphSchema>, values: I) -> Result<Self, PropertyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut glyph = Self::new(schema);
        for (name, value) in values {
            glyph.set(name.as_ref(), value)?;
        }
        Ok(glyph)
    }

    /// Returns the glyph's schema.
    #[must_use]
    #[inline]
    pub fn schema(&self) -> &Arc<GlyphSchema> {
        &self.schema
    }

    /// Returns the glyph kind name.
    #[must_use]
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        self.schema.name()
    }

    /// Returns the names of every attribute, in schema order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.schema.attribute_names()
    }

    fn resolve(&self, id: PropertyId) -> &Value {
        self.values
            .get(id)
            .unwrap_or_else(|| self.schema.attributes()[id.position()].default_value())
    }

    /// Returns the current value of `name`: the value set, else the declared default.
    pub fn get(&self, name: &str) -> Result<&Value, PropertyError> {
        self.schema.index_of(name).map(|id| self.resolve(id))
    }

    /// Sets `name`, returning the previously set value.
    ///
    /// The value is checked against the attribute's declared type and
    /// normalized the same way declared defaults are.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, PropertyError> {
        let id = self.schema.index_of(name)?;
        let attribute = &self.schema.attributes()[id.position()];
        let value = attribute
            .registration()
            .check(self.schema.name(), value.into())?;
        tracing::trace!(glyph = self.schema.name(), attribute = name, ?value, "set attribute");
        Ok(self.values.set(id, value))
    }

    /// Returns `name` to its declared default, returning the value that was set.
    pub fn reset(&mut self, name: &str) -> Result<Option<Value>, PropertyError> {
        let id = self.schema.index_of(name)?;
        Ok(self.values.clear(id))
    }

    /// Returns `true` if `name` holds its declared default because it was never set.
    pub fn is_default(&self, name: &str) -> Result<bool, PropertyError> {
        let id = self.schema.index_of(name)?;
        Ok(!self.values.contains(id))
    }

    /// Returns every attribute with its current value, in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.schema
            .attributes()
            .iter()
            .enumerate()
            .map(|(i, attribute)| (attribute.name(), self.resolve(PropertyId::from_position(i))))
    }

    /// Returns only the attributes that were set explicitly.
    pub fn set_values(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values
            .iter()
            .map(|(id, value)| (self.schema.attributes()[id.position()].name(), value))
    }
}

impl Index<&str> for Glyph {
    type Output = Value;

    /// Returns the current value of an attribute.
    ///
    /// # Panics
    ///
    /// Panics if the schema has no attribute called `name`.
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyph")
            .field("schema", &self.schema.name())
            .field("values", &self.set_values().collect::<Vec<_>>())
            .finish()
    }
}
