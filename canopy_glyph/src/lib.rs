// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Glyph: glyph schemas composed from shared property groups.
//!
//! Every plotting primitive (a wedge, a bar, an image, a scatter marker)
//! declares a few attributes of its own and mixes in reusable property
//! groups from `canopy_property`: fill, line, hatch, text, marker and the
//! glyph base group. This crate flattens those declarations into one
//! [`GlyphSchema`] per kind and creates [`Glyph`] instances from it.
//!
//! ## Composition
//!
//! - [`SchemaBuilder`] puts own attributes first, each unit-bearing one
//!   followed by its `<name>_units` companion, then each group in mix-in
//!   order. Own attributes and groups must be disjoint; a repeated name is a
//!   [`PropertyError::SchemaConflict`](canopy_property::PropertyError::SchemaConflict).
//! - Glyph-level default overrides win over group defaults.
//! - Schemas are immutable once built and shared behind an [`Arc`](std::sync::Arc).
//!
//! ## Instances
//!
//! A [`Glyph`] stores only the values set explicitly. Reading any other
//! attribute yields its declared default, so every attribute always has a
//! value. Values are checked against the declared type when set.
//!
//! ## Catalog
//!
//! [`catalog()`] returns the process-wide [`Catalog`] of the built-in
//! [`GlyphKind`]s, composed on first use and read-only afterwards.
//!
//! ```rust
//! use canopy_glyph::{Glyph, GlyphKind, catalog};
//!
//! let bar = Glyph::of(GlyphKind::HBar);
//! assert_eq!(bar["left"], 0_i64);
//! assert!(bar["right"].is_null());
//!
//! let schema = catalog().schema(GlyphKind::HBar);
//! let own: Vec<_> = schema.own_attribute_names().collect();
//! assert_eq!(own, ["y", "height", "left", "right"]);
//! assert_eq!(schema.groups(), ["fill", "hatch", "line", "glyph"]);
//! ```
//!
//! ## Typed views
//!
//! [`FillVisuals`], [`LineVisuals`], [`HatchVisuals`] and [`TextVisuals`]
//! read one group of a glyph into a struct and write it back. Data-field
//! bindings are kept in [`FieldBindings`]. [`LineVisuals::to_stroke`]
//! produces a [`kurbo::Stroke`].

mod catalog;
mod compose;
mod definitions;
mod glyph;
mod schema;
mod visuals;

pub use catalog::{Catalog, GlyphKind, catalog};
pub use compose::SchemaBuilder;
pub use glyph::Glyph;
pub use schema::{AttributeSource, GlyphSchema, SchemaAttribute};
pub use visuals::{FieldBindings, FillVisuals, HatchVisuals, LineVisuals, TextVisuals};
