// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Property: typed property declarations for plotting glyphs.
//!
//! This crate provides the leaves of Canopy's glyph model: dynamically typed
//! property [`Value`]s, declared types ([`ValueKind`]), per-property
//! [`PropertyMetadata`], and named, reusable [`PropertyGroup`]s such as fill,
//! line and text. Composing groups into per-glyph schemas is handled by
//! `canopy_glyph`.
//!
//! ## Core Concepts
//!
//! ### Property Groups
//!
//! A [`PropertyGroup`] is an immutable, ordered bundle of declarations. The
//! standard groups are listed by [`GroupTag`] and built together by
//! [`GroupCatalog`]:
//!
//! - **fill** - `fill_color`, `fill_alpha`
//! - **line** - `line_color`, `line_width`, `line_alpha`, `line_join`, `line_cap`,
//!   `line_dash`, `line_dash_offset`
//! - **hatch** - `hatch_color`, `hatch_alpha`, `hatch_scale`, `hatch_pattern`,
//!   `hatch_weight`, `hatch_extra`
//! - **text** - `text_font`, `text_font_size`, `text_font_style`, `text_color`,
//!   `text_alpha`, `text_align`, `text_baseline`, `text_line_height`
//! - **marker** - `x`, `y`, `size`, `angle`, `angle_units`
//! - **glyph** - `name`, `tags`, `js_property_callbacks`, `js_event_callbacks`, `subscribed_events`
//!
//! ### Units
//!
//! Distances and angles carry a companion `<name>_units` attribute. The
//! companion is generated when a group is built, right after its property,
//! with a default taken from [`UnitDefaults`] unless the property overrides it.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_property::{
//!     PropertyGroupBuilder, PropertyMetadataBuilder, SpatialUnits, Value, ValueKind,
//! };
//!
//! let group = PropertyGroupBuilder::new("shape")
//!     .register("radius", PropertyMetadataBuilder::new(ValueKind::Distance).build())
//!     .register(
//!         "fill_color",
//!         PropertyMetadataBuilder::new(ValueKind::Color)
//!             .default_value("gray")
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let names: Vec<_> = group.attribute_names().collect();
//! assert_eq!(names, ["radius", "radius_units", "fill_color"]);
//! assert_eq!(*group.default_for("radius_units").unwrap(), SpatialUnits::Data);
//! assert!(matches!(group.default_for("fill_color").unwrap(), Value::Color(_)));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `libm` instead of the
//! default `std` feature for targets without the standard library.

#![no_std]

extern crate alloc;

mod enums;
mod error;
mod group;
mod groups;
mod id;
mod kind;
mod metadata;
mod store;
mod value;

pub use enums::{
    Anchor, AngleUnits, DashPattern, Direction, EnumInfo, EnumValue, FontStyle, HatchPattern,
    LineCap, LineJoin, NamedEnum, RadiusDimension, SpatialUnits, StepMode, TextAlign,
    TextBaseline,
};
pub use error::PropertyError;
pub use group::{PropertyGroup, PropertyGroupBuilder, PropertyRegistration};
pub use groups::{GroupCatalog, GroupTag};
pub use id::PropertyId;
pub use kind::{UnitDefaults, UnitKind, ValueKind};
pub use metadata::{PropertyMetadata, PropertyMetadataBuilder};
pub use store::ValueStore;
pub use value::Value;

/// Re-exported so dependants name the same color type without depending on `peniko`.
pub use peniko::Color;
