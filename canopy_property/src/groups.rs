// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The standard property groups shared by glyph kinds.

use alloc::vec::Vec;
use core::fmt;

use crate::enums::{FontStyle, LineCap, LineJoin, TextAlign, TextBaseline};
use crate::error::PropertyError;
use crate::group::{PropertyGroup, PropertyGroupBuilder};
use crate::kind::{UnitDefaults, ValueKind};
use crate::metadata::{PropertyMetadata, PropertyMetadataBuilder};
use crate::value::Value;

/// Tags of the standard property groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupTag {
    /// Interior fill: color and alpha.
    Fill,
    /// Stroke: color, width, alpha, join, cap and dashing.
    Line,
    /// Hatch pattern drawn over the fill.
    Hatch,
    /// Font and text layout.
    Text,
    /// Position, size and rotation shared by scatter markers.
    Marker,
    /// Attributes every glyph model carries: name, tags and callbacks.
    Glyph,
}

impl GroupTag {
    /// Every tag, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Fill,
        Self::Line,
        Self::Hatch,
        Self::Text,
        Self::Marker,
        Self::Glyph,
    ];

    /// Returns the group name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Hatch => "hatch",
            Self::Text => "text",
            Self::Marker => "marker",
            Self::Glyph => "glyph",
        }
    }

    /// Builds the standard group for this tag.
    pub fn build(self, unit_defaults: UnitDefaults) -> Result<PropertyGroup, PropertyError> {
        let builder = PropertyGroupBuilder::new(self.name()).unit_defaults(unit_defaults);
        match self {
            Self::Fill => builder
                .register("fill_color", with_default(ValueKind::Color, "gray"))
                .register("fill_alpha", with_default(ValueKind::Alpha, 1.0)),
            Self::Line => builder
                .register("line_color", with_default(ValueKind::Color, "black"))
                .register("line_width", with_default(ValueKind::Number, 1.0))
                .register("line_alpha", with_default(ValueKind::Alpha, 1.0))
                .register(
                    "line_join",
                    with_default(ValueKind::of_enum::<LineJoin>(), LineJoin::Bevel),
                )
                .register(
                    "line_cap",
                    with_default(ValueKind::of_enum::<LineCap>(), LineCap::Butt),
                )
                .register(
                    "line_dash",
                    with_default(ValueKind::DashPattern, Value::Numbers(Vec::new())),
                )
                .register("line_dash_offset", with_default(ValueKind::Int, 0)),
            Self::Hatch => builder
                .register("hatch_color", with_default(ValueKind::Color, "black"))
                .register("hatch_alpha", with_default(ValueKind::Alpha, 1.0))
                .register("hatch_scale", with_default(ValueKind::Number, 12.0))
                .register("hatch_pattern", PropertyMetadata::new(ValueKind::HatchPattern))
                .register("hatch_weight", with_default(ValueKind::Number, 1.0))
                .register("hatch_extra", with_default(ValueKind::Map, Value::empty_map())),
            Self::Text => builder
                .register("text_font", with_default(ValueKind::Str, "helvetica"))
                .register("text_font_size", with_default(ValueKind::FontSize, "12pt"))
                .register(
                    "text_font_style",
                    with_default(ValueKind::of_enum::<FontStyle>(), FontStyle::Normal),
                )
                .register("text_color", with_default(ValueKind::Color, "#444444"))
                .register("text_alpha", with_default(ValueKind::Alpha, 1.0))
                .register(
                    "text_align",
                    with_default(ValueKind::of_enum::<TextAlign>(), TextAlign::Left),
                )
                .register(
                    "text_baseline",
                    with_default(ValueKind::of_enum::<TextBaseline>(), TextBaseline::Bottom),
                )
                .register("text_line_height", with_default(ValueKind::Number, 1.2)),
            Self::Marker => builder
                .register("x", PropertyMetadata::new(ValueKind::Number))
                .register("y", PropertyMetadata::new(ValueKind::Number))
                .register("size", with_default(ValueKind::ScreenDistance, 4.0))
                .register("angle", with_default(ValueKind::Angle, 0.0)),
            Self::Glyph => builder
                .register("name", PropertyMetadata::new(ValueKind::Str))
                .register("tags", with_default(ValueKind::List, Value::empty_list()))
                .register(
                    "js_property_callbacks",
                    with_default(ValueKind::Map, Value::empty_map()),
                )
                .register(
                    "js_event_callbacks",
                    with_default(ValueKind::Map, Value::empty_map()),
                )
                .register(
                    "subscribed_events",
                    with_default(ValueKind::List, Value::empty_list()),
                ),
        }
        .build()
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn with_default(kind: ValueKind, value: impl Into<Value>) -> PropertyMetadata {
    PropertyMetadataBuilder::new(kind).default_value(value).build()
}

/// The standard groups, built once with shared unit defaults.
///
/// # Example
///
/// ```rust
/// use canopy_property::{GroupCatalog, GroupTag, LineJoin};
///
/// let groups = GroupCatalog::standard().unwrap();
/// let line = groups.get(GroupTag::Line);
///
/// assert_eq!(line.len(), 7);
/// assert_eq!(*line.default_for("line_join").unwrap(), LineJoin::Bevel);
/// ```
#[derive(Clone, Debug)]
pub struct GroupCatalog {
    groups: Vec<PropertyGroup>,
    unit_defaults: UnitDefaults,
}

impl GroupCatalog {
    /// Builds the standard groups with the library-wide unit defaults.
    pub fn standard() -> Result<Self, PropertyError> {
        Self::with_unit_defaults(UnitDefaults::default())
    }

    /// Builds the standard groups with custom unit defaults.
    pub fn with_unit_defaults(unit_defaults: UnitDefaults) -> Result<Self, PropertyError> {
        let groups = GroupTag::ALL
            .iter()
            .map(|tag| tag.build(unit_defaults))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            groups,
            unit_defaults,
        })
    }

    /// Returns the group for `tag`.
    #[must_use]
    pub fn get(&self, tag: GroupTag) -> &PropertyGroup {
        &self.groups[tag as usize]
    }

    /// Returns the unit defaults the groups were built with.
    #[must_use]
    pub fn unit_defaults(&self) -> UnitDefaults {
        self.unit_defaults
    }

    /// Returns every group with its tag.
    pub fn iter(&self) -> impl Iterator<Item = (GroupTag, &PropertyGroup)> {
        GroupTag::ALL.into_iter().zip(&self.groups)
    }
}
