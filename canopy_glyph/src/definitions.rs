// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Own attributes, mixed-in groups and default overrides of each built-in kind.

use canopy_property::{
    Anchor, Direction, GroupCatalog, GroupTag, PropertyError, PropertyMetadata,
    PropertyMetadataBuilder, RadiusDimension, StepMode, Value, ValueKind,
};

use crate::catalog::GlyphKind;
use crate::compose::SchemaBuilder;
use crate::schema::GlyphSchema;

const FILL_LINE: &[GroupTag] = &[GroupTag::Fill, GroupTag::Line];
const FILL_HATCH: &[GroupTag] = &[GroupTag::Fill, GroupTag::Hatch];
const FILL_HATCH_LINE: &[GroupTag] = &[GroupTag::Fill, GroupTag::Hatch, GroupTag::Line];
const LINE: &[GroupTag] = &[GroupTag::Line];
const TEXT: &[GroupTag] = &[GroupTag::Text];
const MARKER: &[GroupTag] = &[GroupTag::Marker, GroupTag::Fill, GroupTag::Line];
const NONE: &[GroupTag] = &[];

fn number() -> PropertyMetadata {
    PropertyMetadata::new(ValueKind::Number)
}

fn distance() -> PropertyMetadata {
    PropertyMetadata::new(ValueKind::Distance)
}

fn angle() -> PropertyMetadata {
    PropertyMetadata::new(ValueKind::Angle)
}

fn array() -> PropertyMetadata {
    PropertyMetadata::new(ValueKind::Array)
}

fn with_default(kind: ValueKind, value: impl Into<Value>) -> PropertyMetadata {
    PropertyMetadataBuilder::new(kind).default_value(value).build()
}

fn direction() -> PropertyMetadata {
    with_default(ValueKind::of_enum::<Direction>(), Direction::Anticlock)
}

fn coordinates<'g>(
    builder: SchemaBuilder<'g>,
    names: &[&'static str],
    kind: fn() -> PropertyMetadata,
) -> SchemaBuilder<'g> {
    names.iter().fold(builder, |builder, &name| builder.own(name, kind()))
}

/// Composes the schema of `kind` from `groups`.
pub(crate) fn define(kind: GlyphKind, groups: &GroupCatalog) -> Result<GlyphSchema, PropertyError> {
    let builder = SchemaBuilder::new(kind.name()).unit_defaults(groups.unit_defaults());

    let (builder, tags) = match kind {
        GlyphKind::AnnularWedge => (
            coordinates(builder, &["x", "y"], number)
                .own("inner_radius", distance())
                .own("outer_radius", distance())
                .own("start_angle", angle())
                .own("end_angle", angle())
                .own("direction", direction()),
            FILL_LINE,
        ),
        GlyphKind::Annulus => (
            coordinates(builder, &["x", "y"], number)
                .own("inner_radius", distance())
                .own("outer_radius", distance()),
            FILL_LINE,
        ),
        GlyphKind::Arc => (
            coordinates(builder, &["x", "y"], number)
                .own("radius", distance())
                .own("start_angle", angle())
                .own("end_angle", angle())
                .own("direction", direction()),
            LINE,
        ),
        GlyphKind::Bezier => (
            coordinates(
                builder,
                &["x0", "y0", "x1", "y1", "cx0", "cy0", "cx1", "cy1"],
                number,
            ),
            LINE,
        ),
        GlyphKind::HArea => (coordinates(builder, &["y", "x1", "x2"], number), FILL_HATCH),
        GlyphKind::HBar => (
            coordinates(builder, &["y", "height"], number)
                .own("left", with_default(ValueKind::Number, 0))
                .own("right", number()),
            FILL_HATCH_LINE,
        ),
        GlyphKind::Image => (
            image(builder).own("color_mapper", PropertyMetadata::new(ValueKind::Instance)),
            NONE,
        ),
        GlyphKind::ImageRgba => (image(builder), NONE),
        GlyphKind::ImageUrl => (
            builder
                .own("url", PropertyMetadata::new(ValueKind::Str))
                .own("x", number())
                .own("y", number())
                .own("w", distance())
                .own("h", distance())
                .own("angle", with_default(ValueKind::Angle, 0.0))
                .own("dilate", with_default(ValueKind::Bool, false))
                .own(
                    "anchor",
                    with_default(ValueKind::of_enum::<Anchor>(), Anchor::TopLeft),
                )
                .own("retry_attempts", with_default(ValueKind::Int, 0))
                .own("retry_timeout", with_default(ValueKind::Int, 0))
                .own("global_alpha", with_default(ValueKind::Alpha, 1.0)),
            NONE,
        ),
        GlyphKind::Line => (coordinates(builder, &["x", "y"], number), LINE),
        GlyphKind::MultiLine => (coordinates(builder, &["xs", "ys"], array), LINE),
        GlyphKind::MultiPolygons => (coordinates(builder, &["xs", "ys"], array), FILL_HATCH_LINE),
        GlyphKind::Oval => (
            coordinates(builder, &["x", "y"], number)
                .own("width", distance())
                .own("height", distance())
                .own("angle", with_default(ValueKind::Angle, 0.0)),
            FILL_LINE,
        ),
        GlyphKind::Patch => (coordinates(builder, &["x", "y"], number), FILL_HATCH_LINE),
        GlyphKind::Patches => (coordinates(builder, &["xs", "ys"], array), FILL_HATCH_LINE),
        GlyphKind::Quad => (
            coordinates(builder, &["left", "right", "bottom", "top"], number),
            FILL_HATCH_LINE,
        ),
        GlyphKind::Quadratic => (
            coordinates(builder, &["x0", "y0", "x1", "y1", "cx", "cy"], number),
            LINE,
        ),
        GlyphKind::Ray => (
            coordinates(builder, &["x", "y"], number)
                .own("angle", angle())
                .own("length", distance()),
            LINE,
        ),
        GlyphKind::Rect => (
            coordinates(builder, &["x", "y"], number)
                .own("width", distance())
                .own("height", distance())
                .own("angle", with_default(ValueKind::Angle, 0.0))
                .own("dilate", with_default(ValueKind::Bool, false)),
            FILL_LINE,
        ),
        GlyphKind::Segment => (coordinates(builder, &["x0", "y0", "x1", "y1"], number), LINE),
        GlyphKind::Step => (
            coordinates(builder, &["x", "y"], number).own(
                "mode",
                with_default(ValueKind::of_enum::<StepMode>(), StepMode::Before),
            ),
            LINE,
        ),
        GlyphKind::Text => (
            coordinates(builder, &["x", "y"], number)
                .own("text", with_default(ValueKind::Str, Value::field("text")))
                .own("angle", with_default(ValueKind::Angle, 0.0))
                .own("x_offset", with_default(ValueKind::ScreenDistance, 0.0))
                .own("y_offset", with_default(ValueKind::ScreenDistance, 0.0)),
            TEXT,
        ),
        GlyphKind::VArea => (coordinates(builder, &["x", "y1", "y2"], number), FILL_HATCH),
        GlyphKind::VBar => (
            coordinates(builder, &["x", "width", "top"], number)
                .own("bottom", with_default(ValueKind::Number, 0)),
            FILL_HATCH_LINE,
        ),
        GlyphKind::Wedge => (
            coordinates(builder, &["x", "y"], number)
                .own("radius", distance())
                .own("start_angle", angle())
                .own("end_angle", angle())
                .own("direction", direction()),
            FILL_LINE,
        ),
        GlyphKind::Circle => (
            builder.own("radius", distance()).own(
                "radius_dimension",
                with_default(ValueKind::of_enum::<RadiusDimension>(), RadiusDimension::X),
            ),
            MARKER,
        ),
        // Every other marker differs only in how it is drawn.
        _ => (builder, MARKER),
    };

    tags.iter()
        .chain(&[GroupTag::Glyph])
        .fold(builder, |builder, &tag| builder.mixin(groups.get(tag)))
        .build()
}

fn image(builder: SchemaBuilder<'_>) -> SchemaBuilder<'_> {
    builder
        .own("image", array())
        .own("x", number())
        .own("y", number())
        .own("dw", distance())
        .own("dh", distance())
        .own("global_alpha", with_default(ValueKind::Alpha, 1.0))
        .own("dilate", with_default(ValueKind::Bool, false))
}
