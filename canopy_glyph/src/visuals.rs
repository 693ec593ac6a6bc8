// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed views of a glyph's group attributes.
//!
//! Each view reads one property group out of a [`Glyph`] into a plain struct
//! and can write it back. Reading fails with [`PropertyError::NotFound`] when
//! the glyph does not mix the group in.
//!
//! Attributes bound to a data field have no literal value. Their fields are
//! recorded in the view's [`FieldBindings`] and written back unchanged by
//! `apply`; the literal held for them (`None` for colors, the group default
//! for numbers) is only a placeholder.

use canopy_property::{
    Color, FontStyle, HatchPattern, LineCap, LineJoin, PropertyError, TextAlign, TextBaseline,
    Value,
};
use kurbo::{Cap, Join, Stroke};
use smallvec::SmallVec;

use crate::glyph::Glyph;

/// The attributes of a view that are bound to data fields.
///
/// ```rust
/// use canopy_glyph::{FillVisuals, Glyph, GlyphKind};
/// use canopy_property::Value;
///
/// let mut circle = Glyph::of(GlyphKind::Circle);
/// circle.set("fill_color", Value::field("colors")).unwrap();
///
/// let mut fill = FillVisuals::from_glyph(&circle).unwrap();
/// assert_eq!(fill.fields.get("fill_color"), Some("colors"));
///
/// fill.fields.bind("fill_alpha", "alphas");
/// fill.apply(&mut circle).unwrap();
/// assert_eq!(circle["fill_alpha"].as_field(), Some("alphas"));
/// assert_eq!(circle["fill_color"].as_field(), Some("colors"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldBindings(SmallVec<[(&'static str, String); 2]>);

impl FieldBindings {
    /// Returns the field `attribute` is bound to.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, field)| field.as_str())
    }

    /// Returns `true` if `attribute` is bound to a field.
    #[must_use]
    pub fn is_bound(&self, attribute: &str) -> bool {
        self.get(attribute).is_some()
    }

    /// Binds `attribute` to `field`, replacing any earlier binding.
    pub fn bind(&mut self, attribute: &'static str, field: impl Into<String>) {
        let field = field.into();
        match self.0.iter_mut().find(|(name, _)| *name == attribute) {
            Some(entry) => entry.1 = field,
            None => self.0.push((attribute, field)),
        }
    }

    /// Removes the binding of `attribute`, so its literal is written instead.
    pub fn unbind(&mut self, attribute: &str) -> Option<String> {
        let position = self.0.iter().position(|(name, _)| *name == attribute)?;
        Some(self.0.remove(position).1)
    }

    /// Returns the number of bound attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attribute is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(attribute, field)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(name, field)| (*name, field.as_str()))
    }
}

fn read<'g>(
    glyph: &'g Glyph,
    name: &'static str,
    fields: &mut FieldBindings,
) -> Result<&'g Value, PropertyError> {
    let value = glyph.get(name)?;
    if let Some(field) = value.as_field() {
        fields.bind(name, field);
    }
    Ok(value)
}

fn number(
    glyph: &Glyph,
    name: &'static str,
    fallback: f64,
    fields: &mut FieldBindings,
) -> Result<f64, PropertyError> {
    Ok(read(glyph, name, fields)?.as_f64().unwrap_or(fallback))
}

fn text(
    glyph: &Glyph,
    name: &'static str,
    fields: &mut FieldBindings,
) -> Result<Option<String>, PropertyError> {
    match read(glyph, name, fields)? {
        Value::Str(text) => Ok(Some(text.to_string())),
        _ => Ok(None),
    }
}

fn write(
    glyph: &mut Glyph,
    fields: &FieldBindings,
    name: &'static str,
    literal: impl Into<Value>,
) -> Result<(), PropertyError> {
    let value = match fields.get(name) {
        Some(field) => Value::field(field.to_owned()),
        None => literal.into(),
    };
    glyph.set(name, value)?;
    Ok(())
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "alpha is in 0..=1 and color channels are f32"
)]
fn with_alpha(color: Option<Color>, alpha: f64) -> Option<Color> {
    color.map(|color| color.multiply_alpha(alpha as f32))
}

/// The `fill` group of a glyph.
///
/// # Example
///
/// ```rust
/// use canopy_glyph::{FillVisuals, Glyph, GlyphKind};
///
/// let mut rect = Glyph::of(GlyphKind::Rect);
/// rect.set("fill_color", "#ff0000").unwrap();
/// rect.set("fill_alpha", 0.5).unwrap();
///
/// let fill = FillVisuals::from_glyph(&rect).unwrap();
/// let paint = fill.paint().unwrap();
/// assert_eq!(paint.to_rgba8().to_u8_array(), [255, 0, 0, 128]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FillVisuals {
    /// Fill color, if it is a literal color.
    pub color: Option<Color>,
    /// Fill opacity.
    pub alpha: f64,
    /// Attributes bound to data fields.
    pub fields: FieldBindings,
}

impl FillVisuals {
    /// Reads the fill attributes of `glyph`.
    pub fn from_glyph(glyph: &Glyph) -> Result<Self, PropertyError> {
        let mut fields = FieldBindings::default();
        Ok(Self {
            color: read(glyph, "fill_color", &mut fields)?.as_color(),
            alpha: number(glyph, "fill_alpha", 1.0, &mut fields)?,
            fields,
        })
    }

    /// Writes these values into `glyph`.
    pub fn apply(&self, glyph: &mut Glyph) -> Result<(), PropertyError> {
        write(glyph, &self.fields, "fill_color", self.color)?;
        write(glyph, &self.fields, "fill_alpha", self.alpha)
    }

    /// Returns the color to paint with, alpha applied.
    ///
    /// There is none when the color or the alpha is bound to a field.
    #[must_use]
    pub fn paint(&self) -> Option<Color> {
        if self.fields.is_bound("fill_color") || self.fields.is_bound("fill_alpha") {
            return None;
        }
        with_alpha(self.color, self.alpha)
    }
}

/// The `line` group of a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct LineVisuals {
    /// Stroke color, if it is a literal color.
    pub color: Option<Color>,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke opacity.
    pub alpha: f64,
    /// How segments are joined.
    pub join: LineJoin,
    /// How open ends are drawn.
    pub cap: LineCap,
    /// Alternating on and off lengths; empty for a solid line.
    pub dash: Vec<f64>,
    /// Offset into the dash pattern.
    pub dash_offset: i64,
    /// Attributes bound to data fields.
    pub fields: FieldBindings,
}

impl LineVisuals {
    /// Reads the line attributes of `glyph`.
    pub fn from_glyph(glyph: &Glyph) -> Result<Self, PropertyError> {
        let mut fields = FieldBindings::default();
        Ok(Self {
            color: read(glyph, "line_color", &mut fields)?.as_color(),
            width: number(glyph, "line_width", 1.0, &mut fields)?,
            alpha: number(glyph, "line_alpha", 1.0, &mut fields)?,
            join: read(glyph, "line_join", &mut fields)?
                .as_enum::<LineJoin>()
                .unwrap_or(LineJoin::Bevel),
            cap: read(glyph, "line_cap", &mut fields)?
                .as_enum::<LineCap>()
                .unwrap_or(LineCap::Butt),
            dash: read(glyph, "line_dash", &mut fields)?
                .as_numbers()
                .map(<[f64]>::to_vec)
                .unwrap_or_default(),
            dash_offset: read(glyph, "line_dash_offset", &mut fields)?
                .as_i64()
                .unwrap_or(0),
            fields,
        })
    }

    /// Writes these values into `glyph`.
    pub fn apply(&self, glyph: &mut Glyph) -> Result<(), PropertyError> {
        write(glyph, &self.fields, "line_color", self.color)?;
        write(glyph, &self.fields, "line_width", self.width)?;
        write(glyph, &self.fields, "line_alpha", self.alpha)?;
        write(glyph, &self.fields, "line_join", self.join)?;
        write(glyph, &self.fields, "line_cap", self.cap)?;
        write(glyph, &self.fields, "line_dash", Value::Numbers(self.dash.clone()))?;
        write(glyph, &self.fields, "line_dash_offset", self.dash_offset)
    }

    /// Returns the color to stroke with, alpha applied.
    ///
    /// There is none when the color or the alpha is bound to a field.
    #[must_use]
    pub fn paint(&self) -> Option<Color> {
        if self.fields.is_bound("line_color") || self.fields.is_bound("line_alpha") {
            return None;
        }
        with_alpha(self.color, self.alpha)
    }

    /// Returns the stroke style these attributes describe.
    ///
    /// A field-bound width strokes with the width held in the view.
    ///
    /// ```rust
    /// use canopy_glyph::{Glyph, GlyphKind, LineVisuals};
    /// use kurbo::{Cap, Join};
    ///
    /// let mut line = Glyph::of(GlyphKind::Line);
    /// line.set("line_width", 3.0).unwrap();
    /// line.set("line_dash", "dashed").unwrap();
    ///
    /// let stroke = LineVisuals::from_glyph(&line).unwrap().to_stroke();
    /// assert_eq!(stroke.width, 3.0);
    /// assert_eq!(stroke.join, Join::Bevel);
    /// assert_eq!(stroke.start_cap, Cap::Butt);
    /// assert_eq!(stroke.dash_pattern.as_slice(), &[6.0]);
    /// ```
    #[must_use]
    pub fn to_stroke(&self) -> Stroke {
        let join = match self.join {
            LineJoin::Miter => Join::Miter,
            LineJoin::Round => Join::Round,
            LineJoin::Bevel => Join::Bevel,
        };
        let cap = match self.cap {
            LineCap::Butt => Cap::Butt,
            LineCap::Round => Cap::Round,
            LineCap::Square => Cap::Square,
        };
        Stroke::new(self.width)
            .with_join(join)
            .with_caps(cap)
            .with_dashes(self.dash_offset as f64, self.dash.iter().copied())
    }
}

/// The `hatch` group of a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct HatchVisuals {
    /// Hatch color, if it is a literal color.
    pub color: Option<Color>,
    /// Hatch opacity.
    pub alpha: f64,
    /// Pattern tile size in pixels.
    pub scale: f64,
    /// The pattern, if any.
    pub pattern: Option<HatchPattern>,
    /// Pattern line weight in pixels.
    pub weight: f64,
    /// Attributes bound to data fields.
    pub fields: FieldBindings,
}

impl HatchVisuals {
    /// Reads the hatch attributes of `glyph`.
    pub fn from_glyph(glyph: &Glyph) -> Result<Self, PropertyError> {
        let mut fields = FieldBindings::default();
        Ok(Self {
            color: read(glyph, "hatch_color", &mut fields)?.as_color(),
            alpha: number(glyph, "hatch_alpha", 1.0, &mut fields)?,
            scale: number(glyph, "hatch_scale", 12.0, &mut fields)?,
            pattern: read(glyph, "hatch_pattern", &mut fields)?.as_enum::<HatchPattern>(),
            weight: number(glyph, "hatch_weight", 1.0, &mut fields)?,
            fields,
        })
    }

    /// Writes these values into `glyph`. `hatch_extra` is left alone.
    pub fn apply(&self, glyph: &mut Glyph) -> Result<(), PropertyError> {
        write(glyph, &self.fields, "hatch_color", self.color)?;
        write(glyph, &self.fields, "hatch_alpha", self.alpha)?;
        write(glyph, &self.fields, "hatch_scale", self.scale)?;
        write(glyph, &self.fields, "hatch_pattern", self.pattern)?;
        write(glyph, &self.fields, "hatch_weight", self.weight)
    }

    /// Returns `true` if a pattern other than blank is set.
    ///
    /// A field-bound pattern counts as visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.fields.is_bound("hatch_pattern")
            || !matches!(self.pattern, None | Some(HatchPattern::Blank))
    }
}

/// The `text` group of a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct TextVisuals {
    /// Font family.
    pub font: Option<String>,
    /// CSS font size, such as `"12pt"`.
    pub font_size: Option<String>,
    /// Font style.
    pub font_style: FontStyle,
    /// Text color, if it is a literal color.
    pub color: Option<Color>,
    /// Text opacity.
    pub alpha: f64,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Vertical anchor.
    pub baseline: TextBaseline,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Attributes bound to data fields.
    pub fields: FieldBindings,
}

impl TextVisuals {
    /// Reads the text attributes of `glyph`.
    pub fn from_glyph(glyph: &Glyph) -> Result<Self, PropertyError> {
        let mut fields = FieldBindings::default();
        Ok(Self {
            font: text(glyph, "text_font", &mut fields)?,
            font_size: text(glyph, "text_font_size", &mut fields)?,
            font_style: read(glyph, "text_font_style", &mut fields)?
                .as_enum::<FontStyle>()
                .unwrap_or(FontStyle::Normal),
            color: read(glyph, "text_color", &mut fields)?.as_color(),
            alpha: number(glyph, "text_alpha", 1.0, &mut fields)?,
            align: read(glyph, "text_align", &mut fields)?
                .as_enum::<TextAlign>()
                .unwrap_or(TextAlign::Left),
            baseline: read(glyph, "text_baseline", &mut fields)?
                .as_enum::<TextBaseline>()
                .unwrap_or(TextBaseline::Bottom),
            line_height: number(glyph, "text_line_height", 1.2, &mut fields)?,
            fields,
        })
    }

    /// Writes these values into `glyph`.
    pub fn apply(&self, glyph: &mut Glyph) -> Result<(), PropertyError> {
        write(glyph, &self.fields, "text_font", self.font.clone())?;
        write(glyph, &self.fields, "text_font_size", self.font_size.clone())?;
        write(glyph, &self.fields, "text_font_style", self.font_style)?;
        write(glyph, &self.fields, "text_color", self.color)?;
        write(glyph, &self.fields, "text_alpha", self.alpha)?;
        write(glyph, &self.fields, "text_align", self.align)?;
        write(glyph, &self.fields, "text_baseline", self.baseline)?;
        write(glyph, &self.fields, "text_line_height", self.line_height)
    }

    /// Returns the font size in CSS pixels, for `px`, `pt` and `em` sizes.
    ///
    /// One `em` is taken as 16 pixels.
    #[must_use]
    pub fn font_size_px(&self) -> Option<f64> {
        let size = self.font_size.as_deref()?.trim();
        // (numerator, denominator) of the conversion to pixels.
        let (number, (num, den)) = if let Some(n) = size.strip_suffix("px") {
            (n, (1.0, 1.0))
        } else if let Some(n) = size.strip_suffix("pt") {
            (n, (4.0, 3.0))
        } else if let Some(n) = size.strip_suffix("em") {
            (n, (16.0, 1.0))
        } else {
            return None;
        };
        number.trim().parse::<f64>().ok().map(|n| n * num / den)
    }

    /// Returns the color to draw text with, alpha applied.
    ///
    /// There is none when the color or the alpha is bound to a field.
    #[must_use]
    pub fn paint(&self) -> Option<Color> {
        if self.fields.is_bound("text_color") || self.fields.is_bound("text_alpha") {
            return None;
        }
        with_alpha(self.color, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlyphKind;

    #[test]
    fn default_fill_is_gray() {
        let fill = FillVisuals::from_glyph(&Glyph::of(GlyphKind::Quad)).unwrap();
        assert_eq!(fill.alpha, 1.0);
        assert_eq!(
            fill.paint().unwrap().to_rgba8(),
            Color::from_rgb8(0x80, 0x80, 0x80).to_rgba8()
        );
    }

    #[test]
    fn views_require_their_group() {
        let line = Glyph::of(GlyphKind::Line);
        assert_eq!(
            FillVisuals::from_glyph(&line),
            Err(PropertyError::not_found("Line", "fill_color"))
        );
        assert!(TextVisuals::from_glyph(&line).is_err());
        assert!(LineVisuals::from_glyph(&line).is_ok());
    }

    #[test]
    fn field_colors_have_no_paint() {
        let mut circle = Glyph::of(GlyphKind::Circle);
        circle.set("fill_color", Value::field("colors")).unwrap();
        let fill = FillVisuals::from_glyph(&circle).unwrap();
        assert_eq!(fill.color, None);
        assert_eq!(fill.paint(), None);
    }

    #[test]
    fn field_bindings_survive_a_round_trip() {
        let mut circle = Glyph::of(GlyphKind::Circle);
        circle.set("fill_color", Value::field("colors")).unwrap();
        circle.set("fill_alpha", Value::field("alphas")).unwrap();
        circle.set("line_width", Value::field("widths")).unwrap();

        let fill = FillVisuals::from_glyph(&circle).unwrap();
        assert_eq!(fill.fields.len(), 2);
        assert_eq!(fill.paint(), None);
        fill.apply(&mut circle).unwrap();
        assert_eq!(circle["fill_color"].as_field(), Some("colors"));
        assert_eq!(circle["fill_alpha"].as_field(), Some("alphas"));

        let line = LineVisuals::from_glyph(&circle).unwrap();
        assert_eq!(line.fields.get("line_width"), Some("widths"));
        assert_eq!(line.to_stroke().width, 1.0);
        line.apply(&mut circle).unwrap();
        assert_eq!(circle["line_width"].as_field(), Some("widths"));
        assert_eq!(circle["line_color"], Color::BLACK);
    }

    #[test]
    fn unbound_attributes_write_their_literal() {
        let mut text = Glyph::of(GlyphKind::Text);
        text.set("text_color", Value::field("colors")).unwrap();
        text.set("text_font", Value::field("fonts")).unwrap();

        let mut visuals = TextVisuals::from_glyph(&text).unwrap();
        assert_eq!(visuals.font, None);
        assert_eq!(visuals.fields.unbind("text_color").as_deref(), Some("colors"));
        visuals.color = Some(Color::WHITE);
        visuals.apply(&mut text).unwrap();

        assert_eq!(text["text_font"].as_field(), Some("fonts"));
        assert_eq!(
            text["text_color"].as_color().map(|c| c.to_rgba8()),
            Some(Color::WHITE.to_rgba8())
        );
    }

    #[test]
    fn field_bound_hatch_pattern_is_visible() {
        let mut area = Glyph::of(GlyphKind::HArea);
        area.set("hatch_pattern", Value::field("patterns")).unwrap();
        let hatch = HatchVisuals::from_glyph(&area).unwrap();
        assert_eq!(hatch.pattern, None);
        assert!(hatch.is_visible());
        hatch.apply(&mut area).unwrap();
        assert_eq!(area["hatch_pattern"].as_field(), Some("patterns"));
    }

    #[test]
    fn line_round_trips_through_a_glyph() {
        let mut source = Glyph::of(GlyphKind::Segment);
        source.set("line_join", "round").unwrap();
        source.set("line_cap", "square").unwrap();
        source.set("line_dash", "dotdash").unwrap();
        source.set("line_dash_offset", 2).unwrap();
        let line = LineVisuals::from_glyph(&source).unwrap();
        assert_eq!(line.dash, [2.0, 4.0, 6.0, 4.0]);

        let mut target = Glyph::of(GlyphKind::Bezier);
        line.apply(&mut target).unwrap();
        assert_eq!(LineVisuals::from_glyph(&target).unwrap(), line);
    }

    #[test]
    fn stroke_matches_line_attributes() {
        let line = LineVisuals {
            color: Some(Color::BLACK),
            width: 2.5,
            alpha: 1.0,
            join: LineJoin::Miter,
            cap: LineCap::Round,
            dash: vec![4.0, 2.0],
            dash_offset: 1,
            fields: FieldBindings::default(),
        };
        let stroke = line.to_stroke();
        assert_eq!(stroke.width, 2.5);
        assert_eq!(stroke.join, Join::Miter);
        assert_eq!(stroke.end_cap, Cap::Round);
        assert_eq!(stroke.dash_offset, 1.0);
        assert_eq!(stroke.dash_pattern.as_slice(), &[4.0, 2.0]);
    }

    #[test]
    fn hatch_visibility() {
        let mut area = Glyph::of(GlyphKind::VArea);
        let hatch = HatchVisuals::from_glyph(&area).unwrap();
        assert!(!hatch.is_visible());
        assert_eq!(hatch.scale, 12.0);

        area.set("hatch_pattern", "/").unwrap();
        let hatch = HatchVisuals::from_glyph(&area).unwrap();
        assert_eq!(hatch.pattern, Some(HatchPattern::RightDiagonalLine));
        assert!(hatch.is_visible());

        let blank = HatchVisuals {
            pattern: Some(HatchPattern::Blank),
            ..hatch
        };
        assert!(!blank.is_visible());
        blank.apply(&mut area).unwrap();
        assert_eq!(area["hatch_pattern"], HatchPattern::Blank);
    }

    #[test]
    fn text_defaults_and_font_size() {
        let mut glyph = Glyph::of(GlyphKind::Text);
        let text = TextVisuals::from_glyph(&glyph).unwrap();
        assert_eq!(text.font.as_deref(), Some("helvetica"));
        assert_eq!(text.font_size_px(), Some(16.0));
        assert_eq!(text.baseline, TextBaseline::Bottom);

        let larger = TextVisuals {
            font_size: Some("2em".to_string()),
            font_style: FontStyle::BoldItalic,
            ..text
        };
        larger.apply(&mut glyph).unwrap();
        assert_eq!(glyph["text_font_style"], "bold italic");
        assert_eq!(
            TextVisuals::from_glyph(&glyph).unwrap().font_size_px(),
            Some(32.0)
        );
    }

    #[test]
    fn font_size_rejects_unknown_units() {
        let text = TextVisuals::from_glyph(&Glyph::of(GlyphKind::Text)).unwrap();
        let relative = TextVisuals {
            font_size: Some("larger".to_string()),
            ..text
        };
        assert_eq!(relative.font_size_px(), None);
    }
}
