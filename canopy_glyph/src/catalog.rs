// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The catalog of built-in glyph kinds.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use canopy_property::{GroupCatalog, PropertyError, UnitDefaults};

use crate::definitions;
use crate::glyph::Glyph;
use crate::schema::GlyphSchema;

macro_rules! glyph_kinds {
    (
        glyphs { $($glyph:ident => $glyph_name:literal,)+ }
        markers { $($marker:ident => $marker_name:literal,)+ }
    ) => {
        /// The built-in glyph and marker kinds.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum GlyphKind {
            $(
                #[doc = concat!("The `", $glyph_name, "` glyph.")]
                $glyph,
            )+
            $(
                #[doc = concat!("The `", $marker_name, "` marker.")]
                $marker,
            )+
        }

        impl GlyphKind {
            /// Every kind, glyphs first, then markers.
            pub const ALL: &'static [Self] = &[$(Self::$glyph,)+ $(Self::$marker,)+];

            /// Returns the kind name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$glyph => $glyph_name,)+
                    $(Self::$marker => $marker_name,)+
                }
            }

            /// Returns `true` for scatter markers.
            #[must_use]
            pub const fn is_marker(self) -> bool {
                matches!(self, $(Self::$marker)|+)
            }
        }
    };
}

glyph_kinds! {
    glyphs {
        AnnularWedge => "AnnularWedge",
        Annulus => "Annulus",
        Arc => "Arc",
        Bezier => "Bezier",
        HArea => "HArea",
        HBar => "HBar",
        Image => "Image",
        ImageRgba => "ImageRGBA",
        ImageUrl => "ImageURL",
        Line => "Line",
        MultiLine => "MultiLine",
        MultiPolygons => "MultiPolygons",
        Oval => "Oval",
        Patch => "Patch",
        Patches => "Patches",
        Quad => "Quad",
        Quadratic => "Quadratic",
        Ray => "Ray",
        Rect => "Rect",
        Segment => "Segment",
        Step => "Step",
        Text => "Text",
        VArea => "VArea",
        VBar => "VBar",
        Wedge => "Wedge",
    }
    markers {
        Asterisk => "Asterisk",
        Circle => "Circle",
        CircleCross => "CircleCross",
        CircleX => "CircleX",
        Cross => "Cross",
        Dash => "Dash",
        Diamond => "Diamond",
        DiamondCross => "DiamondCross",
        InvertedTriangle => "InvertedTriangle",
        Square => "Square",
        SquareCross => "SquareCross",
        SquareX => "SquareX",
        Triangle => "Triangle",
        X => "X",
    }
}

impl GlyphKind {
    /// Looks up a kind by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for GlyphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlyphKind {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PropertyError::UnknownVariant {
            enumeration: "GlyphKind",
            name: s.to_string(),
        })
    }
}

/// Schemas for every built-in kind, composed from one set of groups.
///
/// Most code uses the process-wide [`catalog()`]. Build a separate catalog
/// to use different unit defaults.
///
/// # Example
///
/// ```rust
/// use canopy_glyph::{Catalog, GlyphKind};
/// use canopy_property::{AngleUnits, UnitDefaults};
///
/// let degrees = Catalog::with_unit_defaults(
///     UnitDefaults::default().with_angle(AngleUnits::Deg),
/// )
/// .unwrap();
/// let wedge = degrees.instantiate(GlyphKind::Wedge);
/// assert_eq!(wedge["start_angle_units"], "deg");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    groups: GroupCatalog,
    schemas: Vec<Arc<GlyphSchema>>,
}

impl Catalog {
    /// Composes every kind with the library-wide unit defaults.
    pub fn standard() -> Result<Self, PropertyError> {
        Self::with_unit_defaults(UnitDefaults::default())
    }

    /// Composes every kind with custom unit defaults.
    pub fn with_unit_defaults(unit_defaults: UnitDefaults) -> Result<Self, PropertyError> {
        let groups = GroupCatalog::with_unit_defaults(unit_defaults)?;
        let schemas = GlyphKind::ALL
            .iter()
            .map(|&kind| definitions::define(kind, &groups).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(kinds = schemas.len(), "composed glyph catalog");
        Ok(Self { groups, schemas })
    }

    /// Returns the schema of `kind`.
    #[must_use]
    pub fn schema(&self, kind: GlyphKind) -> &Arc<GlyphSchema> {
        &self.schemas[kind as usize]
    }

    /// Returns the schema of the kind called `name`.
    pub fn get(&self, name: &str) -> Result<&Arc<GlyphSchema>, PropertyError> {
        let kind: GlyphKind = name.parse()?;
        Ok(self.schema(kind))
    }

    /// Creates a glyph of `kind` with every attribute at its default.
    #[must_use]
    pub fn instantiate(&self, kind: GlyphKind) -> Glyph {
        Glyph::new(Arc::clone(self.schema(kind)))
    }

    /// Returns the groups the schemas were composed from.
    #[must_use]
    pub fn groups(&self) -> &GroupCatalog {
        &self.groups
    }

    /// Returns every kind with its schema.
    pub fn iter(&self) -> impl Iterator<Item = (GlyphKind, &Arc<GlyphSchema>)> {
        GlyphKind::ALL.iter().copied().zip(&self.schemas)
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| match Catalog::standard() {
    Ok(catalog) => catalog,
    Err(err) => panic!("built-in glyph catalog is malformed: {err}"),
});

/// Returns the process-wide catalog, composing it on first use.
///
/// # Panics
///
/// Panics if a built-in definition fails to compose. This is a defect in
/// this crate, not a runtime condition.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for &kind in GlyphKind::ALL {
            assert_eq!(GlyphKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string().parse::<GlyphKind>(), Ok(kind));
        }
        assert_eq!(GlyphKind::ImageUrl.name(), "ImageURL");
        assert_eq!(GlyphKind::ALL.len(), 39);
    }

    #[test]
    fn unknown_kind_name_fails() {
        assert_eq!(GlyphKind::from_name("Hexagon"), None);
        let err = catalog().get("Hexagon").unwrap_err();
        assert!(matches!(err, PropertyError::UnknownVariant { enumeration: "GlyphKind", .. }));
    }

    #[test]
    fn markers_are_flagged() {
        let markers = GlyphKind::ALL.iter().filter(|kind| kind.is_marker()).count();
        assert_eq!(markers, 14);
        assert!(GlyphKind::Circle.is_marker());
        assert!(!GlyphKind::Wedge.is_marker());
    }

    #[test]
    fn catalog_is_indexed_by_kind() {
        for (kind, schema) in catalog().iter() {
            assert_eq!(schema.name(), kind.name());
        }
        assert_eq!(catalog().get("Wedge").unwrap().name(), "Wedge");
    }

    #[test]
    fn every_kind_mixes_in_the_glyph_group() {
        for (kind, schema) in catalog().iter() {
            assert!(schema.mixes_in("glyph"), "{kind} lacks the glyph group");
            assert_eq!(schema.mixes_in("marker"), kind.is_marker(), "{kind}");
        }
    }

    #[test]
    fn shared_catalog_is_shared() {
        let a = Glyph::of(GlyphKind::Arc);
        let b = catalog().instantiate(GlyphKind::Arc);
        assert!(Arc::ptr_eq(a.schema(), b.schema()));
    }

    #[test]
    fn custom_unit_defaults_reach_own_and_group_attributes() {
        use canopy_property::{AngleUnits, SpatialUnits};

        let screen = Catalog::with_unit_defaults(
            UnitDefaults::default()
                .with_spatial(SpatialUnits::Screen)
                .with_angle(AngleUnits::Turn),
        )
        .unwrap();
        let circle = screen.instantiate(GlyphKind::Circle);
        assert_eq!(circle["radius_units"], SpatialUnits::Screen);
        assert_eq!(circle["angle_units"], AngleUnits::Turn);
        assert_eq!(screen.groups().unit_defaults().angle, AngleUnits::Turn);
    }
}
