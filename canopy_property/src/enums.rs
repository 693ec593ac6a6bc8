// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated property values.
//!
//! Every enumeration used as a property value has a stable lowercase name per
//! variant. [`NamedEnum`] exposes those names together with an [`EnumInfo`]
//! descriptor, which is what [`ValueKind::Enum`](crate::ValueKind::Enum)
//! validates against.

use alloc::string::ToString;
use core::fmt;

use crate::error::PropertyError;
use crate::value::Value;

/// Static description of an enumeration: its type name and variant names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumInfo {
    name: &'static str,
    variants: &'static [&'static str],
}

impl EnumInfo {
    /// Creates a new descriptor.
    #[must_use]
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    /// Returns the enumeration's type name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the variant names in declaration order.
    #[must_use]
    #[inline]
    pub const fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    /// Returns the declaration index of the variant called `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<u8> {
        self.variants
            .iter()
            .position(|variant| *variant == name)
            .and_then(|index| u8::try_from(index).ok())
    }
}

/// An enumeration whose variants have stable string names.
pub trait NamedEnum: Copy + 'static {
    /// Descriptor shared by every value of this enumeration.
    const INFO: &'static EnumInfo;

    /// Returns the declaration index of this variant.
    fn index(self) -> u8;

    /// Returns the variant at `index`, if any.
    fn from_index(index: u8) -> Option<Self>;

    /// Returns the stable name of this variant.
    fn name(self) -> &'static str {
        Self::INFO.variants()[usize::from(self.index())]
    }

    /// Looks up a variant by its stable name.
    fn from_name(name: &str) -> Option<Self> {
        Self::INFO.position(name).and_then(Self::from_index)
    }
}

/// A type-erased enumeration value, as stored in a [`Value`].
#[derive(Copy, Clone)]
pub struct EnumValue {
    info: &'static EnumInfo,
    index: u8,
}

impl EnumValue {
    /// Erases a concrete enumeration value.
    #[must_use]
    pub fn of<E: NamedEnum>(value: E) -> Self {
        Self {
            info: E::INFO,
            index: value.index(),
        }
    }

    /// Looks up `name` in `info`.
    #[must_use]
    pub fn lookup(info: &'static EnumInfo, name: &str) -> Option<Self> {
        info.position(name).map(|index| Self { info, index })
    }

    /// Returns the descriptor of the enumeration this value belongs to.
    #[must_use]
    #[inline]
    pub fn info(&self) -> &'static EnumInfo {
        self.info
    }

    /// Returns the variant name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.info.variants()[usize::from(self.index)]
    }

    /// Recovers the concrete enumeration, if this value belongs to `E`.
    #[must_use]
    pub fn get<E: NamedEnum>(&self) -> Option<E> {
        if self.info.name() == E::INFO.name() {
            E::from_index(self.index)
        } else {
            None
        }
    }
}

// Descriptors are compared by name: the same `const` may be instantiated more than once.
impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.info.name() == other.info.name()
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.info.name(), self.name())
    }
}

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $label:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        impl NamedEnum for $name {
            const INFO: &'static EnumInfo = &EnumInfo::new($label, &[$($text,)+]);

            fn index(self) -> u8 {
                self as u8
            }

            fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(usize::from(index)).copied()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(NamedEnum::name(*self))
            }
        }

        impl core::str::FromStr for $name {
            type Err = PropertyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as NamedEnum>::from_name(s).ok_or_else(|| PropertyError::UnknownVariant {
                    enumeration: $label,
                    name: s.to_string(),
                })
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Self::Enum(EnumValue::of(value))
            }
        }

        impl PartialEq<$name> for Value {
            fn eq(&self, other: &$name) -> bool {
                self.as_enum::<$name>() == Some(*other)
            }
        }
    };
}

named_enum! {
    /// Coordinate space of a distance.
    pub enum SpatialUnits as "SpatialUnits" {
        /// Screen pixels.
        Screen => "screen",
        /// Data-space units.
        Data => "data",
    }
}

named_enum! {
    /// Unit of an angle.
    pub enum AngleUnits as "AngleUnits" {
        /// Degrees.
        Deg => "deg",
        /// Radians.
        Rad => "rad",
        /// Gradians.
        Grad => "grad",
        /// Full turns.
        Turn => "turn",
    }
}

named_enum! {
    /// Sweep direction of arcs and wedges.
    pub enum Direction as "Direction" {
        /// Clockwise.
        Clock => "clock",
        /// Counter-clockwise.
        Anticlock => "anticlock",
    }
}

named_enum! {
    /// Where a step glyph places the level change relative to each point.
    pub enum StepMode as "StepMode" {
        /// Change level before the point.
        Before => "before",
        /// Change level after the point.
        After => "after",
        /// Change level halfway between points.
        Center => "center",
    }
}

named_enum! {
    /// Anchor point of a box relative to its position.
    pub enum Anchor as "Anchor" {
        /// Top-left corner.
        TopLeft => "top_left",
        /// Middle of the top edge.
        TopCenter => "top_center",
        /// Top-right corner.
        TopRight => "top_right",
        /// Middle of the left edge.
        CenterLeft => "center_left",
        /// Center.
        Center => "center",
        /// Middle of the right edge.
        CenterRight => "center_right",
        /// Bottom-left corner.
        BottomLeft => "bottom_left",
        /// Middle of the bottom edge.
        BottomCenter => "bottom_center",
        /// Bottom-right corner.
        BottomRight => "bottom_right",
    }
}

named_enum! {
    /// Join style between line segments.
    pub enum LineJoin as "LineJoin" {
        /// Sharp corner.
        Miter => "miter",
        /// Rounded corner.
        Round => "round",
        /// Cut-off corner.
        Bevel => "bevel",
    }
}

named_enum! {
    /// Cap style at the ends of open lines.
    pub enum LineCap as "LineCap" {
        /// Flat end at the endpoint.
        Butt => "butt",
        /// Semicircular end.
        Round => "round",
        /// Square end extending past the endpoint.
        Square => "square",
    }
}

named_enum! {
    /// Named dash patterns accepted by `line_dash`.
    pub enum DashPattern as "DashPattern" {
        /// No dashes.
        Solid => "solid",
        /// Long dashes.
        Dashed => "dashed",
        /// Dots.
        Dotted => "dotted",
        /// Dot then dash.
        DotDash => "dotdash",
        /// Dash then dot.
        DashDot => "dashdot",
    }
}

impl DashPattern {
    /// Returns the on/off lengths (in pixels) this pattern expands to.
    #[must_use]
    pub const fn lengths(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[6.0],
            Self::Dotted => &[2.0, 4.0],
            Self::DotDash => &[2.0, 4.0, 6.0, 4.0],
            Self::DashDot => &[6.0, 4.0, 2.0, 4.0],
        }
    }
}

named_enum! {
    /// Font style of text.
    pub enum FontStyle as "FontStyle" {
        /// Upright.
        Normal => "normal",
        /// Italic.
        Italic => "italic",
        /// Bold.
        Bold => "bold",
        /// Bold and italic.
        BoldItalic => "bold italic",
    }
}

named_enum! {
    /// Horizontal alignment of text relative to its anchor.
    pub enum TextAlign as "TextAlign" {
        /// Left-aligned.
        Left => "left",
        /// Right-aligned.
        Right => "right",
        /// Centered.
        Center => "center",
    }
}

named_enum! {
    /// Vertical alignment of text relative to its anchor.
    pub enum TextBaseline as "TextBaseline" {
        /// Top of the em square.
        Top => "top",
        /// Middle of the em square.
        Middle => "middle",
        /// Bottom of the em square.
        Bottom => "bottom",
        /// Alphabetic baseline.
        Alphabetic => "alphabetic",
        /// Hanging baseline.
        Hanging => "hanging",
        /// Ideographic baseline.
        Ideographic => "ideographic",
    }
}

named_enum! {
    /// Which axis a data-space radius is measured along.
    pub enum RadiusDimension as "RadiusDimension" {
        /// Horizontal axis.
        X => "x",
        /// Vertical axis.
        Y => "y",
        /// Whichever axis yields the larger radius.
        Max => "max",
        /// Whichever axis yields the smaller radius.
        Min => "min",
    }
}

named_enum! {
    /// Hatch fill patterns.
    pub enum HatchPattern as "HatchPattern" {
        /// No pattern.
        Blank => "blank",
        /// Dots.
        Dot => "dot",
        /// Rings.
        Ring => "ring",
        /// Horizontal lines.
        HorizontalLine => "horizontal_line",
        /// Vertical lines.
        VerticalLine => "vertical_line",
        /// Horizontal and vertical lines.
        Cross => "cross",
        /// Horizontal dashes.
        HorizontalDash => "horizontal_dash",
        /// Vertical dashes.
        VerticalDash => "vertical_dash",
        /// Spirals.
        Spiral => "spiral",
        /// Lines rising to the right.
        RightDiagonalLine => "right_diagonal_line",
        /// Lines rising to the left.
        LeftDiagonalLine => "left_diagonal_line",
        /// Both diagonals.
        DiagonalCross => "diagonal_cross",
        /// Dashes rising to the right.
        RightDiagonalDash => "right_diagonal_dash",
        /// Dashes rising to the left.
        LeftDiagonalDash => "left_diagonal_dash",
        /// Horizontal waves.
        HorizontalWave => "horizontal_wave",
        /// Vertical waves.
        VerticalWave => "vertical_wave",
        /// Dense cross-hatching.
        CrissCross => "criss_cross",
    }
}

impl HatchPattern {
    /// Maps a one-character shorthand to its pattern.
    #[must_use]
    pub const fn from_abbreviation(c: char) -> Option<Self> {
        Some(match c {
            ' ' => Self::Blank,
            '.' => Self::Dot,
            'o' => Self::Ring,
            '-' => Self::HorizontalLine,
            '|' => Self::VerticalLine,
            '+' => Self::Cross,
            '"' => Self::HorizontalDash,
            ':' => Self::VerticalDash,
            '@' => Self::Spiral,
            '/' => Self::RightDiagonalLine,
            '\\' => Self::LeftDiagonalLine,
            'x' => Self::DiagonalCross,
            ',' => Self::RightDiagonalDash,
            '`' => Self::LeftDiagonalDash,
            'v' => Self::HorizontalWave,
            '>' => Self::VerticalWave,
            '*' => Self::CrissCross,
            _ => return None,
        })
    }
}
