// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared property types.
//!
//! A [`ValueKind`] says which [`Value`]s an attribute accepts and how loosely
//! written input (color names, enum names, dash shorthands) is normalized
//! before it is stored. [`UnitKind`] and [`UnitDefaults`] describe the
//! companion `<name>_units` attributes of distances and angles.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use peniko::color::{Srgb, parse_color};

use crate::enums::{
    AngleUnits, DashPattern, EnumInfo, EnumValue, HatchPattern, NamedEnum, SpatialUnits,
};
use crate::value::Value;

/// The declared type of a property.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Anything.
    Any,
    /// A boolean. Never null.
    Bool,
    /// An integer. Never null.
    Int,
    /// A number or a data field. A bare string is read as a field name.
    Number,
    /// A data-space or screen-space distance. Carries spatial units.
    Distance,
    /// A distance always measured in screen pixels. Carries no units.
    ScreenDistance,
    /// An angle. Carries angle units.
    Angle,
    /// An opacity in `0.0..=1.0`, or a data field. Never null.
    Alpha,
    /// A string or a data field.
    Str,
    /// A CSS font size such as `"12pt"`, or a data field.
    FontSize,
    /// A color; strings are parsed as CSS colors.
    Color,
    /// A list of on/off lengths; named patterns and space-separated strings are expanded.
    DashPattern,
    /// A hatch pattern; names and one-character shorthands are accepted.
    HatchPattern,
    /// A variant of the given enumeration; variant names are accepted.
    Enum(&'static EnumInfo),
    /// Array data such as an image: numbers, nested lists or a data field.
    Array,
    /// A list.
    List,
    /// A string-keyed map.
    Map,
    /// A reference to another model, by name.
    Instance,
}

impl ValueKind {
    /// Returns the enumeration kind of `E`.
    #[must_use]
    pub const fn of_enum<E: NamedEnum>() -> Self {
        Self::Enum(E::INFO)
    }

    /// Returns a short human-readable description, used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Any => "any value",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Number => "number",
            Self::Distance => "distance",
            Self::ScreenDistance => "screen distance",
            Self::Angle => "angle",
            Self::Alpha => "alpha",
            Self::Str => "string",
            Self::FontSize => "font size",
            Self::Color => "color",
            Self::DashPattern => "dash pattern",
            Self::HatchPattern => "hatch pattern",
            Self::Enum(info) => info.name(),
            Self::Array => "array",
            Self::List => "list",
            Self::Map => "map",
            Self::Instance => "instance",
        }
    }

    /// Returns the unit kind implied by this type, if any.
    #[must_use]
    pub const fn units(self) -> Option<UnitKind> {
        match self {
            Self::Distance => Some(UnitKind::Spatial),
            Self::Angle => Some(UnitKind::Angle),
            _ => None,
        }
    }

    /// Returns `true` if null is an accepted value.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        !matches!(
            self,
            Self::Bool
                | Self::Int
                | Self::Alpha
                | Self::DashPattern
                | Self::Enum(_)
                | Self::List
                | Self::Map
        )
    }

    /// Checks `value` against this type, normalizing accepted shorthands.
    ///
    /// Returns the value to store, or gives `value` back if it is rejected.
    pub fn coerce(self, value: Value) -> Result<Value, Value> {
        if value.is_null() {
            return if self.is_nullable() {
                Ok(value)
            } else {
                Err(value)
            };
        }
        match (self, value) {
            (Self::Any, value) => Ok(value),
            (Self::Bool, value @ Value::Bool(_)) => Ok(value),
            (Self::Int, value @ Value::Int(_)) => Ok(value),
            (
                Self::Number | Self::Distance | Self::ScreenDistance | Self::Angle,
                value @ (Value::Int(_) | Value::Float(_) | Value::Field(_)),
            ) => Ok(value),
            (Self::Alpha, value @ Value::Field(_)) => Ok(value),
            (Self::Alpha, value @ (Value::Int(_) | Value::Float(_))) => {
                match value.as_f64() {
                    Some(alpha) if (0.0..=1.0).contains(&alpha) => Ok(value),
                    _ => Err(value),
                }
            }
            (Self::Str | Self::FontSize, value @ (Value::Str(_) | Value::Field(_))) => Ok(value),
            (Self::Color, value @ (Value::Color(_) | Value::Field(_))) => Ok(value),
            (Self::Color, Value::Str(text)) => match parse_color(&text) {
                Ok(color) => Ok(Value::Color(color.to_alpha_color::<Srgb>())),
                Err(_) => Err(Value::Str(text)),
            },
            (Self::DashPattern, value @ Value::Numbers(_)) => Ok(value),
            (Self::DashPattern, Value::List(items)) => numbers_from_list(&items)
                .map(Value::Numbers)
                .ok_or(Value::List(items)),
            (Self::DashPattern, Value::Str(text)) => {
                parse_dash_pattern(&text).map(Value::Numbers).ok_or(Value::Str(text))
            }
            (Self::DashPattern, Value::Enum(e)) => match e.get::<DashPattern>() {
                Some(pattern) => Ok(Value::Numbers(pattern.lengths().to_vec())),
                None => Err(Value::Enum(e)),
            },
            (Self::HatchPattern, value @ Value::Field(_)) => Ok(value),
            (Self::HatchPattern, Value::Enum(e)) if e.get::<HatchPattern>().is_some() => {
                Ok(Value::Enum(e))
            }
            (Self::HatchPattern, Value::Str(text)) => {
                parse_hatch_pattern(&text).map(Value::from).ok_or(Value::Str(text))
            }
            (Self::Enum(info), Value::Enum(e)) if e.info().name() == info.name() => {
                Ok(Value::Enum(e))
            }
            (Self::Enum(info), Value::Str(text)) => {
                EnumValue::lookup(info, &text).map(Value::Enum).ok_or(Value::Str(text))
            }
            (
                Self::Array,
                value @ (Value::Numbers(_) | Value::List(_) | Value::Field(_)),
            ) => Ok(value),
            (Self::List, value @ Value::List(_)) => Ok(value),
            (Self::List, Value::Numbers(numbers)) => {
                Ok(Value::List(numbers.into_iter().map(Value::Float).collect()))
            }
            (Self::Map, value @ Value::Map(_)) => Ok(value),
            (Self::Instance, value @ Value::Str(_)) => Ok(value),
            // A bare string names a data field.
            (
                Self::Number
                | Self::Distance
                | Self::ScreenDistance
                | Self::Angle
                | Self::Alpha
                | Self::Array,
                Value::Str(name),
            ) => Ok(Value::Field(name)),
            (_, value) => Err(value),
        }
    }
}

fn numbers_from_list(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(Value::as_f64).collect()
}

fn parse_dash_pattern(text: &str) -> Option<Vec<f64>> {
    if let Some(pattern) = DashPattern::from_name(text) {
        return Some(pattern.lengths().to_vec());
    }
    text.split_whitespace()
        .map(|length| length.parse::<f64>().ok())
        .collect()
}

fn parse_hatch_pattern(text: &str) -> Option<HatchPattern> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => HatchPattern::from_abbreviation(c),
        _ => HatchPattern::from_name(text),
    }
}

/// The family of units a unit-bearing attribute is measured in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Screen or data space; see [`SpatialUnits`].
    Spatial,
    /// Angle units; see [`AngleUnits`].
    Angle,
}

impl UnitKind {
    /// Returns the declared type of the companion `<name>_units` attribute.
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Spatial => ValueKind::of_enum::<SpatialUnits>(),
            Self::Angle => ValueKind::of_enum::<AngleUnits>(),
        }
    }

    /// Returns the name of the companion attribute for `name`.
    #[must_use]
    pub fn companion_name(name: &str) -> Cow<'static, str> {
        Cow::Owned(alloc::format!("{name}_units"))
    }
}

/// Library-wide defaults for companion unit attributes.
///
/// # Example
///
/// ```rust
/// use canopy_property::{AngleUnits, SpatialUnits, UnitDefaults, UnitKind};
///
/// let defaults = UnitDefaults::default();
/// assert_eq!(defaults.default_for(UnitKind::Spatial), SpatialUnits::Data);
/// assert_eq!(defaults.default_for(UnitKind::Angle), AngleUnits::Rad);
///
/// let degrees = UnitDefaults::default().with_angle(AngleUnits::Deg);
/// assert_eq!(degrees.default_for(UnitKind::Angle), AngleUnits::Deg);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnitDefaults {
    /// Default for spatial units.
    pub spatial: SpatialUnits,
    /// Default for angle units.
    pub angle: AngleUnits,
}

impl UnitDefaults {
    /// Returns these defaults with a different spatial default.
    #[must_use]
    pub const fn with_spatial(mut self, spatial: SpatialUnits) -> Self {
        self.spatial = spatial;
        self
    }

    /// Returns these defaults with a different angle default.
    #[must_use]
    pub const fn with_angle(mut self, angle: AngleUnits) -> Self {
        self.angle = angle;
        self
    }

    /// Returns the default value for a companion attribute of `kind`.
    #[must_use]
    pub fn default_for(&self, kind: UnitKind) -> Value {
        match kind {
            UnitKind::Spatial => self.spatial.into(),
            UnitKind::Angle => self.angle.into(),
        }
    }
}

impl Default for UnitDefaults {
    fn default() -> Self {
        Self {
            spatial: SpatialUnits::Data,
            angle: AngleUnits::Rad,
        }
    }
}
