// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamically typed property values.
//!
//! This module provides [`Value`], the representation every glyph attribute
//! holds regardless of its declared [`ValueKind`](crate::ValueKind).

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use peniko::Color;

use crate::enums::{EnumValue, NamedEnum};

/// A property value.
///
/// Equality follows the loose rules plotting users expect: integers and
/// floats compare numerically, and a value compares equal to a `&str` when it
/// is a string, a field reference or an enumeration variant of that name.
///
/// # Example
///
/// ```rust
/// use canopy_property::{LineJoin, Value};
///
/// assert_eq!(Value::Int(0), Value::Float(0.0));
/// assert_eq!(Value::from(LineJoin::Bevel), "bevel");
/// assert_eq!(Value::field("x"), "x");
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A literal string.
    Str(Cow<'static, str>),
    /// A reference to a named column of the glyph's data source.
    Field(Cow<'static, str>),
    /// An enumeration variant.
    Enum(EnumValue),
    /// A color.
    Color(Color),
    /// A flat list of numbers, such as a dash pattern.
    Numbers(Vec<f64>),
    /// A heterogeneous list.
    List(Vec<Value>),
    /// A string-keyed map.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Creates a reference to the data column `name`.
    #[must_use]
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Field(name.into())
    }

    /// Creates an empty list.
    #[must_use]
    pub const fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Creates an empty map.
    #[must_use]
    pub const fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value of an integer or float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text of a string, a field reference or an enumeration variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Field(s) => Some(s),
            Self::Enum(e) => Some(e.name()),
            _ => None,
        }
    }

    /// Returns the field name, if this references a data column.
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the color, if this is one.
    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the number list, if this is one.
    #[must_use]
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Self::Numbers(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the concrete enumeration variant, if this holds a variant of `E`.
    #[must_use]
    pub fn as_enum<E: NamedEnum>(&self) -> Option<E> {
        match self {
            Self::Enum(e) => e.get(),
            _ => None,
        }
    }

    /// Returns a short name for the variant held, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Field(_) => "field",
            Self::Enum(e) => e.info().name(),
            Self::Color(_) => "color",
            Self::Numbers(_) => "number list",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) | (Self::Field(a), Self::Field(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            // Colors compare at 8-bit precision so that parsed and constructed colors agree.
            (Self::Color(a), Self::Color(b)) => a.to_rgba8() == b.to_rgba8(),
            (Self::Numbers(a), Self::Numbers(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Self::Int(i) => i == other,
            _ => self == &Self::Int(*other),
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Color> for Value {
    fn eq(&self, other: &Color) -> bool {
        self == &Self::Color(*other)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Self::Numbers(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
