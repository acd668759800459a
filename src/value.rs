use smol_str::{SmolStr, ToSmolStr};

use crate::quote::Quote;

/// A raw value handed to a predicate, an assignment or a having placeholder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(SmolStr),
}

impl Value {
    /// The literal used in a `where` predicate.
    ///
    /// `NULL`, `TRUE` and `FALSE` are keywords, numbers and numeric text
    /// are written unquoted, everything else goes through the quoter.
    pub(crate) fn normalize(&self, quoter: &dyn Quote) -> SmolStr {
        match self {
            Value::Null => SmolStr::new_static("NULL"),
            Value::Bool(true) => SmolStr::new_static("TRUE"),
            Value::Bool(false) => SmolStr::new_static("FALSE"),
            Value::Int(value) => value.to_smolstr(),
            Value::UInt(value) => value.to_smolstr(),
            Value::Float(value) if value.is_finite() => value.to_smolstr(),
            Value::Float(value) => quoter.quote(&value.to_smolstr()).into(),
            Value::Text(text) => {
                if is_numeric(text) {
                    SmolStr::new(text.trim())
                } else {
                    quoter.quote(text).into()
                }
            }
        }
    }

    /// Textual form handed to the quoter for assignments and placeholders.
    ///
    /// `Null` and `false` are empty, `true` is `1`.
    pub fn raw_text(&self) -> SmolStr {
        match self {
            Value::Null | Value::Bool(false) => SmolStr::default(),
            Value::Bool(true) => SmolStr::new_static("1"),
            Value::Int(value) => value.to_smolstr(),
            Value::UInt(value) => value.to_smolstr(),
            Value::Float(value) => value.to_smolstr(),
            Value::Text(text) => text.clone(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Decimal literal check: optional sign, digits with an optional fraction,
/// optional exponent. Surrounding whitespace is ignored.
pub(crate) fn is_numeric(text: &str) -> bool {
    let bytes = text.trim().as_bytes();
    let mut index = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }

    let int_start = index;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    let mut digits = index - int_start;

    if index < bytes.len() && bytes[index] == b'.' {
        index += 1;
        let frac_start = index;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        digits += index - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if index < bytes.len() && matches!(bytes[index], b'e' | b'E') {
        index += 1;
        if matches!(bytes.get(index), Some(b'+' | b'-')) {
            index += 1;
        }
        let exp_start = index;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        if index == exp_start {
            return false;
        }
    }

    index == bytes.len()
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! signed {
    ($($ty:ty),+) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Int(i64::from(self))
                }
            }
        )+
    };
}

macro_rules! unsigned {
    ($($ty:ty),+) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::UInt(u64::from(self))
                }
            }
        )+
    };
}

signed!(i8, i16, i32, i64);
unsigned!(u8, u16, u32, u64);

impl IntoValue for isize {
    fn into_value(self) -> Value {
        Value::Int(self as i64)
    }
}

impl IntoValue for usize {
    fn into_value(self) -> Value {
        Value::UInt(self as u64)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::new(self))
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::new(self))
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::from(self))
    }
}

impl IntoValue for SmolStr {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Text(self.to_smolstr())
    }
}
