use std::fmt;

use smol_str::SmolStr;

use crate::writer::{FormatContext, FormatWriter};

/// A literal SQL fragment such as `COUNT(id) > ?`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Raw(SmolStr);

impl Raw {
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Replace every `?` placeholder with `literal`.
    ///
    /// Question marks inside quoted literals or quoted identifiers are kept,
    /// as are the `??`, `?|` and `?&` operators.
    pub fn bind(&self, literal: &str) -> Self {
        let sql = self.0.as_str();

        enum State {
            Normal,
            Ident,
            Lit,
        }

        let mut out = String::with_capacity(sql.len() + literal.len());
        let mut state = State::Normal;
        let mut chars = sql.chars().peekable();

        while let Some(char) = chars.next() {
            match state {
                State::Normal => match char {
                    '\'' => {
                        out.push(char);
                        state = State::Lit;
                    }
                    '"' => {
                        out.push(char);
                        state = State::Ident;
                    }
                    '?' => {
                        let is_placeholder = match chars.peek() {
                            Some(&next) => next != '?' && next != '|' && next != '&',
                            None => true,
                        };
                        if is_placeholder {
                            out.push_str(literal);
                        } else {
                            // keep the operator whole
                            out.push(char);
                            if let Some(next) = chars.next() {
                                out.push(next);
                            }
                        }
                    }
                    _ => out.push(char),
                },
                State::Ident | State::Lit => {
                    out.push(char);
                    let closing = if matches!(state, State::Lit) { '\'' } else { '"' };
                    if char == closing {
                        // doubled quote stays inside
                        if let Some(&next) = chars.peek() {
                            if next == closing {
                                out.push(next);
                                chars.next();
                                continue;
                            }
                        }
                        state = State::Normal;
                    }
                }
            }
        }

        Self(SmolStr::from(out))
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatWriter for Raw {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

pub trait IntoRaw {
    fn into_raw(self) -> Raw;
}

impl IntoRaw for Raw {
    fn into_raw(self) -> Raw {
        self
    }
}

impl IntoRaw for &str {
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for &String {
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for String {
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for SmolStr {
    fn into_raw(self) -> Raw {
        Raw(self)
    }
}
