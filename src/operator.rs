use std::fmt;

use quarry_derive::BinaryOperator;
use smol_str::SmolStr;

use crate::writer::{FormatContext, FormatWriter};

/// Comparison between a column and a value, or between two join columns.
#[derive(Debug, Default, Clone, PartialEq, Eq, BinaryOperator)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[default]
    Eq,
    NotEq,
    Different,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    #[binary(ignore)]
    Is,
    #[binary(ignore)]
    IsNot,
    /// Anything else, written as given.
    Raw(SmolStr),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Different => "<>",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Is => "IS",
            Operator::IsNot => "IS NOT",
            Operator::Raw(raw) => raw.as_str(),
        }
    }

    /// The operator to use against a `NULL` literal.
    pub(crate) fn against_null(&self) -> Self {
        if matches!(self, Operator::Eq) {
            Operator::Is
        } else {
            Operator::IsNot
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatWriter for Operator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

pub trait IntoOperator {
    fn into_operator(self) -> Operator;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Operator {
        self
    }
}

impl IntoOperator for &str {
    fn into_operator(self) -> Operator {
        match self {
            "=" => Operator::Eq,
            "!=" => Operator::NotEq,
            "<>" => Operator::Different,
            "<" => Operator::Lt,
            "<=" => Operator::Lte,
            ">" => Operator::Gt,
            ">=" => Operator::Gte,
            "LIKE" => Operator::Like,
            "NOT LIKE" => Operator::NotLike,
            "IS" => Operator::Is,
            "IS NOT" => Operator::IsNot,
            other => Operator::Raw(SmolStr::new(other)),
        }
    }
}

impl IntoOperator for String {
    fn into_operator(self) -> Operator {
        self.as_str().into_operator()
    }
}

impl IntoOperator for char {
    fn into_operator(self) -> Operator {
        let mut buf = [0; 4];
        self.encode_utf8(&mut buf).into_operator()
    }
}
