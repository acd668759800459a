use std::fmt;

use smol_str::SmolStr;

use crate::{
    ident::Ident,
    operator::Operator,
    raw::Raw,
    writer::{FormatContext, FormatWriter},
};

/// How a predicate combines with the one before it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    /// `AND` when additive, `OR` otherwise.
    pub fn additive(additive: bool) -> Self {
        if additive {
            Conjunction::And
        } else {
            Conjunction::Or
        }
    }
}

impl FormatWriter for Conjunction {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Conjunction::And => context.writer.write_str("AND"),
            Conjunction::Or => context.writer.write_str("OR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredicateKind {
    /// `column operator value`, with the value already rendered.
    Binary {
        column: Ident,
        operator: Operator,
        value: SmolStr,
    },
    /// A literal boolean expression.
    Raw(Raw),
}

impl FormatWriter for PredicateKind {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            PredicateKind::Binary {
                column,
                operator,
                value,
            } => {
                column.format_writer(context)?;
                context.writer.write_char(' ')?;
                operator.format_writer(context)?;
                context.writer.write_char(' ')?;
                context.writer.write_str(value)
            }
            PredicateKind::Raw(raw) => raw.format_writer(context),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    conjunction: Conjunction,
    kind: PredicateKind,
}

impl Predicate {
    pub fn new(conjunction: Conjunction, kind: PredicateKind) -> Self {
        Self { conjunction, kind }
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn kind(&self) -> &PredicateKind {
        &self.kind
    }
}

impl FormatWriter for Predicate {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.kind.format_writer(context)
    }
}

/// Ordered predicates of a `WHERE` or `HAVING` clause.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Predicates(Vec<Predicate>);

impl Predicates {
    pub fn push(&mut self, predicate: Predicate) {
        self.0.push(predicate);
    }

    pub fn push_binary(
        &mut self,
        conjunction: Conjunction,
        column: Ident,
        operator: Operator,
        value: SmolStr,
    ) {
        let kind = PredicateKind::Binary {
            column,
            operator,
            value,
        };
        self.push(Predicate::new(conjunction, kind));
    }

    pub fn push_raw(&mut self, conjunction: Conjunction, raw: Raw) {
        self.push(Predicate::new(conjunction, PredicateKind::Raw(raw)));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.0.iter()
    }
}

impl FormatWriter for Predicates {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, predicate) in self.0.iter().enumerate() {
            // the leading conjunction has nothing to join
            if index > 0 {
                context.writer.write_char(' ')?;
                predicate.conjunction.format_writer(context)?;
                context.writer.write_char(' ')?;
            }
            predicate.format_writer(context)?;
        }
        Ok(())
    }
}
