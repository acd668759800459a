use std::fmt;

use smol_str::SmolStr;

use crate::{
    array::Array,
    ident::{Ident, IntoIdent},
    writer::{FormatContext, FormatWriter},
};

/// Sort direction, written verbatim. Empty means none.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Direction(SmolStr);

impl Direction {
    pub fn new<T: Into<SmolStr>>(value: T) -> Self {
        Self(value.into())
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Asc,
    Desc,
}

pub trait IntoDirection {
    fn into_direction(self) -> Direction;
}

impl IntoDirection for Direction {
    fn into_direction(self) -> Direction {
        self
    }
}

impl IntoDirection for Ordering {
    fn into_direction(self) -> Direction {
        match self {
            Ordering::Asc => Direction(SmolStr::new_static("ASC")),
            Ordering::Desc => Direction(SmolStr::new_static("DESC")),
        }
    }
}

impl IntoDirection for &str {
    fn into_direction(self) -> Direction {
        Direction::new(self)
    }
}

impl IntoDirection for String {
    fn into_direction(self) -> Direction {
        Direction::new(self)
    }
}

impl<T: IntoDirection> IntoDirection for Option<T> {
    fn into_direction(self) -> Direction {
        self.map(IntoDirection::into_direction).unwrap_or_default()
    }
}

/// Directions paired with ordered fields. `None` counts as one empty direction.
pub type Directions = Array<Direction>;

pub trait IntoDirections {
    fn into_directions(self) -> Directions;
}

impl IntoDirections for () {
    fn into_directions(self) -> Directions {
        Directions::None
    }
}

impl<T: IntoDirection> IntoDirections for T {
    fn into_directions(self) -> Directions {
        Directions::One(self.into_direction())
    }
}

impl<T: IntoDirection> IntoDirections for Vec<T> {
    fn into_directions(self) -> Directions {
        Directions::Many(self.into_iter().map(IntoDirection::into_direction).collect())
    }
}

impl<T: IntoDirection, const N: usize> IntoDirections for [T; N] {
    fn into_directions(self) -> Directions {
        Directions::Many(self.into_iter().map(IntoDirection::into_direction).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderExpr {
    column: Ident,
    direction: Direction,
}

impl OrderExpr {
    pub fn new<C: IntoIdent, D: IntoDirection>(column: C, direction: D) -> Self {
        Self {
            column: column.into_ident(),
            direction: direction.into_direction(),
        }
    }
}

impl FormatWriter for OrderExpr {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        self.column.format_writer(context)?;
        if !self.direction.is_empty() {
            context.writer.write_char(' ')?;
            context.writer.write_str(self.direction.as_str())?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderBy(Vec<OrderExpr>);

impl OrderBy {
    /// Pair fields and directions by position, truncating the longer side.
    ///
    /// Missing directions count as a single empty one, so only the first
    /// field is kept.
    pub fn zip(fields: Array<Ident>, directions: Directions) -> Self {
        let directions = match directions {
            Directions::None => Directions::One(Direction::none()),
            directions => directions,
        };
        let projections = fields
            .into_iter()
            .zip(directions)
            .map(|(column, direction)| OrderExpr { column, direction })
            .collect();
        Self(projections)
    }

    pub fn push(&mut self, expr: OrderExpr) {
        self.0.push(expr);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FormatWriter for OrderBy {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.write_list(&self.0)
    }
}
