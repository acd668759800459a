use std::fmt;

use smol_str::SmolStr;

use crate::{
    ident::{Ident, IntoIdent},
    operator::Operator,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
    Cross,
    /// Written as given, followed by `JOIN`.
    Raw(SmolStr),
}

impl FormatWriter for JoinType {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            JoinType::Inner => context.writer.write_str("INNER JOIN"),
            JoinType::Left => context.writer.write_str("LEFT JOIN"),
            JoinType::Right => context.writer.write_str("RIGHT JOIN"),
            JoinType::Full => context.writer.write_str("FULL JOIN"),
            JoinType::Cross => context.writer.write_str("CROSS JOIN"),
            JoinType::Raw(raw) => {
                context.writer.write_str(raw)?;
                context.writer.write_str(" JOIN")
            }
        }
    }
}

pub trait IntoJoinType {
    fn into_join_type(self) -> JoinType;
}

impl IntoJoinType for JoinType {
    fn into_join_type(self) -> JoinType {
        self
    }
}

impl IntoJoinType for &str {
    fn into_join_type(self) -> JoinType {
        match self {
            "INNER" => JoinType::Inner,
            "LEFT" => JoinType::Left,
            "RIGHT" => JoinType::Right,
            "FULL" => JoinType::Full,
            "CROSS" => JoinType::Cross,
            other => JoinType::Raw(SmolStr::new(other)),
        }
    }
}

/// The table being joined and, optionally, the table its condition
/// compares against. Without one the statement's main table is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinTable {
    Single(Ident),
    Pair { joined: Ident, other: Ident },
}

impl JoinTable {
    pub fn joined(&self) -> &Ident {
        match self {
            JoinTable::Single(joined) | JoinTable::Pair { joined, .. } => joined,
        }
    }

    pub fn other<'a>(&'a self, main: Option<&'a Ident>) -> Option<&'a Ident> {
        match self {
            JoinTable::Single(_) => main,
            JoinTable::Pair { other, .. } => Some(other),
        }
    }
}

pub trait IntoJoinTable {
    fn into_join_table(self) -> JoinTable;
}

impl IntoJoinTable for JoinTable {
    fn into_join_table(self) -> JoinTable {
        self
    }
}

impl<T: IntoIdent> IntoJoinTable for T {
    fn into_join_table(self) -> JoinTable {
        JoinTable::Single(self.into_ident())
    }
}

impl<A: IntoIdent, B: IntoIdent> IntoJoinTable for (A, B) {
    fn into_join_table(self) -> JoinTable {
        JoinTable::Pair {
            joined: self.0.into_ident(),
            other: self.1.into_ident(),
        }
    }
}

impl<T: IntoIdent> IntoJoinTable for [T; 2] {
    fn into_join_table(self) -> JoinTable {
        let [joined, other] = self;
        (joined, other).into_join_table()
    }
}

/// `(joined table column, other table column)`.
pub type JoinColumns = Option<(Ident, Ident)>;

pub trait IntoJoinColumns {
    fn into_join_columns(self) -> JoinColumns;
}

impl IntoJoinColumns for () {
    fn into_join_columns(self) -> JoinColumns {
        None
    }
}

impl<A: IntoIdent, B: IntoIdent> IntoJoinColumns for (A, B) {
    fn into_join_columns(self) -> JoinColumns {
        Some((self.0.into_ident(), self.1.into_ident()))
    }
}

impl<T: IntoIdent> IntoJoinColumns for [T; 2] {
    fn into_join_columns(self) -> JoinColumns {
        let [lhs, rhs] = self;
        Some((lhs.into_ident(), rhs.into_ident()))
    }
}

impl<T: IntoJoinColumns> IntoJoinColumns for Option<T> {
    fn into_join_columns(self) -> JoinColumns {
        self.and_then(IntoJoinColumns::into_join_columns)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    table: JoinTable,
    columns: JoinColumns,
    operator: Operator,
    ty: JoinType,
}

impl Join {
    pub fn new(table: JoinTable, columns: JoinColumns, operator: Operator, ty: JoinType) -> Self {
        Self {
            table,
            columns,
            operator,
            ty,
        }
    }

    pub fn table(&self) -> &JoinTable {
        &self.table
    }

    /// Render against the statement's main table.
    pub(crate) fn format_with<W: fmt::Write>(
        &self,
        main: Option<&Ident>,
        context: &mut FormatContext<'_, W>,
    ) -> fmt::Result {
        let joined = self.table.joined();
        let other = self.table.other(main);
        let (lhs, rhs) = match self.columns {
            Some((ref lhs, ref rhs)) => (lhs.as_str(), rhs.as_str()),
            None => ("", ""),
        };

        self.ty.format_writer(context)?;
        context.writer.write_char(' ')?;
        joined.format_writer(context)?;
        context.writer.write_str(" ON ")?;
        joined.format_writer(context)?;
        context.writer.write_char('.')?;
        context.writer.write_str(lhs)?;
        context.writer.write_char(' ')?;
        self.operator.format_writer(context)?;
        context.writer.write_char(' ')?;
        if let Some(other) = other {
            other.format_writer(context)?;
        }
        context.writer.write_char('.')?;
        context.writer.write_str(rhs)
    }
}

pub type Joins = Vec<Join>;
