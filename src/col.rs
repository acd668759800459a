use std::fmt;

use crate::{
    array::Array,
    ident::{Ident, IntoIdent},
    writer::{FormatContext, FormatWriter},
};

/// Projection or grouping fields: nothing, one field or an ordered list.
pub type Columns = Array<Ident>;

impl FormatWriter for Columns {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, column) in self.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            context.writer.write_str(column.as_str().trim())?;
        }
        Ok(())
    }
}

pub trait IntoColumns {
    fn into_columns(self) -> Columns;
}

impl IntoColumns for Columns {
    fn into_columns(self) -> Columns {
        self
    }
}

impl IntoColumns for () {
    fn into_columns(self) -> Columns {
        Columns::None
    }
}

impl<T> IntoColumns for T
where
    T: IntoIdent,
{
    fn into_columns(self) -> Columns {
        let ident = self.into_ident();
        if ident.is_empty() {
            Columns::None
        } else {
            Columns::One(ident)
        }
    }
}

impl<T> IntoColumns for Vec<T>
where
    T: IntoIdent,
{
    fn into_columns(self) -> Columns {
        self.into_iter().map(IntoIdent::into_ident).collect()
    }
}

impl<T, const N: usize> IntoColumns for [T; N]
where
    T: IntoIdent,
{
    fn into_columns(self) -> Columns {
        self.into_iter().map(IntoIdent::into_ident).collect()
    }
}

impl<T> IntoColumns for &[T]
where
    T: IntoIdent + Clone,
{
    fn into_columns(self) -> Columns {
        self.iter().cloned().map(IntoIdent::into_ident).collect()
    }
}
