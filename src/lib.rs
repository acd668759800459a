//! Fluent SQL statement assembly.
//!
//! A [`Statement`] accumulates the fragments of a `SELECT`, `INSERT`,
//! `UPDATE` or `DELETE` and renders them to plain SQL text. Values are
//! inlined, string literals are escaped by a caller supplied [`Quote`].
//!
//! ```
//! use quarry::Statement;
//!
//! let mut stmt = Statement::default();
//! stmt.select("*")?
//!     .from("foo")
//!     .join("bar", ("id", "bar_id"))
//!     .where_eq("bar.name", "baz")
//!     .order_by(["name", "type"], ["DESC", "ASC"]);
//!
//! assert_eq!(
//!     "SELECT * FROM foo INNER JOIN bar ON bar.id = foo.bar_id WHERE bar.name = 'baz' ORDER BY name DESC, type ASC",
//!     stmt.to_string()
//! );
//! # Ok::<(), quarry::Error>(())
//! ```

mod array;
mod col;
mod cond;
mod error;
mod ident;
mod join;
mod kind;
mod operator;
mod order;
mod paginate;
mod quote;
mod raw;
mod statement;
mod value;
mod writer;

pub use array::Array;
pub use col::{Columns, IntoColumns};
pub use cond::{Conjunction, Predicate, PredicateKind, Predicates};
pub use error::{Error, Result};
pub use ident::{Ident, IntoIdent};
pub use join::{
    IntoJoinColumns, IntoJoinTable, IntoJoinType, Join, JoinColumns, JoinTable, JoinType,
};
pub use kind::Kind;
pub use operator::{IntoOperator, Operator};
pub use order::{
    Direction, Directions, IntoDirection, IntoDirections, OrderBy, OrderExpr, Ordering,
};
pub use paginate::{IntoLimit, Paginator};
pub use quote::{AnsiQuote, Quote};
pub use raw::{IntoRaw, Raw};
pub use statement::{
    Assignments, Expressions, IntoAssignments, IntoExpressions, IntoValues, Statement, Values,
};
pub use value::{IntoValue, Value};

pub fn ident(value: &str) -> Ident {
    Ident::new(value)
}

pub fn raw(value: &str) -> Raw {
    Raw::new(value)
}
