use std::{collections::BTreeMap, fmt};

use indexmap::IndexMap;
use quarry_derive::or_variant;

use crate::{
    array::Array,
    col::{Columns, IntoColumns},
    cond::{Conjunction, Predicates},
    error::{Error, Result},
    ident::{Ident, IntoIdent},
    join::{IntoJoinColumns, IntoJoinTable, IntoJoinType, Join, JoinType, Joins},
    kind::Kind,
    operator::{IntoOperator, Operator},
    order::{IntoDirection, IntoDirections, OrderBy, OrderExpr},
    paginate::{IntoLimit, Paginator},
    quote::{AnsiQuote, Quote},
    raw::{IntoRaw, Raw},
    value::{IntoValue, Value},
    writer::{FormatContext, FormatWriter},
};

/// Column assignments of an `INSERT` or `UPDATE`, in insertion order.
pub type Assignments = IndexMap<Ident, Value>;

pub trait IntoAssignments {
    fn into_assignments(self) -> Assignments;
}

impl IntoAssignments for Assignments {
    fn into_assignments(self) -> Assignments {
        self
    }
}

impl<K: IntoIdent, V: IntoValue> IntoAssignments for Vec<(K, V)> {
    fn into_assignments(self) -> Assignments {
        self.into_iter()
            .map(|(column, value)| (column.into_ident(), value.into_value()))
            .collect()
    }
}

impl<K: IntoIdent, V: IntoValue, const N: usize> IntoAssignments for [(K, V); N] {
    fn into_assignments(self) -> Assignments {
        self.into_iter()
            .map(|(column, value)| (column.into_ident(), value.into_value()))
            .collect()
    }
}

impl<K: IntoIdent, V: IntoValue> IntoAssignments for BTreeMap<K, V> {
    fn into_assignments(self) -> Assignments {
        self.into_iter()
            .map(|(column, value)| (column.into_ident(), value.into_value()))
            .collect()
    }
}

pub type Expressions = Array<Raw>;

pub trait IntoExpressions {
    fn into_expressions(self) -> Expressions;
}

impl<T: IntoRaw> IntoExpressions for T {
    fn into_expressions(self) -> Expressions {
        Expressions::One(self.into_raw())
    }
}

impl<T: IntoRaw> IntoExpressions for Vec<T> {
    fn into_expressions(self) -> Expressions {
        self.into_iter().map(IntoRaw::into_raw).collect()
    }
}

impl<T: IntoRaw, const N: usize> IntoExpressions for [T; N] {
    fn into_expressions(self) -> Expressions {
        self.into_iter().map(IntoRaw::into_raw).collect()
    }
}

pub type Values = Array<Value>;

pub trait IntoValues {
    fn into_values(self) -> Values;
}

impl<T: IntoValue> IntoValues for T {
    fn into_values(self) -> Values {
        Values::One(self.into_value())
    }
}

impl<T: IntoValue> IntoValues for Vec<T> {
    fn into_values(self) -> Values {
        Values::Many(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Values {
        Values::Many(self.into_iter().map(IntoValue::into_value).collect())
    }
}

/// A SQL statement under construction.
///
/// Configuration methods mutate in place and return `&mut Self` so calls
/// chain. Those that can reject the call sequence return a [`Result`]
/// instead. Rendering through [`Statement::assemble`] or `to_string` never
/// changes the statement.
///
/// ```
/// use quarry::Statement;
///
/// let mut stmt = Statement::default();
/// stmt.select(["id", "name"])?.from("users").where_eq("active", true);
/// assert_eq!("SELECT id, name FROM users WHERE active = TRUE", stmt.assemble());
/// # Ok::<(), quarry::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Statement<Q = AnsiQuote> {
    quoter: Q,
    maybe_kind: Option<Kind>,
    columns: Columns,
    maybe_table: Option<Ident>,
    joins: Joins,
    maybe_where: Predicates,
    values: Assignments,
    groups: Columns,
    maybe_having: Predicates,
    order: OrderBy,
    paginator: Paginator,
}

impl Default for Statement<AnsiQuote> {
    fn default() -> Self {
        Self::new(AnsiQuote)
    }
}

impl<Q: Quote> Statement<Q> {
    pub fn new(quoter: Q) -> Self {
        Self {
            quoter,
            maybe_kind: None,
            columns: Columns::None,
            maybe_table: None,
            joins: Joins::new(),
            maybe_where: Predicates::default(),
            values: Assignments::new(),
            groups: Columns::None,
            maybe_having: Predicates::default(),
            order: OrderBy::default(),
            paginator: Paginator::default(),
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        self.maybe_kind
    }

    pub fn table_name(&self) -> Option<&Ident> {
        self.maybe_table.as_ref()
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn predicates(&self) -> &Predicates {
        &self.maybe_where
    }

    pub fn having_predicates(&self) -> &Predicates {
        &self.maybe_having
    }

    pub fn assignments(&self) -> &Assignments {
        &self.values
    }

    pub fn quoter(&self) -> &Q {
        &self.quoter
    }

    // kind

    /// Set the statement kind. It can only be set once.
    pub fn set_kind(&mut self, kind: Kind) -> Result<&mut Self> {
        if let Some(current) = self.maybe_kind {
            tracing::debug!(%current, requested = %kind, "statement kind already set");
            return Err(Error::AlreadySet {
                current,
                requested: kind,
            });
        }
        self.maybe_kind = Some(kind);
        Ok(self)
    }

    /// Start a `SELECT`. Empty fields leave the projection out entirely.
    pub fn select<T>(&mut self, cols: T) -> Result<&mut Self>
    where
        T: IntoColumns,
    {
        self.set_kind(Kind::Select)?;
        let columns = cols.into_columns();
        if !columns.is_empty() {
            self.columns = columns;
        }
        Ok(self)
    }

    pub fn insert(&mut self) -> Result<&mut Self> {
        self.set_kind(Kind::Insert)
    }

    pub fn update(&mut self) -> Result<&mut Self> {
        self.set_kind(Kind::Update)
    }

    pub fn delete(&mut self) -> Result<&mut Self> {
        self.set_kind(Kind::Delete)
    }

    // table and joins

    pub fn from<T: IntoIdent>(&mut self, table: T) -> &mut Self {
        self.maybe_table = Some(table.into_ident());
        self
    }

    /// Same as [`Self::from`], reads better for `INSERT` and `UPDATE`.
    pub fn table<T: IntoIdent>(&mut self, table: T) -> &mut Self {
        self.from(table)
    }

    /// `INNER JOIN` matching `columns.0` of the joined table with
    /// `columns.1` of the main table, or of the second table when `table`
    /// is a pair.
    pub fn join<T, C>(&mut self, table: T, columns: C) -> &mut Self
    where
        T: IntoJoinTable,
        C: IntoJoinColumns,
    {
        self.join_with(table, columns, Operator::Eq, JoinType::Inner)
    }

    pub fn left_join<T, C>(&mut self, table: T, columns: C) -> &mut Self
    where
        T: IntoJoinTable,
        C: IntoJoinColumns,
    {
        self.join_with(table, columns, Operator::Eq, JoinType::Left)
    }

    pub fn right_join<T, C>(&mut self, table: T, columns: C) -> &mut Self
    where
        T: IntoJoinTable,
        C: IntoJoinColumns,
    {
        self.join_with(table, columns, Operator::Eq, JoinType::Right)
    }

    pub fn join_with<T, C, O, J>(&mut self, table: T, columns: C, operator: O, ty: J) -> &mut Self
    where
        T: IntoJoinTable,
        C: IntoJoinColumns,
        O: IntoOperator,
        J: IntoJoinType,
    {
        self.joins.push(Join::new(
            table.into_join_table(),
            columns.into_join_columns(),
            operator.into_operator(),
            ty.into_join_type(),
        ));
        self
    }

    // where

    /// Append `column operator value` to the `WHERE` clause.
    ///
    /// The value is rendered right away: `NULL` turns `=` into `IS` and any
    /// other operator into `IS NOT`, booleans become `TRUE`/`FALSE`, numbers
    /// and numeric text stay unquoted and the rest goes through the quoter.
    pub fn where_expr<C, O, V>(
        &mut self,
        conjunction: Conjunction,
        column: C,
        operator: O,
        value: V,
    ) -> &mut Self
    where
        C: IntoIdent,
        O: IntoOperator,
        V: IntoValue,
    {
        let value = value.into_value();
        let mut operator = operator.into_operator();
        if value.is_null() {
            operator = operator.against_null();
        }
        let rendered = value.normalize(&self.quoter);
        self.maybe_where
            .push_binary(conjunction, column.into_ident(), operator, rendered);
        self
    }

    #[or_variant]
    pub fn where_clause<C, O, V>(&mut self, column: C, operator: O, value: V) -> &mut Self
    where
        C: IntoIdent,
        O: IntoOperator,
        V: IntoValue,
    {
        self.where_expr(Conjunction::And, column, operator, value)
    }

    #[or_variant]
    pub fn where_null<C: IntoIdent>(&mut self, column: C) -> &mut Self {
        self.where_expr(Conjunction::And, column, Operator::Eq, Value::Null)
    }

    #[or_variant]
    pub fn where_not_null<C: IntoIdent>(&mut self, column: C) -> &mut Self {
        self.where_expr(Conjunction::And, column, Operator::NotEq, Value::Null)
    }

    // values

    /// Column values of an `INSERT` or `UPDATE`, quoted when rendered.
    pub fn values<T: IntoAssignments>(&mut self, values: T) -> Result<&mut Self> {
        match self.maybe_kind {
            Some(kind) if kind.accepts_values() => {
                self.values = values.into_assignments();
                Ok(self)
            }
            kind => {
                tracing::debug!(?kind, "values rejected for statement kind");
                Err(Error::NotAllowed {
                    operation: "values",
                    kind,
                })
            }
        }
    }

    // grouping

    pub fn group_by<T: IntoColumns>(&mut self, cols: T) -> &mut Self {
        self.groups = cols.into_columns();
        self
    }

    /// Append `HAVING` expressions. With values, each `?` of an expression is
    /// replaced by the quoted value at the same position; extra expressions
    /// or values are dropped.
    pub fn having_expr(
        &mut self,
        conjunction: Conjunction,
        expressions: Expressions,
        maybe_values: Option<Values>,
    ) -> &mut Self {
        let Some(values) = maybe_values else {
            for expr in expressions {
                self.maybe_having.push_raw(conjunction, expr);
            }
            return self;
        };

        for (expr, value) in expressions.into_iter().zip(values) {
            let quoted = self.quoter.quote(&value.raw_text());
            self.maybe_having.push_raw(conjunction, expr.bind(&quoted));
        }
        self
    }

    #[or_variant]
    pub fn having<E: IntoExpressions>(&mut self, expressions: E) -> &mut Self {
        self.having_expr(Conjunction::And, expressions.into_expressions(), None)
    }

    #[or_variant]
    pub fn having_with<E, V>(&mut self, expressions: E, values: V) -> &mut Self
    where
        E: IntoExpressions,
        V: IntoValues,
    {
        self.having_expr(
            Conjunction::And,
            expressions.into_expressions(),
            Some(values.into_values()),
        )
    }

    // ordering

    /// Replace the ordering with fields paired to directions by position.
    /// Pass `()` as directions to order by the first field alone, without
    /// a direction.
    pub fn order_by<T, D>(&mut self, cols: T, directions: D) -> &mut Self
    where
        T: IntoColumns,
        D: IntoDirections,
    {
        self.order = OrderBy::zip(cols.into_columns(), directions.into_directions());
        self
    }

    pub fn add_order_by<C, D>(&mut self, column: C, direction: D) -> &mut Self
    where
        C: IntoIdent,
        D: IntoDirection,
    {
        self.order.push(OrderExpr::new(column, direction));
        self
    }

    // pagination

    pub fn limit<L: IntoLimit>(&mut self, limit: L) -> &mut Self {
        self.paginator.limit(limit.into_limit());
        self
    }

    /// Only rendered together with a limit.
    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.paginator.offset(offset);
        self
    }

    pub fn paginate(&mut self, page: u64, per_page: u64) -> &mut Self {
        self.paginator.paginate(page, per_page);
        self
    }

    // building

    /// Render the statement to SQL text.
    pub fn assemble(&self) -> String {
        let mut str = String::with_capacity(64);
        let mut context = FormatContext::new(&mut str, &self.quoter);
        // writing into a String cannot fail
        let _ = self.format_writer(&mut context);
        let sql = str.trim();
        tracing::trace!(sql, "assembled statement");
        sql.to_owned()
    }

    fn format_values<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self.maybe_kind {
            Some(Kind::Insert) => {
                context.writer.write_char('(')?;
                context.write_list(self.values.keys())?;
                context.writer.write_str(") VALUES (")?;
                for (index, value) in self.values.values().enumerate() {
                    if index > 0 {
                        context.writer.write_str(", ")?;
                    }
                    context.write_quoted(&value.raw_text())?;
                }
                context.writer.write_str(") ")
            }
            Some(Kind::Update) => {
                context.writer.write_str("SET ")?;
                for (index, (column, value)) in self.values.iter().enumerate() {
                    if index > 0 {
                        context.writer.write_str(", ")?;
                    }
                    column.format_writer(context)?;
                    context.writer.write_str(" = ")?;
                    context.write_quoted(&value.raw_text())?;
                }
                context.writer.write_char(' ')
            }
            _ => Ok(()),
        }
    }
}

impl<Q: Quote> FormatWriter for Statement<Q> {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if let Some(kind) = self.maybe_kind {
            kind.format_writer(context)?;

            // the projection only belongs to a select
            if matches!(kind, Kind::Select) && !self.columns.is_empty() {
                self.columns.format_writer(context)?;
                context.writer.write_char(' ')?;
            }

            if kind.reads_from() {
                context.writer.write_str("FROM ")?;
            }
            if let Some(ref table) = self.maybe_table {
                table.format_writer(context)?;
            }
            context.writer.write_char(' ')?;
        }

        if !self.values.is_empty() {
            self.format_values(context)?;
        }

        for join in &self.joins {
            join.format_with(self.maybe_table.as_ref(), context)?;
            context.writer.write_char(' ')?;
        }

        if !self.maybe_where.is_empty() {
            context.writer.write_str("WHERE ")?;
            self.maybe_where.format_writer(context)?;
            context.writer.write_char(' ')?;
        }

        if !self.groups.is_empty() {
            context.writer.write_str("GROUP BY ")?;
            self.groups.format_writer(context)?;
            context.writer.write_char(' ')?;
        }

        if !self.maybe_having.is_empty() {
            context.writer.write_str("HAVING ")?;
            self.maybe_having.format_writer(context)?;
            context.writer.write_char(' ')?;
        }

        if !self.order.is_empty() {
            context.writer.write_str("ORDER BY ")?;
            self.order.format_writer(context)?;
            context.writer.write_char(' ')?;
        }

        if !self.paginator.is_empty() {
            self.paginator.format_writer(context)?;
        }

        Ok(())
    }
}

impl<Q: Quote> fmt::Display for Statement<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assemble())
    }
}

#[cfg(test)]
mod tests {
    use crate::order::Ordering;

    use super::*;

    fn stmt() -> Statement {
        Statement::default()
    }

    #[test]
    fn test_kind_set_twice() {
        let err = stmt().select(()).and_then(|s| s.update()).unwrap_err();
        assert_eq!(
            Error::AlreadySet {
                current: Kind::Select,
                requested: Kind::Update
            },
            err
        );

        for first in [Kind::Select, Kind::Insert, Kind::Update, Kind::Delete] {
            for second in [Kind::Select, Kind::Insert, Kind::Update, Kind::Delete] {
                let mut stmt = stmt();
                stmt.set_kind(first).unwrap();
                assert!(matches!(
                    stmt.set_kind(second),
                    Err(Error::AlreadySet { .. })
                ));
                assert_eq!(Some(first), stmt.kind());
            }
        }
    }

    #[test]
    fn test_values_not_allowed() {
        let err = stmt()
            .delete()
            .and_then(|s| s.values(Assignments::new()))
            .unwrap_err();
        assert_eq!(
            Error::NotAllowed {
                operation: "values",
                kind: Some(Kind::Delete)
            },
            err
        );

        let err = stmt()
            .select(())
            .and_then(|s| s.values([("name", "fubar")]))
            .unwrap_err();
        assert!(matches!(err, Error::NotAllowed { .. }));

        let err = stmt().values([("name", "fubar")]).unwrap_err();
        assert_eq!(
            Error::NotAllowed {
                operation: "values",
                kind: None
            },
            err
        );

        assert!(stmt().insert().and_then(|s| s.values([("a", 1)])).is_ok());
        assert!(stmt().update().and_then(|s| s.values([("a", 1)])).is_ok());
    }

    #[test]
    fn test_to_string() -> Result<()> {
        let mut stmt = stmt();
        stmt.select("*")?
            .from("foo")
            .join("bar", ("id", "bar_id"))
            .where_eq("bar.foobar", "foobar")
            .order_by("name", "DESC")
            .limit(1);
        assert_eq!(stmt.assemble(), stmt.to_string());
        assert_eq!(stmt.assemble(), stmt.assemble());
        Ok(())
    }

    #[test]
    fn test_simple_select() -> Result<()> {
        assert_eq!("SELECT * FROM foo", stmt().select("*")?.from("foo").assemble());
        assert_eq!(
            "SELECT id, bar FROM foo",
            stmt().select(["id   ", "bar"])?.from("foo").assemble()
        );
        assert_eq!("SELECT FROM foo", stmt().select(())?.from("foo").assemble());
        assert_eq!("SELECT FROM foo", stmt().select("")?.from("foo").assemble());
        Ok(())
    }

    #[test]
    fn test_select_where() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo WHERE bar = 1",
            stmt().select("*")?.from("foo").where_eq("bar", 1).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE bar IS NULL",
            stmt().select("*")?.from("foo").where_eq("bar", ()).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE bar = TRUE",
            stmt().select("*")?.from("foo").where_eq("bar", true).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE bar != FALSE",
            stmt()
                .select("*")?
                .from("foo")
                .where_clause("bar", "!=", false)
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE bar IS NOT NULL",
            stmt()
                .select("*")?
                .from("foo")
                .where_clause("bar", "!=", None::<i32>)
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE bar IS NOT NULL",
            stmt()
                .select("*")?
                .from("foo")
                .where_different("bar", Value::Null)
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE bar IS NOT NULL AND bar != FALSE",
            stmt()
                .select("*")?
                .from("foo")
                .where_not_null("bar")
                .where_not_eq("bar", false)
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_where_values() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo WHERE name = 'it''s' AND size = 10 AND ratio > 0.5 AND code = 42",
            stmt()
                .select("*")?
                .from("foo")
                .where_eq("name", "it's")
                .where_eq("size", 10u64)
                .where_gt("ratio", 0.5)
                .where_eq("code", "42")
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_where_conjunctions() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo WHERE a = 1 OR b = 2 AND c LIKE 'x%'",
            stmt()
                .select("*")?
                .from("foo")
                .or_where_eq("a", 1)
                .or_where_clause("b", "=", 2)
                .where_like("c", "x%")
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo WHERE a IS NULL OR b IS NOT NULL OR c ilike 'y'",
            stmt()
                .select("*")?
                .from("foo")
                .where_null("a")
                .or_where_not_null("b")
                .where_expr(Conjunction::additive(false), "c", "ilike", "y")
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_join() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo INNER JOIN bar ON bar.id = foo.bar_id",
            stmt()
                .select("*")?
                .from("foo")
                .join("bar", ["id", "bar_id"])
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo INNER JOIN bar ON bar.id = foo.bar_id WHERE bar.foobar = 'foobar'",
            stmt()
                .select("*")?
                .from("foo")
                .join("bar", ["id", "bar_id"])
                .where_eq("bar.foobar", "foobar")
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo INNER JOIN bar ON bar.id = foo.bar_id INNER JOIN baz ON baz.bar_id = bar.id WHERE bar.foobar = 'foobar'",
            stmt()
                .select("*")?
                .from("foo")
                .join("bar", ["id", "bar_id"])
                .join(["baz", "bar"], ["bar_id", "id"])
                .where_eq("bar.foobar", "foobar")
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_join_variants() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo LEFT JOIN bar ON bar.id >= foo.bar_id RIGHT JOIN baz ON baz.x = foo.y",
            stmt()
                .select("*")?
                .from("foo")
                .join_with("bar", ("id", "bar_id"), ">=", "LEFT")
                .right_join("baz", ("x", "y"))
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo INNER JOIN bar ON bar. = foo.",
            stmt().select("*")?.from("foo").join("bar", ()).assemble()
        );
        Ok(())
    }

    #[test]
    fn test_insert() -> Result<()> {
        assert_eq!(
            "INSERT INTO foo (name, size) VALUES ('fubar', '10')",
            stmt()
                .insert()?
                .from("foo")
                .values([("name", "fubar".into_value()), ("size", 10i32.into_value())])?
                .assemble()
        );
        let mut values = Assignments::new();
        values.insert(Ident::new("size"), Value::UInt(10));
        values.insert(Ident::new("name"), "fubar".into_value());
        assert_eq!(
            "INSERT INTO foo (size, name) VALUES ('10', 'fubar')",
            stmt().insert()?.table("foo").values(values)?.assemble()
        );
        assert_eq!("INSERT INTO foo", stmt().insert()?.from("foo").assemble());
        Ok(())
    }

    #[test]
    fn test_update() -> Result<()> {
        let values = vec![("name", "fubar".into_value()), ("size", 10i32.into_value())];
        assert_eq!(
            "UPDATE foo SET name = 'fubar', size = '10'",
            stmt().update()?.from("foo").values(values.clone())?.assemble()
        );
        assert_eq!(
            "UPDATE foo SET name = 'fubar', size = '10' WHERE id = 1",
            stmt()
                .update()?
                .from("foo")
                .values(values)?
                .where_eq("id", 1)
                .assemble()
        );
        assert_eq!(
            "UPDATE foo SET active = '1', note = '', flag = ''",
            stmt()
                .update()?
                .from("foo")
                .values([
                    ("active", true.into_value()),
                    ("note", Value::Null),
                    ("flag", false.into_value()),
                ])?
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_delete() -> Result<()> {
        assert_eq!("DELETE FROM foo", stmt().delete()?.from("foo").assemble());
        assert_eq!(
            "DELETE FROM foo WHERE id = 1",
            stmt().delete()?.from("foo").where_eq("id", 1).assemble()
        );
        Ok(())
    }

    #[test]
    fn test_order_by() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo ORDER BY name",
            stmt().select("*")?.from("foo").order_by("name", ()).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo ORDER BY name",
            stmt()
                .select("*")?
                .from("foo")
                .order_by(["name", "type"], ())
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo ORDER BY name asc",
            stmt().select("*")?.from("foo").order_by("name", "asc").assemble()
        );
        assert_eq!(
            "SELECT * FROM foo ORDER BY name DESC, type AsC",
            stmt()
                .select("*")?
                .from("foo")
                .order_by(["name", "type"], ["DESC", "AsC"])
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo ORDER BY name DESC",
            stmt()
                .select("*")?
                .from("foo")
                .order_by(["name", "type"], "DESC")
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo ORDER BY id ASC, name",
            stmt()
                .select("*")?
                .from("foo")
                .order_by("ignored", ())
                .order_by("id", Ordering::Asc)
                .add_order_by("name", None::<&str>)
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_group_by() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo GROUP BY name",
            stmt().select("*")?.from("foo").group_by("name").assemble()
        );
        assert_eq!(
            "SELECT * FROM foo GROUP BY name, type",
            stmt().select("*")?.from("foo").group_by(["name", "type"]).assemble()
        );
        Ok(())
    }

    #[test]
    fn test_having() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING COUNT(id) > 2",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having("COUNT(id) > 2")
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING COUNT(id) > 2 AND COUNT(id) < 7",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having("COUNT(id) > 2")
                .having("COUNT(id) < 7")
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING COUNT(id) > 2 AND COUNT(id) < 7",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having(["COUNT(id) > 2", "COUNT(id) < 7"])
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING COUNT(id) > 2 OR name != 'baz'",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having("COUNT(id) > 2")
                .or_having_with("name != ?", "baz")
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING COUNT(id) > 2 AND name != 'baz' AND surname != 'fubar'",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having("COUNT(id) > 2")
                .having_with(["name != ?", "surname != ?"], ["baz", "fubar"])
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_having_truncates() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING a = '1'",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having_with(["a = ?", "b = ?"], vec![1])
                .assemble()
        );
        assert_eq!(
            "SELECT * FROM foo GROUP BY name HAVING a = '1' OR b > 2",
            stmt()
                .select("*")?
                .from("foo")
                .group_by("name")
                .having_with("a = ?", [1, 2])
                .or_having("b > 2")
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_limit() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo LIMIT 1",
            stmt().select("*")?.from("foo").limit(1).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo LIMIT 5, 10",
            stmt().select("*")?.from("foo").limit("5, 10").assemble()
        );
        Ok(())
    }

    #[test]
    fn test_offset() -> Result<()> {
        assert_eq!(
            "SELECT * FROM foo LIMIT 1 OFFSET 42",
            stmt().select("*")?.from("foo").limit(1).offset(42).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo",
            stmt().select("*")?.from("foo").offset(42).assemble()
        );
        assert_eq!(
            "SELECT * FROM foo LIMIT 20 OFFSET 40",
            stmt().select("*")?.from("foo").paginate(3, 20).assemble()
        );
        Ok(())
    }

    #[test]
    fn test_clause_order() -> Result<()> {
        assert_eq!(
            "SELECT foo.id, COUNT(bar.id) FROM foo LEFT JOIN bar ON bar.foo_id = foo.id WHERE foo.active = TRUE GROUP BY foo.id HAVING COUNT(bar.id) > '3' ORDER BY foo.id DESC LIMIT 10 OFFSET 20",
            stmt()
                .select(vec!["foo.id", "COUNT(bar.id)"])?
                .from("foo")
                .limit(10)
                .offset(20)
                .order_by("foo.id", Ordering::Desc)
                .having_with("COUNT(bar.id) > ?", 3)
                .group_by("foo.id")
                .where_eq("foo.active", true)
                .left_join("bar", ("foo_id", "id"))
                .assemble()
        );
        Ok(())
    }

    #[test]
    fn test_best_effort_render() {
        assert_eq!("", stmt().assemble());
        assert_eq!("WHERE id = 1", stmt().from("foo").where_eq("id", 1).assemble());
        let mut stmt = stmt();
        stmt.select("*").unwrap();
        assert_eq!("SELECT * FROM", stmt.assemble());
    }

    #[test]
    fn test_custom_quoter() -> Result<()> {
        let quoter = |raw: &str| format!("E'{}'", raw.replace('\'', "\\'"));
        let mut stmt = Statement::new(quoter);
        stmt.select("*")?.from("foo").where_eq("name", "o'neil");
        assert_eq!("SELECT * FROM foo WHERE name = E'o\\'neil'", stmt.assemble());
        Ok(())
    }

    #[test]
    fn test_render_does_not_mutate() -> Result<()> {
        let mut stmt = stmt();
        stmt.update()?
            .table("foo")
            .values([("name", "x")])?
            .where_eq("id", 1);
        let before = stmt.clone();
        let first = stmt.assemble();
        let second = stmt.to_string();
        assert_eq!(first, second);
        assert_eq!(before.predicates(), stmt.predicates());
        assert_eq!(before.assignments(), stmt.assignments());
        Ok(())
    }
}
