use super::{log_sql, separated_by};
use crate::{
    Error, GeneratedSql, Node, Predicate, Provider, Result, Value, bind_parameters,
    validate_identifier,
};
use std::fmt::Write;
use time::{Date, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        if $value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        } else {
            // No portable literal exists for NaN or infinity.
            $out.push_str("NULL");
        }
    }};
}

/// Dialect strategy converting operation shapes into concrete SQL text.
///
/// One implementation exists per [`Provider`]; the trait defaults describe
/// the unrecognized-backend dialect (backtick quoting, `?` parameter prefix)
/// and every backend-specific rule is a single overridable method, so adding
/// a dialect touches one implementation site.
///
/// Identifier validation is eager: every operation validates all names it
/// receives before emitting any text.
pub trait Dialect: Send + Sync {
    fn as_dyn(&self) -> &dyn Dialect;

    fn provider(&self) -> Provider;

    /// Identifier quote pair; `None` leaves names unquoted.
    fn open_quote(&self) -> Option<char> {
        Some('`')
    }
    fn close_quote(&self) -> Option<char> {
        Some('`')
    }

    fn parameter_prefix(&self) -> &'static str {
        "?"
    }

    /// Upper bound on parameters in a single command.
    fn max_parameters(&self) -> usize {
        1000
    }

    /// Case rule for duplicate parameter detection; bracket and unquoted
    /// dialects compare case-insensitively.
    fn case_sensitive_parameters(&self) -> bool {
        true
    }

    /// Wrap a validated identifier in the dialect's quote pair.
    fn quote_identifier(&self, name: &str) -> Result<String> {
        validate_identifier(name)?;
        let mut out = String::with_capacity(name.len() + 2);
        self.write_identifier(&mut out, name);
        Ok(out)
    }

    /// Write an already validated identifier.
    fn write_identifier(&self, out: &mut String, name: &str) {
        if let Some(open) = self.open_quote() {
            out.push(open);
        }
        out.push_str(name);
        if let Some(close) = self.close_quote() {
            out.push(close);
        }
    }

    /// Prefix a parameter name, unless it already carries the prefix.
    fn parameter_name(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(Error::validation("parameter name must not be empty"));
        }
        let prefix = self.parameter_prefix();
        if name.starts_with(prefix) {
            Ok(name.to_owned())
        } else {
            Ok(format!("{}{}", prefix, name))
        }
    }

    /// Render a concrete value as a SQL literal.
    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            v if v.is_null() => out.push_str("NULL"),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(out, *v),
            Value::Float64(Some(v)) => write_float!(out, *v),
            Value::Decimal(Some(v), ..) => drop(write!(out, "{}", v)),
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v),
            Value::Date(Some(v)) => {
                out.push('\'');
                write_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v)) => {
                out.push('\'');
                write_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(Some(v)) => {
                out.push('\'');
                write_date(out, &v.date());
                out.push('T');
                write_time(out, &v.time());
                out.push('\'');
            }
            Value::TimestampWithTimezone(Some(v)) => {
                let utc = v.to_utc();
                out.push('\'');
                write_date(out, &utc.date());
                out.push('T');
                write_time(out, &utc.time());
                out.push('\'');
            }
            Value::Uuid(Some(v)) => drop(write!(out, "'{}'", v)),
            _ => {
                log::error!("Cannot write {:?} as a SQL literal", value);
                out.push_str("NULL");
            }
        }
    }

    /// Render a boolean literal.
    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// Render a string literal, doubling inner quotes.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == '\'' {
                out.push_str(&value[position..i]);
                out.push_str("''");
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    /// Render a blob literal using hex escapes.
    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push('\'');
        for b in value {
            let _ = write!(out, "\\x{:02X}", b);
        }
        out.push('\'');
    }

    /// Render a composed predicate tree as a WHERE fragment.
    fn write_predicate(&self, out: &mut String, predicate: &Predicate) -> Result<()> {
        self.write_node(out, &predicate.body)
    }

    fn write_node(&self, out: &mut String, node: &Node) -> Result<()> {
        let precedence = node.precedence();
        let child = |out: &mut String, node: &Node, strict: bool| -> Result<()> {
            let parenthesize = if strict {
                node.precedence() <= precedence
            } else {
                node.precedence() < precedence
            };
            if parenthesize {
                out.push('(');
                self.write_node(out, node)?;
                out.push(')');
            } else {
                self.write_node(out, node)?;
            }
            Ok(())
        };
        match node {
            Node::Member { path, .. } => {
                for segment in path {
                    validate_identifier(segment)?;
                }
                let mut first = true;
                for segment in path {
                    if !first {
                        out.push('.');
                    }
                    first = false;
                    self.write_identifier(out, segment);
                }
            }
            Node::Literal(value) => self.write_value(out, value),
            Node::Compare { op, lhs, rhs } => {
                use crate::CompareOp::*;
                child(out, lhs, false)?;
                out.push_str(match op {
                    Equal => " = ",
                    NotEqual => " != ",
                    Less => " < ",
                    LessEqual => " <= ",
                    Greater => " > ",
                    GreaterEqual => " >= ",
                    Like => " LIKE ",
                    NotLike => " NOT LIKE ",
                });
                child(out, rhs, true)?;
            }
            Node::And(lhs, rhs) => {
                child(out, lhs, false)?;
                out.push_str(" AND ");
                child(out, rhs, true)?;
            }
            Node::Or(lhs, rhs) => {
                child(out, lhs, false)?;
                out.push_str(" OR ");
                child(out, rhs, true)?;
            }
            Node::Not(arg) => {
                out.push_str("NOT ");
                child(out, arg, true)?;
            }
            Node::Call { name, args } => {
                validate_identifier(name)?;
                out.push_str(name);
                out.push('(');
                let mut first = true;
                for arg in args {
                    if !first {
                        out.push_str(", ");
                    }
                    first = false;
                    self.write_node(out, arg)?;
                }
                out.push(')');
            }
            Node::Conditional {
                test,
                then,
                otherwise,
            } => {
                out.push_str("CASE WHEN ");
                self.write_node(out, test)?;
                out.push_str(" THEN ");
                self.write_node(out, then)?;
                out.push_str(" ELSE ");
                self.write_node(out, otherwise)?;
                out.push_str(" END");
            }
        }
        Ok(())
    }

    /// Emit a plain SELECT over explicit columns (empty list selects `*`).
    fn generate_select(
        &self,
        table: &str,
        columns: &[&str],
        where_clause: Option<&str>,
        order_by: &[&str],
    ) -> Result<String> {
        validate_identifier(table)?;
        for name in columns.iter().chain(order_by) {
            validate_identifier(name)?;
        }
        let mut out = String::with_capacity(64 + columns.len() * 16);
        out.push_str("SELECT ");
        if columns.is_empty() {
            out.push('*');
        } else {
            separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        }
        out.push_str(" FROM ");
        self.write_identifier(&mut out, table);
        if let Some(clause) = where_clause {
            if !clause.trim().is_empty() {
                out.push_str(" WHERE ");
                out.push_str(clause);
            }
        }
        if !order_by.is_empty() {
            out.push_str(" ORDER BY ");
            separated_by(&mut out, order_by, |out, c| self.write_identifier(out, c), ", ");
        }
        Ok(out)
    }

    /// Append the dialect's paging shape to a SELECT. `take` of zero yields
    /// zero rows, not an unbounded page.
    fn generate_paged(&self, select: &str, skip: u64, take: u64) -> Result<String> {
        if select.trim().is_empty() {
            return Err(Error::validation("cannot page an empty statement"));
        }
        Ok(format!("{} LIMIT {} OFFSET {}", select, take, skip))
    }

    /// Emit a single row INSERT with one named parameter per column.
    ///
    /// With `return_identity`, dialects with a native "last identity" clause
    /// append it as a second statement; the others return the INSERT
    /// unchanged and the caller issues a follow-up scalar query.
    fn generate_insert(&self, table: &str, columns: &[&str], return_identity: bool) -> Result<String> {
        validate_identifier(table)?;
        if columns.is_empty() {
            return Err(Error::validation("insert requires at least one column"));
        }
        for name in columns {
            validate_identifier(name)?;
        }
        let prefix = self.parameter_prefix();
        let mut out = String::with_capacity(48 + columns.len() * 16);
        out.push_str("INSERT INTO ");
        self.write_identifier(&mut out, table);
        out.push_str(" (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push_str(") VALUES (");
        separated_by(
            &mut out,
            columns,
            |out, c| {
                out.push_str(prefix);
                out.push_str(c);
            },
            ", ",
        );
        out.push(')');
        if return_identity {
            if let Some(clause) = self.insert_identity_clause() {
                out.push_str(";\n");
                out.push_str(clause);
            }
        }
        log_sql("insert", &out);
        Ok(out)
    }

    /// The dialect's "return last identity" statement, if it has one.
    fn insert_identity_clause(&self) -> Option<&'static str> {
        None
    }

    /// Emit a multi-row INSERT, numbering parameters per row.
    ///
    /// Refuses to build a statement the backend would reject: if
    /// `columns x row_count` exceeds [`Dialect::max_parameters`] the caller
    /// must chunk rows using that limit.
    fn generate_bulk_insert(&self, table: &str, columns: &[&str], row_count: usize) -> Result<String> {
        validate_identifier(table)?;
        if columns.is_empty() || row_count == 0 {
            return Err(Error::validation(
                "bulk insert requires at least one column and one row",
            ));
        }
        for name in columns {
            validate_identifier(name)?;
        }
        let required = columns.len() * row_count;
        let maximum = self.max_parameters();
        if required > maximum {
            return Err(Error::BatchTooLarge { required, maximum });
        }
        let prefix = self.parameter_prefix();
        let mut out = String::with_capacity(48 + required * 8);
        out.push_str("INSERT INTO ");
        self.write_identifier(&mut out, table);
        out.push_str(" (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push_str(") VALUES\n");
        separated_by(
            &mut out,
            0..row_count,
            |out, row| {
                out.push('(');
                separated_by(
                    out,
                    columns,
                    |out, c| {
                        out.push_str(prefix);
                        out.push_str(c);
                        write_integer!(out, row);
                    },
                    ", ",
                );
                out.push(')');
            },
            ",\n",
        );
        log_sql("bulk insert", &out);
        Ok(out)
    }

    /// Emit an UPDATE of `columns` keyed on `key_columns`.
    fn generate_update(&self, table: &str, columns: &[&str], key_columns: &[&str]) -> Result<String> {
        validate_identifier(table)?;
        if columns.is_empty() || key_columns.is_empty() {
            return Err(Error::validation(
                "update requires at least one column and one key column",
            ));
        }
        for name in columns.iter().chain(key_columns) {
            validate_identifier(name)?;
        }
        let prefix = self.parameter_prefix();
        let mut out = String::with_capacity(48 + (columns.len() + key_columns.len()) * 20);
        out.push_str("UPDATE ");
        self.write_identifier(&mut out, table);
        out.push_str(" SET ");
        separated_by(
            &mut out,
            columns,
            |out, c| {
                self.write_identifier(out, c);
                out.push_str(" = ");
                out.push_str(prefix);
                out.push_str(c);
            },
            ", ",
        );
        out.push_str(" WHERE ");
        separated_by(
            &mut out,
            key_columns,
            |out, c| {
                self.write_identifier(out, c);
                out.push_str(" = ");
                out.push_str(prefix);
                out.push_str(c);
            },
            " AND ",
        );
        log_sql("update", &out);
        Ok(out)
    }

    /// Emit a DELETE keyed on `key_columns`.
    fn generate_delete(&self, table: &str, key_columns: &[&str]) -> Result<String> {
        validate_identifier(table)?;
        if key_columns.is_empty() {
            return Err(Error::validation("delete requires at least one key column"));
        }
        for name in key_columns {
            validate_identifier(name)?;
        }
        let prefix = self.parameter_prefix();
        let mut out = String::with_capacity(32 + key_columns.len() * 20);
        out.push_str("DELETE FROM ");
        self.write_identifier(&mut out, table);
        out.push_str(" WHERE ");
        separated_by(
            &mut out,
            key_columns,
            |out, c| {
                self.write_identifier(out, c);
                out.push_str(" = ");
                out.push_str(prefix);
                out.push_str(c);
            },
            " AND ",
        );
        log_sql("delete", &out);
        Ok(out)
    }

    /// Emit a DELETE with a caller supplied WHERE fragment.
    fn generate_delete_where(&self, table: &str, where_clause: &str) -> Result<String> {
        validate_identifier(table)?;
        if where_clause.trim().is_empty() {
            return Err(Error::validation("delete condition must not be empty"));
        }
        let mut out = String::with_capacity(24 + where_clause.len());
        out.push_str("DELETE FROM ");
        self.write_identifier(&mut out, table);
        out.push_str(" WHERE ");
        out.push_str(where_clause);
        log_sql("delete where", &out);
        Ok(out)
    }

    /// Emit the dialect's upsert shape keyed on `key_columns`.
    ///
    /// The default is the conflict-aware `INSERT ... ON CONFLICT DO UPDATE`;
    /// dialects with native `MERGE` or only `INSERT OR REPLACE` override.
    /// The shape is chosen by the dialect, never by the caller.
    fn generate_merge(&self, table: &str, columns: &[&str], key_columns: &[&str]) -> Result<String> {
        validate_merge_input(table, columns, key_columns)?;
        let prefix = self.parameter_prefix();
        let mut out = String::with_capacity(96 + columns.len() * 32);
        out.push_str("INSERT INTO ");
        self.write_identifier(&mut out, table);
        out.push_str(" (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push_str(") VALUES (");
        separated_by(
            &mut out,
            columns,
            |out, c| {
                out.push_str(prefix);
                out.push_str(c);
            },
            ", ",
        );
        out.push_str(") ON CONFLICT (");
        separated_by(&mut out, key_columns, |out, c| self.write_identifier(out, c), ", ");
        out.push(')');
        let updatable: Vec<&&str> = columns.iter().filter(|c| !key_columns.contains(c)).collect();
        if updatable.is_empty() {
            out.push_str(" DO NOTHING");
        } else {
            out.push_str(" DO UPDATE SET ");
            separated_by(
                &mut out,
                updatable,
                |out, c| {
                    self.write_identifier(out, c);
                    out.push_str(" = EXCLUDED.");
                    self.write_identifier(out, c);
                },
                ", ",
            );
        }
        log_sql("merge", &out);
        Ok(out)
    }

    /// Catalog query telling whether a table exists. Dialects without a SQL
    /// surface return the not-supported sentinel (empty string).
    fn table_exists_sql(&self, table: &str) -> Result<String> {
        validate_identifier(table)?;
        Ok(format!(
            "SELECT 1 FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = '{}'",
            table
        ))
    }

    /// Catalog query telling whether a column exists on a table.
    fn column_exists_sql(&self, table: &str, column: &str) -> Result<String> {
        validate_identifier(table)?;
        validate_identifier(column)?;
        Ok(format!(
            "SELECT 1 FROM INFORMATION_SCHEMA.COLUMNS WHERE TABLE_NAME = '{}' AND COLUMN_NAME = '{}'",
            table, column
        ))
    }

    /// Emit CREATE TABLE from an ordered column name/type list.
    fn create_table_sql(
        &self,
        table: &str,
        columns: &[(&str, &str)],
        primary_keys: &[&str],
    ) -> Result<String> {
        validate_identifier(table)?;
        if columns.is_empty() {
            return Err(Error::validation("create table requires at least one column"));
        }
        for (name, column_type) in columns {
            validate_identifier(name)?;
            if column_type.trim().is_empty() {
                return Err(Error::validation(format!(
                    "column {:?} is missing its type",
                    name
                )));
            }
        }
        for name in primary_keys {
            validate_identifier(name)?;
            if !columns.iter().any(|(c, _)| c == name) {
                return Err(Error::validation(format!(
                    "primary key {:?} is not among the columns",
                    name
                )));
            }
        }
        let mut out = String::with_capacity(48 + columns.len() * 24);
        out.push_str("CREATE TABLE ");
        self.write_identifier(&mut out, table);
        out.push_str(" (\n");
        separated_by(
            &mut out,
            columns,
            |out, (name, column_type)| {
                self.write_identifier(out, name);
                out.push(' ');
                out.push_str(column_type);
            },
            ",\n",
        );
        if !primary_keys.is_empty() {
            out.push_str(",\nPRIMARY KEY (");
            separated_by(&mut out, primary_keys, |out, c| self.write_identifier(out, c), ", ");
            out.push(')');
        }
        out.push_str("\n)");
        log_sql("create table", &out);
        Ok(out)
    }

    fn drop_table_sql(&self, table: &str) -> Result<String> {
        validate_identifier(table)?;
        let mut out = String::with_capacity(16 + table.len());
        out.push_str("DROP TABLE ");
        self.write_identifier(&mut out, table);
        Ok(out)
    }

    fn create_index_sql(
        &self,
        table: &str,
        index: &str,
        columns: &[&str],
        unique: bool,
    ) -> Result<String> {
        validate_identifier(table)?;
        validate_identifier(index)?;
        if columns.is_empty() {
            return Err(Error::validation("index requires at least one column"));
        }
        for name in columns {
            validate_identifier(name)?;
        }
        let mut out = String::with_capacity(32 + columns.len() * 16);
        out.push_str(if unique {
            "CREATE UNIQUE INDEX "
        } else {
            "CREATE INDEX "
        });
        self.write_identifier(&mut out, index);
        out.push_str(" ON ");
        self.write_identifier(&mut out, table);
        out.push_str(" (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push(')');
        Ok(out)
    }

    fn drop_index_sql(&self, table: &str, index: &str) -> Result<String> {
        validate_identifier(table)?;
        validate_identifier(index)?;
        let mut out = String::with_capacity(16 + index.len());
        out.push_str("DROP INDEX ");
        self.write_identifier(&mut out, index);
        Ok(out)
    }

    /// INSERT text plus bound parameters from an explicit field list.
    fn insert_command(
        &self,
        table: &str,
        fields: &[(&str, Value)],
        return_identity: bool,
    ) -> Result<GeneratedSql> {
        let columns: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let text = self.generate_insert(table, &columns, return_identity)?;
        if text.is_empty() {
            return Ok(GeneratedSql::text_only(text));
        }
        Ok(GeneratedSql::new(text, bind_parameters(self.as_dyn(), fields)?))
    }

    /// UPDATE text plus bound parameters; `keys` follow the SET columns.
    fn update_command(
        &self,
        table: &str,
        fields: &[(&str, Value)],
        keys: &[(&str, Value)],
    ) -> Result<GeneratedSql> {
        let columns: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let key_columns: Vec<&str> = keys.iter().map(|(name, _)| *name).collect();
        let text = self.generate_update(table, &columns, &key_columns)?;
        if text.is_empty() {
            return Ok(GeneratedSql::text_only(text));
        }
        let mut all = fields.to_vec();
        all.extend_from_slice(keys);
        Ok(GeneratedSql::new(text, bind_parameters(self.as_dyn(), &all)?))
    }

    /// DELETE text plus bound key parameters.
    fn delete_command(&self, table: &str, keys: &[(&str, Value)]) -> Result<GeneratedSql> {
        let key_columns: Vec<&str> = keys.iter().map(|(name, _)| *name).collect();
        let text = self.generate_delete(table, &key_columns)?;
        if text.is_empty() {
            return Ok(GeneratedSql::text_only(text));
        }
        Ok(GeneratedSql::new(text, bind_parameters(self.as_dyn(), keys)?))
    }

    /// Upsert text plus bound parameters, keyed on `key_columns` (which must
    /// appear among the fields).
    fn merge_command(
        &self,
        table: &str,
        fields: &[(&str, Value)],
        key_columns: &[&str],
    ) -> Result<GeneratedSql> {
        let columns: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let text = self.generate_merge(table, &columns, key_columns)?;
        if text.is_empty() {
            return Ok(GeneratedSql::text_only(text));
        }
        Ok(GeneratedSql::new(text, bind_parameters(self.as_dyn(), fields)?))
    }

    /// Paged SELECT with an optional composed predicate as the WHERE clause.
    fn paged_select_command(
        &self,
        table: &str,
        columns: &[&str],
        condition: Option<&Predicate>,
        order_by: &[&str],
        skip: u64,
        take: u64,
    ) -> Result<GeneratedSql> {
        let clause = match condition {
            Some(predicate) => {
                let mut out = String::new();
                self.write_predicate(&mut out, predicate)?;
                Some(out)
            }
            None => None,
        };
        let select = self.generate_select(table, columns, clause.as_deref(), order_by)?;
        if select.is_empty() {
            return Ok(GeneratedSql::text_only(select));
        }
        let text = self.generate_paged(&select, skip, take)?;
        log_sql("paged select", &text);
        Ok(GeneratedSql::text_only(text))
    }
}

pub(crate) fn validate_merge_input(
    table: &str,
    columns: &[&str],
    key_columns: &[&str],
) -> Result<()> {
    validate_identifier(table)?;
    if columns.is_empty() || key_columns.is_empty() {
        return Err(Error::validation(
            "merge requires at least one column and one key column",
        ));
    }
    for name in columns.iter().chain(key_columns) {
        validate_identifier(name)?;
    }
    for key in key_columns {
        if !columns.contains(key) {
            return Err(Error::validation(format!(
                "merge key {:?} is not among the columns",
                key
            )));
        }
    }
    Ok(())
}

pub(crate) fn write_date(out: &mut String, value: &Date) {
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        value.year(),
        value.month() as u8,
        value.day()
    );
}

pub(crate) fn write_time(out: &mut String, value: &Time) {
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    );
    let mut subsecond = value.nanosecond();
    if subsecond != 0 {
        let mut width = 9;
        while width > 1 && subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(out, ".{:0width$}", subsecond);
    }
}

/// Fallback dialect serving unrecognized providers: backtick quoting, `?`
/// parameter prefix, conflict-aware upsert.
pub struct GenericDialect;

impl GenericDialect {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for GenericDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for GenericDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn provider(&self) -> Provider {
        Provider::Other
    }
}
