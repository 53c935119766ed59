use super::{log_sql, separated_by};
use super::validate_merge_input;
use crate::{Dialect, Provider, Result};
use std::fmt::Write;

/// SQLite dialect: bracket quoting, `@` parameters, `INSERT OR REPLACE`
/// upsert, 999 parameters per statement.
pub struct SqliteDialect;

impl SqliteDialect {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn provider(&self) -> Provider {
        Provider::Sqlite
    }

    fn open_quote(&self) -> Option<char> {
        Some('[')
    }

    fn close_quote(&self) -> Option<char> {
        Some(']')
    }

    fn parameter_prefix(&self) -> &'static str {
        "@"
    }

    fn max_parameters(&self) -> usize {
        999
    }

    fn case_sensitive_parameters(&self) -> bool {
        false
    }

    fn insert_identity_clause(&self) -> Option<&'static str> {
        Some("SELECT last_insert_rowid()")
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
        out.push('\'');
    }

    // SQLite has no native MERGE; the closest single statement is
    // INSERT OR REPLACE, which replaces the whole conflicting row.
    fn generate_merge(&self, table: &str, columns: &[&str], key_columns: &[&str]) -> Result<String> {
        validate_merge_input(table, columns, key_columns)?;
        let mut out = String::with_capacity(48 + columns.len() * 16);
        out.push_str("INSERT OR REPLACE INTO ");
        self.write_identifier(&mut out, table);
        out.push_str(" (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push_str(") VALUES (");
        separated_by(
            &mut out,
            columns,
            |out, c| {
                out.push('@');
                out.push_str(c);
            },
            ", ",
        );
        out.push(')');
        log_sql("merge", &out);
        Ok(out)
    }

    fn table_exists_sql(&self, table: &str) -> Result<String> {
        crate::validate_identifier(table)?;
        Ok(format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='{}'",
            table
        ))
    }

    fn column_exists_sql(&self, table: &str, column: &str) -> Result<String> {
        crate::validate_identifier(table)?;
        crate::validate_identifier(column)?;
        Ok(format!(
            "SELECT 1 FROM pragma_table_info('{}') WHERE name='{}'",
            table, column
        ))
    }
}
