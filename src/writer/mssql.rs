use super::{log_sql, separated_by};
use super::validate_merge_input;
use crate::{Dialect, Error, Provider, Result, validate_identifier};
use std::fmt::Write;

/// SQL Server dialect: bracket quoting, `@` parameters, native `MERGE`,
/// `OFFSET ... FETCH NEXT` paging, 2100 parameters per statement.
pub struct SqlServerDialect;

impl SqlServerDialect {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SqlServerDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqlServerDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn provider(&self) -> Provider {
        Provider::SqlServer
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
        2100
    }

    fn case_sensitive_parameters(&self) -> bool {
        false
    }

    // T-SQL BIT literals.
    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push(['0', '1'][value as usize]);
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("0x");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
    }

    fn insert_identity_clause(&self) -> Option<&'static str> {
        Some("SELECT SCOPE_IDENTITY()")
    }

    // T-SQL allows OFFSET/FETCH only after an ORDER BY clause, and
    // FETCH NEXT 0 ROWS is a server error. Unordered statements get the
    // constant placeholder order, and an empty page skips past every row
    // instead of fetching zero.
    fn generate_paged(&self, select: &str, skip: u64, take: u64) -> Result<String> {
        if select.trim().is_empty() {
            return Err(Error::validation("cannot page an empty statement"));
        }
        let mut out = String::with_capacity(select.len() + 64);
        out.push_str(select);
        if !select.to_ascii_uppercase().contains("ORDER BY") {
            out.push_str(" ORDER BY (SELECT NULL)");
        }
        if take == 0 {
            let _ = write!(out, " OFFSET {} ROWS", i64::MAX);
        } else {
            let _ = write!(out, " OFFSET {} ROWS FETCH NEXT {} ROWS ONLY", skip, take);
        }
        Ok(out)
    }

    fn generate_merge(&self, table: &str, columns: &[&str], key_columns: &[&str]) -> Result<String> {
        validate_merge_input(table, columns, key_columns)?;
        let mut out = String::with_capacity(160 + columns.len() * 48);
        out.push_str("MERGE INTO ");
        self.write_identifier(&mut out, table);
        out.push_str(" AS target\nUSING (VALUES (");
        separated_by(
            &mut out,
            columns,
            |out, c| {
                out.push('@');
                out.push_str(c);
            },
            ", ",
        );
        out.push_str(")) AS source (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push_str(")\nON ");
        separated_by(
            &mut out,
            key_columns,
            |out, c| {
                out.push_str("target.");
                self.write_identifier(out, c);
                out.push_str(" = source.");
                self.write_identifier(out, c);
            },
            " AND ",
        );
        let updatable: Vec<&&str> = columns.iter().filter(|c| !key_columns.contains(c)).collect();
        if !updatable.is_empty() {
            out.push_str("\nWHEN MATCHED THEN UPDATE SET ");
            separated_by(
                &mut out,
                updatable,
                |out, c| {
                    self.write_identifier(out, c);
                    out.push_str(" = source.");
                    self.write_identifier(out, c);
                },
                ", ",
            );
        }
        out.push_str("\nWHEN NOT MATCHED THEN INSERT (");
        separated_by(&mut out, columns, |out, c| self.write_identifier(out, c), ", ");
        out.push_str(") VALUES (");
        separated_by(
            &mut out,
            columns,
            |out, c| {
                out.push_str("source.");
                self.write_identifier(out, c);
            },
            ", ",
        );
        // T-SQL requires MERGE to be terminated.
        out.push_str(");");
        log_sql("merge", &out);
        Ok(out)
    }

    fn table_exists_sql(&self, table: &str) -> Result<String> {
        validate_identifier(table)?;
        Ok(format!("SELECT OBJECT_ID('{}', 'U')", table))
    }

    fn column_exists_sql(&self, table: &str, column: &str) -> Result<String> {
        validate_identifier(table)?;
        validate_identifier(column)?;
        Ok(format!("SELECT COL_LENGTH('{}', '{}')", table, column))
    }

    fn drop_index_sql(&self, table: &str, index: &str) -> Result<String> {
        validate_identifier(table)?;
        validate_identifier(index)?;
        let mut out = String::with_capacity(24 + index.len() + table.len());
        out.push_str("DROP INDEX ");
        self.write_identifier(&mut out, index);
        out.push_str(" ON ");
        self.write_identifier(&mut out, table);
        Ok(out)
    }
}
