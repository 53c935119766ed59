use crate::{Dialect, Provider, Result, validate_identifier};

/// PostgreSQL dialect: double-quote quoting, `@` parameters, conflict-aware
/// upsert from the portable default, 65535 parameters per statement.
pub struct PostgresDialect;

impl PostgresDialect {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for PostgresDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn provider(&self) -> Provider {
        Provider::Postgres
    }

    fn open_quote(&self) -> Option<char> {
        Some('"')
    }

    fn close_quote(&self) -> Option<char> {
        Some('"')
    }

    fn parameter_prefix(&self) -> &'static str {
        "@"
    }

    fn max_parameters(&self) -> usize {
        65535
    }

    fn insert_identity_clause(&self) -> Option<&'static str> {
        Some("SELECT LASTVAL()")
    }

    fn table_exists_sql(&self, table: &str) -> Result<String> {
        validate_identifier(table)?;
        Ok(format!("SELECT to_regclass('{}')", table))
    }

    fn column_exists_sql(&self, table: &str, column: &str) -> Result<String> {
        validate_identifier(table)?;
        validate_identifier(column)?;
        Ok(format!(
            "SELECT 1 FROM information_schema.columns WHERE table_name = '{}' AND column_name = '{}'",
            table, column
        ))
    }
}
