use crate::{Dialect, Provider, Result};

/// Document-store dialect. There is no SQL surface: identifiers stay
/// unquoted and every generation method returns the not-supported sentinel
/// (an empty string, a documented signal rather than an error) so callers
/// can branch on [`Provider::supports_sql`] before asking for text.
pub struct DocumentDialect;

impl DocumentDialect {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DocumentDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for DocumentDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn provider(&self) -> Provider {
        Provider::Document
    }

    fn open_quote(&self) -> Option<char> {
        None
    }

    fn close_quote(&self) -> Option<char> {
        None
    }

    fn case_sensitive_parameters(&self) -> bool {
        false
    }

    fn max_parameters(&self) -> usize {
        usize::MAX
    }

    fn generate_select(
        &self,
        _table: &str,
        _columns: &[&str],
        _where_clause: Option<&str>,
        _order_by: &[&str],
    ) -> Result<String> {
        Ok(String::new())
    }

    fn generate_paged(&self, _select: &str, _skip: u64, _take: u64) -> Result<String> {
        Ok(String::new())
    }

    fn generate_insert(
        &self,
        _table: &str,
        _columns: &[&str],
        _return_identity: bool,
    ) -> Result<String> {
        Ok(String::new())
    }

    fn generate_bulk_insert(
        &self,
        _table: &str,
        _columns: &[&str],
        _row_count: usize,
    ) -> Result<String> {
        Ok(String::new())
    }

    fn generate_update(
        &self,
        _table: &str,
        _columns: &[&str],
        _key_columns: &[&str],
    ) -> Result<String> {
        Ok(String::new())
    }

    fn generate_delete(&self, _table: &str, _key_columns: &[&str]) -> Result<String> {
        Ok(String::new())
    }

    fn generate_delete_where(&self, _table: &str, _where_clause: &str) -> Result<String> {
        Ok(String::new())
    }

    fn generate_merge(
        &self,
        _table: &str,
        _columns: &[&str],
        _key_columns: &[&str],
    ) -> Result<String> {
        Ok(String::new())
    }

    fn table_exists_sql(&self, _table: &str) -> Result<String> {
        Ok(String::new())
    }

    fn column_exists_sql(&self, _table: &str, _column: &str) -> Result<String> {
        Ok(String::new())
    }

    fn create_table_sql(
        &self,
        _table: &str,
        _columns: &[(&str, &str)],
        _primary_keys: &[&str],
    ) -> Result<String> {
        Ok(String::new())
    }

    fn drop_table_sql(&self, _table: &str) -> Result<String> {
        Ok(String::new())
    }

    fn create_index_sql(
        &self,
        _table: &str,
        _index: &str,
        _columns: &[&str],
        _unique: bool,
    ) -> Result<String> {
        Ok(String::new())
    }

    fn drop_index_sql(&self, _table: &str, _index: &str) -> Result<String> {
        Ok(String::new())
    }
}
