use crate::{
    Dialect, DocumentDialect, GenericDialect, PostgresDialect, Provider, SqlServerDialect,
    SqliteDialect,
};
use std::{collections::HashMap, sync::Arc};

/// Explicit dialect registry owned by the composing application.
///
/// Built once at startup with the known strategies and passed to consumers;
/// lookups are read-only, so a registry is freely shared across concurrent
/// callers without locking.
pub struct DialectRegistry {
    dialects: HashMap<Provider, Arc<dyn Dialect>>,
}

impl DialectRegistry {
    /// Registry holding all built-in dialects.
    pub fn new() -> Self {
        let mut registry = Self {
            dialects: HashMap::new(),
        };
        registry.register(Arc::new(SqliteDialect::new()));
        registry.register(Arc::new(SqlServerDialect::new()));
        registry.register(Arc::new(PostgresDialect::new()));
        registry.register(Arc::new(DocumentDialect::new()));
        registry.register(Arc::new(GenericDialect::new()));
        registry
    }

    /// Register or replace the strategy for the dialect's own provider.
    pub fn register(&mut self, dialect: Arc<dyn Dialect>) {
        self.dialects.insert(dialect.provider(), dialect);
    }

    /// Strategy for a provider; unknown providers fall back to the generic
    /// dialect.
    pub fn get(&self, provider: Provider) -> Arc<dyn Dialect> {
        self.dialects
            .get(&provider)
            .or_else(|| self.dialects.get(&Provider::Other))
            .cloned()
            .unwrap_or_else(|| Arc::new(GenericDialect::new()))
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
