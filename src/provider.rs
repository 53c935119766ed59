/// Database backend families the layer can target.
///
/// One descriptor exists per variant, fixed at construction and shared
/// read-only; all per-backend textual rules hang off the matching
/// [`Dialect`](crate::Dialect) strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    Sqlite,
    SqlServer,
    Postgres,
    /// Document store without a SQL surface (catalog queries return the
    /// not-supported sentinel instead of failing).
    Document,
    /// Unrecognized backend, served by the generic dialect.
    Other,
}

impl Provider {
    /// Whether the backend has a SQL surface at all.
    pub fn supports_sql(&self) -> bool {
        !matches!(self, Provider::Document)
    }

    /// Whether the backend has a native `MERGE` statement.
    pub fn supports_merge_statement(&self) -> bool {
        matches!(self, Provider::SqlServer)
    }

    /// Whether an insert can be followed by a native "last identity" clause.
    pub fn supports_insert_identity(&self) -> bool {
        matches!(self, Provider::Sqlite | Provider::SqlServer | Provider::Postgres)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Provider::Sqlite => "sqlite",
            Provider::SqlServer => "sqlserver",
            Provider::Postgres => "postgres",
            Provider::Document => "document",
            Provider::Other => "other",
        })
    }
}
