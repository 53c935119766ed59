use crate::{Error, Provider, Result};

/// Immutable ordered key/value record describing a connection.
///
/// Produced by a pure builder and serialized once; the builder methods
/// return a new record instead of mutating shared state. Keys keep their
/// insertion position and compare case-insensitively, matching how
/// connection strings are conventionally read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionOptions {
    provider: Provider,
    values: Vec<(String, String)>,
}

impl ConnectionOptions {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            values: Vec::new(),
        }
    }

    /// Parse a `key=value;` connection string.
    pub fn parse(provider: Provider, connection_string: &str) -> Result<Self> {
        let mut options = Self::new(provider);
        for pair in connection_string.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let Some((key, value)) = pair.split_once('=') else {
                return Err(Error::connection(
                    connection_string,
                    format!("malformed fragment {:?}", pair),
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::connection(connection_string, "empty key"));
            }
            options = options.with_value(key, value.trim());
        }
        Ok(options)
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// New record with the pair set; an existing key keeps its position.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self
            .values
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(entry) => entry.1 = value,
            None => self.values.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Set the server/host under the provider's conventional key. File and
    /// document backends have no server, the record is returned unchanged.
    pub fn with_server(self, server: &str) -> Self {
        match self.provider {
            Provider::Sqlite | Provider::Document => self,
            Provider::SqlServer => self.with_value("Data Source", server),
            Provider::Postgres => self.with_value("Host", server),
            Provider::Other => self.with_value("Server", server),
        }
    }

    /// Set the database (or backing file) under the provider's key.
    pub fn with_database(self, database: &str) -> Self {
        let key = self.provider_database_key();
        self.with_value(key, database)
    }

    /// Set credentials; backends without authentication ignore them.
    pub fn with_credentials(self, user: &str, password: &str) -> Self {
        match self.provider {
            Provider::Sqlite | Provider::Document => self,
            Provider::SqlServer => self
                .with_value("User ID", user)
                .with_value("Password", password),
            Provider::Postgres => self
                .with_value("Username", user)
                .with_value("Password", password),
            Provider::Other => self
                .with_value("User", user)
                .with_value("Password", password),
        }
    }

    fn provider_database_key(&self) -> &'static str {
        match self.provider {
            Provider::Sqlite => "Data Source",
            Provider::SqlServer => "Initial Catalog",
            Provider::Postgres => "Database",
            Provider::Document => "Filename",
            Provider::Other => "Database",
        }
    }

    /// The database name the record points at, if set.
    pub fn database_name(&self) -> Option<&str> {
        self.get(self.provider_database_key())
    }

    /// Serialize as a `key=value;` connection string.
    pub fn to_connection_string(&self) -> String {
        let mut out = String::with_capacity(self.values.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
        for (key, value) in &self.values {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push(';');
        }
        out
    }
}
