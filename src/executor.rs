use crate::{GeneratedSql, Result, Value};
use futures::Stream;
use std::future::Future;

/// One labeled result row produced by a reader.
pub type Row = Vec<(String, Value)>;

/// Boundary of the raw I/O layer this crate consumes but does not implement.
///
/// The synthesizer and binder never touch these traits; they hand a
/// [`GeneratedSql`] to a caller owning the connection, which drives the
/// command through a backend driver.
pub trait DbConnection: Send {
    type Command: DbCommand;

    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn create_command(&mut self, sql: GeneratedSql)
    -> impl Future<Output = Result<Self::Command>> + Send;
}

/// An executable command carrying SQL text and its bound parameters.
pub trait DbCommand: Send {
    /// Execute and return the number of affected rows.
    fn execute_non_query(&mut self) -> impl Future<Output = Result<u64>> + Send;

    /// Execute and return the first value of the first row.
    fn execute_scalar(&mut self) -> impl Future<Output = Result<Value>> + Send;

    /// Execute and stream labeled rows.
    fn execute_reader(&mut self) -> impl Stream<Item = Result<Row>> + Send;
}
