mod dialect;
mod document;
mod mssql;
mod postgres;
mod sqlite;

pub use dialect::*;
pub use document::*;
pub use mssql::*;
pub use postgres::*;
pub use sqlite::*;

/// Run `f` for every value, inserting `separator` between the pieces that
/// actually produced output.
pub(crate) fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Debug-log a generated statement, truncated the way long queries are.
pub(crate) fn log_sql(operation: &str, sql: &str) {
    if sql.is_empty() {
        log::debug!("{}: not supported by this dialect", operation);
    } else {
        let mut cut = sql.len().min(497);
        while !sql.is_char_boundary(cut) {
            cut -= 1;
        }
        log::debug!(
            "{}: {}{}",
            operation,
            sql[..cut].trim_end(),
            if sql.len() > cut { "..." } else { "" }
        );
    }
}
