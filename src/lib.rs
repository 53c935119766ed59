mod connection;
mod error;
mod executor;
mod ident;
mod mutex;
mod param;
mod predicate;
mod provider;
mod query;
mod registry;
mod runner;
mod value;
mod writer;

pub use connection::*;
pub use error::*;
pub use executor::*;
pub use ident::*;
pub use mutex::*;
pub use param::*;
pub use predicate::*;
pub use provider::*;
pub use query::*;
pub use registry::*;
pub use runner::*;
pub use value::*;
pub use writer::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;
