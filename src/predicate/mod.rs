mod compose;
mod eval;
mod node;

pub use compose::*;
pub use eval::*;
pub use node::*;
