use crate::Parameter;
use std::fmt::{self, Display};

/// SQL text plus the ordered parameters it expects.
///
/// A value object: once produced by a dialect it is handed to the caller
/// owning the connection and never mutated again.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedSql {
    pub text: String,
    pub parameters: Vec<Parameter>,
}

impl GeneratedSql {
    pub fn new(text: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            text: text.into(),
            parameters,
        }
    }

    /// A statement that binds nothing.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// The not-supported sentinel a capability-gated dialect hands back.
    pub fn is_not_supported(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for GeneratedSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
