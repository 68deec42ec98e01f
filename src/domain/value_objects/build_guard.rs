//! Build Guard Value Object

use std::fmt;

use serde::Serialize;

/// The condition gating an object file in a kbuild `Makefile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "symbol", rename_all = "lowercase")]
pub enum BuildGuard {
    /// `obj-$(SYMBOL)`: built when the symbol is enabled
    Symbol(String),
    /// `obj-y`: always built
    Unconditional,
}

impl BuildGuard {
    /// The text placed after `obj-` in a build rule.
    pub fn as_obj_suffix(&self) -> String {
        match self {
            BuildGuard::Symbol(name) => format!("$({name})"),
            BuildGuard::Unconditional => "y".to_string(),
        }
    }

    /// Render `obj-<guard>\t\t+= <object>` with a trailing newline.
    pub fn build_rule(&self, object: &str) -> String {
        format!("obj-{}\t\t+= {object}\n", self.as_obj_suffix())
    }
}

impl From<Option<String>> for BuildGuard {
    fn from(symbol: Option<String>) -> Self {
        symbol.map_or(BuildGuard::Unconditional, BuildGuard::Symbol)
    }
}

impl fmt::Display for BuildGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildGuard::Symbol(name) => write!(f, "{name}"),
            BuildGuard::Unconditional => write!(f, "y"),
        }
    }
}
