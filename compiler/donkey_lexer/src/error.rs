//! Registry errors.
//!
//! Tokenization itself never fails; only name-based registration and
//! lookup can.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A lexer name or alias is already registered.
    #[error("a lexer named '{name}' is already registered")]
    DuplicateName { name: String },

    /// No lexer is registered under the requested name or alias.
    #[error("no lexer registered for '{name}'")]
    UnknownLexer { name: String },
}
