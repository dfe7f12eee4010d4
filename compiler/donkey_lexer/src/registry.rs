//! Name-keyed lexer registry.
//!
//! The host builds a registry once during startup and hands it to the
//! renderer. There is no process-wide registry. Names and aliases are
//! matched case-insensitively.

use rustc_hash::FxHashMap;

use crate::{DonkeyLexer, RegistryError, SyntaxLexer};

/// Lookup table from lexer name (or alias) to lexer.
#[derive(Default)]
pub struct LexerRegistry {
    /// Lexers in registration order.
    lexers: Vec<Box<dyn SyntaxLexer>>,
    /// Lowercased name or alias -> index into `lexers`.
    by_name: FxHashMap<String, usize>,
}

impl LexerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in Donkey lexer under `donkey`.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(Box::new(DonkeyLexer::new()));
        registry
    }

    /// Register `lexer` under its name and aliases.
    ///
    /// Fails without registering anything if any of those keys is taken.
    pub fn register(&mut self, lexer: impl SyntaxLexer + 'static) -> Result<(), RegistryError> {
        let keys = lookup_keys(&lexer);
        for (i, key) in keys.iter().enumerate() {
            if self.by_name.contains_key(key) || keys[..i].contains(key) {
                return Err(RegistryError::DuplicateName { name: key.clone() });
            }
        }
        self.insert(Box::new(lexer));
        Ok(())
    }

    fn insert(&mut self, lexer: Box<dyn SyntaxLexer>) {
        let index = self.lexers.len();
        for key in lookup_keys(lexer.as_ref()) {
            self.by_name.insert(key, index);
        }
        tracing::debug!(
            name = lexer.name(),
            aliases = ?lexer.aliases(),
            "registered lexer"
        );
        self.lexers.push(lexer);
    }

    /// Find a lexer by name or alias.
    pub fn get(&self, name: &str) -> Option<&dyn SyntaxLexer> {
        let index = *self.by_name.get(&name.to_ascii_lowercase())?;
        self.lexers.get(index).map(AsRef::as_ref)
    }

    /// Like [`get`](Self::get), but a miss is an error.
    pub fn lookup(&self, name: &str) -> Result<&dyn SyntaxLexer, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::UnknownLexer {
            name: name.to_string(),
        })
    }

    /// Registered lexers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SyntaxLexer> {
        self.lexers.iter().map(AsRef::as_ref)
    }

    /// Number of registered lexers (not counting aliases).
    pub fn len(&self) -> usize {
        self.lexers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexers.is_empty()
    }
}

impl std::fmt::Debug for LexerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.lexers.iter().map(|l| l.name()))
            .finish()
    }
}

fn lookup_keys(lexer: &dyn SyntaxLexer) -> Vec<String> {
    std::iter::once(lexer.name())
        .chain(lexer.aliases().iter().copied())
        .map(str::to_ascii_lowercase)
        .collect()
}
