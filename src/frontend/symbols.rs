//! Symbol table for the xBase front end
//!
//! Tracks every declared name (functions, classes, methods, attributes, parameters, variables) under a compound
//! key that encodes its declaring scope:
//!
//! | declared in                 | key           |
//! |-----------------------------|---------------|
//! | method `M` of class `C`     | `C.M.name`    |
//! | class `C` (outside methods) | `C.name`      |
//! | function `F`                | `F.name`      |
//! | file level                  | `name`        |
//!
//! Keys are built by [`ScopePath::key`](crate::frontend::analyzer::ScopePath::key). A table is created fresh for
//! every analysis run.

use std::collections::HashMap;
use std::fmt;

use crate::frontend::lexer::Token;

/// What kind of entity a symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Class,
    Method,
    Variable,
    Parameter,
    Attribute,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
            SymbolKind::Variable => "variable",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Attribute => "attribute",
        };
        f.write_str(s)
    }
}

/// A declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Name of the declaring scope (`""` at file level, `C.M` inside a method).
    pub scope: String,
    /// `Static Function`
    pub is_static: bool,
    /// Token of the declared name.
    pub token: Token,
    /// For classes, the class named after `From`.
    pub parent: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, scope: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            kind,
            scope: scope.into(),
            is_static: false,
            token,
            parent: None,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_parent(mut self, parent: Option<String>) -> Self {
        self.parent = parent;
        self
    }
}

/// Compound key → symbol.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `symbol` under `key`.
    ///
    /// The first declaration wins: if `key` is taken, the table is left unchanged and the existing symbol is
    /// returned as the error.
    pub fn define(&mut self, key: String, symbol: Symbol) -> Result<(), &Symbol> {
        use std::collections::hash_map::Entry;

        match self.symbols.entry(key) {
            Entry::Occupied(existing) => Err(&*existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(symbol);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&Symbol> {
        self.symbols.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.symbols.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over `(key, symbol)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(k, s)| (k.as_str(), s))
    }
}
