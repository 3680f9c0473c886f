//! Symbols and their localized spellings

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use verdict_ast::{FunctionDef, IdentifierPath, ValueKind, VariableDef};

/// A template registered in a namespace
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable(Arc<VariableDef>),
    Function(Arc<FunctionDef>),
}

impl Symbol {
    /// Global name of the symbol
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(def) => def.name(),
            Self::Function(def) => def.name(),
        }
    }

    /// Qualified global name (namespace path plus name)
    pub fn qualified_name(&self) -> &IdentifierPath {
        match self {
            Self::Variable(def) => def.qualified_name(),
            Self::Function(def) => def.qualified_name(),
        }
    }

    /// Declared kind of the value the symbol yields
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Variable(def) => def.kind(),
            Self::Function(def) => def.return_kind(),
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(def) => write!(f, "variable {}", def.qualified_name()),
            Self::Function(def) => write!(f, "function {}", def.qualified_name()),
        }
    }
}

/// A global name plus optional per-locale spellings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedNames {
    global: String,
    aliases: IndexMap<String, String>,
}

impl LocalizedNames {
    pub fn new(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
            aliases: IndexMap::new(),
        }
    }

    /// Add the spelling used in a locale
    pub fn with(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.insert(locale.into(), name.into());
        self
    }

    pub fn global(&self) -> &str {
        &self.global
    }

    /// The spelling registered for a locale, if any
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.aliases.get(locale).map(String::as_str)
    }

    /// The spelling used in a locale, falling back to the global name
    pub fn spelling(&self, locale: Option<&str>) -> &str {
        locale
            .and_then(|locale| self.get(locale))
            .unwrap_or(&self.global)
    }

    /// Locales with a registered spelling
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }
}

/// Spellings of the entries at one namespace level, per locale
///
/// Maps each locale's (possibly case-folded) spelling to the entry's global
/// name, remembering whether the spelling is a registered alias or the
/// global-name fallback.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    locales: HashMap<String, HashMap<String, Spelling>>,
}

#[derive(Debug, Clone)]
struct Spelling {
    global: String,
    localized: bool,
}

/// Outcome of a localized lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedMatch<'a> {
    /// Global name of the matched entry
    pub global: &'a str,
    /// False when the locale has no alias for the entry and its global name
    /// was matched instead
    pub localized: bool,
}

impl SymbolTable {
    /// Record a spelling; returns false if it is already taken
    pub(crate) fn insert(
        &mut self,
        locale: &str,
        spelling: String,
        global: &str,
        localized: bool,
    ) -> bool {
        let table = self.locales.entry(locale.to_string()).or_default();
        if table.contains_key(&spelling) {
            return false;
        }
        table.insert(
            spelling,
            Spelling {
                global: global.to_string(),
                localized,
            },
        );
        true
    }

    /// Look up a (already case-folded) spelling in a locale
    ///
    /// Returns `None` when the locale is unknown at this level as well as
    /// when the spelling is not registered.
    pub fn lookup(&self, locale: &str, spelling: &str) -> Option<LocalizedMatch<'_>> {
        self.locales
            .get(locale)?
            .get(spelling)
            .map(|entry| LocalizedMatch {
                global: &entry.global,
                localized: entry.localized,
            })
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }
}
