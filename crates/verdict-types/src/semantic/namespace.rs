//! Namespace registration and lookup
//!
//! A namespace is a tree of levels. Each level holds variable and function
//! templates (objects) and nested namespaces, each known by a global name
//! and optionally by a different spelling per locale. Objects and
//! namespaces live in separate tables, so an object and a namespace at the
//! same level may share a name.
//!
//! Namespaces are assembled with [`NamespaceBuilder`] and validated once by
//! [`NamespaceBuilder::build`]; the resulting [`Namespace`] is immutable.

use indexmap::IndexMap;
use log::{debug, warn};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use verdict_ast::{FunctionDef, IdentifierPath, NodeError, VariableDef};
use verdict_diagnostics::{ErrorBuilder, VRD0400, VRD0401, VerdictError};

use super::symbols::{LocalizedNames, Symbol, SymbolTable};

/// Namespace registration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// Two entries of one table share a global name
    #[error("Two or more {what} in {level} share the global name '{name}'")]
    DuplicateGlobalName {
        what: &'static str,
        level: String,
        name: String,
    },

    /// Two entries of one table share a spelling in a locale
    #[error("The name '{name}' is shared by two or more {what} in {level} (locale: {locale})")]
    DuplicateLocalizedName {
        what: &'static str,
        level: String,
        name: String,
        locale: String,
    },

    /// Invalid name or function template
    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Namespace registration result
pub type NamespaceResult<T> = Result<T, NamespaceError>;

impl From<NamespaceError> for VerdictError {
    fn from(err: NamespaceError) -> Self {
        let message = err.to_string();
        match err {
            NamespaceError::DuplicateGlobalName { level, .. } => {
                ErrorBuilder::new(VRD0400, message).context(level).namespace()
            }
            NamespaceError::DuplicateLocalizedName { level, .. } => {
                ErrorBuilder::new(VRD0401, message).context(level).namespace()
            }
            NamespaceError::Node(err) => err.into(),
        }
    }
}

#[derive(Debug, Clone)]
enum Template {
    Variable(VariableDef),
    Function(FunctionDef),
}

/// A template together with its localized names, ready to be registered
#[derive(Debug, Clone)]
pub struct Bind {
    names: LocalizedNames,
    template: Template,
}

impl Bind {
    pub fn variable(def: VariableDef) -> Self {
        Self {
            names: LocalizedNames::new(def.name()),
            template: Template::Variable(def),
        }
    }

    pub fn function(def: FunctionDef) -> Self {
        Self {
            names: LocalizedNames::new(def.name()),
            template: Template::Function(def),
        }
    }

    /// Spell the template differently in a locale
    pub fn alias(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.names = self.names.with(locale, name);
        self
    }
}

/// Builder for [`Namespace`]
#[derive(Debug, Clone, Default)]
pub struct NamespaceBuilder {
    names: LocalizedNames,
    objects: Vec<Bind>,
    namespaces: Vec<NamespaceBuilder>,
    case_insensitive: BTreeSet<String>,
}

impl NamespaceBuilder {
    /// Create a root namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a namespace to be nested under another one
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            names: LocalizedNames::new(name),
            ..Self::default()
        }
    }

    /// Spell this namespace differently in a locale
    pub fn alias(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.names = self.names.with(locale, name);
        self
    }

    /// Register a template
    pub fn bind(mut self, bind: Bind) -> Self {
        self.objects.push(bind);
        self
    }

    /// Register a variable known only by its global name
    pub fn variable(self, def: VariableDef) -> Self {
        self.bind(Bind::variable(def))
    }

    /// Register a function known only by its global name
    pub fn function(self, def: FunctionDef) -> Self {
        self.bind(Bind::function(def))
    }

    /// Nest a namespace
    pub fn namespace(mut self, namespace: NamespaceBuilder) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// Match names case-insensitively in a locale, at every level
    pub fn case_insensitive(mut self, locale: impl Into<String>) -> Self {
        self.case_insensitive.insert(locale.into());
        self
    }

    /// Validate the whole tree and freeze it
    ///
    /// Each template receives its qualified global name. Fails if two
    /// objects (or two namespaces) at one level share a global name, or a
    /// spelling in any locale used anywhere in the tree.
    pub fn build(self) -> NamespaceResult<Namespace> {
        let mut locales = BTreeSet::new();
        let mut fold = BTreeSet::new();
        self.collect_locales(&mut locales, &mut fold);
        locales.extend(fold.iter().cloned());

        let path = match self.names.global() {
            "" => Vec::new(),
            name => vec![IdentifierPath::new(name)?.name().to_string()],
        };
        let namespace = self.finish(path, &locales, &fold)?;
        debug!(
            "Built namespace with {} objects and {} sub-namespaces at the root (locales: {:?})",
            namespace.objects.len(),
            namespace.namespaces.len(),
            locales
        );
        Ok(namespace)
    }

    fn collect_locales(&self, locales: &mut BTreeSet<String>, fold: &mut BTreeSet<String>) {
        locales.extend(self.names.locales().map(str::to_string));
        for bind in &self.objects {
            locales.extend(bind.names.locales().map(str::to_string));
        }
        fold.extend(self.case_insensitive.iter().cloned());
        for namespace in &self.namespaces {
            namespace.collect_locales(locales, fold);
        }
    }

    fn finish(
        self,
        path: Vec<String>,
        locales: &BTreeSet<String>,
        fold: &BTreeSet<String>,
    ) -> NamespaceResult<Namespace> {
        let level = level_name(&path);

        let mut objects: IndexMap<String, (LocalizedNames, Symbol)> = IndexMap::new();
        for bind in self.objects {
            let global = bind.names.global().to_string();
            if objects.contains_key(&global) {
                return Err(NamespaceError::DuplicateGlobalName {
                    what: "objects",
                    level,
                    name: global,
                });
            }
            let qualified = IdentifierPath::from_segments(path.iter().chain([&global]).cloned())?;
            let symbol = match bind.template {
                Template::Variable(def) => {
                    Symbol::Variable(Arc::new(def.with_qualified_name(qualified)))
                }
                Template::Function(def) => {
                    def.validate()?;
                    Symbol::Function(Arc::new(def.with_qualified_name(qualified)))
                }
            };
            objects.insert(global, (bind.names, symbol));
        }

        let mut namespaces: IndexMap<String, Namespace> = IndexMap::new();
        for builder in self.namespaces {
            let global = builder.names.global().to_string();
            if namespaces.contains_key(&global) {
                return Err(NamespaceError::DuplicateGlobalName {
                    what: "sub-namespaces",
                    level,
                    name: global,
                });
            }
            let child_path = IdentifierPath::from_segments(path.iter().chain([&global]).cloned())?;
            let child = builder.finish(child_path.segments().to_vec(), locales, fold)?;
            namespaces.insert(global, child);
        }

        let mut object_table = SymbolTable::default();
        let mut namespace_table = SymbolTable::default();
        for locale in locales {
            let folded = fold.contains(locale);
            fill_table(
                &mut object_table,
                objects.values().map(|(names, _)| names),
                locale,
                folded,
                "objects",
                &level,
            )?;
            fill_table(
                &mut namespace_table,
                namespaces.values().map(|ns| &ns.names),
                locale,
                folded,
                "sub-namespaces",
                &level,
            )?;
        }

        Ok(Namespace {
            names: self.names,
            path,
            objects,
            namespaces,
            object_table,
            namespace_table,
            case_insensitive: fold.clone(),
        })
    }
}

pub(crate) fn level_name(path: &[String]) -> String {
    if path.is_empty() {
        "the root namespace".to_string()
    } else {
        format!("namespace '{}'", path.join("."))
    }
}

fn fill_table<'a>(
    table: &mut SymbolTable,
    entries: impl Iterator<Item = &'a LocalizedNames>,
    locale: &str,
    folded: bool,
    what: &'static str,
    level: &str,
) -> NamespaceResult<()> {
    for names in entries {
        let (spelling, localized) = match names.get(locale) {
            Some(alias) => (alias, true),
            None => (names.global(), false),
        };
        let key = if folded {
            spelling.to_lowercase()
        } else {
            spelling.to_string()
        };
        if !table.insert(locale, key, names.global(), localized) {
            return Err(NamespaceError::DuplicateLocalizedName {
                what,
                level: level.to_string(),
                name: spelling.to_string(),
                locale: locale.to_string(),
            });
        }
    }
    Ok(())
}

/// An immutable, validated namespace level and everything below it
#[derive(Debug, Clone)]
pub struct Namespace {
    names: LocalizedNames,
    path: Vec<String>,
    objects: IndexMap<String, (LocalizedNames, Symbol)>,
    namespaces: IndexMap<String, Namespace>,
    object_table: SymbolTable,
    namespace_table: SymbolTable,
    case_insensitive: BTreeSet<String>,
}

impl Namespace {
    /// Global name of this level; empty for the root
    pub fn name(&self) -> &str {
        self.names.global()
    }

    pub fn names(&self) -> &LocalizedNames {
        &self.names
    }

    /// Global path from the root to this level
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn is_case_insensitive(&self, locale: &str) -> bool {
        self.case_insensitive.contains(locale)
    }

    /// Registered objects in registration order
    pub fn objects(&self) -> impl Iterator<Item = (&LocalizedNames, &Symbol)> {
        self.objects.values().map(|(names, symbol)| (names, symbol))
    }

    /// Nested namespaces in registration order
    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    /// Find an object at this level by its spelling in `locale`
    ///
    /// Without a locale, or in a locale no entry of the tree has an alias
    /// for, global names are matched exactly.
    pub fn object(&self, name: &str, locale: Option<&str>) -> Option<&Symbol> {
        let global = self.global_name(&self.object_table, name, locale)?;
        self.objects.get(global.as_ref()).map(|(_, symbol)| symbol)
    }

    /// Find a nested namespace by its spelling in `locale`
    pub fn namespace(&self, name: &str, locale: Option<&str>) -> Option<&Namespace> {
        let global = self.global_name(&self.namespace_table, name, locale)?;
        self.namespaces.get(global.as_ref())
    }

    /// Resolve a path of spellings: every segment but the last names a
    /// namespace, the last an object
    pub fn resolve(&self, path: &[&str], locale: Option<&str>) -> Option<&Symbol> {
        let (name, namespaces) = path.split_last()?;
        let mut level = self;
        for segment in namespaces {
            level = level.namespace(segment, locale)?;
        }
        level.object(name, locale)
    }

    fn global_name<'a>(
        &self,
        table: &'a SymbolTable,
        name: &'a str,
        locale: Option<&str>,
    ) -> Option<Cow<'a, str>> {
        let Some(locale) = locale.filter(|locale| table.has_locale(locale)) else {
            return Some(Cow::Borrowed(name));
        };
        let spelling = if self.is_case_insensitive(locale) {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        let found = table.lookup(locale, &spelling)?;
        if !found.localized {
            warn!(
                "No '{locale}' name registered for '{}' in {}; matched its global name",
                found.global,
                level_name(&self.path)
            );
        }
        Some(Cow::Borrowed(found.global))
    }
}
