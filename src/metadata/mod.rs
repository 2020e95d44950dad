//! Reflected class metadata.
//!
//! The [`Catalog`] holds every class the console knows about, built once at
//! start-up from static descriptors (see [`builtin`]) plus configured
//! commands. Lookups go through the [`Reflector`] trait and hand back a
//! [`MetadataProvider`], so rendering never depends on where the metadata
//! came from.

pub mod builtin;
pub mod docblock;

use std::collections::{HashMap, HashSet};

pub use docblock::{DocBlock, DocTag, ParamTag};

use crate::naming;

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub optional: bool,
    /// Default literal as written in the declaration, if any.
    pub default: Option<String>,
}

impl ParamInfo {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
            default: Some(default.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
    pub params: Vec<ParamInfo>,
    pub doc: DocBlock,
}

impl MethodInfo {
    /// Public and not underscore-prefixed.
    pub fn is_listed(&self) -> bool {
        self.visibility == Visibility::Public && !self.name.starts_with('_')
    }

    /// Text of the `@param` tag for `param`, if documented.
    pub fn param_description(&self, param: &str) -> Option<String> {
        self.doc.param(param).map(|p| p.text)
    }
}

#[derive(Debug, Clone)]
pub struct PropertyInfo {
    pub name: String,
    pub visibility: Visibility,
    pub default: Option<String>,
    pub doc: DocBlock,
}

impl PropertyInfo {
    pub fn is_listed(&self) -> bool {
        self.visibility == Visibility::Public && !self.name.starts_with('_')
    }

    /// Type from the `@var` tag; undocumented properties are strings.
    pub fn declared_type(&self) -> &str {
        self.doc
            .tag("var")
            .and_then(DocTag::first_word)
            .unwrap_or("string")
    }
}

/// Everything reflected about one class.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    /// Fully-qualified, backslash separated.
    pub name: String,
    pub parent: Option<String>,
    pub doc: DocBlock,
    pub methods: Vec<MethodInfo>,
    pub properties: Vec<PropertyInfo>,
}

impl ClassInfo {
    pub fn short_name(&self) -> &str {
        naming::short_name(&self.name)
    }
}

/// A method or property of a reflected class.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Method(&'a MethodInfo),
    Property(&'a PropertyInfo),
}

/// Capability interface over reflected documentation.
///
/// `members()` yields the class's own methods followed by its properties,
/// inherited properties included (subclass declarations first).
pub trait MetadataProvider {
    fn name(&self) -> &str;
    fn summary(&self) -> &str;
    fn description(&self) -> &str;
    fn members(&self) -> Vec<Member<'_>>;

    fn short_name(&self) -> &str {
        naming::short_name(self.name())
    }

    /// Listed (public, non-underscore) methods in declaration order.
    fn methods(&self) -> Vec<&MethodInfo> {
        self.members()
            .into_iter()
            .filter_map(|m| match m {
                Member::Method(method) if method.is_listed() => Some(method),
                _ => None,
            })
            .collect()
    }

    /// Listed properties in declaration order.
    fn properties(&self) -> Vec<&PropertyInfo> {
        self.members()
            .into_iter()
            .filter_map(|m| match m {
                Member::Property(property) if property.is_listed() => Some(property),
                _ => None,
            })
            .collect()
    }

    fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods().into_iter().find(|m| m.name == name)
    }
}

/// Resolves class names to metadata.
pub trait Reflector {
    fn reflect(&self, class: &str) -> Option<Box<dyn MetadataProvider + '_>>;
}

/// A class together with its resolved ancestor chain.
#[derive(Debug, Clone)]
pub struct ReflectedClass<'a> {
    class: &'a ClassInfo,
    ancestors: Vec<&'a ClassInfo>,
}

impl<'a> ReflectedClass<'a> {
    pub fn class(&self) -> &'a ClassInfo {
        self.class
    }
}

impl MetadataProvider for ReflectedClass<'_> {
    fn name(&self) -> &str {
        &self.class.name
    }

    fn summary(&self) -> &str {
        &self.class.doc.summary
    }

    fn description(&self) -> &str {
        &self.class.doc.description
    }

    fn members(&self) -> Vec<Member<'_>> {
        let mut members: Vec<Member<'_>> =
            self.class.methods.iter().map(Member::Method).collect();

        // Redeclared properties shadow the ancestor's.
        let mut seen = HashSet::new();
        for class in std::iter::once(self.class).chain(self.ancestors.iter().copied()) {
            for property in &class.properties {
                if seen.insert(property.name.as_str()) {
                    members.push(Member::Property(property));
                }
            }
        }
        members
    }
}

/// In-memory class table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: HashMap<String, ClassInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the framework classes shipped with the console.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for descriptor in builtin::CLASSES {
            catalog.insert(descriptor.to_class_info());
        }
        catalog
    }

    /// Add or replace a class.
    pub fn insert(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Resolve a class and walk its parents. Unknown parents end the chain.
    pub fn reflect_class(&self, name: &str) -> Option<ReflectedClass<'_>> {
        let class = self.classes.get(name)?;
        let mut ancestors = Vec::new();
        let mut visited = HashSet::from([class.name.as_str()]);
        let mut next = class.parent.as_deref();

        while let Some(parent_name) = next {
            if !visited.insert(parent_name) {
                tracing::warn!(class = name, parent = parent_name, "inheritance cycle");
                break;
            }
            let Some(parent) = self.classes.get(parent_name) else {
                tracing::debug!(class = name, parent = parent_name, "parent class not reflected");
                break;
            };
            ancestors.push(parent);
            next = parent.parent.as_deref();
        }

        Some(ReflectedClass { class, ancestors })
    }
}

impl Reflector for Catalog {
    fn reflect(&self, class: &str) -> Option<Box<dyn MetadataProvider + '_>> {
        self.reflect_class(class)
            .map(|r| Box::new(r) as Box<dyn MetadataProvider + '_>)
    }
}
