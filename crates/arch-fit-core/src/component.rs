//! Components and the types they declare.

use serde::{Deserialize, Serialize};

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A class (possibly abstract).
    #[default]
    Class,
    /// An interface.
    Interface,
}

/// A type declared inside a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Simple type name (e.g., `OrderRepository`).
    pub name: String,
    /// Namespace the type lives in, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Class or interface.
    #[serde(default)]
    pub kind: TypeKind,
    /// Whether the type is abstract.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Base type and implemented interface names.
    #[serde(default)]
    pub bases: Vec<String>,
}

impl TypeDecl {
    /// Creates a concrete class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind: TypeKind::Class,
            is_abstract: false,
            bases: Vec::new(),
        }
    }

    /// Creates an interface.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Interface,
            ..Self::class(name)
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Marks the type abstract.
    #[must_use]
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Adds a base type or implemented interface.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Returns `namespace.name`, or just the name when no namespace is known.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// True for non-abstract classes.
    #[must_use]
    pub fn is_concrete_class(&self) -> bool {
        self.kind == TypeKind::Class && !self.is_abstract
    }

    /// True for interfaces.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Whether any declared base matches `name` by simple name.
    #[must_use]
    pub fn has_base(&self, name: &str) -> bool {
        let wanted = simple_name(name);
        self.bases.iter().any(|b| simple_name(b) == wanted)
    }
}

/// A discoverable, independently loadable unit of code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Globally unique identifier (e.g., `Root.Modules.Billing.Domain`).
    pub id: String,
    /// Test or tooling component, excluded from every check.
    #[serde(default)]
    pub is_tooling: bool,
    /// Identifiers this component statically references, in declaration order.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Types declared by this component.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Component {
    /// Creates a component with no dependencies or types.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_tooling: false,
            dependencies: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Adds a dependency edge.
    #[must_use]
    pub fn depends_on(mut self, target: impl Into<String>) -> Self {
        self.dependencies.push(target.into());
        self
    }

    /// Adds a declared type.
    #[must_use]
    pub fn declares(mut self, ty: TypeDecl) -> Self {
        self.types.push(ty);
        self
    }

    /// Marks the component as test/tooling.
    #[must_use]
    pub fn tooling(mut self, is_tooling: bool) -> Self {
        self.is_tooling = is_tooling;
        self
    }
}

/// Strips namespace and generic decoration from a type name.
///
/// `Microsoft.EntityFrameworkCore.DbContext` -> `DbContext`,
/// ``IReadRepository`1`` and `IReadRepository<T>` -> `IReadRepository`.
#[must_use]
pub fn simple_name(name: &str) -> &str {
    let head = name.split(['<', '`']).next().unwrap_or(name);
    head.rsplit('.').next().unwrap_or(head)
}
