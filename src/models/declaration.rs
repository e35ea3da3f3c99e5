//! Declaration model
//!
//! A declaration is any introspectable program element that can carry
//! metadata: a type, a constructor, a method, or a field. Members carry the
//! name of the type that owns them; types stand alone.

use serde::{Deserialize, Serialize};

/// An introspectable program element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// What kind of element this is
    pub kind: DeclKind,

    /// Element name (type name, or member name within its owner)
    pub name: String,

    /// Owning type name for members; `None` for types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Kind of program element a declaration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// A type declaration
    Type,
    /// A constructor of a type
    Constructor,
    /// A method of a type
    Method,
    /// A field of a type
    Field,
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type => write!(f, "type"),
            Self::Constructor => write!(f, "constructor"),
            Self::Method => write!(f, "method"),
            Self::Field => write!(f, "field"),
        }
    }
}

impl std::str::FromStr for DeclKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "type" | "class" | "struct" => Ok(Self::Type),
            "constructor" | "ctor" => Ok(Self::Constructor),
            "method" | "fn" => Ok(Self::Method),
            "field" => Ok(Self::Field),
            _ => Err(format!("Invalid declaration kind: {s}. Use: type, constructor, method, field")),
        }
    }
}

impl Declaration {
    /// Create a type declaration
    #[must_use]
    pub fn ty(name: impl Into<String>) -> Self {
        Self {
            kind: DeclKind::Type,
            name: name.into(),
            owner: None,
        }
    }

    /// Create a constructor declaration owned by `owner`
    #[must_use]
    pub fn constructor(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::member(DeclKind::Constructor, owner, name)
    }

    /// Create a method declaration owned by `owner`
    #[must_use]
    pub fn method(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::member(DeclKind::Method, owner, name)
    }

    /// Create a field declaration owned by `owner`
    #[must_use]
    pub fn field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::member(DeclKind::Field, owner, name)
    }

    /// Create a member declaration of the given kind
    #[must_use]
    pub fn member(kind: DeclKind, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            owner: Some(owner.into()),
        }
    }

    /// Qualified name: `Owner::name` for members, `name` for types
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.owner.as_ref().map_or_else(
            || self.name.clone(),
            |owner| format!("{}::{}", owner, self.name),
        )
    }

    /// Whether this declaration is a member of the named type
    #[must_use]
    pub fn is_member_of(&self, type_name: &str) -> bool {
        self.owner.as_deref() == Some(type_name)
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.qualified_name())
    }
}
