//! Declaration-metadata registry
//!
//! The registry is an explicit, insertion-ordered mapping from declarations to
//! the annotations attached to them. It is populated once through the builder
//! (or loaded from a registry file) and treated as read-only afterwards, so
//! repeated reports over the same registry always see the same state.

use crate::models::{Annotation, DeclKind, Declaration};

/// Errors raised while building or querying a registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A marker was attached with an empty description
    #[error("marker on {declaration} has an empty description")]
    EmptyDescription {
        /// The declaration carrying the offending marker
        declaration: String,
    },

    /// The same declaration was registered twice
    #[error("duplicate declaration: {declaration}")]
    DuplicateDeclaration {
        /// The repeated declaration
        declaration: String,
    },

    /// An annotation was attached before any declaration was registered
    #[error("annotation attached before any declaration")]
    DanglingAnnotation,

    /// A constructor, method, or field was registered without an owner type
    #[error("{declaration} has no owner type")]
    MemberWithoutOwner {
        /// The ownerless member declaration
        declaration: String,
    },

    /// A member names an owner type that is not in the registry
    #[error("{declaration} belongs to unknown type '{owner}'")]
    UnknownOwner {
        /// The member declaration
        declaration: String,
        /// The owner type name it references
        owner: String,
    },

    /// A report was requested for a type the registry does not contain
    #[error("unknown type: '{name}'")]
    UnknownType {
        /// The requested type name
        name: String,
    },
}

/// A declaration together with its attached annotations
#[derive(Debug, Clone)]
struct Entry {
    decl: Declaration,
    annotations: Vec<Annotation>,
}

/// Read-only registry of declarations and their attached annotations
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Start building a registry
    #[must_use]
    pub const fn builder() -> RegistryBuilder {
        RegistryBuilder {
            entries: Vec::new(),
            dangling: false,
        }
    }

    /// All declarations, in registration order
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter().map(|e| &e.decl)
    }

    /// Number of registered declarations
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of attached annotations across all declarations
    #[must_use]
    pub fn annotation_count(&self) -> usize {
        self.entries.iter().map(|e| e.annotations.len()).sum()
    }

    /// Annotations attached to a declaration, in attachment order
    ///
    /// Unknown declarations yield an empty slice: absence of metadata is a
    /// normal state, not an error.
    #[must_use]
    pub fn annotations_of(&self, decl: &Declaration) -> &[Annotation] {
        self.entries
            .iter()
            .find(|e| e.decl == *decl)
            .map_or(&[], |e| e.annotations.as_slice())
    }

    /// All type declarations, in registration order
    pub fn types(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations().filter(|d| d.kind == DeclKind::Type)
    }

    /// The type declaration with the given name, if registered
    #[must_use]
    pub fn type_decl(&self, name: &str) -> Option<&Declaration> {
        self.types().find(|d| d.name == name)
    }

    /// Members of a type with the given kind, sorted by name
    ///
    /// Sorting gives deterministic enumeration regardless of registration
    /// order.
    #[must_use]
    pub fn members_of(&self, type_name: &str, kind: DeclKind) -> Vec<&Declaration> {
        let mut members: Vec<&Declaration> = self
            .declarations()
            .filter(|d| d.kind == kind && d.is_member_of(type_name))
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }
}

/// Builder for a [`Registry`]
///
/// Declarations are registered with [`declare`](Self::declare); annotations
/// attach to the most recently declared element, in attachment order.
/// Invariants are checked once at [`build`](Self::build).
#[derive(Debug)]
pub struct RegistryBuilder {
    entries: Vec<Entry>,
    dangling: bool,
}

impl RegistryBuilder {
    /// Register a declaration
    #[must_use]
    pub fn declare(mut self, decl: Declaration) -> Self {
        self.entries.push(Entry {
            decl,
            annotations: Vec::new(),
        });
        self
    }

    /// Attach an annotation to the most recently registered declaration
    #[must_use]
    pub fn attach(mut self, annotation: Annotation) -> Self {
        match self.entries.last_mut() {
            Some(entry) => entry.annotations.push(annotation),
            None => self.dangling = true,
        }
        self
    }

    /// Validate invariants and produce the read-only registry
    pub fn build(self) -> Result<Registry, RegistryError> {
        if self.dangling {
            return Err(RegistryError::DanglingAnnotation);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.decl == entry.decl) {
                return Err(RegistryError::DuplicateDeclaration {
                    declaration: entry.decl.to_string(),
                });
            }

            if entry.decl.kind != DeclKind::Type && entry.decl.owner.is_none() {
                return Err(RegistryError::MemberWithoutOwner {
                    declaration: entry.decl.to_string(),
                });
            }

            if let Some(owner) = &entry.decl.owner {
                let owner_known = self
                    .entries
                    .iter()
                    .any(|e| e.decl.kind == DeclKind::Type && e.decl.name == *owner);
                if !owner_known {
                    return Err(RegistryError::UnknownOwner {
                        declaration: entry.decl.to_string(),
                        owner: owner.clone(),
                    });
                }
            }

            for annotation in &entry.annotations {
                if let Some(marker) = annotation.as_marker()
                    && marker.description.trim().is_empty()
                {
                    return Err(RegistryError::EmptyDescription {
                        declaration: entry.decl.to_string(),
                    });
                }
            }
        }

        log::debug!(
            "built registry: {} declaration(s), {} annotation(s)",
            self.entries.len(),
            self.entries.iter().map(|e| e.annotations.len()).sum::<usize>()
        );

        Ok(Registry {
            entries: self.entries,
        })
    }
}
