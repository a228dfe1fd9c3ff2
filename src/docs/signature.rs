//! Language-agnostic model of a type signature
//!
//! A `TypeSignature` describes a type the way a doc comment identifier needs
//! to see it: named types, generic definitions and instantiations, generic
//! parameter positions, arrays, pointers and by-reference wrappers. Callers
//! build these from their own reflection or metadata layer; nothing in this
//! module performs I/O.

use serde::{Deserialize, Serialize};

/// Scope in which a generic parameter is declared
///
/// Type-level parameters render with a single backtick (`` `0 ``), method-level
/// parameters with a double backtick (```` ``0 ````). The two never collide
/// even when both appear in the same parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericScope {
    /// Declared on the containing type
    Type,
    /// Declared on the method itself
    Method,
}

/// Structural description of a type as it appears in a member signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSignature {
    /// Fully qualified non-generic type name, nested types dot-separated
    /// (e.g. "System.Net.WebRequestMethods.File")
    Named {
        full_name: String,
    },
    /// A generic type definition, identified by its full name and the number
    /// of generic parameters (e.g. "System.Collections.Generic.List" with arity 1)
    GenericDefinition {
        full_name: String,
        arity: usize,
    },
    /// An instantiation of a generic definition
    ///
    /// An empty argument list denotes an unbound reference to the definition.
    /// A non-empty list must supply exactly `arity` arguments.
    GenericInstantiation {
        definition: Box<TypeSignature>,
        arguments: Vec<TypeSignature>,
    },
    /// A generic parameter position, resolved by scope and declaration index
    TypeParameter {
        scope: GenericScope,
        index: usize,
    },
    /// An array with one dimension count per bracket group, outermost group
    /// first, so a jagged array of two-dimensional arrays is `ranks: [1, 2]`
    Array {
        element: Box<TypeSignature>,
        ranks: Vec<usize>,
    },
    /// An unmanaged pointer; nesting is unrestricted
    Pointer {
        element: Box<TypeSignature>,
    },
    /// A by-reference parameter wrapper, only valid at the outermost
    /// position of a parameter signature
    ByRef {
        element: Box<TypeSignature>,
    },
}

impl TypeSignature {
    /// Create a named (non-generic) type signature
    pub fn named(full_name: impl Into<String>) -> Self {
        TypeSignature::Named {
            full_name: full_name.into(),
        }
    }

    /// Create a generic type definition signature
    pub fn generic_definition(full_name: impl Into<String>, arity: usize) -> Self {
        TypeSignature::GenericDefinition {
            full_name: full_name.into(),
            arity,
        }
    }

    /// Instantiate a generic definition with the given type arguments
    pub fn instantiation(definition: TypeSignature, arguments: Vec<TypeSignature>) -> Self {
        TypeSignature::GenericInstantiation {
            definition: Box::new(definition),
            arguments,
        }
    }

    /// A generic parameter declared on the containing type
    pub fn type_param(index: usize) -> Self {
        TypeSignature::TypeParameter {
            scope: GenericScope::Type,
            index,
        }
    }

    /// A generic parameter declared on the method
    pub fn method_param(index: usize) -> Self {
        TypeSignature::TypeParameter {
            scope: GenericScope::Method,
            index,
        }
    }

    /// Wrap an element type in array bracket groups, outermost first
    pub fn array(element: TypeSignature, ranks: Vec<usize>) -> Self {
        TypeSignature::Array {
            element: Box::new(element),
            ranks,
        }
    }

    /// A single-dimension array of the element type
    pub fn vector(element: TypeSignature) -> Self {
        Self::array(element, vec![1])
    }

    /// Wrap an element type in a pointer
    pub fn pointer(element: TypeSignature) -> Self {
        TypeSignature::Pointer {
            element: Box::new(element),
        }
    }

    /// Mark a parameter as passed by reference
    pub fn by_ref(element: TypeSignature) -> Self {
        TypeSignature::ByRef {
            element: Box::new(element),
        }
    }

    /// Whether this signature can serve as the declaring type of a member
    pub fn is_nominal(&self) -> bool {
        matches!(
            self,
            TypeSignature::Named { .. }
                | TypeSignature::GenericDefinition { .. }
                | TypeSignature::GenericInstantiation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_build_expected_variants() {
        assert_eq!(
            TypeSignature::named("System.Int32"),
            TypeSignature::Named {
                full_name: "System.Int32".to_string()
            }
        );

        assert_eq!(
            TypeSignature::vector(TypeSignature::type_param(0)),
            TypeSignature::Array {
                element: Box::new(TypeSignature::TypeParameter {
                    scope: GenericScope::Type,
                    index: 0
                }),
                ranks: vec![1],
            }
        );
    }

    #[test]
    fn test_is_nominal() {
        assert!(TypeSignature::named("System.String").is_nominal());
        assert!(TypeSignature::generic_definition("System.Action", 1).is_nominal());
        assert!(!TypeSignature::type_param(0).is_nominal());
        assert!(!TypeSignature::vector(TypeSignature::named("System.Int32")).is_nominal());
        assert!(!TypeSignature::pointer(TypeSignature::named("System.Int16")).is_nominal());
    }
}
