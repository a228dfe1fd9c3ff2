//! Member descriptor model
//!
//! A `MemberDescriptor` wraps a declaring type signature together with the
//! member-specific data needed to produce a doc comment identifier: the kind,
//! the simple name, the ordered parameter signatures, the generic arity for
//! generic methods and the return type for conversion operators.

use serde::{Deserialize, Serialize};

use super::signature::TypeSignature;

/// Simple name used for instance constructors
pub const CONSTRUCTOR_NAME: &str = "#ctor";
/// Simple name used for static initializers
pub const STATIC_CONSTRUCTOR_NAME: &str = "#cctor";
/// Rendered name of an indexer, regardless of the declared property name
pub const INDEXER_NAME: &str = "Item";

/// The kind of member a descriptor refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Type,
    Field,
    Property,
    Event,
    Constructor,
    Method,
    /// An explicit or implicit conversion operator (`op_Explicit` / `op_Implicit`)
    OperatorConversion,
    /// Any other operator (arithmetic, comparison, ...)
    OperatorOther,
}

/// Structural description of a type or member, the sole input of the
/// identifier codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub kind: MemberKind,
    /// Must be a named type, generic definition or generic instantiation
    pub declaring_type: TypeSignature,
    /// Member simple name; `#ctor`/`#cctor` for constructors, `op_<Name>`
    /// for operators, empty for type descriptors
    pub name: String,
    /// Ordered parameter signatures, possibly empty
    pub parameters: Vec<TypeSignature>,
    /// Number of generic parameters declared on the method itself, 0 for
    /// non-generic members
    pub generic_method_arity: usize,
    /// Present only for conversion operators
    pub conversion_return_type: Option<TypeSignature>,
}

impl MemberDescriptor {
    /// Describe a type itself (the `T:` identifier target)
    pub fn for_type(declaring_type: TypeSignature) -> Self {
        Self {
            kind: MemberKind::Type,
            declaring_type,
            name: String::new(),
            parameters: Vec::new(),
            generic_method_arity: 0,
            conversion_return_type: None,
        }
    }

    /// Describe a field
    pub fn field(declaring_type: TypeSignature, name: impl Into<String>) -> Self {
        Self::simple(MemberKind::Field, declaring_type, name)
    }

    /// Describe an event
    pub fn event(declaring_type: TypeSignature, name: impl Into<String>) -> Self {
        Self::simple(MemberKind::Event, declaring_type, name)
    }

    /// Describe a non-indexer property
    pub fn property(declaring_type: TypeSignature, name: impl Into<String>) -> Self {
        Self::simple(MemberKind::Property, declaring_type, name)
    }

    /// Describe an indexer
    ///
    /// The declared property name is accepted but the identifier always
    /// renders indexers as `Item`.
    pub fn indexer(
        declaring_type: TypeSignature,
        name: impl Into<String>,
        parameters: Vec<TypeSignature>,
    ) -> Self {
        Self {
            kind: MemberKind::Property,
            declaring_type,
            name: name.into(),
            parameters,
            generic_method_arity: 0,
            conversion_return_type: None,
        }
    }

    /// Describe an instance constructor
    pub fn constructor(declaring_type: TypeSignature, parameters: Vec<TypeSignature>) -> Self {
        Self {
            kind: MemberKind::Constructor,
            declaring_type,
            name: CONSTRUCTOR_NAME.to_string(),
            parameters,
            generic_method_arity: 0,
            conversion_return_type: None,
        }
    }

    /// Describe a static initializer
    pub fn static_constructor(declaring_type: TypeSignature) -> Self {
        Self {
            kind: MemberKind::Constructor,
            declaring_type,
            name: STATIC_CONSTRUCTOR_NAME.to_string(),
            parameters: Vec::new(),
            generic_method_arity: 0,
            conversion_return_type: None,
        }
    }

    /// Describe a non-generic method
    pub fn method(
        declaring_type: TypeSignature,
        name: impl Into<String>,
        parameters: Vec<TypeSignature>,
    ) -> Self {
        Self::generic_method(declaring_type, name, 0, parameters)
    }

    /// Describe a method with generic parameters of its own
    pub fn generic_method(
        declaring_type: TypeSignature,
        name: impl Into<String>,
        generic_method_arity: usize,
        parameters: Vec<TypeSignature>,
    ) -> Self {
        Self {
            kind: MemberKind::Method,
            declaring_type,
            name: name.into(),
            parameters,
            generic_method_arity,
            conversion_return_type: None,
        }
    }

    /// Describe an arithmetic or comparison operator (e.g. "op_Subtraction")
    pub fn operator(
        declaring_type: TypeSignature,
        name: impl Into<String>,
        parameters: Vec<TypeSignature>,
    ) -> Self {
        Self {
            kind: MemberKind::OperatorOther,
            declaring_type,
            name: name.into(),
            parameters,
            generic_method_arity: 0,
            conversion_return_type: None,
        }
    }

    /// Describe a conversion operator ("op_Explicit" or "op_Implicit")
    pub fn conversion_operator(
        declaring_type: TypeSignature,
        name: impl Into<String>,
        parameter: TypeSignature,
        return_type: TypeSignature,
    ) -> Self {
        Self {
            kind: MemberKind::OperatorConversion,
            declaring_type,
            name: name.into(),
            parameters: vec![parameter],
            generic_method_arity: 0,
            conversion_return_type: Some(return_type),
        }
    }

    fn simple(kind: MemberKind, declaring_type: TypeSignature, name: impl Into<String>) -> Self {
        Self {
            kind,
            declaring_type,
            name: name.into(),
            parameters: Vec::new(),
            generic_method_arity: 0,
            conversion_return_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers_set_reserved_names() {
        let declaring = TypeSignature::named("System.Exception");
        let ctor = MemberDescriptor::constructor(declaring.clone(), Vec::new());
        assert_eq!(ctor.name, "#ctor");
        assert_eq!(ctor.kind, MemberKind::Constructor);

        let cctor = MemberDescriptor::static_constructor(declaring);
        assert_eq!(cctor.name, "#cctor");
        assert!(cctor.parameters.is_empty());
    }

    #[test]
    fn test_conversion_operator_carries_return_type() {
        let declaring = TypeSignature::generic_definition("Demo.Wrapper", 1);
        let descriptor = MemberDescriptor::conversion_operator(
            declaring,
            "op_Explicit",
            TypeSignature::type_param(0),
            TypeSignature::named("System.Int32"),
        );
        assert_eq!(descriptor.parameters.len(), 1);
        assert_eq!(
            descriptor.conversion_return_type,
            Some(TypeSignature::named("System.Int32"))
        );
    }
}
