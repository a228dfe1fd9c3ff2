//! Doc comment identifier codec
//!
//! Converts a `MemberDescriptor` into the canonical identifier string that
//! compilers use to key doc comments in the generated XML file, e.g.
//! `M:System.String.Insert(System.Int32,System.String)`. The conversion is a
//! pure function: no I/O, no shared state, safe to call concurrently.
//!
//! A structurally inconsistent descriptor (a by-ref wrapper nested inside
//! another signature, a generic argument count mismatch, an operator without
//! parameters) fails fast with `DocsError::InvalidDescriptor` instead of
//! producing an approximate identifier.

use super::error::{DocsError, DocsResult};
use super::member::{
    CONSTRUCTOR_NAME, INDEXER_NAME, MemberDescriptor, MemberKind, STATIC_CONSTRUCTOR_NAME,
};
use super::signature::{GenericScope, TypeSignature};

/// Produce the canonical doc comment identifier for a member
///
/// The prefix encodes the member kind (`T:`, `F:`, `P:`, `E:`, `M:`), the
/// body is the rendered declaring type followed by the member name and the
/// parameter list. Parentheses are omitted for methods and constructors with
/// no parameters; indexers and operators always render them.
pub fn member_identifier(member: &MemberDescriptor) -> DocsResult<String> {
    let mut id = String::with_capacity(64);
    id.push(kind_prefix(member.kind));
    id.push(':');
    render_declaring_type(&member.declaring_type, &mut id)?;

    match member.kind {
        MemberKind::Type => {}
        MemberKind::Field | MemberKind::Event => {
            push_member_name(member, &mut id)?;
        }
        MemberKind::Property => {
            if member.parameters.is_empty() {
                push_member_name(member, &mut id)?;
            } else {
                // An indexer renders as `Item` no matter how the property
                // was declared, and always keeps its parentheses.
                id.push('.');
                id.push_str(INDEXER_NAME);
                render_parameter_list(&member.parameters, &mut id)?;
            }
        }
        MemberKind::Constructor => {
            if member.name != CONSTRUCTOR_NAME && member.name != STATIC_CONSTRUCTOR_NAME {
                return Err(DocsError::invalid(format!(
                    "constructor name must be '{CONSTRUCTOR_NAME}' or '{STATIC_CONSTRUCTOR_NAME}', got '{}'",
                    member.name
                )));
            }
            if member.name == STATIC_CONSTRUCTOR_NAME && !member.parameters.is_empty() {
                return Err(DocsError::invalid("a static initializer takes no parameters"));
            }
            id.push('.');
            id.push_str(&member.name);
            if !member.parameters.is_empty() {
                render_parameter_list(&member.parameters, &mut id)?;
            }
        }
        MemberKind::Method => {
            push_member_name(member, &mut id)?;
            if member.generic_method_arity > 0 {
                id.push_str("``");
                id.push_str(&member.generic_method_arity.to_string());
            }
            if !member.parameters.is_empty() {
                render_parameter_list(&member.parameters, &mut id)?;
            }
        }
        MemberKind::OperatorOther => {
            push_member_name(member, &mut id)?;
            if member.parameters.is_empty() {
                return Err(DocsError::invalid("an operator takes at least one parameter"));
            }
            render_parameter_list(&member.parameters, &mut id)?;
        }
        MemberKind::OperatorConversion => {
            push_member_name(member, &mut id)?;
            if member.parameters.len() != 1 {
                return Err(DocsError::invalid(
                    "a conversion operator takes exactly one parameter",
                ));
            }
            let Some(return_type) = &member.conversion_return_type else {
                return Err(DocsError::invalid(
                    "a conversion operator requires a return type",
                ));
            };
            render_parameter_list(&member.parameters, &mut id)?;
            id.push('~');
            render_type(return_type, &mut id)?;
        }
    }

    Ok(id)
}

fn kind_prefix(kind: MemberKind) -> char {
    match kind {
        MemberKind::Type => 'T',
        MemberKind::Field => 'F',
        MemberKind::Property => 'P',
        MemberKind::Event => 'E',
        MemberKind::Constructor
        | MemberKind::Method
        | MemberKind::OperatorConversion
        | MemberKind::OperatorOther => 'M',
    }
}

fn push_member_name(member: &MemberDescriptor, out: &mut String) -> DocsResult<()> {
    if member.name.is_empty() {
        return Err(DocsError::invalid("member name must not be empty"));
    }
    out.push('.');
    out.push_str(&member.name);
    Ok(())
}

/// Render a declaring type as an identifier target
///
/// Identifier targets always use the unbound backtick-arity form, so a
/// closed generic instantiation used as the declaring type renders exactly
/// like its definition.
fn render_declaring_type(declaring: &TypeSignature, out: &mut String) -> DocsResult<()> {
    match declaring {
        TypeSignature::Named { .. } | TypeSignature::GenericDefinition { .. } => {
            render_type(declaring, out)
        }
        TypeSignature::GenericInstantiation {
            definition,
            arguments,
        } => {
            let TypeSignature::GenericDefinition { full_name, arity } = definition.as_ref() else {
                return Err(DocsError::invalid(
                    "generic instantiation must wrap a generic definition",
                ));
            };
            if !arguments.is_empty() && arguments.len() != *arity {
                return Err(DocsError::invalid(format!(
                    "generic instantiation of {full_name} supplies {} argument(s) but the definition declares {arity}",
                    arguments.len()
                )));
            }
            render_type(definition, out)
        }
        _ => Err(DocsError::invalid(
            "declaring type must be a named type, generic definition or generic instantiation",
        )),
    }
}

/// Render a type signature in a parameter, argument or return position
fn render_type(signature: &TypeSignature, out: &mut String) -> DocsResult<()> {
    match signature {
        TypeSignature::Named { full_name } => {
            if full_name.is_empty() {
                return Err(DocsError::invalid("named type has an empty name"));
            }
            out.push_str(full_name);
            Ok(())
        }
        TypeSignature::GenericDefinition { full_name, arity } => {
            if full_name.is_empty() {
                return Err(DocsError::invalid("generic definition has an empty name"));
            }
            if *arity == 0 {
                return Err(DocsError::invalid(
                    "generic definition must declare at least one parameter",
                ));
            }
            out.push_str(full_name);
            out.push('`');
            out.push_str(&arity.to_string());
            Ok(())
        }
        TypeSignature::GenericInstantiation {
            definition,
            arguments,
        } => {
            let TypeSignature::GenericDefinition { full_name, arity } = definition.as_ref() else {
                return Err(DocsError::invalid(
                    "generic instantiation must wrap a generic definition",
                ));
            };
            if arguments.is_empty() {
                // Unbound reference: keep the definition's backtick form.
                return render_type(definition, out);
            }
            if arguments.len() != *arity {
                return Err(DocsError::invalid(format!(
                    "generic instantiation of {full_name} supplies {} argument(s) but the definition declares {arity}",
                    arguments.len()
                )));
            }
            if full_name.is_empty() {
                return Err(DocsError::invalid("generic definition has an empty name"));
            }
            // Closed instantiations expand their arguments in braces and
            // drop the arity suffix: System.Action{`0}, not System.Action`1{`0}.
            out.push_str(full_name);
            out.push('{');
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_type(argument, out)?;
            }
            out.push('}');
            Ok(())
        }
        TypeSignature::TypeParameter { scope, index } => {
            match scope {
                GenericScope::Type => out.push('`'),
                GenericScope::Method => out.push_str("``"),
            }
            out.push_str(&index.to_string());
            Ok(())
        }
        TypeSignature::Array { element, ranks } => {
            if ranks.is_empty() {
                return Err(DocsError::invalid("array signature carries no bracket groups"));
            }
            render_type(element, out)?;
            for &rank in ranks {
                if rank == 0 {
                    return Err(DocsError::invalid("array bracket group has zero dimensions"));
                }
                if rank == 1 {
                    out.push_str("[]");
                } else {
                    out.push_str("[0:");
                    for _ in 1..rank {
                        out.push_str(",0:");
                    }
                    out.push(']');
                }
            }
            Ok(())
        }
        TypeSignature::Pointer { element } => {
            render_type(element, out)?;
            out.push('*');
            Ok(())
        }
        TypeSignature::ByRef { .. } => Err(DocsError::invalid(
            "by-ref wrapper is only valid at the outermost position of a parameter",
        )),
    }
}

/// Render a single parameter, allowing the outermost by-ref wrapper
fn render_parameter(parameter: &TypeSignature, out: &mut String) -> DocsResult<()> {
    if let TypeSignature::ByRef { element } = parameter {
        render_type(element, out)?;
        out.push('@');
        Ok(())
    } else {
        render_type(parameter, out)
    }
}

fn render_parameter_list(parameters: &[TypeSignature], out: &mut String) -> DocsResult<()> {
    out.push('(');
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        render_parameter(parameter, out)?;
    }
    out.push(')');
    Ok(())
}

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;
