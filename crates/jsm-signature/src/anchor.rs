//! Human-readable method anchors: `name(Type1, Type2...)`.

use crate::decode::{decode_method_signature, decode_type_signature};
use crate::error::SignatureError;
use crate::model::{ClassForm, ClassSignature, Signature};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorOptions {
    /// Render the final parameter as `T...` instead of `T[]`.
    pub var_args: bool,
    /// Drop package qualification from resolved class names.
    pub compact: bool,
    /// Leading parameters to leave out (synthetic receivers and the like).
    pub skip_parameters: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum NameStyle {
    Qualified,
    Compact,
    /// Last name segment only, for similarity matching.
    Simple,
}

pub fn render_anchor(
    method_signature: &str,
    name: &str,
    is_var_args: bool,
    compact: bool,
) -> Result<String, SignatureError> {
    render_anchor_with(
        method_signature,
        Some(name),
        AnchorOptions {
            var_args: is_var_args,
            compact,
            skip_parameters: 0,
        },
    )
}

pub fn render_anchor_with(
    method_signature: &str,
    name: Option<&str>,
    options: AnchorOptions,
) -> Result<String, SignatureError> {
    let decoded = decode_method_signature(method_signature)?;
    let Some(method) = decoded.as_method() else {
        return Err(SignatureError::argument("not a method signature"));
    };
    if options.var_args && !method.parameters.last().is_some_and(Signature::is_array) {
        return Err(SignatureError::argument(format!(
            "variable arity requires an array-typed final parameter: {method_signature}"
        )));
    }

    let style = if options.compact {
        NameStyle::Compact
    } else {
        NameStyle::Qualified
    };
    let mut out = String::with_capacity(method_signature.len() + 10);
    if let Some(name) = name {
        out.push_str(name);
    }
    out.push('(');
    let last = method.parameters.len().saturating_sub(1);
    for (index, parameter) in method.parameters.iter().enumerate().skip(options.skip_parameters) {
        if index > options.skip_parameters {
            out.push_str(", ");
        }
        render(parameter, style, options.var_args && index == last, &mut out);
    }
    out.push(')');
    Ok(out)
}

/// Erased simple name of a type signature: `Ljava.util.List<TT;>;` → `List`,
/// `[I` → `int[]`.
pub fn simple_type_name(type_signature: &str) -> Result<String, SignatureError> {
    let signature = decode_type_signature(type_signature, true)?;
    let mut out = String::new();
    render(&signature, NameStyle::Simple, false, &mut out);
    Ok(out)
}

fn render(signature: &Signature, style: NameStyle, var_args: bool, out: &mut String) {
    match signature {
        Signature::Primitive(kind) => out.push_str(kind.keyword()),
        Signature::Array { dimension, element } => {
            render(element, style, false, out);
            let brackets = if var_args { dimension - 1 } else { *dimension };
            for _ in 0..brackets {
                out.push_str("[]");
            }
            if var_args {
                out.push_str("...");
            }
        }
        Signature::Class(class) => class_name(class, style, out),
        Signature::TypeVariable(name) => out.push_str(name),
        Signature::Wildcard(None) => out.push('?'),
        Signature::Wildcard(Some((bound, ty))) => {
            out.push_str("? ");
            out.push_str(bound.keyword());
            out.push(' ');
            render(ty, style, false, out);
        }
        Signature::Capture(wildcard) => render(wildcard, style, false, out),
        Signature::Intersection(members) => {
            for (index, member) in members.iter().enumerate() {
                if index > 0 {
                    out.push_str(" & ");
                }
                render(member, style, false, out);
            }
        }
        Signature::Method(method) => {
            out.push('(');
            for (index, parameter) in method.parameters.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                render(parameter, style, false, out);
            }
            out.push(')');
            render(&method.return_type, style, false, out);
        }
    }
}

/// Type arguments are never rendered; `$` inner separators become `.`.
fn class_name(class: &ClassSignature, style: NameStyle, out: &mut String) {
    match style {
        NameStyle::Simple => {
            let last = class.simple_name();
            out.push_str(last.rsplit('$').next().unwrap_or(last));
            return;
        }
        NameStyle::Compact if class.form == ClassForm::Resolved => {
            if let Some(last) = class.qualified_name.last() {
                out.push_str(&last.replace('$', "."));
            }
        }
        _ => {
            for (index, segment) in class.qualified_name.iter().enumerate() {
                if index > 0 {
                    out.push('.');
                }
                out.push_str(&segment.replace('$', "."));
            }
        }
    }
    for member in &class.member_types {
        out.push('.');
        out.push_str(&member.name.replace('$', "."));
    }
}

#[cfg(test)]
#[path = "../tests/anchor_tests.rs"]
mod tests;
