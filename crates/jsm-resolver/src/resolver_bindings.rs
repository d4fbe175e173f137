//! Compiler binding → handle.

use jsm_signature::{
    TypeReference, check_type_signature, convert_type_signature, simple_type_name, to_unresolved_type_signature,
};
use tracing::trace;

use crate::binding::{
    Binding, BindingId, BindingTable, ClassBinding, FieldBinding, LocalType, MethodBinding, MethodDeclarationNode,
    TypeBinding,
};
use crate::error::{ResolveError, Unresolvable};
use crate::handle::{ElementHandle, ElementType, binary_type_name};
use crate::model::JavaModel;
use crate::resolver::HandleResolver;
use crate::resolver_scopes::generated_signature;

impl<'m, M: JavaModel + ?Sized> HandleResolver<'m, M> {
    /// Resolves a type, method or field binding to the handle of the element
    /// it was created from.
    pub fn resolve_binding<B: BindingTable + ?Sized>(
        &mut self,
        bindings: &B,
        id: BindingId,
    ) -> Result<ElementHandle, ResolveError> {
        match lookup(bindings, id)? {
            Binding::Type(ty) => self.type_binding(bindings, id, ty),
            Binding::Method(method) => self.method_binding(bindings, method),
            Binding::Field(field) => self.field_binding(bindings, field),
        }
    }

    fn type_binding<B: BindingTable + ?Sized>(
        &mut self,
        bindings: &B,
        id: BindingId,
        ty: &TypeBinding,
    ) -> Result<ElementHandle, ResolveError> {
        match ty {
            TypeBinding::Base | TypeBinding::Wildcard | TypeBinding::Intersection | TypeBinding::Capture => {
                Err(Unresolvable::NoElement(id).into())
            }
            TypeBinding::Array { leaf } => self.resolve_binding(bindings, *leaf),
            TypeBinding::Parameterized { erasure } => self.resolve_binding(bindings, *erasure),
            TypeBinding::TypeVariable {
                name,
                declaring_element,
            } => {
                let declaring = self.resolve_binding(bindings, *declaring_element)?;
                Ok(self.model.type_parameter(&declaring, name))
            }
            TypeBinding::Class(class) => self.class_binding(bindings, id, class),
        }
    }

    fn class_binding<B: BindingTable + ?Sized>(
        &mut self,
        bindings: &B,
        id: BindingId,
        class: &ClassBinding,
    ) -> Result<ElementHandle, ResolveError> {
        let file_name = class.file_name.as_deref().ok_or(Unresolvable::NoElement(id))?;
        if let Some(local) = &class.local {
            return self.local_type(id, file_name, local);
        }
        if let Some(enclosing) = class.enclosing {
            let outer = self.resolve_binding(bindings, enclosing)?;
            return Ok(self.model.member_type(&outer, &class.source_name));
        }
        let openable = self.resolve_resource_path(file_name, None)?;
        match openable.element_type() {
            ElementType::ClassFile => Ok(self.class_file_type(&openable)),
            _ => Ok(self.model.member_type(&openable, &class.source_name)),
        }
    }

    /// Local and anonymous types. From a class file, the type lives in its
    /// own `Outer$1.class` next to the file the binding names; in source it
    /// is the element declared at the binding's offset.
    fn local_type(
        &mut self,
        id: BindingId,
        file_name: &str,
        local: &LocalType,
    ) -> Result<ElementHandle, ResolveError> {
        if let Some(pool_name) = &local.constant_pool_name {
            let simple = pool_name.rsplit('/').next().unwrap_or(pool_name);
            let extension = self.model.naming().default_class_extension();
            let sibling = match file_name.rfind(['/', '|']) {
                Some(end) => format!("{}{simple}.{extension}", &file_name[..=end]),
                None => format!("{simple}.{extension}"),
            };
            let class_file = self.resolve_resource_path(&sibling, None)?;
            return Ok(self.class_file_type(&class_file));
        }
        let unit = self.resolve_resource_path(file_name, None)?;
        self.model
            .element_at(&unit, local.source_start)
            .ok_or_else(|| Unresolvable::NoElement(id).into())
    }

    fn class_file_type(&self, class_file: &ElementHandle) -> ElementHandle {
        let stem = self.model.naming().name_without_extension(class_file.name());
        self.model.member_type(class_file, binary_type_name(stem))
    }

    fn method_binding<B: BindingTable + ?Sized>(
        &mut self,
        bindings: &B,
        method: &MethodBinding,
    ) -> Result<ElementHandle, ResolveError> {
        let declaring_type = self.resolve_binding(bindings, method.declaring_class)?;
        if declaring_type.element_type() != ElementType::Type {
            return Err(Unresolvable::UnexpectedParent(declaring_type.element_type()).into());
        }
        let binary = declaring_type.is_binary();

        let (name, parameter_types) = match (&method.declaration, binary) {
            (Some(declaration), false) => declared_parameters(declaration)?,
            _ => {
                let name = if method.is_constructor {
                    declaring_type.name().to_string()
                } else {
                    method.selector.clone()
                };
                let mut parameter_types = Vec::with_capacity(method.parameter_signatures.len() + 1);
                if binary && method.is_constructor {
                    if let Some(receiver) = inner_receiver(bindings, method.declaring_class)? {
                        parameter_types.push(receiver);
                    }
                }
                for signature in &method.parameter_signatures {
                    check_type_signature(signature, false)?;
                    parameter_types.push(if binary {
                        convert_type_signature(signature).into_owned()
                    } else {
                        to_unresolved_type_signature(signature)?
                    });
                }
                (name, parameter_types)
            }
        };

        let handle = self.model.method(&declaring_type, &name, parameter_types);
        if binary {
            return Ok(handle);
        }
        let Some(declared) = self.model.methods(&declaring_type) else {
            return Ok(handle);
        };
        if declared.contains(&handle) {
            return Ok(handle);
        }
        let similar = declared.into_iter().find(|candidate| is_similar(&handle, candidate));
        match similar {
            Some(found) => {
                trace!(requested = %handle, found = %found, "matched similar method");
                Ok(found)
            }
            None => Err(Unresolvable::NoSuchMethod { name }.into()),
        }
    }

    fn field_binding<B: BindingTable + ?Sized>(
        &mut self,
        bindings: &B,
        field: &FieldBinding,
    ) -> Result<ElementHandle, ResolveError> {
        let declaring_class = field.declaring_class.ok_or(Unresolvable::NoDeclaringType)?;
        let declaring_type = self.resolve_binding(bindings, declaring_class)?;
        Ok(self.model.field(&declaring_type, &field.name))
    }
}

fn lookup<B: BindingTable + ?Sized>(bindings: &B, id: BindingId) -> Result<&Binding, Unresolvable> {
    bindings.binding(id).ok_or(Unresolvable::UnknownBinding(id))
}

/// Name and erased parameter signatures from the source declaration.
fn declared_parameters(declaration: &MethodDeclarationNode) -> Result<(String, Vec<String>), ResolveError> {
    match declaration {
        MethodDeclarationNode::AnnotationMember { selector } => Ok((selector.clone(), Vec::new())),
        MethodDeclarationNode::Method { selector, arguments } => {
            let parameter_types = arguments
                .iter()
                .map(|argument| {
                    let erased = TypeReference::named(&argument.type_name()).with_dimensions(argument.dimensions);
                    generated_signature(&erased)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((selector.clone(), parameter_types))
        }
    }
}

/// The enclosing instance parameter javac adds to constructors of
/// non-static member types.
fn inner_receiver<B: BindingTable + ?Sized>(
    bindings: &B,
    declaring_class: BindingId,
) -> Result<Option<String>, ResolveError> {
    let Binding::Type(TypeBinding::Class(class)) = lookup(bindings, declaring_class)? else {
        return Ok(None);
    };
    if class.is_static || class.local.is_some() {
        return Ok(None);
    }
    let Some(enclosing) = class.enclosing else {
        return Ok(None);
    };
    match lookup(bindings, enclosing)? {
        Binding::Type(TypeBinding::Class(outer)) => {
            check_type_signature(&outer.generic_signature, false)?;
            Ok(Some(convert_type_signature(&outer.generic_signature).into_owned()))
        }
        _ => Ok(None),
    }
}

/// Same name, same arity, and parameter types with equal simple names.
fn is_similar(requested: &ElementHandle, candidate: &ElementHandle) -> bool {
    if requested.name() != candidate.name() || candidate.element_type() != ElementType::Method {
        return false;
    }
    let (left, right) = (requested.parameter_types(), candidate.parameter_types());
    left.len() == right.len()
        && left.iter().zip(right).all(|(a, b)| match (simple_type_name(a), simple_type_name(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        })
}
