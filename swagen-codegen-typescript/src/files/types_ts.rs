//! types.ts generator.

use std::path::{Path, PathBuf};

use swagen_codegen::Renderable;
use swagen_core::{FileRules, GeneratedFile};
use swagen_ir::{ApiModel, TypeDescriptor, TypeKind};

use crate::{
    ast::{Interface, InterfaceField, TypeAlias},
    code_file::{CodeFile, RawCode},
    qualify::TypeQualifier,
};

const HEADER: &str = "// Auto-generated type definitions\n// Do not edit this file manually\n";

/// Names of the wrapper types below.
pub const WRAPPER_TYPES: &[&str] = &[
    "ApiResponse",
    "ApiError",
    "RequestInterceptor",
    "ResponseInterceptor",
    "InterceptorConfig",
];

/// Runtime wrapper types shared by the client. Never prefixed.
fn wrapper_types() -> Vec<Box<dyn Renderable>> {
    vec![
        Box::new(
            Interface::new("ApiResponse<T = any>")
                .field("data", "T")
                .field("status", "number")
                .field("statusText", "string")
                .field("headers", "any"),
        ),
        Box::new(
            Interface::new("ApiError")
                .field("message", "string")
                .optional_field("status", "number")
                .optional_field("code", "string"),
        ),
        Box::new(RawCode::lines([
            "// Interceptor hooks",
            "export interface RequestInterceptor {",
            "  onFulfilled?: (config: any) => any | Promise<any>;",
            "  onRejected?: (error: any) => any;",
            "}",
        ])),
        Box::new(
            Interface::new("ResponseInterceptor")
                .optional_field("onFulfilled", "(response: any) => any | Promise<any>")
                .optional_field("onRejected", "(error: any) => any"),
        ),
        Box::new(
            Interface::new("InterceptorConfig")
                .optional_field("request", "RequestInterceptor")
                .optional_field("response", "ResponseInterceptor"),
        ),
    ]
}

/// The `types.ts` module: wrapper types followed by one declaration per
/// named definition, in document order.
pub struct TypesTs<'a> {
    model: &'a ApiModel,
    prefix: &'a str,
}

impl<'a> TypesTs<'a> {
    pub fn new(model: &'a ApiModel, prefix: &'a str) -> Self {
        Self { model, prefix }
    }

    fn declaration(&self, ty: &TypeDescriptor) -> Box<dyn Renderable> {
        let qualifier = TypeQualifier::declarations(self.prefix);
        let name = qualifier.name(&ty.name);
        let doc = ty.description.as_deref();

        match &ty.kind {
            TypeKind::Interface { properties } => Box::new(properties.iter().fold(
                Interface::new(name).doc(doc),
                |interface, prop| {
                    interface.field_with(
                        InterfaceField::new(&prop.name, qualifier.render(&prop.ty))
                            .optional_if(!prop.required)
                            .doc(prop.description.as_deref()),
                    )
                },
            )),
            TypeKind::Enum { members } if members.is_empty() => {
                Box::new(TypeAlias::new(name, "string").doc(doc))
            }
            TypeKind::Enum { members } => {
                let union = members
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" | ");
                Box::new(TypeAlias::new(name, union).doc(doc))
            }
            TypeKind::Alias { target } => {
                Box::new(TypeAlias::new(name, qualifier.render(target)).doc(doc))
            }
        }
    }
}

impl GeneratedFile for TypesTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(HEADER)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add_all(wrapper_types())
            .add_all(self.model.types.iter().map(|ty| self.declaration(ty)))
            .render()
    }
}
