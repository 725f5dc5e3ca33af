//! Type-name qualification for declared types.

use swagen_ir::TypeExpr;

/// Namespace under which `api.ts` imports `types.ts`.
pub const TYPES_NAMESPACE: &str = "Types";

/// Maps named references to the spelling used in a particular file.
///
/// Declared types get the configured prefix everywhere. Outside `types.ts`
/// they are additionally qualified with the types namespace. Primitives,
/// built-in generics and inline object types are structural in [`TypeExpr`],
/// so only `Named` leaves are ever touched.
#[derive(Debug, Clone, Copy)]
pub struct TypeQualifier<'a> {
    namespace: Option<&'a str>,
    prefix: &'a str,
}

impl<'a> TypeQualifier<'a> {
    /// Spelling inside `types.ts`.
    pub fn declarations(prefix: &'a str) -> Self {
        Self {
            namespace: None,
            prefix,
        }
    }

    /// Spelling in modules that import `types.ts` as `* as Types`.
    pub fn namespaced(prefix: &'a str) -> Self {
        Self {
            namespace: Some(TYPES_NAMESPACE),
            prefix,
        }
    }

    /// Spelling of a declared type name.
    pub fn name(&self, name: &str) -> String {
        match self.namespace {
            Some(ns) => format!("{}.{}{}", ns, self.prefix, name),
            None => format!("{}{}", self.prefix, name),
        }
    }

    /// Spelling of an unprefixed wrapper type from `types.ts` (`ApiError`, ...).
    pub fn wrapper(&self, name: &str) -> String {
        match self.namespace {
            Some(ns) => format!("{}.{}", ns, name),
            None => name.to_string(),
        }
    }

    /// Render a type expression with every named leaf qualified.
    pub fn render(&self, ty: &TypeExpr) -> String {
        ty.render_with(&|name| self.name(name))
    }
}
