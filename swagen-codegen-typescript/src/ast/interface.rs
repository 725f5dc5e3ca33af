//! `interface` declarations.

use swagen_codegen::{CodeFragment, Renderable};
use swagen_ir::property_key;

use super::{documented, export_keyword};

/// One property line; the name is quoted when it is not an identifier.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub doc: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            doc: None,
        }
    }

    pub fn optional(self) -> Self {
        self.optional_if(true)
    }

    pub fn optional_if(self, optional: bool) -> Self {
        Self { optional, ..self }
    }

    pub fn doc(self, doc: Option<impl Into<String>>) -> Self {
        Self {
            doc: doc.map(Into::into),
            ..self
        }
    }

    fn declaration(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {};", property_key(&self.name), marker, self.ty)
    }
}

#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Option<String>,
    doc: Option<String>,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            doc: None,
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn extends(self, base: impl Into<String>) -> Self {
        Self {
            extends: Some(base.into()),
            ..self
        }
    }

    pub fn doc(self, doc: Option<impl Into<String>>) -> Self {
        Self {
            doc: doc.map(Into::into),
            ..self
        }
    }

    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty))
    }

    pub fn optional_field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty).optional())
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(self) -> Self {
        Self {
            exported: false,
            ..self
        }
    }

    fn opening(&self) -> String {
        let extends = self
            .extends
            .as_ref()
            .map(|base| format!(" extends {}", base))
            .unwrap_or_default();
        format!(
            "{}interface {}{} {{",
            export_keyword(self.exported),
            self.name,
            extends
        )
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let opening = self.opening();
        let decl = if self.fields.is_empty() {
            CodeFragment::Line(format!("{}}}", opening))
        } else {
            let body = self
                .fields
                .iter()
                .flat_map(|field| {
                    documented(field.doc.as_deref(), CodeFragment::Line(field.declaration()))
                })
                .collect();
            CodeFragment::Block {
                header: opening,
                body,
                close: Some("}".to_string()),
            }
        };
        documented(self.doc.as_deref(), decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_empty_interface() {
        assert_eq!(render(&Interface::new("Empty")), "export interface Empty {}\n");
    }

    #[test]
    fn test_required_and_optional_fields() {
        let pet = Interface::new("Pet")
            .field("id", "number")
            .optional_field("tag", "string");
        assert_eq!(
            render(&pet),
            "export interface Pet {\n  id: number;\n  tag?: string;\n}\n"
        );
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let headers = Interface::new("Headers").field("x-request-id", "string");
        assert!(render(&headers).contains("  'x-request-id': string;"));
    }

    #[test]
    fn test_docs_and_extends() {
        let config = Interface::new("ApiClientConfig")
            .extends("AxiosRequestConfig")
            .doc(Some("Client options"))
            .field_with(InterfaceField::new("baseURL", "string").optional().doc(Some("Root URL")));
        assert_eq!(
            render(&config),
            "/** Client options */\nexport interface ApiClientConfig extends AxiosRequestConfig {\n  /** Root URL */\n  baseURL?: string;\n}\n"
        );
    }

    #[test]
    fn test_private_interface() {
        let internal = Interface::new("Internal").private().field("x", "number");
        let text = render(&internal);
        assert!(!text.contains("export"));
        assert!(text.contains("interface Internal {"));
    }
}
