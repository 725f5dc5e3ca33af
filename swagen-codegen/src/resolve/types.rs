//! Type expressions and named type declarations.

use serde_json::Value;
use swagen_ir::{Literal, ObjectProperty, PropertyDescriptor, TypeDescriptor, TypeExpr, TypeKind};
use swagen_schema::{AdditionalProperties, SchemaNode, SchemaType};

use super::Resolver;

impl<'a> Resolver<'a> {
    /// Resolve a schema node into a type expression.
    ///
    /// Precedence is `$ref`, then `enum`, then composition keywords, then
    /// `type`. A `$ref` is never followed, so self-referencing definitions
    /// resolve without recursion.
    pub fn resolve_type(&mut self, node: &SchemaNode) -> TypeExpr {
        if let Some(reference) = &node.reference {
            return TypeExpr::Named(self.ref_name(reference));
        }

        let members = enum_literals(node);
        if !members.is_empty() {
            let members = members
                .into_iter()
                .map(|member| match member {
                    Literal::Null => TypeExpr::Null,
                    other => TypeExpr::Literal(other),
                })
                .collect();
            return TypeExpr::union(members);
        }

        if !node.all_of.is_empty() {
            let members = node.all_of.iter().map(|n| self.resolve_type(n)).collect();
            return TypeExpr::intersection(members);
        }
        let alternatives = if node.one_of.is_empty() {
            &node.any_of
        } else {
            &node.one_of
        };
        if !alternatives.is_empty() {
            let members = alternatives.iter().map(|n| self.resolve_type(n)).collect();
            return TypeExpr::union(members);
        }

        match node.schema_type() {
            Some(SchemaType::String) if node.is_binary() => TypeExpr::Binary,
            Some(SchemaType::String) => TypeExpr::String,
            Some(SchemaType::File) => TypeExpr::Binary,
            Some(SchemaType::Number | SchemaType::Integer) => TypeExpr::Number,
            Some(SchemaType::Boolean) => TypeExpr::Boolean,
            Some(SchemaType::Null) => TypeExpr::Null,
            Some(SchemaType::Array) => match &node.items {
                Some(items) => TypeExpr::array(self.resolve_type(items)),
                None => TypeExpr::array(TypeExpr::Any),
            },
            Some(SchemaType::Object) => match &node.properties {
                Some(properties) if !properties.is_empty() => TypeExpr::Object(
                    properties
                        .iter()
                        .map(|(name, prop)| ObjectProperty {
                            name: name.clone(),
                            ty: self.resolve_type(prop),
                            required: node.requires(name),
                        })
                        .collect(),
                ),
                _ => self.open_map(node),
            },
            None if node.additional_properties.is_some() => self.open_map(node),
            Some(SchemaType::Other(_)) | None => TypeExpr::Unknown,
        }
    }

    fn open_map(&mut self, node: &SchemaNode) -> TypeExpr {
        let value = match &node.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => self.resolve_type(schema),
            _ => TypeExpr::Any,
        };
        TypeExpr::Map(Box::new(value))
    }

    /// One descriptor per named definition, in document order.
    pub(super) fn type_descriptors(&mut self) -> Vec<TypeDescriptor> {
        let named: Vec<(&'a str, &'a SchemaNode)> =
            self.named.iter().map(|(raw, node)| (*raw, *node)).collect();
        named
            .into_iter()
            .map(|(raw, node)| self.type_descriptor(raw, node))
            .collect()
    }

    fn type_descriptor(&mut self, raw: &str, node: &SchemaNode) -> TypeDescriptor {
        let name = self.types.name(raw);
        let members = enum_literals(node);
        let kind = if !members.is_empty() {
            TypeKind::Enum { members }
        } else if let (None, Some(properties)) = (&node.reference, &node.properties)
            && node.is_object_with_properties()
        {
            TypeKind::Interface {
                properties: properties
                    .iter()
                    .map(|(prop_name, prop)| PropertyDescriptor {
                        name: prop_name.clone(),
                        ty: self.resolve_type(prop),
                        required: node.requires(prop_name),
                        description: prop.description.clone(),
                    })
                    .collect(),
            }
        } else {
            TypeKind::Alias {
                target: self.alias_target(node),
            }
        };

        TypeDescriptor {
            name,
            raw_name: raw.to_string(),
            kind,
            description: node.description.clone(),
        }
    }

    fn alias_target(&mut self, node: &SchemaNode) -> TypeExpr {
        if node.reference.is_some() && self.ref_cycles(node) {
            return TypeExpr::Unknown;
        }
        self.resolve_type(node)
    }
}

/// A JSON scalar as a literal type member.
fn literal(value: &Value) -> Option<Literal> {
    match value {
        Value::String(s) => Some(Literal::String(s.clone())),
        Value::Number(n) => Some(Literal::Number(n.to_string())),
        Value::Bool(b) => Some(Literal::Boolean(*b)),
        Value::Null => Some(Literal::Null),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// The scalar members of a node's `enum`, empty when there are none.
///
/// `$ref` takes precedence over `enum`, so a reference has no members.
fn enum_literals(node: &SchemaNode) -> Vec<Literal> {
    if node.reference.is_some() {
        return Vec::new();
    }
    node.enumeration
        .iter()
        .flatten()
        .filter_map(literal)
        .collect()
}

#[cfg(test)]
mod tests {
    use swagen_schema::SchemaDocument;

    use super::*;
    use crate::language::NamingConvention;

    fn doc(json: &str) -> SchemaDocument {
        serde_json::from_str(json).expect("Failed to parse test document")
    }

    fn node(json: &str) -> SchemaNode {
        serde_json::from_str(json).expect("Failed to parse test schema")
    }

    fn empty_doc() -> SchemaDocument {
        doc(r#"{ "swagger": "2.0", "info": {}, "paths": {} }"#)
    }

    fn render(json: &str) -> String {
        let d = empty_doc();
        let mut resolver = Resolver::new(&d, NamingConvention::default());
        resolver.resolve_type(&node(json)).to_string()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(render(r#"{ "type": "string" }"#), "string");
        assert_eq!(render(r#"{ "type": "string", "format": "date-time" }"#), "string");
        assert_eq!(render(r#"{ "type": "string", "format": "binary" }"#), "File");
        assert_eq!(render(r#"{ "type": "integer", "format": "int64" }"#), "number");
        assert_eq!(render(r#"{ "type": "number" }"#), "number");
        assert_eq!(render(r#"{ "type": "boolean" }"#), "boolean");
        assert_eq!(render(r#"{ "type": "file" }"#), "File");
    }

    #[test]
    fn test_absent_or_unknown_type() {
        assert_eq!(render("{}"), "any");
        assert_eq!(render(r#"{ "type": "tuple" }"#), "any");
        assert_eq!(render(r#"{ "type": ["string", "null"] }"#), "string");
    }

    #[test]
    fn test_ref_wins_over_everything() {
        assert_eq!(
            render(r##"{ "$ref": "#/definitions/Pet", "type": "string", "enum": ["a"] }"##),
            "Pet"
        );
    }

    #[test]
    fn test_string_enum_keeps_source_order() {
        assert_eq!(
            render(r#"{ "type": "string", "enum": ["sold", "available", "it's"] }"#),
            "'sold' | 'available' | 'it\\'s'"
        );
        assert_eq!(render(r#"{ "type": "integer", "enum": [1, 2] }"#), "1 | 2");
        assert_eq!(render(r#"{ "enum": ["a", null] }"#), "'a' | null");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            render(r##"{ "type": "array", "items": { "$ref": "#/definitions/Pet" } }"##),
            "Pet[]"
        );
        assert_eq!(
            render(r#"{ "type": "array", "items": { "type": "array", "items": { "type": "string" } } }"#),
            "string[][]"
        );
        assert_eq!(render(r#"{ "type": "array" }"#), "any[]");
    }

    #[test]
    fn test_inline_object_keeps_property_order() {
        assert_eq!(
            render(
                r#"{ "type": "object", "required": ["name"],
                     "properties": { "name": { "type": "string" }, "age": { "type": "integer" }, "x-id": {} } }"#
            ),
            "{ name: string; age?: number; 'x-id'?: any }"
        );
        // properties without a type still mean an object
        assert_eq!(
            render(r#"{ "properties": { "id": { "type": "integer" } }, "required": ["id"] }"#),
            "{ id: number }"
        );
    }

    #[test]
    fn test_open_maps() {
        assert_eq!(render(r#"{ "type": "object" }"#), "Record<string, any>");
        assert_eq!(
            render(r#"{ "type": "object", "additionalProperties": { "type": "integer" } }"#),
            "Record<string, number>"
        );
        assert_eq!(
            render(r#"{ "type": "object", "additionalProperties": true }"#),
            "Record<string, any>"
        );
    }

    #[test]
    fn test_compositions_pass_through() {
        assert_eq!(
            render(
                r##"{ "allOf": [{ "$ref": "#/definitions/Base" }, { "type": "object", "properties": { "extra": { "type": "string" } } }] }"##
            ),
            "Base & { extra?: string }"
        );
        assert_eq!(
            render(r##"{ "oneOf": [{ "$ref": "#/definitions/Cat" }, { "$ref": "#/definitions/Dog" }] }"##),
            "Cat | Dog"
        );
        assert_eq!(
            render(r#"{ "anyOf": [{ "type": "string" }, { "type": "integer" }] }"#),
            "string | number"
        );
    }

    #[test]
    fn test_unresolved_ref_degrades_to_leaf_name() {
        assert_eq!(render(r##"{ "$ref": "#/definitions/Missing-Thing" }"##), "MissingThing");
        assert_eq!(render(r#"{ "$ref": "other.json#/Pet~1Item" }"#), "PetItem");
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let d = doc(
            r##"{ "swagger": "2.0", "info": {}, "paths": {},
                 "definitions": { "Node": { "type": "object", "properties": {
                     "children": { "type": "array", "items": { "$ref": "#/definitions/Node" } } } } } }"##,
        );
        let mut resolver = Resolver::new(&d, NamingConvention::default());
        let schema = &d.definitions["Node"];
        let first = resolver.resolve_type(schema);
        let second = resolver.resolve_type(schema);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "{ children?: Node[] }");
    }

    #[test]
    fn test_type_descriptor_kinds() {
        let d = doc(
            r##"{ "swagger": "2.0", "info": {}, "paths": {},
                 "definitions": {
                     "User": { "type": "object", "required": ["id", "name"], "description": "A user",
                               "properties": { "id": { "type": "integer" }, "name": { "type": "string" },
                                               "email": { "type": "string", "description": "Contact" } } },
                     "Status": { "type": "string", "enum": ["active", "banned"] },
                     "Users": { "type": "array", "items": { "$ref": "#/definitions/User" } },
                     "Loop": { "$ref": "#/definitions/Loop" },
                     "Anything": {}
                 } }"##,
        );
        let mut resolver = Resolver::new(&d, NamingConvention::default());
        let types = resolver.type_descriptors();
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["User", "Status", "Users", "Loop", "Anything"]);

        let TypeKind::Interface { properties } = &types[0].kind else {
            panic!("expected interface");
        };
        let flags: Vec<_> = properties.iter().map(|p| (p.name.as_str(), p.required)).collect();
        assert_eq!(flags, [("id", true), ("name", true), ("email", false)]);
        assert_eq!(properties[2].description.as_deref(), Some("Contact"));
        assert_eq!(types[0].description.as_deref(), Some("A user"));

        assert_eq!(
            types[1].kind,
            TypeKind::Enum {
                members: vec![
                    Literal::String("active".into()),
                    Literal::String("banned".into())
                ]
            }
        );
        assert_eq!(
            types[2].kind,
            TypeKind::Alias {
                target: TypeExpr::array(TypeExpr::Named("User".into()))
            }
        );
        assert_eq!(types[3].kind, TypeKind::Alias { target: TypeExpr::Unknown });
        assert_eq!(types[4].kind, TypeKind::Alias { target: TypeExpr::Unknown });
    }

    #[test]
    fn test_enum_beats_properties_in_declarations() {
        let d = doc(
            r#"{ "swagger": "2.0", "info": {}, "paths": {},
                 "definitions": {
                     "Flag": { "type": "object", "enum": ["on", "off"],
                               "properties": { "a": { "type": "string" } } },
                     "Opaque": { "type": "object", "enum": [{ "a": 1 }],
                                 "properties": { "a": { "type": "integer" } } }
                 } }"#,
        );
        let mut resolver = Resolver::new(&d, NamingConvention::default());
        let types = resolver.type_descriptors();

        assert_eq!(
            types[0].kind,
            TypeKind::Enum {
                members: vec![Literal::String("on".into()), Literal::String("off".into())]
            }
        );
        let inline = resolver.resolve_type(d.named_schemas()["Flag"]);
        assert_eq!(inline.to_string(), "'on' | 'off'");

        assert!(matches!(types[1].kind, TypeKind::Interface { .. }));
    }

    #[test]
    fn test_nullable_enum_keeps_null_in_declaration() {
        let d = doc(
            r#"{ "swagger": "2.0", "info": {}, "paths": {},
                 "definitions": { "Maybe": { "enum": ["a", null] } } }"#,
        );
        let mut resolver = Resolver::new(&d, NamingConvention::default());
        let types = resolver.type_descriptors();

        assert_eq!(
            types[0].kind,
            TypeKind::Enum {
                members: vec![Literal::String("a".into()), Literal::Null]
            }
        );
        assert_eq!(render(r#"{ "enum": ["a", null] }"#), "'a' | null");
    }
}
