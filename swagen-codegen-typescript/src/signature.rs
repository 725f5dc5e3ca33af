//! Method signature and call construction for one endpoint.
//!
//! Formals are ordered so that no optional formal precedes a required one:
//!
//! 1. path parameters, in declaration order
//! 2. the body, as `data` or as one formal per form field
//! 3. required query parameters, one formal each
//! 4. `params`, a record of every optional query parameter
//! 5. `config?: AxiosRequestConfig`
//!
//! Each step contributes to a required list and an optional list, and the
//! final signature is the required list followed by the optional one.

use std::collections::HashSet;

use swagen_codegen::CodeFragment;
use swagen_core::{is_identifier, single_quoted};
use swagen_ir::{ApiModel, ApiRequestBody, EndpointDescriptor, Literal, TypeExpr, TypeKind, property_key};

use crate::{naming::TS_NAMING, qualify::TypeQualifier};

/// Local names the generated method body uses for itself.
const RESERVED_FORMALS: [&str; 4] = ["data", "params", "config", "formData"];

/// One formal parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formal {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Formal {
    fn new(name: impl Into<String>, ty: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional,
        }
    }

    /// `name: T` or `name?: T`.
    pub fn render(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, marker, self.ty)
    }
}

/// A value sent under `wire` and held in the local `formal`.
#[derive(Debug, Clone)]
struct Binding {
    wire: String,
    formal: String,
}

impl Binding {
    /// Entry in an object literal: shorthand when the names agree.
    fn object_entry(&self) -> String {
        if self.wire == self.formal && is_identifier(&self.wire) {
            self.formal.clone()
        } else {
            format!("{}: {}", property_key(&self.wire), self.formal)
        }
    }
}

/// How a form field value becomes a `FormData` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormValue {
    /// Appended as is (strings, files).
    Direct,
    /// Numbers and booleans, through `String(x)`.
    Stringify,
    /// Everything else, through `JSON.stringify(x)`.
    Json,
}

#[derive(Debug, Clone)]
struct FormBinding {
    binding: Binding,
    required: bool,
    many: bool,
    value: FormValue,
}

#[derive(Debug, Clone)]
enum Body {
    None,
    Data { content_type: Option<String> },
    Form { content_type: String, fields: Vec<FormBinding> },
}

/// Allocates legal, unique local names for wire names.
struct FormalNames {
    used: HashSet<String>,
}

impl FormalNames {
    fn new() -> Self {
        Self {
            used: RESERVED_FORMALS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn allocate(&mut self, wire: &str) -> String {
        let camel = (TS_NAMING.local_to_name)(wire);
        let stripped: String = camel
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
            .collect();
        let stripped = stripped.trim_start_matches(|c: char| c.is_ascii_digit());
        let base = if stripped.is_empty() {
            "param".to_string()
        } else {
            TS_NAMING.safe_name(stripped)
        };

        let mut candidate = base.clone();
        let mut counter = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Everything needed to render one client method.
#[derive(Debug, Clone)]
pub struct MethodSignature {
    formals: Vec<Formal>,
    return_type: String,
    path: Vec<Binding>,
    required_query: Vec<Binding>,
    optional_query: bool,
    body: Body,
}

impl MethodSignature {
    pub fn new(endpoint: &EndpointDescriptor, model: &ApiModel, qualifier: &TypeQualifier) -> Self {
        let mut names = FormalNames::new();
        let mut required = Vec::new();
        let mut optional = Vec::new();

        let mut path = Vec::new();
        for param in endpoint.path_params() {
            let formal = names.allocate(&param.name);
            let target = if param.required { &mut required } else { &mut optional };
            target.push(Formal::new(&formal, qualifier.render(&param.ty), !param.required));
            path.push(Binding {
                wire: param.name.clone(),
                formal,
            });
        }

        let body = match &endpoint.request_body {
            None => Body::None,
            Some(ApiRequestBody::Json {
                ty,
                required: is_required,
                content_type,
                ..
            }) => {
                let target = if *is_required { &mut required } else { &mut optional };
                target.push(Formal::new("data", qualifier.render(ty), !is_required));
                Body::Data {
                    content_type: content_type.clone(),
                }
            }
            Some(ApiRequestBody::FormData {
                fields,
                content_type,
                ..
            }) => {
                let mut bindings = Vec::with_capacity(fields.len());
                for field in fields {
                    let formal = names.allocate(&field.name);
                    let target = if field.required { &mut required } else { &mut optional };
                    target.push(Formal::new(&formal, qualifier.render(&field.ty), !field.required));

                    let (many, element) = match &field.ty {
                        TypeExpr::Array(inner) => (true, inner.as_ref()),
                        other => (false, other),
                    };
                    bindings.push(FormBinding {
                        binding: Binding {
                            wire: field.name.clone(),
                            formal,
                        },
                        required: field.required,
                        many,
                        value: form_value(element, model, 0),
                    });
                }
                Body::Form {
                    content_type: content_type.clone(),
                    fields: bindings,
                }
            }
        };

        let mut required_query = Vec::new();
        let mut optional_query = Vec::new();
        for param in endpoint.query_params() {
            if param.required {
                let formal = names.allocate(&param.name);
                required.push(Formal::new(&formal, qualifier.render(&param.ty), false));
                required_query.push(Binding {
                    wire: param.name.clone(),
                    formal,
                });
            } else {
                optional_query.push(format!(
                    "{}?: {}",
                    property_key(&param.name),
                    qualifier.render(&param.ty)
                ));
            }
        }
        if !optional_query.is_empty() {
            optional.push(Formal::new(
                "params",
                format!("{{ {} }}", optional_query.join("; ")),
                true,
            ));
        }

        optional.push(Formal::new("config", "AxiosRequestConfig", true));

        let return_type = match endpoint.success_response() {
            Some(response) => format!("Promise<{}>", qualifier.render(&response.ty)),
            None => "Promise<any>".to_string(),
        };

        required.extend(optional);
        Self {
            formals: required,
            return_type,
            path,
            required_query,
            optional_query: !optional_query.is_empty(),
            body,
        }
    }

    pub fn formals(&self) -> &[Formal] {
        &self.formals
    }

    /// Rendered formals, ready for a method header.
    pub fn rendered_formals(&self) -> Vec<String> {
        self.formals.iter().map(Formal::render).collect()
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// The URL argument: a template literal when path parameters exist.
    pub fn url(&self, path: &str) -> String {
        if self.path.is_empty() {
            return single_quoted(path);
        }
        let mut template = path.replace('\\', "\\\\").replace('`', "\\`");
        for binding in &self.path {
            template = template.replace(
                &format!("{{{}}}", binding.wire),
                &format!("${{{}}}", binding.formal),
            );
        }
        format!("`{}`", template)
    }

    /// Statements that run before the transport call.
    pub fn prelude(&self) -> Vec<CodeFragment> {
        let Body::Form { fields, .. } = &self.body else {
            return Vec::new();
        };

        let mut fragments = vec![CodeFragment::line("const formData = new FormData();")];
        for field in fields {
            let append = field.append_statement();
            if field.required {
                fragments.push(CodeFragment::Line(append));
            } else {
                fragments.push(CodeFragment::block(
                    format!("if ({} !== undefined) {{", field.binding.formal),
                    vec![CodeFragment::Line(append)],
                    Some("}".to_string()),
                ));
            }
        }
        fragments
    }

    /// The `return this.<instance>.<verb>(...)` statement.
    pub fn call(&self, endpoint: &EndpointDescriptor, instance: &str) -> String {
        let body_expr = match &self.body {
            Body::None => None,
            Body::Data { .. } => Some("data"),
            Body::Form { .. } => Some("formData"),
        };

        let mut config = Vec::new();
        let required: Vec<String> = self
            .required_query
            .iter()
            .map(Binding::object_entry)
            .collect();
        match (required.is_empty(), self.optional_query) {
            (true, false) => {}
            (true, true) => config.push("params".to_string()),
            (false, false) => config.push(format!("params: {{ {} }}", required.join(", "))),
            (false, true) => {
                config.push(format!("params: {{ {}, ...params }}", required.join(", ")))
            }
        }

        let positional_body = endpoint.method.has_body_argument();
        if !positional_body && let Some(body) = body_expr {
            config.push(if body == "data" {
                "data".to_string()
            } else {
                format!("data: {}", body)
            });
        }

        config.push("...config".to_string());

        if let Some(content_type) = self.content_type_header() {
            config.push(format!(
                "headers: {{ 'Content-Type': {}, ...config?.headers }}",
                single_quoted(content_type)
            ));
        }

        let mut args = vec![self.url(&endpoint.path)];
        if positional_body {
            args.push(body_expr.unwrap_or("null").to_string());
        }
        args.push(format!("{{ {} }}", config.join(", ")));

        format!(
            "return this.{}.{}({});",
            instance,
            endpoint.method.as_str(),
            args.join(", ")
        )
    }

    /// Content type to send when it differs from the client's JSON default.
    fn content_type_header(&self) -> Option<&str> {
        match &self.body {
            Body::Form { content_type, .. } => Some(content_type),
            Body::Data {
                content_type: Some(content_type),
            } if !content_type.contains("json") => Some(content_type),
            _ => None,
        }
    }
}

impl FormBinding {
    fn append_statement(&self) -> String {
        let wire = single_quoted(&self.binding.wire);
        if self.many {
            format!(
                "{}.forEach((item) => formData.append({}, {}));",
                self.binding.formal,
                wire,
                self.value.wrap("item")
            )
        } else {
            format!(
                "formData.append({}, {});",
                wire,
                self.value.wrap(&self.binding.formal)
            )
        }
    }
}

impl FormValue {
    fn wrap(self, expr: &str) -> String {
        match self {
            FormValue::Direct => expr.to_string(),
            FormValue::Stringify => format!("String({})", expr),
            FormValue::Json => format!("JSON.stringify({})", expr),
        }
    }
}

/// Named types are looked up so that string enums and aliases of primitives
/// are appended without JSON quoting.
fn form_value(ty: &TypeExpr, model: &ApiModel, depth: usize) -> FormValue {
    if matches!(ty, TypeExpr::Binary) || ty.is_string_like() {
        return FormValue::Direct;
    }
    if ty.is_scalar() {
        return FormValue::Stringify;
    }
    let TypeExpr::Named(name) = ty else {
        return FormValue::Json;
    };
    if depth > 8 {
        return FormValue::Json;
    }
    match model.find_type(name).map(|t| &t.kind) {
        Some(TypeKind::Enum { members }) if !members.is_empty() => {
            let values: Vec<&Literal> = members.iter().filter(|m| **m != Literal::Null).collect();
            if values.is_empty() {
                FormValue::Json
            } else if values.iter().all(|m| matches!(m, Literal::String(_))) {
                FormValue::Direct
            } else if values.iter().all(|m| !matches!(m, Literal::String(_))) {
                FormValue::Stringify
            } else {
                FormValue::Json
            }
        }
        Some(TypeKind::Alias { target }) => form_value(target, model, depth + 1),
        _ => FormValue::Json,
    }
}

#[cfg(test)]
mod tests {
    use swagen_core::{HttpMethod, ParameterLocation};
    use swagen_ir::{ApiParameter, ApiResponse, FormField, TypeDescriptor};

    use super::*;

    fn endpoint(method: HttpMethod, path: &str) -> EndpointDescriptor {
        EndpointDescriptor {
            path: path.to_string(),
            method,
            operation_id: None,
            method_name: "op".to_string(),
            summary: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
            tags: Vec::new(),
            deprecated: false,
        }
    }

    fn param(name: &str, location: ParameterLocation, ty: TypeExpr, required: bool) -> ApiParameter {
        ApiParameter {
            name: name.to_string(),
            location,
            ty,
            required,
            description: None,
        }
    }

    fn field(name: &str, ty: TypeExpr, required: bool) -> FormField {
        FormField {
            name: name.to_string(),
            ty,
            required,
            description: None,
        }
    }

    fn build(endpoint: &EndpointDescriptor) -> MethodSignature {
        MethodSignature::new(endpoint, &ApiModel::default(), &TypeQualifier::namespaced(""))
    }

    #[test]
    fn test_path_parameter_and_return_type() {
        let mut ep = endpoint(HttpMethod::Get, "/users/{id}");
        ep.parameters
            .push(param("id", ParameterLocation::Path, TypeExpr::Number, true));
        ep.responses.push(ApiResponse {
            status_code: "200".to_string(),
            ty: TypeExpr::Named("User".to_string()),
            description: None,
        });

        let sig = build(&ep);

        assert_eq!(
            sig.rendered_formals(),
            ["id: number", "config?: AxiosRequestConfig"]
        );
        assert_eq!(sig.return_type(), "Promise<Types.User>");
        assert_eq!(
            sig.call(&ep, "apiClient"),
            "return this.apiClient.get(`/users/${id}`, { ...config });"
        );
    }

    #[test]
    fn test_required_formals_precede_optional() {
        let mut ep = endpoint(HttpMethod::Put, "/items/{itemId}/{rev}");
        ep.parameters.extend([
            param("rev", ParameterLocation::Path, TypeExpr::String, false),
            param("itemId", ParameterLocation::Path, TypeExpr::Number, true),
            param("verbose", ParameterLocation::Query, TypeExpr::Boolean, false),
            param("mode", ParameterLocation::Query, TypeExpr::String, true),
            param("X-Trace", ParameterLocation::Header, TypeExpr::String, true),
        ]);
        ep.request_body = Some(ApiRequestBody::Json {
            ty: TypeExpr::Named("Item".to_string()),
            required: false,
            content_type: None,
            description: None,
        });

        let sig = build(&ep);
        let formals = sig.rendered_formals();

        assert_eq!(
            formals,
            [
                "itemId: number",
                "mode: string",
                "rev?: string",
                "data?: Types.Item",
                "params?: { verbose?: boolean }",
                "config?: AxiosRequestConfig",
            ]
        );
        let first_optional = sig.formals().iter().position(|f| f.optional).unwrap();
        assert!(sig.formals()[first_optional..].iter().all(|f| f.optional));
        assert_eq!(
            sig.call(&ep, "apiClient"),
            "return this.apiClient.put(`/items/${itemId}/${rev}`, data, { params: { mode, ...params }, ...config });"
        );
    }

    #[test]
    fn test_body_verb_without_body_passes_null() {
        let ep = endpoint(HttpMethod::Post, "/logout");
        let sig = build(&ep);

        assert_eq!(
            sig.call(&ep, "http"),
            "return this.http.post('/logout', null, { ...config });"
        );
        assert_eq!(sig.return_type(), "Promise<any>");
    }

    #[test]
    fn test_delete_with_body_sends_data_in_config() {
        let mut ep = endpoint(HttpMethod::Delete, "/batch");
        ep.request_body = Some(ApiRequestBody::Json {
            ty: TypeExpr::array(TypeExpr::Number),
            required: true,
            content_type: Some("application/json".to_string()),
            description: None,
        });

        let sig = build(&ep);

        assert_eq!(
            sig.rendered_formals(),
            ["data: number[]", "config?: AxiosRequestConfig"]
        );
        assert_eq!(
            sig.call(&ep, "apiClient"),
            "return this.apiClient.delete('/batch', { data, ...config });"
        );
    }

    #[test]
    fn test_query_only_shapes() {
        let mut required_only = endpoint(HttpMethod::Get, "/search");
        required_only
            .parameters
            .push(param("q", ParameterLocation::Query, TypeExpr::String, true));
        assert_eq!(
            build(&required_only).call(&required_only, "c"),
            "return this.c.get('/search', { params: { q }, ...config });"
        );

        let mut optional_only = endpoint(HttpMethod::Get, "/search");
        optional_only.parameters.push(param(
            "page-size",
            ParameterLocation::Query,
            TypeExpr::Number,
            false,
        ));
        let sig = build(&optional_only);
        assert_eq!(
            sig.rendered_formals()[0],
            "params?: { 'page-size'?: number }"
        );
        assert_eq!(
            sig.call(&optional_only, "c"),
            "return this.c.get('/search', { params, ...config });"
        );
    }

    #[test]
    fn test_formal_names_are_legal_and_unique() {
        let mut ep = endpoint(HttpMethod::Get, "/a/{pet-id}/{class}/{data}");
        ep.parameters.extend([
            param("pet-id", ParameterLocation::Path, TypeExpr::Number, true),
            param("class", ParameterLocation::Path, TypeExpr::String, true),
            param("data", ParameterLocation::Path, TypeExpr::String, true),
            param("petId", ParameterLocation::Query, TypeExpr::Number, true),
        ]);

        let sig = build(&ep);
        let names: Vec<_> = sig.formals().iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, ["petId", "_class", "data1", "petId1", "config"]);
        assert_eq!(
            sig.call(&ep, "c"),
            "return this.c.get(`/a/${petId}/${_class}/${data1}`, { params: { petId: petId1 }, ...config });"
        );
    }

    #[test]
    fn test_form_data_body() {
        let mut ep = endpoint(HttpMethod::Post, "/pets/{petId}/upload");
        ep.parameters
            .push(param("petId", ParameterLocation::Path, TypeExpr::Number, true));
        ep.request_body = Some(ApiRequestBody::FormData {
            fields: vec![
                field("note", TypeExpr::String, false),
                field("file", TypeExpr::Binary, true),
                field("tags", TypeExpr::array(TypeExpr::Number), false),
                field("meta", TypeExpr::Named("Meta".to_string()), false),
            ],
            required: true,
            content_type: "multipart/form-data".to_string(),
            description: None,
        });

        let sig = build(&ep);

        assert_eq!(
            sig.rendered_formals(),
            [
                "petId: number",
                "file: File",
                "note?: string",
                "tags?: number[]",
                "meta?: Types.Meta",
                "config?: AxiosRequestConfig",
            ]
        );

        let mut builder = swagen_codegen::CodeBuilder::typescript();
        for fragment in sig.prelude() {
            builder.apply_fragment(fragment);
        }
        assert_eq!(
            builder.build(),
            "const formData = new FormData();\n\
             if (note !== undefined) {\n  formData.append('note', note);\n}\n\
             formData.append('file', file);\n\
             if (tags !== undefined) {\n  tags.forEach((item) => formData.append('tags', String(item)));\n}\n\
             if (meta !== undefined) {\n  formData.append('meta', JSON.stringify(meta));\n}\n"
        );
        assert_eq!(
            sig.call(&ep, "apiClient"),
            "return this.apiClient.post(`/pets/${petId}/upload`, formData, { ...config, headers: { 'Content-Type': 'multipart/form-data', ...config?.headers } });"
        );
    }

    #[test]
    fn test_form_values_follow_named_types() {
        let model = ApiModel {
            types: vec![
                TypeDescriptor {
                    name: "Status".to_string(),
                    raw_name: "Status".to_string(),
                    kind: TypeKind::Enum {
                        members: vec![Literal::String("sold".to_string())],
                    },
                    description: None,
                },
                TypeDescriptor {
                    name: "Count".to_string(),
                    raw_name: "Count".to_string(),
                    kind: TypeKind::Alias {
                        target: TypeExpr::Number,
                    },
                    description: None,
                },
            ],
            ..ApiModel::default()
        };

        let mut nullable = model.types[0].clone();
        nullable.name = "MaybeStatus".to_string();
        nullable.kind = TypeKind::Enum {
            members: vec![Literal::String("sold".to_string()), Literal::Null],
        };
        let model = ApiModel {
            types: [model.types, vec![nullable]].concat(),
            ..ApiModel::default()
        };

        let status = TypeExpr::Named("Status".to_string());
        let count = TypeExpr::Named("Count".to_string());
        assert_eq!(form_value(&status, &model, 0), FormValue::Direct);
        assert_eq!(
            form_value(&TypeExpr::Named("MaybeStatus".to_string()), &model, 0),
            FormValue::Direct
        );
        assert_eq!(form_value(&count, &model, 0), FormValue::Stringify);
        assert_eq!(
            form_value(&TypeExpr::Named("Missing".to_string()), &model, 0),
            FormValue::Json
        );
    }

    #[test]
    fn test_plain_text_body_sets_content_type() {
        let mut ep = endpoint(HttpMethod::Post, "/notes");
        ep.request_body = Some(ApiRequestBody::Json {
            ty: TypeExpr::String,
            required: true,
            content_type: Some("text/plain".to_string()),
            description: None,
        });

        assert_eq!(
            build(&ep).call(&ep, "c"),
            "return this.c.post('/notes', data, { ...config, headers: { 'Content-Type': 'text/plain', ...config?.headers } });"
        );
    }
}
