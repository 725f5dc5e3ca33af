//! Endpoint extraction.

use swagen_ir::{
    ApiParameter, ApiRequestBody, ApiResponse, EndpointDescriptor, FormField, HttpMethod, TypeExpr,
};
use swagen_schema::{
    Operation, Parameter, ParameterLocation, ParameterOrRef, PathItem, RequestBody, SchemaNode,
};

use super::Resolver;

const MULTIPART: &str = "multipart/form-data";

impl<'a> Resolver<'a> {
    /// One descriptor per operation, paths in document order and verbs in
    /// fixed order.
    pub(super) fn endpoints(&mut self) -> Vec<EndpointDescriptor> {
        let document = self.document;
        let mut endpoints = Vec::new();
        for (path, item) in &document.paths {
            for (method, op) in item.operations() {
                endpoints.push(self.endpoint(path, item, method, op));
            }
        }
        endpoints
    }

    fn endpoint(
        &mut self,
        path: &str,
        item: &'a PathItem,
        method: HttpMethod,
        op: &'a Operation,
    ) -> EndpointDescriptor {
        let (body_params, params): (Vec<&Parameter>, Vec<&Parameter>) = self
            .merged_parameters(item, op)
            .into_iter()
            .partition(|p| p.location.is_body());

        let parameters = params.iter().map(|p| self.api_parameter(p)).collect();
        let request_body = self.request_body(&body_params, op.request_body.as_ref());
        let responses = op
            .responses
            .iter()
            .map(|(code, response)| ApiResponse {
                status_code: code.clone(),
                ty: match response.body_schema() {
                    Some(schema) => self.resolve_type(schema),
                    None => TypeExpr::Void,
                },
                description: response.description.clone(),
            })
            .collect();

        let operation_id = op
            .operation_id
            .as_deref()
            .filter(|id| !id.trim().is_empty());
        let method_name = match operation_id {
            Some(id) => self.methods.name(id),
            None => self.methods.fresh(&derived_method_name(method, path)),
        };

        EndpointDescriptor {
            path: path.to_string(),
            method,
            operation_id: operation_id.map(str::to_string),
            method_name,
            summary: op.summary.clone(),
            description: op.description.clone(),
            parameters,
            request_body,
            responses,
            tags: op.tags.clone(),
            deprecated: op.deprecated,
        }
    }

    /// Path-level parameters followed by operation parameters; an operation
    /// parameter replaces a path-level one with the same name and location.
    fn merged_parameters(&self, item: &'a PathItem, op: &'a Operation) -> Vec<&'a Parameter> {
        let mut merged: Vec<&'a Parameter> = Vec::new();
        for entry in item.parameters.iter().chain(&op.parameters) {
            let Some(param) = self.parameter(entry) else {
                continue;
            };
            match merged
                .iter()
                .position(|p| p.name == param.name && p.location == param.location)
            {
                Some(index) => merged[index] = param,
                None => merged.push(param),
            }
        }
        merged
    }

    fn parameter(&self, entry: &'a ParameterOrRef) -> Option<&'a Parameter> {
        match entry {
            ParameterOrRef::Inline(param) => Some(param),
            ParameterOrRef::Ref(r) => {
                let found = self.document.parameter_by_ref(&r.reference);
                if found.is_none() {
                    tracing::debug!(reference = %r.reference, "dropping unresolved parameter");
                }
                found
            }
        }
    }

    fn api_parameter(&mut self, param: &Parameter) -> ApiParameter {
        ApiParameter {
            name: param.name.clone(),
            location: param.location,
            ty: self.resolve_type(&param.value_schema()),
            required: param.required,
            description: param.description.clone(),
        }
    }

    /// Swagger 2 `in: body` first, then `in: formData`, then the OpenAPI 3
    /// request body.
    fn request_body(
        &mut self,
        body_params: &[&Parameter],
        body: Option<&'a RequestBody>,
    ) -> Option<ApiRequestBody> {
        if let Some(param) = body_params
            .iter()
            .find(|p| p.location == ParameterLocation::Body)
        {
            return Some(ApiRequestBody::Json {
                ty: match &param.schema {
                    Some(schema) => self.resolve_type(schema),
                    None => TypeExpr::Unknown,
                },
                required: param.required,
                content_type: None,
                description: param.description.clone(),
            });
        }

        let form_params: Vec<&Parameter> = body_params
            .iter()
            .copied()
            .filter(|p| p.location == ParameterLocation::FormData)
            .collect();
        if !form_params.is_empty() {
            let fields: Vec<FormField> = form_params
                .iter()
                .map(|p| FormField {
                    name: p.name.clone(),
                    ty: self.resolve_type(&p.value_schema()),
                    required: p.required,
                    description: p.description.clone(),
                })
                .collect();
            return Some(ApiRequestBody::FormData {
                required: fields.iter().any(|f| f.required),
                fields,
                content_type: MULTIPART.to_string(),
                description: None,
            });
        }

        let body = body?;
        let Some((content_type, media)) = body.first_media() else {
            return Some(ApiRequestBody::Json {
                ty: TypeExpr::Unknown,
                required: body.required,
                content_type: None,
                description: body.description.clone(),
            });
        };

        if content_type == MULTIPART
            && let Some(form) = media
                .schema
                .as_ref()
                .and_then(|schema| self.deref(schema))
                .filter(|schema| schema.properties.is_some())
        {
            return Some(ApiRequestBody::FormData {
                fields: self.form_fields(form),
                required: body.required,
                content_type: content_type.to_string(),
                description: body.description.clone(),
            });
        }

        Some(ApiRequestBody::Json {
            ty: match &media.schema {
                Some(schema) => self.resolve_type(schema),
                None => TypeExpr::Unknown,
            },
            required: body.required,
            content_type: Some(content_type.to_string()),
            description: body.description.clone(),
        })
    }

    fn form_fields(&mut self, schema: &SchemaNode) -> Vec<FormField> {
        schema
            .properties
            .iter()
            .flatten()
            .map(|(name, prop)| FormField {
                name: name.clone(),
                ty: self.resolve_type(prop),
                required: schema.requires(name),
                description: prop.description.clone(),
            })
            .collect()
    }
}

/// `{verb}_{last literal path segment}`, `api` when the path has none.
fn derived_method_name(method: HttpMethod, path: &str) -> String {
    let segment = path
        .split('/')
        .filter(|part| !part.is_empty() && !part.starts_with('{'))
        .next_back()
        .unwrap_or("api");
    format!("{}_{}", method.as_str(), segment)
}

#[cfg(test)]
mod tests {
    use swagen_ir::ApiModel;
    use swagen_schema::SchemaDocument;

    use super::*;
    use crate::language::NamingConvention;

    fn resolve(json: &str) -> ApiModel {
        let document: SchemaDocument =
            serde_json::from_str(json).expect("Failed to parse test document");
        Resolver::new(&document, NamingConvention::default()).resolve()
    }

    #[test]
    fn test_get_user_by_id() {
        let model = resolve(
            r##"{
                "swagger": "2.0",
                "info": { "title": "Users", "version": "1.0" },
                "paths": {
                    "/users/{id}": {
                        "get": {
                            "operationId": "getUser",
                            "parameters": [{ "name": "id", "in": "path", "type": "integer", "required": true }],
                            "responses": { "200": { "description": "ok", "schema": { "$ref": "#/definitions/User" } } }
                        }
                    }
                },
                "definitions": {
                    "User": { "type": "object", "required": ["id", "name"],
                              "properties": { "id": { "type": "integer" }, "name": { "type": "string" } } }
                }
            }"##,
        );

        assert_eq!(model.endpoints.len(), 1);
        let ep = &model.endpoints[0];
        assert_eq!(ep.method, HttpMethod::Get);
        assert_eq!(
            ep.parameters,
            [ApiParameter {
                name: "id".into(),
                location: ParameterLocation::Path,
                ty: TypeExpr::Number,
                required: true,
                description: None,
            }]
        );
        assert!(ep.request_body.is_none());
        assert_eq!(ep.success_response().unwrap().ty, TypeExpr::Named("User".into()));

        let user = model.find_type("User").unwrap();
        assert!(user.property("id").unwrap().required);
        assert!(user.property("name").unwrap().required);
    }

    #[test]
    fn test_swagger_body_parameter_becomes_request_body() {
        let model = resolve(
            r##"{
                "swagger": "2.0", "info": {},
                "paths": { "/users": { "post": {
                    "operationId": "createUser",
                    "parameters": [{ "name": "body", "in": "body", "required": true, "schema": { "$ref": "#/definitions/NewUser" } }],
                    "responses": { "201": { "description": "created" } }
                } } },
                "definitions": { "NewUser": { "type": "object", "required": ["name"], "properties": { "name": { "type": "string" } } } }
            }"##,
        );

        let ep = &model.endpoints[0];
        assert!(ep.parameters.is_empty());
        assert_eq!(
            ep.request_body,
            Some(ApiRequestBody::Json {
                ty: TypeExpr::Named("NewUser".into()),
                required: true,
                content_type: None,
                description: None,
            })
        );
        assert_eq!(ep.responses[0].ty, TypeExpr::Void);
    }

    #[test]
    fn test_form_data_shapes_converge() {
        let swagger = resolve(
            r#"{
                "swagger": "2.0", "info": {},
                "paths": { "/upload": { "post": {
                    "operationId": "upload",
                    "parameters": [
                        { "name": "file", "in": "formData", "type": "file", "required": true },
                        { "name": "note", "in": "formData", "type": "string" }
                    ],
                    "responses": {}
                } } }
            }"#,
        );
        let openapi = resolve(
            r##"{
                "openapi": "3.0.0", "info": {},
                "paths": { "/upload": { "post": {
                    "operationId": "upload",
                    "requestBody": { "required": true, "content": { "multipart/form-data": {
                        "schema": { "$ref": "#/components/schemas/Upload" } } } },
                    "responses": {}
                } } },
                "components": { "schemas": { "Upload": { "type": "object", "required": ["file"],
                    "properties": { "file": { "type": "string", "format": "binary" }, "note": { "type": "string" } } } } }
            }"##,
        );

        let fields = |model: &ApiModel| match &model.endpoints[0].request_body {
            Some(ApiRequestBody::FormData { fields, required, content_type, .. }) => {
                assert!(*required);
                assert_eq!(content_type, MULTIPART);
                fields
                    .iter()
                    .map(|f| (f.name.clone(), f.ty.clone(), f.required))
                    .collect::<Vec<_>>()
            }
            other => panic!("expected form data, got {:?}", other),
        };

        let expected = vec![
            ("file".to_string(), TypeExpr::Binary, true),
            ("note".to_string(), TypeExpr::String, false),
        ];
        assert_eq!(fields(&swagger), expected);
        assert_eq!(fields(&openapi), expected);
        assert!(swagger.endpoints[0].parameters.is_empty());
    }

    #[test]
    fn test_body_wins_over_form_data() {
        let model = resolve(
            r#"{
                "swagger": "2.0", "info": {},
                "paths": { "/x": { "post": {
                    "parameters": [
                        { "name": "f", "in": "formData", "type": "string" },
                        { "name": "b", "in": "body", "schema": { "type": "string" } }
                    ],
                    "responses": {}
                } } }
            }"#,
        );
        assert!(matches!(
            model.endpoints[0].request_body,
            Some(ApiRequestBody::Json { ty: TypeExpr::String, .. })
        ));
    }

    #[test]
    fn test_openapi_json_body_and_responses() {
        let model = resolve(
            r##"{
                "openapi": "3.0.0", "info": {},
                "servers": [{ "url": "https://api.example.com" }],
                "paths": { "/pets": { "post": {
                    "requestBody": { "description": "Pet to add", "content": {
                        "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } } },
                    "responses": {
                        "200": { "description": "ok", "content": { "application/json": {
                            "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } } } } },
                        "default": { "description": "error" }
                    }
                } } },
                "components": { "schemas": { "Pet": { "type": "object", "properties": { "id": { "type": "integer" } } } } }
            }"##,
        );

        assert_eq!(model.base_url, "https://api.example.com");
        let ep = &model.endpoints[0];
        assert_eq!(
            ep.request_body,
            Some(ApiRequestBody::Json {
                ty: TypeExpr::Named("Pet".into()),
                required: false,
                content_type: Some("application/json".into()),
                description: Some("Pet to add".into()),
            })
        );
        let codes: Vec<_> = ep.responses.iter().map(|r| r.status_code.as_str()).collect();
        assert_eq!(codes, ["200", "default"]);
        assert_eq!(ep.responses[0].ty.to_string(), "Pet[]");
        assert_eq!(ep.responses[1].ty, TypeExpr::Void);
    }

    #[test]
    fn test_path_level_parameters_merge() {
        let model = resolve(
            r##"{
                "swagger": "2.0", "info": {},
                "parameters": { "Limit": { "name": "limit", "in": "query", "type": "integer" } },
                "paths": { "/orgs/{org}/members": {
                    "parameters": [
                        { "name": "org", "in": "path", "type": "string", "required": true },
                        { "name": "q", "in": "query", "type": "string" }
                    ],
                    "get": {
                        "parameters": [
                            { "name": "q", "in": "query", "type": "string", "required": true },
                            { "$ref": "#/parameters/Limit" },
                            { "$ref": "#/parameters/Missing" }
                        ],
                        "responses": {}
                    }
                } }
            }"##,
        );

        let params: Vec<_> = model.endpoints[0]
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.required))
            .collect();
        assert_eq!(params, [("org", true), ("q", true), ("limit", false)]);
    }

    #[test]
    fn test_method_names() {
        let model = resolve(
            r#"{
                "swagger": "2.0", "info": {},
                "paths": {
                    "/": { "get": { "responses": {} } },
                    "/users": { "get": { "responses": {} }, "post": { "operationId": "create-user", "responses": {} } },
                    "/admin/users": { "get": { "responses": {} } },
                    "/users/{id}": { "delete": { "operationId": "delete", "responses": {} } },
                    "/orders": { "get": { "operationId": "获取订单", "responses": {} } }
                }
            }"#,
        );

        let names: Vec<_> = model.endpoints.iter().map(|e| e.method_name.as_str()).collect();
        assert_eq!(&names[..5], ["getApi", "getUsers", "createUser", "getUsers1", "delete"]);
        assert!(names[5].chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(model.endpoints[0].operation_id, None);
    }

    #[test]
    fn test_non_ascii_definitions_stay_distinct() {
        let model = resolve(
            r##"{
                "swagger": "2.0", "info": {},
                "paths": { "/a": { "get": { "responses": { "200": { "schema": { "$ref": "#/definitions/订单" } } } } } },
                "definitions": { "用户": { "type": "object", "properties": {} }, "订单": { "type": "object", "properties": {} } }
            }"##,
        );

        let user = &model.types[0].name;
        let order = &model.types[1].name;
        assert_ne!(user, order);
        assert_eq!(
            model.endpoints[0].success_response().unwrap().ty,
            TypeExpr::Named(order.clone())
        );
    }

    #[test]
    fn test_derived_method_name() {
        assert_eq!(derived_method_name(HttpMethod::Get, "/"), "get_api");
        assert_eq!(derived_method_name(HttpMethod::Put, "/pets/{petId}"), "put_pets");
        assert_eq!(derived_method_name(HttpMethod::Post, "/store/order"), "post_order");
    }
}
