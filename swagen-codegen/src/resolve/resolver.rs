//! Resolver state and entry point.

use std::collections::HashSet;

use indexmap::IndexMap;
use swagen_ir::{ApiInfo, ApiModel};
use swagen_schema::{SchemaDocument, SchemaNode, ref_leaf};

use super::{NameKind, Sanitizer};
use crate::language::NamingConvention;

/// Identifiers the target language declares itself.
///
/// Definitions and operations whose sanitized names land on one of these
/// get a numeric suffix instead.
#[derive(Debug, Clone, Default)]
pub struct ReservedNames {
    pub types: Vec<String>,
    pub methods: Vec<String>,
}

impl ReservedNames {
    pub fn types(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.types.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn methods(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.methods.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Builds the intermediate model from a parsed document.
///
/// All name mappings live on the instance; two resolvers never share state.
pub struct Resolver<'a> {
    pub(super) document: &'a SchemaDocument,
    pub(super) named: IndexMap<&'a str, &'a SchemaNode>,
    pub(super) types: Sanitizer,
    pub(super) methods: Sanitizer,
}

impl<'a> Resolver<'a> {
    pub fn new(document: &'a SchemaDocument, naming: NamingConvention) -> Self {
        Self::with_reserved(document, naming, &ReservedNames::default())
    }

    /// Create a resolver, registering every definition name in document order
    /// after `reserved` has been claimed.
    pub fn with_reserved(
        document: &'a SchemaDocument,
        naming: NamingConvention,
        reserved: &ReservedNames,
    ) -> Self {
        let named = document.named_schemas();
        let mut types = Sanitizer::new(NameKind::Type, naming);
        types.reserve(reserved.types.iter().cloned());
        for raw in named.keys() {
            types.name(raw);
        }
        let mut methods = Sanitizer::new(NameKind::Method, naming);
        methods.reserve(reserved.methods.iter().cloned());

        Self {
            document,
            named,
            types,
            methods,
        }
    }

    /// Resolve the whole document.
    pub fn resolve(mut self) -> ApiModel {
        let types = self.type_descriptors();
        let endpoints = self.endpoints();
        tracing::debug!(
            types = types.len(),
            endpoints = endpoints.len(),
            "resolved document"
        );

        ApiModel {
            info: ApiInfo {
                title: self.document.info.title.clone(),
                version: self.document.info.version.clone(),
                description: self.document.info.description.clone(),
            },
            base_url: base_url(self.document),
            endpoints,
            types,
        }
    }

    /// The sanitized type name a `$ref` points at.
    ///
    /// References that cannot be found still produce the sanitized leaf name.
    pub(super) fn ref_name(&mut self, reference: &str) -> String {
        if self.document.schema_by_ref(reference).is_none() {
            tracing::debug!(reference, "unresolved reference, using leaf name");
        }
        self.types.name(&ref_leaf(reference))
    }

    /// Follow a `$ref` chain to the node that carries the shape.
    ///
    /// Returns `None` when the chain leaves the document or comes back to a
    /// pointer it already visited.
    pub(super) fn deref<'n>(&self, node: &'n SchemaNode) -> Option<&'n SchemaNode>
    where
        'a: 'n,
    {
        let mut current = node;
        let mut visiting = HashSet::new();
        while let Some(reference) = &current.reference {
            if !visiting.insert(reference.as_str()) {
                tracing::debug!(reference, "reference cycle");
                return None;
            }
            current = self.document.schema_by_ref(reference)?;
        }
        Some(current)
    }

    /// Whether following the `$ref` chain from `node` revisits a pointer.
    pub(super) fn ref_cycles(&self, node: &SchemaNode) -> bool {
        let mut current = node;
        let mut visiting = HashSet::new();
        while let Some(reference) = &current.reference {
            if !visiting.insert(reference.as_str()) {
                return true;
            }
            match self.document.schema_by_ref(reference) {
                Some(next) => current = next,
                None => return false,
            }
        }
        false
    }
}

/// `servers[0].url` for OpenAPI 3, `scheme://host/basePath` for Swagger 2.
pub(super) fn base_url(document: &SchemaDocument) -> String {
    if let Some(server) = document.servers.first() {
        return server.url.clone();
    }

    let scheme = document.schemes.first().map_or("https", String::as_str);
    let host = document.host.as_deref().unwrap_or("localhost");
    let base_path = document.base_path.as_deref().unwrap_or("");
    format!("{}://{}{}", scheme, host, base_path)
}
