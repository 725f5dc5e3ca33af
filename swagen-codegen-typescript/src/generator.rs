//! TypeScript axios client generator.

use std::path::Path;

use eyre::{Result, ensure};
use swagen_codegen::{
    ReservedNames,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{CompilationContext, Pipeline},
};
use swagen_core::{
    DEFAULT_INSTANCE_NAME, File, GeneratedFile, GeneratorConfig, WriteResult, is_identifier,
};
use swagen_ir::ApiModel;

use crate::{
    TS_NAMING,
    files::{ApiTs, CLIENT_METHODS, CLIENT_TYPES, IndexTs, TypesTs, WRAPPER_TYPES},
};

/// Options that shape the generated TypeScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Overrides the base URL derived from the document.
    pub base_url: Option<String>,
    pub type_prefix: String,
    pub axios_instance: String,
    pub generate_client: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            type_prefix: String::new(),
            axios_instance: DEFAULT_INSTANCE_NAME.to_string(),
            generate_client: true,
        }
    }
}

impl ClientOptions {
    /// Identifiers the generated files declare themselves.
    ///
    /// Unprefixed definitions share a namespace with the wrapper and client
    /// types; endpoint methods share `ApiClient` with its built-in members.
    pub fn reserved_names(&self) -> ReservedNames {
        let reserved = ReservedNames::default()
            .methods(CLIENT_METHODS.iter().copied())
            .methods([self.axios_instance.as_str()]);
        if self.type_prefix.is_empty() {
            reserved.types(WRAPPER_TYPES.iter().chain(CLIENT_TYPES).copied())
        } else {
            reserved
        }
    }

    /// A pipeline whose resolver keeps clear of [`Self::reserved_names`].
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(TS_NAMING).reserve(self.reserved_names())
    }
}

impl From<&GeneratorConfig> for ClientOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            type_prefix: config.type_prefix.clone(),
            axios_instance: config.axios_instance.clone(),
            generate_client: config.generate_client,
        }
    }
}

/// Generator for `types.ts`, `api.ts` and `index.ts`.
#[derive(Debug)]
pub struct Generator {
    model: ApiModel,
    options: ClientOptions,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.contents(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Render everything first so a failure cannot leave a partial output.
        let rendered: Vec<(String, File)> = self
            .files()
            .iter()
            .map(|file| {
                let name = file.path(Path::new("")).display().to_string();
                let out = File::new(file.path(output_dir), file.contents()).with_rules(file.rules());
                (name, out)
            })
            .collect();

        tracing::debug!(language = self.language(), files = rendered.len(), "writing output");
        let mut result = GenerateResult::default();
        for (name, file) in rendered {
            match file.write()? {
                WriteResult::Written => {
                    tracing::info!(file = %file.path().display(), "wrote");
                    result.written.push(name);
                }
                WriteResult::Skipped => {
                    tracing::debug!(file = %file.path().display(), "skipped existing file");
                    result.skipped.push(name);
                }
            }
        }
        Ok(result)
    }
}

impl Generator {
    /// Create a generator, rejecting options that would produce invalid TypeScript.
    pub fn new(model: ApiModel, options: ClientOptions) -> Result<Self> {
        ensure!(
            is_identifier(&options.axios_instance),
            "axiosInstance '{}' is not a valid identifier",
            options.axios_instance
        );
        ensure!(
            options.type_prefix.is_empty() || is_identifier(&options.type_prefix),
            "typePrefix '{}' cannot start a type name",
            options.type_prefix
        );
        Ok(Self { model, options })
    }

    /// Create a generator from a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext, options: ClientOptions) -> Result<Self> {
        Self::new(ctx.take_model()?, options)
    }

    pub fn model(&self) -> &ApiModel {
        &self.model
    }

    /// Base URL used as the client constructor default.
    pub fn base_url(&self) -> &str {
        self.options
            .base_url
            .as_deref()
            .unwrap_or(&self.model.base_url)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> =
            vec![Box::new(TypesTs::new(&self.model, &self.options.type_prefix))];
        if self.options.generate_client {
            files.push(Box::new(ApiTs::new(
                &self.model,
                self.base_url(),
                &self.options.axios_instance,
                &self.options.type_prefix,
            )));
        }
        files.push(Box::new(IndexTs::new(self.options.generate_client)));
        files
    }
}
