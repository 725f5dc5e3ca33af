//! Generator configuration record.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default name of the configuration file written by `swagen init`.
pub const DEFAULT_CONFIG_FILE: &str = "swagen.config.json";

/// Default name of the private transport field on the generated client.
pub const DEFAULT_INSTANCE_NAME: &str = "apiClient";

/// Options recognised by the generator.
///
/// Keys follow the JSON config file format (`baseURL`, `typePrefix`,
/// `axiosInstance`, `generateClient`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Path or `http(s)://` URL of the API description.
    pub input: String,
    /// Directory that receives `types.ts`, `api.ts` and `index.ts`.
    pub output: PathBuf,
    /// Base URL baked into the client constructor. Derived from the document when absent.
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Prefix applied to every generated type name.
    #[serde(default)]
    pub type_prefix: String,
    /// Name of the private axios field on the client class.
    #[serde(default = "default_instance_name")]
    pub axios_instance: String,
    /// Whether `api.ts` is generated.
    #[serde(default = "default_true")]
    pub generate_client: bool,
    /// Runtime interceptor settings. Accepted for compatibility; the generated
    /// client receives interceptors through its constructor instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<serde_json::Value>,
}

fn default_instance_name() -> String {
    DEFAULT_INSTANCE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl GeneratorConfig {
    /// Create a config with defaults for everything but input and output.
    pub fn new(input: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            base_url: None,
            type_prefix: String::new(),
            axios_instance: default_instance_name(),
            generate_client: true,
            interceptors: None,
        }
    }

    /// The template written by `swagen init`.
    pub fn template() -> Self {
        Self {
            base_url: Some("https://api.example.com".to_string()),
            ..Self::new("./swagger.json", "./src/api")
        }
    }

    /// Parse a config from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).wrap_err("invalid generator config")
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&content).wrap_err_with(|| format!("in {}", path.display()))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Whether the input should be fetched over HTTP.
    pub fn is_remote_input(&self) -> bool {
        self.input.starts_with("http://") || self.input.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_defaults() {
        let config =
            GeneratorConfig::from_json(r#"{ "input": "./api.json", "output": "./gen" }"#).unwrap();

        assert_eq!(config.input, "./api.json");
        assert_eq!(config.output, PathBuf::from("./gen"));
        assert_eq!(config.base_url, None);
        assert_eq!(config.type_prefix, "");
        assert_eq!(config.axios_instance, "apiClient");
        assert!(config.generate_client);
    }

    #[test]
    fn test_full_config() {
        let config = GeneratorConfig::from_json(
            r#"{
                "input": "https://petstore.swagger.io/v2/swagger.json",
                "output": "./src/api",
                "baseURL": "https://api.example.com",
                "typePrefix": "I",
                "axiosInstance": "http",
                "generateClient": false,
                "interceptors": { "request": true }
            }"#,
        )
        .unwrap();

        assert!(config.is_remote_input());
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.type_prefix, "I");
        assert_eq!(config.axios_instance, "http");
        assert!(!config.generate_client);
        assert!(config.interceptors.is_some());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let err = GeneratorConfig::from_json(r#"{ "output": "./gen" }"#).unwrap_err();
        assert!(format!("{:?}", err).contains("input"));
    }

    #[test]
    fn test_template_serializes_with_original_keys() {
        let json = GeneratorConfig::template().to_json_pretty().unwrap();

        assert!(json.contains("\"baseURL\": \"https://api.example.com\""));
        assert!(json.contains("\"typePrefix\": \"\""));
        assert!(json.contains("\"axiosInstance\": \"apiClient\""));
        assert!(json.contains("\"generateClient\": true"));
        assert!(!json.contains("interceptors"));

        let parsed = GeneratorConfig::from_json(&json).unwrap();
        assert_eq!(parsed, GeneratorConfig::template());
    }
}
