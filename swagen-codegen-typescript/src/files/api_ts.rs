//! api.ts client generator.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use swagen_core::{FileRules, GeneratedFile, capitalize, single_quoted};
use swagen_ir::{ApiModel, DEFAULT_TAG, EndpointDescriptor};

use crate::{
    ast::{Class, Const, Export, Import, Interface, Method},
    code_file::CodeFile,
    qualify::{TYPES_NAMESPACE, TypeQualifier},
    signature::MethodSignature,
};

const HEADER: &str = "// Auto-generated API client\n// Do not edit this file manually\n";

/// Types `api.ts` declares; `index.ts` re-exports them next to `types.ts`.
pub const CLIENT_TYPES: &[&str] = &["ApiClient", "ApiClientConfig"];

/// Members of `ApiClient` besides the endpoint methods and the transport field.
pub const CLIENT_METHODS: &[&str] = &[
    "setupInterceptors",
    "setRequestInterceptor",
    "setResponseInterceptor",
    "clearInterceptors",
];

/// Request timeout baked into the generated client.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// The `api.ts` module: an axios-backed `ApiClient` class with one method
/// per endpoint, plus a default instance.
pub struct ApiTs<'a> {
    model: &'a ApiModel,
    base_url: &'a str,
    instance: &'a str,
    prefix: &'a str,
}

impl<'a> ApiTs<'a> {
    pub fn new(model: &'a ApiModel, base_url: &'a str, instance: &'a str, prefix: &'a str) -> Self {
        Self {
            model,
            base_url,
            instance,
            prefix,
        }
    }

    fn qualifier(&self) -> TypeQualifier<'a> {
        TypeQualifier::namespaced(self.prefix)
    }

    fn config_interface(&self) -> Interface {
        Interface::new("ApiClientConfig")
            .extends("AxiosRequestConfig")
            .optional_field("baseURL", "string")
            .optional_field("interceptors", self.qualifier().wrapper("InterceptorConfig"))
    }

    fn constructor(&self) -> Method {
        let field = format!("this.{}", self.instance);
        Method::constructor()
            .param("config: ApiClientConfig = {}")
            .line(format!(
                "const {{ baseURL = {}, interceptors, ...axiosConfig }} = config;",
                single_quoted(self.base_url)
            ))
            .blank()
            .lines([
                format!("{} = axios.create({{", field),
                "  baseURL,".to_string(),
                format!("  timeout: {},", DEFAULT_TIMEOUT_MS),
                "  headers: {".to_string(),
                "    'Content-Type': 'application/json',".to_string(),
                "  },".to_string(),
                "  ...axiosConfig,".to_string(),
                "});".to_string(),
            ])
            .blank()
            .line("this.setupInterceptors(interceptors);")
    }

    fn setup_interceptors(&self) -> Method {
        let q = self.qualifier();
        let field = format!("this.{}", self.instance);
        Method::new("setupInterceptors")
            .private()
            .param(format!("interceptors?: {}", q.wrapper("InterceptorConfig")))
            .lines([
                "const requestOnFulfilled = interceptors?.request?.onFulfilled || ((config) => config);".to_string(),
                "const requestOnRejected = interceptors?.request?.onRejected || ((error) => Promise.reject(error));".to_string(),
                format!("{}.interceptors.request.use(requestOnFulfilled, requestOnRejected);", field),
            ])
            .blank()
            .lines([
                "const responseOnFulfilled = interceptors?.response?.onFulfilled || ((response) => response.data);".to_string(),
                "const responseOnRejected = interceptors?.response?.onRejected || ((error) => {".to_string(),
                format!("  const apiError: {} = {{", q.wrapper("ApiError")),
                "    message: error.message,".to_string(),
                "    status: error.response?.status,".to_string(),
                "    code: error.code,".to_string(),
                "  };".to_string(),
                "  return Promise.reject(apiError);".to_string(),
                "});".to_string(),
                format!("{}.interceptors.response.use(responseOnFulfilled, responseOnRejected);", field),
            ])
    }

    /// `set{Request,Response}Interceptor`; the default hook returns its argument.
    fn interceptor_setter(&self, name: &str, kind: &str, arg: &str) -> Method {
        let q = self.qualifier();
        let wrapper = format!("{}Interceptor", capitalize(kind));
        Method::new(name)
            .param(format!("interceptor: {}", q.wrapper(&wrapper)))
            .lines([
                format!("this.{}.interceptors.{}.use(", self.instance, kind),
                format!("  interceptor.onFulfilled || (({}) => {}),", arg, arg),
                "  interceptor.onRejected || ((error) => Promise.reject(error))".to_string(),
                ");".to_string(),
            ])
    }

    fn clear_interceptors(&self) -> Method {
        Method::new("clearInterceptors")
            .doc_line("Remove every interceptor and restore the defaults.")
            .lines([
                format!("this.{}.interceptors.request.clear();", self.instance),
                format!("this.{}.interceptors.response.clear();", self.instance),
                "this.setupInterceptors();".to_string(),
            ])
    }

    fn endpoint_method(&self, endpoint: &EndpointDescriptor) -> Method {
        let signature = MethodSignature::new(endpoint, self.model, &self.qualifier());

        let mut method = Method::new(&endpoint.method_name)
            .asynchronous()
            .params(signature.rendered_formals())
            .returns(signature.return_type());

        for line in endpoint.summary.iter().flat_map(|s| s.lines()) {
            method = method.doc_line(line);
        }
        if let Some(description) = &endpoint.description
            && endpoint.summary.as_deref() != Some(description.as_str())
        {
            for line in description.lines() {
                method = method.doc_line(line);
            }
        }
        if endpoint.deprecated {
            method = method.doc_line("@deprecated");
        }

        method
            .fragments(signature.prelude())
            .line(signature.call(endpoint, self.instance))
    }

    /// Endpoints grouped by primary tag, groups in first-seen order.
    fn groups(&self) -> IndexMap<&'a str, Vec<&'a EndpointDescriptor>> {
        let mut groups: IndexMap<&str, Vec<&EndpointDescriptor>> = IndexMap::new();
        for endpoint in &self.model.endpoints {
            groups.entry(endpoint.primary_tag()).or_default().push(endpoint);
        }
        groups
    }

    fn client_class(&self) -> Class {
        let mut class = Class::new("ApiClient")
            .field(format!("private {}: AxiosInstance", self.instance))
            .blank()
            .member(self.constructor())
            .blank()
            .member(self.setup_interceptors())
            .blank()
            .comment("Interceptors can also be replaced at runtime")
            .member(self.interceptor_setter("setRequestInterceptor", "request", "config"))
            .blank()
            .member(self.interceptor_setter("setResponseInterceptor", "response", "response"))
            .blank()
            .member(self.clear_interceptors());

        for (tag, endpoints) in self.groups() {
            class = class.blank();
            if tag != DEFAULT_TAG {
                class = class.comment(format!("{} endpoints", tag));
            }
            for (i, endpoint) in endpoints.into_iter().enumerate() {
                if i > 0 {
                    class = class.blank();
                }
                class = class.member(self.endpoint_method(endpoint));
            }
        }
        class
    }
}

impl GeneratedFile for ApiTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("api.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(HEADER)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(
                Import::new("axios")
                    .default("axios")
                    .named("AxiosInstance")
                    .named("AxiosRequestConfig"),
            )
            .import(Import::new("./types").namespace(TYPES_NAMESPACE))
            .add(self.config_interface())
            .add(self.client_class())
            .add(Const::new("apiClient", "new ApiClient()").export())
            .export(Export::default_of("apiClient"))
            .render()
    }
}
