//! TypeScript class and method builders.

use swagen_codegen::{CodeFragment, Renderable};

/// A class method.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    params: Vec<String>,
    return_type: Option<String>,
    doc: Vec<String>,
    body: Vec<CodeFragment>,
    is_async: bool,
    is_private: bool,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            doc: Vec::new(),
            body: Vec::new(),
            is_async: false,
            is_private: false,
        }
    }

    /// A `constructor(...)` member.
    pub fn constructor() -> Self {
        Self::new("constructor")
    }

    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Add a formal parameter, already rendered (`id: number`).
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Append one JSDoc line.
    pub fn doc_line(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Append a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Append body lines.
    pub fn lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body
            .extend(lines.into_iter().map(|l| CodeFragment::Line(l.into())));
        self
    }

    /// Append a blank line to the body.
    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }

    /// Append arbitrary fragments to the body.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let visibility = if self.is_private { "private " } else { "" };
        let asyncness = if self.is_async { "async " } else { "" };
        let ret = self
            .return_type
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();
        format!(
            "{}{}{}({}){} {{",
            visibility,
            asyncness,
            self.name,
            self.params.join(", "),
            ret
        )
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JsDoc(self.doc.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: self.signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

/// An exported class. Members render in insertion order.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    members: Vec<CodeFragment>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Declare a field (`private client: AxiosInstance`).
    pub fn field(mut self, declaration: impl Into<String>) -> Self {
        self.members
            .push(CodeFragment::Line(format!("{};", declaration.into())));
        self
    }

    /// Add a `// comment` line.
    pub fn comment(mut self, text: impl AsRef<str>) -> Self {
        self.members
            .push(CodeFragment::Line(format!("// {}", text.as_ref())));
        self
    }

    pub fn blank(mut self) -> Self {
        self.members.push(CodeFragment::Blank);
        self
    }

    /// Add any renderable member, usually a [`Method`].
    pub fn member(mut self, member: impl Renderable) -> Self {
        self.members.extend(member.to_fragments());
        self
    }

}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!("export class {} {{", self.name),
            body: self.members.clone(),
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_method_signature() {
        let m = Method::new("getPet")
            .asynchronous()
            .param("petId: number")
            .param("config?: AxiosRequestConfig")
            .returns("Promise<Types.Pet>")
            .line("return this.apiClient.get(`/pet/${petId}`, { ...config });");

        assert_eq!(
            render(&m),
            "async getPet(petId: number, config?: AxiosRequestConfig): Promise<Types.Pet> {\n  return this.apiClient.get(`/pet/${petId}`, { ...config });\n}\n"
        );
    }

    #[test]
    fn test_class_members() {
        let class = Class::new("ApiClient")
            .field("private apiClient: AxiosInstance")
            .blank()
            .comment("pet")
            .member(
                Method::new("clear")
                    .doc_line("Reset everything")
                    .line("this.reset();"),
            );

        assert_eq!(
            render(&class),
            "export class ApiClient {\n  private apiClient: AxiosInstance;\n\n  // pet\n  /** Reset everything */\n  clear() {\n    this.reset();\n  }\n}\n"
        );
    }

    #[test]
    fn test_private_method_without_return_type() {
        let m = Method::new("setupInterceptors")
            .private()
            .param("interceptors?: Types.InterceptorConfig");
        assert_eq!(
            render(&m),
            "private setupInterceptors(interceptors?: Types.InterceptorConfig) {\n}\n"
        );
    }
}
