//! `export` statements.

use swagen_codegen::{CodeFragment, Renderable};

/// A standalone export statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    /// `export * from 'module';`
    All { from: String },
    /// `export { a, b };` or, with a module, `export { a, b } from 'module';`
    Named { names: Vec<String>, from: Option<String> },
    /// `export default name;`
    Default(String),
}

impl Export {
    pub fn all_from(module: impl Into<String>) -> Self {
        Export::All {
            from: module.into(),
        }
    }

    pub fn default_of(name: impl Into<String>) -> Self {
        Export::Default(name.into())
    }

    pub fn names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Export::Named {
            names: names.into_iter().map(Into::into).collect(),
            from: None,
        }
    }

    /// Turn a local named export into a re-export. Other forms are unchanged.
    pub fn from(self, module: impl Into<String>) -> Self {
        match self {
            Export::Named { names, .. } => Export::Named {
                names,
                from: Some(module.into()),
            },
            other => other,
        }
    }

    fn statement(&self) -> String {
        match self {
            Export::All { from } => format!("export * from '{}';", from),
            Export::Named { names, from } => {
                let list = format!("export {{ {} }}", names.join(", "));
                match from {
                    Some(module) => format!("{} from '{}';", list, module),
                    None => format!("{};", list),
                }
            }
            Export::Default(name) => format!("export default {};", name),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
