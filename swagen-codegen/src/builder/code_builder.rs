//! Lays out code fragments as indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated text, tracking the current indentation level.
///
/// ```
/// use swagen_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "export interface Pet {",
///     vec![CodeFragment::line("id: number;")],
///     Some("}".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "export interface Pet {\n  id: number;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            buffer: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Append one line at the current level.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Append an empty line; never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.push_line(&s),
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.level -= 1;
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::JsDoc(lines) => self.push_jsdoc(&lines),
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, s: &str) {
        self.buffer.push_str(&self.indent.repeat(self.level));
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// `/** text */` for one line, a starred block otherwise; `*/` is escaped.
    fn push_jsdoc(&mut self, lines: &[String]) {
        let lines: Vec<String> = lines
            .iter()
            .map(|l| l.trim_end().replace("*/", "*\\/"))
            .collect();
        match lines.as_slice() {
            [] => {}
            [single] => self.push_line(&format!("/** {} */", single)),
            _ => {
                self.push_line("/**");
                for line in &lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blanks() {
        let mut builder = CodeBuilder::typescript().line("import axios from 'axios';");
        builder.push_blank();
        assert_eq!(builder.line("export {};").build(), "import axios from 'axios';\n\nexport {};\n");
    }

    #[test]
    fn test_nested_blocks_never_indent_blanks() {
        let mut builder = CodeBuilder::new(Indent::spaces(4));
        builder.apply_fragment(CodeFragment::block(
            "class A {",
            vec![
                CodeFragment::block("run() {", vec![CodeFragment::line("return 1;")], Some("}".into())),
                CodeFragment::blank(),
                CodeFragment::line("x = 2;"),
            ],
            Some("}".into()),
        ));

        assert_eq!(
            builder.build(),
            "class A {\n    run() {\n        return 1;\n    }\n\n    x = 2;\n}\n"
        );
    }

    #[test]
    fn test_jsdoc_shapes() {
        let mut builder = CodeBuilder::typescript();
        builder.apply_fragment(CodeFragment::jsdoc("A pet"));
        builder.apply_fragment(CodeFragment::block(
            "class Store {",
            vec![CodeFragment::JsDoc(vec![
                "Find pets".into(),
                String::new(),
                "Ends with */ here".into(),
            ])],
            Some("}".into()),
        ));

        assert_eq!(
            builder.build(),
            "/** A pet */\nclass Store {\n  /**\n   * Find pets\n   *\n   * Ends with *\\/ here\n   */\n}\n"
        );
    }

    #[test]
    fn test_emit_renderable() {
        struct Entry;
        impl Renderable for Entry {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::jsdoc("Entry"), CodeFragment::line("main();")]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Entry);
        assert_eq!(builder.build(), "/** Entry */\nmain();\n");
    }
}
