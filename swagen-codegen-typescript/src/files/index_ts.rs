//! index.ts barrel generator.

use std::path::{Path, PathBuf};

use swagen_core::{FileRules, GeneratedFile};

use crate::{ast::Export, code_file::CodeFile};

const HEADER: &str = "// Auto-generated entry point\n// Do not edit this file manually\n";

/// The `index.ts` barrel re-exporting the other generated modules.
pub struct IndexTs {
    with_client: bool,
}

impl IndexTs {
    pub fn new(with_client: bool) -> Self {
        Self { with_client }
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(HEADER)
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new().export(Export::all_from("./types"));
        if self.with_client {
            file = file.export(Export::all_from("./api"));
        }
        file.render()
    }
}
