//! Writing rendered output to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Something the generator renders into one file under the output directory.
pub trait GeneratedFile {
    /// Where the file goes below `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// The body, without [`FileRules::header`].
    fn render(&self) -> String;

    fn contents(&self) -> String {
        let body = self.render();
        match self.rules().header {
            Some(header) => format!("{}\n{}", header, body),
            None => body,
        }
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.contents())
            .with_rules(self.rules())
            .write()
    }
}

/// Outcome of [`File::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file existed and its rules forbid replacing it.
    Skipped,
}

/// When an existing file may be replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    #[default]
    Always,
    IfMissing,
}

impl Overwrite {
    fn permits(self, path: &Path) -> bool {
        self == Overwrite::Always || !path.exists()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Prepended to the body on its own line.
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Regenerated on every run.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(header),
        }
    }

    /// Written once, then left to the user.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// Rendered content bound to a destination path.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the content, creating parent directories first.
    ///
    /// # Errors
    ///
    /// Fails when a directory or the file itself cannot be written.
    pub fn write(&self) -> Result<WriteResult> {
        if !self.rules.overwrite.permits(&self.path) {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))
}
