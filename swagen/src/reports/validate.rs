//! Validate command report data structures.

use super::output::{Output, Report};

/// Report data from document validation.
#[derive(Debug)]
pub struct ValidateReport {
    /// Input path or URL, as given.
    pub input: String,
    /// Dialect name and version marker, e.g. "Swagger 2.0".
    pub dialect: String,
    pub title: String,
    pub version: String,
    pub path_count: usize,
    pub operation_count: usize,
    pub schema_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidateReport {
    /// Whether validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for ValidateReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.is_valid() {
            return;
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.input));
        out.newline();
        out.key_value_indented("Title", &self.title);
        out.key_value_indented("Version", &self.version);
        out.key_value_indented("Dialect", &self.dialect);
        out.key_value_indented("Paths", &self.path_count.to_string());
        out.key_value_indented("Operations", &self.operation_count.to_string());
        out.key_value_indented("Schemas", &self.schema_count.to_string());
    }
}
