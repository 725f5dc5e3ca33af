//! Identifier rules of a target language.

/// How the resolver turns document names into identifiers of one language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Case conversion for locals, e.g. `pet-id` to `petId`.
    pub local_to_name: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Applied to names found in `reserved_words`.
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// `name`, escaped when it is reserved.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Case-convert `name`, then escape the result if needed.
    pub fn local_name(&self, name: &str) -> String {
        self.safe_name(&(self.local_to_name)(name))
    }
}

/// Underscore prefix, the escape every bundled convention uses.
pub fn underscore_escape(name: &str) -> String {
    format!("_{}", name)
}

impl Default for NamingConvention {
    /// Keeps names as written and reserves nothing.
    fn default() -> Self {
        Self {
            local_to_name: str::to_string,
            reserved_words: &[],
            escape_reserved: underscore_escape,
        }
    }
}
