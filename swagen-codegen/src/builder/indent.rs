//! Indentation unit for generated code.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// Two spaces, the usual TypeScript style.
    pub const TYPESCRIPT: Self = Self(2);

    pub const fn spaces(width: u8) -> Self {
        Self(width)
    }

    /// The whitespace for `level` levels.
    pub fn repeat(self, level: usize) -> String {
        " ".repeat(usize::from(self.0) * level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
