//! Identifier rules for the generated TypeScript.

use swagen_codegen::language::{NamingConvention, underscore_escape};
use swagen_core::to_camel_case;

#[rustfmt::skip]
const RESERVED: &[&str] = &[
    // ECMAScript keywords and literals
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
    // TypeScript contextual keywords and primitive type names
    "any", "as", "async", "await", "boolean", "constructor", "declare", "implements", "interface",
    "module", "namespace", "never", "number", "object", "package", "private", "protected",
    "public", "readonly", "require", "static", "string", "symbol", "type", "undefined", "unknown",
    // globals the generated files reference
    "File", "FormData", "Record", "Promise",
];

/// camelCase locals; reserved words get a leading underscore.
pub const TS_NAMING: NamingConvention = NamingConvention {
    local_to_name: to_camel_case,
    reserved_words: RESERVED,
    escape_reserved: underscore_escape,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_local() {
        assert_eq!(TS_NAMING.local_name("user_name"), "userName");
        assert_eq!(TS_NAMING.local_name("X-Request-Id"), "xRequestId");
        assert_eq!(TS_NAMING.local_name("delete"), "_delete");
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("async"));
        assert!(TS_NAMING.is_reserved("interface"));
        assert!(TS_NAMING.is_reserved("File"));
        assert!(!TS_NAMING.is_reserved("hello"));
    }

    #[test]
    fn test_ts_escape_reserved() {
        assert_eq!(TS_NAMING.safe_name("class"), "_class");
        assert_eq!(TS_NAMING.safe_name("Pet"), "Pet");
    }
}
