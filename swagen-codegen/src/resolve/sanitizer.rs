//! Identifier sanitization.
//!
//! Every definition name and operation id passes through a [`Sanitizer`]
//! before it is used as an emitted identifier. The mapping is memoized per
//! instance, so one raw name always yields the same identifier within a run
//! and no two raw names share one.

use std::collections::{HashMap, HashSet};

use swagen_core::{capitalize, to_camel_case};

use crate::language::NamingConvention;

/// The identifier namespace a sanitizer serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Type declarations: generated names are capitalized, fallback `Model`.
    Type,
    /// Client methods: names are camel-cased, fallback `operation`.
    Method,
}

impl NameKind {
    fn fallback(self) -> &'static str {
        match self {
            NameKind::Type => "Model",
            NameKind::Method => "operation",
        }
    }
}

/// Maps raw document names to legal, unique identifiers.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    kind: NameKind,
    naming: NamingConvention,
    cache: HashMap<String, String>,
    used: HashSet<String>,
}

impl Sanitizer {
    pub fn new(kind: NameKind, naming: NamingConvention) -> Self {
        Self {
            kind,
            naming,
            cache: HashMap::new(),
            used: HashSet::new(),
        }
    }

    /// Mark identifiers as taken so raw names that map onto them get a suffix.
    pub fn reserve(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        self.used.extend(names.into_iter().map(Into::into));
    }

    pub fn kind(&self) -> NameKind {
        self.kind
    }

    /// The identifier for `raw`, claiming a new one on first sight.
    pub fn name(&mut self, raw: &str) -> String {
        if let Some(name) = self.cache.get(raw) {
            return name.clone();
        }
        let name = self.fresh(raw);
        self.cache.insert(raw.to_string(), name.clone());
        name
    }

    /// The identifier previously assigned to `raw`, if any.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.cache.get(raw).map(String::as_str)
    }

    /// Claim a new unique identifier for `raw` without memoizing it.
    ///
    /// Used for derived names where two sources may legitimately produce the
    /// same raw text.
    pub fn fresh(&mut self, raw: &str) -> String {
        let base = self.base_name(raw);
        let base = self.naming.safe_name(&base);
        self.claim(base)
    }

    fn base_name(&self, raw: &str) -> String {
        if !raw.is_ascii() {
            let generated = generated_name(raw);
            let name = match self.kind {
                NameKind::Type => capitalize(&generated),
                NameKind::Method => generated,
            };
            tracing::debug!(raw, name = %name, "generated identifier for non-ASCII name");
            return name;
        }

        let source = match self.kind {
            NameKind::Type => raw.to_string(),
            NameKind::Method => to_camel_case(raw),
        };
        let stripped = strip_identifier(&source);
        if stripped.is_empty() {
            self.kind.fallback().to_string()
        } else {
            stripped
        }
    }

    fn claim(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Keep `[A-Za-z0-9_]` and drop any leading digits.
fn strip_identifier(s: &str) -> String {
    let kept: String = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    kept.trim_start_matches(|c: char| c.is_ascii_digit())
        .to_string()
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A lowercase name of 6 to 10 letters derived from the bytes of `raw`.
///
/// Equal inputs give equal outputs on every run.
fn generated_name(raw: &str) -> String {
    let mut state = raw
        .bytes()
        .fold(FNV_OFFSET, |hash, b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME));
    if state == 0 {
        state = FNV_OFFSET;
    }

    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let len = 6 + (next() % 5) as usize;
    (0..len)
        .map(|_| char::from(b'a' + (next() % 26) as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Sanitizer {
        Sanitizer::new(NameKind::Type, NamingConvention::default())
    }

    fn methods() -> Sanitizer {
        Sanitizer::new(NameKind::Method, NamingConvention::default())
    }

    #[test]
    fn test_plain_names_pass_through() {
        let mut s = types();
        assert_eq!(s.name("Pet"), "Pet");
        assert_eq!(s.name("Order_Item"), "Order_Item");
    }

    #[test]
    fn test_strips_illegal_characters_and_leading_digits() {
        let mut s = types();
        assert_eq!(s.name("User-Info"), "UserInfo");
        assert_eq!(s.name("123Pet"), "Pet");
        assert_eq!(s.name("Page[Pet]"), "PagePet");
    }

    #[test]
    fn test_empty_result_falls_back() {
        let mut t = types();
        assert_eq!(t.name("---"), "Model");
        assert_eq!(t.name("42"), "Model1");

        let mut m = methods();
        assert_eq!(m.name("!"), "operation");
    }

    #[test]
    fn test_collisions_get_numeric_suffixes() {
        let mut s = types();
        assert_eq!(s.name("UserInfo"), "UserInfo");
        assert_eq!(s.name("User-Info"), "UserInfo1");
        assert_eq!(s.name("User.Info"), "UserInfo2");
        // Memoized: asking again returns the same mapping
        assert_eq!(s.name("User-Info"), "UserInfo1");
        assert_eq!(s.lookup("User.Info"), Some("UserInfo2"));
    }

    #[test]
    fn test_non_ascii_names_are_deterministic() {
        let mut first = types();
        let mut second = types();
        let a = first.name("用户信息");
        let b = second.name("用户信息");
        assert_eq!(a, b);

        assert!((6..=10).contains(&a.len()));
        assert!(a.chars().next().unwrap().is_ascii_uppercase());
        assert!(a.chars().skip(1).all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_distinct_non_ascii_names_stay_distinct() {
        let mut s = types();
        let a = s.name("用户");
        let b = s.name("订单");
        assert_ne!(a, b);
        assert_eq!(s.name("用户"), a);
    }

    #[test]
    fn test_method_names_are_camel_cased() {
        let mut s = methods();
        assert_eq!(s.name("find-pets-by_status"), "findPetsByStatus");
        assert_eq!(s.name("GetUser"), "getUser");
        let generated = s.name("获取用户");
        assert!(generated.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_fresh_names_never_repeat() {
        let mut s = methods();
        assert_eq!(s.fresh("get_users"), "getUsers");
        assert_eq!(s.fresh("get_users"), "getUsers1");
    }

    #[test]
    fn test_reserved_identifiers_are_skipped() {
        let mut s = methods();
        s.reserve(["apiClient", "clearInterceptors"]);
        assert_eq!(s.name("api_client"), "apiClient1");
        assert_eq!(s.name("clearInterceptors"), "clearInterceptors1");
        assert_eq!(s.name("getPet"), "getPet");
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        let naming = NamingConvention {
            reserved_words: &["delete"],
            ..NamingConvention::default()
        };
        let mut s = Sanitizer::new(NameKind::Method, naming);
        assert_eq!(s.name("delete"), "_delete");
    }
}
