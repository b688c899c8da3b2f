// src/application/ports/util.rs

/// Text normalization behind generated slugs. Implementations must be
/// total: every input yields a (possibly empty) string of lowercase ASCII
/// letters, digits and single `-` separators.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
