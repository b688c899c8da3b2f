// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::infrastructure::transliteration::transliterate;
use slug::slugify;

/// Transliterates with the default table, then lets `slug` lowercase, turn
/// every run of other characters into one `-` and trim the ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(transliterate(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slug(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    fn is_slug_shaped(value: &str) -> bool {
        value.is_empty()
            || value
                .split('-')
                .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
    }

    #[test]
    fn plain_titles() {
        assert_eq!(slug("foo"), "foo");
        assert_eq!(slug("foo 2012"), "foo-2012");
        assert_eq!(slug("-foo"), "foo");
        assert_eq!(slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn empty_and_punctuation_only_sources() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("   "), "");
        assert_eq!(slug("--!?--"), "");
    }

    #[test]
    fn french_apostrophes_and_accents() {
        assert_eq!(slug("C'est déjà l'été."), "cest-deja-lete");
    }

    #[test]
    fn pinyin_with_tone_marks() {
        assert_eq!(slug("Nín hǎo. Wǒ shì zhōng guó rén"), "nin-hao-wo-shi-zhong-guo-ren");
    }

    #[test]
    fn cyrillic_words() {
        assert_eq!(slug("Компьютер"), "kompiuter");
        assert_eq!(slug("Я ♥ борщ"), "ia-borshch");
    }

    #[test]
    fn repeated_hyphens_collapse() {
        assert_eq!(slug("jaja---lol-méméméoo--a"), "jaja-lol-mememeoo-a");
    }

    #[test]
    fn spanish_tilde() {
        assert_eq!(slug("Cañón chiquitín"), "canon-chiquitin");
    }

    #[test]
    fn german_umlauts_without_pretranslation() {
        assert_eq!(slug("ÜBER Über slugify"), "uber-uber-slugify");
    }

    proptest! {
        #[test]
        fn arbitrary_unicode_is_slug_shaped(input in any::<String>()) {
            let value = slug(&input);
            prop_assert!(is_slug_shaped(&value), "{:?} produced {:?}", input, value);
        }

        #[test]
        fn printable_text_is_slug_shaped(input in "\\PC{0,64}") {
            let value = slug(&input);
            prop_assert!(is_slug_shaped(&value), "{:?} produced {:?}", input, value);
        }
    }

    #[test]
    fn output_is_always_slug_shaped() {
        let samples = [
            "",
            "-",
            "foo",
            "  leading and trailing  ",
            "a__b..c",
            "Ünïcödé everywhere ✓",
            "中文标题",
            "Ελληνικά",
            "emoji 🎉 party",
            "tab\tand\nnewline",
            "100% sure",
            "Straße",
        ];
        for sample in samples {
            let value = slug(sample);
            assert!(is_slug_shaped(&value), "{sample:?} produced {value:?}");
        }
    }
}
