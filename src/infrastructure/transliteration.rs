// src/infrastructure/transliteration.rs
//! Locale-agnostic pre-pass run before `slug::slugify`.
//!
//! `slug` already maps most scripts to ASCII, but it disagrees with the
//! conventional slug output in a few places: Cyrillic (`Я` -> `Ia`, not
//! `Ya`), apostrophes (dropped, not turned into a word break) and symbols
//! such as `♥` (a word break, not a spelled-out name). This module settles
//! those cases and leaves everything else to `slug`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '`' | '\u{2018}' | '\u{2019}' | '\u{02BC}' | '\u{00B4}')
}

fn cyrillic(c: char) -> Option<&'static str> {
    let mapped = match c {
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' => "E",
        'Ё' => "Io",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "I",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "Kh",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Shch",
        'Ъ' | 'ъ' | 'Ь' | 'ь' => "",
        'Ы' => "Y",
        'Э' => "E",
        'Ю' => "Iu",
        'Я' => "Ia",
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "io",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ы' => "y",
        'э' => "e",
        'ю' => "iu",
        'я' => "ia",
        // Ukrainian and Belarusian letters.
        'Є' => "Ie",
        'є' => "ie",
        'І' => "I",
        'і' => "i",
        'Ї' => "Yi",
        'ї' => "yi",
        'Ґ' => "G",
        'ґ' => "g",
        'Ў' => "U",
        'ў' => "u",
        _ => return None,
    };
    Some(mapped)
}

/// Pushes `c` with its combining marks removed (`é` -> `e`). Characters that
/// do not decompose into base + marks (Hangul, CJK, `ß`) are pushed intact.
fn push_without_marks(out: &mut String, c: char) {
    let mut base = String::new();
    let mut had_marks = false;
    for d in c.nfd() {
        if is_combining_mark(d) {
            had_marks = true;
        } else {
            base.push(d);
        }
    }

    if !had_marks || base.is_empty() {
        out.push(c);
        return;
    }
    for b in base.chars() {
        match cyrillic(b) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(b),
        }
    }
}

/// Maps `input` to text `slug::slugify` turns into the expected slug.
/// Non-ASCII letters without an entry here pass through untouched.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.nfc() {
        if is_apostrophe(c) {
            continue;
        }
        if c.is_ascii() {
            out.push(c);
        } else if let Some(mapped) = cyrillic(c) {
            out.push_str(mapped);
        } else if c.is_alphanumeric() {
            push_without_marks(&mut out, c);
        } else if is_combining_mark(c) {
            // stray mark with no base letter
        } else {
            out.push(' ');
        }
    }

    out
}
