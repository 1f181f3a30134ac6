//! Key normalizer — canonical lookup keys for header and label text.
//!
//! Source spreadsheets are hand-maintained, so column headers arrive in any
//! case, with or without accents, and with arbitrary punctuation. Every map
//! key in the pipeline goes through [`normalize`] so that `"Descripció
//! curta"`, `"descripcio_curta"`, and `"Descripcio Curta"` all land on the
//! same key.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize arbitrary label text into a lookup key.
///
/// Steps, in order: trim, lowercase, NFD decomposition with combining marks
/// dropped, every maximal run of characters outside `[a-z0-9]` collapsed to
/// a single `_`, leading/trailing `_` stripped.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)` for all inputs.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_sep = false;

    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Descripció llarga"), "descripcio_llarga");
        assert_eq!(normalize("Año/Mes"), "ano_mes");
        assert_eq!(normalize("Efemèrides"), "efemerides");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(normalize("  Date -- of / event  "), "date_of_event");
        assert_eq!(normalize("a***b"), "a_b");
    }

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(normalize("(title)"), "title");
        assert_eq!(normalize("__already_ok__"), "already_ok");
    }

    #[test]
    fn empty_and_symbol_only_input_yields_empty_key() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  ¿?¡!  "), "");
    }

    #[test]
    fn header_variants_collide() {
        for variant in ["Mes", "MES", " mès ", "(mes)"] {
            assert_eq!(normalize(variant), "mes", "variant {variant:?}");
        }
    }
}
