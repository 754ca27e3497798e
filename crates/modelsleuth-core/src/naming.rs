/// Filename-derived names: catalog keys and human-readable labels.
///
/// Keys must be stable across runs and safe to use as identifiers in the
/// placement UI's config, so they are reduced to lowercase alphanumerics
/// and underscores.
use tracing::warn;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Model-format extension stripped from filenames before deriving a key.
pub const MODEL_EXTENSION: &str = ".glb";

/// Key used when a filename sanitizes to nothing (e.g. `!!!.glb`).
pub const FALLBACK_KEY: &str = "model";

/// Derive a catalog key from a filename.
///
/// 1. A trailing `.glb` is stripped. The match is exact, so `House.GLB`
///    keeps its extension text and becomes `houseglb`.
/// 2. Hyphens and spaces become underscores.
/// 3. Everything that is not a letter, a number or `_` is dropped. Combining
///    marks count as neither, so `नमस्ते` keeps only its base letters.
/// 4. The result is lowercased as a whole string, so context rules such as
///    Greek final sigma apply (`ΟΔΟΣ` becomes `οδος`).
///
/// A name with no usable characters yields [`FALLBACK_KEY`].
pub fn sanitize_key(filename: &str) -> String {
    let stem = filename.strip_suffix(MODEL_EXTENSION).unwrap_or(filename);

    let filtered: String = stem
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .filter(|&c| is_key_char(c))
        .collect();

    // Lowercasing can expand a char into a sequence that includes combining
    // marks (`İ`), so the filter runs again over the lowercased output.
    let key: String = filtered
        .to_lowercase()
        .chars()
        .filter(|&c| is_key_char(c))
        .collect();

    if key.is_empty() {
        warn!("'{filename}' has no usable key characters, using '{FALLBACK_KEY}'");
        return FALLBACK_KEY.to_owned();
    }
    key
}

#[inline]
fn is_key_char(c: char) -> bool {
    c == '_'
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
        )
}

/// Derive a display name from a filename stem.
///
/// Hyphens and underscores become spaces, then each word is title-cased.
/// A word is a run of cased letters: its first letter takes the Unicode
/// titlecase form and the rest is lowercased as a string. So
/// `farm-HOUSE_2b` reads `Farm House 2B`, `ΟΔΟΣ` reads `Οδος` and `ßtraße`
/// reads `Sstraße`.
///
/// Greek letters that carry both an accent and a iota subscript (`ᾴ`, `ῷ`)
/// take their uppercase form instead of their titlecase form.
pub fn display_name(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut word = String::new();

    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if is_cased(c) {
            word.push(c);
            continue;
        }
        push_title_word(&mut name, &word);
        word.clear();
        name.push(c);
    }
    push_title_word(&mut name, &word);
    name
}

fn is_cased(c: char) -> bool {
    c.is_lowercase()
        || c.is_uppercase()
        || c.general_category() == GeneralCategory::TitlecaseLetter
}

fn push_title_word(name: &mut String, word: &str) {
    let Some(first) = word.chars().next() else {
        return;
    };
    push_titlecase(name, first);

    // Lowercase the whole word so final sigma sees its left context, then
    // drop the lowered form of the first letter.
    let skip: usize = first.to_lowercase().map(char::len_utf8).sum();
    name.push_str(&word.to_lowercase()[skip..]);
}

/// Push the titlecase mapping of `c`, where it differs from uppercase.
fn push_titlecase(name: &mut String, c: char) {
    let title = match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        'ﬓ' => "Մն",
        'ﬔ' => "Մե",
        'ﬕ' => "Մի",
        'ﬖ' => "Վն",
        'ﬗ' => "Մխ",
        'ᾳ' | 'ᾼ' => "ᾼ",
        'ῃ' | 'ῌ' => "ῌ",
        'ῳ' | 'ῼ' => "ῼ",
        // Iota-subscript rows: the titlecase letter sits 8 above the small one.
        '\u{1F80}'..='\u{1F8F}' | '\u{1F90}'..='\u{1F9F}' | '\u{1FA0}'..='\u{1FAF}' => {
            name.extend(char::from_u32(c as u32 | 0x8));
            return;
        }
        _ => {
            name.extend(c.to_uppercase());
            return;
        }
    };
    name.push_str(title);
}
