use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt::Write;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// Removes embedded markup tags from service text and trims the result.
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").trim().to_string()
}

/// Maps a service identifier onto `[A-Za-z0-9_-]` so it can be used verbatim as an element id
/// or a file name. ASCII letters, digits and `-` pass through; every other byte becomes `_xx`
/// in lowercase hex, which keeps distinct identifiers distinct.
pub fn element_token(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            token.push(char::from(byte));
        } else {
            let _ = write!(token, "_{:02x}", byte);
        }
    }
    token
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// Latin-1 and the common Latin Extended-A letters found in localized names.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Weight {
    class: u8,
    base: char,
}

struct Folded {
    primary: Vec<Weight>,
    accented: Vec<bool>,
    upper: Vec<bool>,
}

fn fold(text: &str) -> Folded {
    let mut folded = Folded {
        primary: Vec::with_capacity(text.len()),
        accented: Vec::with_capacity(text.len()),
        upper: Vec::with_capacity(text.len()),
    };

    for c in text.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let (base, accented) = match base_letter(lower) {
            Some(base) => (base, true),
            None => (lower, false),
        };
        let class = if base.is_whitespace() {
            0
        } else if !base.is_alphanumeric() {
            1
        } else if base.is_numeric() {
            2
        } else {
            3
        };
        folded.primary.push(Weight { class, base });
        folded.accented.push(accented);
        folded.upper.push(c.is_uppercase());
    }

    folded
}

/// Locale-aware name comparison: letters compare case- and accent-insensitively first,
/// then unaccented before accented, then lowercase before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let left = fold(a);
    let right = fold(b);

    left.primary
        .cmp(&right.primary)
        .then_with(|| left.accented.cmp(&right.accented))
        .then_with(|| left.upper.cmp(&right.upper))
        .then_with(|| a.cmp(b))
}
