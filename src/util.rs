use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Map accented Latin characters onto their unaccented base letter.
///
/// Covers the Spanish alphabet (both cases) plus the handful of French/Portuguese
/// accents that show up in insurance brand names. Unknown characters pass through.
pub fn fold_diacritics(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            'á' | 'à' | 'â' | 'ä' | 'ã' => out.push('a'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'í' | 'ì' | 'î' | 'ï' => out.push('i'),
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => out.push('o'),
            'ú' | 'ù' | 'û' | 'ü' => out.push('u'),
            'ñ' => out.push('n'),
            'ç' => out.push('c'),
            'Á' | 'À' | 'Â' | 'Ä' | 'Ã' => out.push('A'),
            'É' | 'È' | 'Ê' | 'Ë' => out.push('E'),
            'Í' | 'Ì' | 'Î' | 'Ï' => out.push('I'),
            'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => out.push('O'),
            'Ú' | 'Ù' | 'Û' | 'Ü' => out.push('U'),
            'Ñ' => out.push('N'),
            'Ç' => out.push('C'),
            _ => out.push(ch),
        }
    }
    out
}

/// Lowercased, diacritic-folded form used for case/accent-insensitive matching.
pub fn search_key(input: &str) -> String {
    fold_diacritics(input).to_lowercase()
}

/// Keep only ASCII digits, dropping separators, spaces, and punctuation.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a unix timestamp as "YYYY-MM-DD HH:MM:SS"; empty input yields "-".
pub fn ts_to_date(secs: Option<i64>) -> String {
    match secs.and_then(|s| chrono::DateTime::from_timestamp(s, 0)) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// Truncate `s` to at most `max_cols` display columns, appending an ellipsis
/// when anything was cut. Wide characters count by their rendered width.
pub fn ellipsize(s: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_cols {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    let limit = max_cols.saturating_sub(1);
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
