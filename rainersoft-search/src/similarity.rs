/// Similarity score assigned when the target contains the query.
pub const CONTAINMENT_SCORE: f64 = 0.8;

/// Similarity of `query` to `target` in `0.0..=1.0`, compared as given.
///
/// Identical strings score `1.0`. A target containing a non-empty query
/// scores [`CONTAINMENT_SCORE`]; a query that merely contains the target gets
/// no such credit. Everything else gets the normalized Levenshtein ratio.
#[must_use]
pub fn similarity(query: &str, target: &str) -> f64 {
    if query == target {
        1.0
    } else if !query.is_empty() && target.contains(query) {
        CONTAINMENT_SCORE
    } else {
        strsim::normalized_levenshtein(query, target)
    }
}

/// Wraps every case-insensitive occurrence of `query` in `open`/`close`.
///
/// Matching is per character, so the original casing of `text` is kept
/// inside the markers. An empty query returns the text unchanged.
#[must_use]
pub fn highlight(text: &str, query: &str, open: &str, close: &str) -> String {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return text.to_string();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i + needle.len() <= chars.len() {
        let window = &chars[i..i + needle.len()];
        let hit = window
            .iter()
            .zip(&needle)
            .all(|(&(_, c), &n)| eq_ignore_case(c, n));

        if hit {
            let start = window[0].0;
            let end = chars.get(i + needle.len()).map_or(text.len(), |&(at, _)| at);
            out.push_str(&text[copied..start]);
            out.push_str(open);
            out.push_str(&text[start..end]);
            out.push_str(close);
            copied = end;
            i += needle.len();
        } else {
            i += 1;
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
