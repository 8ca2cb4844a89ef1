use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Split `text` into chunks of at most `limit` characters.
///
/// Chunks end on grapheme boundaries, preferring the last newline inside the
/// window so paragraphs stay intact. A grapheme longer than `limit` on its own
/// is cut between chars. Concatenating the chunks gives back the original
/// text.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;
    // byte offset just past the last newline in `current`
    let mut last_break: Option<usize> = None;

    for unit in text.graphemes(true).flat_map(|g| fit_grapheme(g, limit)) {
        let len = unit.chars().count();
        if current_chars + len > limit && !current.is_empty() {
            if let Some(at) = last_break.filter(|&at| at < current.len()) {
                let rest = current.split_off(at);
                chunks.push(std::mem::replace(&mut current, rest));
                current_chars = current.chars().count();
            }
            last_break = None;
            // the text left after the newline cut may still not fit
            if current_chars + len > limit && !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
        }
        current.push_str(unit);
        current_chars += len;
        if unit.contains('\n') {
            last_break = Some(current.len());
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    trace!(chunks = chunks.len(), "split message");
    chunks
}

/// The grapheme itself, or char-aligned pieces of it when it exceeds `limit`.
fn fit_grapheme(grapheme: &str, limit: usize) -> Vec<&str> {
    if grapheme.chars().count() <= limit {
        return vec![grapheme];
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    for (count, (idx, _)) in grapheme.char_indices().enumerate() {
        if count > 0 && count % limit == 0 {
            pieces.push(&grapheme[start..idx]);
            start = idx;
        }
    }
    pieces.push(&grapheme[start..]);
    pieces
}
