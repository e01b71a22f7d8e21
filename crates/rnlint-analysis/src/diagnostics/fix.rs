//! Applying edit sets to source text.

use rnlint_core::errors::FixError;

use super::types::TextEdit;

/// Apply `edits` to `source` as one atomic set.
///
/// Edits are ordered by position (stable, so insertions at the same offset
/// keep their given order). Any overlap, out-of-range span, or span that
/// splits a UTF-8 character rejects the whole set.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String, FixError> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|e| (e.span.start, e.span.end));

    for edit in &ordered {
        let (start, end) = (edit.span.start, edit.span.end);
        if start > end || end as usize > source.len() {
            return Err(FixError::OutOfBounds { start, end, len: source.len() });
        }
        if !source.is_char_boundary(start as usize) || !source.is_char_boundary(end as usize) {
            return Err(FixError::NotCharBoundary { start, end });
        }
    }
    for pair in ordered.windows(2) {
        let (first, second) = (pair[0].span, pair[1].span);
        if first.end > second.start {
            return Err(FixError::Overlap {
                first_start: first.start,
                first_end: first.end,
                second_start: second.start,
                second_end: second.end,
            });
        }
    }

    let added: usize = ordered.iter().map(|e| e.replacement.len()).sum();
    let mut out = String::with_capacity(source.len() + added);
    let mut cursor = 0usize;
    for edit in ordered {
        out.push_str(&source[cursor..edit.span.start as usize]);
        out.push_str(&edit.replacement);
        cursor = edit.span.end as usize;
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}
