use std::sync::OnceLock;

use regex::Regex;

use crate::lexicon::NOTE_MARKERS;

static NOTE_MARKER: OnceLock<Regex> = OnceLock::new();

/// A note marker followed by everything to the end of the text, newlines
/// included.
fn note_marker_pattern() -> &'static Regex {
    NOTE_MARKER.get_or_init(|| {
        let markers = NOTE_MARKERS.join("|");
        let pattern = format!(r"(?:{markers})\s*([\s\S]*)");
        Regex::new(&pattern).expect("invalid note marker pattern")
    })
}

/// Captures the free-text note a speaker marks with "หมายเหตุ" or "สำหรับ".
///
/// Everything after the first marker becomes the note, trimmed but otherwise
/// verbatim. A phrase without a marker yields no note.
pub fn extract_marked_note(text: &str) -> Option<String> {
    let captures = note_marker_pattern().captures(text)?;

    Some(captures[1].trim().to_string())
}

/// Builds a note from the top of a receipt.
///
/// The first two lines of the slip, usually the merchant name and a date or
/// branch line, are joined with a single space.
pub fn receipt_header_note(text: &str) -> String {
    text.lines()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
