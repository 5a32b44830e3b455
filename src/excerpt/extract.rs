//! Heading-delimited section extraction
//!
//! Sections are located by literal heading text rather than a markdown
//! AST: the guides are authored alongside this crate, so exact heading
//! strings are a stable contract.

/// Extract the sections introduced by `headings` from `document`, in the
/// order listed.
///
/// Each heading is located by its first literal occurrence. The section
/// spans from the heading to the next heading of the same or shallower
/// level (exclusive) and is returned trimmed. Headings that do not occur
/// in the document are skipped. Overlapping spans are not deduplicated;
/// each listed heading yields an independent extraction.
pub fn extract_sections<'a>(document: &'a str, headings: &[&str]) -> Vec<&'a str> {
    headings
        .iter()
        .filter_map(|heading| extract_section(document, heading))
        .collect()
}

/// Extract a single heading-delimited section, or `None` if the heading
/// text does not occur in the document.
pub fn extract_section<'a>(document: &'a str, heading: &str) -> Option<&'a str> {
    let start = document.find(heading)?;
    let level = heading_level(heading);
    let after = start + heading.len();
    let end = match next_boundary(&document[after..], level) {
        Some(offset) => after + offset,
        None => document.len(),
    };
    Some(document[start..end].trim())
}

/// Length of the leading `#` run
fn heading_level(heading: &str) -> usize {
    heading.chars().take_while(|&c| c == '#').count()
}

/// Byte offset of the first line in `text` that opens a heading of
/// `max_level` or shallower: a `#` run of length `1..=max_level` followed
/// by a space.
fn next_boundary(text: &str, max_level: usize) -> Option<usize> {
    let mut offset = 0;
    for line in text.split('\n') {
        if opens_section(line, max_level) {
            return Some(offset);
        }
        offset += line.len() + 1;
    }
    None
}

fn opens_section(line: &str, max_level: usize) -> bool {
    let run = line.chars().take_while(|&c| c == '#').count();
    (1..=max_level).contains(&run) && line[run..].starts_with(' ')
}
