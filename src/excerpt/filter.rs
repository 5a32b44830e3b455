//! Case-insensitive query filtering of assembled reports
//!
//! Filtering operates on report lines, not on the source documents: any
//! line opening with `#` starts a new section here, a deliberately coarser
//! boundary than the one used for extraction.

/// Narrow `report` to the sections matching `query`.
///
/// A section runs from one `#`-opening line to the next; lines before the
/// first heading form their own section. A section is kept when any of its
/// lines contains `query` case-insensitively. Kept sections are joined
/// with a `---` divider; when nothing matches, a fixed "no content"
/// message quoting the query is returned.
pub fn filter_by_query(report: &str, query: &str) -> String {
    let needle = query.to_lowercase();

    let mut kept: Vec<String> = Vec::new();
    let mut section: Vec<&str> = Vec::new();
    let mut relevant = false;

    for line in report.split('\n') {
        if line.starts_with('#') {
            if !section.is_empty() && relevant {
                kept.push(section.join("\n"));
            }
            section = vec![line];
            relevant = line.to_lowercase().contains(&needle);
        } else {
            section.push(line);
            if line.to_lowercase().contains(&needle) {
                relevant = true;
            }
        }
    }
    if !section.is_empty() && relevant {
        kept.push(section.join("\n"));
    }

    if kept.is_empty() {
        format!("No content found matching query: \"{}\"", query)
    } else {
        kept.join("\n\n---\n\n")
    }
}
