//! End-to-end report assembly over the shipped guide corpus
//!
//! These tests load the real guides from guides/ and assert that every
//! catalog entry resolves against them, so a guide edit that renames or
//! moves a heading fails here instead of silently shrinking a report.

use docent::excerpt::{build_report, steps, Category, Step};
use docent::guides::GuideLibrary;
use std::path::Path;

async fn shipped_library() -> GuideLibrary {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("guides");
    GuideLibrary::load(&dir)
        .await
        .expect("shipped guides should load")
}

#[tokio::test]
async fn test_every_category_report_carries_its_marker_section() {
    let library = shipped_library().await;
    let markers = [
        (
            Category::Examples,
            "# MCP Implementation Examples",
            "### Complete TypeScript Server Example",
        ),
        (
            Category::WebDocs,
            "# MCP Web Documentation References",
            "## SDK Repositories",
        ),
        (
            Category::Frameworks,
            "# MCP Frameworks and SDKs",
            "### TypeScript SDK",
        ),
        (
            Category::ServerBasics,
            "# MCP Server Development Basics",
            "## 1. Introduction to MCP Servers",
        ),
        (
            Category::ClientBasics,
            "# MCP Client Development Basics",
            "## 1. Introduction to MCP Clients",
        ),
        (
            Category::BestPractices,
            "# MCP Development Best Practices",
            "### Security Considerations",
        ),
        (
            Category::ProtocolDetails,
            "# MCP Protocol Details",
            "### Message Format",
        ),
        (
            Category::Troubleshooting,
            "# MCP Troubleshooting Guide",
            "### Debugging Tips",
        ),
    ];

    for (category, title, marker) in markers {
        let report = build_report(&library, category, None);
        assert!(report.starts_with(title), "wrong title for {category}");
        assert!(report.contains(marker), "{category} is missing {marker:?}");
    }
}

#[tokio::test]
async fn test_every_catalog_heading_resolves_in_the_shipped_guides() {
    let library = shipped_library().await;
    for category in Category::ALL {
        let report = build_report(&library, category, None);
        for step in steps(category).iter().copied() {
            if let Step::Extract { headings, .. } = step {
                for heading in headings {
                    assert!(
                        report.contains(heading),
                        "{category} did not extract {heading:?}"
                    );
                }
            }
        }
    }
}

#[tokio::test]
async fn test_examples_report_spans_all_three_guides() {
    let library = shipped_library().await;
    let report = build_report(&library, Category::Examples, None);

    assert!(report.contains("## Server Examples"));
    assert!(report.contains("### Complete Example: Multi-Tool Client with LLM Integration"));
    assert!(report.contains("#### Example: Anthropic Claude Integration"));
    assert!(report.contains("### Complete Server Examples"));
}

#[tokio::test]
async fn test_file_system_tool_example_appears_exactly_twice() {
    // The catalog extracts overlapping spans of the server guide: the
    // "## 8" parent span includes the tool examples once, and the file
    // system tool is pulled out again on its own.
    let library = shipped_library().await;
    let report = build_report(&library, Category::Examples, None);

    assert_eq!(report.matches("#### Example: File System Tool").count(), 2);
}

#[tokio::test]
async fn test_client_basics_stops_at_capability_discovery() {
    let library = shipped_library().await;
    let report = build_report(&library, Category::ClientBasics, None);

    assert!(report.contains("## 4. Discovering and Using Server Capabilities"));
    assert!(!report.contains("## 5. Handling Tool Results and Errors"));
    assert!(!report.contains("#### Example: OpenAI Integration"));
}

#[tokio::test]
async fn test_best_practices_collects_all_three_guides() {
    let library = shipped_library().await;
    let report = build_report(&library, Category::BestPractices, None);

    assert!(report.contains("## Server Best Practices"));
    assert!(report.contains("### Best Practices Checklist"));
    assert!(report.contains("### Best Practices for Client Development"));
    assert!(report.contains("### Server Development Best Practices"));
}

#[tokio::test]
async fn test_troubleshooting_report_ends_with_general_tips() {
    let library = shipped_library().await;
    let report = build_report(&library, Category::Troubleshooting, None);

    assert!(report.contains("## General Debugging Tips"));
    assert!(report.ends_with("- Ensure proper error handling throughout the stack\n"));
}

#[tokio::test]
async fn test_frameworks_query_narrows_to_matching_sections() {
    let library = shipped_library().await;
    let full = build_report(&library, Category::Frameworks, None);
    let filtered = build_report(&library, Category::Frameworks, Some("Kotlin"));

    assert!(filtered.contains("Kotlin/Java"));
    assert!(!filtered.contains("#### stdio Transport"));
    assert!(filtered.len() < full.len());
}

#[tokio::test]
async fn test_unmatched_query_reports_no_content() {
    let library = shipped_library().await;
    let report = build_report(&library, Category::Examples, Some("xylophone"));

    assert_eq!(report, "No content found matching query: \"xylophone\"");
}

#[tokio::test]
async fn test_reports_are_stable_across_library_loads() {
    let first_lib = shipped_library().await;
    let second_lib = shipped_library().await;

    for category in Category::ALL {
        assert_eq!(
            build_report(&first_lib, category, None),
            build_report(&second_lib, category, None),
            "unstable report for {category}"
        );
    }
}
