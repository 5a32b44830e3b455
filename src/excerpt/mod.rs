//! Report assembly
//!
//! A report is built in three stages: the static catalog names which
//! pieces a category is made of, the extractor pulls heading-delimited
//! sections out of the cached guides, and the filter optionally narrows
//! the assembled text to the sections matching a query.

mod catalog;
mod extract;
mod filter;

pub use catalog::{steps, Step};
pub use extract::{extract_section, extract_sections};
pub use filter::filter_by_query;

use crate::error::Error;
use crate::guides::GuideLibrary;
use std::fmt;
use std::str::FromStr;

/// The eight report categories served by the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    Examples,
    WebDocs,
    Frameworks,
    ServerBasics,
    ClientBasics,
    BestPractices,
    ProtocolDetails,
    Troubleshooting,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 8] = [
        Category::Examples,
        Category::WebDocs,
        Category::Frameworks,
        Category::ServerBasics,
        Category::ClientBasics,
        Category::BestPractices,
        Category::ProtocolDetails,
        Category::Troubleshooting,
    ];

    /// The wire name used in tool arguments and CLI values
    pub fn name(self) -> &'static str {
        match self {
            Category::Examples => "examples",
            Category::WebDocs => "web-docs",
            Category::Frameworks => "frameworks",
            Category::ServerBasics => "server-basics",
            Category::ClientBasics => "client-basics",
            Category::BestPractices => "best-practices",
            Category::ProtocolDetails => "protocol-details",
            Category::Troubleshooting => "troubleshooting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "examples" => Ok(Category::Examples),
            "web-docs" => Ok(Category::WebDocs),
            "frameworks" => Ok(Category::Frameworks),
            "server-basics" => Ok(Category::ServerBasics),
            "client-basics" => Ok(Category::ClientBasics),
            "best-practices" => Ok(Category::BestPractices),
            "protocol-details" => Ok(Category::ProtocolDetails),
            "troubleshooting" => Ok(Category::Troubleshooting),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}

/// Assemble the unfiltered report for `category` from the loaded guides.
///
/// Pieces are joined with a single newline; extraction steps contribute
/// one piece per heading found, literal steps exactly one.
pub fn assemble(library: &GuideLibrary, category: Category) -> String {
    let mut pieces: Vec<&str> = Vec::new();
    for step in catalog::steps(category).iter().copied() {
        match step {
            Step::Literal(text) => pieces.push(text),
            Step::Extract { guide, headings } => {
                pieces.extend(extract::extract_sections(library.guide(guide), headings));
            }
        }
    }
    pieces.join("\n")
}

/// Build the report for `category`, narrowed by `query` when one is given.
///
/// An empty query is treated the same as no query: the full report.
pub fn build_report(library: &GuideLibrary, category: Category, query: Option<&str>) -> String {
    let report = assemble(library, category);
    match query {
        Some(q) if !q.is_empty() => filter::filter_by_query(&report, q),
        _ => report,
    }
}
