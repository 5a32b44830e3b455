//! Guide corpus loading and caching
//!
//! The three guide documents are read from disk at most once per process
//! and cached for the lifetime of the owning [`GuideStore`]. Reports are
//! always computed fresh from the cached text; only the raw documents are
//! cached.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// The fixed role of a document within the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideRole {
    /// Server development guide
    Server,
    /// Client development guide
    Client,
    /// Consolidated protocol reference guide
    Reference,
}

impl GuideRole {
    /// File name of this guide under the guides directory
    pub fn file_name(self) -> &'static str {
        match self {
            GuideRole::Server => "mcp-server-development-guide.md",
            GuideRole::Client => "mcp-client-development-guide.md",
            GuideRole::Reference => "mcp-reference-guide.md",
        }
    }
}

/// The loaded corpus: three immutable document bodies
#[derive(Debug, Clone)]
pub struct GuideLibrary {
    server: String,
    client: String,
    reference: String,
}

impl GuideLibrary {
    /// Read all three guides from `dir`.
    ///
    /// Fails if any guide is missing or unreadable; a partially-read corpus
    /// is never returned.
    pub async fn load(dir: &Path) -> Result<Self> {
        debug!("Loading guides from {:?}", dir);

        let server = read_guide(dir, GuideRole::Server).await?;
        let client = read_guide(dir, GuideRole::Client).await?;
        let reference = read_guide(dir, GuideRole::Reference).await?;

        info!("Guide corpus loaded from {:?}", dir);

        Ok(Self {
            server,
            client,
            reference,
        })
    }

    /// Build a library from in-memory documents (test injection)
    pub fn from_parts(
        server: impl Into<String>,
        client: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            client: client.into(),
            reference: reference.into(),
        }
    }

    /// The document body for a role
    pub fn guide(&self, role: GuideRole) -> &str {
        match role {
            GuideRole::Server => &self.server,
            GuideRole::Client => &self.client,
            GuideRole::Reference => &self.reference,
        }
    }
}

async fn read_guide(dir: &Path, role: GuideRole) -> Result<String> {
    let path = dir.join(role.file_name());
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| Error::GuideLoad {
            path: path.display().to_string(),
            source,
        })
}

/// Lazily-initialized guide cache.
///
/// The first `library()` call reads the corpus; concurrent first-callers
/// await that single in-flight load. A failed load leaves the cell empty,
/// so a later call retries instead of serving a partial corpus.
#[derive(Debug)]
pub struct GuideStore {
    dir: PathBuf,
    cell: OnceCell<GuideLibrary>,
}

impl GuideStore {
    /// Create a store that reads guides from `dir` on first use
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            cell: OnceCell::new(),
        }
    }

    /// The directory this store reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The cached library, loading it on first call
    pub async fn library(&self) -> Result<&GuideLibrary> {
        self.cell
            .get_or_try_init(|| GuideLibrary::load(&self.dir))
            .await
    }
}

/// Default guides directory: `guides/` next to the running executable when
/// deployed, falling back to the crate root for development builds. Never
/// the caller's working directory.
pub fn default_guides_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("guides");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("guides")
}
