//! Local filesystem store for uploaded book cover images.
//!
//! Files are kept under a flat root directory keyed by the client-supplied
//! filename and served back under [`PUBLIC_ROUTE`]. A later upload with the
//! same filename overwrites the earlier one; last writer wins.

use std::io;
use std::path::{Path, PathBuf};

/// URL prefix the static file service is mounted on.
pub const PUBLIC_ROUTE: &str = "/images";

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }

    /// The public URL a stored file is served under.
    pub fn public_url(filename: &str) -> String {
        format!("{PUBLIC_ROUTE}/{filename}")
    }

    /// On-disk location for a stored file.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Copy `src` into the store under `filename`, replacing any existing
    /// file of that name. Blocking; call from a blocking-friendly context.
    pub fn store(&self, filename: &str, src: &Path) -> io::Result<u64> {
        std::fs::copy(src, self.path_for(filename))
    }
}
