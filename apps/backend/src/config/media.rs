use std::env;
use std::path::PathBuf;

/// Environment variable overriding where uploaded images are kept.
pub const MEDIA_DIR_VAR: &str = "MEDIA_DIR";

/// Default media directory, relative to the working directory.
pub const DEFAULT_MEDIA_DIR: &str = "static/images";

/// Directory uploaded images are written to and served from.
pub fn media_dir() -> PathBuf {
    env::var(MEDIA_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MEDIA_DIR))
}
