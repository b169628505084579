use std::path::PathBuf;

use crate::config::media::media_dir;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::media::MediaStore;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_url: Option<String>,
    media_root: Option<PathBuf>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_url: None,
            media_root: None,
        }
    }

    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    pub fn with_media_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.media_root = Some(root.into());
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let media = MediaStore::new(self.media_root.unwrap_or_else(media_dir));
        media.ensure_root().map_err(|e| {
            AppError::config(format!(
                "failed to create media directory {}: {e}",
                media.root().display()
            ))
        })?;

        if let Some(url) = self.db_url {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(&url).await?;
            Ok(AppState::new(conn, media))
        } else {
            Ok(AppState::without_db(media))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
