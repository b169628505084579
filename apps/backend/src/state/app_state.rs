use sea_orm::DatabaseConnection;

use crate::media::MediaStore;

/// Application state containing shared resources. Built once at startup and
/// handed to handlers through `web::Data`; nothing here is ambient.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool (absent only in focused tests)
    db: Option<DatabaseConnection>,
    /// Store for uploaded images
    media: MediaStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, media: MediaStore) -> Self {
        Self {
            db: Some(db),
            media,
        }
    }

    /// State without a database connection (for tests that never touch it)
    pub fn without_db(media: MediaStore) -> Self {
        Self { db: None, media }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn media(&self) -> &MediaStore {
        &self.media
    }
}
