use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::AppError;
use tempfile::TempDir;

/// Build an AppState backed by in-memory sqlite with migrations applied and
/// a temp media directory.
///
/// The returned `TempDir` owns the media directory; keep it alive for the
/// duration of the test or the files disappear.
pub async fn build_test_state() -> Result<(AppState, TempDir), AppError> {
    let media_dir = tempfile::tempdir().expect("failed to create temp media dir");

    let state = build_state()
        .with_db_url("sqlite::memory:")
        .with_media_root(media_dir.path().join("images"))
        .build()
        .await?;

    Ok((state, media_dir))
}
