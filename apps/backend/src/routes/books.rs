//! Book HTTP routes: paginated search and multipart creation.

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpRequest};
use serde::Deserialize;
use tracing::info;

use crate::db::txn::with_txn;
use crate::entities::books;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::media::MediaStore;
use crate::services::books::{NewBook, SearchParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_IMAGE_URL_LEN};
use crate::state::app_state::AppState;

/// Raw query parameters for GET /books/search. Absent values fall back to
/// defaults; bounds are checked in `SearchParams::new`.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
    page: Option<u64>,
    size: Option<u64>,
}

/// GET /books/search?q=<string>&page=<int>&size=<int>
///
/// Returns one page of books as a JSON array, optionally filtered by a
/// case-insensitive substring match on title, author, or publisher.
/// Zero matches and past-the-end pages yield `[]`, never an error.
async fn search_books(
    http_req: HttpRequest,
    query: web::Query<SearchQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<books::Model>>, AppError> {
    let SearchQuery { q, page, size } = query.into_inner();
    let params = SearchParams::new(
        q.as_deref(),
        page.unwrap_or(DEFAULT_PAGE),
        size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    let found = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { crate::services::books::search(txn, &params).await })
    })
    .await?;

    Ok(web::Json(found))
}

/// Multipart payload for POST /books/add. The extractor itself rejects
/// requests with a missing required field.
#[derive(Debug, MultipartForm)]
struct AddBookForm {
    title: Text<String>,
    author: Text<String>,
    publisher: Text<String>,
    year: Text<String>,
    image: Option<TempFile>,
}

/// POST /books/add (multipart/form-data)
///
/// Creates a book record. An attached image is written to the media store
/// under its client-supplied filename before the insert runs; a failed
/// insert leaves the stored file behind.
async fn add_book(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<AddBookForm>,
) -> Result<web::Json<books::Model>, AppError> {
    let book = NewBook {
        title: form.title.into_inner(),
        author: form.author.into_inner(),
        publisher: form.publisher.into_inner(),
        year: form.year.into_inner(),
    };
    book.validate()?;

    let image_url = match form.image {
        Some(upload) => Some(save_image(app_state.media(), upload).await?),
        None => None,
    };

    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { crate::services::books::create(txn, book, image_url).await })
    })
    .await?;

    Ok(web::Json(created))
}

/// Write an uploaded image into the media store and return its public URL.
///
/// The filename is taken from the upload as-is; a repeat upload with the
/// same name overwrites the previous file (last writer wins).
async fn save_image(media: &MediaStore, upload: TempFile) -> Result<String, AppError> {
    let filename = upload
        .file_name
        .clone()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::invalid(
                ErrorCode::InvalidImage,
                "uploaded image has no filename".to_string(),
            )
        })?;

    let url = MediaStore::public_url(&filename);
    if url.chars().count() > MAX_IMAGE_URL_LEN {
        return Err(AppError::invalid(
            ErrorCode::InvalidImage,
            format!("image filename yields a URL longer than {MAX_IMAGE_URL_LEN} characters"),
        ));
    }

    let store = media.clone();
    let name = filename.clone();
    // The temp file must stay alive until the copy finishes, so the whole
    // upload moves into the blocking closure.
    web::block(move || store.store(&name, upload.file.path()))
        .await
        .map_err(|e| AppError::internal(format!("image write task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("failed to store image '{filename}': {e}")))?;

    info!(image = %filename, "stored uploaded image");
    Ok(url)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/books/search").route(web::get().to(search_books)));
    cfg.service(web::resource("/books/add").route(web::post().to(add_book)));
}
