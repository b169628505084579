//! Book search and creation on top of the SeaORM adapter.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::adapters::books_sea;
use crate::adapters::books_sea::BookCreate;
use crate::entities::books;
use crate::error::AppError;
use crate::errors::ErrorCode;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;

pub const MIN_QUERY_LEN: usize = 3;
pub const MAX_QUERY_LEN: usize = 100;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_YEAR_LEN: usize = 4;
pub const MAX_IMAGE_URL_LEN: usize = 500;

/// Validated search parameters. Construct via [`SearchParams::new`]; an
/// absent, empty, or whitespace-only query means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    needle: Option<String>,
    page: u64,
    size: u64,
}

impl SearchParams {
    pub fn new(q: Option<&str>, page: u64, size: u64) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::invalid(
                ErrorCode::InvalidPage,
                "page must be at least 1".to_string(),
            ));
        }
        if size < 1 || size > MAX_PAGE_SIZE {
            return Err(AppError::invalid(
                ErrorCode::InvalidPageSize,
                format!("size must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }

        let needle = match q.map(str::trim) {
            None | Some("") => None,
            Some(trimmed) => {
                let len = trimmed.chars().count();
                if !(MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&len) {
                    return Err(AppError::invalid(
                        ErrorCode::InvalidQuery,
                        format!("q must be between {MIN_QUERY_LEN} and {MAX_QUERY_LEN} characters"),
                    ));
                }
                Some(trimmed.to_string())
            }
        };

        Ok(Self { needle, page, size })
    }

    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.size
    }

    pub fn limit(&self) -> u64 {
        self.size
    }
}

/// Run a paginated search. Zero matches and out-of-range pages are not
/// errors; both yield an empty list.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    params: &SearchParams,
) -> Result<Vec<books::Model>, AppError> {
    let found =
        books_sea::search(conn, params.needle(), params.offset(), params.limit()).await?;
    debug!(
        count = found.len(),
        filtered = params.needle().is_some(),
        "book search executed"
    );
    Ok(found)
}

/// A book submission before it has an id or a stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: String,
}

impl NewBook {
    /// Field checks mirroring the column constraints, so callers get a 400
    /// instead of a database error. Values are stored exactly as submitted.
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("author", &self.author)?;
        require_non_empty("publisher", &self.publisher)?;
        require_non_empty("year", &self.year)?;

        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("title must be at most {MAX_TITLE_LEN} characters"),
            ));
        }
        if self.year.chars().count() > MAX_YEAR_LEN {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("year must be at most {MAX_YEAR_LEN} characters"),
            ));
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} must not be empty"),
        ));
    }
    Ok(())
}

/// Insert a validated book, with the already-stored image path if any.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book: NewBook,
    image_url: Option<String>,
) -> Result<books::Model, AppError> {
    let created = books_sea::insert(
        conn,
        BookCreate {
            title: book.title,
            author: book.author,
            publisher: book.publisher,
            year: book.year,
            image_url,
        },
    )
    .await?;

    info!(book_id = created.id, has_image = created.image_url.is_some(), "book record created");
    Ok(created)
}
