//! SeaORM adapter for the books table.

use sea_orm::sea_query::{Condition, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter, QuerySelect, Set,
};

use crate::entities::books;

pub mod dto;

pub use dto::BookCreate;

// Adapter functions return DbErr; the services layer maps to AppError.

/// Fetch one page of books, optionally filtered by a case-insensitive
/// substring match against title, author, and publisher (OR-combined).
///
/// The filter is expressed as `lower(col) LIKE '%needle%'` so it behaves
/// the same on Postgres and SQLite. No ORDER BY: result order is whatever
/// the backing store yields.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    needle: Option<&str>,
    offset: u64,
    limit: u64,
) -> Result<Vec<books::Model>, DbErr> {
    let mut select = books::Entity::find();

    if let Some(needle) = needle {
        let pattern = format!("%{}%", needle.to_lowercase());
        let contains = |col: books::Column| {
            Expr::expr(Func::lower(Expr::col((books::Entity, col)))).like(pattern.clone())
        };
        select = select.filter(
            Condition::any()
                .add(contains(books::Column::Title))
                .add(contains(books::Column::Author))
                .add(contains(books::Column::Publisher)),
        );
    }

    select.offset(offset).limit(limit).all(conn).await
}

/// Insert a new book and return the stored row, including the generated id.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookCreate,
) -> Result<books::Model, DbErr> {
    let book_active = books::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        author: Set(dto.author),
        publisher: Set(dto.publisher),
        year: Set(dto.year),
        image_url: Set(dto.image_url),
    };

    book_active.insert(conn).await
}
