use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One book record. Serializes to the wire shape
/// `{id, title, author, publisher, year, image_url}`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    // Kept as text; never validated as numeric.
    pub year: String,
    #[sea_orm(column_name = "image_url")]
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
