use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::AppError;

/// Connect to the database. Does NOT run migrations.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);

    // An in-memory sqlite database exists per connection; more than one
    // pooled connection would each see a different empty database.
    if url.starts_with("sqlite::memory:") {
        opt.min_connections(1).max_connections(1);
    }

    let conn = Database::connect(opt).await?;
    Ok(conn)
}

/// Single bootstrap entrypoint: connect and bring the schema up to date.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}
