//! Database access for rooms and orders

pub mod orders;
pub mod rooms;

pub use orders::*;
pub use rooms::*;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the connection pool and bring the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
