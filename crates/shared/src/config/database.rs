use anyhow::Context;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

pub type ConnectionPool = Pool<Sqlite>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        min_conn: u32,
        max_conn: u32,
    ) -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .with_context(|| format!("Invalid database url: {connection_string}"))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(connection_string) {
            // every in-memory connection opens a fresh database, so keep exactly one alive
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            let max_conn = max_conn.max(1);
            SqlitePoolOptions::new()
                .min_connections(min_conn.min(max_conn))
                .max_connections(max_conn)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}

fn is_in_memory(connection_string: &str) -> bool {
    connection_string.contains(":memory:") || connection_string.contains("mode=memory")
}
