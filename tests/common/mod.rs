#![allow(dead_code)]

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use movie_catalog_api::config::{ApiConfig, DatabaseConfig};
use movie_catalog_api::database::Store;

const FIXTURE: &str = include_str!("../fixtures/movies.sql");

pub struct TestServer {
    pub base_url: String,
    pub store: Store,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn movie_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movie")
            .fetch_one(self.store.pool())
            .await?;
        Ok(count)
    }

    pub async fn last_movie_id(&self) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>("SELECT MAX(movie_id) FROM movie")
            .fetch_one(self.store.pool())
            .await?;
        Ok(id)
    }

    pub async fn drop_table(&self, table: &str) -> Result<()> {
        sqlx::query(&format!("DROP TABLE {table}"))
            .execute(self.store.pool())
            .await?;
        Ok(())
    }
}

/// Start the real router on an ephemeral port over a freshly seeded in-memory store.
pub async fn spawn_server() -> Result<TestServer> {
    let store = Store::connect(&DatabaseConfig::in_memory())
        .await
        .context("failed to open in-memory store")?;

    for statement in FIXTURE.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(store.pool())
            .await
            .with_context(|| format!("fixture statement failed: {statement}"))?;
    }

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    let app = movie_catalog_api::app(store.clone(), &ApiConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        store,
    })
}
