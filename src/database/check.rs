use super::quote;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// Check defines the status queries run after a load.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    async fn exists(&self, table: &str) -> anyhow::Result<bool>;
    async fn rows(&self, table: &str) -> anyhow::Result<u64>;
}

#[async_trait::async_trait]
impl Check for Client {
    async fn exists(&self, table: &str) -> anyhow::Result<bool> {
        const SQL: &str = const_format::concatcp!(
            "SELECT EXISTS ( ",
                "SELECT 1 ",
                "FROM   pg_catalog.pg_tables ",
                "WHERE  schemaname = current_schema() ",
                "AND    tablename  = $1",
            ")"
        );
        self.query_one(SQL, &[&table])
            .await
            .with_context(|| format!("check table {}", table))
            .map(|row| row.get::<_, bool>(0))
    }
    async fn rows(&self, table: &str) -> anyhow::Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {t}", t = quote(table));
        self.query_one(sql.as_str(), &[])
            .await
            .with_context(|| format!("count rows of {}", table))
            .map(|row| row.get::<_, i64>(0) as u64)
    }
}

#[async_trait::async_trait]
impl Check for Arc<Client> {
    async fn exists(&self, table: &str) -> anyhow::Result<bool> {
        self.as_ref().exists(table).await
    }
    async fn rows(&self, table: &str) -> anyhow::Result<u64> {
        self.as_ref().rows(table).await
    }
}
