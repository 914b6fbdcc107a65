use crate::ingest::Row;
use crate::ingest::Schema;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::binary_copy::BinaryCopyInWriter;

/// Sink defines the write interface between loaded chunks and PostgreSQL.
/// All DDL and COPY statements are issued here.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    /// Drops `table` if present and recreates it with `schema`.
    async fn replace(&self, table: &str, schema: &Schema) -> anyhow::Result<()>;
    /// Appends `rows` to `table` in one write, returning the rows written.
    async fn append(&self, table: &str, schema: &Schema, rows: &[Row]) -> anyhow::Result<u64>;
}

#[async_trait::async_trait]
impl Sink for Client {
    async fn replace(&self, table: &str, schema: &Schema) -> anyhow::Result<()> {
        log::debug!("replacing table ({})", table);
        self.batch_execute(&schema.replaces(table))
            .await
            .with_context(|| format!("replace table {}", table))
    }

    async fn append(&self, table: &str, schema: &Schema, rows: &[Row]) -> anyhow::Result<u64> {
        let sink = self
            .copy_in(schema.copy(table).as_str())
            .await
            .with_context(|| format!("copy into {}", table))?;
        let writer = BinaryCopyInWriter::new(sink, &schema.types());
        futures::pin_mut!(writer);
        for row in rows {
            row.write(writer.as_mut())
                .await
                .with_context(|| format!("write row into {}", table))?;
        }
        writer
            .finish()
            .await
            .with_context(|| format!("finish copy into {}", table))
    }
}

#[async_trait::async_trait]
impl Sink for Arc<Client> {
    async fn replace(&self, table: &str, schema: &Schema) -> anyhow::Result<()> {
        self.as_ref().replace(table, schema).await
    }
    async fn append(&self, table: &str, schema: &Schema, rows: &[Row]) -> anyhow::Result<u64> {
        self.as_ref().append(table, schema, rows).await
    }
}
