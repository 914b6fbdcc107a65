use super::*;
use std::pin::Pin;
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::types::ToSql;

/// One typed record, in schema column order.
///
/// Field order and types must exactly match the [`Schema`] the row was
/// coerced into, since the COPY stream carries no column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(Vec<Value>);

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl Row {
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Writes this row to the binary COPY stream.
    pub async fn write(
        &self,
        writer: Pin<&mut BinaryCopyInWriter>,
    ) -> Result<(), tokio_postgres::Error> {
        let fields = self
            .0
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();
        writer.write(&fields).await
    }
}
