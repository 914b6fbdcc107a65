use super::*;
use crate::database::quote;
use tokio_postgres::types::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: Kind,
}

/// Table layout, fixed by the first chunk of a load.
///
/// Like the other table descriptions in this crate it performs no I/O; it
/// only renders the SQL that a [`crate::database::Sink`] executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
    indexed: bool,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            indexed: false,
        }
    }

    /// Prepends the BIGINT row ordinal column.
    pub fn indexed(mut self) -> Self {
        if !self.indexed {
            self.columns.insert(
                0,
                Column {
                    name: crate::INDEX_COLUMN.to_owned(),
                    kind: Kind::BigInt,
                },
            );
            self.indexed = true;
        }
        self
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    /// Wire types for the binary COPY protocol, in column order.
    pub fn types(&self) -> Vec<Type> {
        self.columns.iter().map(|c| c.kind.pg()).collect()
    }

    /// `DROP TABLE IF EXISTS` statement.
    pub fn drops(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", quote(table))
    }

    /// `CREATE TABLE` statement.
    pub fn creates(&self, table: &str) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("{} {}", quote(&c.name), c.kind.sql()))
            .collect::<Vec<_>>()
            .join(",\n    ");
        format!("CREATE TABLE {} (\n    {}\n);", quote(table), columns)
    }

    /// `CREATE INDEX` statement for the row ordinal, if the table has one.
    pub fn indices(&self, table: &str) -> Option<String> {
        self.indexed.then(|| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({});",
                quote(&format!("ix_{}_{}", table, crate::INDEX_COLUMN)),
                quote(table),
                quote(crate::INDEX_COLUMN)
            )
        })
    }

    /// Drop, create, and index, as one batch.
    pub fn replaces(&self, table: &str) -> String {
        [Some(self.drops(table)), Some(self.creates(table)), self.indices(table)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `COPY ... FROM STDIN BINARY` command for bulk loading.
    pub fn copy(&self, table: &str) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| quote(&c.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("COPY {} ({}) FROM STDIN BINARY", quote(table), columns)
    }
}
