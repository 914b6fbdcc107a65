//! In-memory [`Sink`] that records every operation, for loader tests.
use super::*;
use crate::database::Sink;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Replace(String),
    Append(String, usize),
}

#[derive(Default)]
pub struct Memory {
    tables: Mutex<BTreeMap<String, (Schema, Vec<Row>)>>,
    ops: Mutex<Vec<Op>>,
}

impl Memory {
    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }
    pub fn appends(&self, table: &str) -> Vec<usize> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Append(t, n) if t == table => Some(n),
                _ => None,
            })
            .collect()
    }
    pub fn schema(&self, table: &str) -> Option<Schema> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map(|(schema, _)| schema.clone())
    }
    pub fn table(&self, table: &str) -> Vec<Row> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default()
    }
    pub fn rows(&self, table: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map_or(0, |(_, rows)| rows.len())
    }
}

#[async_trait::async_trait]
impl Sink for Memory {
    async fn replace(&self, table: &str, schema: &Schema) -> anyhow::Result<()> {
        self.ops.lock().unwrap().push(Op::Replace(table.to_owned()));
        self.tables
            .lock()
            .unwrap()
            .insert(table.to_owned(), (schema.clone(), Vec::new()));
        Ok(())
    }
    async fn append(&self, table: &str, schema: &Schema, rows: &[Row]) -> anyhow::Result<u64> {
        self.ops
            .lock()
            .unwrap()
            .push(Op::Append(table.to_owned(), rows.len()));
        let mut tables = self.tables.lock().unwrap();
        let Some((existing, stored)) = tables.get_mut(table) else {
            anyhow::bail!("relation {} does not exist", table);
        };
        anyhow::ensure!(existing == schema, "schema of {} changed", table);
        anyhow::ensure!(
            rows.iter().all(|r| r.values().len() == schema.columns().len()),
            "row width does not match {}",
            table
        );
        stored.extend(rows.iter().cloned());
        Ok(rows.len() as u64)
    }
}
