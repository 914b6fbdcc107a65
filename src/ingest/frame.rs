use super::*;
use csv::StringRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// A batch of raw CSV records sharing one header.
///
/// `offset` is the ordinal of the first record within its source, so row
/// numbers stay continuous across chunks.
#[derive(Debug, Clone)]
pub struct Frame {
    headers: Arc<StringRecord>,
    records: Vec<StringRecord>,
    offset: u64,
}

impl Frame {
    pub fn new(headers: Arc<StringRecord>, records: Vec<StringRecord>, offset: u64) -> Self {
        Self {
            headers,
            records,
            offset,
        }
    }

    /// Header with no records.
    pub fn empty(headers: Arc<StringRecord>) -> Self {
        Self::new(headers, Vec::new(), 0)
    }

    /// Reads every remaining record of `reader` into one frame.
    pub fn read_all<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Self, csv::Error> {
        let headers = Arc::new(reader.headers()?.clone());
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(headers, records, 0))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    fn cells(&self, i: usize) -> impl Iterator<Item = &str> {
        self.records.iter().map(move |r| r.get(i).unwrap_or(""))
    }

    /// Header names made unique: a repeated `a` becomes `a.1`, `a.2`, ...
    /// and a suffixed name already taken earlier is suffixed again.
    pub fn names(&self) -> Vec<String> {
        let mut seen = HashMap::<String, usize>::new();
        self.headers
            .iter()
            .map(|header| {
                let mut name = header.to_owned();
                let mut count = seen.get(&name).copied().unwrap_or(0);
                while count > 0 {
                    seen.insert(name.clone(), count + 1);
                    name = format!("{}.{}", name, count);
                    count = seen.get(&name).copied().unwrap_or(0);
                }
                seen.insert(name.clone(), count + 1);
                name
            })
            .collect()
    }

    /// Infers a schema from this frame, forcing `timestamps` to TIMESTAMP.
    pub fn infer(&self, timestamps: &[&str]) -> Result<Schema, IngestError> {
        if let Some(missing) = timestamps.iter().find(|t| self.position(t).is_none()) {
            return Err(IngestError::MissingColumn(missing.to_string()));
        }
        let columns = self
            .names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column {
                kind: match timestamps.contains(&name.as_str()) {
                    true => Kind::Timestamp,
                    false => Kind::infer(self.cells(i)),
                },
                name,
            })
            .collect();
        Ok(Schema::new(columns))
    }

    /// Coerces every record into `schema`'s column kinds.
    ///
    /// An indexed schema gets the record ordinal as its leading value.
    pub fn rows(&self, schema: &Schema) -> Result<Vec<Row>, IngestError> {
        let skip = schema.is_indexed() as usize;
        let columns = &schema.columns()[skip..];
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| -> Result<Row, IngestError> {
                let ordinal = self.offset + i as u64;
                let index = (skip == 1).then(|| Value::BigInt(ordinal as i64));
                let values = columns
                    .iter()
                    .enumerate()
                    .map(|(j, column)| {
                        let cell = record.get(j).unwrap_or("");
                        Value::parse(cell, column.kind).ok_or_else(|| match column.kind {
                            Kind::Timestamp => IngestError::Timestamp {
                                row: ordinal,
                                column: column.name.clone(),
                                value: cell.to_owned(),
                            },
                            kind => IngestError::Mismatch {
                                row: ordinal,
                                column: column.name.clone(),
                                value: cell.to_owned(),
                                kind,
                            },
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Row::from(index.into_iter().chain(values).collect::<Vec<_>>()))
            })
            .collect()
    }
}
