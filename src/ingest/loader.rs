use super::*;
use crate::database::Sink;
use anyhow::Context;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Outcome of one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub table: String,
    pub rows: u64,
    pub writes: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows into {} ({} writes)",
            self.rows, self.table, self.writes
        )
    }
}

/// Describes how a CSV source lands in a table.
///
/// The first chunk replaces the table and fixes its schema; every chunk is
/// then appended with one COPY. A failing chunk aborts the load and leaves
/// whatever was already appended in place.
#[derive(Debug, Clone)]
pub struct Ingest {
    table: String,
    chunk_size: usize,
    timestamps: Vec<String>,
    index: bool,
}

impl Ingest {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_owned(),
            chunk_size: crate::CHUNK_SIZE,
            timestamps: Vec::new(),
            index: false,
        }
    }

    /// Trip table: chunked, with pickup/dropoff timestamps and a row index.
    pub fn trips(table: &str) -> Self {
        Self::new(table)
            .with_timestamps(&crate::TIMESTAMP_COLUMNS)
            .with_index()
    }

    /// Zone lookup table: plain columns, no row index.
    pub fn zones(table: &str) -> Self {
        Self::new(table)
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_timestamps(mut self, columns: &[&str]) -> Self {
        self.timestamps = columns.iter().map(|&c| c.to_owned()).collect();
        self
    }

    pub fn with_index(mut self) -> Self {
        self.index = true;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn schema(&self, frame: &Frame) -> Result<Schema, IngestError> {
        let timestamps = self.timestamps.iter().map(String::as_str).collect::<Vec<_>>();
        let schema = frame.infer(&timestamps)?;
        Ok(match self.index {
            true => schema.indexed(),
            false => schema,
        })
    }

    /// Streams the file at `path` into the table in chunks.
    pub async fn load<S: Sink + ?Sized>(&self, sink: &S, path: &Path) -> anyhow::Result<Summary> {
        log::info!("loading {} into {}", path.display(), self.table);
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        self.load_reader(sink, file).await
    }

    /// Streams any CSV source into the table in chunks.
    pub async fn load_reader<S: Sink + ?Sized, R: Read>(
        &self,
        sink: &S,
        reader: R,
    ) -> anyhow::Result<Summary> {
        let mut chunks = Chunks::new(csv::Reader::from_reader(reader), self.chunk_size)
            .context("read csv header")?;
        let first = match chunks.next() {
            Some(frame) => frame.context("read csv chunk")?,
            None => Frame::empty(chunks.headers()),
        };
        let schema = self.schema(&first)?;
        sink.replace(&self.table, &schema).await?;
        let mut summary = self.summary();
        let mut pending = Some(Ok(first));
        loop {
            let start = Instant::now();
            let Some(frame) = pending.take().or_else(|| chunks.next()) else {
                break;
            };
            let frame = frame.context("read csv chunk")?;
            if frame.is_empty() {
                continue;
            }
            let rows = frame.rows(&schema)?;
            let written = sink.append(&self.table, &schema, &rows).await?;
            summary.rows += written;
            summary.writes += 1;
            log::info!(
                "inserted chunk {} ({} rows), took {:.3} seconds",
                summary.writes,
                written,
                start.elapsed().as_secs_f64()
            );
        }
        log::info!("finished ingesting {}", summary);
        Ok(summary)
    }

    /// Reads the file at `path` in full and writes it in one piece.
    pub async fn lookup<S: Sink + ?Sized>(&self, sink: &S, path: &Path) -> anyhow::Result<Summary> {
        log::info!("loading {} into {}", path.display(), self.table);
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        self.lookup_reader(sink, file).await
    }

    /// Reads any CSV source in full and writes it in one piece.
    pub async fn lookup_reader<S: Sink + ?Sized, R: Read>(
        &self,
        sink: &S,
        reader: R,
    ) -> anyhow::Result<Summary> {
        let ref mut reader = csv::Reader::from_reader(reader);
        let frame = Frame::read_all(reader).context("read csv")?;
        let schema = self.schema(&frame)?;
        let rows = frame.rows(&schema)?;
        sink.replace(&self.table, &schema).await?;
        let mut summary = self.summary();
        if !rows.is_empty() {
            summary.rows = sink.append(&self.table, &schema, &rows).await?;
            summary.writes = 1;
        }
        log::info!("finished loading {}", summary);
        Ok(summary)
    }

    fn summary(&self) -> Summary {
        Summary {
            table: self.table.clone(),
            rows: 0,
            writes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::memory::Memory;
    use crate::ingest::memory::Op;

    fn trips(n: usize) -> String {
        let mut csv = String::from(
            "VendorID,lpep_pickup_datetime,lpep_dropoff_datetime,trip_distance,PULocationID\n",
        );
        for i in 0..n {
            csv.push_str(&format!(
                "{},2019-10-{:02} 0{}:26:02,2019-10-{:02} 0{}:39:58,{}.5,{}\n",
                1 + i % 2,
                1 + i % 28,
                i % 10,
                1 + i % 28,
                i % 10,
                i % 12,
                1 + i % 265,
            ));
        }
        csv
    }

    async fn load(n: usize, c: usize) -> (Memory, Summary) {
        let sink = Memory::default();
        let csv = trips(n);
        let summary = Ingest::trips("green_taxi_trips")
            .with_chunk_size(c)
            .load_reader(&sink, csv.as_bytes())
            .await
            .unwrap();
        (sink, summary)
    }

    #[tokio::test]
    async fn row_count_matches_source_for_any_chunking() {
        for (n, c) in [(0, 10), (1, 10), (9, 10), (10, 10), (11, 10), (57, 7), (100, 1)] {
            let (sink, summary) = load(n, c).await;
            assert_eq!(sink.rows("green_taxi_trips"), n, "n={} c={}", n, c);
            assert_eq!(summary.rows, n as u64);
            assert_eq!(summary.writes, n.div_ceil(c));
        }
    }

    #[tokio::test]
    async fn first_chunk_replaces_then_appends() {
        let (sink, _) = load(25, 10).await;
        assert_eq!(
            sink.ops(),
            vec![
                Op::Replace("green_taxi_trips".into()),
                Op::Append("green_taxi_trips".into(), 10),
                Op::Append("green_taxi_trips".into(), 10),
                Op::Append("green_taxi_trips".into(), 5),
            ]
        );
    }

    #[tokio::test]
    async fn header_only_creates_empty_table() {
        let (sink, summary) = load(0, 100).await;
        assert_eq!(sink.ops(), vec![Op::Replace("green_taxi_trips".into())]);
        assert_eq!(summary.writes, 0);
        let schema = sink.schema("green_taxi_trips").unwrap();
        assert_eq!(schema.kind(crate::PICKUP_DATETIME), Some(Kind::Timestamp));
        assert_eq!(schema.kind("trip_distance"), Some(Kind::Text));
    }

    #[tokio::test]
    async fn timestamps_are_typed() {
        let (sink, _) = load(3, 2).await;
        let schema = sink.schema("green_taxi_trips").unwrap();
        assert_eq!(schema.kind(crate::PICKUP_DATETIME), Some(Kind::Timestamp));
        assert_eq!(schema.kind(crate::DROPOFF_DATETIME), Some(Kind::Timestamp));
        let row = &sink.table("green_taxi_trips")[0];
        let pickup = schema
            .columns()
            .iter()
            .position(|c| c.name == crate::PICKUP_DATETIME)
            .unwrap();
        match &row.values()[pickup] {
            Value::Timestamp(ts) => assert_eq!(ts.to_string(), "2019-10-01 00:26:02"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn index_is_continuous_across_chunks() {
        let (sink, _) = load(23, 5).await;
        let index = sink
            .table("green_taxi_trips")
            .iter()
            .map(|r| r.values()[0].clone())
            .collect::<Vec<_>>();
        let expected = (0..23).map(Value::BigInt).collect::<Vec<_>>();
        assert_eq!(index, expected);
    }

    #[tokio::test]
    async fn reloading_duplicates_nothing_from_first_chunk() {
        let sink = Memory::default();
        let csv = trips(15);
        let ingest = Ingest::trips("t").with_chunk_size(10);
        ingest.load_reader(&sink, csv.as_bytes()).await.unwrap();
        ingest.load_reader(&sink, csv.as_bytes()).await.unwrap();
        assert_eq!(sink.rows("t"), 15);
    }

    #[tokio::test]
    async fn failing_chunk_leaves_partial_table() {
        let mut csv = trips(10);
        csv.push_str("1,not a time,2019-10-01 00:39:58,1.5,7\n");
        let sink = Memory::default();
        let result = Ingest::trips("t")
            .with_chunk_size(5)
            .load_reader(&sink, csv.as_bytes())
            .await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<IngestError>(),
            Some(IngestError::Timestamp { row: 10, .. })
        ));
        assert_eq!(sink.rows("t"), 10);
    }

    #[tokio::test]
    async fn missing_timestamp_column_writes_nothing() {
        let sink = Memory::default();
        let result = Ingest::trips("t")
            .load_reader(&sink, "a,b\n1,2\n".as_bytes())
            .await;
        assert!(result.is_err());
        assert!(sink.ops().is_empty());
    }

    #[tokio::test]
    async fn loads_250k_rows_in_three_writes() {
        let (sink, summary) = load(250_000, crate::CHUNK_SIZE).await;
        assert_eq!(summary.writes, 3);
        assert_eq!(summary.rows, 250_000);
        assert_eq!(sink.rows("green_taxi_trips"), 250_000);
        assert_eq!(sink.appends("green_taxi_trips"), vec![100_000, 100_000, 50_000]);
    }

    const ZONES_A: &str = "\
LocationID,Borough,Zone,service_zone
1,EWR,Newark Airport,EWR
2,Queens,Jamaica Bay,Boro Zone
74,Manhattan,East Harlem North,Boro Zone
";

    const ZONES_B: &str = "\
LocationID,Borough,Zone,service_zone
75,Manhattan,East Harlem South,Boro Zone
";

    #[tokio::test]
    async fn lookup_is_one_write() {
        let sink = Memory::default();
        let summary = Ingest::zones("taxi_zone_lookup")
            .lookup_reader(&sink, ZONES_A.as_bytes())
            .await
            .unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.writes, 1);
        let schema = sink.schema("taxi_zone_lookup").unwrap();
        assert!(!schema.is_indexed());
        assert_eq!(schema.kind(crate::ZONE_ID), Some(Kind::BigInt));
        assert_eq!(schema.kind(crate::ZONE_NAME), Some(Kind::Text));
    }

    #[tokio::test]
    async fn lookup_reload_replaces_rows() {
        let sink = Memory::default();
        let ingest = Ingest::zones("taxi_zone_lookup");
        ingest.lookup_reader(&sink, ZONES_A.as_bytes()).await.unwrap();
        ingest.lookup_reader(&sink, ZONES_B.as_bytes()).await.unwrap();
        let rows = sink.table("taxi_zone_lookup");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values()[0], Value::BigInt(75));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ZONES_A.as_bytes()).unwrap();
        let sink = Memory::default();
        let summary = Ingest::zones("z").lookup(&sink, file.path()).await.unwrap();
        assert_eq!(summary.rows, 3);
        let missing = Ingest::zones("z")
            .lookup(&sink, Path::new("does/not/exist.csv"))
            .await;
        assert!(missing.is_err());
    }
}
