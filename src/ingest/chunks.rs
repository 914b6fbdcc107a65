use super::*;
use csv::StringRecord;
use std::io::Read;
use std::sync::Arc;

/// Iterator over fixed-size [`Frame`]s of a CSV source.
///
/// Every frame holds exactly `size` records except possibly the last.
/// A header-only source yields nothing.
pub struct Chunks<R: Read> {
    reader: csv::Reader<R>,
    headers: Arc<StringRecord>,
    size: usize,
    offset: u64,
    done: bool,
}

impl<R: Read> Chunks<R> {
    pub fn new(mut reader: csv::Reader<R>, size: usize) -> Result<Self, csv::Error> {
        let headers = Arc::new(reader.headers()?.clone());
        Ok(Self {
            reader,
            headers,
            size: size.max(1),
            offset: 0,
            done: false,
        })
    }

    pub fn headers(&self) -> Arc<StringRecord> {
        self.headers.clone()
    }
}

impl<R: Read> Iterator for Chunks<R> {
    type Item = Result<Frame, csv::Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut records = Vec::with_capacity(self.size.min(4096));
        let mut record = StringRecord::new();
        while records.len() < self.size {
            match self.reader.read_record(&mut record) {
                Ok(true) => records.push(record.clone()),
                Ok(false) => break,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        if records.len() < self.size {
            self.done = true;
        }
        if records.is_empty() {
            return None;
        }
        let frame = Frame::new(self.headers.clone(), records, self.offset);
        self.offset += frame.len() as u64;
        Some(Ok(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(n: usize) -> String {
        std::iter::once("id,fare".to_owned())
            .chain((0..n).map(|i| format!("{},{}.5", i, i)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sizes(n: usize, c: usize) -> Vec<usize> {
        let text = csv(n);
        let reader = csv::Reader::from_reader(text.as_bytes());
        Chunks::new(reader, c)
            .unwrap()
            .map(|f| f.unwrap().len())
            .collect()
    }

    #[test]
    fn splits_into_full_and_partial_chunks() {
        assert_eq!(sizes(25, 10), vec![10, 10, 5]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_chunk() {
        assert_eq!(sizes(20, 10), vec![10, 10]);
    }

    #[test]
    fn fewer_rows_than_chunk_is_one_chunk() {
        assert_eq!(sizes(3, 100), vec![3]);
    }

    #[test]
    fn header_only_yields_nothing() {
        assert_eq!(sizes(0, 10), Vec::<usize>::new());
    }

    #[test]
    fn zero_size_is_treated_as_one() {
        assert_eq!(sizes(3, 0), vec![1, 1, 1]);
    }

    #[test]
    fn offsets_are_continuous() {
        let text = csv(7);
        let reader = csv::Reader::from_reader(text.as_bytes());
        let offsets = Chunks::new(reader, 3)
            .unwrap()
            .map(|f| f.unwrap().offset())
            .collect::<Vec<_>>();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[test]
    fn ragged_rows_are_errors() {
        let text = "a,b\n1,2\n3\n";
        let reader = csv::Reader::from_reader(text.as_bytes());
        let mut chunks = Chunks::new(reader, 10).unwrap();
        assert!(chunks.next().unwrap().is_err());
        assert!(chunks.next().is_none());
    }
}
