//! PostgreSQL connectivity and the traits that separate SQL from the
//! ingestion and reporting logic.
//!
//! - [`Postgres`] — connection parameters and [`Postgres::connect`]
//! - [`Sink`] — table replacement and binary COPY appends
//! - [`Check`] — existence and row count lookups
//! - [`Source`] — the four trip reports
mod check;
mod postgres;
mod sink;
mod source;

pub use check::*;
pub use postgres::*;
pub use sink::*;
pub use source::*;

/// Quotes an identifier so mixed-case column names such as
/// `PULocationID` survive PostgreSQL's case folding.
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote("PULocationID"), "\"PULocationID\"");
        assert_eq!(quote("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(quote("index"), "\"index\"");
    }
}
