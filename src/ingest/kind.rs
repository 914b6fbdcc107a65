use tokio_postgres::types::Type;

/// Tokens read as missing values, in any column.
#[rustfmt::skip]
pub const NULLS: [&str; 19] = [
    "", "NA", "N/A", "n/a", "<NA>", "#NA", "#N/A", "#N/A N/A",
    "NaN", "-NaN", "nan", "-nan", "NULL", "null", "None",
    "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

pub fn is_null(cell: &str) -> bool {
    NULLS.contains(&cell)
}

/// Number text that parses to NaN (`NAN`, `-NaN`, `+nan`, ...) is a gap too.
pub fn is_nan(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok_and(f64::is_nan)
}

pub fn is_bool(cell: &str) -> bool {
    matches!(cell, "True" | "False" | "true" | "false" | "TRUE" | "FALSE")
}

/// Column storage type, inferred from CSV text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    BigInt,
    Double,
    Bool,
    Timestamp,
    Text,
}

impl Kind {
    /// Infers the narrowest kind that holds every cell.
    ///
    /// A column of integers with gaps widens to `Double`, a column with only
    /// gaps is `Double`, and a column with no cells at all is `Text`.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut rows = 0usize;
        let mut nulls = 0usize;
        let mut bools = true;
        let mut ints = true;
        let mut floats = true;
        for cell in cells {
            rows += 1;
            if is_null(cell) || is_nan(cell) {
                nulls += 1;
                continue;
            }
            bools &= is_bool(cell);
            ints &= cell.parse::<i64>().is_ok();
            floats &= cell.parse::<f64>().is_ok();
        }
        match (rows, nulls) {
            (0, _) => Self::Text,
            (r, n) if r == n => Self::Double,
            (_, 0) if bools => Self::Bool,
            (_, 0) if ints => Self::BigInt,
            (_, _) if ints || floats => Self::Double,
            (_, _) => Self::Text,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Self::BigInt => "BIGINT",
            Self::Double => "DOUBLE PRECISION",
            Self::Bool => "BOOLEAN",
            Self::Timestamp => "TIMESTAMP",
            Self::Text => "TEXT",
        }
    }

    /// Wire type for the binary COPY protocol.
    pub fn pg(&self) -> Type {
        match self {
            Self::BigInt => Type::INT8,
            Self::Double => Type::FLOAT8,
            Self::Bool => Type::BOOL,
            Self::Timestamp => Type::TIMESTAMP,
            Self::Text => Type::TEXT,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql())
    }
}
