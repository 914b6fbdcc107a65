use super::*;
use bytes::BytesMut;
use chrono::NaiveDateTime;
use tokio_postgres::types::IsNull;
use tokio_postgres::types::ToSql;
use tokio_postgres::types::Type;
use tokio_postgres::types::to_sql_checked;

/// A single typed cell, ready for the binary COPY stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    BigInt(i64),
    Double(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl Value {
    /// Coerces CSV text into `kind`. `None` means the text does not fit.
    ///
    /// NaN never reaches the table: outside text columns it is `Null`.
    pub fn parse(cell: &str, kind: Kind) -> Option<Self> {
        if is_null(cell) || (kind != Kind::Text && is_nan(cell)) {
            return Some(Self::Null);
        }
        match kind {
            Kind::Text => Some(Self::Text(cell.to_owned())),
            Kind::Timestamp => timestamp::parse(cell).map(Self::Timestamp),
            Kind::Double => cell.trim().parse::<f64>().ok().map(Self::Double),
            Kind::Bool => match cell {
                "True" | "true" | "TRUE" => Some(Self::Bool(true)),
                "False" | "false" | "FALSE" => Some(Self::Bool(false)),
                _ => None,
            },
            Kind::BigInt => cell
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| {
                    cell.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.fract() == 0.0)
                        .filter(|f| f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                })
                .map(Self::BigInt),
        }
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Self::Null => Ok(IsNull::Yes),
            Self::BigInt(v) => v.to_sql(ty, out),
            Self::Double(v) => v.to_sql(ty, out),
            Self::Bool(v) => v.to_sql(ty, out),
            Self::Timestamp(v) => v.to_sql(ty, out),
            Self::Text(v) => v.to_sql(ty, out),
        }
    }
    fn accepts(ty: &Type) -> bool {
        matches!(
            *ty,
            Type::INT8 | Type::FLOAT8 | Type::BOOL | Type::TIMESTAMP | Type::TEXT
        )
    }
    to_sql_checked!();
}
