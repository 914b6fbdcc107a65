//! Command-line arguments.
use crate::database::Postgres;
use clap::Parser;
use std::path::PathBuf;

/// Ingest CSV data to Postgres
#[derive(Parser, Debug, Clone)]
#[command(name = "ingest", about = "Ingest CSV data to Postgres")]
pub struct Args {
    /// user name for postgres
    #[arg(long)]
    pub user: String,
    /// password for postgres
    #[arg(long)]
    pub password: String,
    /// host for postgres
    #[arg(long)]
    pub host: String,
    /// port for postgres
    #[arg(long)]
    pub port: u16,
    /// database name for postgres
    #[arg(long)]
    pub db: String,
    /// name of the table where we will write the trips to
    #[arg(long = "table_name")]
    pub table_name: String,
    /// name of the table where we will write the zones to
    #[arg(long)]
    pub zone: String,
    /// trip records file
    #[arg(long, default_value = crate::TRIPS_FILE)]
    pub trips: PathBuf,
    /// zone lookup file
    #[arg(long, default_value = crate::ZONES_FILE)]
    pub zones: PathBuf,
    /// rows per chunk when loading trips
    #[arg(long = "chunk-size", default_value_t = crate::CHUNK_SIZE)]
    pub chunk_size: usize,
}

impl Args {
    pub fn postgres(&self) -> Postgres {
        Postgres {
            user: self.user.clone(),
            password: self.password.clone(),
            host: self.host.clone(),
            port: self.port,
            db: self.db.clone(),
        }
    }
}
