//! Ingest Binary
//!
//! Loads the trip and zone CSVs into PostgreSQL, then prints the four
//! trip reports.
//!
//! Required: --user, --password, --host, --port, --db, --table_name, --zone

use clap::Parser;
use tripload::args::Args;
use tripload::database::Check;
use tripload::ingest::Ingest;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tripload::log();
    let args = Args::parse();
    let client = args.postgres().connect().await?;

    println!("Loading taxi data...");
    Ingest::trips(&args.table_name)
        .with_chunk_size(args.chunk_size)
        .load(&client, &args.trips)
        .await?;

    println!("\nLoading zones data...");
    Ingest::zones(&args.zone)
        .lookup(&client, &args.zones)
        .await?;

    for table in [&args.table_name, &args.zone] {
        log::debug!("{} holds {} rows", table, client.rows(table).await?);
    }

    let text = tripload::reports::summarize(&client, &args.table_name, &args.zone).await?;
    println!("\n{}", text);
    Ok(())
}
