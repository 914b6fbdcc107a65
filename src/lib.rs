pub mod args;
pub mod database;
pub mod ingest;
pub mod reports;

// ============================================================================
// SOURCE FILES
// Fixed inputs, read relative to the working directory.
// ============================================================================
/// Trip records for October 2019.
pub const TRIPS_FILE: &str = "green_tripdata_2019-10.csv";
/// Zone identifier → zone name lookup.
pub const ZONES_FILE: &str = "taxi_zone_lookup.csv";

// ============================================================================
// INGESTION
// ============================================================================
/// Rows per chunk when streaming the trip file.
pub const CHUNK_SIZE: usize = 100_000;
/// Name of the row ordinal column prepended to chunked tables.
pub const INDEX_COLUMN: &str = "index";
/// Trip columns stored as TIMESTAMP regardless of inferred type.
pub const TIMESTAMP_COLUMNS: [&str; 2] = [PICKUP_DATETIME, DROPOFF_DATETIME];

// ============================================================================
// TRIP COLUMNS
// ============================================================================
#[rustfmt::skip]
pub const PICKUP_DATETIME:  &str = "lpep_pickup_datetime";
#[rustfmt::skip]
pub const DROPOFF_DATETIME: &str = "lpep_dropoff_datetime";
#[rustfmt::skip]
pub const TRIP_DISTANCE:    &str = "trip_distance";
#[rustfmt::skip]
pub const TIP_AMOUNT:       &str = "tip_amount";
#[rustfmt::skip]
pub const TOTAL_AMOUNT:     &str = "total_amount";
#[rustfmt::skip]
pub const PICKUP_LOCATION:  &str = "PULocationID";
#[rustfmt::skip]
pub const DROPOFF_LOCATION: &str = "DOLocationID";

// ============================================================================
// ZONE COLUMNS
// ============================================================================
#[rustfmt::skip]
pub const ZONE_ID:          &str = "LocationID";
#[rustfmt::skip]
pub const ZONE_NAME:        &str = "Zone";

// ============================================================================
// REPORT FILTERS
// Literal filter values baked into the four reports.
// ============================================================================
/// First day of the reporting month (inclusive).
pub const MONTH_START: (i32, u32, u32) = (2019, 10, 1);
/// First day after the reporting month (exclusive).
pub const MONTH_END: (i32, u32, u32) = (2019, 11, 1);
/// Pickup date for the zone revenue report.
pub const REVENUE_DATE: (i32, u32, u32) = (2019, 10, 18);
/// Minimum summed total_amount for a pickup zone to be reported.
pub const REVENUE_THRESHOLD: f64 = 13_000.0;
/// Pickup zone for the tip report.
pub const TIP_PICKUP_ZONE: &str = "East Harlem North";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Calendar date from one of the `(year, month, day)` filter constants.
pub fn date((y, m, d): (i32, u32, u32)) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
