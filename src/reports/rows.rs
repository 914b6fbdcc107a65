use super::*;
use chrono::NaiveDate;

/// Trip counts per distance band for the reporting month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistanceBuckets {
    pub up_to_1: i64,
    pub from_1_to_3: i64,
    pub from_3_to_7: i64,
    pub from_7_to_10: i64,
    pub over_10: i64,
}

impl DistanceBuckets {
    pub fn total(&self) -> i64 {
        self.up_to_1 + self.from_1_to_3 + self.from_3_to_7 + self.from_7_to_10 + self.over_10
    }
}

impl Tabular for DistanceBuckets {
    fn headers() -> &'static [&'static str] {
        &[
            "trips_up_to_1_mile",
            "trips_1_to_3_miles",
            "trips_3_to_7_miles",
            "trips_7_to_10_miles",
            "trips_over_10_miles",
        ]
    }
    fn cells(&self) -> Vec<String> {
        [
            self.up_to_1,
            self.from_1_to_3,
            self.from_3_to_7,
            self.from_7_to_10,
            self.over_10,
        ]
        .iter()
        .map(i64::to_string)
        .collect()
    }
}

/// The pickup day holding the single longest trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongestTrip {
    pub day: Option<NaiveDate>,
    pub distance: Option<f64>,
}

impl Tabular for LongestTrip {
    fn headers() -> &'static [&'static str] {
        &["pickup_day", "longest_trip"]
    }
    fn cells(&self) -> Vec<String> {
        vec![cell(&self.day), cell(&self.distance)]
    }
}

/// A pickup zone and its summed fares.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRevenue {
    pub zone: Option<String>,
    pub total: Option<f64>,
}

impl Tabular for ZoneRevenue {
    fn headers() -> &'static [&'static str] {
        &["pickup_zone", "total_amount"]
    }
    fn cells(&self) -> Vec<String> {
        vec![cell(&self.zone), cell(&self.total)]
    }
}

/// A dropoff zone and the largest tip paid on the way there.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTip {
    pub zone: Option<String>,
    pub tip: Option<f64>,
}

impl Tabular for ZoneTip {
    fn headers() -> &'static [&'static str] {
        &["dropoff_zone", "max_tip"]
    }
    fn cells(&self) -> Vec<String> {
        vec![cell(&self.zone), cell(&self.tip)]
    }
}
