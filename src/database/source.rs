use crate::reports::*;
use crate::*;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

/// Source defines the read interface between the trip reports and PostgreSQL.
/// All SELECT queries are issued here; the SQL itself lives in
/// [`crate::reports::queries`].
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn distances(&self, trips: &str) -> anyhow::Result<DistanceBuckets>;
    async fn longest(&self, trips: &str) -> anyhow::Result<Option<LongestTrip>>;
    async fn revenue(&self, trips: &str, zones: &str) -> anyhow::Result<Vec<ZoneRevenue>>;
    async fn tip(&self, trips: &str, zones: &str) -> anyhow::Result<Option<ZoneTip>>;
}

#[async_trait::async_trait]
impl Source for Client {
    async fn distances(&self, trips: &str) -> anyhow::Result<DistanceBuckets> {
        let lo = date(MONTH_START).and_time(chrono::NaiveTime::default());
        let hi = date(MONTH_END).and_time(chrono::NaiveTime::default());
        let row = self
            .query_one(queries::distances(trips).as_str(), &[&lo, &hi])
            .await
            .context("distance buckets")?;
        Ok(DistanceBuckets {
            up_to_1: row.try_get(0)?,
            from_1_to_3: row.try_get(1)?,
            from_3_to_7: row.try_get(2)?,
            from_7_to_10: row.try_get(3)?,
            over_10: row.try_get(4)?,
        })
    }
    async fn longest(&self, trips: &str) -> anyhow::Result<Option<LongestTrip>> {
        self.query_opt(queries::longest(trips).as_str(), &[])
            .await
            .context("longest trip day")?
            .map(|row| -> anyhow::Result<LongestTrip> {
                Ok(LongestTrip {
                    day: row.try_get(0)?,
                    distance: row.try_get(1)?,
                })
            })
            .transpose()
    }
    async fn revenue(&self, trips: &str, zones: &str) -> anyhow::Result<Vec<ZoneRevenue>> {
        let day = date(REVENUE_DATE);
        self.query(queries::revenue(trips, zones).as_str(), &[&day, &REVENUE_THRESHOLD])
            .await
            .context("pickup zone revenue")?
            .iter()
            .map(|row| -> anyhow::Result<ZoneRevenue> {
                Ok(ZoneRevenue {
                    zone: row.try_get(0)?,
                    total: row.try_get(1)?,
                })
            })
            .collect()
    }
    async fn tip(&self, trips: &str, zones: &str) -> anyhow::Result<Option<ZoneTip>> {
        let lo = date(MONTH_START);
        let hi = date(MONTH_END);
        self.query_opt(queries::tip(trips, zones).as_str(), &[&lo, &hi, &TIP_PICKUP_ZONE])
            .await
            .context("highest tip dropoff")?
            .map(|row| -> anyhow::Result<ZoneTip> {
                Ok(ZoneTip {
                    zone: row.try_get(0)?,
                    tip: row.try_get(1)?,
                })
            })
            .transpose()
    }
}

#[async_trait::async_trait]
impl Source for Arc<Client> {
    async fn distances(&self, trips: &str) -> anyhow::Result<DistanceBuckets> {
        self.as_ref().distances(trips).await
    }
    async fn longest(&self, trips: &str) -> anyhow::Result<Option<LongestTrip>> {
        self.as_ref().longest(trips).await
    }
    async fn revenue(&self, trips: &str, zones: &str) -> anyhow::Result<Vec<ZoneRevenue>> {
        self.as_ref().revenue(trips, zones).await
    }
    async fn tip(&self, trips: &str, zones: &str) -> anyhow::Result<Option<ZoneTip>> {
        self.as_ref().tip(trips, zones).await
    }
}
