//! The four fixed trip reports and their text rendering.
pub mod queries;
mod render;
mod rows;

pub use render::*;
pub use rows::*;

use crate::database::Source;

/// Runs every report in order and renders them under numbered headings.
pub async fn summarize<S: Source + ?Sized>(
    source: &S,
    trips: &str,
    zones: &str,
) -> anyhow::Result<String> {
    let distances = source.distances(trips).await?;
    log::debug!("{} trips in the reporting month", distances.total());
    let longest = source.longest(trips).await?;
    let revenue = source.revenue(trips, zones).await?;
    let tip = source.tip(trips, zones).await?;
    Ok([
        format!("1. Trip distance ranges for October 2019:\n{}", render(&[distances])),
        format!("2. Pickup day with longest trip distance:\n{}", render(&Vec::from_iter(longest))),
        format!(
            "3. Top pickup locations with over ${} in total amount:\n{}",
            crate::REVENUE_THRESHOLD,
            render(&revenue)
        ),
        format!(
            "4. Dropoff zone with highest tip from {}:\n{}",
            crate::TIP_PICKUP_ZONE,
            render(&Vec::from_iter(tip))
        ),
    ]
    .join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Fixed;

    #[async_trait::async_trait]
    impl Source for Fixed {
        async fn distances(&self, _: &str) -> anyhow::Result<DistanceBuckets> {
            Ok(DistanceBuckets {
                up_to_1: 1,
                from_1_to_3: 2,
                from_3_to_7: 3,
                from_7_to_10: 4,
                over_10: 5,
            })
        }
        async fn longest(&self, _: &str) -> anyhow::Result<Option<LongestTrip>> {
            Ok(Some(LongestTrip {
                day: NaiveDate::from_ymd_opt(2019, 10, 31),
                distance: Some(515.89),
            }))
        }
        async fn revenue(&self, _: &str, _: &str) -> anyhow::Result<Vec<ZoneRevenue>> {
            Ok(Vec::new())
        }
        async fn tip(&self, trips: &str, _: &str) -> anyhow::Result<Option<ZoneTip>> {
            anyhow::ensure!(trips == "green_taxi_trips", "unknown table {}", trips);
            Ok(None)
        }
    }

    #[tokio::test]
    async fn renders_every_report() {
        let text = summarize(&Fixed, "green_taxi_trips", "taxi_zone_lookup")
            .await
            .unwrap();
        assert!(text.starts_with("1. Trip distance ranges for October 2019:\n"));
        assert!(text.contains("2019-10-31"));
        assert!(text.contains("3. Top pickup locations with over $13000 in total amount:\n(no rows)"));
        assert!(text.contains("4. Dropoff zone with highest tip from East Harlem North:\n(no rows)"));
    }

    #[tokio::test]
    async fn query_failures_propagate() {
        assert!(summarize(&Fixed, "other", "taxi_zone_lookup").await.is_err());
    }
}
