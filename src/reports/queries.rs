//! SQL for the four trip reports. Table names are quoted identifiers;
//! filter values are bound as `$n` parameters by the caller.
use crate::database::quote;
use crate::*;

/// `$1` month start (TIMESTAMP), `$2` month end (TIMESTAMP).
pub fn distances(trips: &str) -> String {
    format!(
        "SELECT COUNT(CASE WHEN {d} <= 1              THEN 1 END) AS trips_up_to_1_mile,
                COUNT(CASE WHEN {d} >  1 AND {d} <= 3  THEN 1 END) AS trips_1_to_3_miles,
                COUNT(CASE WHEN {d} >  3 AND {d} <= 7  THEN 1 END) AS trips_3_to_7_miles,
                COUNT(CASE WHEN {d} >  7 AND {d} <= 10 THEN 1 END) AS trips_7_to_10_miles,
                COUNT(CASE WHEN {d} > 10               THEN 1 END) AS trips_over_10_miles
         FROM   {t}
         WHERE  {p} >= $1
         AND    {o} <  $2",
        t = quote(trips),
        d = quote(TRIP_DISTANCE),
        p = quote(PICKUP_DATETIME),
        o = quote(DROPOFF_DATETIME),
    )
}

/// No parameters.
pub fn longest(trips: &str) -> String {
    format!(
        "SELECT   DATE({p}) AS pickup_day,
                  MAX({d})::DOUBLE PRECISION AS longest_trip
         FROM     {t}
         GROUP BY DATE({p})
         ORDER BY longest_trip DESC NULLS LAST
         LIMIT    1",
        t = quote(trips),
        d = quote(TRIP_DISTANCE),
        p = quote(PICKUP_DATETIME),
    )
}

/// `$1` pickup date (DATE), `$2` threshold (DOUBLE PRECISION).
pub fn revenue(trips: &str, zones: &str) -> String {
    format!(
        "SELECT   z.{name} AS pickup_zone,
                  SUM(t.{amount})::DOUBLE PRECISION AS total_amount
         FROM     {t} t
         JOIN     {z} z ON t.{pu} = z.{id}
         WHERE    DATE(t.{p}) = $1
         GROUP BY z.{name}
         HAVING   SUM(t.{amount})::DOUBLE PRECISION > $2
         ORDER BY total_amount DESC",
        t = quote(trips),
        z = quote(zones),
        name = quote(ZONE_NAME),
        id = quote(ZONE_ID),
        pu = quote(PICKUP_LOCATION),
        amount = quote(TOTAL_AMOUNT),
        p = quote(PICKUP_DATETIME),
    )
}

/// `$1` month start (DATE), `$2` month end (DATE), `$3` pickup zone name.
pub fn tip(trips: &str, zones: &str) -> String {
    format!(
        "SELECT   dropoff.{name} AS dropoff_zone,
                  MAX(t.{tip})::DOUBLE PRECISION AS max_tip
         FROM     {t} t
         JOIN     {z} pickup  ON t.{pu} = pickup.{id}
         JOIN     {z} dropoff ON t.{du} = dropoff.{id}
         WHERE    DATE(t.{p}) >= $1
         AND      DATE(t.{p}) <  $2
         AND      pickup.{name} = $3
         GROUP BY dropoff.{name}
         ORDER BY max_tip DESC NULLS LAST
         LIMIT    1",
        t = quote(trips),
        z = quote(zones),
        name = quote(ZONE_NAME),
        id = quote(ZONE_ID),
        pu = quote(PICKUP_LOCATION),
        du = quote(DROPOFF_LOCATION),
        tip = quote(TIP_AMOUNT),
        p = quote(PICKUP_DATETIME),
    )
}
