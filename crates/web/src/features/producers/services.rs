use storage::{
    RecordPool, dto::prize_interval::PrizeIntervalReport, error::Result,
    services::prize_intervals,
};

/// Producers with the smallest and largest gaps between consecutive wins,
/// recomputed from the live store on every call
pub async fn get_prize_intervals(pool: &RecordPool) -> Result<PrizeIntervalReport> {
    let report = prize_intervals::get_prize_intervals(pool).await?;

    tracing::debug!(
        min = report.min.len(),
        max = report.max.len(),
        "Prize interval report computed"
    );

    Ok(report)
}
