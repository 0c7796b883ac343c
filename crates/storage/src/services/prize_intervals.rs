use std::collections::BTreeMap;

use crate::RecordPool;
use crate::dto::prize_interval::{PrizeIntervalReport, ProducerInterval};
use crate::error::Result;
use crate::models::AwardRecord;
use crate::repository::award_record::AwardRecordRepository;

/// Computes the producers with the smallest and largest gaps between wins.
///
/// Only records flagged as winners take part. A record crediting several
/// producers counts as a win for each of them, never for the combined name.
/// Every consecutive pair of a producer's win years yields one interval; two
/// wins in the same year yield an interval of zero.
///
/// Fails with [`StorageError::InvalidYear`](crate::error::StorageError::InvalidYear)
/// as soon as a winning record's year is not an integer. Non-winning records
/// are never parsed.
pub fn compute_prize_intervals(records: &[AwardRecord]) -> Result<PrizeIntervalReport> {
    let mut wins = records
        .iter()
        .filter(|record| record.is_winner())
        .map(|record| record.parse_year().map(|year| (record, year)))
        .collect::<Result<Vec<_>>>()?;

    // Stable sort: records sharing producers and year keep their encounter order.
    wins.sort_by(|(a, a_year), (b, b_year)| {
        a.producers.cmp(&b.producers).then(a_year.cmp(b_year))
    });

    let mut wins_by_producer: BTreeMap<String, Vec<i32>> = BTreeMap::new();
    for (record, year) in &wins {
        for producer in record.producer_list().iter() {
            wins_by_producer
                .entry(producer.to_string())
                .or_default()
                .push(*year);
        }
    }

    let mut intervals = Vec::new();
    for (producer, years) in &mut wins_by_producer {
        years.sort();
        intervals.extend(
            years
                .windows(2)
                .map(|pair| ProducerInterval::new(producer.as_str(), pair[0], pair[1])),
        );
    }

    // Already ordered by producer then years, so repeats are adjacent.
    intervals.dedup();

    tracing::debug!(
        winners = wins.len(),
        producers = wins_by_producer.len(),
        intervals = intervals.len(),
        "Computed producer win intervals"
    );

    Ok(extremes(intervals))
}

fn extremes(intervals: Vec<ProducerInterval>) -> PrizeIntervalReport {
    let bounds = intervals
        .iter()
        .map(|i| i.interval)
        .fold(None, |acc: Option<(i64, i64)>, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        });

    let Some((min, max)) = bounds else {
        return PrizeIntervalReport::default();
    };

    PrizeIntervalReport {
        min: intervals
            .iter()
            .filter(|i| i.interval == min)
            .cloned()
            .collect(),
        max: intervals
            .into_iter()
            .filter(|i| i.interval == max)
            .collect(),
    }
}

/// Computes the report from the current contents of the store
pub async fn get_prize_intervals(pool: &RecordPool) -> Result<PrizeIntervalReport> {
    let repo = AwardRecordRepository::new(pool);
    let records = repo.snapshot().await;

    compute_prize_intervals(&records)
}
