//! Synthetic production figures used when the operator has not uploaded a table.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::production::{ProductionRecord, ProductionTable};

/// Number of rearing tanks in the lab.
pub const TANK_COUNT: usize = 15;

/// Total yield, in millions, distributed across all tanks each month.
pub const MONTHLY_TOTAL: i64 = 50;

/// Range of a single tank draw before clamping.
pub const TANK_DRAW: RangeInclusive<i64> = 1..=10;

/// Tank labels `Tank1` through `Tank15`.
pub fn tank_names() -> Vec<String> {
    (1..=TANK_COUNT).map(|i| format!("Tank{}", i)).collect()
}

/// Spreads one month's draws across tanks so they add up to [`MONTHLY_TOTAL`].
///
/// A running remainder starts at the total and each draw is subtracted from
/// it. Once the remainder would go negative the draw is clamped to what was
/// left, so later tanks receive zero. A positive remainder after the last
/// draw is added to the last tank.
pub fn allocate_month(draws: &[i64]) -> Vec<i64> {
    let mut remaining = MONTHLY_TOTAL;
    let mut amounts = Vec::with_capacity(draws.len());

    for &draw in draws {
        let mut amount = draw;
        remaining -= amount;
        if remaining < 0 {
            amount += remaining;
            remaining = 0;
        }
        amounts.push(amount);
    }
    if remaining > 0 {
        if let Some(last) = amounts.last_mut() {
            *last += remaining;
        }
    }

    amounts
}

/// Draws one record per (tank, month) pair, each tank drawing from [`TANK_DRAW`].
pub fn generate_records<R: Rng + ?Sized>(rng: &mut R) -> Vec<ProductionRecord> {
    let tanks = tank_names();
    let mut records = Vec::with_capacity(tanks.len() * common::PRODUCTION_MONTHS.len());

    for month in common::PRODUCTION_MONTHS {
        let draws: Vec<i64> = tanks.iter().map(|_| rng.gen_range(TANK_DRAW)).collect();
        let amounts = allocate_month(&draws);
        records.extend(
            tanks
                .iter()
                .zip(amounts)
                .map(|(tank, amount)| ProductionRecord::new(tank.clone(), amount as f64, month)),
        );
    }

    records
}

/// Produces the sample table, optionally from a fixed seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataGenerator {
    seed: Option<u64>,
}

impl SampleDataGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Without a seed every call draws fresh values.
    pub fn records(&self) -> Vec<ProductionRecord> {
        match self.seed {
            Some(seed) => generate_records(&mut StdRng::seed_from_u64(seed)),
            None => generate_records(&mut rand::thread_rng()),
        }
    }

    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn table(&self) -> Result<ProductionTable> {
        let records = self.records();
        debug!("Generated {} sample production records", records.len());
        ProductionTable::from_records(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month_records<'a>(records: &'a [ProductionRecord], month: &str) -> Vec<&'a ProductionRecord> {
        records
            .iter()
            .filter(|r| r.production_month == month)
            .collect()
    }

    #[test]
    fn test_one_record_per_tank_and_month() {
        let records = generate_records(&mut StdRng::seed_from_u64(7));
        assert_eq!(records.len(), TANK_COUNT * 3);

        for month in common::PRODUCTION_MONTHS {
            let rows = month_records(&records, month);
            assert_eq!(rows.len(), TANK_COUNT);
            let tanks: Vec<&str> = rows.iter().map(|r| r.tank.as_str()).collect();
            assert_eq!(tanks.first(), Some(&"Tank1"));
            assert_eq!(tanks.last(), Some(&"Tank15"));
        }
    }

    #[test]
    fn test_monthly_sum_equals_total_across_seeds() {
        for seed in 0..200 {
            let records = generate_records(&mut StdRng::seed_from_u64(seed));
            for month in common::PRODUCTION_MONTHS {
                let total: f64 = month_records(&records, month)
                    .iter()
                    .filter_map(|r| r.gross_millions)
                    .sum();
                assert_eq!(total, MONTHLY_TOTAL as f64, "seed {} month {}", seed, month);
            }
        }
    }

    #[test]
    fn test_no_amount_is_negative_across_seeds() {
        for seed in 0..200 {
            let records = generate_records(&mut StdRng::seed_from_u64(seed));
            assert!(
                records.iter().all(|r| r.gross_millions.is_some_and(|g| g >= 0.0)),
                "seed {} produced a negative amount",
                seed
            );
        }
    }

    #[test]
    fn test_low_draws_leave_remainder_on_last_tank() {
        let amounts = allocate_month(&[1; TANK_COUNT]);

        assert!(amounts[..TANK_COUNT - 1].iter().all(|&a| a == 1));
        assert_eq!(amounts[TANK_COUNT - 1], 36);
        assert_eq!(amounts.iter().sum::<i64>(), MONTHLY_TOTAL);
    }

    #[test]
    fn test_high_draws_clamp_to_zero() {
        // Five tanks exhaust the total; everything after is clamped.
        let amounts = allocate_month(&[10; TANK_COUNT]);

        assert!(amounts[..5].iter().all(|&a| a == 10));
        assert!(amounts[5..].iter().all(|&a| a == 0));
    }

    #[test]
    fn test_overshooting_draw_is_reduced_to_remainder() {
        let mut draws = [1; TANK_COUNT];
        draws[..6].copy_from_slice(&[9, 9, 9, 9, 9, 8]);
        let amounts = allocate_month(&draws);

        // 45 after five tanks, so the sixth gets 5 instead of 8
        assert_eq!(&amounts[..6], &[9, 9, 9, 9, 9, 5]);
        assert!(amounts[6..].iter().all(|&a| a == 0));
        assert_eq!(amounts.iter().sum::<i64>(), MONTHLY_TOTAL);
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let generator = SampleDataGenerator::new(Some(42));
        assert_eq!(generator.records(), generator.records());
    }
}
