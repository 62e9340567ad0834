//! Placeholder figures for the home and feed cost pages.
//!
//! Views read these through [`MetricsSource`] so a mailbox query or an
//! accounting system can replace [`RandomMetricsSource`] without touching
//! view code.

use rand::Rng;
use std::fmt::Debug;
use std::ops::RangeInclusive;
use tracing::trace;

/// Cost of one feed product for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEntry {
    pub product_name: String,
    pub cost: u32,
}

impl From<CostEntry> for common::CostEntryDto {
    fn from(entry: CostEntry) -> Self {
        Self {
            product_name: entry.product_name,
            cost: entry.cost,
        }
    }
}

/// Products with the dollar range their simulated cost is drawn from.
pub const FEED_PRODUCTS: [(&str, RangeInclusive<u32>); 6] = [
    ("Feed1", 1000..=5000),
    ("Feed2", 1000..=5000),
    ("Feed3", 1000..=5000),
    ("Brine Shrimp", 500..=2000),
    ("Probiotics", 200..=1000),
    ("Vitamin C", 100..=500),
];

/// Upper bound of the simulated unread email count.
pub const MAX_UNREAD_EMAILS: u32 = 10;

pub trait MetricsSource: Debug + Send + Sync {
    fn unread_email_count(&self) -> u32;

    /// One entry per product, in [`FEED_PRODUCTS`] order.
    fn feed_costs(&self, month: &str) -> Vec<CostEntry>;
}

/// Draws fresh values on every call. Nothing is remembered between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMetricsSource;

impl RandomMetricsSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSource for RandomMetricsSource {
    fn unread_email_count(&self) -> u32 {
        rand::thread_rng().gen_range(0..=MAX_UNREAD_EMAILS)
    }

    fn feed_costs(&self, month: &str) -> Vec<CostEntry> {
        // The month has no bearing on simulated costs
        trace!("Drawing simulated feed costs for {}", month);
        let mut rng = rand::thread_rng();
        FEED_PRODUCTS
            .iter()
            .map(|(name, range)| CostEntry {
                product_name: name.to_string(),
                cost: rng.gen_range(range.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_stay_in_product_ranges() {
        let source = RandomMetricsSource::new();
        for _ in 0..50 {
            let costs = source.feed_costs("January");
            assert_eq!(costs.len(), FEED_PRODUCTS.len());
            for (entry, (name, range)) in costs.iter().zip(FEED_PRODUCTS.iter()) {
                assert_eq!(entry.product_name, *name);
                assert!(range.contains(&entry.cost), "{} = {}", name, entry.cost);
            }
        }
    }

    #[test]
    fn test_unread_emails_in_range() {
        let source = RandomMetricsSource::new();
        for _ in 0..50 {
            assert!(source.unread_email_count() <= MAX_UNREAD_EMAILS);
        }
    }
}
