use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::production::BarSeries;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CostEntryDto {
    pub product_name: String,
    /// Whole dollars
    pub cost: u32,
}

impl CostEntryDto {
    /// Text line shown above the chart, e.g. "Feed1: $1200".
    pub fn display_line(&self) -> String {
        format!("{}: ${}", self.product_name, self.cost)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FeedCostsView {
    /// Months offered by the picker
    pub months: Vec<String>,
    pub selected_month: String,
    pub heading: String,
    pub costs: Vec<CostEntryDto>,
    pub bar_chart: BarSeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let entry = CostEntryDto {
            product_name: "Brine Shrimp".to_string(),
            cost: 750,
        };
        assert_eq!(entry.display_line(), "Brine Shrimp: $750");
    }
}
