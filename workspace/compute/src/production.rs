//! Production table backed by a polars DataFrame.
//!
//! Uploaded tables are accepted as-is. Columns are only looked up when a view
//! reads them, so a table missing `production_month` loads fine and fails the
//! first time months are enumerated.

use common::ProductionRecordDto;
use polars::prelude::*;
use std::io::{Cursor, Write};
use tracing::{debug, instrument, trace, warn};

use crate::error::{ComputeError, Result};

pub const TANK_COLUMN: &str = "tank";
pub const GROSS_MILLIONS_COLUMN: &str = "gross_millions";
pub const PRODUCTION_MONTH_COLUMN: &str = "production_month";

/// Yield of one tank for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    pub tank: String,
    pub gross_millions: Option<f64>,
    pub production_month: String,
}

impl ProductionRecord {
    pub fn new(tank: impl Into<String>, gross_millions: f64, production_month: impl Into<String>) -> Self {
        Self {
            tank: tank.into(),
            gross_millions: Some(gross_millions),
            production_month: production_month.into(),
        }
    }
}

impl From<ProductionRecord> for ProductionRecordDto {
    fn from(record: ProductionRecord) -> Self {
        Self {
            tank: record.tank,
            gross_millions: record.gross_millions,
            production_month: record.production_month,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductionTable {
    df: DataFrame,
}

impl ProductionTable {
    pub fn from_records(records: &[ProductionRecord]) -> Result<Self> {
        let df = df!(
            TANK_COLUMN => records.iter().map(|r| r.tank.as_str()).collect::<Vec<_>>(),
            GROSS_MILLIONS_COLUMN => records.iter().map(|r| r.gross_millions).collect::<Vec<_>>(),
            PRODUCTION_MONTH_COLUMN => records.iter().map(|r| r.production_month.as_str()).collect::<Vec<_>>()
        )?;
        Ok(Self { df })
    }

    /// Parses an uploaded CSV file with a header row. Column names are not checked.
    #[instrument(skip(bytes), fields(size = bytes.len()))]
    pub fn from_csv(bytes: Vec<u8>) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(|e| {
                warn!("Failed to parse uploaded CSV: {}", e);
                ComputeError::Csv(e.to_string())
            })?;
        debug!("Parsed uploaded CSV with shape {:?}", df.shape());
        Ok(Self { df })
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Distinct months in order of first appearance.
    pub fn months(&self) -> Result<Vec<String>> {
        let months = self.string_column(PRODUCTION_MONTH_COLUMN)?.unique_stable()?;
        let months: Vec<String> = months.str()?.into_iter().flatten().map(str::to_string).collect();
        trace!("Found months: {:?}", months);
        Ok(months)
    }

    /// Rows whose month equals `month`, in their original order.
    #[instrument(skip(self))]
    pub fn filter_month(&self, month: &str) -> Result<Self> {
        self.require_column(PRODUCTION_MONTH_COLUMN)?;
        let df = self
            .df
            .clone()
            .lazy()
            .filter(col(PRODUCTION_MONTH_COLUMN).cast(DataType::String).eq(lit(month)))
            .collect()?;
        debug!("Filtered {} of {} rows for {}", df.height(), self.height(), month);
        Ok(Self { df })
    }

    /// Reads every row. An empty tank or month cell reads as an empty string,
    /// an empty `gross_millions` cell as `None`.
    pub fn records(&self) -> Result<Vec<ProductionRecord>> {
        let tanks = self.string_column(TANK_COLUMN)?;
        let gross = self.float_column(GROSS_MILLIONS_COLUMN)?;
        let months = self.string_column(PRODUCTION_MONTH_COLUMN)?;

        let records = tanks
            .str()?
            .into_iter()
            .zip(gross.f64()?.into_iter())
            .zip(months.str()?.into_iter())
            .map(|((tank, gross), month)| ProductionRecord {
                tank: tank.unwrap_or_default().to_string(),
                gross_millions: gross,
                production_month: month.unwrap_or_default().to_string(),
            })
            .collect();
        Ok(records)
    }

    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut df = self.df.clone();
        CsvWriter::new(writer).include_header(true).finish(&mut df)?;
        Ok(())
    }

    fn require_column(&self, name: &str) -> Result<&Column> {
        self.df.column(name).map_err(|_| {
            warn!("Column '{}' not found; available: {:?}", name, self.column_names());
            ComputeError::ColumnNotFound(name.to_string())
        })
    }

    fn string_column(&self, name: &str) -> Result<Series> {
        let column = self.require_column(name)?;
        Ok(column.as_materialized_series().cast(&DataType::String)?)
    }

    fn float_column(&self, name: &str) -> Result<Series> {
        let column = self.require_column(name)?;
        column
            .as_materialized_series()
            .strict_cast(&DataType::Float64)
            .map_err(|e| ComputeError::ColumnType {
                column: name.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SampleDataGenerator;

    fn sample_table() -> ProductionTable {
        SampleDataGenerator::new(Some(11)).table().unwrap()
    }

    #[test]
    fn test_sample_table_layout() {
        let table = sample_table();
        assert_eq!(table.height(), 45);
        assert_eq!(
            table.column_names(),
            vec!["tank", "gross_millions", "production_month"]
        );
        assert_eq!(table.months().unwrap(), vec!["January", "February", "March"]);
    }

    #[test]
    fn test_filter_january_keeps_only_january() {
        let january = sample_table().filter_month("January").unwrap();
        let records = january.records().unwrap();

        assert_eq!(records.len(), 15);
        assert!(records.iter().all(|r| r.production_month == "January"));
        assert_eq!(records.iter().filter_map(|r| r.gross_millions).sum::<f64>(), 50.0);
    }

    #[test]
    fn test_filter_unknown_month_is_empty() {
        let table = sample_table().filter_month("December").unwrap();
        assert_eq!(table.height(), 0);
        assert!(table.records().unwrap().is_empty());
    }

    #[test]
    fn test_csv_months_in_first_seen_order() {
        let csv = "tank,gross_millions,production_month\n\
                   A,1,May\nB,2,April\nC,3,May\nD,4,June\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();

        assert_eq!(table.months().unwrap(), vec!["May", "April", "June"]);
        assert_eq!(table.filter_month("May").unwrap().height(), 2);
    }

    #[test]
    fn test_csv_without_month_column_fails_on_enumeration() {
        let csv = "tank,gross_millions\nA,1\nB,2\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(table.height(), 2);

        match table.months() {
            Err(ComputeError::ColumnNotFound(column)) => assert_eq!(column, "production_month"),
            other => panic!("expected ColumnNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_gross_millions_is_a_type_error() {
        let csv = "tank,gross_millions,production_month\nA,lots,May\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();

        assert!(matches!(
            table.records(),
            Err(ComputeError::ColumnType { .. })
        ));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "batch,tank,gross_millions,production_month\n7,Tank1,2.5,May\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();

        assert_eq!(
            table.records().unwrap(),
            vec![ProductionRecord::new("Tank1", 2.5, "May")]
        );
    }

    #[test]
    fn test_empty_amount_keeps_its_row() {
        let csv = "tank,gross_millions,production_month\n\
                   A,1,January\nB,,January\nC,3,January\n";
        let january = ProductionTable::from_csv(csv.as_bytes().to_vec())
            .unwrap()
            .filter_month("January")
            .unwrap();
        let records = january.records().unwrap();

        assert_eq!(january.height(), 3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].tank, "B");
        assert_eq!(records[1].gross_millions, None);
    }

    #[test]
    fn test_write_csv_has_header() {
        let mut buffer = Vec::new();
        sample_table().write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("tank,gross_millions,production_month"));
        assert_eq!(text.lines().count(), 46);
    }
}
