use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the production table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductionRecordDto {
    /// Tank label, e.g. "Tank3"
    pub tank: String,
    /// Yield in millions of larvae; None when the uploaded cell is empty
    pub gross_millions: Option<f64>,
    /// Month label the yield belongs to
    pub production_month: String,
}

/// Bar chart data keyed by category label.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BarSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A half-open histogram bin `[start, end)`; the last bin also includes `end`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Histogram {
    pub title: String,
    pub bins: Vec<HistogramBin>,
}

/// Five-number summary plus mean.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BoxPlot {
    pub title: String,
    /// Raw values so the chart can draw outliers itself
    pub values: Vec<f64>,
    /// None when the selection is empty
    pub summary: Option<BoxSummary>,
}

/// Growths and harvests page for one selected month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductionView {
    /// True when no upload was supplied and generated data is shown
    pub using_sample_data: bool,
    /// Informational banner, if any
    pub notice: Option<String>,
    /// Distinct months of the active table in first-seen order
    pub months: Vec<String>,
    /// Month the rows were filtered to
    pub selected_month: Option<String>,
    /// Table heading
    pub heading: String,
    pub records: Vec<ProductionRecordDto>,
    pub bar_chart: BarSeries,
    pub histogram: Histogram,
    pub box_plot: BoxPlot,
}

/// Result of accepting an uploaded CSV file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadResponse {
    /// Handle to pass as `upload_id` when rendering the production view
    pub upload_id: String,
    pub rows: usize,
    pub columns: Vec<String>,
}
