//! Page renderers and the router that picks one per interaction cycle.

use common::{
    BarSeries, BoxPlot, FeedCostsView, Histogram, HomeView, Page, ProductionRecordDto,
    ProductionView, QuickLink, RecentEventsView, RenderedView, ViewState, PRODUCTION_MONTHS,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};
use crate::events::recent_events;
use crate::generator::SampleDataGenerator;
use crate::metrics::MetricsSource;
use crate::production::ProductionTable;
use crate::summary::{box_summary, histogram, HISTOGRAM_BINS};

pub const HOME_TITLE: &str = "Shrimp Larvae Production Lab";
pub const HOME_HEADER: &str = "Welcome to the Lab Management System";
pub const SAMPLE_DATA_NOTICE: &str = "Using sample data. Upload a CSV file to use your own data.";

/// Inputs of one render besides the navigation state.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Month picked on the production or feed costs page
    pub month: Option<String>,
    /// Uploaded table replacing generated production data
    pub uploaded: Option<ProductionTable>,
}

#[derive(Debug, Clone)]
pub struct ViewRouter {
    metrics: Arc<dyn MetricsSource>,
    operator_name: String,
    sample: SampleDataGenerator,
}

impl ViewRouter {
    pub fn new(
        metrics: Arc<dyn MetricsSource>,
        operator_name: impl Into<String>,
        sample: SampleDataGenerator,
    ) -> Self {
        Self {
            metrics,
            operator_name: operator_name.into(),
            sample,
        }
    }

    /// Consumes any pending navigation intent and renders exactly one page.
    #[instrument(skip(self, ctx))]
    pub fn render(&self, state: &mut ViewState, ctx: &RenderContext) -> Result<RenderedView> {
        let page = state.next_render();
        info!("Rendering page: {}", page);
        let month = ctx.month.as_deref();

        let view = match page {
            Page::Home => RenderedView::Home(self.home()),
            Page::GrowthsAndHarvests => {
                RenderedView::GrowthsAndHarvests(self.production(ctx.uploaded.clone(), month)?)
            }
            Page::FeedCosts => RenderedView::FeedCosts(self.feed_costs(month)?),
            Page::EventsTimeline => RenderedView::EventsTimeline(self.events()),
        };
        Ok(view)
    }

    pub fn home(&self) -> HomeView {
        HomeView {
            title: HOME_TITLE.to_string(),
            header: HOME_HEADER.to_string(),
            operator_name: self.operator_name.clone(),
            unread_emails: self.metrics.unread_email_count(),
            quick_links: vec![
                QuickLink {
                    label: "View Latest Growth Data".to_string(),
                    target: Page::GrowthsAndHarvests,
                },
                QuickLink {
                    label: "Check Feed Costs".to_string(),
                    target: Page::FeedCosts,
                },
                QuickLink {
                    label: "Log New Event".to_string(),
                    target: Page::EventsTimeline,
                },
            ],
        }
    }

    /// Renders the production page from the uploaded table, or a freshly
    /// generated one. `month` defaults to the first month of the table.
    pub fn production(
        &self,
        uploaded: Option<ProductionTable>,
        month: Option<&str>,
    ) -> Result<ProductionView> {
        let (table, using_sample_data) = match uploaded {
            Some(table) => (table, false),
            None => (self.sample.table()?, true),
        };

        let months = table.months()?;
        let selected_month = month
            .map(str::to_string)
            .or_else(|| months.first().cloned());
        debug!("Selected production month: {:?}", selected_month);

        let label = selected_month.clone().unwrap_or_default();
        let filtered = match &selected_month {
            Some(month) => table.filter_month(month)?,
            None => table,
        };
        let records: Vec<ProductionRecordDto> =
            filtered.records()?.into_iter().map(Into::into).collect();
        // Empty amounts stay in the table but not in the charts
        let (labels, values): (Vec<String>, Vec<f64>) = records
            .iter()
            .filter_map(|r| r.gross_millions.map(|g| (r.tank.clone(), g)))
            .unzip();

        Ok(ProductionView {
            using_sample_data,
            notice: using_sample_data.then(|| SAMPLE_DATA_NOTICE.to_string()),
            months,
            heading: format!("Production Data for {}", label),
            bar_chart: BarSeries {
                title: format!("Gross Millions by Tank for {}", label),
                labels,
                values: values.clone(),
            },
            histogram: Histogram {
                title: format!("Distribution of Gross Millions for {}", label),
                bins: histogram(&values, HISTOGRAM_BINS),
            },
            box_plot: BoxPlot {
                title: format!("Distribution of Gross Millions for {}", label),
                summary: box_summary(&values),
                values,
            },
            selected_month,
            records,
        })
    }

    /// `month` must be one of the fixed production months; defaults to the first.
    pub fn feed_costs(&self, month: Option<&str>) -> Result<FeedCostsView> {
        let month = month.unwrap_or(PRODUCTION_MONTHS[0]);
        if !PRODUCTION_MONTHS.contains(&month) {
            return Err(ComputeError::UnknownMonth(month.to_string()));
        }

        let costs: Vec<common::CostEntryDto> = self
            .metrics
            .feed_costs(month)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(FeedCostsView {
            months: PRODUCTION_MONTHS.iter().map(|m| m.to_string()).collect(),
            selected_month: month.to_string(),
            heading: format!("Costs for {}", month),
            bar_chart: BarSeries {
                title: format!("Product Costs for {}", month),
                labels: costs.iter().map(|c| c.product_name.clone()).collect(),
                values: costs.iter().map(|c| c.cost as f64).collect(),
            },
            costs,
        })
    }

    pub fn events(&self) -> RecentEventsView {
        RecentEventsView {
            events: recent_events(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{CostEntry, RandomMetricsSource, FEED_PRODUCTS};

    #[derive(Debug)]
    struct FixedMetrics;

    impl MetricsSource for FixedMetrics {
        fn unread_email_count(&self) -> u32 {
            4
        }

        fn feed_costs(&self, _month: &str) -> Vec<CostEntry> {
            vec![CostEntry {
                product_name: "Feed1".to_string(),
                cost: 1234,
            }]
        }
    }

    fn router(metrics: Arc<dyn MetricsSource>) -> ViewRouter {
        ViewRouter::new(metrics, "John Doe", SampleDataGenerator::new(Some(3)))
    }

    #[test]
    fn test_home_uses_injected_metrics() {
        let home = router(Arc::new(FixedMetrics)).home();

        assert_eq!(home.unread_emails_line(), "You have 4 unread emails.");
        assert_eq!(home.logged_in_line(), "Logged in as: John Doe");
        let targets: Vec<Page> = home.quick_links.iter().map(|l| l.target).collect();
        assert_eq!(
            targets,
            vec![Page::GrowthsAndHarvests, Page::FeedCosts, Page::EventsTimeline]
        );
    }

    #[test]
    fn test_production_defaults_to_first_month_of_sample() {
        let view = router(Arc::new(FixedMetrics)).production(None, None).unwrap();

        assert!(view.using_sample_data);
        assert_eq!(view.notice.as_deref(), Some(SAMPLE_DATA_NOTICE));
        assert_eq!(view.selected_month.as_deref(), Some("January"));
        assert_eq!(view.records.len(), 15);
        assert_eq!(view.bar_chart.labels.len(), 15);
        assert_eq!(view.histogram.bins.len(), HISTOGRAM_BINS);
        assert_eq!(view.histogram.bins.iter().map(|b| b.count).sum::<u32>(), 15);
        assert!(view.box_plot.summary.is_some());
        assert_eq!(view.heading, "Production Data for January");
    }

    #[test]
    fn test_production_uses_upload() {
        let csv = "tank,gross_millions,production_month\nT1,4,April\nT2,6,April\nT1,1,May\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();

        let view = router(Arc::new(FixedMetrics))
            .production(Some(table), Some("May"))
            .unwrap();

        assert!(!view.using_sample_data);
        assert_eq!(view.notice, None);
        assert_eq!(view.months, vec!["April", "May"]);
        assert_eq!(view.records.len(), 1);
        assert_eq!(view.bar_chart.values, vec![1.0]);
    }

    #[test]
    fn test_production_empty_amount_stays_in_table_only() {
        let csv = "tank,gross_millions,production_month\nT1,4,April\nT2,,April\nT3,6,April\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();

        let view = router(Arc::new(FixedMetrics))
            .production(Some(table), Some("April"))
            .unwrap();

        assert_eq!(view.records.len(), 3);
        assert_eq!(view.records[1].gross_millions, None);
        assert_eq!(view.bar_chart.labels, vec!["T1", "T3"]);
        assert_eq!(view.bar_chart.values, vec![4.0, 6.0]);
        assert_eq!(view.histogram.bins.iter().map(|b| b.count).sum::<u32>(), 2);
        assert_eq!(view.box_plot.values, vec![4.0, 6.0]);
    }

    #[test]
    fn test_production_upload_without_month_column_fails() {
        let csv = "tank,gross_millions\nT1,4\n";
        let table = ProductionTable::from_csv(csv.as_bytes().to_vec()).unwrap();

        let result = router(Arc::new(FixedMetrics)).production(Some(table), None);
        assert!(matches!(result, Err(ComputeError::ColumnNotFound(_))));
    }

    #[test]
    fn test_feed_costs_twice_stay_in_range() {
        let router = router(Arc::new(RandomMetricsSource::new()));

        for _ in 0..2 {
            let view = router.feed_costs(Some("February")).unwrap();
            assert_eq!(view.heading, "Costs for February");
            assert_eq!(view.bar_chart.title, "Product Costs for February");
            for (entry, (name, range)) in view.costs.iter().zip(FEED_PRODUCTS.iter()) {
                assert_eq!(entry.product_name, *name);
                assert!(range.contains(&entry.cost));
            }
        }
    }

    #[test]
    fn test_feed_costs_rejects_unknown_month() {
        let result = router(Arc::new(FixedMetrics)).feed_costs(Some("Sometime"));
        assert!(matches!(result, Err(ComputeError::UnknownMonth(_))));
    }

    #[test]
    fn test_render_follows_navigation_intent() {
        let router = router(Arc::new(FixedMetrics));
        let mut state = ViewState::default();

        let view = router.render(&mut state, &RenderContext::default()).unwrap();
        assert_eq!(view.page(), Page::Home);

        state.navigate_to(Page::EventsTimeline);
        let view = router.render(&mut state, &RenderContext::default()).unwrap();
        assert_eq!(view.page(), Page::EventsTimeline);
        assert_eq!(state.selected(), Page::EventsTimeline);
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_render_feed_costs_with_month() {
        let router = router(Arc::new(FixedMetrics));
        let mut state = ViewState::new(Page::FeedCosts);
        let ctx = RenderContext {
            month: Some("March".to_string()),
            uploaded: None,
        };

        match router.render(&mut state, &ctx).unwrap() {
            RenderedView::FeedCosts(view) => {
                assert_eq!(view.selected_month, "March");
                assert_eq!(view.costs[0].display_line(), "Feed1: $1234");
            }
            other => panic!("expected feed costs, got {:?}", other.page()),
        }
    }
}
