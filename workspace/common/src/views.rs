use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::events::RecentEventsView;
use crate::feed_costs::FeedCostsView;
use crate::navigation::{Page, ViewState};
use crate::production::ProductionView;

/// Shortcut button on the home page. Clicking it navigates to `target`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct QuickLink {
    pub label: String,
    pub target: Page,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HomeView {
    pub title: String,
    pub header: String,
    pub operator_name: String,
    pub unread_emails: u32,
    pub quick_links: Vec<QuickLink>,
}

impl HomeView {
    pub fn logged_in_line(&self) -> String {
        format!("Logged in as: {}", self.operator_name)
    }

    pub fn unread_emails_line(&self) -> String {
        format!("You have {} unread emails.", self.unread_emails)
    }
}

/// One interaction cycle: the current navigation state plus page inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RenderRequest {
    #[serde(default)]
    pub state: ViewState,
    /// Month picked on the production or feed costs page
    #[serde(default)]
    pub month: Option<String>,
    /// Uploaded production table to use instead of generated data
    #[serde(default)]
    pub upload_id: Option<String>,
}

/// Exactly one rendered page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RenderedView {
    Home(HomeView),
    GrowthsAndHarvests(ProductionView),
    FeedCosts(FeedCostsView),
    EventsTimeline(RecentEventsView),
}

impl RenderedView {
    pub fn page(&self) -> Page {
        match self {
            RenderedView::Home(_) => Page::Home,
            RenderedView::GrowthsAndHarvests(_) => Page::GrowthsAndHarvests,
            RenderedView::FeedCosts(_) => Page::FeedCosts,
            RenderedView::EventsTimeline(_) => Page::EventsTimeline,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RenderResponse {
    /// State after the render consumed any navigation intent
    pub state: ViewState,
    pub view: RenderedView,
}
