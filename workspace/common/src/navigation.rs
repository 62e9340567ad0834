use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Pages reachable from the sidebar. Serialized by their display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum Page {
    #[default]
    #[serde(rename = "Home")]
    Home,
    #[serde(rename = "Growths and Harvests")]
    GrowthsAndHarvests,
    #[serde(rename = "Feed Costs per Run")]
    FeedCosts,
    #[serde(rename = "Events Timeline")]
    EventsTimeline,
}

impl Page {
    /// All pages in sidebar order.
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::GrowthsAndHarvests,
        Page::FeedCosts,
        Page::EventsTimeline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::GrowthsAndHarvests => "Growths and Harvests",
            Page::FeedCosts => "Feed Costs per Run",
            Page::EventsTimeline => "Events Timeline",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation state for one operator session.
///
/// `select` is a direct sidebar choice. `navigate_to` only records an intent;
/// the intent takes effect when the next render calls `next_render`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewState {
    selected: Page,
    #[serde(default)]
    pending: Option<Page>,
}

impl ViewState {
    pub fn new(selected: Page) -> Self {
        Self {
            selected,
            pending: None,
        }
    }

    pub fn selected(&self) -> Page {
        self.selected
    }

    pub fn pending(&self) -> Option<Page> {
        self.pending
    }

    /// Sidebar selection. Discards any navigation intent not yet rendered.
    pub fn select(&mut self, page: Page) {
        tracing::debug!("Selecting page: {}", page);
        self.selected = page;
        self.pending = None;
    }

    /// Records a navigation intent consumed by the next render.
    pub fn navigate_to(&mut self, page: Page) {
        tracing::debug!("Navigation requested to: {}", page);
        self.pending = Some(page);
    }

    /// Applies the pending intent, if any, and returns the page to render.
    pub fn next_render(&mut self) -> Page {
        if let Some(page) = self.pending.take() {
            tracing::trace!("Consuming navigation intent: {} -> {}", self.selected, page);
            self.selected = page;
        }
        self.selected
    }
}
