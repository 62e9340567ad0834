use ::common::{Page, RenderRequest, RenderResponse, RenderedView, ViewState};
use yew::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use crate::api_client::{ApiFailure, UPLOAD_NOT_FOUND};
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::common::toast::{ToastContext, ToastProvider};
use components::layout::layout::Layout;
use hooks::FetchState;
use pages::events::EventsPage;
use pages::feed_costs::FeedCostsPage;
use pages::home::HomePage;
use pages::production::ProductionPage;

/// Navigation inputs of the next render request
#[derive(Debug, Clone, PartialEq, Default)]
struct Interaction {
    state: ViewState,
    month: Option<String>,
}

impl Interaction {
    /// Sidebar choice. The month picker resets.
    fn select(&self, page: Page) -> Self {
        let mut state = self.state.clone();
        state.select(page);
        Self { state, month: None }
    }

    /// Quick link. The server applies it on the next render.
    fn navigate_to(&self, page: Page) -> Self {
        let mut state = self.state.clone();
        state.navigate_to(page);
        Self { state, month: None }
    }

    fn with_month(&self, month: String) -> Self {
        Self {
            state: self.state.clone(),
            month: Some(month),
        }
    }

    fn request(&self, upload_id: Option<String>) -> RenderRequest {
        RenderRequest {
            state: self.state.clone(),
            month: self.month.clone(),
            upload_id,
        }
    }
}

/// Upload id to keep after a failed render. An expired upload is forgotten.
fn upload_after_failure(current: Option<String>, failure: &ApiFailure) -> Option<String> {
    if failure.code.as_deref() == Some(UPLOAD_NOT_FOUND) {
        None
    } else {
        current
    }
}

#[function_component(Dashboard)]
fn dashboard() -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let rendered = use_state(|| FetchState::<RenderResponse>::Loading);
    let interaction = use_state(Interaction::default);
    let upload_id = use_state(|| None::<String>);

    let render = {
        let rendered = rendered.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |(next, upload): (Interaction, Option<String>)| {
            let rendered = rendered.clone();
            let interaction = interaction.clone();
            let upload_id = upload_id.clone();
            let toast_ctx = toast_ctx.clone();
            let request = next.request(upload.clone());
            log::debug!("Rendering with {:?}", request);
            rendered.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match api_client::views::render_view(&request).await {
                    Ok(response) => {
                        // Keep the state the server returned; it has the pending intent applied
                        interaction.set(Interaction {
                            state: response.state.clone(),
                            month: next.month,
                        });
                        rendered.set(FetchState::Success(response));
                    }
                    Err(err) => {
                        upload_id.set(upload_after_failure(upload, &err));
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(err.to_string());
                        }
                        rendered.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Initial render
    {
        let render = render.clone();
        use_effect_with((), move |_| {
            render.emit((Interaction::default(), None));
            || ()
        });
    }

    let on_select = {
        let render = render.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        Callback::from(move |page: Page| render.emit((interaction.select(page), (*upload_id).clone())))
    };

    let on_navigate = {
        let render = render.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        Callback::from(move |page: Page| render.emit((interaction.navigate_to(page), (*upload_id).clone())))
    };

    let on_month = {
        let render = render.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        Callback::from(move |month: String| render.emit((interaction.with_month(month), (*upload_id).clone())))
    };

    let on_upload = {
        let render = render.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |csv: String| {
            let render = render.clone();
            let next = Interaction {
                state: interaction.state.clone(),
                month: None,
            };
            let upload_id = upload_id.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api_client::production::upload_csv(csv).await {
                    Ok(upload) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_success(format!("Uploaded {} rows", upload.rows));
                        }
                        upload_id.set(Some(upload.upload_id.clone()));
                        render.emit((next, Some(upload.upload_id)));
                    }
                    Err(err) => {
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(err.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_retry = {
        let render = render.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        Callback::from(move |_: ()| render.emit(((*interaction).clone(), (*upload_id).clone())))
    };

    let on_use_sample = {
        let render = render.clone();
        let interaction = interaction.clone();
        let upload_id = upload_id.clone();
        Callback::from(move |_: ()| {
            upload_id.set(None);
            render.emit(((*interaction).clone(), None));
        })
    };

    let selected = interaction.state.selected();
    let content = match &*rendered {
        FetchState::Success(response) => match &response.view {
            RenderedView::Home(view) => html! {
                <HomePage view={view.clone()} on_navigate={on_navigate} />
            },
            RenderedView::GrowthsAndHarvests(view) => html! {
                <ProductionPage view={view.clone()} on_month={on_month} on_upload={on_upload} />
            },
            RenderedView::FeedCosts(view) => html! {
                <FeedCostsPage view={view.clone()} on_month={on_month} />
            },
            RenderedView::EventsTimeline(view) => html! {
                <EventsPage view={view.clone()} />
            },
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay failure={err.clone()} on_retry={Some(on_retry)} on_use_sample={Some(on_use_sample)} />
        },
        FetchState::Loading | FetchState::NotStarted => html! { <Loading text={Some("Loading...".to_string())} /> },
    };

    let title = rendered
        .data()
        .map(|response| response.view.page())
        .unwrap_or(selected)
        .label()
        .to_string();

    html! {
        <Layout title={title} selected={selected} on_select={on_select}>
            {content}
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Dashboard />
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== ShrimpLab Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
