use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use common::{ImageAttachment, LogEventRequest, RecentEventsView};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api_client::events::log_event;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: RecentEventsView,
}

fn now_to_minute() -> (NaiveDate, NaiveTime) {
    let now = Local::now().naive_local();
    let time = now.time().with_second(0).and_then(|t| t.with_nanosecond(0));
    (now.date(), time.unwrap_or_else(|| now.time()))
}

#[function_component(EventsPage)]
pub fn events_page(props: &Props) -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let (today, now) = now_to_minute();
    let date = use_state(|| today);
    let time = use_state(|| now);
    let description = use_state(String::new);
    let image = use_state(|| None::<ImageAttachment>);
    let acknowledgement = use_state(|| None::<String>);

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                Ok(value) => date.set(value),
                Err(e) => log::warn!("Ignoring date '{}': {}", input.value(), e),
            }
        })
    };

    let on_time = {
        let time = time.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match NaiveTime::parse_from_str(&input.value(), "%H:%M") {
                Ok(value) => time.set(value),
                Err(e) => log::warn!("Ignoring time '{}': {}", input.value(), e),
            }
        })
    };

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };

    let on_image = {
        let image = image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let attachment = input.files().and_then(|files| files.get(0)).map(|file| {
                let content_type = file.type_();
                ImageAttachment {
                    file_name: file.name(),
                    content_type: (!content_type.is_empty()).then_some(content_type),
                    size_bytes: Some(file.size() as u64),
                }
            });
            image.set(attachment);
        })
    };

    let on_submit = {
        let date = date.clone();
        let time = time.clone();
        let description = description.clone();
        let image = image.clone();
        let acknowledgement = acknowledgement.clone();
        Callback::from(move |_| {
            let request = LogEventRequest {
                date: *date,
                time: *time,
                description: (*description).clone(),
                image: (*image).clone(),
            };
            let acknowledgement = acknowledgement.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match log_event(&request).await {
                    Ok(ack) => acknowledgement.set(Some(ack.message)),
                    Err(err) => {
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(err.to_string());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="flex flex-col gap-4">
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-3">
                    <h3 class="card-title">{"Log New Event"}</h3>
                    <label class="form-control max-w-xs">
                        <div class="label"><span class="label-text">{"Event Date"}</span></div>
                        <input type="date" class="input input-bordered"
                            value={date.format("%Y-%m-%d").to_string()} onchange={on_date} />
                    </label>
                    <label class="form-control max-w-xs">
                        <div class="label"><span class="label-text">{"Event Time"}</span></div>
                        <input type="time" class="input input-bordered"
                            value={time.format("%H:%M").to_string()} onchange={on_time} />
                    </label>
                    <label class="form-control">
                        <div class="label"><span class="label-text">{"Event Description"}</span></div>
                        <textarea class="textarea textarea-bordered"
                            value={(*description).clone()} oninput={on_description}></textarea>
                    </label>
                    <label class="form-control max-w-md">
                        <div class="label"><span class="label-text">{"Upload Image (optional)"}</span></div>
                        <input type="file" accept=".png,.jpg,.jpeg" class="file-input file-input-bordered"
                            onchange={on_image} />
                    </label>
                    <div>
                        <button class="btn btn-primary" onclick={on_submit}>{"Log Event"}</button>
                    </div>
                    {if let Some(message) = &*acknowledgement {
                        html! {
                            <div class="alert alert-success">
                                <i class="fas fa-check-circle"></i>
                                <span>{message}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Recent Events"}</h3>
                    <ul>
                        {for props.view.events.iter().map(|event| html! { <li>{event.display_line()}</li> })}
                    </ul>
                </div>
            </div>
        </div>
    }
}
