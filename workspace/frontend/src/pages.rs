pub mod events;
pub mod feed_costs;
pub mod home;
pub mod production;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthSelectProps {
    pub months: Vec<String>,
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_change: Callback<String>,
}

/// "Select Production Month" dropdown shared by the production and feed costs pages
#[function_component(MonthSelect)]
pub fn month_select(props: &MonthSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label class="form-control w-full max-w-xs mb-4">
            <div class="label"><span class="label-text">{"Select Production Month"}</span></div>
            <select class="select select-bordered" onchange={onchange}>
                {for props.months.iter().map(|month| html! {
                    <option
                        value={month.clone()}
                        selected={props.selected.as_deref() == Some(month.as_str())}
                    >
                        {month}
                    </option>
                })}
            </select>
        </label>
    }
}
