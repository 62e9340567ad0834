use common::{HomeView, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: HomeView,
    /// Emitted by quick links; takes effect on the next render
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let view = &props.view;

    html! {
        <div class="flex flex-col gap-4">
            <h1 class="text-3xl font-bold">{&view.title}</h1>
            <h2 class="text-2xl">{&view.header}</h2>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"User Information"}</h3>
                    <p>{view.logged_in_line()}</p>
                    <div class="alert alert-info">
                        <i class="fas fa-envelope"></i>
                        <span>{view.unread_emails_line()}</span>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Quick Links"}</h3>
                    <div class="flex flex-wrap gap-2">
                        {for view.quick_links.iter().map(|link| {
                            let target = link.target;
                            let onclick = {
                                let on_navigate = props.on_navigate.clone();
                                Callback::from(move |_| {
                                    log::debug!("Quick link to {}", target);
                                    on_navigate.emit(target);
                                })
                            };
                            html! {
                                <button class="btn btn-primary btn-outline" onclick={onclick}>
                                    {&link.label}
                                </button>
                            }
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
