use common::Page;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: Page,
    pub on_select: Callback<Page>,
}

/// Radio-style page selector
#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="lab-drawer"></label>
            <div class="p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <div class="flex items-center gap-3 px-2 mb-6">
                    <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                        <i class="fas fa-fish"></i>
                    </div>
                    <span class="text-2xl font-bold tracking-tight">{"ShrimpLab"}</span>
                </div>

                <h2 class="font-semibold mb-2 px-2">{"Navigation"}</h2>
                <div class="flex flex-col gap-2 px-2" role="radiogroup">
                    {for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let onchange = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                if input.checked() {
                                    log::debug!("Sidebar selected: {}", page);
                                    on_select.emit(page);
                                }
                            })
                        };

                        html! {
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="radio"
                                    name="page"
                                    class="radio radio-primary"
                                    checked={props.selected == page}
                                    onchange={onchange}
                                />
                                <span class="label-text">{page.label()}</span>
                            </label>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
