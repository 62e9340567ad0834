use yew::prelude::*;

use crate::api_client::{ApiFailure, COLUMN_TYPE_MISMATCH, SCHEMA_LOOKUP_FAILED, UPLOAD_NOT_FOUND};

fn headline(code: Option<&str>) -> &'static str {
    match code {
        Some(UPLOAD_NOT_FOUND) => "Uploaded file is no longer available",
        Some(SCHEMA_LOOKUP_FAILED) => "Uploaded file is missing a required column",
        Some(COLUMN_TYPE_MISMATCH) => "Uploaded file has non-numeric gross_millions",
        _ => "Could not load this page",
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub failure: ApiFailure,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Offered only for upload problems
    #[prop_or_default]
    pub on_use_sample: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    let failure = &props.failure;
    log::warn!("Render failed ({:?}): {}", failure.code, failure.message);

    let use_sample = props
        .on_use_sample
        .clone()
        .filter(|_| failure.is_upload_problem());

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{headline(failure.code.as_deref())}</span>
                    <span class="text-sm">{&failure.message}</span>
                    {for failure.code.iter().map(|code| html! {
                        <span class="badge badge-outline font-mono">{code}</span>
                    })}
                </div>
            </div>
            <div class="flex gap-2">
                {if let Some(on_use_sample) = use_sample {
                    html! {
                        <button
                            class="btn btn-secondary btn-sm"
                            onclick={Callback::from(move |_| {
                                log::info!("Falling back to sample data");
                                on_use_sample.emit(());
                            })}
                        >
                            <i class="fas fa-flask"></i>
                            {" Use sample data"}
                        </button>
                    }
                } else {
                    html! {}
                }}
                {if let Some(on_retry) = props.on_retry.clone() {
                    html! {
                        <button
                            class="btn btn-primary btn-sm"
                            onclick={Callback::from(move |_| on_retry.emit(()))}
                        >
                            <i class="fas fa-redo"></i>
                            {" Try Again"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_names_upload_problems() {
        assert_eq!(headline(Some(UPLOAD_NOT_FOUND)), "Uploaded file is no longer available");
        assert_eq!(
            headline(Some(SCHEMA_LOOKUP_FAILED)),
            "Uploaded file is missing a required column"
        );
        assert_eq!(headline(Some("UNKNOWN_MONTH")), "Could not load this page");
        assert_eq!(headline(None), "Could not load this page");
    }
}
