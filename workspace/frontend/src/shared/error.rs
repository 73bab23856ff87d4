use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="error-state">
            <i class="fas fa-exclamation-circle"></i>
            <div class="error-body">
                <span class="error-title">{"Could not load reports"}</span>
                <span class="error-message">{&props.message}</span>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="retry-btn"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
