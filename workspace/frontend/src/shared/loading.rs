use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner with an optional caption
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-state">
            <i class="fas fa-spinner fa-spin"></i>
            {if let Some(text) = &props.text {
                html! { <p class="loading-text">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
