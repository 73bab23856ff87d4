use common::SubmissionPhase;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmissionIndicatorProps {
    pub phase: SubmissionPhase,
}

#[function_component(SubmissionIndicator)]
pub fn submission_indicator(props: &SubmissionIndicatorProps) -> Html {
    let phase = props.phase;
    let style = if phase.indicator_visible() { "display: flex;" } else { "display: none;" };

    html! {
        <div id="spinnerContainer" class="spinner-container" {style}>
            <i id="spinnerIcon" class={phase.icon_class()}></i>
            <span id="spinnerText" class={classes!("spinner-text", phase.text_class())}>
                {phase.message()}
            </span>
        </div>
    }
}
