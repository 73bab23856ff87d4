use common::ui::filter_buttons;
use common::HazardFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub active: HazardFilter,
    pub on_select: Callback<HazardFilter>,
}

/// Hazard-type buttons above the map. Exactly one carries `active`.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <div class="map-filters">
            { for filter_buttons().into_iter().map(|(label, filter)| {
                let is_active = filter == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let filter = filter.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(filter.clone()))
                };
                html! {
                    <button
                        key={filter.value().to_string()}
                        class={classes!("filter-btn", is_active.then_some("active"))}
                        {onclick}
                    >
                        {label}
                    </button>
                }
            })}
        </div>
    }
}
