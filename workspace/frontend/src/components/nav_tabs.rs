use common::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavTabsProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

/// One button per section; the active one carries `active`.
#[function_component(NavTabs)]
pub fn nav_tabs(props: &NavTabsProps) -> Html {
    html! {
        <nav class="nav-tabs">
            { for Tab::ALL.into_iter().map(|tab| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                html! {
                    <button
                        key={tab.id()}
                        class={classes!("nav-tab", (tab == props.active).then_some("active"))}
                        data-tab={tab.id()}
                        {onclick}
                    >
                        <i class={tab.icon()}></i>{" "}{tab.title()}
                    </button>
                }
            })}
        </nav>
    }
}
