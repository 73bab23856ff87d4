use common::sample::notifications;
use common::ui::LANGUAGES;
use common::{SessionIdentity, Theme};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub identity: SessionIdentity,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_login: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_language = Callback::from(|e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            log::info!("Language changed to: {}", select.value());
        }
    });

    let on_notifications = Callback::from(|_: MouseEvent| {
        let alerts = notifications();
        log::info!("Notifications: {} new alerts ({})", alerts.len(), alerts.join(", "));
    });

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_login = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| on_login.emit(()))
    };

    html! {
        <header class="header">
            <div class="brand">
                <i class="fas fa-water"></i>
                <span>{"CoastWatch"}</span>
            </div>
            <div class="header-controls">
                <select id="languageSelect" class="language-select" onchange={on_language}>
                    { for LANGUAGES.iter().map(|(code, label)| html! {
                        <option value={*code}>{*label}</option>
                    })}
                </select>
                <button id="notificationsBtn" class="icon-btn" onclick={on_notifications}>
                    <i class="fas fa-bell"></i>
                    <span class="badge">{notifications().len()}</span>
                </button>
                <button id="darkModeToggle" class="icon-btn" onclick={on_toggle_theme}>
                    <i class={classes!("fas", props.theme.toggle_icon())}></i>
                </button>
                <div class="user-info">
                    <span id="userName" class="user-name">{&props.identity.name}</span>
                    <span id="userRole" class="user-role">{&props.identity.role}</span>
                </div>
                <button id="loginBtn" class="btn btn-primary" onclick={on_login}>
                    <i class="fas fa-sign-in-alt"></i>{" Login"}
                </button>
            </div>
        </header>
    }
}
