use common::ui::ModalId;
use common::{ModalState, Report, ReportGateway, SessionIdentity, Tab, Theme};
use std::rc::Rc;
use yew::prelude::*;

use super::analytics_chart::AnalyticsChart;
use super::feeds::{ActivityFeed, SocialFeed};
use super::hazard_map::{HazardMap, MapHandle};
use super::header::Header;
use super::login_modal::LoginModal;
use super::nav_tabs::NavTabs;
use super::report_form::ReportForm;
use super::reports_table::ReportsTable;
use crate::api_client::gateway_for;
use crate::hooks::FetchState;
use crate::settings;
use crate::shared::error::ErrorDisplay;
use crate::shared::fetch_hook::use_fetch_with_refetch;
use crate::shared::loading::Loading;
use crate::shared::toast::ToastContext;

fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.class_list().toggle_with_force("dark-mode", theme.body_class().is_some()) {
            log::warn!("Could not apply theme: {:?}", e);
        }
    }
}

/// Whole page. Every section stays mounted and only the active one is
/// displayed, so the map keeps its state across tab switches.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let tab = use_state(Tab::default);
    let theme = use_state(Theme::default);
    let modals = use_state(ModalState::default);
    let identity = use_state(SessionIdentity::default);
    let map = use_memo((), |_| MapHandle::default());
    let gateway = use_memo((), |_| gateway_for(&settings::get_settings().config));

    // One fetch feeds the map, the table and the chart
    let (reports_state, refetch) = {
        let gateway = (*gateway).clone();
        use_fetch_with_refetch(move || {
            let gateway = gateway.clone();
            async move { gateway.0.fetch_reports().await }
        })
    };

    {
        use_effect_with(*theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    // Last successful fetch; a failed refresh leaves the views as they were
    let reports = use_mut_ref(|| Rc::new(Vec::<Report>::new()));
    if let Some(fetched) = reports_state.data() {
        if reports.borrow().as_slice() != fetched.as_slice() {
            *reports.borrow_mut() = Rc::new(fetched.clone());
        }
    }
    let reports = reports.borrow().clone();

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected: Tab| {
            log::debug!("Switching to {}", selected.section_id());
            tab.set(selected);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let on_open_login = {
        let modals = modals.clone();
        Callback::from(move |_| {
            let mut next = (*modals).clone();
            next.open(ModalId::Login);
            modals.set(next);
        })
    };

    let on_close_login = {
        let modals = modals.clone();
        Callback::from(move |_| {
            let mut next = (*modals).clone();
            next.close(ModalId::Login);
            modals.set(next);
        })
    };

    let toast_ctx = use_context::<ToastContext>();
    let on_login = {
        let identity = identity.clone();
        let on_close_login = on_close_login.clone();
        Callback::from(move |new_identity: SessionIdentity| {
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_success(format!("Welcome, {}", new_identity.name));
            }
            identity.set(new_identity);
            on_close_login.emit(());
        })
    };

    // Only canvas sections care about becoming visible
    let shown = |section_tab: Tab| *tab == section_tab && section_tab.resizes_on_show();

    let section = |section_tab: Tab, content: Html| {
        let style = if *tab == section_tab { "display: block;" } else { "display: none;" };
        html! {
            <section id={section_tab.section_id()} class="tab-section" {style}>
                <h2><i class={section_tab.icon()}></i>{" "}{section_tab.title()}</h2>
                {content}
            </section>
        }
    };

    let load_status = match &*reports_state {
        FetchState::Loading if reports.is_empty() => html! {
            <Loading text={Some("Loading reports...".to_string())} />
        },
        FetchState::Error(message) => html! {
            <ErrorDisplay
                message={message.clone()}
                on_retry={Some(refetch.clone())}
            />
        },
        _ => html! {},
    };

    html! {
        <div class="app">
            <Header
                identity={(*identity).clone()}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                on_login={on_open_login}
            />
            <NavTabs active={*tab} on_select={on_tab} />
            <main class="main-content">
                {load_status}
                {section(Tab::Map, html! {
                    <HazardMap
                        reports={reports.clone()}
                        map={(*map).clone()}
                        visible={shown(Tab::Map)}
                    />
                })}
                {section(Tab::Reports, html! { <ReportsTable reports={reports.clone()} /> })}
                {section(Tab::Submit, html! {
                    <ReportForm
                        gateway={(*gateway).clone()}
                        map={(*map).clone()}
                        on_refresh={refetch.clone()}
                    />
                })}
                {section(Tab::Social, html! {
                    <div class="feeds">
                        <SocialFeed />
                        <ActivityFeed />
                    </div>
                })}
                {section(Tab::Analytics, html! { <AnalyticsChart reports={reports.clone()} visible={shown(Tab::Analytics)} /> })}
            </main>
            <LoginModal
                show={modals.is_open(ModalId::Login)}
                on_close={on_close_login}
                on_login={on_login}
            />
        </div>
    }
}
