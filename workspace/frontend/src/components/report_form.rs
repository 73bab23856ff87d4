use common::map::LOCATE_ZOOM;
use common::preview::ACCEPTED_MEDIA;
use common::{HazardType, ReportDraft, ReportFormSurface, SubmissionController, SubmissionPhase};
use gloo_timers::callback::Timeout;
use web_sys::{File, FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use super::hazard_map::MapHandle;
use super::media_preview::{use_media_previews, MediaPreviewList, MediaPreviews};
use super::submission_indicator::SubmissionIndicator;
use crate::api_client::Gateway;
use crate::files::file_list;
use crate::geolocation;
use crate::settings;
use crate::shared::toast::ToastContext;

const SEVERITIES: [(&str, &str); 4] = [
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
    ("critical", "Critical"),
];

/// The mounted form as the submission controller drives it.
struct FormSurface {
    form: HtmlFormElement,
    media_input: NodeRef,
    previews: MediaPreviews,
    phase: UseStateHandle<SubmissionPhase>,
    on_refresh: Callback<()>,
}

impl ReportFormSurface for FormSurface {
    type Media = File;

    fn read_draft(&self) -> ReportDraft {
        let data = FormData::new_with_form(&self.form).ok();
        let field = |name: &str| {
            data.as_ref()
                .and_then(|d| d.get(name).as_string())
                .unwrap_or_default()
        };
        ReportDraft {
            hazard_type: field("hazardType"),
            severity: field("severity"),
            location: field("location"),
            datetime: field("datetime"),
            description: field("description"),
            contact_name: field("contactName"),
            contact_phone: field("contactPhone"),
        }
    }

    fn media(&self) -> Vec<File> {
        file_list(self.media_input.cast::<HtmlInputElement>().and_then(|input| input.files()))
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn clear_previews(&self) {
        self.previews.clear();
    }

    fn show_phase(&self, phase: SubmissionPhase) {
        self.phase.set(phase);
    }

    fn refresh_reports(&self) {
        self.on_refresh.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportFormProps {
    pub gateway: Gateway,
    pub map: MapHandle,
    pub on_refresh: Callback<()>,
}

#[function_component(ReportForm)]
pub fn report_form(props: &ReportFormProps) -> Html {
    let form_ref = use_node_ref();
    let media_ref = use_node_ref();
    let location_ref = use_node_ref();
    let phase = use_state(SubmissionPhase::default);
    let previews = use_media_previews();
    let toast_ctx = use_context::<ToastContext>();

    let on_media_change = {
        let previews = previews.clone();
        Callback::from(move |e: Event| {
            let files = file_list(e.target_dyn_into::<HtmlInputElement>().and_then(|input| input.files()));
            previews.select(files, settings::get_settings().config.preview_limit);
        })
    };

    let on_locate = {
        let location_ref = location_ref.clone();
        let map = props.map.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let location_ref = location_ref.clone();
            let map = map.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match geolocation::current_position().await {
                    Ok((lat, lon)) => {
                        if let Some(input) = location_ref.cast::<HtmlInputElement>() {
                            input.set_value(&format!("{}, {}", lat, lon));
                        }
                        map.with(|view| view.recenter(lat, lon, LOCATE_ZOOM));
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(e.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_submit = {
        let gateway = props.gateway.clone();
        let on_refresh = props.on_refresh.clone();
        let form_ref = form_ref.clone();
        let media_ref = media_ref.clone();
        let previews = previews.clone();
        let phase = phase.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.submit_enabled() {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Report form is not mounted");
                return;
            };

            let surface = FormSurface {
                form,
                media_input: media_ref.clone(),
                previews: previews.clone(),
                phase: phase.clone(),
                on_refresh: on_refresh.clone(),
            };
            let controller = SubmissionController::with_duration(
                gateway.0.clone(),
                settings::get_settings().config.indicator_duration_ms,
            );

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.submit(&surface).await;
                log::debug!("Submission finished: {:?}", outcome);
                Timeout::new(controller.indicator_duration_ms(), move || {
                    controller.settle(&surface);
                })
                .forget();
            });
        })
    };

    html! {
        <form id="reportForm" ref={form_ref} class="report-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="hazardType">{"Hazard Type"}</label>
                    <select id="hazardType" name="hazardType" required={true}>
                        { for HazardType::ALL.into_iter().map(|h| html! {
                            <option value={h.key()}>{h.label()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="severity">{"Severity"}</label>
                    <select id="severity" name="severity" required={true}>
                        { for SEVERITIES.iter().map(|(value, label)| html! {
                            <option value={*value}>{*label}</option>
                        })}
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="location">{"Location"}</label>
                <div class="input-with-button">
                    <input ref={location_ref} type="text" id="location" name="location"
                        placeholder="lat, lon or place name" required={true} />
                    <button type="button" class="btn btn-outline" onclick={on_locate}>
                        <i class="fas fa-location-arrow"></i>{" Use my location"}
                    </button>
                </div>
            </div>
            <div class="form-group">
                <label for="datetime">{"Date & Time"}</label>
                <input type="datetime-local" id="datetime" name="datetime" required={true} />
            </div>
            <div class="form-group">
                <label for="description">{"Description"}</label>
                <textarea id="description" name="description" rows="4" required={true}></textarea>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="contactName">{"Contact Name"}</label>
                    <input type="text" id="contactName" name="contactName" />
                </div>
                <div class="form-group">
                    <label for="contactPhone">{"Contact Phone"}</label>
                    <input type="tel" id="contactPhone" name="contactPhone" />
                </div>
            </div>
            <div class="form-group">
                <label for="media">{"Photos / Videos"}</label>
                <input ref={media_ref} type="file" id="media" accept={ACCEPTED_MEDIA}
                    multiple={true} onchange={on_media_change} />
                <MediaPreviewList previews={previews.items()} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={!phase.submit_enabled()}>
                <i class="fas fa-paper-plane"></i>{" Submit Report"}
            </button>
            <SubmissionIndicator phase={*phase} />
        </form>
    }
}
