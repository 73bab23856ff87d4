use common::ui::ModalId;
use common::SessionIdentity;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_login: Callback<SessionIdentity>,
}

/// Display-only login. Nothing is sent anywhere.
#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let on_login = props.on_login.clone();
        let form_ref = form_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                return;
            };
            let user_type = form_data.get("userType").as_string().unwrap_or_default();
            let email = form_data.get("email").as_string().unwrap_or_default();

            match SessionIdentity::from_login(&user_type, &email) {
                Ok(identity) => {
                    log::info!("Logged in as {} ({})", identity.name, identity.role);
                    on_login.emit(identity);
                }
                Err(e) => log::error!("{}", e),
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let style = if props.show { "display: block;" } else { "display: none;" };

    html! {
        <div id={ModalId::Login.id()} class="modal" {style}>
            <div class="modal-content">
                <span class="close" onclick={on_close}>{"×"}</span>
                <h2>{"Login"}</h2>
                <form ref={form_ref} onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="userType">{"I am a"}</label>
                        <select id="userType" name="userType">
                            <option value="citizen">{"Citizen"}</option>
                            <option value="official">{"Official"}</option>
                            <option value="analyst">{"Analyst"}</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" name="email" />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" name="password" />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Login"}</button>
                </form>
            </div>
        </div>
    }
}
