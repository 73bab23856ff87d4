use std::rc::Rc;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn class(&self) -> &'static str {
        match self {
            ToastType::Success => "toast-success",
            ToastType::Error => "toast-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "fas fa-check-circle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

enum ToastAction {
    Add(usize, String, ToastType),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(id, message, toast_type) => toasts.push(Toast {
                id,
                message,
                toast_type,
            }),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastType::Success));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let dispatcher = toasts.dispatcher();
        use_callback((), move |(message, toast_type): (String, ToastType), _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            dispatcher.dispatch(ToastAction::Add(id, message, toast_type));

            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast-container">
                {for toasts.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = toasts.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("toast", toast.toast_type.class())}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="toast-close" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
