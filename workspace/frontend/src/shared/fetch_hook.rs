use common::DashboardError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::FetchState;
use crate::shared::toast::ToastContext;

/// Runs `fetch_fn` on mount and whenever the returned callback fires.
/// Failures are stored in the state and shown once as a toast; nothing is
/// retried.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, DashboardError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_memo((), move |_| fetch_fn);

    let refetch = {
        let fetch_state = fetch_state.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn: Rc<F> = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match (*fetch_fn)().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        let message = err.to_string();
                        fetch_state.set(FetchState::Error(message.clone()));
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(message);
                        }
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
