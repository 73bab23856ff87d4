use common::preview::select_previews;
use common::{MediaKind, MediaPreview, PreviewLimit, PreviewSet};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::File;
use yew::prelude::*;

use crate::files::read_preview;

pub enum PreviewAction {
    Begin(u64),
    Append(u64, MediaPreview),
}

#[derive(Default, PartialEq)]
pub struct PreviewState {
    set: PreviewSet,
}

impl Reducible for PreviewState {
    type Action = PreviewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut set = self.set.clone();
        match action {
            PreviewAction::Begin(generation) => set.begin(generation),
            PreviewAction::Append(generation, preview) => {
                if !set.accept(generation, preview) {
                    log::trace!("Dropped preview from selection {}", generation);
                    return self;
                }
            }
        }
        Rc::new(Self { set })
    }
}

/// Preview area state plus the counter that tags each selection.
#[derive(Clone)]
pub struct MediaPreviews {
    state: UseReducerHandle<PreviewState>,
    next_generation: Rc<RefCell<u64>>,
}

impl MediaPreviews {
    pub fn items(&self) -> Vec<MediaPreview> {
        self.state.set.items().to_vec()
    }

    fn begin(&self) -> u64 {
        let generation = {
            let mut next = self.next_generation.borrow_mut();
            *next += 1;
            *next
        };
        self.state.dispatch(PreviewAction::Begin(generation));
        generation
    }

    /// Replaces the previews with the first `limit` files. Each file is
    /// decoded independently and shows up when its read completes.
    pub fn select(&self, files: Vec<File>, limit: PreviewLimit) {
        let generation = self.begin();
        let selected = select_previews(files, limit);
        log::debug!("Previewing {} file(s)", selected.len());

        for file in selected {
            let dispatcher = self.state.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                match read_preview(&file).await {
                    Ok(preview) => dispatcher.dispatch(PreviewAction::Append(generation, preview)),
                    Err(e) => log::warn!("No preview for {}: {}", file.name(), e),
                }
            });
        }
    }

    pub fn clear(&self) {
        self.begin();
    }
}

#[hook]
pub fn use_media_previews() -> MediaPreviews {
    let state = use_reducer(PreviewState::default);
    let next_generation = use_mut_ref(|| 0u64);
    MediaPreviews {
        state,
        next_generation,
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaPreviewListProps {
    pub previews: Vec<MediaPreview>,
}

#[function_component(MediaPreviewList)]
pub fn media_preview_list(props: &MediaPreviewListProps) -> Html {
    html! {
        <div id="filePreview" class="file-preview">
            { for props.previews.iter().map(|preview| match preview.kind {
                MediaKind::Image => html! {
                    <img src={preview.data_url.clone()} alt={preview.name.clone()} style="max-width: 100px;" />
                },
                MediaKind::Video => html! {
                    <video src={preview.data_url.clone()} controls={true} style="max-width: 100px;"></video>
                },
            })}
        </div>
    }
}
