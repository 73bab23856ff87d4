use common::map::{DEFAULT_CENTER, DEFAULT_ZOOM};
use common::{HazardFilter, MapView, Report};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::filter_bar::FilterBar;
use super::leaflet::LeafletLayer;

/// The dashboard's single map controller, created once the container is in
/// the DOM. Shared with the report form for geolocation recentring.
#[derive(Clone, Default)]
pub struct MapHandle(Rc<RefCell<Option<MapView<LeafletLayer>>>>);

impl PartialEq for MapHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MapHandle {
    fn mount(&self, layer: LeafletLayer) {
        *self.0.borrow_mut() = Some(MapView::new(layer));
    }

    /// Runs `f` on the controller; `None` before the map is mounted
    pub fn with<R>(&self, f: impl FnOnce(&mut MapView<LeafletLayer>) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }
}

#[derive(Properties, PartialEq)]
pub struct HazardMapProps {
    pub reports: Rc<Vec<Report>>,
    pub map: MapHandle,
    pub visible: bool,
}

#[function_component(HazardMap)]
pub fn hazard_map(props: &HazardMapProps) -> Html {
    let container = use_node_ref();
    let filter = use_state(HazardFilter::default);

    {
        let container = container.clone();
        let map = props.map.clone();
        use_effect_with((), move |_| {
            match container.cast::<HtmlElement>() {
                Some(element) => map.mount(LeafletLayer::mount(&element, DEFAULT_CENTER, DEFAULT_ZOOM)),
                None => log::error!("Map container missing; markers will not be shown"),
            }
            || ()
        });
    }

    {
        let map = props.map.clone();
        use_effect_with(
            (props.reports.clone(), (*filter).clone()),
            move |(reports, filter)| {
                map.with(|view| {
                    view.set_filter(filter.clone());
                    let placed = view.render(reports);
                    log::debug!("Map shows {} of {} reports ({})", placed, reports.len(), filter);
                });
                || ()
            },
        );
    }

    {
        let map = props.map.clone();
        use_effect_with(props.visible, move |visible| {
            if *visible {
                map.with(|view| view.layer().refresh_size());
            }
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |selected: HazardFilter| {
            log::debug!("Filter selected: {}", selected);
            filter.set(selected);
        })
    };

    html! {
        <div class="map-panel">
            <FilterBar active={(*filter).clone()} on_select={on_filter} />
            <div ref={container} id="map" class="map-container"></div>
        </div>
    }
}
