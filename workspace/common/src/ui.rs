//! Page chrome state: active tab, open modals, theme and filter buttons.
//! Nothing here survives a reload.

use std::collections::HashSet;

use crate::map::HazardFilter;
use crate::report::HazardType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Map,
    Reports,
    Submit,
    Social,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Map, Tab::Reports, Tab::Submit, Tab::Social, Tab::Analytics];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Reports => "reports",
            Self::Submit => "submit",
            Self::Social => "social",
            Self::Analytics => "analytics",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// DOM id of the section shown for this tab
    pub fn section_id(&self) -> String {
        format!("{}-section", self.id())
    }

    /// Sections whose canvas measures its container and must be re-laid
    /// out once the section is displayed
    pub fn resizes_on_show(&self) -> bool {
        matches!(self, Self::Map | Self::Analytics)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Map => "Live Map",
            Self::Reports => "Reports",
            Self::Submit => "Submit Report",
            Self::Social => "Social Feed",
            Self::Analytics => "Analytics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Map => "fas fa-map-marked-alt",
            Self::Reports => "fas fa-table",
            Self::Submit => "fas fa-plus-circle",
            Self::Social => "fas fa-hashtag",
            Self::Analytics => "fas fa-chart-bar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Login,
}

impl ModalId {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Login => "loginModal",
        }
    }
}

/// Which modals are currently open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: HashSet<ModalId>,
}

impl ModalState {
    pub fn is_open(&self, modal: ModalId) -> bool {
        self.open.contains(&modal)
    }

    pub fn open(&mut self, modal: ModalId) {
        self.open.insert(modal);
    }

    pub fn close(&mut self, modal: ModalId) {
        self.open.remove(&modal);
    }

    pub fn toggle(&mut self, modal: ModalId) {
        if !self.open.remove(&modal) {
            self.open.insert(modal);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class added to `<body>`
    pub fn body_class(&self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark-mode"),
        }
    }

    /// Icon on the toggle button
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

/// Filter controls above the map: (label, filter)
pub fn filter_buttons() -> Vec<(&'static str, HazardFilter)> {
    std::iter::once(("All", HazardFilter::All))
        .chain(HazardType::ALL.into_iter().map(|h| (h.label(), HazardFilter::from(h))))
        .collect()
}

/// Languages offered by the header select: (code, label)
pub const LANGUAGES: [(&str, &str); 4] = [
    ("en", "English"),
    ("hi", "हिन्दी"),
    ("ta", "தமிழ்"),
    ("ml", "മലയാളം"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_tabs_resize_on_show() {
        let resizing: Vec<Tab> = Tab::ALL.into_iter().filter(Tab::resizes_on_show).collect();
        assert_eq!(resizing, vec![Tab::Map, Tab::Analytics]);
    }

    #[test]
    fn test_tab_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::Reports.section_id(), "reports-section");
        assert_eq!(Tab::from_id("settings"), None);
    }

    #[test]
    fn test_modal_toggle() {
        let mut modals = ModalState::default();
        modals.toggle(ModalId::Login);
        assert!(modals.is_open(ModalId::Login));
        modals.toggle(ModalId::Login);
        assert!(!modals.is_open(ModalId::Login));
        modals.open(ModalId::Login);
        modals.close(ModalId::Login);
        assert!(!modals.is_open(ModalId::Login));
    }

    #[test]
    fn test_theme_toggle() {
        let dark = Theme::default().toggled();
        assert_eq!(dark.body_class(), Some("dark-mode"));
        assert_eq!(dark.toggle_icon(), "fa-sun");
        assert_eq!(dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_filter_buttons_start_with_all() {
        let buttons = filter_buttons();
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].1, HazardFilter::All);
        assert_eq!(buttons[2], ("Storm Surge", HazardFilter::Only("storm".to_string())));
    }
}
