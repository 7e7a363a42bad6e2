use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

use crate::config;
use crate::viewport::{scroll_to_section, Viewport};

pub const ROOT_PATH: &str = "/";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// In-page anchor key on the current page.
    Anchor(String),
    /// Another page of the site.
    Path(String),
    External(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

/// What selecting an item asks the page to do.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEffect {
    ScrollTo(String),
    Navigate(String),
    OpenExternal(String),
}

impl NavItem {
    pub fn is_external(&self) -> bool {
        matches!(self.target, NavTarget::External(_))
    }

    pub fn href(&self) -> String {
        match &self.target {
            NavTarget::Anchor(key) => format!("#{}", key),
            NavTarget::Path(path) => path.clone(),
            NavTarget::External(url) => url.clone(),
        }
    }

    pub fn effect(&self) -> NavEffect {
        match &self.target {
            NavTarget::Anchor(key) => NavEffect::ScrollTo(key.clone()),
            NavTarget::Path(path) => NavEffect::Navigate(path.clone()),
            NavTarget::External(url) => NavEffect::OpenExternal(url.clone()),
        }
    }
}

/// Header items as stored in the content table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct NavigationTable {
    pub home: Vec<NavItem>,
    pub subsite: Vec<NavItem>,
    /// Appended to both lists, identical on every route.
    #[serde(default)]
    pub shared: Vec<NavItem>,
    pub home_cta: Option<NavItem>,
    pub subsite_cta: Option<NavItem>,
}

impl NavigationTable {
    pub fn careers(&self) -> Option<&NavItem> {
        self.shared.iter().find(|item| item.is_external())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavMenu {
    pub items: Vec<NavItem>,
    pub cta: Option<NavItem>,
}

pub fn is_home(path: &str) -> bool {
    path == ROOT_PATH
}

/// In-page anchors on the home page, cross-page links everywhere else.
pub fn nav_menu(table: &NavigationTable, path: &str) -> NavMenu {
    let (own, cta) = if is_home(path) {
        (&table.home, &table.home_cta)
    } else {
        (&table.subsite, &table.subsite_cta)
    };
    NavMenu {
        items: own.iter().chain(table.shared.iter()).cloned().collect(),
        cta: cta.clone(),
    }
}

pub fn is_compact(offset: f64) -> bool {
    offset > config::COMPACT_SCROLL_THRESHOLD
}

/// Header UI state. Only the compact flag derived from the scroll offset is
/// kept, so scrolling within one band does not re-render the header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub compact: bool,
    pub mobile_menu_open: bool,
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMobileMenu(bool),
    /// Any item picked from either rendering, or the logo.
    ItemSelected,
}

impl NavState {
    pub fn is_compact(&self) -> bool {
        self.compact
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled(offset) => next.compact = is_compact(offset),
            NavAction::ToggleMobileMenu(open) => next.mobile_menu_open = open,
            NavAction::ItemSelected => next.mobile_menu_open = false,
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

/// Carries out a selected item's effect. Returns the scroll offset aimed for
/// when the item is an in-page anchor that exists.
pub fn apply_effect(
    effect: &NavEffect,
    viewport: &impl Viewport,
    navigate: impl FnOnce(&str),
) -> Option<f64> {
    match effect {
        NavEffect::ScrollTo(anchor) => scroll_to_section(viewport, anchor),
        NavEffect::Navigate(path) => {
            navigate(path);
            None
        }
        // Opened by the browser through the link's target
        NavEffect::OpenExternal(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::fake::FakeViewport;

    fn table() -> NavigationTable {
        let item = |label: &str, target: NavTarget| NavItem {
            label: label.to_string(),
            target,
        };
        NavigationTable {
            home: vec![
                item("About", NavTarget::Anchor("about".into())),
                item("Products", NavTarget::Anchor("products".into())),
            ],
            subsite: vec![
                item("Home", NavTarget::Path("/".into())),
                item("TwinAV", NavTarget::Path("/twinav".into())),
            ],
            shared: vec![item(
                "Careers",
                NavTarget::External("https://jobs.example.com".into()),
            )],
            home_cta: Some(item("Get Started", NavTarget::Anchor("cta".into()))),
            subsite_cta: Some(item("Join Us", NavTarget::Path("/careers".into()))),
        }
    }

    fn find<'a>(menu: &'a NavMenu, label: &str) -> &'a NavItem {
        menu.items
            .iter()
            .find(|item| item.label == label)
            .unwrap_or_else(|| panic!("no `{}` item", label))
    }

    #[test]
    fn compact_only_past_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(50.0));
        assert!(is_compact(50.5));
        assert!(is_compact(2000.0));
    }

    #[test]
    fn root_route_gets_anchor_items() {
        let menu = nav_menu(&table(), "/");
        let labels: Vec<_> = menu.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["About", "Products", "Careers"]);
        assert_eq!(find(&menu, "Products").effect(), NavEffect::ScrollTo("products".into()));
        assert_eq!(menu.cta.map(|cta| cta.effect()), Some(NavEffect::ScrollTo("cta".into())));
    }

    #[test]
    fn other_routes_get_page_links() {
        let menu = nav_menu(&table(), "/twinhrm");
        let labels: Vec<_> = menu.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["Home", "TwinAV", "Careers"]);
        assert_eq!(find(&menu, "Home").effect(), NavEffect::Navigate("/".into()));
        assert_eq!(menu.cta.map(|cta| cta.href()), Some("/careers".to_string()));
    }

    #[test]
    fn careers_is_the_same_external_link_everywhere() {
        let table = table();
        let home = nav_menu(&table, "/");
        let subsite = nav_menu(&table, "/services");

        let careers = find(&home, "Careers");
        assert_eq!(careers, find(&subsite, "Careers"));
        assert!(careers.is_external());
        assert_eq!(table.careers(), Some(careers));
    }

    #[test]
    fn anchor_href_is_a_fragment() {
        let menu = nav_menu(&table(), "/");
        assert_eq!(find(&menu, "About").href(), "#about");
    }

    #[test]
    fn scroll_updates_compact_mode() {
        let state = Rc::new(NavState::default());
        assert!(!state.is_compact());

        let state = state.reduce(NavAction::Scrolled(51.0));
        assert!(state.is_compact());

        let state = state.reduce(NavAction::Scrolled(10.0));
        assert!(!state.is_compact());
    }

    #[test]
    fn selecting_home_from_mobile_menu_closes_it_and_navigates() {
        let state = Rc::new(NavState::default()).reduce(NavAction::ToggleMobileMenu(true));
        assert!(state.mobile_menu_open);

        let menu = nav_menu(&table(), "/twinav");
        let home = find(&menu, "Home");
        let state = state.reduce(NavAction::ItemSelected);

        assert!(!state.mobile_menu_open);
        assert_eq!(home.effect(), NavEffect::Navigate("/".into()));
    }

    #[test]
    fn selection_keeps_compact_mode() {
        let state = Rc::new(NavState::default())
            .reduce(NavAction::Scrolled(400.0))
            .reduce(NavAction::ToggleMobileMenu(true))
            .reduce(NavAction::ItemSelected);
        assert!(state.is_compact());
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn scrolling_within_a_band_keeps_the_same_state() {
        let state = Rc::new(NavState::default()).reduce(NavAction::Scrolled(120.0));
        let next = state.clone().reduce(NavAction::Scrolled(480.0));
        assert!(Rc::ptr_eq(&state, &next));

        let top = Rc::new(NavState::default());
        let next = top.clone().reduce(NavAction::Scrolled(30.0));
        assert!(Rc::ptr_eq(&top, &next));
    }

    #[test]
    fn logo_click_closes_open_menu() {
        let state = Rc::new(NavState::default())
            .reduce(NavAction::ToggleMobileMenu(true))
            .reduce(NavAction::ItemSelected);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn backdrop_click_closes_open_menu() {
        let state = Rc::new(NavState::default())
            .reduce(NavAction::ToggleMobileMenu(true))
            .reduce(NavAction::ToggleMobileMenu(false));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn products_click_on_home_scrolls_below_header() {
        let viewport = FakeViewport {
            scroll_y: 300.0,
            ..Default::default()
        }
        .with_element("products", 420.0);
        let menu = nav_menu(&table(), "/");
        let mut navigated = None;

        let target = apply_effect(&find(&menu, "Products").effect(), &viewport, |path| {
            navigated = Some(path.to_string())
        });

        assert_eq!(target, Some(620.0));
        assert_eq!(*viewport.scrolled_to.borrow(), vec![620.0]);
        assert_eq!(navigated, None);
    }

    #[test]
    fn products_click_without_section_is_a_no_op() {
        let viewport = FakeViewport::default();
        let menu = nav_menu(&table(), "/");

        let target = apply_effect(&find(&menu, "Products").effect(), &viewport, |_| {});

        assert_eq!(target, None);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn home_click_on_subsite_navigates_to_root() {
        let viewport = FakeViewport::default().with_element("about", 0.0);
        let menu = nav_menu(&table(), "/twinshield");
        let mut navigated = None;

        apply_effect(&find(&menu, "Home").effect(), &viewport, |path| {
            navigated = Some(path.to_string())
        });

        assert_eq!(navigated.as_deref(), Some("/"));
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn careers_click_leaves_page_alone() {
        let viewport = FakeViewport::default();
        let menu = nav_menu(&table(), "/");
        let mut navigated = false;

        let target = apply_effect(&find(&menu, "Careers").effect(), &viewport, |_| navigated = true);

        assert_eq!(target, None);
        assert!(!navigated);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }
}
