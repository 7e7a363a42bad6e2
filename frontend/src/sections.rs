use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::content::ServiceSection;

/// Section named by the fragment, if it names one.
pub fn deep_link<'a>(sections: &'a [ServiceSection], fragment: &str) -> Option<&'a ServiceSection> {
    let key = fragment.trim_start_matches('#');
    if key.is_empty() {
        return None;
    }
    sections.iter().find(|section| section.id == key)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionState {
    pub active: Option<String>,
}

pub enum SectionAction {
    Activate(String),
}

impl SectionState {
    /// Deep-linked section, falling back to the first one.
    pub fn from_fragment(sections: &[ServiceSection], fragment: &str) -> Self {
        let active = deep_link(sections, fragment)
            .or_else(|| sections.first())
            .map(|section| section.id.clone());
        Self { active }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

impl Reducible for SectionState {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SectionAction::Activate(id) if self.is_active(&id) => self,
            SectionAction::Activate(id) => Rc::new(Self { active: Some(id) }),
        }
    }
}

pub fn tab_style(section: &ServiceSection, active: bool) -> String {
    if active {
        format!("background-color: {}; color: #ffffff;", section.accent_color)
    } else {
        "background-color: transparent;".to_string()
    }
}

/// Display label for a stat key, `successRate` becomes `Success Rate`.
pub fn stat_label(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for c in key.chars() {
        match words.last_mut() {
            Some(word) if !c.is_uppercase() => word.push(c),
            _ => words.push(c.to_string()),
        }
    }
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn reveal_delay(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u32 * config::REVEAL_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn sections() -> Vec<ServiceSection> {
        Catalog::embedded().expect("embedded content").services
    }

    #[test]
    fn known_fragment_becomes_active() {
        let sections = sections();
        for section in &sections {
            let state = SectionState::from_fragment(&sections, &format!("#{}", section.id));
            assert_eq!(state.active.as_deref(), Some(section.id.as_str()));
        }
    }

    #[test]
    fn empty_or_unknown_fragment_falls_back_to_first_section() {
        let sections = sections();
        for fragment in ["", "#", "pricing", "#CYBERSECURITY"] {
            let state = SectionState::from_fragment(&sections, fragment);
            assert_eq!(state.active.as_deref(), Some("cybersecurity"), "{:?}", fragment);
        }
    }

    #[test]
    fn no_sections_means_nothing_active() {
        assert_eq!(SectionState::from_fragment(&[], "ai-data"), SectionState::default());
    }

    #[test]
    fn only_matching_fragment_requests_deferred_scroll() {
        let sections = sections();
        assert_eq!(deep_link(&sections, "ai-data").map(|s| s.title.as_str()), Some("AI & Data Solutions"));
        assert!(deep_link(&sections, "").is_none());
        assert!(deep_link(&sections, "nope").is_none());
    }

    #[test]
    fn activation_switches_tabs() {
        let state = Rc::new(SectionState::from_fragment(&sections(), ""));
        let state = state.reduce(SectionAction::Activate("ui-ux-design".into()));
        assert!(state.is_active("ui-ux-design"));
        assert!(!state.is_active("cybersecurity"));
    }

    #[test]
    fn reactivating_keeps_the_same_state() {
        let state = Rc::new(SectionState {
            active: Some("ai-data".into()),
        });
        let next = state.clone().reduce(SectionAction::Activate("ai-data".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn active_tab_uses_accent_color() {
        let sections = sections();
        let section = &sections[1];
        assert_eq!(
            tab_style(section, true),
            "background-color: #3b82f6; color: #ffffff;"
        );
        assert_eq!(tab_style(section, false), "background-color: transparent;");
    }

    #[test]
    fn stat_labels_split_camel_case() {
        assert_eq!(stat_label("projects"), "Projects");
        assert_eq!(stat_label("successRate"), "Success Rate");
        assert_eq!(stat_label("avgResponseTime"), "Avg Response Time");
        assert_eq!(stat_label(""), "");
    }

    #[test]
    fn reveal_delay_staggers_by_index() {
        assert_eq!(reveal_delay(0), "animation-delay: 0ms;");
        assert_eq!(reveal_delay(3), "animation-delay: 300ms;");
    }
}
