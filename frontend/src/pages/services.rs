use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{ServiceSection, CATALOG};
use crate::sections::{
    deep_link, reveal_delay, stat_label, tab_style, SectionAction, SectionState,
};
use crate::viewport::{history_back, location_fragment, reveal_anchor, RevealObserver};

const SERVICES_STYLE: &str = r#"
    .services-page {
        min-height: 100vh;
        background-color: #f8f8f8;
        color: #3b3b3b;
    }
    .services-hero {
        padding: 8rem 1rem 4rem;
        text-align: center;
    }
    .services-hero h1 {
        font-size: 3rem;
        margin-bottom: 1.5rem;
    }
    .services-hero .accent { color: #00bfff; }
    .services-hero p {
        max-width: 48rem;
        margin: 0 auto;
        font-size: 1.25rem;
        color: #4b5563;
    }
    .back-button {
        margin-bottom: 2rem;
        padding: 0.5rem 1rem;
        border: 2px solid #00bfff;
        border-radius: 0.5rem;
        color: #00bfff;
        background: #ffffff;
        cursor: pointer;
    }
    .services-tabs {
        position: sticky;
        top: 0;
        z-index: 40;
        display: flex;
        gap: 0.25rem;
        overflow-x: auto;
        padding: 1rem;
        margin-bottom: 2rem;
        background: #ffffff;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .services-tab {
        padding: 0.5rem 1rem;
        border: 0;
        border-radius: 0.5rem;
        white-space: nowrap;
        font-size: 0.875rem;
        color: #4b5563;
        cursor: pointer;
        transition: all 0.3s;
    }
    .services-tab:not(.active):hover { background-color: #f3f4f6 !important; }
    .services-tab.active { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15); }
    .service-section { padding: 5rem 1rem; }
    .service-card {
        max-width: 80rem;
        margin: 0 auto;
        padding: 3rem;
        border-radius: 1.5rem;
        background: #ffffff;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }
    .service-header {
        display: flex;
        gap: 1.5rem;
        align-items: center;
    }
    .service-icon {
        padding: 1rem;
        border-radius: 1rem;
        font-size: 2rem;
    }
    .service-subtitle { font-size: 1.25rem; }
    .service-stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        margin-top: 2rem;
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: #f9fafb;
        text-align: center;
    }
    .stat-value { font-size: 1.5rem; font-weight: 700; }
    .stat-label { font-size: 0.875rem; color: #4b5563; }
    .service-block { margin-top: 2rem; }
    .service-entries {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 1.5rem;
    }
    .service-entry {
        padding: 1.5rem;
        border-left: 4px solid;
        border-radius: 0.75rem;
        background: #f9fafb;
    }
    .service-features {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
        gap: 1rem;
    }
    .service-feature {
        display: flex;
        gap: 0.5rem;
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: #f9fafb;
        font-size: 0.875rem;
    }
    @keyframes revealUp {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .reveal { opacity: 0; }
    .reveal.visible { animation: revealUp 0.8s ease-out forwards; }
"#;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    section: &'static ServiceSection,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { section, index } = props;
    let accent = section.accent_color.as_str();

    html! {
        <section id={section.id.clone()} class="service-section" style={format!("background: {};", section.background)}>
            <div class="service-card reveal" style={reveal_delay(*index)}>
                <div class="service-header">
                    // 20 is the hex alpha for a faint tint of the accent
                    <div class="service-icon" style={format!("background-color: {}20; color: {};", accent, accent)}>
                        <span class="icon" aria-hidden="true">{&section.icon}</span>
                    </div>
                    <div class="service-heading">
                        <h2>{&section.title}</h2>
                        <p class="service-subtitle" style={format!("color: {};", accent)}>{&section.subtitle}</p>
                        <p class="service-description">{&section.description}</p>
                    </div>
                </div>

                <div class="service-stats">
                    { for section.stats.iter().map(|stat| html! {
                        <div class="service-stat" key={stat.key.clone()}>
                            <div class="stat-value" style={format!("color: {};", accent)}>{&stat.value}</div>
                            <div class="stat-label">{stat_label(&stat.key)}</div>
                        </div>
                    }) }
                </div>

                <div class="service-block">
                    <h3>{"Our Services"}</h3>
                    <div class="service-entries">
                        { for section.entries.iter().enumerate().map(|(idx, entry)| html! {
                            <div class="service-entry reveal" key={entry.name.clone()}
                                style={format!("border-color: {}; {}", accent, reveal_delay(idx))}>
                                <h4>{&entry.name}</h4>
                                <p>{&entry.description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="service-block">
                    <h3>{"Key Features"}</h3>
                    <div class="service-features">
                        { for section.features.iter().map(|feature| html! {
                            <div class="service-feature" key={feature.clone()}>
                                <span class="feature-check" style={format!("color: {};", accent)}>{"✓"}</span>
                                <span>{feature}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesDetail)]
pub fn services_detail() -> Html {
    let sections: &'static [ServiceSection] = &CATALOG.services;
    let state = use_reducer(|| SectionState::from_fragment(sections, &location_fragment()));

    // Deep link: wait for layout before scrolling to the section
    {
        use_effect_with_deps(
            move |_| {
                let pending = deep_link(sections, &location_fragment()).map(|section| {
                    let id = section.id.clone();
                    Timeout::new(config::INITIAL_SCROLL_DELAY_MS, move || reveal_anchor(&id))
                });
                // Dropping an unfired Timeout cancels it
                move || drop(pending)
            },
            (),
        );
    }

    // Cards and entries start hidden and fade in once scrolled into view
    {
        use_effect_with_deps(
            move |_| {
                let observer = RevealObserver::observe_all(".reveal");
                move || drop(observer)
            },
            (),
        );
    }

    let go_back = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        history_back();
    });

    html! {
        <div class="services-page">
            <style>{SERVICES_STYLE}</style>

            <section class="services-hero">
                <button class="back-button" onclick={go_back}>
                    {"← Back to Services"}
                </button>
                <h1>{"Our "}<span class="accent">{"Service"}</span>{" Portfolio"}</h1>
                <p>
                    {"Comprehensive technology solutions designed to transform your business with innovation, security, and excellence."}
                </p>
            </section>

            <nav class="services-tabs">
                { for sections.iter().map(|section| {
                    let active = state.is_active(&section.id);
                    let onclick = {
                        let state = state.clone();
                        let id = section.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            state.dispatch(SectionAction::Activate(id.clone()));
                            reveal_anchor(&id);
                        })
                    };
                    html! {
                        <button key={section.id.clone()}
                            class={classes!("services-tab", active.then(|| "active"))}
                            style={tab_style(section, active)}
                            onclick={onclick}>
                            <span class="icon" aria-hidden="true">{&section.icon}</span>
                            <span>{&section.title}</span>
                        </button>
                    }
                }) }
            </nav>

            { for sections.iter().enumerate().map(|(index, section)| html! {
                <ServiceCard key={section.id.clone()} section={section} index={index} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(selector: &str) -> &'a str {
        let start = SERVICES_STYLE
            .find(&format!("{} {{", selector))
            .unwrap_or_else(|| panic!("no `{}` rule", selector));
        let rest = &SERVICES_STYLE[start..];
        &rest[..rest.find('}').map_or(rest.len(), |end| end + 1)]
    }

    #[test]
    fn reveal_waits_for_visible_class() {
        assert!(!rule(".reveal").contains("animation"));
        assert!(rule(".reveal").contains("opacity: 0"));
        assert!(rule(".reveal.visible").contains("animation: revealUp"));
    }
}
