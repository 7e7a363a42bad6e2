use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info};
use web_sys::MouseEvent;

mod config;
mod content;
mod navigation;
mod sections;
mod viewport;
mod pages {
    pub mod home;
    pub mod services;
    pub mod product;
    pub mod careers;
    pub mod not_found;
}

use content::CATALOG;
use navigation::{apply_effect, nav_menu, NavAction, NavItem, NavState, ROOT_PATH};
use viewport::{BrowserViewport, ScrollListener};

use pages::{
    home::Home,
    services::ServicesDetail,
    product::ProductPage,
    careers::Careers,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/twinav")]
    TwinAv,
    #[at("/twinhrm")]
    TwinHrm,
    #[at("/twinshield")]
    TwinShield,
    #[at("/careers")]
    Careers,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesDetail /> }
        },
        Route::TwinAv => {
            info!("Rendering TwinAV page");
            html! { <ProductPage slug="twinav" /> }
        },
        Route::TwinHrm => {
            info!("Rendering TwinHRM page");
            html! { <ProductPage slug="twinhrm" /> }
        },
        Route::TwinShield => {
            info!("Rendering TwinShield page");
            html! { <ProductPage slug="twinshield" /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


fn render_item(item: &NavItem, class: &'static str, on_select: &Callback<NavItem>) -> Html {
    if item.is_external() {
        // The browser opens the link, the handler only closes the menu.
        let onclick = {
            let item = item.clone();
            let on_select = on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(item.clone()))
        };
        return html! {
            <a key={item.label.clone()} href={item.href()} target="_blank" rel="noopener noreferrer"
                class={class} onclick={onclick}>
                {&item.label}
            </a>
        };
    }

    let onclick = {
        let item = item.clone();
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(item.clone());
        })
    };
    html! {
        <a key={item.label.clone()} href={item.href()} class={class} onclick={onclick}>
            {&item.label}
        </a>
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavState::default);
    let navigator = use_navigator();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| ROOT_PATH.to_string());
    let menu = nav_menu(&CATALOG.navigation, &path);

    {
        let state = state.clone();
        use_effect_with_deps(move |_| {
            let listener = ScrollListener::attach(move |offset| {
                state.dispatch(NavAction::Scrolled(offset));
            });
            move || drop(listener)
        }, ());
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |item: NavItem| {
            state.dispatch(NavAction::ItemSelected);
            let navigate = |path: &str| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::recognize(path).unwrap_or(Route::NotFound));
                }
            };
            match BrowserViewport::current() {
                Ok(viewport) => {
                    apply_effect(&item.effect(), &viewport, navigate);
                }
                Err(err) => debug!("Ignoring `{}` outside a browser: {}", item.label, err),
            }
        })
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ItemSelected))
    };

    let dismiss_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMobileMenu(false)))
    };

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMobileMenu(!state.mobile_menu_open));
        })
    };

    let menu_class = if state.mobile_menu_open {
        "mobile-menu mobile-menu-open"
    } else {
        "mobile-menu"
    };

    html! {
        <>
        // Outside the header, whose transform would clip a fixed overlay
        if state.mobile_menu_open {
            <div class="menu-backdrop" onclick={dismiss_menu}></div>
        }
        <header class={classes!("top-nav", state.is_compact().then(|| "compact"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 14px;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        height: 56px;
                        width: 95%;
                        max-width: 48rem;
                        border-radius: 9999px;
                        background: rgba(20, 20, 20, 0.7);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
                        transition: all 0.5s ease;
                    }
                    .top-nav.compact {
                        width: 90%;
                        max-width: 42rem;
                        transform: translateX(-50%) scale(0.95);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 100%;
                        padding: 0 1.5rem;
                    }
                    .nav-logo {
                        font-weight: 700;
                        color: #ffffff;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        color: #a1a1aa;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover { color: #ffffff; }
                    .button-gradient {
                        padding: 0.4rem 1rem;
                        border-radius: 0.5rem;
                        color: #ffffff;
                        text-decoration: none;
                        background: linear-gradient(90deg, #00bfff, #6366f1);
                    }
                    .burger-menu, .mobile-menu { display: none; }
                    .menu-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(0, 0, 0, 0.4);
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu {
                            display: block;
                            background: none;
                            border: 0;
                        }
                        .burger-menu span {
                            display: block;
                            width: 20px;
                            height: 2px;
                            margin: 4px 0;
                            background: #ffffff;
                        }
                        .mobile-menu-open {
                            z-index: 50;
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            position: fixed;
                            top: 70px;
                            right: 0;
                            padding: 2rem;
                            border-radius: 1rem;
                            background: rgba(20, 20, 20, 0.95);
                        }
                        .mobile-link {
                            font-size: 1.125rem;
                            color: #a1a1aa;
                            text-decoration: none;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <div onclick={close_menu}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"TwinCord"}
                    </Link<Route>>
                </div>

                <div class="nav-links">
                    { for menu.items.iter().map(|item| render_item(item, "nav-link", &on_select)) }
                    { for menu.cta.iter().map(|cta| render_item(cta, "button-gradient", &on_select)) }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for menu.items.iter().map(|item| render_item(item, "mobile-link", &on_select)) }
                    { for menu.cta.iter().map(|cta| render_item(cta, "button-gradient", &on_select)) }
                </div>
            </nav>
        </header>
        </>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
