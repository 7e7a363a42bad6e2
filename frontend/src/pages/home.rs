use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::content::CATALOG;
use crate::viewport::scroll_to_anchor;
use crate::Route;

fn product_route(slug: &str) -> Route {
    Route::recognize(&format!("/{}", slug)).unwrap_or(Route::NotFound)
}

#[function_component(Home)]
pub fn home() -> Html {
    let explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("services");
    });

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page { color: #e4e4e7; background: #0a0a0a; }
                    .home-page section { padding: 6rem 1.5rem; max-width: 72rem; margin: 0 auto; }
                    .home-hero { text-align: center; padding-top: 10rem !important; }
                    .home-hero h1 { font-size: 3.5rem; margin-bottom: 1.5rem; }
                    .home-hero p { font-size: 1.25rem; color: #a1a1aa; }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                    }
                    .home-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #18181b;
                        color: inherit;
                        text-decoration: none;
                        transition: transform 0.3s;
                    }
                    .home-card:hover { transform: translateY(-4px); }
                    .home-cta { text-align: center; }
                "#}
            </style>

            <section class="home-hero">
                <h1>{"Technology that works as hard as you do"}</h1>
                <p>{"TwinCord builds security, software and people-operations products for growing businesses."}</p>
                <button class="button-gradient" onclick={explore}>{"Explore Services"}</button>
            </section>

            <section id="about">
                <h2>{"About TwinCord"}</h2>
                <p>
                    {"We are a team of security engineers, developers and designers delivering dependable technology, from managed protection to custom software and training."}
                </p>
            </section>

            <section id="products">
                <h2>{"Products"}</h2>
                <div class="card-grid">
                    { for CATALOG.products.iter().map(|product| html! {
                        <Link<Route> to={product_route(&product.slug)} classes="home-card">
                            <h3>{&product.name}</h3>
                            <p>{&product.tagline}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section id="services">
                <h2>{"Services"}</h2>
                <div class="card-grid">
                    // Full page load so the services page reads the fragment on mount
                    { for CATALOG.services.iter().map(|section| html! {
                        <a key={section.id.clone()} class="home-card" href={format!("/services#{}", section.id)}>
                            <h3 style={format!("color: {};", section.accent_color)}>{&section.title}</h3>
                            <p>{&section.subtitle}</p>
                        </a>
                    }) }
                </div>
            </section>

            <section id="cta" class="home-cta">
                <h2>{"Ready to start?"}</h2>
                <p>{"Tell us what you are building and we will put the right team on it."}</p>
                <a class="button-gradient" href="mailto:hello@twincord.in">{"Contact Us"}</a>
            </section>
        </div>
    }
}
