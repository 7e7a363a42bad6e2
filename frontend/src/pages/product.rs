use yew::prelude::*;

use crate::content::CATALOG;
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub slug: AttrValue,
}

#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let Some(product) = CATALOG.product(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="product-page">
            <style>
                {r#"
                    .product-page {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 9rem 1.5rem 6rem;
                    }
                    .product-tagline { font-size: 1.25rem; color: #00bfff; }
                    .product-highlights { display: grid; gap: 0.75rem; padding: 0; list-style: none; }
                    .product-highlights li {
                        padding: 0.75rem 1rem;
                        border-left: 4px solid #00bfff;
                        border-radius: 0.5rem;
                        background: #f9fafb;
                    }
                "#}
            </style>
            <h1>{&product.name}</h1>
            <p class="product-tagline">{&product.tagline}</p>
            <p>{&product.description}</p>
            <ul class="product-highlights">
                { for product.highlights.iter().map(|highlight| html! { <li>{highlight}</li> }) }
            </ul>
        </div>
    }
}
