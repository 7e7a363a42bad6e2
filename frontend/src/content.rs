//! Static site copy. The tables are compiled in from `src/content/*.json`
//! and parsed once on first use.

use std::collections::HashSet;

use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::navigation::NavigationTable;

const NAVIGATION_JSON: &str = include_str!("content/navigation.json");
const SERVICES_JSON: &str = include_str!("content/services.json");
const PRODUCTS_JSON: &str = include_str!("content/products.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("section id `{0}` is used more than once")]
    DuplicateSection(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServiceSection {
    /// Anchor key, used as element id and location fragment.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Glyph shown on the card and its tab.
    pub icon: String,
    pub accent_color: String,
    pub background: String,
    pub entries: Vec<ServiceEntry>,
    pub features: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub navigation: NavigationTable,
    pub services: Vec<ServiceSection>,
    pub products: Vec<Product>,
}

fn parse<T: for<'de> Deserialize<'de>>(table: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { table, source })
}

impl Catalog {
    pub fn from_json(navigation: &str, services: &str, products: &str) -> Result<Self, ContentError> {
        let catalog = Catalog {
            navigation: parse("navigation", navigation)?,
            services: parse("services", services)?,
            products: parse("products", products)?,
        };

        let mut seen = HashSet::new();
        for section in &catalog.services {
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(catalog)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(NAVIGATION_JSON, SERVICES_JSON, PRODUCTS_JSON)
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }
}

pub static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::embedded().unwrap_or_else(|err| {
        error!("Site content unavailable: {}", err);
        Catalog::default()
    })
});
