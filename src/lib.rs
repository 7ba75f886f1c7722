//! Kliin Fashions storefront landing page.
//!
//! Rendered either to a complete HTML document ahead of time ([`render_page`])
//! or mounted in the browser with the `csr` feature ([`mount`]).

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod pages;

use chrono::Datelike;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use catalog::CatalogStatus;
use components::product_grid::ProductGrid;
use config::StorefrontConfig;
use layout::Document;
use models::Category;
use pages::home::HomePage;

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Assembles the full page from already-resolved inputs.
///
/// Same inputs, same bytes.
pub fn render_document(categories: &[Category], status: CatalogStatus, year: i32) -> String {
    let categories = categories.to_vec();

    let html = view! {
        <Document>
            <HomePage categories=categories year=year>
                <ProductGrid status=status />
            </HomePage>
        </Document>
    }
    .to_html();

    // Leptos doesn't include DOCTYPE
    format!("<!DOCTYPE html>\n{html}")
}

/// Loads the catalog once, then renders. Nothing is produced until the load settles.
pub async fn render_page(config: &StorefrontConfig) -> String {
    let status = config.product_source().resolve().await;
    render_document(&config.categories(), status, current_year())
}

/// Browser entry point. `config_json` is a serialized [`StorefrontConfig`];
/// `None` or an invalid value falls back to the bundled sample catalog.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount(config_json: Option<String>) {
    use config::FetchMode;
    use leptos::logging::{log, warn};
    use leptos::mount::mount_to_body;
    use pages::home::LiveProductGrid;

    console_error_panic_hook::set_once();

    let config = match config_json.as_deref().map(StorefrontConfig::from_json) {
        None => StorefrontConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("{e}; using the bundled catalog");
            StorefrontConfig::default()
        }
    };

    let categories = config.categories();
    let source = config.product_source();
    let year = current_year();

    match config.fetch_mode() {
        FetchMode::AfterRender => {
            log!("storefront mounted, catalog loads after first paint");
            mount_to_body(move || {
                view! {
                    <HomePage categories=categories year=year>
                        <LiveProductGrid source=source />
                    </HomePage>
                }
            });
        }
        FetchMode::BeforeRender => {
            wasm_bindgen_futures::spawn_local(async move {
                let status = source.resolve().await;
                log!("catalog settled, mounting storefront");
                mount_to_body(move || {
                    view! {
                        <HomePage categories=categories year=year>
                            <ProductGrid status=status />
                        </HomePage>
                    }
                });
            });
        }
    }
}
