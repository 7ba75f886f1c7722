use futures::future::abortable;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{CatalogStatus, ProductSource};
use crate::components::category_grid::CategoryGrid;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::product_grid::ProductGrid;
use crate::models::Category;

/// Landing page: header, hero, categories, products (the children) and footer.
#[component]
pub fn HomePage(categories: Vec<Category>, year: i32, children: Children) -> impl IntoView {
    view! {
        <div class="home-page">
            <Header categories=categories.clone() />

            <main class="container main-content">
                <Hero />
                <CategoryGrid categories=categories.clone() />

                <section id="shop" class="products-section">
                    <h2 class="section-title">"Featured Products"</h2>
                    {children()}
                </section>
            </main>

            <Footer categories=categories year=year />
        </div>
    }
}

/// Starts one catalog load in the background and hands the outcome to
/// `on_settled`.
///
/// The load is tied to the current owner: when it is cleaned up, the pending
/// read is aborted and `on_settled` never runs.
pub fn spawn_catalog_load(
    source: ProductSource,
    on_settled: impl FnOnce(CatalogStatus) + 'static,
) {
    let (load, handle) = abortable(async move { source.resolve().await });
    on_cleanup(move || handle.abort());

    spawn_local(async move {
        if let Ok(resolved) = load.await {
            on_settled(resolved);
        }
    });
}

/// Product grid that shows a placeholder first and loads once after mounting.
#[component]
pub fn LiveProductGrid(source: ProductSource) -> impl IntoView {
    let (status, set_status) = signal(CatalogStatus::Loading);
    spawn_catalog_load(source, move |resolved| set_status.set(resolved));

    move || view! { <ProductGrid status=status.get() /> }
}
