use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn Footer(categories: Vec<Category>, year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-columns">
                    <div>
                        <h3 class="footer-heading">"Kliin Fashions"</h3>
                        <p class="footer-text">
                            "Discover the latest trends in fashion with Kliin Fashions."
                        </p>
                    </div>
                    <div>
                        <h3 class="footer-heading">"Quick Links"</h3>
                        <ul class="footer-links">
                            {categories
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <li>
                                            <a href=category.anchor() class="footer-link">
                                                {category.label().to_string()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer-heading">"Contact"</h3>
                        <p class="footer-text">"Email: support@kliinfashions.com"</p>
                        <p class="footer-text">"Phone: (555) 123-4567"</p>
                    </div>
                </div>
                <p class="copyright">
                    {format!("\u{a9} {year} Kliin Fashions. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
