use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero-section">
            <div class="hero-banner">
                <img src="/images/hero-banner.jpg" alt="Kliin Fashions Hero" class="hero-image" />
                <div class="hero-overlay">
                    <div class="hero-content">
                        <h2 class="hero-title">"Discover Your Style"</h2>
                        <a href="#shop" class="button button-light">"Shop Now"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
