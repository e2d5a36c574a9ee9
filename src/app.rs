use yew::prelude::*;

/// Placeholder landing page: a centered hero with the product name and a
/// one-line tagline. No props, no state, no effects.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <main class="landing">
            <h1>{ "Welcome to SecurityLens (Secutrix)!" }</h1>
            <p>{ "Your AI+ SOC platform is ready to build." }</p>
        </main>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! { <LandingPage /> }
}
