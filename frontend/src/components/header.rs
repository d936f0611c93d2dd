use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-credit-card"></i> {" Fraud Detection System"}</h1>
            <p class="subtitle">{"Enter transaction details to analyze potential fraud"}</p>
        </header>
    }
}
