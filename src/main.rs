use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;

use components::ConversionForm;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Currency Converter"}</h1>
            </header>

            <main class="app-main">
                <section class="form-section">
                    <ConversionForm />
                </section>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
