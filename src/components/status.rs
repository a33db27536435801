use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub error: Option<String>,
    pub loading: bool,
}

/// Validation/network error text and the loading indicator.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    html! {
        <>
            if let Some(message) = &props.error {
                <p class="status error" style="color: red;">{message}</p>
            }
            if props.loading {
                <p class="status loading">{"Loading..."}</p>
            }
        </>
    }
}
