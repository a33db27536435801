use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AmountFieldProps {
    pub value: f64,
    pub disabled: bool,
    pub on_input: Callback<String>,
}

/// Numeric amount input for the conversion form.
///
/// Emits the raw string on every keystroke; validation happens in the form
/// state, not here.
#[function_component(AmountField)]
pub fn amount_field(props: &AmountFieldProps) -> Html {
    let on_input = {
        let callback = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <input
            class="amount-input"
            type="number"
            min="0"
            value={props.value.to_string()}
            oninput={on_input}
            disabled={props.disabled}
            aria-label="Amount to convert"
        />
    }
}
