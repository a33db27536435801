use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::currency::Currency;

#[derive(Properties, PartialEq)]
pub struct CurrencySelectorProps {
    pub label: AttrValue,
    pub selected: Currency,
    pub disabled: bool,
    pub on_change: Callback<Currency>,
}

/// Currency selector dropdown component
#[function_component(CurrencySelector)]
pub fn currency_selector(props: &CurrencySelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(currency) = target.value().parse::<Currency>() {
                callback.emit(currency);
            }
        })
    };

    html! {
        <select
            class="currency-selector"
            onchange={on_change}
            disabled={props.disabled}
            aria-label={props.label.clone()}
            title={props.label.clone()}
        >
            {
                Currency::all().iter().map(|c| {
                    let code = c.code();
                    let selected = *c == props.selected;
                    html! {
                        <option value={code} title={c.name()} {selected}>{code}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
