use yew::prelude::*;

use crate::hooks::use_conversion::ConversionState;
use crate::models::currency::Currency;

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub state: ConversionState,
}

/// Last-updated date and the formatted conversion result. Only rendered
/// while the form is neither loading nor showing an error.
#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    html! {
        <div class="conversion-result">
            if let Some(date) = props.state.date {
                <p class="result-date">
                    {"Last updated: "}<em>{date.to_string()}</em>
                </p>
            }
            <p class="result-line">
                {props.state.summary(props.amount, props.from, props.to)}
            </p>
            <p class="result-value">
                {"Result: "}
                <b>{format!("{} {}", props.state.converted, props.to)}</b>
            </p>
        </div>
    }
}
