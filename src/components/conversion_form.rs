use yew::prelude::*;

use crate::components::amount_field::AmountField;
use crate::components::currency_selector::CurrencySelector;
use crate::components::result_display::ResultDisplay;
use crate::components::status::Status;
use crate::hooks::use_conversion::use_conversion;

/// Currency conversion form: one amount input, two currency selectors, and
/// the fetched result.
#[function_component(ConversionForm)]
pub fn conversion_form() -> Html {
    let form = use_conversion();

    html! {
        <div class="conversion-form">
            <AmountField
                value={form.amount}
                disabled={form.state.loading}
                on_input={form.on_amount_input.clone()}
            />
            <CurrencySelector
                label="Convert from"
                selected={form.from}
                disabled={form.state.loading}
                on_change={form.set_from.clone()}
            />
            <CurrencySelector
                label="Convert to"
                selected={form.to}
                disabled={form.state.loading}
                on_change={form.set_to.clone()}
            />
            <Status error={form.state.error.clone()} loading={form.state.loading} />
            if !form.state.loading && form.state.error.is_none() {
                <ResultDisplay
                    amount={form.amount}
                    from={form.from}
                    to={form.to}
                    state={form.state.clone()}
                />
            }
        </div>
    }
}
