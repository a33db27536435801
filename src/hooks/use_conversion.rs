use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::amount::AmountInput;
use crate::models::currency::Currency;
use crate::services::api;
use crate::utils::cancel::CancelToken;

/// Result side of the form state, driven by [`ConversionAction`]s.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ConversionState {
    /// Converted value shown in the result line.
    pub converted: f64,
    /// Publication date of the rate backing `converted`, if known.
    pub date: Option<NaiveDate>,
    /// Validation or network failure text; takes display priority over the result.
    pub error: Option<String>,
    /// True while a conversion request is outstanding.
    pub loading: bool,
}

impl ConversionState {
    /// Formatted result line, e.g. `100 EUR = 108.5 USD`.
    pub fn summary(&self, amount: f64, from: Currency, to: Currency) -> String {
        format!("{amount} {from} = {} {to}", self.converted)
    }
}

/// State transitions for one conversion request lifecycle, plus the
/// validation outcomes that share the same error slot.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversionAction {
    /// Source and target currency match; echo the amount without a request.
    Echoed(f64),
    /// A request was issued for the current inputs.
    Started,
    /// The request resolved with a converted value and rate date.
    Succeeded {
        converted: f64,
        date: Option<NaiveDate>,
    },
    /// The request failed; the previous result is kept.
    Failed(String),
    /// A superseded request landed; only the in-flight flag is cleared.
    Cancelled,
    /// The amount input was rejected by validation.
    InputRejected(String),
    /// The amount input was accepted; any stale validation error is dropped.
    InputAccepted,
}

impl Reducible for ConversionState {
    type Action = ConversionAction;

    fn reduce(self: Rc<Self>, action: ConversionAction) -> Rc<Self> {
        let next = match action {
            ConversionAction::Echoed(amount) => Self {
                converted: amount,
                ..(*self).clone()
            },
            ConversionAction::Started => Self {
                error: None,
                loading: true,
                ..(*self).clone()
            },
            ConversionAction::Succeeded { converted, date } => Self {
                converted,
                date,
                loading: false,
                ..(*self).clone()
            },
            ConversionAction::Failed(message) => Self {
                error: Some(message),
                loading: false,
                ..(*self).clone()
            },
            ConversionAction::Cancelled => Self {
                loading: false,
                ..(*self).clone()
            },
            ConversionAction::InputRejected(message) => Self {
                error: Some(message),
                ..(*self).clone()
            },
            ConversionAction::InputAccepted => Self {
                error: None,
                ..(*self).clone()
            },
        };

        Rc::new(next)
    }
}

/// Handle returned by [`use_conversion`].
#[derive(Clone, PartialEq)]
pub struct ConversionHandle {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub state: ConversionState,
    pub on_amount_input: Callback<String>,
    pub set_from: Callback<Currency>,
    pub set_to: Callback<Currency>,
}

/// Form state for the conversion form: the three user inputs plus the
/// fetch-driven result, kept in sync by re-running the rate lookup whenever
/// an input changes. An input change that lands while a request is in flight
/// supersedes it; the stale result is dropped when it eventually arrives.
#[hook]
pub fn use_conversion() -> ConversionHandle {
    let amount = use_state(|| Config::DEFAULT_AMOUNT);
    let from = use_state(|| Config::DEFAULT_FROM);
    let to = use_state(|| Config::DEFAULT_TO);
    let state = use_reducer(ConversionState::default);

    {
        let state = state.clone();

        use_effect_with((*amount, *from, *to), move |(amount, from, to)| {
            let token = CancelToken::new();

            if from == to {
                // Identity conversion, no request needed.
                state.dispatch(ConversionAction::Echoed(*amount));
            } else if *amount > 0.0 {
                state.dispatch(ConversionAction::Started);

                let (amount, from, to) = (*amount, *from, *to);
                let state = state.clone();
                let request = token.clone();

                spawn_local(async move {
                    let outcome = api::convert(amount, from, to).await;

                    if request.is_cancelled() {
                        gloo::console::debug!("conversion superseded, dropping result");
                        state.dispatch(ConversionAction::Cancelled);
                        return;
                    }

                    match outcome {
                        Ok(conversion) => state.dispatch(ConversionAction::Succeeded {
                            converted: conversion.value,
                            date: conversion.date,
                        }),
                        Err(e) => {
                            gloo::console::warn!(format!("conversion failed: {e}"));
                            state.dispatch(ConversionAction::Failed(e.to_string()));
                        }
                    }
                });
            }

            move || token.cancel()
        });
    }

    let on_amount_input = {
        let amount = amount.clone();
        let state = state.clone();

        Callback::from(move |raw: String| {
            let parsed = AmountInput::parse(&raw);

            match parsed.message() {
                None => state.dispatch(ConversionAction::InputAccepted),
                Some(message) => {
                    state.dispatch(ConversionAction::InputRejected(message.to_string()));
                }
            }

            match parsed {
                AmountInput::Valid(value) => amount.set(value),
                AmountInput::Zero => amount.set(0.0),
                AmountInput::Negative | AmountInput::Invalid => {}
            }
        })
    };

    let set_from = {
        let from = from.clone();
        Callback::from(move |currency| from.set(currency))
    };

    let set_to = {
        let to = to.clone();
        Callback::from(move |currency| to.set(currency))
    };

    ConversionHandle {
        amount: *amount,
        from: *from,
        to: *to,
        state: (*state).clone(),
        on_amount_input,
        set_from,
        set_to,
    }
}
