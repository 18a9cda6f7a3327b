use gloo_timers::callback::Timeout;
use pedal_generator::animation::Tween;
use pedal_generator::config::FRAME_INTERVAL_MS;
use pedal_generator::utils::{round_to_hundredths, InputError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone, PartialEq)]
pub struct ValidatedInput<T: Clone + PartialEq + 'static> {
    /// The current text content of the input field.
    pub text: String,
    /// The last value that passed validation.
    pub value: T,
    /// An optional error message if the current text failed validation.
    pub error: Option<String>,
    /// Callback for the input's `oninput` event. Updates the text and, when it
    /// validates, the value.
    pub on_text_input: Callback<InputEvent>,
}

/// Custom hook to manage state for a validated input field.
///
/// Invalid text keeps the previous value in effect so the metrics never see it.
#[hook]
pub fn use_validated_input<T>(
    initial_value: T,
    parse_and_validate: fn(&str) -> Result<T, InputError>,
) -> ValidatedInput<T>
where
    T: Clone + PartialEq + std::fmt::Display + 'static,
{
    let value_handle: UseStateHandle<T> = use_state(|| initial_value.clone());
    let text_handle: UseStateHandle<String> = use_state(|| initial_value.to_string());
    let error_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let value_setter = value_handle.clone();
        let text_setter = text_handle.clone();
        let error_setter = error_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            match parse_and_validate(&text) {
                Ok(parsed) => {
                    value_setter.set(parsed);
                    error_setter.set(None);
                }
                Err(err) => {
                    error_setter.set(Some(err.to_string()));
                }
            }
            text_setter.set(text);
        })
    };

    ValidatedInput {
        text: (*text_handle).clone(),
        value: (*value_handle).clone(),
        error: (*error_handle).clone(),
        on_text_input,
    }
}

/// Milliseconds from the page's high resolution clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Smoothly animate a displayed number towards `target`.
///
/// Starts from 0 on mount. A new target restarts the tween from whatever is
/// currently shown; the pending frame of the old one is cancelled.
#[hook]
pub fn use_animated_number(target: f64) -> f64 {
    let tween = use_mut_ref(|| Tween::settled(0.0));
    let frame = use_state(|| 0u64);

    {
        let tween = tween.clone();
        use_effect_with(target, move |&target| {
            tween.borrow_mut().retarget(target, now_ms());
        });
    }

    let shown = tween.borrow().value_at(now_ms());

    {
        let tween = tween.clone();
        let frame = frame.clone();
        use_effect_with((target, *frame), move |_| {
            // Runs after the retarget effect, so a new target always gets a frame
            let pending = tween.borrow().needs_frame(shown).then(|| {
                Timeout::new(FRAME_INTERVAL_MS, move || frame.set(*frame + 1))
            });
            move || drop(pending)
        });
    }

    round_to_hundredths(shown)
}
