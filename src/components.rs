//! Yew view components for the simulator page.
//!
//! Everything here renders from props; state lives in `main.rs` and `hooks.rs`.

use pedal_generator::config::{MAX_RESISTANCE, MIN_RESISTANCE};
use pedal_generator::i18n::Language;
use pedal_generator::theme::Theme;
use yew::prelude::*;

/// Small "i" button that reveals a hint on hover, focus or click.
#[derive(Properties, PartialEq)]
pub struct InfoTooltipProps {
    pub content: AttrValue,
    /// Accessible name of the trigger button.
    pub label: AttrValue,
}

#[function_component(InfoTooltip)]
pub fn info_tooltip(props: &InfoTooltipProps) -> Html {
    let open = use_state(|| false);

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let focus = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(true))
    };
    let blur = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(false))
    };
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <span class="tooltip-anchor">
            <button type="button"
                class="info-button"
                aria-label={props.label.clone()}
                aria-expanded={(*open).to_string()}
                onmouseenter={show}
                onmouseleave={hide}
                onfocus={focus}
                onblur={blur}
                onclick={toggle}
            >
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
                    stroke="currentColor" stroke-width="2" stroke-linecap="round"
                    stroke-linejoin="round" width="0.875rem" height="0.875rem">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 16v-4" />
                    <path d="M12 8h.01" />
                </svg>
            </button>
            if *open {
                <span role="tooltip" class="tooltip-content">{ props.content.clone() }</span>
            }
        </span>
    }
}

/// Labelled text/number input with inline validation error.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub tooltip: AttrValue,
    pub more_info: AttrValue,
    pub text: AttrValue,
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
    /// `number` for plain fields, `text` for free-form entries such as durations.
    #[prop_or(AttrValue::Static("number"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Extra line under the field, e.g. the parsed value of a free-form entry.
    #[prop_or_default]
    pub hint: Option<String>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>
                { props.label.clone() }
                <InfoTooltip content={props.tooltip.clone()} label={props.more_info.clone()} />
            </label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                step="any"
                placeholder={props.placeholder.clone()}
                value={props.text.clone()}
                class={classes!(props.error.is_some().then_some("invalid"))}
                oninput={props.oninput.clone()}
            />
            if let Some(ref err) = props.error {
                <div class="input-error">{ err.clone() }</div>
            }
            if let (None, Some(hint)) = (&props.error, &props.hint) {
                <div class="input-hint">{ hint.clone() }</div>
            }
        </div>
    }
}

/// Range slider for the resistance level.
#[derive(Properties, PartialEq)]
pub struct ResistanceSliderProps {
    pub value: u8,
    pub label: AttrValue,
    pub current_label: AttrValue,
    pub tooltip: AttrValue,
    pub more_info: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ResistanceSlider)]
pub fn resistance_slider(props: &ResistanceSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for="resistance">
                { props.label.clone() }
                <InfoTooltip content={props.tooltip.clone()} label={props.more_info.clone()} />
            </label>
            <div class="slider-with-value">
                <input type="range"
                    id="resistance"
                    min={MIN_RESISTANCE.to_string()}
                    max={MAX_RESISTANCE.to_string()}
                    step="1"
                    value={props.value.to_string()}
                    oninput={props.oninput.clone()}
                />
            </div>
            <div class="slider-value">
                { props.current_label.clone() }{ " " }<strong>{ props.value }</strong>
            </div>
        </div>
    }
}

/// One figure of the metrics grid.
#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    pub value: String,
    pub unit: AttrValue,
    pub caption: String,
    /// Colour modifier class, e.g. `accent-energy`.
    pub accent: AttrValue,
    pub tooltip: AttrValue,
    pub more_info: AttrValue,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="metric-card">
            <div class="metric-title">
                { props.title.clone() }
                <InfoTooltip content={props.tooltip.clone()} label={props.more_info.clone()} />
            </div>
            <div class={classes!("metric-value", props.accent.to_string())}>
                <span class="metric-number">{ props.value.clone() }</span>
                <span class="metric-unit">{ props.unit.clone() }</span>
            </div>
            <div class="metric-caption">{ props.caption.clone() }</div>
        </div>
    }
}

/// Dropdown listing every supported language.
#[derive(Properties, PartialEq)]
pub struct LanguageSelectorProps {
    pub current: Language,
    pub on_change: Callback<Language>,
    pub label: AttrValue,
}

#[function_component(LanguageSelector)]
pub fn language_selector(props: &LanguageSelectorProps) -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="language-selector">
            <button type="button"
                class="language-trigger"
                aria-label={props.label.clone()}
                aria-haspopup="listbox"
                aria-expanded={(*open).to_string()}
                onclick={toggle}
            >
                <span class="language-flag">{ props.current.flag() }</span>
                <span class="language-name">{ props.current.name() }</span>
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
                    stroke="currentColor" stroke-width="2" stroke-linecap="round"
                    stroke-linejoin="round" width="1rem" height="1rem">
                    <path d="m6 9 6 6 6-6" />
                </svg>
            </button>
            if *open {
                <ul class="language-menu" role="listbox">
                    { for Language::ALL.iter().map(|&lang| {
                        let selected = lang == props.current;
                        let onclick = {
                            let open = open.clone();
                            let on_change = props.on_change.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_change.emit(lang);
                                open.set(false);
                            })
                        };
                        html! {
                            <li role="option"
                                aria-selected={selected.to_string()}
                                class={classes!("language-option", selected.then_some("selected"))}
                                {onclick}
                            >
                                <span class="language-flag">{ lang.flag() }</span>
                                <span>{ lang.name() }</span>
                                if selected {
                                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
                                        fill="none" stroke="currentColor" stroke-width="2"
                                        stroke-linecap="round" stroke-linejoin="round"
                                        width="1rem" height="1rem" class="language-check">
                                        <path d="M20 6L9 17l-5-5" />
                                    </svg>
                                }
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}

/// Button flipping between the light and dark palette.
#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub label: AttrValue,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <button type="button" class="theme-toggle" aria-label={props.label.clone()} title={props.label.clone()} {onclick}>
            if props.theme.is_dark() {
                // sun
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
                    stroke="currentColor" stroke-width="2" stroke-linecap="round"
                    stroke-linejoin="round" width="1.25rem" height="1.25rem">
                    <circle cx="12" cy="12" r="4" />
                    <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
                </svg>
            } else {
                // moon
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
                    stroke="currentColor" stroke-width="2" stroke-linecap="round"
                    stroke-linejoin="round" width="1.25rem" height="1.25rem">
                    <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
                </svg>
            }
        </button>
    }
}
