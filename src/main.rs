//! Main module for the Pedal Generator Simulator using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use log::{info, warn};
use pedal_generator::{
    compute,
    config::*,
    i18n::Language,
    logging, seo,
    theme::Theme,
    utils::{
        format_fixed, validate_battery_capacity, validate_duration, validate_resistance,
        validate_rpm, validate_weight,
    },
    PedalInput,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{
    InfoTooltip, LanguageSelector, MetricCard, NumberField, ResistanceSlider, ThemeToggle,
};
use hooks::{use_animated_number, use_validated_input};

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let language = use_state(Language::detect);
    let theme = use_state(Theme::detect);

    let rpm = use_validated_input(DEFAULT_RPM, validate_rpm);
    let weight = use_validated_input(DEFAULT_WEIGHT_KG, validate_weight);
    let duration = use_validated_input(DEFAULT_DURATION_SEC, validate_duration);
    let battery = use_validated_input(DEFAULT_BATTERY_CAPACITY_WH, validate_battery_capacity);
    let resistance = use_state(|| DEFAULT_RESISTANCE);

    let input = PedalInput {
        rpm: rpm.value,
        duration_sec: duration.value,
        weight_kg: weight.value,
        resistance: *resistance,
        battery_capacity_wh: battery.value,
    };
    let metrics = use_memo(input, compute);

    let anim_wh = use_animated_number(metrics.wh);
    let anim_j = use_animated_number(metrics.work_j);
    let anim_pct = use_animated_number(metrics.battery_pct);
    let anim_kcal = use_animated_number(metrics.kcal);
    let anim_power = use_animated_number(metrics.avg_power_w);

    // Keep the root element's dark class in sync with the selected theme
    use_effect_with(*theme, |theme| {
        theme.apply();
    });

    // Keep <html lang> in sync with the selected language
    use_effect_with(*language, |lang| {
        let root = gloo_utils::document_element();
        if let Err(e) = root.set_attribute("lang", lang.code()) {
            warn!("Failed to set document language: {:?}", e);
        }
    });

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |lang: Language| {
            info!("Language changed to {}", lang.code());
            language.set(lang);
        })
    };

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(theme.toggled()))
    };

    let on_resistance_input = {
        let resistance = resistance.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match validate_resistance(&input.value()) {
                Ok(level) => resistance.set(level),
                Err(err) => warn!("Ignoring resistance input: {}", err),
            }
        })
    };

    let t = language.strings();
    let theme_label = if theme.is_dark() {
        t.switch_to_light
    } else {
        t.switch_to_dark
    };
    let duration_hint = (duration.text.trim() != format!("{}", duration.value))
        .then(|| format!("= {} s", duration.value));

    html! {
        <div class="page">
            <main class="container">
                <header class="page-header">
                    <div>
                        <h1>{ t.title }</h1>
                        <p class="tagline">{ t.subtitle }</p>
                    </div>
                    <div class="header-controls">
                        <LanguageSelector
                            current={*language}
                            on_change={on_language_change}
                            label={t.select_language}
                        />
                        <ThemeToggle theme={*theme} label={theme_label} on_toggle={on_theme_toggle} />
                    </div>
                </header>

                <div class="panels">
                    <section class="panel">
                        <h2>{ t.inputs_heading }</h2>
                        <NumberField
                            id="rpm"
                            label={t.rpm_label}
                            tooltip={t.tip_rpm}
                            more_info={t.more_info}
                            text={rpm.text.clone()}
                            error={rpm.error.clone()}
                            oninput={rpm.on_text_input.clone()}
                            min={Some(AttrValue::from(MIN_RPM.to_string()))}
                            max={Some(AttrValue::from(MAX_RPM.to_string()))}
                        />
                        <NumberField
                            id="weight"
                            label={t.weight_label}
                            tooltip={t.tip_weight}
                            more_info={t.more_info}
                            text={weight.text.clone()}
                            error={weight.error.clone()}
                            oninput={weight.on_text_input.clone()}
                            min={Some(AttrValue::from(MIN_WEIGHT_KG.to_string()))}
                            max={Some(AttrValue::from(MAX_WEIGHT_KG.to_string()))}
                        />
                        <ResistanceSlider
                            value={*resistance}
                            label={t.resistance_label}
                            current_label={t.current_level}
                            tooltip={t.tip_resistance}
                            more_info={t.more_info}
                            oninput={on_resistance_input}
                        />
                        <NumberField
                            id="duration"
                            label={t.duration_label}
                            tooltip={t.tip_duration}
                            more_info={t.more_info}
                            text={duration.text.clone()}
                            error={duration.error.clone()}
                            oninput={duration.on_text_input.clone()}
                            input_type="text"
                            placeholder={Some(AttrValue::from(t.duration_placeholder))}
                            hint={duration_hint}
                        />
                        <NumberField
                            id="battery"
                            label={t.battery_label}
                            tooltip={t.tip_battery}
                            more_info={t.more_info}
                            text={battery.text.clone()}
                            error={battery.error.clone()}
                            oninput={battery.on_text_input.clone()}
                            min={Some(AttrValue::from(MIN_BATTERY_CAPACITY_WH.to_string()))}
                        />
                    </section>

                    <section class="panel">
                        <h2>{ t.metrics_heading }</h2>
                        <div class="metrics-grid">
                            <MetricCard
                                title={t.energy_title}
                                value={format_fixed(anim_wh, 2)}
                                unit="Wh"
                                caption={format!("({} J)", format_fixed(anim_j, 0))}
                                accent="accent-energy"
                                tooltip={t.tip_energy}
                                more_info={t.more_info}
                            />
                            <MetricCard
                                title={t.battery_title}
                                value={format_fixed(anim_pct, 1)}
                                unit="%"
                                caption={format!("{} {} Wh", t.capacity_caption, battery.value)}
                                accent="accent-battery"
                                tooltip={t.tip_battery_pct}
                                more_info={t.more_info}
                            />
                            <MetricCard
                                title={t.calories_title}
                                value={format_fixed(anim_kcal, 1)}
                                unit="kcal"
                                caption={format!("MET≈ {}", format_fixed(metrics.met_value, 1))}
                                accent="accent-calories"
                                tooltip={t.tip_calories}
                                more_info={t.more_info}
                            />
                            <MetricCard
                                title={t.power_title}
                                value={format_fixed(anim_power, 1)}
                                unit="W"
                                caption={format!("{} {}s", t.duration_caption, duration.value)}
                                accent="accent-power"
                                tooltip={t.tip_power}
                                more_info={t.more_info}
                            />
                        </div>
                    </section>
                </div>

                <footer class="page-footer">
                    { t.footer }
                    <InfoTooltip
                        content={format!("τ = {} N·m · {} rot", metrics.torque_nm, metrics.rotations)}
                        label={t.more_info}
                    />
                </footer>
            </main>
        </div>
    }
}

/// Entry point: installs logging and head metadata, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    seo::install_head_metadata();
    info!("Starting {}", APP_NAME);
    yew::Renderer::<App>::new().render();
}
