//! Interface languages and their translated strings.

/// Every user-visible string of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub inputs_heading: &'static str,
    pub rpm_label: &'static str,
    pub weight_label: &'static str,
    pub resistance_label: &'static str,
    pub current_level: &'static str,
    pub duration_label: &'static str,
    pub duration_placeholder: &'static str,
    pub battery_label: &'static str,
    pub metrics_heading: &'static str,
    pub energy_title: &'static str,
    pub battery_title: &'static str,
    pub capacity_caption: &'static str,
    pub calories_title: &'static str,
    pub power_title: &'static str,
    pub duration_caption: &'static str,
    pub footer: &'static str,
    pub tip_rpm: &'static str,
    pub tip_weight: &'static str,
    pub tip_resistance: &'static str,
    pub tip_duration: &'static str,
    pub tip_battery: &'static str,
    pub tip_energy: &'static str,
    pub tip_battery_pct: &'static str,
    pub tip_calories: &'static str,
    pub tip_power: &'static str,
    pub more_info: &'static str,
    pub select_language: &'static str,
    pub switch_to_dark: &'static str,
    pub switch_to_light: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
    ];

    /// ISO 639-1 code, also used for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Japanese => "ja",
        }
    }

    /// Name of the language in that language.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Japanese => "日本語",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            Language::Spanish => "🇪🇸",
            Language::French => "🇫🇷",
            Language::German => "🇩🇪",
            Language::Japanese => "🇯🇵",
        }
    }

    /// Resolve a BCP 47 tag such as `es-MX` by its primary subtag.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Language::ALL.into_iter().find(|l| l.code() == primary)
    }

    /// Browser preference, or English when it is unavailable or unsupported.
    pub fn detect() -> Language {
        let tag = web_sys::window().and_then(|w| w.navigator().language());
        match tag.as_deref().and_then(Language::from_tag) {
            Some(lang) => lang,
            None => {
                log::debug!("No supported browser language in {:?}, using English", tag);
                Language::default()
            }
        }
    }

    pub fn strings(self) -> &'static Translations {
        match self {
            Language::English => &EN,
            Language::Spanish => &ES,
            Language::French => &FR,
            Language::German => &DE,
            Language::Japanese => &JA,
        }
    }
}

static EN: Translations = Translations {
    title: "Pedal Generator Simulator",
    subtitle: "Adjust inputs to see real-time energy, battery, and calorie metrics with smooth animations.",
    inputs_heading: "Inputs",
    rpm_label: "Pedal cadence (RPM)",
    weight_label: "User weight (kg)",
    resistance_label: "Resistance level (1–10)",
    current_level: "Current:",
    duration_label: "Duration",
    duration_placeholder: "600, 10m, 10:00",
    battery_label: "Battery capacity (Wh)",
    metrics_heading: "Real-time Metrics",
    energy_title: "Energy",
    battery_title: "Battery Restored",
    capacity_caption: "capacity:",
    calories_title: "Calories Burned",
    power_title: "Avg Power",
    duration_caption: "duration:",
    footer: "Calculations use simplified physical and metabolic models. Adjust inputs to explore scenarios; values animate smoothly on change.",
    tip_rpm: "How many full pedal revolutions you make per minute.",
    tip_weight: "Your body weight, used for the calorie estimate.",
    tip_resistance: "Higher levels add 2 N·m of crank torque per step, from 3 N·m up to 21 N·m.",
    tip_duration: "How long you pedal. Accepts seconds (600), minutes (10m) or mm:ss (10:00).",
    tip_battery: "Capacity of the battery you want to charge, in watt-hours.",
    tip_energy: "Mechanical work at the crank: torque × rotation angle.",
    tip_battery_pct: "Share of the battery capacity this energy would restore, capped at 100%.",
    tip_calories: "MET-based estimate: MET × weight × hours.",
    tip_power: "Average mechanical power over the session: energy ÷ duration.",
    more_info: "More information",
    select_language: "Select language",
    switch_to_dark: "Switch to dark mode",
    switch_to_light: "Switch to light mode",
};

static ES: Translations = Translations {
    title: "Simulador de Generador a Pedal",
    subtitle: "Ajusta los valores para ver en tiempo real la energía, la batería y las calorías con animaciones suaves.",
    inputs_heading: "Entradas",
    rpm_label: "Cadencia de pedaleo (RPM)",
    weight_label: "Peso del usuario (kg)",
    resistance_label: "Nivel de resistencia (1–10)",
    current_level: "Actual:",
    duration_label: "Duración",
    duration_placeholder: "600, 10m, 10:00",
    battery_label: "Capacidad de la batería (Wh)",
    metrics_heading: "Métricas en tiempo real",
    energy_title: "Energía",
    battery_title: "Batería recuperada",
    capacity_caption: "capacidad:",
    calories_title: "Calorías quemadas",
    power_title: "Potencia media",
    duration_caption: "duración:",
    footer: "Los cálculos usan modelos físicos y metabólicos simplificados. Ajusta los valores para explorar escenarios; las cifras se animan al cambiar.",
    tip_rpm: "Cuántas vueltas completas de pedal das por minuto.",
    tip_weight: "Tu peso corporal, usado para estimar las calorías.",
    tip_resistance: "Cada nivel añade 2 N·m de par en la biela, de 3 N·m hasta 21 N·m.",
    tip_duration: "Cuánto tiempo pedaleas. Acepta segundos (600), minutos (10m) o mm:ss (10:00).",
    tip_battery: "Capacidad de la batería que quieres cargar, en vatios-hora.",
    tip_energy: "Trabajo mecánico en la biela: par × ángulo de giro.",
    tip_battery_pct: "Parte de la capacidad que esta energía recuperaría, con un máximo del 100%.",
    tip_calories: "Estimación basada en MET: MET × peso × horas.",
    tip_power: "Potencia mecánica media de la sesión: energía ÷ duración.",
    more_info: "Más información",
    select_language: "Seleccionar idioma",
    switch_to_dark: "Cambiar a modo oscuro",
    switch_to_light: "Cambiar a modo claro",
};

static FR: Translations = Translations {
    title: "Simulateur de Générateur à Pédales",
    subtitle: "Modifiez les valeurs pour voir en temps réel l'énergie, la batterie et les calories, avec des animations fluides.",
    inputs_heading: "Paramètres",
    rpm_label: "Cadence de pédalage (tr/min)",
    weight_label: "Poids de l'utilisateur (kg)",
    resistance_label: "Niveau de résistance (1–10)",
    current_level: "Actuel :",
    duration_label: "Durée",
    duration_placeholder: "600, 10m, 10:00",
    battery_label: "Capacité de la batterie (Wh)",
    metrics_heading: "Mesures en temps réel",
    energy_title: "Énergie",
    battery_title: "Batterie rechargée",
    capacity_caption: "capacité :",
    calories_title: "Calories brûlées",
    power_title: "Puissance moyenne",
    duration_caption: "durée :",
    footer: "Les calculs reposent sur des modèles physiques et métaboliques simplifiés. Modifiez les valeurs pour explorer des scénarios ; les chiffres s'animent à chaque changement.",
    tip_rpm: "Nombre de tours de pédalier complets par minute.",
    tip_weight: "Votre poids, utilisé pour estimer les calories.",
    tip_resistance: "Chaque niveau ajoute 2 N·m de couple au pédalier, de 3 N·m à 21 N·m.",
    tip_duration: "Durée de pédalage. Accepte des secondes (600), des minutes (10m) ou mm:ss (10:00).",
    tip_battery: "Capacité de la batterie à recharger, en wattheures.",
    tip_energy: "Travail mécanique au pédalier : couple × angle de rotation.",
    tip_battery_pct: "Part de la capacité que cette énergie rechargerait, plafonnée à 100 %.",
    tip_calories: "Estimation basée sur le MET : MET × poids × heures.",
    tip_power: "Puissance mécanique moyenne sur la séance : énergie ÷ durée.",
    more_info: "Plus d'informations",
    select_language: "Choisir la langue",
    switch_to_dark: "Passer en mode sombre",
    switch_to_light: "Passer en mode clair",
};

static DE: Translations = Translations {
    title: "Pedalgenerator-Simulator",
    subtitle: "Passe die Eingaben an und sieh Energie, Akkustand und Kalorien in Echtzeit mit sanften Animationen.",
    inputs_heading: "Eingaben",
    rpm_label: "Trittfrequenz (U/min)",
    weight_label: "Körpergewicht (kg)",
    resistance_label: "Widerstandsstufe (1–10)",
    current_level: "Aktuell:",
    duration_label: "Dauer",
    duration_placeholder: "600, 10m, 10:00",
    battery_label: "Akkukapazität (Wh)",
    metrics_heading: "Echtzeit-Werte",
    energy_title: "Energie",
    battery_title: "Akku geladen",
    capacity_caption: "Kapazität:",
    calories_title: "Verbrannte Kalorien",
    power_title: "Ø Leistung",
    duration_caption: "Dauer:",
    footer: "Die Berechnungen beruhen auf vereinfachten physikalischen und metabolischen Modellen. Passe die Eingaben an, um Szenarien zu erkunden; Werte werden bei jeder Änderung animiert.",
    tip_rpm: "Wie viele volle Kurbelumdrehungen du pro Minute machst.",
    tip_weight: "Dein Körpergewicht, für die Kalorienschätzung.",
    tip_resistance: "Jede Stufe erhöht das Kurbeldrehmoment um 2 N·m, von 3 N·m bis 21 N·m.",
    tip_duration: "Wie lange du trittst. Erlaubt Sekunden (600), Minuten (10m) oder mm:ss (10:00).",
    tip_battery: "Kapazität des zu ladenden Akkus in Wattstunden.",
    tip_energy: "Mechanische Arbeit an der Kurbel: Drehmoment × Drehwinkel.",
    tip_battery_pct: "Anteil der Akkukapazität, den diese Energie laden würde, höchstens 100 %.",
    tip_calories: "MET-basierte Schätzung: MET × Gewicht × Stunden.",
    tip_power: "Mittlere mechanische Leistung der Einheit: Energie ÷ Dauer.",
    more_info: "Weitere Informationen",
    select_language: "Sprache wählen",
    switch_to_dark: "Dunkles Design aktivieren",
    switch_to_light: "Helles Design aktivieren",
};

static JA: Translations = Translations {
    title: "ペダル発電シミュレーター",
    subtitle: "入力を調整すると、エネルギー・バッテリー・消費カロリーがアニメーション付きでリアルタイムに表示されます。",
    inputs_heading: "入力",
    rpm_label: "ペダル回転数（RPM）",
    weight_label: "体重（kg）",
    resistance_label: "負荷レベル（1–10）",
    current_level: "現在:",
    duration_label: "時間",
    duration_placeholder: "600, 10m, 10:00",
    battery_label: "バッテリー容量（Wh）",
    metrics_heading: "リアルタイム指標",
    energy_title: "エネルギー",
    battery_title: "バッテリー充電量",
    capacity_caption: "容量:",
    calories_title: "消費カロリー",
    power_title: "平均出力",
    duration_caption: "時間:",
    footer: "計算は簡略化した物理・代謝モデルに基づきます。入力を変えてさまざまな条件を試してください。数値は変更時になめらかに切り替わります。",
    tip_rpm: "1分あたりのペダルの回転数です。",
    tip_weight: "消費カロリーの推定に使う体重です。",
    tip_resistance: "レベルが1上がるごとにクランクトルクが2 N·m増えます（3〜21 N·m）。",
    tip_duration: "ペダルをこぐ時間です。秒（600）、分（10m）、mm:ss（10:00）で入力できます。",
    tip_battery: "充電したいバッテリーの容量（ワット時）です。",
    tip_energy: "クランクでの機械的仕事：トルク × 回転角。",
    tip_battery_pct: "このエネルギーで充電できる容量の割合（最大100%）。",
    tip_calories: "METに基づく推定：MET × 体重 × 時間。",
    tip_power: "セッション全体の平均機械出力：エネルギー ÷ 時間。",
    more_info: "詳細情報",
    select_language: "言語を選択",
    switch_to_dark: "ダークモードに切り替え",
    switch_to_light: "ライトモードに切り替え",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_by_primary_subtag() {
        assert_eq!(Language::from_tag("es-MX"), Some(Language::Spanish));
        assert_eq!(Language::from_tag("DE"), Some(Language::German));
        assert_eq!(Language::from_tag("fr_CA"), Some(Language::French));
        assert_eq!(Language::from_tag("ja"), Some(Language::Japanese));
        assert_eq!(Language::from_tag("pt-BR"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn codes_round_trip_through_from_tag() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.code()), Some(lang));
        }
    }

    #[test]
    fn every_language_has_its_own_title() {
        let titles: std::collections::HashSet<_> =
            Language::ALL.iter().map(|l| l.strings().title).collect();
        assert_eq!(titles.len(), Language::ALL.len());
    }

    #[test]
    fn no_translation_is_blank() {
        for lang in Language::ALL {
            let t = lang.strings();
            for s in [
                t.title,
                t.subtitle,
                t.inputs_heading,
                t.rpm_label,
                t.weight_label,
                t.resistance_label,
                t.current_level,
                t.duration_label,
                t.battery_label,
                t.metrics_heading,
                t.energy_title,
                t.battery_title,
                t.calories_title,
                t.power_title,
                t.footer,
                t.tip_energy,
                t.tip_calories,
                t.more_info,
                t.switch_to_dark,
                t.switch_to_light,
            ] {
                assert!(!s.trim().is_empty(), "blank string for {}", lang.code());
            }
        }
    }
}
