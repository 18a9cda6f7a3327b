//! Search and social metadata: `<head>` tags, schema.org JSON-LD, the web app
//! manifest and the social preview image.
//!
//! Everything here except [`install_head_metadata`] is pure so the same
//! content can be written to static files by the `seo_assets` binary.

use crate::config::{APP_NAME, APP_SHORT_NAME, SITE_URL};
use log::{debug, warn};
use serde::Serialize;
use serde_json::json;

pub const PAGE_TITLE: &str = "Pedal Generator Simulator - Energy & Calorie Calculator";
pub const PAGE_DESCRIPTION: &str = "Interactive pedal-powered generator simulator. Calculate energy output, battery restoration, calories burned, and power output. Real-time calculations with beautiful animations.";
pub const SHORT_DESCRIPTION: &str = "Interactive pedal-powered generator simulator. Calculate energy output, battery restoration, and calories burned.";
pub const KEYWORDS: [&str; 8] = [
    "pedal generator",
    "energy calculator",
    "calorie calculator",
    "exercise simulator",
    "power output",
    "fitness calculator",
    "energy conversion",
    "pedal power",
];
pub const AUTHOR: &str = "Pedal Generator Team";
pub const ROBOTS: &str =
    "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";

pub const OG_IMAGE_PATH: &str = "/og-image.svg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const MANIFEST_PATH: &str = "/manifest.webmanifest";

const FEATURES: [&str; 6] = [
    "Real-time energy calculations",
    "Battery capacity restoration calculator",
    "Calorie burn estimation",
    "Power output calculation",
    "Multi-language support",
    "Dark mode support",
];

/// A single `<meta>` or `<link>` element in the document head.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadTag {
    /// `<meta {attr}="{key}" content="{content}">`, `attr` being `name` or `property`.
    Meta {
        attr: &'static str,
        key: &'static str,
        content: String,
    },
    Link { rel: &'static str, href: String },
}

impl HeadTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: "name",
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: "property",
            key,
            content: content.into(),
        }
    }

    /// CSS selector matching an existing element for this tag.
    pub fn selector(&self) -> String {
        match self {
            HeadTag::Meta { attr, key, .. } => format!("meta[{}=\"{}\"]", attr, key),
            HeadTag::Link { rel, .. } => format!("link[rel=\"{}\"]", rel),
        }
    }
}

fn absolute(path: &str) -> String {
    format!("{}{}", SITE_URL, path)
}

/// Tags describing the page for search engines and link previews.
pub fn head_tags() -> Vec<HeadTag> {
    let image = absolute(OG_IMAGE_PATH);
    vec![
        HeadTag::name("description", PAGE_DESCRIPTION),
        HeadTag::name("keywords", KEYWORDS.join(", ")),
        HeadTag::name("author", AUTHOR),
        HeadTag::name("creator", AUTHOR),
        HeadTag::name("publisher", "Pedal Generator"),
        HeadTag::name("robots", ROBOTS),
        HeadTag::name("googlebot", ROBOTS),
        HeadTag::property("og:type", "website"),
        HeadTag::property("og:locale", "en_US"),
        HeadTag::property("og:url", SITE_URL),
        HeadTag::property("og:title", PAGE_TITLE),
        HeadTag::property(
            "og:description",
            "Interactive pedal-powered generator simulator. Calculate energy output, battery restoration, and calories burned in real-time.",
        ),
        HeadTag::property("og:site_name", APP_NAME),
        HeadTag::property("og:image", image.clone()),
        HeadTag::property("og:image:width", OG_IMAGE_WIDTH.to_string()),
        HeadTag::property("og:image:height", OG_IMAGE_HEIGHT.to_string()),
        HeadTag::property("og:image:alt", APP_NAME),
        HeadTag::name("twitter:card", "summary_large_image"),
        HeadTag::name("twitter:title", PAGE_TITLE),
        HeadTag::name("twitter:description", SHORT_DESCRIPTION),
        HeadTag::name("twitter:image", image),
        HeadTag::Link {
            rel: "canonical",
            href: SITE_URL.to_string(),
        },
        HeadTag::Link {
            rel: "manifest",
            href: MANIFEST_PATH.to_string(),
        },
    ]
}

/// schema.org description of the application.
pub fn json_ld() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": APP_NAME,
        "description": "Interactive pedal-powered generator simulator that calculates energy output, battery restoration, calories burned, and power output based on user inputs.",
        "url": SITE_URL,
        "applicationCategory": "UtilityApplication",
        "operatingSystem": "Any",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
        },
        "featureList": FEATURES,
        "screenshot": absolute(OG_IMAGE_PATH),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Installable web app manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

pub fn manifest() -> WebManifest {
    WebManifest {
        name: APP_NAME,
        short_name: APP_SHORT_NAME,
        description: SHORT_DESCRIPTION,
        start_url: "/",
        display: "standalone",
        background_color: "#ffffff",
        theme_color: "#000000",
        icons: vec![ManifestIcon {
            src: "/favicon.ico",
            sizes: "any",
            mime_type: "image/x-icon",
        }],
    }
}

/// 1200×630 social preview card.
pub fn og_image_svg() -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="0" y2="1">
      <stop offset="0" stop-color="#f9fafb"/>
      <stop offset="1" stop-color="#e5e7eb"/>
    </linearGradient>
    <linearGradient id="title" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0" stop-color="#3b82f6"/>
      <stop offset="1" stop-color="#8b5cf6"/>
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#bg)"/>
  <text x="50%" y="{title_y}" text-anchor="middle" font-family="system-ui, sans-serif" font-size="72" font-weight="bold" fill="url(#title)">⚡ Pedal Generator</text>
  <text x="50%" y="{tagline_y}" text-anchor="middle" font-family="system-ui, sans-serif" font-size="32" fill="#4b5563">Calculate Energy, Calories &amp; Power Output</text>
</svg>
"##,
        w = OG_IMAGE_WIDTH,
        h = OG_IMAGE_HEIGHT,
        title_y = OG_IMAGE_HEIGHT / 2 - 10,
        tagline_y = OG_IMAGE_HEIGHT / 2 + 50,
    )
}

/// Write title, meta/link tags and the JSON-LD script into `<head>`.
///
/// Existing elements with the same key are updated in place, so calling this
/// twice leaves one copy of each tag.
pub fn install_head_metadata() {
    let document = gloo_utils::document();
    document.set_title(PAGE_TITLE);
    let head = gloo_utils::head();

    let mut written = 0usize;
    for tag in head_tags() {
        match upsert(&document, &head, &tag) {
            Ok(()) => written += 1,
            Err(e) => warn!("Failed to write {}: {:?}", tag.selector(), e),
        }
    }

    let script = r#"script[type="application/ld+json"]"#;
    let result = find_or_create(&document, &head, script, "script").and_then(|el| {
        el.set_attribute("type", "application/ld+json")?;
        el.set_text_content(Some(&json_ld().to_string()));
        Ok(())
    });
    if let Err(e) = result {
        warn!("Failed to write JSON-LD: {:?}", e);
    }
    debug!("Installed {} head tags", written);
}

fn upsert(
    document: &web_sys::Document,
    head: &web_sys::HtmlHeadElement,
    tag: &HeadTag,
) -> Result<(), wasm_bindgen::JsValue> {
    match tag {
        HeadTag::Meta { attr, key, content } => {
            let el = find_or_create(document, head, &tag.selector(), "meta")?;
            el.set_attribute(attr, key)?;
            el.set_attribute("content", content)
        }
        HeadTag::Link { rel, href } => {
            let el = find_or_create(document, head, &tag.selector(), "link")?;
            el.set_attribute("rel", rel)?;
            el.set_attribute("href", href)
        }
    }
}

fn find_or_create(
    document: &web_sys::Document,
    head: &web_sys::HtmlHeadElement,
    selector: &str,
    element: &str,
) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    if let Some(existing) = document.query_selector(selector)? {
        return Ok(existing);
    }
    let el = document.create_element(element)?;
    head.append_child(&el)?;
    Ok(el)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_tags_have_unique_selectors() {
        let tags = head_tags();
        let selectors: std::collections::HashSet<_> = tags.iter().map(|t| t.selector()).collect();
        assert_eq!(selectors.len(), tags.len());
    }

    #[test]
    fn social_image_is_absolute() {
        let image = head_tags()
            .into_iter()
            .find_map(|t| match t {
                HeadTag::Meta {
                    key: "og:image",
                    content,
                    ..
                } => Some(content),
                _ => None,
            })
            .unwrap();
        assert_eq!(image, "https://pedal-generator.vercel.app/og-image.svg");
    }

    #[test]
    fn json_ld_describes_a_free_web_application() {
        let ld = json_ld();
        assert_eq!(ld["@type"], "WebApplication");
        assert_eq!(ld["name"], APP_NAME);
        assert_eq!(ld["offers"]["price"], "0");
        assert_eq!(ld["featureList"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn manifest_serializes_icon_type_key() {
        let value = serde_json::to_value(manifest()).unwrap();
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["short_name"], "Pedal Gen");
        assert_eq!(value["icons"][0]["type"], "image/x-icon");
    }

    #[test]
    fn og_image_has_card_dimensions_and_escaped_text() {
        let svg = og_image_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="1200""#));
        assert!(svg.contains(r#"height="630""#));
        assert!(svg.contains("Calories &amp; Power"));
    }
}
