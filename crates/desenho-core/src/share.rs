//! Pre-filled share links for a generated drawing.

use serde::Serialize;
use url::form_urlencoded;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const WHATSAPP_SEND: &str = "https://api.whatsapp.com/send";

/// Sentence posted alongside the page link.
pub fn share_text(prompt: &str) -> String {
    format!(
        "Veja a arte bíblica que criei sobre \"{}\" com este incrível gerador de imagens!",
        prompt.trim()
    )
}

/// Percent-encode a query component, spaces as `%20`.
///
/// `byte_serialize` writes spaces as `+` and escapes a literal `+` as `%2B`,
/// so every remaining `+` is a space.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn with_query(base: &str, pairs: &[(&str, &str)]) -> String {
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{query}")
}

/// Share URLs for the supported destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub whatsapp: String,
}

impl ShareLinks {
    /// Links sharing `page_url` with the text built from `prompt`.
    pub fn new(prompt: &str, page_url: &str) -> Self {
        let text = share_text(prompt);
        Self {
            twitter: with_query(TWITTER_INTENT, &[("text", text.as_str()), ("url", page_url)]),
            facebook: with_query(FACEBOOK_SHARER, &[("u", page_url), ("quote", text.as_str())]),
            whatsapp: with_query(
                WHATSAPP_SEND,
                &[("text", format!("{text} {page_url}").as_str())],
            ),
        }
    }
}
