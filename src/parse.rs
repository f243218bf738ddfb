//! Minimum-age extraction from the scheduling page markup.

use log::error;
use regex::Regex;
use scraper::{Html, Selector};

/// The exact sentence the portal publishes the age in, anchored at the start
/// of the heading text. The trailing "(a)" is optional.
const AGE_SENTENCE: &str =
    r"^Tem (?P<age>[0-9]{1,2}) ou mais anos e ainda não foi vacinado(\(a\))?";

/// Parses the page markup (tolerant of malformed HTML) and pulls the minimum
/// age out of the eligibility sentence. Each failure point logs its own
/// diagnostic and yields `None`: an upstream wording or layout change
/// degrades to "no result" rather than a crash.
#[tracing::instrument(skip(raw_html))]
pub fn parse_minimum_age(raw_html: &str) -> Option<u32> {
    let document = Html::parse_document(raw_html);

    let pedido_selector = Selector::parse("div#pedido_content.single_content").ok()?;
    let Some(pedido_node) = document.select(&pedido_selector).next() else {
        error!("Could not find `pedido_node` in page");
        return None;
    };

    let sentence_selector = Selector::parse("h3.has-text-color").ok()?;
    let Some(sentence_node) = pedido_node.select(&sentence_selector).next() else {
        error!("Could not find `sentence_node` in page");
        return None;
    };

    let text: String = sentence_node.text().collect();
    extract_age(&text)
}

/// Matches the fixed sentence pattern and returns the captured age.
pub fn extract_age(text: &str) -> Option<u32> {
    let regex = Regex::new(AGE_SENTENCE).ok()?;
    let Some(captures) = regex.captures(text) else {
        error!("Regex failed to match age");
        return None;
    };

    captures.name("age")?.as_str().parse().ok()
}
