//! Result block extraction from Bing result page HTML.
//!
//! A result page nests its results as
//! `#b_content > (wrapper) > #b_results > (block)*`. Each block that has an
//! `h2` title and an absolute `http(s)` link becomes one [`SearchResult`];
//! ads, answer cards, pagination rows and redirect links are skipped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::types::{ENGINE, SearchResult};

static RESULTS_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#b_content > * #b_results").expect("valid selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("valid selector"));
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));
static SNIPPET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static SOURCE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".b_tpcn").expect("valid selector"));

/// Parse one result page into records, in document order.
///
/// Returns an empty vector for pages without a results container, which is
/// what a CAPTCHA or block page looks like.
pub fn parse_results_page(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    document
        .select(&RESULTS_CONTAINER)
        .flat_map(|container| container.children().filter_map(ElementRef::wrap))
        .filter_map(extract_block)
        .collect()
}

/// Turn one child of the results container into a record, or `None` when the
/// block lacks a title or link, or the link is not absolute `http(s)`.
pub fn extract_block(block: ElementRef<'_>) -> Option<SearchResult> {
    block.select(&TITLE).next()?;
    let link = block.select(&LINK).next()?;

    let url = link.value().attr("href")?;
    if !url.starts_with("http") {
        return None;
    }

    let description = block
        .select(&SNIPPET)
        .next()
        .map(|p| element_text(&p))
        .unwrap_or_default();
    let source = joined_text(block, &SOURCE);

    Some(SearchResult {
        title: joined_text(block, &TITLE),
        url: url.to_string(),
        description,
        source,
        engine: ENGINE.to_string(),
    })
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of every match of `selector` inside `block`, concatenated and trimmed.
fn joined_text(block: ElementRef<'_>, selector: &Selector) -> String {
    block
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}
