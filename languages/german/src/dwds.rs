//! DWDS, the "Digitales Wörterbuch der deutschen Sprache".
//!
//! Lookups go through the `?q=` query endpoint with the raw word, so no
//! transliteration is needed and there is no search fallback.

use std::sync::{Arc, LazyLock};

use alman_core::dom::{Document, Node, clean_text};
use alman_core::{Entry, LookupError, OnlineDictionary, PageFetcher, ParseError};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Url;
use tokio_util::sync::CancellationToken;

static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://www.dwds.de/").expect("valid DWDS base url"));

/// Banner text DWDS shows when a word has no article
static NOT_PRESENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?smi)nicht.+vorhanden").expect("valid banner pattern"));

const EXAMPLES: &str = ".dwdswb-kompetenzbeispiel, .dwdswb-beleg .dwdswb-belegtext";

#[derive(Clone)]
pub struct Dwds {
    fetcher: Arc<dyn PageFetcher>,
}

impl Dwds {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn query_url(word: &str) -> String {
        let mut url = BASE_URL.clone();
        url.query_pairs_mut().append_pair("q", word);
        url.into()
    }

    async fn find_using_query(
        &self,
        word: &str,
        cancel: &CancellationToken,
    ) -> Result<Entry, LookupError> {
        let url = Self::query_url(word);
        let html = self.fetcher.fetch_html(&url, cancel).await?;

        let entry = parse_entry(&html)?;
        if entry.word.is_empty() {
            tracing::debug!("no headword on {}", url);
            return Err(LookupError::NotFound);
        }

        Ok(entry)
    }
}

#[async_trait]
impl OnlineDictionary for Dwds {
    fn name(&self) -> &'static str {
        "dwds"
    }

    async fn find(&self, word: &str, cancel: &CancellationToken) -> Result<Entry, LookupError> {
        tracing::debug!("searching dwds for '{}'", word);
        self.find_using_query(word, cancel).await
    }
}

/// Extract an entry from a DWDS article page.
///
/// A "not available" banner wins over any article markup on the page.
pub fn parse_entry(html: &str) -> Result<Entry, LookupError> {
    let mut doc = Document::parse(html)?;

    if is_not_present(&doc)? {
        return Err(LookupError::NotFound);
    }

    // Source citations would otherwise leak into definitions and examples
    doc.remove(".dwdswb-fundstelle")?;

    let word = doc
        .first(".dwdswb-ft-lemmaansatz")?
        .map(|lemma| clean_text(&lemma.text()))
        .unwrap_or_default();
    let mut entry = Entry::new(word);

    let extractors: [fn(&Node<'_>) -> Result<String, ParseError>; 2] =
        [definition_text, cross_reference];

    for reading in doc.select(".dwdswb-lesart-def")? {
        let mut examples = Vec::new();
        for block in reading.next_siblings(".dwdswb-verwendungsbeispiele")? {
            examples.extend(texts(&block.select(EXAMPLES)?));
        }

        let mut definition = String::new();
        for extract in extractors {
            definition = extract(&reading)?;
            if !definition.is_empty() {
                break;
            }
        }

        entry.push_definition(definition, examples);
    }

    entry.usages = texts(&doc.select(
        r#"[data-content-piece="Verwendungsbeispiele"] .dwdswb-belegtext"#,
    )?);

    Ok(entry)
}

fn is_not_present(doc: &Document) -> Result<bool, ParseError> {
    let banner: String = doc.select(".bg-danger")?.iter().map(|n| n.text()).collect();
    Ok(NOT_PRESENT.is_match(banner.trim()))
}

/// All definition spans of a reading, joined with `"; "`
fn definition_text(reading: &Node<'_>) -> Result<String, ParseError> {
    Ok(texts(&reading.select(".dwdswb-definition")?).join("; "))
}

/// `"<label> (<target>)"` for readings that only point at another article
fn cross_reference(reading: &Node<'_>) -> Result<String, ParseError> {
    let Some((reference, content)) = reading
        .select(".dwdswb-verweis")?
        .into_iter()
        .find_map(|r| r.attr("data-content").map(|content| (r, content)))
    else {
        return Ok(String::new());
    };

    let label = clean_text(&reference.text());
    let target = clean_text(&Document::parse_fragment(content).text());
    if label.is_empty() && target.is_empty() {
        return Ok(String::new());
    }

    Ok(format!("{label} ({target})"))
}

fn texts(nodes: &[Node<'_>]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| clean_text(&node.text()))
        .filter(|text| !text.is_empty())
        .collect()
}
