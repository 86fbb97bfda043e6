use std::sync::{Arc, LazyLock};

use alman_core::dom::{Document, Node, clean_text};
use alman_core::lookup;
use alman_core::{Entry, LookupError, OnlineDictionary, PageFetcher, ParseError};
use async_trait::async_trait;
use reqwest::Url;
use tokio_util::sync::CancellationToken;

use crate::normalizer::{Dialect, normalize};

const SITE: &str = "https://www.duden.de";

static BASE_URL: LazyLock<Url> = LazyLock::new(|| Url::parse(SITE).expect("valid Duden base url"));
const ENTRY_PATH: &str = "/rechtschreibung/";

/// Duden online, looked up by URL guess and by site search at the same time
#[derive(Clone)]
pub struct Duden {
    fetcher: Arc<dyn PageFetcher>,
}

impl Duden {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn entry_url(word: &str) -> String {
        format!("{SITE}{ENTRY_PATH}{}", normalize(word, Dialect::Duden))
    }

    pub fn search_url(word: &str) -> String {
        format!(
            "{SITE}/suchen/dudenonline/{}",
            normalize(word, Dialect::Duden)
        )
    }

    /// Fetch the entry page the normalized word should live at
    pub async fn find_using_url(
        &self,
        word: &str,
        cancel: &CancellationToken,
    ) -> Result<Entry, LookupError> {
        let url = Self::entry_url(word);
        let html = self.fetcher.fetch_html(&url, cancel).await?;

        let entry = parse_entry(&html)?;
        if entry.word.is_empty() {
            tracing::debug!("no headword on {}", url);
            return Err(LookupError::NotFound);
        }

        Ok(entry)
    }

    /// Search the site and follow the first result to its entry page
    pub async fn find_using_search(
        &self,
        word: &str,
        cancel: &CancellationToken,
    ) -> Result<Entry, LookupError> {
        let url = Self::search_url(word);
        let html = self.fetcher.fetch_html(&url, cancel).await?;

        let Some(slug) = first_result_slug(&html)? else {
            tracing::debug!("no search results for '{}'", word);
            return Err(LookupError::NotFound);
        };

        tracing::debug!("search resolved '{}' to '{}'", word, slug);
        self.find_using_url(&slug, cancel).await
    }
}

#[async_trait]
impl OnlineDictionary for Duden {
    fn name(&self) -> &'static str {
        "duden"
    }

    async fn find(&self, word: &str, cancel: &CancellationToken) -> Result<Entry, LookupError> {
        tracing::debug!(
            "searching duden for '{}' (normalized '{}')",
            word,
            normalize(word, Dialect::Duden)
        );

        let (direct, direct_word) = (self.clone(), word.to_string());
        let (search, search_word) = (self.clone(), word.to_string());

        lookup::race(
            cancel,
            move |token| async move { direct.find_using_url(&direct_word, &token).await },
            move |token| async move { search.find_using_search(&search_word, &token).await },
        )
        .await
    }
}

/// Slug of the first search result that links to an entry page
fn first_result_slug(html: &str) -> Result<Option<String>, ParseError> {
    let doc = Document::parse(html)?;

    let slug = doc
        .select("a[href*='/rechtschreibung/']")?
        .iter()
        .filter_map(|link| link.attr("href"))
        .filter_map(|href| BASE_URL.join(href).ok())
        .filter_map(|url| {
            url.path()
                .rsplit(ENTRY_PATH)
                .next()
                .map(|slug| slug.trim_matches('/').to_string())
        })
        .find(|slug| !slug.is_empty());

    Ok(slug)
}

/// Extract an entry from a Duden `/rechtschreibung/` page
pub fn parse_entry(html: &str) -> Result<Entry, ParseError> {
    let doc = Document::parse(html)?;

    let word = doc
        .first(".lemma__title")?
        .map(|title| clean_text(&title.text()))
        .unwrap_or_default();
    let mut entry = Entry::new(word);

    // Words with a single meaning have no enumeration
    for meaning in doc.select("#bedeutung")? {
        let text = first_text(&meaning, ".division__header + p")?;
        entry.push_definition(text, examples(&meaning)?);
    }

    // TODO: group sub-definitions (e.g. "rechnen") under their parent item instead of listing them flat
    for item in doc.select("#bedeutungen .enumeration__item")? {
        let text = first_text(&item, ".enumeration__text")?;
        entry.push_definition(text, examples(&item)?);
    }

    Ok(entry)
}

fn first_text(node: &Node<'_>, css: &str) -> Result<String, ParseError> {
    Ok(node
        .first(css)?
        .map(|el| clean_text(&el.text()))
        .unwrap_or_default())
}

fn examples(node: &Node<'_>) -> Result<Vec<String>, ParseError> {
    Ok(node
        .select(".note__list > li")?
        .iter()
        .map(|li| clean_text(&li.text()))
        .filter(|example| !example.is_empty())
        .collect())
}
