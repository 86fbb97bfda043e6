use std::sync::Arc;
use std::time::Duration;

use alman_core::{Definition, Entry, LookupError, OnlineDictionary};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::fake::{FakeFetcher, transport};
use crate::duden::{Duden, parse_entry};

const BETREUEN: &str = include_str!("../../tests/fixtures/duden_betreuen.html");
const UEBEL: &str = include_str!("../../tests/fixtures/duden_single_meaning.html");
const SEARCH_UEBEL: &str = include_str!("../../tests/fixtures/duden_search_uebel.html");
const SEARCH_EMPTY: &str = include_str!("../../tests/fixtures/duden_search_empty.html");

fn betreuen() -> Entry {
    Entry {
        word: "betreuen".to_string(),
        definitions: vec![
            Definition {
                text: "vorübergehend in seiner Obhut haben, in Obhut nehmen; für jemanden, etwas sorgen"
                    .to_string(),
                examples: vec![
                    "Kinder, alte Leute, Tiere betreuen".to_string(),
                    "eine Reiseleiterin betreut die Gruppe".to_string(),
                    "die Sportler werden von einem Trainer betreut".to_string(),
                    "betreutes (ein mit einer Betreuung der betreffenden Person[en] verbundenes) Wohnen"
                        .to_string(),
                ],
            },
            Definition {
                text: "ein Sachgebiet o. Ä. fortlaufend bearbeiten; die Verantwortung für den Ablauf von etwas haben"
                    .to_string(),
                examples: vec![
                    "eine Abteilung, ein Arbeitsgebiet betreuen".to_string(),
                    "sie betreut das Projekt zur Sanierung der Altbauten".to_string(),
                ],
            },
        ],
        usages: vec![],
    }
}

async fn find(duden: &Duden, word: &str) -> Result<Entry, LookupError> {
    timeout(Duration::from_secs(2), duden.find(word, &CancellationToken::new()))
        .await
        .expect("lookup timed out")
}

#[test]
fn test_urls_use_duden_dialect() {
    assert_eq!(
        Duden::entry_url(" Größe "),
        "https://www.duden.de/rechtschreibung/Groesse"
    );
    assert_eq!(
        Duden::search_url("Öl"),
        "https://www.duden.de/suchen/dudenonline/OEl"
    );
}

#[tokio::test]
async fn test_find_using_url_betreuen() {
    let fetcher = FakeFetcher::new().page("https://www.duden.de/rechtschreibung/betreuen", BETREUEN);
    let duden = Duden::new(Arc::new(fetcher));

    let entry = duden
        .find_using_url("betreuen", &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(entry, betreuen());
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse_entry(BETREUEN).unwrap();
    let second = parse_entry(BETREUEN).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_parse_single_meaning_page() {
    let entry = parse_entry(UEBEL).unwrap();
    assert_eq!(entry.word, "Übel");
    assert_eq!(
        entry.definitions,
        vec![Definition {
            text: "etwas, was übel ist; Unheil, Schlimmes".to_string(),
            examples: vec![
                "ein großes, schlimmes Übel".to_string(),
                "das kleinere Übel wählen".to_string(),
            ],
        }]
    );
}

#[test]
fn test_parse_skips_items_without_text() {
    let html = r#"
        <h1 class="lemma__title">Test</h1>
        <div id="bedeutungen"><ol>
          <li class="enumeration__item"><div class="enumeration__text"> &shy; </div>
            <ul class="note__list"><li>verwaist</li></ul></li>
          <li class="enumeration__item"><div class="enumeration__text">echte Bedeutung</div></li>
        </ol></div>
    "#;
    let entry = parse_entry(html).unwrap();
    assert_eq!(entry.definitions.len(), 1);
    assert_eq!(entry.definitions[0].text, "echte Bedeutung");
    assert!(entry.definitions[0].examples.is_empty());
}

#[tokio::test]
async fn test_direct_result_wins_over_search() {
    let search = r#"<html><body><a href="/rechtschreibung/Uebel">Übel</a></body></html>"#;
    let fetcher = FakeFetcher::new()
        .delayed_page(
            "https://www.duden.de/rechtschreibung/betreuen",
            BETREUEN,
            Duration::from_millis(50),
        )
        .page("https://www.duden.de/suchen/dudenonline/betreuen", search)
        .page("https://www.duden.de/rechtschreibung/Uebel", UEBEL);
    let fetcher = Arc::new(fetcher);
    let duden = Duden::new(fetcher.clone());

    let entry = find(&duden, "betreuen").await.unwrap();
    assert_eq!(entry.word, "betreuen");

    // The search strategy still ran to completion
    assert!(
        fetcher
            .requests()
            .contains(&"https://www.duden.de/rechtschreibung/Uebel".to_string())
    );
}

#[tokio::test]
async fn test_search_resolves_when_url_guess_misses() {
    let fetcher = FakeFetcher::new()
        .page("https://www.duden.de/suchen/dudenonline/uebel", SEARCH_UEBEL)
        .page("https://www.duden.de/rechtschreibung/Uebel", UEBEL);
    let fetcher = Arc::new(fetcher);
    let duden = Duden::new(fetcher.clone());

    let entry = find(&duden, "uebel").await.unwrap();
    assert_eq!(entry.word, "Übel");

    let mut requests = fetcher.requests();
    requests.sort();
    assert_eq!(
        requests,
        vec![
            "https://www.duden.de/rechtschreibung/Uebel",
            "https://www.duden.de/rechtschreibung/uebel",
            "https://www.duden.de/suchen/dudenonline/uebel",
        ]
    );
}

#[tokio::test]
async fn test_search_follows_absolute_result_link() {
    let search = r#"<a href="https://www.duden.de/rechtschreibung/Uebel/">Übel</a>"#;
    let fetcher = FakeFetcher::new()
        .page("https://www.duden.de/suchen/dudenonline/Uebl", search)
        .page("https://www.duden.de/rechtschreibung/Uebel", UEBEL);
    let duden = Duden::new(Arc::new(fetcher));

    let entry = duden
        .find_using_search("Uebl", &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(entry.word, "Übel");
}

#[tokio::test]
async fn test_not_found_when_both_strategies_miss() {
    let fetcher = FakeFetcher::new().page("https://www.duden.de/suchen/dudenonline/Quatschwort", SEARCH_EMPTY);
    let duden = Duden::new(Arc::new(fetcher));

    assert_eq!(find(&duden, "Quatschwort").await, Err(LookupError::NotFound));
}

#[tokio::test]
async fn test_transport_failure_is_not_reported_as_not_found() {
    let direct = "https://www.duden.de/rechtschreibung/Haus";
    let search = "https://www.duden.de/suchen/dudenonline/Haus";
    let fetcher = FakeFetcher::new()
        .failure(direct, transport(direct))
        .failure(search, transport(search));
    let duden = Duden::new(Arc::new(fetcher));

    assert_eq!(
        find(&duden, "Haus").await,
        Err(LookupError::Fetch(transport(direct)))
    );
}

#[tokio::test]
async fn test_cancelled_lookup_returns_promptly() {
    let fetcher = FakeFetcher::new()
        .delayed_page(
            "https://www.duden.de/rechtschreibung/betreuen",
            BETREUEN,
            Duration::from_secs(30),
        )
        .delayed_page(
            "https://www.duden.de/suchen/dudenonline/betreuen",
            SEARCH_EMPTY,
            Duration::from_secs(30),
        );
    let duden = Duden::new(Arc::new(fetcher));

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = timeout(Duration::from_secs(2), duden.find("betreuen", &cancel))
        .await
        .expect("cancelled lookup did not return");
    assert_eq!(result, Err(LookupError::Cancelled));
}

#[test]
fn test_render_has_no_usage_separator() {
    let text = parse_entry(BETREUEN).unwrap().render();
    assert!(text.starts_with("# betreuen\n\n## vorübergehend"));
    assert!(!text.contains("---"));
}
