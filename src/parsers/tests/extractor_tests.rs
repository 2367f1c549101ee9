use crate::parsers::html::{ancestor_tags_within, is_parenthesized};
use crate::parsers::{ArticleLinkExtractor, LinkExtractor};
use scraper::{Html, Selector};
use url::Url;

fn extractor() -> ArticleLinkExtractor {
    ArticleLinkExtractor::new(Url::parse("https://en.wikipedia.org").unwrap())
}

/// Wrap paragraphs in the containers a rendered article uses
fn article(body: &str) -> String {
    format!(
        r#"<html><body>
        <div id="mw-content-text" class="mw-body-content">
          <div class="mw-content-ltr mw-parser-output" lang="en">{body}</div>
        </div>
        </body></html>"#
    )
}

fn urls(html: &str, max_links: usize) -> Vec<String> {
    extractor()
        .extract(html, max_links)
        .into_iter()
        .map(|c| c.url.to_string())
        .collect()
}

#[test]
fn test_first_links_in_reading_order() {
    let html = article(
        r#"<p>The <a href="/wiki/Dog">dog</a> is a <a href="/wiki/Mammal">mammal</a>
        of the <a href="/wiki/Wolf">wolf</a> family.</p>"#,
    );

    assert_eq!(
        urls(&html, 2),
        vec![
            "https://en.wikipedia.org/wiki/Dog",
            "https://en.wikipedia.org/wiki/Mammal"
        ]
    );
}

#[test]
fn test_candidate_keeps_link_text() {
    let html = article(r#"<p>A <a href="/wiki/Domestic_dog">domestic dog</a>.</p>"#);
    let found = extractor().extract(&html, 2);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "domestic dog");
}

#[test]
fn test_links_collected_across_paragraphs() {
    let html = article(
        r#"<p>First <a href="/wiki/Alpha">alpha</a>.</p>
        <p>Second <a href="/wiki/Beta">beta</a>.</p>"#,
    );

    assert_eq!(
        urls(&html, 2),
        vec![
            "https://en.wikipedia.org/wiki/Alpha",
            "https://en.wikipedia.org/wiki/Beta"
        ]
    );
}

#[test]
fn test_missing_article_body_yields_nothing() {
    let html = r#"<html><body><p>See <a href="/wiki/Dog">dog</a>.</p></body></html>"#;
    assert!(urls(html, 2).is_empty());

    // Content container without the parser output div
    let html = r#"<html><body><div id="mw-content-text">
        <p>See <a href="/wiki/Dog">dog</a>.</p></div></body></html>"#;
    assert!(urls(html, 2).is_empty());
}

#[test]
fn test_empty_paragraphs_skipped() {
    let html = article(
        r#"<p class="mw-empty-elt">
        </p>
        <p>   </p>
        <p>A <a href="/wiki/Cat">cat</a>.</p>"#,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Cat"]);
}

#[test]
fn test_only_direct_child_paragraphs_scanned() {
    let html = article(
        r#"<table class="infobox"><tr><td><p><a href="/wiki/Infobox_link">x</a></p></td></tr></table>
        <div class="hatnote"><p>For other uses see <a href="/wiki/Dog_(disambiguation)">here</a>.</p></div>
        <p>A <a href="/wiki/Mammal">mammal</a>.</p>"#,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Mammal"]);
}

#[test]
fn test_reserved_namespaces_and_externals_skipped() {
    let html = article(
        r#"<p><a href="/wiki/Help:IPA/English">help</a>
        <a href="/wiki/File:Dog.jpg">file</a>
        <a href="/wiki/Category:Dogs">category</a>
        <a href="/wiki/Portal:Animals">portal</a>
        <a href="https://example.com/">external</a>
        <a href="/w/index.php?title=Dog">edit</a>
        <a href="/wiki/Canis">genus</a></p>"#,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Canis"]);
}

#[test]
fn test_citations_skipped() {
    let html = article(
        r##"<p>Dogs are loyal.<sup class="reference"><a href="#cite_note-1">[1]</a></sup>
        <sup><a href="/wiki/Dog#cite_note-2">[2]</a></sup>
        They descend from <a href="/wiki/Wolf">wolves</a>.</p>"##,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Wolf"]);
}

#[test]
fn test_italic_links_skipped() {
    let html = article(
        r#"<p><i><a href="/wiki/Dog_(film)">Dog</a></i> is a film.
        <b><em><a href="/wiki/Emphasis">stress</a></em></b>
        It stars a <a href="/wiki/Dog">dog</a>.</p>"#,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Dog"]);
}

#[test]
fn test_parenthesized_links_skipped() {
    let html = article(
        r#"<p>The dog (<a href="/wiki/Latin">Latin</a>: <i>canis</i>) is a
        <a href="/wiki/Mammal">mammal</a>.</p>"#,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Mammal"]);
}

#[test]
fn test_parenthesis_heuristic_misfires_on_repeated_text() {
    // "cat" also appears inside an unrelated parenthetical, so the real link is rejected
    let html = article(
        r#"<p>A <a href="/wiki/Cat">cat</a> (not a cat person) is a
        <a href="/wiki/Mammal">mammal</a>.</p>"#,
    );
    assert_eq!(urls(&html, 2), vec!["https://en.wikipedia.org/wiki/Mammal"]);
}

#[test]
fn test_max_links_respected() {
    let html = article(
        r#"<p><a href="/wiki/A">a</a> <a href="/wiki/B">b</a> <a href="/wiki/C">c</a></p>
        <p><a href="/wiki/D">d</a></p>"#,
    );

    assert_eq!(urls(&html, 1), vec!["https://en.wikipedia.org/wiki/A"]);
    assert_eq!(urls(&html, 2).len(), 2);
    assert_eq!(urls(&html, 10).len(), 4);
    assert!(urls(&html, 0).is_empty());
}

#[test]
fn test_extraction_is_idempotent() {
    let html = article(
        r#"<p>The <a href="/wiki/Dog">dog</a> (<a href="/wiki/Latin">Latin</a>) is a
        <a href="/wiki/Mammal">mammal</a>.</p>"#,
    );
    let ex = extractor();
    assert_eq!(ex.extract(&html, 2), ex.extract(&html, 2));
}

#[test]
fn test_ancestor_tags_stop_at_boundary() {
    let doc = Html::parse_fragment(
        r#"<i><p>Inside <a id="outer" href="/wiki/X">x</a></p></i>
        <p><span><em><a id="inner" href="/wiki/Y">y</a></em></span></p>"#,
    );
    let outer = doc
        .select(&Selector::parse("#outer").unwrap())
        .next()
        .unwrap();
    let inner = doc
        .select(&Selector::parse("#inner").unwrap())
        .next()
        .unwrap();

    assert_eq!(ancestor_tags_within(outer, "p"), vec!["p"]);
    assert_eq!(ancestor_tags_within(inner, "p"), vec!["em", "span", "p"]);
}

#[test]
fn test_candidates_record_enclosing_tags() {
    let html = article(
        r#"<p>A <b><a href="/wiki/Bold">bold</a></b> and a
        <a href="/wiki/Plain">plain</a> link.</p>"#,
    );

    let found = extractor().extract(&html, 2);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].text, "bold");
    assert_eq!(found[0].context, vec!["b", "p"]);
    assert_eq!(found[1].context, vec!["p"]);
}

#[test]
fn test_is_parenthesized() {
    assert!(is_parenthesized("Dog (Latin: canis) is", "Latin"));
    assert!(!is_parenthesized("Dog is a mammal (canine)", "mammal"));
    assert!(!is_parenthesized("Dog (canine) is a mammal", "mammal"));
    // Regex metacharacters in the link text are matched literally
    assert!(is_parenthesized("Lang (see C++ docs)", "C++"));
    // Empty link text matches any parenthetical
    assert!(is_parenthesized("Dog (canine)", ""));
    assert!(!is_parenthesized("Dog", ""));
}
