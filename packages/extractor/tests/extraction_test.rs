//! End-to-end tests for section extraction.
//!
//! Uses a WordprocessingML excerpt of Federal Law 44-FZ and generated
//! documents to check boundary, ordering and body-joining behavior.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use statute_extractor::{
    extract_sections, ExtractorConfig, ExtractorError, Result, Section, Sections,
    TrailingSection,
};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("44fz")
        .join(name)
}

/// Build a WordprocessingML document with one paragraph per entry.
fn wordml(paragraphs: &[String]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>\n"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<w:wordDocument xmlns:w="http://schemas.microsoft.com/office/word/2003/wordml">
<w:body>
{body}</w:body>
</w:wordDocument>"#
    )
}

/// `k` articles, each with `lines` body paragraphs, optionally closed by a
/// final marker paragraph.
fn articles(k: usize, lines: usize, closing_marker: bool) -> Vec<String> {
    let mut paragraphs = vec!["preamble".to_string()];
    for i in 1..=k {
        paragraphs.push(format!("Статья {i}"));
        for j in 1..=lines {
            paragraphs.push(format!("article {i} line {j}"));
        }
    }
    if closing_marker {
        paragraphs.push(format!("Статья {}", k + 1));
    }
    paragraphs
}

fn extract(xml: &str) -> Vec<Section> {
    Sections::from_reader(xml.as_bytes(), ExtractorConfig::default())
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

#[test]
fn test_fixture_sections() {
    let sections: Vec<Section> = extract_sections(fixture_path("excerpt.xml"))
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Статья 1. Сфера применения настоящего Федерального закона",
            "Статья 2. Законодательство Российской Федерации и иные нормативные правовые акты о контрактной системе в сфере закупок",
            "Статья 3. Основные понятия, используемые в настоящем Федеральном законе",
        ]
    );

    let numbers: Vec<Option<&str>> = sections.iter().map(Section::article_number).collect();
    assert_eq!(numbers, vec![Some("1"), Some("2"), Some("3")]);

    // Paragraphs inside tables are still paragraphs.
    assert!(sections[1].body.ends_with("\nЯчейка таблицы"));

    // Entities are unescaped.
    assert!(sections[2].body.contains("услуги & обеспечение"));

    // Preamble text is never part of a section.
    assert!(sections.iter().all(|s| !s.body.contains("ФЕДЕРАЛЬНЫЙ ЗАКОН")));
}

#[test]
fn test_fixture_last_article_needs_emit_policy() {
    let config = ExtractorConfig::default().with_trailing(TrailingSection::Emit);
    let sections: Vec<Section> = Sections::open(fixture_path("excerpt.xml"), config)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(sections.len(), 4);
    assert_eq!(
        sections[3].body,
        "1. В целях информационного обеспечения контрактной системы создается единая информационная система.\nПрезидент Российской Федерации"
    );
}

#[test]
fn test_section_count_with_and_without_closing_marker() {
    for k in 1..=12 {
        let closed = extract(&wordml(&articles(k, 2, true)));
        assert_eq!(closed.len(), k, "k={k} with closing marker");

        let open = extract(&wordml(&articles(k, 2, false)));
        assert_eq!(open.len(), k - 1, "k={k} without closing marker");
    }
}

#[test]
fn test_sections_in_document_order() {
    let sections = extract(&wordml(&articles(20, 1, true)));
    let numbers: Vec<String> = sections
        .iter()
        .filter_map(|s| s.article_number().map(String::from))
        .collect();
    let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn test_body_preserves_every_paragraph_once() {
    let sections = extract(&wordml(&articles(3, 5, true)));
    for (i, section) in sections.iter().enumerate() {
        let expected: Vec<String> = (1..=5)
            .map(|j| format!("article {} line {j}", i + 1))
            .collect();
        assert_eq!(section.body, expected.join("\n"));
    }
}

#[test]
fn test_reference_scenario_from_file() {
    let paragraphs: Vec<String> = [
        "preamble", "Статья 1", "text A", "Статья 2", "text B", "Статья 3",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(wordml(&paragraphs).as_bytes()).unwrap();

    let sections: Vec<Section> = extract_sections(file.path())
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(
        sections,
        vec![
            Section::new("Статья 1", "text A"),
            Section::new("Статья 2", "text B"),
        ]
    );
}

#[test]
fn test_early_abandonment() {
    let xml = wordml(&articles(10, 3, true));
    let first: Vec<Section> = Sections::from_reader(xml.as_bytes(), ExtractorConfig::default())
        .take(5)
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first[4].title, "Статья 5");
}

#[test]
fn test_malformed_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(
        &path,
        r#"<w:wordDocument xmlns:w="http://schemas.microsoft.com/office/word/2003/wordml"><w:body><w:p><w:t>Статья 1</w:p></w:body></w:wordDocument>"#,
    )
    .unwrap();

    let result: Result<Vec<Section>> = extract_sections(&path).unwrap().collect();
    assert!(matches!(result, Err(ExtractorError::XmlParse { .. })));
}

#[test]
fn test_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("44-FZ-2026.xml");
    match extract_sections(&missing) {
        Err(ExtractorError::NotFound(path)) => assert_eq!(path, missing),
        Err(other) => panic!("expected NotFound, got {other}"),
        Ok(_) => panic!("expected NotFound, got sections"),
    }
}

#[test]
fn test_declared_windows_1251_encoding() {
    let sections: Vec<Section> = extract_sections(fixture_path("excerpt-cp1251.xml"))
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(
        sections,
        vec![
            Section::new(
                "Статья 1. Сфера применения настоящего Федерального закона",
                "1. Настоящий Федеральный закон регулирует отношения, направленные на \
                 обеспечение государственных и муниципальных нужд.\n\
                 2. Закупки товаров, работ & услуг."
            ),
            Section::new(
                "Статья 2. Законодательство Российской Федерации о контрактной системе",
                "1. Законодательство основывается на положениях Конституции & Гражданского \
                 кодекса."
            ),
        ]
    );
}

#[test]
fn test_windows_1251_bytes_from_reader() {
    let bytes = fs::read(fixture_path("excerpt-cp1251.xml")).unwrap();
    // Cyrillic in windows-1251 is single-byte and not valid UTF-8.
    assert!(std::str::from_utf8(&bytes).is_err());

    let titles: Vec<String> = Sections::from_reader(bytes.as_slice(), ExtractorConfig::default())
        .map(|s| s.map(|s| s.title))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(titles.len(), 2);
    assert!(titles[0].starts_with("Статья 1."));
}
