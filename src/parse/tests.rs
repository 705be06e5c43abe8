// Parse module tests.

use super::*;

#[test]
fn test_extract_og_title_basic() {
    let html = r#"<html><head><meta property="og:title" content="Hello World"></head></html>"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:title"), Some(&"Hello World".to_string()));
}

#[test]
fn test_extract_og_title_entity_decoded() {
    let html = r#"<meta property="og:title" content="Tom &amp; Jerry &quot;Live&quot;">"#;
    let tags = extract_metadata(html);
    assert_eq!(
        tags.get("og:title"),
        Some(&"Tom & Jerry \"Live\"".to_string())
    );
}

#[test]
fn test_extract_meta_self_closing_and_single_quotes() {
    let html = r#"<meta name='twitter:card' content='summary_large_image' />"#;
    let tags = extract_metadata(html);
    assert_eq!(
        tags.get("twitter:card"),
        Some(&"summary_large_image".to_string())
    );
}

#[test]
fn test_extract_meta_content_before_property() {
    let html = r#"<meta content="https://example.com/a.png" property="og:image">"#;
    let tags = extract_metadata(html);
    assert_eq!(
        tags.get("og:image"),
        Some(&"https://example.com/a.png".to_string())
    );
}

#[test]
fn test_extract_meta_key_lowercased() {
    let html = r#"<META PROPERTY="OG:Title" CONTENT="Shouting">"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:title"), Some(&"Shouting".to_string()));
}

#[test]
fn test_extract_meta_last_occurrence_wins() {
    let html = r#"
        <meta property="og:title" content="First">
        <meta property="og:title" content="Second">
    "#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:title"), Some(&"Second".to_string()));
}

#[test]
fn test_extract_meta_without_key_or_content_skipped() {
    let html = r#"
        <meta charset="utf-8">
        <meta http-equiv="refresh" content="30">
        <meta property="og:type">
    "#;
    let tags = extract_metadata(html);
    assert!(tags.is_empty(), "unexpected tags: {:?}", tags);
}

#[test]
fn test_extract_meta_property_preferred_over_name() {
    let html = r#"<meta name="title" property="og:title" content="Both">"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:title"), Some(&"Both".to_string()));
    assert!(!tags.contains_key("title"));
}

#[test]
fn test_extract_meta_data_content_not_confused_with_content() {
    let html = r#"<meta property="og:type" data-content="nope" content="article">"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:type"), Some(&"article".to_string()));
}

#[test]
fn test_extract_meta_attributes_without_separating_space() {
    let html = r#"<meta property="og:title"content="Tight"><meta name='twitter:card'content='summary'/>"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:title"), Some(&"Tight".to_string()));
    assert_eq!(tags.get("twitter:card"), Some(&"summary".to_string()));
}

#[test]
fn test_extract_meta_data_content_without_space_not_confused() {
    let html = r#"<meta property="og:type"data-content="nope" content="article">"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:type"), Some(&"article".to_string()));
}

#[test]
fn test_extract_meta_value_containing_angle_bracket() {
    let html = r#"<meta property="og:description" content="a > b"><meta property="og:type" content="website">"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("og:description"), Some(&"a > b".to_string()));
    assert_eq!(tags.get("og:type"), Some(&"website".to_string()));
}

#[test]
fn test_extract_title_basic() {
    let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
    assert_eq!(extract_title(html), Some("Test Page".to_string()));
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = "<html><head><title>\n        Test Page\n    </title></head></html>";
    assert_eq!(extract_title(html), Some("Test Page".to_string()));
}

#[test]
fn test_extract_title_with_html_entities() {
    let html = r#"<TITLE lang="en">Test &amp; Page &lt;Title&gt;</TITLE>"#;
    assert_eq!(
        extract_title(html),
        Some("Test & Page <Title>".to_string())
    );
}

#[test]
fn test_extract_title_trimmed_after_decoding() {
    let html = "<title>&nbsp;Hi&nbsp;</title>";
    assert_eq!(extract_title(html), Some("Hi".to_string()));
}

#[test]
fn test_extract_title_multiple_tags() {
    let html = r#"<title>First</title><title>Second</title>"#;
    assert_eq!(extract_title(html), Some("First".to_string()));
}

#[test]
fn test_extract_title_missing() {
    let tags = extract_metadata("<html><head></head></html>");
    assert!(!tags.contains_key("title"));
}

#[test]
fn test_extract_description_standard_meta() {
    let html = r#"<meta name="description" content="A page about things">"#;
    let tags = extract_metadata(html);
    assert_eq!(
        tags.get("description"),
        Some(&"A page about things".to_string())
    );
}

#[test]
fn test_extract_description_unquoted_name_fallback() {
    let html = r#"<meta name=description content="Recovered">"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("description"), Some(&"Recovered".to_string()));
}

#[test]
fn test_extract_description_unquoted_name_content_first() {
    let html = r#"<meta content='Reversed' name=description>"#;
    assert_eq!(
        extract_meta_description(html),
        Some("Reversed".to_string())
    );
}

#[test]
fn test_extract_description_fallback_ignores_similar_names() {
    let html = r#"<meta name=descriptions content="Nope">"#;
    assert_eq!(extract_meta_description(html), None);
}

#[test]
fn test_extract_description_fallback_ignores_data_attributes() {
    let content_first = r#"<meta data-content="wrong" name=description>"#;
    assert_eq!(extract_meta_description(content_first), None);

    let name_first = r#"<meta name=description data-content="wrong" content="right">"#;
    assert_eq!(extract_meta_description(name_first), Some("right".to_string()));

    let data_name = r#"<meta data-name=description content="wrong">"#;
    assert_eq!(extract_meta_description(data_name), None);
}

#[test]
fn test_extract_description_fallback_adjacent_attributes() {
    let html = r#"<meta content="Snug"name=description>"#;
    assert_eq!(extract_meta_description(html), Some("Snug".to_string()));
}

#[test]
fn test_extract_canonical_either_order() {
    let a = r#"<link rel="canonical" href="https://example.com/a">"#;
    let b = r#"<link href="https://example.com/b" rel="canonical" />"#;
    assert_eq!(extract_canonical(a), Some("https://example.com/a".to_string()));
    assert_eq!(extract_canonical(b), Some("https://example.com/b".to_string()));
}

#[test]
fn test_extract_canonical_ignores_other_links() {
    let html = r#"<link rel="stylesheet" href="/style.css"><link rel="alternate" href="/feed">"#;
    assert_eq!(extract_canonical(html), None);
}

#[test]
fn test_extract_favicon_variants() {
    let icon = r#"<link rel="icon" type="image/png" href="/favicon.png">"#;
    let shortcut = r#"<link rel="Shortcut Icon" href="/favicon.ico">"#;
    let apple = r#"<link rel="apple-touch-icon" href="/apple.png">"#;
    assert_eq!(extract_favicon(icon), Some("/favicon.png".to_string()));
    assert_eq!(extract_favicon(shortcut), Some("/favicon.ico".to_string()));
    assert_eq!(extract_favicon(apple), None);
}

#[test]
fn test_extract_metadata_full_document() {
    let html = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Example Domain</title>
  <meta name="description" content="Example description">
  <link rel="canonical" href="https://example.com/">
  <link rel="icon" href="/favicon.ico">
  <meta property="og:title" content="Example OG Title">
  <meta property="og:description" content="Example OG description">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:image:width" content="1200">
  <meta property="og:image:height" content="630">
  <meta name="twitter:card" content="summary_large_image">
</head>
<body></body>
</html>"#;
    let tags = extract_metadata(html);
    assert_eq!(tags.get("title"), Some(&"Example Domain".to_string()));
    assert_eq!(
        tags.get("description"),
        Some(&"Example description".to_string())
    );
    assert_eq!(
        tags.get("canonical"),
        Some(&"https://example.com/".to_string())
    );
    assert_eq!(tags.get("favicon"), Some(&"/favicon.ico".to_string()));
    assert_eq!(tags.get("og:image:width"), Some(&"1200".to_string()));
    assert_eq!(tags.get("twitter:card"), Some(&"summary_large_image".to_string()));
    assert_eq!(tags.len(), 10);
}

#[test]
fn test_extract_metadata_malformed_html_does_not_fail() {
    let html = r#"<meta property="og:title" content="Unclosed <title>Broken <meta <link rel="#;
    let tags = extract_metadata(html);
    assert!(!tags.contains_key("title"));
    assert!(!tags.contains_key("canonical"));
}

#[test]
fn test_decode_entities_known_set() {
    assert_eq!(
        decode_entities("&amp;&lt;&gt;&quot;&#39;&#x27;&#x2F;&nbsp;"),
        "&<>\"''/ "
    );
}

#[test]
fn test_decode_entities_single_pass() {
    assert_eq!(decode_entities("&amp;amp;"), "&amp;");
    assert_eq!(decode_entities("&amp;lt;"), "&lt;");
}

#[test]
fn test_decode_entities_unknown_left_alone() {
    assert_eq!(decode_entities("&copy; &#169; &eacute;"), "&copy; &#169; &eacute;");
}
