use crate::extract::Discovered;
use crate::extract::json_ld::{decode, scan, scan_block};
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://site.example/videos/page").unwrap()
    }

    fn scan_text(text: &str) -> Vec<String> {
        let mut discovered = Discovered::new();
        scan_block(text, &page(), &mut discovered);
        discovered.into_urls()
    }

    #[test]
    fn test_content_url_found_at_any_depth() {
        assert_eq!(
            scan_text(r#"{"video":{"contentUrl":"https://cdn.example/v.webm"}}"#),
            vec!["https://cdn.example/v.webm"]
        );
        assert_eq!(
            scan_text(
                r#"{"@graph":[{"a":[{"b":{"c":{"contentUrl":"https://cdn.example/deep.mp4"}}}]}]}"#
            ),
            vec!["https://cdn.example/deep.mp4"]
        );
    }

    #[test]
    fn test_url_fields_are_resolved_against_the_page() {
        assert_eq!(
            scan_text(
                r#"{"@type":"VideoObject","url":"clip.mp4","contentUrl":"/media/clip.mp4"}"#
            ),
            vec![
                "https://site.example/videos/clip.mp4",
                "https://site.example/media/clip.mp4",
            ]
        );
    }

    #[test]
    fn test_non_string_url_field_is_searched() {
        assert_eq!(
            scan_text(
                r#"{"url":{"contentUrl":"https://cdn.example/inner.mp4"},"contentUrl":[{"url":"/list.mp4"}]}"#
            ),
            vec![
                "https://cdn.example/inner.mp4",
                "https://site.example/list.mp4",
            ]
        );
    }

    #[test]
    fn test_other_fields_and_scalars_are_ignored() {
        let unrelated =
            r#"{"embedUrl":"https://cdn.example/e.mp4","name":"x","n":1,"ok":true,"z":null}"#;
        assert!(scan_text(unrelated).is_empty());
        assert!(scan_text(r#""https://cdn.example/bare.mp4""#).is_empty());
        assert!(scan_text("42").is_empty());
    }

    #[test]
    fn test_top_level_array_is_accepted() {
        assert_eq!(
            scan_text(
                r#"[{"contentUrl":"/a.mp4"},{"contentUrl":"/b.mp4"},{"contentUrl":"/a.mp4"}]"#
            ),
            vec![
                "https://site.example/a.mp4",
                "https://site.example/b.mp4",
            ]
        );
    }

    #[test]
    fn test_fields_are_visited_in_document_order() {
        assert_eq!(
            scan_text(r#"{"zeta":{"url":"/z.mp4"},"alpha":{"url":"/a.mp4"}}"#),
            vec![
                "https://site.example/z.mp4",
                "https://site.example/a.mp4",
            ]
        );
    }

    #[test]
    fn test_undecodable_block_is_skipped() {
        assert!(scan_text("{not json").is_empty());
        assert!(scan_text("").is_empty());
        assert!(scan_text("   \n ").is_empty());
        assert!(decode("{not json").is_err());
    }

    #[test]
    fn test_trailing_content_after_first_value_is_ignored() {
        assert_eq!(
            scan_text(r#"{"contentUrl":"/first.mp4"} {"contentUrl":"/second.mp4"}"#),
            vec!["https://site.example/first.mp4"]
        );
        assert!(decode(r#"{"a":1} trailing garbage"#).is_ok());
    }

    #[test]
    fn test_large_numbers_keep_their_literal() {
        let node = decode(
            r#"{"duration":123456789012345678901234567890,"ratio":0.1000000000000000055511151231257827}"#,
        )
        .unwrap();
        assert_eq!(node["duration"].to_string(), "123456789012345678901234567890");
        assert_eq!(node["ratio"].to_string(), "0.1000000000000000055511151231257827");
    }

    #[test]
    fn test_scan_shares_the_dedup_set() {
        let mut discovered = Discovered::new();
        discovered.insert("https://site.example/seen.mp4");
        let node = decode(r#"{"contentUrl":"/seen.mp4","video":{"url":"/new.mp4"}}"#).unwrap();
        scan(&node, &page(), &mut discovered);
        assert_eq!(
            discovered.urls(),
            ["https://site.example/seen.mp4", "https://site.example/new.mp4"]
        );
    }
}
