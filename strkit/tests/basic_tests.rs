//! Basic tests for the strkit facade

use strkit::*;

#[test]
fn test_casing_reexports() {
    assert_eq!(to_pascal_case("hello world"), "HelloWorld");
    assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
    assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
    assert_eq!(to_snake_case("helloWorld"), "hello_world");
    assert_eq!(to_screaming_snake_case("helloWorld"), "HELLO_WORLD");
    assert_eq!(to_name_case("jean-claude van damme"), "Jean-Claude van Damme");
}

#[test]
fn test_utility_reexports() {
    assert_eq!(count::char_count("año"), 3);
    assert_eq!(substring::left("hello", 2), "he");
    assert_eq!(lines::to_unix_line_endings("a\r\nb"), "a\nb");
    assert_eq!(codec::base64::encode("Man"), "TWFu");
}

#[test]
fn test_convert_matches_direct_calls() {
    let input = "some inputText";
    for style in [
        CaseStyle::Pascal,
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::Snake,
        CaseStyle::ScreamingSnake,
        CaseStyle::Name,
    ] {
        // Dispatch and the direct function must agree.
        let direct = match style {
            CaseStyle::Pascal => to_pascal_case(input),
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Kebab => to_kebab_case(input),
            CaseStyle::Snake => to_snake_case(input),
            CaseStyle::ScreamingSnake => to_screaming_snake_case(input),
            CaseStyle::Name => to_name_case(input),
        };
        assert_eq!(convert(style, input), direct, "style {style}");
    }
}

#[test]
fn test_format_error_converts_to_crate_error() {
    let failure: Result<String> =
        codec::hexcode::decode("zz").map_err(Error::from);
    assert!(matches!(failure, Err(Error::Format(_))));
}

#[test]
fn test_classification_is_visible_at_the_facade() {
    assert_eq!(classify("von"), TokenClass::Particle);
    assert_eq!(classify("xiv"), TokenClass::RomanNumeral);
    assert_eq!(classify("o'brien"), TokenClass::Apostrophed);
}

#[cfg(feature = "serde")]
#[test]
fn test_case_style_serde_codes() {
    let json = serde_json::to_string(&CaseStyle::ScreamingSnake).unwrap();
    assert_eq!(json, "\"screaming-snake\"");
    let parsed: CaseStyle = serde_json::from_str("\"kebab\"").unwrap();
    assert_eq!(parsed, CaseStyle::Kebab);
}
