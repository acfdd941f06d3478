//! End-to-end tests for the casing conversions

use strkit_core::{
    segment_words, to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case,
    to_snake_case,
};

#[test]
fn test_reference_scenarios() {
    assert_eq!(to_pascal_case("hello world"), "HelloWorld");
    assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
    assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
    assert_eq!(to_snake_case("helloWorld"), "hello_world");
}

#[test]
fn test_conversions_between_styles() {
    let idents = [
        "parse_http_request",
        "parse-http-request",
        "parseHttpRequest",
        "ParseHttpRequest",
        "parse http request",
    ];
    for ident in idents {
        assert_eq!(to_snake_case(ident), "parse_http_request", "from {ident}");
        assert_eq!(to_kebab_case(ident), "parse-http-request", "from {ident}");
        assert_eq!(to_pascal_case(ident), "ParseHttpRequest", "from {ident}");
        assert_eq!(to_camel_case(ident), "parseHttpRequest", "from {ident}");
        assert_eq!(
            to_screaming_snake_case(ident),
            "PARSE_HTTP_REQUEST",
            "from {ident}"
        );
    }
}

#[test]
fn test_empty_input_round_trip() {
    assert_eq!(to_pascal_case(""), "");
    assert_eq!(to_camel_case(""), "");
    assert_eq!(to_kebab_case(""), "");
    assert_eq!(to_snake_case(""), "");
    assert_eq!(to_screaming_snake_case(""), "");
}

#[test]
fn test_separator_only_input() {
    for input in [" ", "---", "___", " -_ -_ "] {
        assert_eq!(to_pascal_case(input), "", "from {input:?}");
        assert_eq!(to_snake_case(input), "", "from {input:?}");
        assert!(segment_words(input).is_empty(), "from {input:?}");
    }
}

#[test]
fn test_no_residual_separators_in_pascal_and_camel() {
    let input = "a-b_c dEf";
    for result in [to_pascal_case(input), to_camel_case(input)] {
        assert!(!result.contains([' ', '-', '_']), "got {result:?}");
    }
}

#[test]
fn test_kebab_and_snake_idempotent() {
    let input = "Some mixedInput-with_everything IN it";
    let kebab = to_kebab_case(input);
    assert_eq!(to_kebab_case(&kebab), kebab);
    let snake = to_snake_case(input);
    assert_eq!(to_snake_case(&snake), snake);
}

#[test]
fn test_letters_are_never_dropped() {
    let input = "keepAll-the_letters here";
    let letters = |s: &str| s.chars().filter(|c| c.is_alphabetic()).count();
    assert_eq!(letters(&to_pascal_case(input)), letters(input));
    assert_eq!(letters(&to_snake_case(input)), letters(input));
}
