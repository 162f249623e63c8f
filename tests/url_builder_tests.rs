use apiurl::{build_url, ApiUrl};
use proptest::prelude::*;

#[test]
fn test_documented_examples() {
    assert_eq!(
        build_url("https://api.example.com/", "/users"),
        "https://api.example.com/users"
    );
    assert_eq!(
        build_url("https://api.example.com/", "users"),
        "https://api.example.com/users"
    );
    assert_eq!(
        build_url("https://api.example.com", "users"),
        "https://api.example.comusers"
    );
}

#[test]
fn test_only_one_leading_slash_is_stripped() {
    assert_eq!(
        build_url("https://api.example.com/", "//foo"),
        "https://api.example.com//foo"
    );
    assert_eq!(build_url("base/", "///foo"), "base///foo");
    assert_eq!(build_url("base/", "/"), "base/");
}

#[test]
fn test_api_url_matches_build_url() {
    let api = ApiUrl::new("https://api.example.com/");
    for path in ["", "/", "users", "/users", "//users", "/grades/1/"] {
        assert_eq!(api.url(path), build_url(api.base(), path));
    }
}

proptest! {
    #[test]
    fn prop_no_leading_slash_is_plain_concat(base in ".*", path in "[^/].*") {
        prop_assert_eq!(build_url(&base, &path), format!("{}{}", base, path));
    }

    #[test]
    fn prop_leading_slash_is_stripped_once(base in ".*", rest in ".*") {
        let path = format!("/{}", rest);
        prop_assert_eq!(build_url(&base, &path), format!("{}{}", base, rest));
    }

    #[test]
    fn prop_empty_path_yields_base(base in ".*") {
        prop_assert_eq!(build_url(&base, ""), base);
    }
}
