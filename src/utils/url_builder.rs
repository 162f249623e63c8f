/// Strip a single leading `/` from a path.
///
/// Only one slash is removed: `"//x"` becomes `"/x"`.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Build an absolute URL from a base URL and a path.
///
/// The result is `base` followed by the normalized path. No separator is
/// inserted, so `base` is expected to already end with `/`.
pub fn build_url(base: &str, path: &str) -> String {
    let path = normalize_path(path);
    let mut url = String::with_capacity(base.len() + path.len());
    url.push_str(base);
    url.push_str(path);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/users"), "users");
        assert_eq!(normalize_path("users"), "users");
        assert_eq!(normalize_path("//users"), "/users");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_build_url_strips_one_slash() {
        assert_eq!(
            build_url("https://api.example.com/", "/users"),
            "https://api.example.com/users"
        );
        assert_eq!(
            build_url("https://api.example.com/", "users"),
            "https://api.example.com/users"
        );
    }

    #[test]
    fn test_build_url_keeps_inner_slashes() {
        assert_eq!(
            build_url("https://api.example.com/", "/grades/12/subjects/"),
            "https://api.example.com/grades/12/subjects/"
        );
    }

    #[test]
    fn test_build_url_inserts_no_separator() {
        assert_eq!(
            build_url("https://api.example.com", "users"),
            "https://api.example.comusers"
        );
    }

    #[test]
    fn test_build_url_empty_inputs() {
        assert_eq!(build_url("https://api.example.com/", ""), "https://api.example.com/");
        assert_eq!(build_url("", "/users"), "users");
        assert_eq!(build_url("", ""), "");
    }
}
