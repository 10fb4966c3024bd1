//! Custom assertion macros
//!
//! Status assertions print the response body on failure, which is usually
//! the only clue to why a request was rejected.

/// Assert a `TestResponse` has the expected status
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a JSON user view carries exactly the public fields
#[macro_export]
macro_rules! assert_public_view {
    ($value:expr) => {
        let object = $value.as_object().expect("user view must be a JSON object");
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["admin", "email", "id", "username"], "view: {}", $value);
    };
}
