//! Endpoint URL construction for the notes backend.

/// Strip trailing slashes so endpoint paths can be appended safely.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join the backend base URL and an endpoint path with exactly one slash.
///
/// ```
/// use notes_assistant::utils::url::endpoint_url;
///
/// assert_eq!(
///     endpoint_url("http://localhost:8000/", "/api/status"),
///     "http://localhost:8000/api/status"
/// );
/// ```
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}
