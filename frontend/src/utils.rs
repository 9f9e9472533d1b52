use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:8000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/insights/experiments" ->
/// "http://localhost:8000/api/insights/experiments")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}
