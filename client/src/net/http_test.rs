use super::*;

#[test]
fn api_url_passes_relative_path_through() {
    assert_eq!(api_url("/import_articles/"), "/import_articles/");
}

#[test]
fn join_url_trims_trailing_base_slash() {
    assert_eq!(join_url("http://localhost:8000/", "/chat/"), "http://localhost:8000/chat/");
    assert_eq!(join_url("http://localhost:8000", "/chat/"), "http://localhost:8000/chat/");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
    assert_eq!(request_failed_message(404), "request failed: 404");
}
