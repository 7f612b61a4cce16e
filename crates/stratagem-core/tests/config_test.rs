use std::io::Write;

use stratagem_core::config::ClientConfig;

#[test]
fn defaults_point_at_local_service() {
    let config = ClientConfig::default();
    assert_eq!(config.api_url, "http://localhost:8000/api");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn load_from_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"api_url": "https://sim.example.com/api", "timeout_secs": 5}}"#
    )
    .unwrap();

    let config = ClientConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.api_url, "https://sim.example.com/api");
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"timeout_secs": 90}}"#).unwrap();

    let config = ClientConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.api_url, "http://localhost:8000/api");
    assert_eq!(config.timeout_secs, 90);
}

#[test]
fn malformed_file_is_a_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = ClientConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("JSON Parsing Error"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ClientConfig::load_from_file("/nonexistent/stratagem.json").unwrap_err();
    assert!(err.to_string().starts_with("IO Error"));
}
