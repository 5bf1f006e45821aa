use super::Config;
use crate::traversal::Order;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_from_empty_file() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.order(), Some(Order::DepthFirst));
}

#[test]
fn test_values_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "indent_width = 2\nlog_level = \"debug\"\ndefault_order = \"forward-and-up\""
    )
    .unwrap();

    let config = Config::load_from(file.path());
    assert_eq!(config.indent_width, 2);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.order(), Some(Order::ForwardAndUp));
}

#[test]
fn test_missing_file_falls_back() {
    let config = Config::load_from(std::path::Path::new("/no/such/cellnav.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_order() {
    let config = Config {
        default_order: "sideways".to_string(),
        ..Config::default()
    };
    assert_eq!(config.order(), None);
}
