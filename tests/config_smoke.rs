use std::io::Write;

use neutron::config::{PlayConfig, Player};
use neutron::NeutronError;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(text.as_bytes()).expect("write config");
    f
}

#[test]
fn config_file_loads_and_validates() {
    let f = write_config(
        r#"{
            "white": { "kind": "computer", "depth": 2 },
            "black": { "kind": "human" },
            "max_plies": 40,
            "trace_search": true
        }"#,
    );
    let cfg = PlayConfig::load(f.path()).expect("config must load");
    assert_eq!(cfg.white, Player::Computer { depth: 2 });
    assert_eq!(cfg.black, Player::Human);
    assert_eq!(cfg.max_plies, Some(40));
    assert!(cfg.trace_search);
}

#[test]
fn bad_config_files_report_their_cause() {
    let f = write_config("{ not json");
    assert!(matches!(
        PlayConfig::load(f.path()),
        Err(NeutronError::Config { .. })
    ));

    let f = write_config(r#"{ "max_plies": 0 }"#);
    assert!(matches!(
        PlayConfig::load(f.path()),
        Err(NeutronError::InvalidConfig { .. })
    ));

    let missing = std::env::temp_dir().join("neutron-config-that-does-not-exist.json");
    assert!(matches!(
        PlayConfig::load(&missing),
        Err(NeutronError::Io { .. })
    ));
}
