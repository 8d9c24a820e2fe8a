// Configuration defaults, persistence and error classification.
use wishcal::config::Config;
use wishcal::context::{AppContext, TestContext};

#[test]
fn defaults_match_the_documented_values() {
    let config = Config::default();
    assert_eq!(config.profile, "");
    assert_eq!(config.locale, "schinese");
    assert_eq!(config.max_pages, 20);
    assert!(!config.include_dlc);
    assert_eq!(config.page_delay_secs, 3);
}

#[test]
fn missing_file_is_detectable_and_not_fatal() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).expect_err("no config file was written");
    assert!(Config::is_missing_config_error(&err));
}

#[test]
fn save_and_load_roundtrip() {
    let ctx = TestContext::new();
    let config = Config {
        profile: "76561198000000000".to_string(),
        locale: "english".to_string(),
        max_pages: 5,
        include_dlc: true,
        page_delay_secs: 1,
    };
    config.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.profile, config.profile);
    assert_eq!(loaded.locale, config.locale);
    assert_eq!(loaded.max_pages, 5);
    assert!(loaded.include_dlc);
    assert_eq!(loaded.page_delay_secs, 1);
}

#[test]
fn partial_files_fall_back_to_field_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "profile = \"gabe\"\n").unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.profile, "gabe");
    assert_eq!(loaded.locale, "schinese");
    assert_eq!(loaded.max_pages, 20);
}

#[test]
fn malformed_files_are_a_real_error() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "max_pages = \"not a number\"").unwrap();

    let err = Config::load(&ctx).expect_err("malformed TOML must not parse");
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse"));
}
