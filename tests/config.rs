use clap::Parser;
use monday_bi::cli::Args;
use monday_bi::config::{Config, YamlConfig, DEFAULT_ENDPOINT};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_yaml_sections_parse() {
    let yaml = r#"
api:
  endpoint: "http://bi.internal:9000/query"
  request_timeout: 45
boards:
  deals_board_id: "1234"
  work_orders_board_id: "5678"
session:
  verbose: true
"#;

    let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(
        config.api.endpoint.as_deref(),
        Some("http://bi.internal:9000/query")
    );
    assert_eq!(config.api.request_timeout, Some(45));
    assert_eq!(config.boards.deals_board_id.as_deref(), Some("1234"));
    assert_eq!(config.boards.work_orders_board_id.as_deref(), Some("5678"));
    assert_eq!(config.session.verbose, Some(true));
}

#[test]
fn test_yaml_missing_sections_default() {
    let config: YamlConfig = serde_yaml::from_str("api:\n  endpoint: \"http://x/query\"\n").unwrap();

    assert_eq!(config.api.request_timeout, None);
    assert_eq!(config.boards.deals_board_id, None);
    assert_eq!(config.session.verbose, None);
}

#[test]
fn test_load_path_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("monday-bi.yaml");
    fs::write(&path, "boards:\n  deals_board_id: \"42\"\n").unwrap();

    let config = YamlConfig::load_path(&path).unwrap();

    assert_eq!(config.boards.deals_board_id.as_deref(), Some("42"));
}

#[test]
fn test_load_path_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.yaml");

    assert!(YamlConfig::load_path(&path).is_err());
}

#[test]
fn test_args_resolve_into_config() {
    let args = Args::parse_from([
        "bi",
        "--endpoint",
        "http://args.example/query",
        "--monday-api-key",
        "mk-args",
        "--deals-board-id",
        "777",
        "--timeout",
        "15",
        "--verbose",
    ]);

    let config = Config::from_env_and_args(&args);

    assert_eq!(config.endpoint, "http://args.example/query");
    assert_eq!(config.request_timeout, Some(15));
    assert!(config.verbose);
    assert_eq!(config.session.monday_api_key, "mk-args");
    assert_eq!(config.session.deals_board_id, "777");
}

#[test]
fn test_env_layer_and_args_precedence() {
    // Env vars mutated only in this test to keep the suite race-free.
    std::env::set_var("GEMINI_API_KEY", "gk-env");
    std::env::set_var("WORK_ORDERS_BOARD_ID", "999");

    let from_env = Config::from_env_and_args(&Args::parse_from(["bi"]));
    assert_eq!(from_env.session.gemini_api_key, "gk-env");
    assert_eq!(from_env.session.work_orders_board_id, "999");

    // CLI args win over the environment.
    let from_args = Config::from_env_and_args(&Args::parse_from([
        "bi",
        "--gemini-api-key",
        "gk-args",
        "--work-orders-board-id",
        "111",
    ]));
    assert_eq!(from_args.session.gemini_api_key, "gk-args");
    assert_eq!(from_args.session.work_orders_board_id, "111");

    std::env::remove_var("GEMINI_API_KEY");
    std::env::remove_var("WORK_ORDERS_BOARD_ID");
}

#[test]
fn test_defaults_when_nothing_is_configured() {
    let config = Config::from_env_and_args(&Args::parse_from(["bi"]));

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.request_timeout, None);
    assert!(!config.verbose);
}

#[test]
fn test_question_words_collect_positionally() {
    let args = Args::parse_from(["bi", "what", "is", "our", "pipeline", "value?"]);

    assert_eq!(args.question.join(" "), "what is our pipeline value?");
}
