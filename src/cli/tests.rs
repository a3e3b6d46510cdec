use super::*;
use tempfile::TempDir;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_defaults_to_chat() {
    let args = parse_args(&["notes-assistant"]);
    assert!(args.command.is_none());
    assert!(args.url.is_none());
    assert!(args.log.is_none());
}

#[test]
fn global_flags_apply_after_subcommand() {
    let args = parse_args(&[
        "notes-assistant",
        "status",
        "--url",
        "http://notes.local:9000",
    ]);
    assert!(matches!(args.command, Some(Commands::Status)));
    assert_eq!(args.url.as_deref(), Some("http://notes.local:9000"));
}

#[test]
fn ask_joins_trailing_words() {
    let args = parse_args(&["notes-assistant", "ask", "what", "about", "-trains?"]);
    match args.command {
        Some(Commands::Ask { question }) => {
            assert_eq!(question.join(" "), "what about -trains?");
        }
        _ => panic!("expected ask subcommand"),
    }
}

#[test]
fn ask_requires_a_question() {
    assert!(Args::try_parse_from(["notes-assistant", "ask"]).is_err());
}

#[test]
fn set_collects_multi_word_value() {
    let args = parse_args(&["notes-assistant", "set", "transcript-log", "my notes.md"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "transcript-log");
            assert_eq!(value, vec!["my notes.md"]);
        }
        _ => panic!("expected set subcommand"),
    }
}

#[test]
fn unknown_config_keys_are_rejected() {
    assert_eq!(parse_key("backend-url"), Some(ConfigKey::BackendUrl));
    assert_eq!(parse_key("model"), None);
}

#[test]
fn transcript_flag_overrides_config() {
    let dir = TempDir::new().expect("tempdir");
    let from_flag = dir.path().join("flag.md");
    let from_config = dir.path().join("config.md");
    let config = Config {
        backend_url: None,
        transcript_log: Some(from_config.clone()),
    };

    let log = open_transcript(Some(&from_flag), &config).expect("open");
    assert_eq!(log.path(), Some(from_flag.as_path()));
    assert!(!from_config.exists());

    let log = open_transcript(None, &config).expect("open");
    assert_eq!(log.path(), Some(from_config.as_path()));

    let log = open_transcript(None, &Config::default()).expect("open");
    assert!(!log.is_active());
}
