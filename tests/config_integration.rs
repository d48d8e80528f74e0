use hopline::config::{ConfigFlags, ThemeMode, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".hoplinerc");
    let content = r#"
# comment
--tab-width 2

--theme light

--line-width=80
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.tab_width, Some(2));
    assert_eq!(flags.theme, Some(ThemeMode::Light));
    assert_eq!(flags.line_width, Some(80));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".hoplinerc");
    let content = "--tab-width 8\n--theme light\n--line-width 100\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "hopline".to_string(),
        "--theme".to_string(),
        "dark".to_string(),
        "--tab-width=2".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(effective.tab_width, Some(2), "cli flags should be applied");
    assert_eq!(effective.theme, Some(ThemeMode::Dark), "cli should override theme");
    assert_eq!(
        effective.line_width,
        Some(100),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "hopline".to_string(),
        "--theme=dark".to_string(),
        "--line-width=72".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.theme, Some(ThemeMode::Dark));
    assert_eq!(flags.line_width, Some(72));
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".hoplinerc");

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
