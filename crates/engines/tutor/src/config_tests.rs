use super::*;

#[test]
fn test_default_depths() {
    let config = EngineConfig::default();
    assert_eq!(config.depth(Difficulty::Easy), 0);
    assert_eq!(config.depth(Difficulty::Medium), 1);
    assert_eq!(config.depth(Difficulty::Hard), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_table_keeps_defaults() {
    let config = EngineConfig::from_toml_str("[depths]\nhard = 4\n").unwrap();
    assert_eq!(
        config.depths,
        DepthTable {
            easy: 0,
            medium: 1,
            hard: 4
        }
    );
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn test_depth_limit() {
    let err = EngineConfig::from_toml_str("[depths]\nmedium = 9\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DepthTooLarge {
            level: Difficulty::Medium,
            depth: 9
        }
    ));
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(
        EngineConfig::from_toml_str("[depths]\nhard = \"deep\"\n"),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("[depths]\nexpert = 5\n"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file() {
    let err = EngineConfig::from_file("/nonexistent/tutor.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/tutor.toml"));
}

#[test]
fn test_difficulty_tokens() {
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);

    let err = "expert".parse::<Difficulty>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDifficulty(ref t) if t == "expert"));
    assert!("".parse::<Difficulty>().is_err());
}
