use abakus_calculator::{Config, Error};
use std::fs;

#[test]
fn test_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
    assert_eq!(
        Config::from_toml("clear_screen = false").unwrap(),
        Config {
            color: true,
            clear_screen: false,
            show_features: true,
        }
    );
}

#[test]
fn test_invalid_config() {
    assert!(matches!(
        Config::from_toml("color = \"sometimes\""),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        Config::from_toml("colour = false"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_load() {
    let path = std::env::temp_dir().join(format!("abakus-config-{}.toml", std::process::id()));
    fs::write(&path, "color = false\nshow_features = false\n").unwrap();
    let config = Config::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(!config.color);
    assert!(config.clear_screen);
    assert!(!config.show_features);

    assert!(matches!(Config::load(&path), Err(Error::Io(_))));
}
