use boxlay::config::{Config, ConfigMode, Error, Format, Options};
use boxlay::geom::Size;
use std::path::{Path, PathBuf};

fn temp_path(name: &str) -> PathBuf {
    let _ = env_logger::builder().is_test(true).try_init();
    std::env::temp_dir().join(format!("boxlay-{}-{name}", std::process::id()))
}

#[test]
fn no_path_uses_defaults() {
    let options = Options::default();
    assert_eq!(options.config_mode, ConfigMode::Read);
    assert_eq!(options.read_config().unwrap(), Config::default());
}

#[test]
fn unknown_format() {
    assert_eq!(Format::from_path(Path::new("boxlay.ini")), Format::Unknown);
}

#[cfg(feature = "serde")]
#[test]
fn unsupported_extension_is_an_error() {
    let options = Options {
        config_path: temp_path("config.ini"),
        config_mode: ConfigMode::Read,
    };
    assert!(matches!(
        options.read_config(),
        Err(Error::UnsupportedFormat(Format::Unknown))
    ));
}

#[cfg(feature = "json")]
#[test]
fn json_write_default_then_read_write() {
    let path = temp_path("config.json");
    let options = Options {
        config_path: path.clone(),
        config_mode: ConfigMode::WriteDefault,
    };
    assert_eq!(options.read_config().unwrap(), Config::default());
    assert!(path.exists());

    let options = Options {
        config_path: path.clone(),
        config_mode: ConfigMode::ReadWrite,
    };
    let mut config = options.read_config().unwrap();
    config.spacing = 7;
    config.button_text_padding = Size(10, 2);
    options.write_config(&config).unwrap();
    assert_eq!(options.read_config().unwrap(), config);

    std::fs::remove_file(&path).unwrap();
}

#[cfg(feature = "toml")]
#[test]
fn toml_partial_and_invalid() {
    let path = temp_path("config.toml");
    let options = Options {
        config_path: path.clone(),
        config_mode: ConfigMode::Read,
    };

    std::fs::write(&path, "padding = 3\nauto_resize = true\n").unwrap();
    let config = options.read_config().unwrap();
    assert_eq!(config.padding, 3);
    assert!(config.auto_resize);
    assert_eq!(config.spacing, 4);

    std::fs::write(&path, "spacing = -1\n").unwrap();
    assert!(matches!(options.read_config(), Err(Error::Invalid(_))));

    std::fs::remove_file(&path).unwrap();
}

#[cfg(feature = "ron")]
#[test]
fn read_only_mode_does_not_write() {
    let path = temp_path("config.ron");
    let options = Options {
        config_path: path.clone(),
        config_mode: ConfigMode::Read,
    };
    options.write_config(&Config::default()).unwrap();
    assert!(!path.exists());
}
