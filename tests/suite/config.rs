//! Theme persistence through the config file.

use std::fs;

use qrfolio_config::PortfolioConfig;
use qrfolio_engine::{App, LaunchOptions, ThemeMode, ThemePersistence};
use tempfile::tempdir;

#[test]
fn toggled_theme_survives_reload_with_comments_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "# portfolio settings\n[app]\ntheme = \"dark\" # start dark\nremember_theme = true\n",
    )
    .unwrap();

    let config = PortfolioConfig::load_from(&path).unwrap();
    let mut options = LaunchOptions::resolve(None, None, config.as_ref());
    options.persistence = ThemePersistence::ConfigFile(path.clone());
    let mut app = App::new(options);
    assert_eq!(app.theme_mode(), ThemeMode::Dark);

    app.toggle_theme();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# portfolio settings"));
    assert!(written.contains("remember_theme = true"));
    let reloaded = PortfolioConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(reloaded.theme(), Some(ThemeMode::Light));

    let app = App::new(LaunchOptions::resolve(None, None, Some(&reloaded)));
    assert_eq!(app.theme_mode(), ThemeMode::Light);
}

#[test]
fn toggling_without_remember_leaves_file_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let original = "[app]\ntheme = \"light\"\n";
    fs::write(&path, original).unwrap();

    let config = PortfolioConfig::load_from(&path).unwrap();
    let mut app = App::new(LaunchOptions::resolve(None, None, config.as_ref()));
    assert_eq!(app.theme_mode(), ThemeMode::Light);
    app.toggle_theme();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
