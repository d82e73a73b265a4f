//! Unit tests for the engine crate.

use std::fs;
use std::time::Duration;

use tempfile::tempdir;

use super::*;

fn reduced_motion() -> LaunchOptions {
    LaunchOptions {
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..LaunchOptions::default()
    }
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn new_app_is_dark_on_first_process() {
    let app = App::default();
    assert!(app.theme_state().dark_mode);
    assert_eq!(app.process_flow().active_id(), ProcessId::Production);
    assert!(!app.nav_open());
    assert!(!app.should_quit());
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn hero_reveals_on_start_and_others_wait() {
    let app = App::default();
    assert!(matches!(
        app.reveal_phase(Section::Hero),
        RevealPhase::Entering { .. }
    ));
    for section in &Section::ALL[1..] {
        assert_eq!(app.reveal_phase(*section), RevealPhase::Hidden, "{section:?}");
    }
}

#[test]
fn launch_options_pick_theme_and_process() {
    let app = App::new(LaunchOptions {
        theme: ThemeMode::Light,
        process: ProcessId::QrScan,
        ..LaunchOptions::default()
    });
    assert_eq!(app.theme_mode(), ThemeMode::Light);
    assert_eq!(app.process_flow().active_process().id, "qrscan");
}

// ============================================================================
// LaunchOptions::resolve
// ============================================================================

fn config_from(text: &str) -> PortfolioConfig {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, text).unwrap();
    PortfolioConfig::load_from(&path).unwrap().unwrap()
}

#[test]
fn resolve_defaults_to_dark_without_sources() {
    let options = LaunchOptions::resolve(None, None, None);
    assert_eq!(options.theme, ThemeMode::Dark);
    assert_eq!(options.persistence, ThemePersistence::Off);
    assert_eq!(options.ui_options, UiOptions::default());
}

#[test]
fn resolve_precedence_cli_env_config() {
    let config = config_from("[app]\ntheme = \"light\"\n");

    let from_config = LaunchOptions::resolve(None, None, Some(&config));
    assert_eq!(from_config.theme, ThemeMode::Light);

    let from_env = LaunchOptions::resolve(None, Some(ThemeMode::Dark), Some(&config));
    assert_eq!(from_env.theme, ThemeMode::Dark);

    let from_cli = LaunchOptions::resolve(
        Some(ThemeMode::Light),
        Some(ThemeMode::Dark),
        Some(&config),
    );
    assert_eq!(from_cli.theme, ThemeMode::Light);
}

#[test]
fn resolve_carries_ui_options_and_keeps_persistence_opt_in() {
    let config = config_from("[app]\nascii_only = true\nhigh_contrast = true\n");
    let options = LaunchOptions::resolve(None, None, Some(&config));
    assert!(options.ui_options.ascii_only);
    assert!(options.ui_options.high_contrast);
    assert!(!options.ui_options.reduced_motion);
    assert_eq!(options.persistence, ThemePersistence::Off);
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn toggle_twice_returns_to_dark() {
    let mut app = App::default();
    app.toggle_theme();
    assert!(!app.theme_state().dark_mode);
    app.toggle_theme();
    assert!(app.theme_state().dark_mode);
}

#[test]
fn toggle_writes_theme_when_persistence_is_on() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "# keep me\n[app]\nremember_theme = true\n").unwrap();

    let mut app = App::new(LaunchOptions {
        persistence: ThemePersistence::ConfigFile(path.clone()),
        ..LaunchOptions::default()
    });
    app.toggle_theme();

    let config = PortfolioConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.theme(), Some(ThemeMode::Light));
    assert!(fs::read_to_string(&path).unwrap().contains("# keep me"));

    app.toggle_theme();
    let config = PortfolioConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.theme(), Some(ThemeMode::Dark));
}

#[test]
fn failed_persist_does_not_block_toggle() {
    let dir = tempdir().unwrap();
    // A directory in place of the file makes the write fail.
    let path = dir.path().join("config.toml");
    fs::create_dir(&path).unwrap();

    let mut app = App::new(LaunchOptions {
        persistence: ThemePersistence::ConfigFile(path),
        ..LaunchOptions::default()
    });
    app.toggle_theme();
    assert_eq!(app.theme_mode(), ThemeMode::Light);
}

#[test]
fn hand_edited_config_does_not_break_toggle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "app = \"oops\"\n").unwrap();

    let mut app = App::new(LaunchOptions {
        persistence: ThemePersistence::ConfigFile(path.clone()),
        ..LaunchOptions::default()
    });
    app.toggle_theme();
    app.toggle_theme();
    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    assert_eq!(fs::read_to_string(&path).unwrap(), "app = \"oops\"\n");
}

// ============================================================================
// Process flow
// ============================================================================

#[test]
fn switching_process_starts_slide_in() {
    let mut app = App::default();
    assert_eq!(app.process_effect_phase(), AnimPhase::Completed);

    app.select_process(ProcessId::Qc);
    assert!(matches!(
        app.process_effect_phase(),
        AnimPhase::Running { .. }
    ));
    assert_eq!(app.process_flow().active_process().title, "B. QC 성적서 등록");

    app.advance_animations(PROCESS_SWITCH_DURATION);
    assert_eq!(app.process_effect_phase(), AnimPhase::Completed);
}

#[test]
fn reselecting_active_process_keeps_effect_idle() {
    let mut app = App::default();
    app.select_process(ProcessId::Production);
    assert_eq!(app.process_effect_phase(), AnimPhase::Completed);
}

#[test]
fn next_and_previous_wrap() {
    let mut app = App::default();
    app.select_previous_process();
    assert_eq!(app.process_flow().active_id(), ProcessId::Feedback);
    app.select_next_process();
    assert_eq!(app.process_flow().active_id(), ProcessId::Production);
}

#[test]
fn reduced_motion_skips_slide_in() {
    let mut app = App::new(reduced_motion());
    app.select_process(ProcessId::Feedback);
    assert_eq!(app.process_effect_phase(), AnimPhase::Completed);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn choosing_nav_item_queues_jump_and_closes_drawer() {
    let mut app = App::default();
    app.toggle_nav();
    assert!(app.nav_open());

    app.choose_nav(1);
    assert!(!app.nav_open());
    assert_eq!(app.take_pending_jump(), Some(Section::Process));
    assert_eq!(app.take_pending_jump(), None);
}

#[test]
fn choosing_missing_nav_item_is_ignored() {
    let mut app = App::default();
    app.toggle_nav();
    app.choose_nav(6);
    assert!(app.nav_open());
    assert_eq!(app.take_pending_jump(), None);
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn scrolling_is_clamped_to_content() {
    let mut app = App::default();
    app.update_viewport(10, 50);

    app.scroll_by(-3);
    assert_eq!(app.scroll_offset(), 0);

    app.scroll_to_bottom();
    assert_eq!(app.scroll_offset(), 40);

    app.scroll_by(5);
    assert_eq!(app.scroll_offset(), 40);

    app.scroll_to_top();
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn page_down_moves_by_viewport_minus_overlap() {
    let mut app = App::default();
    app.update_viewport(12, 100);
    app.page_down();
    assert_eq!(app.scroll_offset(), 10);
    app.page_up();
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn short_content_cannot_scroll() {
    let mut app = App::default();
    app.update_viewport(40, 10);
    app.page_down();
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn shrinking_content_pulls_offset_back() {
    let mut app = App::default();
    app.update_viewport(10, 100);
    app.scroll_to(80);
    app.update_viewport(10, 30);
    assert_eq!(app.scroll_offset(), 20);
}

// ============================================================================
// Reveal
// ============================================================================

#[test]
fn sections_reveal_once_and_stay_shown() {
    let mut app = App::default();
    app.mark_visible(Section::Api);
    assert!(matches!(
        app.reveal_phase(Section::Api),
        RevealPhase::Entering { .. }
    ));

    app.advance_animations(SECTION_REVEAL_DURATION + Duration::from_millis(1));
    assert_eq!(app.reveal_phase(Section::Api), RevealPhase::Shown);

    app.mark_visible(Section::Api);
    assert_eq!(app.reveal_phase(Section::Api), RevealPhase::Shown);
}

#[test]
fn reduced_motion_reveals_instantly() {
    let mut app = App::new(reduced_motion());
    assert_eq!(app.reveal_phase(Section::Hero), RevealPhase::Shown);
    app.mark_visible(Section::Goals);
    assert_eq!(app.reveal_phase(Section::Goals), RevealPhase::Shown);
}

#[test]
fn quit_flag() {
    let mut app = App::default();
    app.request_quit();
    assert!(app.should_quit());
}
