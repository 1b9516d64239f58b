// SPDX-License-Identifier: MPL-2.0
use poster_gallery::app::config::{self, Config};
use poster_gallery::app::{menu_overlay_visible, App, Message};
use poster_gallery::application::port::UrlOpener;
use poster_gallery::domain::exhibition::{POSTERS, TOPICS};
use poster_gallery::domain::navigation::{Section, NAV_ITEMS};
use poster_gallery::error::Result;
use poster_gallery::i18n::fluent::I18n;
use poster_gallery::ui::navbar;
use poster_gallery::ui::sections::{self, Artwork, ContentBlock};
use poster_gallery::ui::theming::ThemeMode;
use tempfile::tempdir;

struct NoopOpener;

impl UrlOpener for NoopOpener {
    fn open(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-gallery"), "Gallery");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_every_locale_translates_all_visible_keys() {
    let mut keys = vec!["window-title", "hero-title", "topics-title", "about-title"];
    keys.extend(NAV_ITEMS.iter().map(|item| item.label_key));
    keys.extend(TOPICS.iter().flat_map(|t| [t.name_key, t.description_key]));

    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for key in &keys {
            let text = i18n.tr(key);
            assert!(!text.starts_with("MISSING"), "{locale}: {key} is missing");
        }
    }
}

#[test]
fn test_config_sections_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.display.large_breakpoint = Some(1200.0);
    cfg.animation.enabled = false;
    config::save_to_path(&cfg, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, cfg);
}

#[test]
fn test_landing_scenarios_through_app() {
    let cfg = Config::default();
    let mut app = App::with_parts(
        &cfg,
        I18n::new(Some("en-US".into()), &cfg),
        Artwork::default(),
        Box::new(NoopOpener),
    );

    // Scenario A: desktop selection of Gallery.
    let _ = app.update(Message::Navbar(navbar::Message::SelectSection(Section::Gallery)));
    assert_eq!(app.state().active_section(), Section::Gallery);
    assert!(matches!(
        sections::select(app.state().active_section(), app.viewport()),
        ContentBlock::Gallery(_)
    ));

    // Scenario B: compact window, open the menu, then choose Home.
    let _ = app.update(Message::WindowResized(iced::Size::new(420.0, 800.0)));
    let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
    assert!(menu_overlay_visible(app.state(), app.viewport()));
    let _ = app.update(Message::MobileMenu(
        poster_gallery::ui::mobile_menu::Message::SelectSection(Section::Home),
    ));
    assert_eq!(app.state().active_section(), Section::Home);
    assert!(!app.state().is_mobile_menu_open());
    assert_eq!(
        sections::select(Section::Home, app.viewport()).parts().len(),
        3
    );
}

#[test]
fn test_catalog_sizes() {
    assert_eq!(POSTERS.len(), 6);
    assert_eq!(TOPICS.len(), 5);
    assert_eq!(NAV_ITEMS.len(), 2);
}
