// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the navigation controller, localization, layout
//! tracking and transitions together, and routes every message through the
//! handlers in [`update`].

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::menu_overlay_visible;

use crate::application::navigation::NavigationController;
use crate::application::port::UrlOpener;
use crate::domain::navigation::{Section, ViewState};
use crate::i18n::fluent::I18n;
use crate::infrastructure::browser::SystemBrowser;
use crate::ui::notice::Notice;
use crate::ui::responsive::{Breakpoints, Viewport};
use crate::ui::sections::Artwork;
use crate::ui::theming::AppTheme;
use crate::ui::transition::Transition;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigation: NavigationController,
    viewport: Viewport,
    theme: AppTheme,
    artwork: Artwork,
    notice: Notice,
    /// Fade and slide-in of the content block.
    section_transition: Transition,
    /// Fade-in of the overlay menu.
    menu_transition: Transition,
    /// Clock used by the view to sample transitions.
    now: Instant,
    opener: Box<dyn UrlOpener>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", self.navigation.state())
            .field("viewport", &self.viewport)
            .field("notice", &self.notice)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, localization and artwork, then applies the CLI start
    /// section.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());

        let (config, config_warning) = config::load();
        let assets_dir = paths::get_assets_dir(config.display.assets_dir.clone());
        let artwork = Artwork::load(&assets_dir);

        let mut app = Self::with_parts(
            &config,
            I18n::new(flags.lang.clone(), &config),
            artwork,
            Box::new(SystemBrowser),
        );

        if let Some(key) = config_warning {
            app.notice.show(key);
        }
        if let Some(id) = flags.section.as_deref() {
            update::handle_start_section(&mut app.update_context(), id);
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            assets = %assets_dir.display(),
            "application started"
        );

        (app, Task::none())
    }

    /// Assembles an app from already loaded parts, in the `(Home, closed)`
    /// state.
    pub fn with_parts(
        config: &Config,
        i18n: I18n,
        artwork: Artwork,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        let duration = config.animation.duration();
        Self {
            i18n,
            navigation: NavigationController::new(),
            viewport: Viewport::new(
                WINDOW_DEFAULT_WIDTH as f32,
                Breakpoints::from_config(&config.display),
            ),
            theme: AppTheme::new(config.general.theme_mode),
            artwork,
            notice: Notice::default(),
            section_transition: Transition::new(duration),
            menu_transition: Transition::new(duration),
            now: Instant::now(),
            opener,
        }
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        self.navigation.state()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Window title, suffixed with the section name outside of Home.
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.state().active_section() {
            Section::Home => app_name,
            Section::Gallery => format!("{} - {app_name}", self.i18n.tr("nav-gallery")),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            &[&self.section_transition, &self.menu_transition],
            self.now,
        );
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::MobileMenu(msg) => update::handle_mobile_menu_message(&mut ctx, msg),
            Message::Sections(msg) => update::handle_sections_message(&mut ctx, msg),
            Message::Notice(msg) => ctx.notice.update(msg),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::CloseMenu => update::handle_close_menu(&mut ctx),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: self.navigation.state(),
            viewport: &self.viewport,
            colors: self.theme.colors,
            artwork: &self.artwork,
            notice: &self.notice,
            section_transition: &self.section_transition,
            menu_transition: &self.menu_transition,
            now: self.now,
        })
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            navigation: &mut self.navigation,
            viewport: &mut self.viewport,
            section_transition: &mut self.section_transition,
            menu_transition: &mut self.menu_transition,
            now: &mut self.now,
            notice: &mut self.notice,
            opener: self.opener.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exhibition::{GALLERY_EMBED_COMPACT, GALLERY_EMBED_WIDE, PROFILE_URL};
    use crate::error::{Error, Result};
    use crate::ui::{mobile_menu, navbar, notice, sections};
    use iced::Size;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().expect("lock").push(url.to_string());
            if self.fail {
                Err(Error::Launch("no browser".into()))
            } else {
                Ok(())
            }
        }
    }

    fn app_with(opener: RecordingOpener) -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        App::with_parts(&config, i18n, Artwork::default(), Box::new(opener))
    }

    fn app() -> App {
        app_with(RecordingOpener::default())
    }

    fn resize(app: &mut App, width: f32) {
        let _ = app.update(Message::WindowResized(Size::new(width, 800.0)));
    }

    fn snapshot(app: &App) -> (Section, bool) {
        (app.state().active_section(), app.state().is_mobile_menu_open())
    }

    #[test]
    fn starts_on_home_with_menu_closed() {
        let app = app();
        assert_eq!(snapshot(&app), (Section::Home, false));
    }

    #[test]
    fn desktop_nav_selects_gallery() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectSection(
            Section::Gallery,
        )));
        assert_eq!(snapshot(&app), (Section::Gallery, false));
        assert!(app.title().starts_with("Gallery"));
    }

    #[test]
    fn mobile_menu_selection_closes_menu() {
        let mut app = app();
        resize(&mut app, 400.0);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert_eq!(snapshot(&app), (Section::Home, true));
        assert!(menu_overlay_visible(app.state(), app.viewport()));

        let _ = app.update(Message::MobileMenu(mobile_menu::Message::SelectSection(
            Section::Gallery,
        )));
        assert_eq!(snapshot(&app), (Section::Gallery, false));
        assert!(!menu_overlay_visible(app.state(), app.viewport()));
    }

    #[test]
    fn explore_button_opens_gallery() {
        let mut app = app();
        let _ = app.update(Message::Sections(sections::Message::ExploreGallery));
        assert_eq!(snapshot(&app), (Section::Gallery, false));
    }

    #[test]
    fn widening_past_large_breakpoint_closes_menu() {
        let mut app = app();
        resize(&mut app, 500.0);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.state().is_mobile_menu_open());

        resize(&mut app, 1400.0);
        assert_eq!(snapshot(&app), (Section::Home, false));
    }

    #[test]
    fn narrowing_keeps_state() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectSection(
            Section::Gallery,
        )));
        resize(&mut app, 360.0);
        assert_eq!(snapshot(&app), (Section::Gallery, false));
    }

    #[test]
    fn escape_and_close_button_close_menu() {
        let mut app = app();
        resize(&mut app, 500.0);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::CloseMenu);
        assert!(!app.state().is_mobile_menu_open());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::MobileMenu(mobile_menu::Message::Close));
        assert!(!app.state().is_mobile_menu_open());

        let _ = app.update(Message::CloseMenu);
        assert!(!app.state().is_mobile_menu_open());
    }

    #[test]
    fn outbound_link_leaves_state_unchanged() {
        let opener = RecordingOpener::default();
        let mut app = app_with(opener.clone());
        let before = snapshot(&app);

        let _ = app.update(Message::Sections(sections::Message::OpenUrl(PROFILE_URL)));

        assert_eq!(snapshot(&app), before);
        assert_eq!(opener.opened.lock().expect("lock").as_slice(), [PROFILE_URL]);
        assert_eq!(app.notice().key(), None);
    }

    #[test]
    fn failed_launch_shows_notice() {
        let opener = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };
        let mut app = app_with(opener);

        let _ = app.update(Message::Sections(sections::Message::OpenUrl(
            GALLERY_EMBED_WIDE.url,
        )));
        assert_eq!(app.notice().key(), Some("error-open-link"));
        assert_eq!(snapshot(&app), (Section::Home, false));

        let _ = app.update(Message::Notice(notice::Message::Dismiss));
        assert_eq!(app.notice().key(), None);
    }

    #[test]
    fn invalid_start_section_is_ignored() {
        let mut app = app();
        update::handle_start_section(&mut app.update_context(), "contact");
        assert_eq!(snapshot(&app), (Section::Home, false));

        update::handle_start_section(&mut app.update_context(), "gallery");
        assert_eq!(snapshot(&app), (Section::Gallery, false));
    }

    #[test]
    fn gallery_embed_follows_width_only() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectSection(
            Section::Gallery,
        )));

        resize(&mut app, 1280.0);
        assert_eq!(app.viewport().gallery_variant().embed(), GALLERY_EMBED_WIDE);
        resize(&mut app, 400.0);
        assert_eq!(app.viewport().gallery_variant().embed(), GALLERY_EMBED_COMPACT);
        assert_eq!(snapshot(&app), (Section::Gallery, false));
    }

    #[test]
    fn section_change_starts_transition_and_tick_finishes_it() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectSection(
            Section::Gallery,
        )));
        assert!(app.section_transition.is_running(app.now));

        let later = app.now + std::time::Duration::from_secs(10);
        let _ = app.update(Message::Tick(later));
        assert!(!app.section_transition.is_running(app.now));
    }

    #[test]
    fn reselecting_current_section_does_not_restart_transition() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectSection(Section::Home)));
        assert!(!app.section_transition.is_running(app.now));
    }

    #[test]
    fn view_renders_in_every_state() {
        let mut app = app();
        for width in [360.0, 800.0, 1280.0] {
            resize(&mut app, width);
            let _ = app.view();
            let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
            let _ = app.view();
            let _ = app.update(Message::CloseMenu);
        }
    }
}
