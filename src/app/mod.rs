// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the registration form to localization, toasts and
//! persisted preferences, and turns controller outcomes into tasks (file
//! dialogs, decodes, timers).

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::form::FormController;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: FormController,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Instant the current frame is rendered for. Refreshed on every update
    /// so views stay pure.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("submitting", &self.form.is_submitting())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
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

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            form: FormController::new(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            now: Instant::now(),
        }
    }
}

impl App {
    /// Loads preferences and builds the initial state.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        tracing::info!(locale = %i18n.current_locale(), "starting");

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.form.is_animating(Instant::now()),
            self.notifications.has_notifications(),
        );

        Subscription::batch([subscription::create_event_subscription(), tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(now) => *now,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            form: &mut self.form,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Dialog(dialog_message) => {
                update::handle_dialog_message(&mut ctx, dialog_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::LanguageSelected(locale) => update::handle_language_selected(&mut ctx, locale),
            Message::FileChosen { kind, path } => update::handle_file_chosen(&mut ctx, kind, path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::VideoThumbnailExtracted { path, result } => {
                update::handle_video_thumbnail(&mut ctx, path, result)
            }
            Message::SelfieDecoded { path, result } => {
                update::handle_selfie_decoded(&mut ctx, path, result)
            }
            Message::SubmissionCompleted => {
                ctx.form.on_submission_completed();
                Task::none()
            }
            Message::ShakeElapsed => {
                ctx.form.on_shake_elapsed();
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            notifications: &self.notifications,
            now: self.now,
        })
    }

    /// Read access for integration tests and embedders.
    #[must_use]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
