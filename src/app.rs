// SPDX-License-Identifier: MPL-2.0
//! Application root state for the demo viewer.
//!
//! The `App` struct wires the viewport controller, the canvas widget, and the
//! icon toolbar together, and translates CLI flags and persisted preferences
//! into the viewport's mount-time configuration. This file intentionally
//! keeps policy decisions (window sizing, configuration precedence) close to
//! the main update loop so user-facing behavior is easy to audit.

use crate::config::{self, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::error::{Error, Result};
use crate::ui::icon::{Icon, IconSize};
use crate::ui::viewer;
use iced::widget::{button, center, column, container, image, row, text};
use iced::{window, Alignment, Element, Task, Theme};
use std::path::{Path, PathBuf};

/// Root Iced application state for the demo viewer.
#[derive(Debug)]
pub struct App {
    viewport: viewer::State,
    image: Option<image::Handle>,
    source: Option<PathBuf>,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewport(viewer::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional viewport width override in pixels.
    pub width: Option<f32>,
    /// Optional viewport height override in pixels.
    pub height: Option<f32>,
}

/// Extra window chrome around the fixed-size viewport.
const WINDOW_PADDING: f32 = 48.0;
const TOOLBAR_HEIGHT: f32 = 56.0;

/// Validates an image path and produces a lazily-decoded handle for it.
fn load_image(path: &Path) -> Result<image::Handle> {
    if !path.is_file() {
        return Err(Error::Image(format!("not a readable file: {}", path.display())));
    }
    Ok(image::Handle::from_path(path))
}

/// Builds the window settings sized around the configured viewport.
fn window_settings(viewport_width: f32, viewport_height: f32) -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            viewport_width + WINDOW_PADDING,
            viewport_height + TOOLBAR_HEIGHT + WINDOW_PADDING,
        ),
        resizable: false,
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let config = config::load().unwrap_or_default();
    let width = flags
        .width
        .or(config.viewport_width)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let height = flags
        .height
        .or(config.viewport_height)
        .unwrap_or(DEFAULT_VIEWPORT_HEIGHT);

    iced::application(move || App::new(flags.clone(), &config), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings(width, height))
        .run()
}

impl App {
    /// Assembles the initial state from CLI flags and persisted preferences.
    /// CLI flags win over the config file, which wins over the defaults.
    pub fn new(flags: Flags, config: &config::Config) -> (Self, Task<Message>) {
        let width = flags
            .width
            .or(config.viewport_width)
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
        let height = flags
            .height
            .or(config.viewport_height)
            .unwrap_or(DEFAULT_VIEWPORT_HEIGHT);
        let wheel_step = config
            .wheel_zoom_step
            .unwrap_or(config::DEFAULT_WHEEL_ZOOM_STEP);

        let source = flags.file_path.map(PathBuf::from);
        let image = source.as_deref().and_then(|path| match load_image(path) {
            Ok(handle) => {
                log::info!("loaded image {}", path.display());
                Some(handle)
            }
            Err(err) => {
                log::warn!("skipping image: {}", err);
                None
            }
        });

        let app = Self {
            viewport: viewer::State::new(iced::Size::new(width, height))
                .with_wheel_step(wheel_step),
            image,
            source,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self
            .source
            .as_ref()
            .filter(|_| self.image.is_some())
            .and_then(|p| p.file_name())
        {
            Some(name) => format!("{} - iced_folio", name.to_string_lossy()),
            None => String::from("iced_folio"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewport(msg) => {
                // TransformChanged only requires a repaint, which Iced
                // performs after every update.
                let _ = self.viewport.handle(msg);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let reset = button(
            Icon::new("eo_reset_view")
                .size(IconSize::parse("20"))
                .view(),
        )
        .on_press(Message::Viewport(viewer::Message::Reset));

        let zoom_label = text(format!("{:.0}%", self.viewport.scale() * 100.0)).size(14);

        let toolbar = row![reset, zoom_label]
            .spacing(12)
            .align_y(Alignment::Center);

        let content: Element<'_, Message> = match &self.image {
            Some(handle) => viewer::view(&self.viewport, handle).map(Message::Viewport),
            None => container(center(text("Open an image: iced_folio <path>").size(16)))
                .width(self.viewport.viewport().width)
                .height(self.viewport.viewport().height)
                .into(),
        };

        center(column![toolbar, content].spacing(12).align_x(Alignment::Center)).into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
