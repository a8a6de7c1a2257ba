//! Visitor Pass - building entry registration form
//!
//! Built with GPUI. The visitor fills in who they are and whom they visit;
//! the request is handed over to the security desk.

mod api;
mod app;
mod components;
mod config;
mod error;
mod form;
mod handlers;
mod models;
mod schema;
mod theme;

use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing_subscriber::EnvFilter;

use app::App;
use config::AppConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid configuration, using defaults");
        AppConfig::default()
    });
    tracing::info!(
        variant = ?config.variant,
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        "starting visitor pass"
    );

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.), px(900.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Форма посетителя")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(config.clone(), window, cx));

            // Focus the first field so the visitor can start typing
            let form = app_entity.read(cx).form.clone();
            form.update(cx, |form, cx| {
                form.focus_first(window, cx);
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        if let Err(err) = opened {
            tracing::error!(error = %err, "failed to open window");
            cx.quit();
        }
    });
}
