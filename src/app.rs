//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief:

use std::rc::Rc;

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, px,
    size,
};
use log::{error, info};

use snake_ladder_score::{FileStore, config::Config};

use crate::screen::{Cancel, Confirm, NextField, PrevField, Quit, ScoreScreen};

const WINDOW_WIDTH: f32 = 560.;
const WINDOW_HEIGHT: f32 = 900.;

pub fn run() {
    let store = Rc::new(FileStore::new(Config::from_env().store_path));
    info!("keeping scores in {}", store.path().display());

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("tab", NextField, None),
            KeyBinding::new("shift-tab", PrevField, None),
            KeyBinding::new("enter", Confirm, None),
            KeyBinding::new("escape", Cancel, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        let bounds = Bounds::centered(None, size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)), cx);
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            move |_, cx| cx.new(|cx| ScoreScreen::new(store, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                error!("failed to open window: {err:#}");
                cx.quit();
                return;
            }
        };

        if let Err(err) = window.update(cx, |view: &mut ScoreScreen, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        }) {
            error!("failed to focus score screen: {err:#}");
        }

        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.activate(true);
    });
}
