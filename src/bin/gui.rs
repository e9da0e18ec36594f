// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use tv_favs::{config::{options::AppOptions, state::AppState}, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    let state = AppState::new(AppOptions::from_env());
    tv_favs::log::init(state.options.store.log_path());

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("TV Favorites")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
