// src/gui/components/favorites_panel.rs
//
// Left panel listing favorites, each with a remove button, plus Reset.
// Only drawn while there is at least one favorite.

use eframe::egui;
use crate::{
    config::consts::{FAV_CARD_H, FAV_CARD_W},
    gui::{actions, app::App},
};

enum Click {
    Remove(u64),
    Reset,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let favorites = app.session.favorites();
    let mut click: Option<Click> = None;

    ui.horizontal(|ui| {
        ui.heading(format!("Favorites ({})", favorites.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reset").on_hover_text("Remove all favorites").clicked() {
                click = Some(Click::Reset);
            }
        });
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("favorites_scroll")
        .show(ui, |ui| {
            for show in favorites {
                ui.horizontal(|ui| {
                    super::card::draw(ui, "favorite", show, egui::vec2(FAV_CARD_W, FAV_CARD_H));
                    if ui.small_button("✖").on_hover_text("Remove from favorites").clicked() {
                        click = Some(Click::Remove(show.id));
                    }
                });
                ui.add_space(6.0);
            }
        });

    match click {
        Some(Click::Remove(id)) => {
            logd!("UI: Favorite remove clicked id={}", id);
            actions::remove(app, id);
        }
        Some(Click::Reset) => {
            logd!("UI: Favorites reset clicked");
            actions::reset(app);
        }
        None => {}
    }
}
