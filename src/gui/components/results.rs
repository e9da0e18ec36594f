// src/gui/components/results.rs
//
// Central grid of search results. Click a card to toggle it as a favorite.

use eframe::egui;
use crate::{
    config::consts::{CARD_H, CARD_W},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let results = app.session.results();

    if results.is_empty() {
        ui.centered_and_justified(|ui| {
            if app.session.last_query().is_empty() {
                ui.label("Search for a show to get started");
            } else if !app.running {
                ui.label(format!("No shows found for \"{}\"", app.session.last_query()));
            }
        });
        return;
    }

    let mut clicked: Option<u64> = None;

    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for show in results {
                    let resp = super::card::draw(ui, "result", show, egui::vec2(CARD_W, CARD_H))
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(if show.favorite { "Click to unfavorite" } else { "Click to favorite" });
                    if resp.clicked() {
                        clicked = Some(show.id);
                    }
                }
            });
        });

    // Mutate after the borrow of results ends
    if let Some(id) = clicked {
        logd!("UI: Result card clicked id={}", id);
        actions::toggle(app, id);
    }
}
