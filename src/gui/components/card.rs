// src/gui/components/card.rs
//
// One show card: poster on top, title below. Favorited cards get an accent
// fill and a star. The whole card is one click target, keyed by show id so
// egui keeps its state across frames and re-searches.

use eframe::egui::{self, Color32, Sense, Stroke, Vec2};
use crate::Show;

const FAV_FILL: Color32 = Color32::from_rgb(255, 214, 102);
const FAV_TEXT: Color32 = Color32::from_rgb(40, 40, 40);

pub fn draw(ui: &mut egui::Ui, salt: &str, show: &Show, poster: Vec2) -> egui::Response {
    let visuals = ui.visuals();
    let (fill, stroke, text) = if show.favorite {
        (FAV_FILL, Stroke::new(2.0, FAV_FILL), FAV_TEXT)
    } else {
        (visuals.faint_bg_color, visuals.widgets.noninteractive.bg_stroke, visuals.text_color())
    };

    let inner = egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(4.0)
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(poster.x);
            ui.vertical(|ui| {
                ui.add(
                    egui::Image::new(show.image.as_str())
                        .fit_to_exact_size(poster)
                        .show_loading_spinner(true),
                );
                let title = if show.favorite { join!("★ ", &show.name) } else { show.name.clone() };
                ui.add(egui::Label::new(egui::RichText::new(title).color(text).strong()).truncate().selectable(false))
                    .on_hover_text(show.name.as_str());
            });
        });

    ui.interact(inner.response.rect, ui.id().with((salt, show.id)), Sense::click())
}
