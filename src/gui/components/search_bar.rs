// src/gui/components/search_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.heading("TV Shows");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text("Search shows…")
                .desired_width(320.0),
        );
        // Enter in the box submits, like a form
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
            resp.request_focus();
        }

        if ui.button("Search").clicked() {
            submit = true;
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
    ui.add_space(4.0);

    if submit {
        logd!("UI: Search submitted q={:?}", app.state.gui.query);
        actions::search(app, ui.ctx());
    }
}
