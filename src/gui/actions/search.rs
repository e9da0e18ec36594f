// src/gui/actions/search.rs
use std::{sync::Arc, thread};

use eframe::egui;

use crate::{
    Result,
    directory::SearchHit,
    gui::{app::App, progress::GuiProgress},
    session::Ticket,
};

/// A worker's answer for one ticket.
pub struct SearchDone {
    pub ticket: Ticket,
    pub hits: Result<Vec<SearchHit>>,
}

/// Issue a ticket and fetch on a worker thread. An in-flight search is
/// superseded: its answer is dropped when it arrives.
pub fn search(app: &mut App, ctx: &egui::Context) {
    let query = app.state.gui.query.trim().to_string();

    let ticket = match app.session.begin_search(&query) {
        Ok(t) => t,
        Err(e) => {
            logd!("UI: Search refused: {}", e);
            app.status(format!("{e}"));
            return;
        }
    };

    app.running = true;
    app.status(format!("Searching \"{}\"…", query));

    let directory = Arc::clone(&app.directory);
    let tx = app.search_tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let hits = directory.search(&query);
        // Receiver gone means the window closed; nothing to report to
        let _ = tx.send(SearchDone { ticket, hits });
        ctx.request_repaint();
    });
}

/// Drain finished searches. Called once per frame.
pub fn poll_search(app: &mut App) {
    while let Ok(done) = app.search_rx.try_recv() {
        let is_latest = app.session.latest_ticket() == Some(done.ticket);
        let mut prog = GuiProgress::new(app.status.clone());

        match app.session.finish_search(done.ticket, done.hits, Some(&mut prog)) {
            Ok(Some(n)) => logd!("UI: Showing {} result(s)", n),
            Ok(None) => {}
            Err(e) => app.status(format!("Error: {e}")),
        }

        if is_latest {
            app.running = false;
        }
    }
}
