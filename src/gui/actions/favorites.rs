// src/gui/actions/favorites.rs
use crate::gui::app::App;

/// Card click in the results grid.
pub fn toggle(app: &mut App, id: u64) {
    match app.session.toggle(id) {
        Ok(true) => app.status("Added to favorites"),
        Ok(false) => app.status("Removed from favorites"),
        Err(e) => {
            loge!("UI: Toggle id={} failed: {}", id, e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// ✖ on a favorite card.
pub fn remove(app: &mut App, id: u64) {
    match app.session.remove(id) {
        Ok(Some(show)) => app.status(format!("Removed \"{}\"", show.name)),
        Ok(None) => {}
        Err(e) => {
            loge!("UI: Remove id={} failed: {}", id, e);
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn reset(app: &mut App) {
    match app.session.reset() {
        Ok(()) => app.status("Favorites cleared"),
        Err(e) => {
            loge!("UI: Reset failed: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
