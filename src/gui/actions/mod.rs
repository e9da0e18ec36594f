// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{search, toggle, ...}.

mod favorites; // src/gui/actions/favorites.rs
mod search;    // src/gui/actions/search.rs

pub use favorites::{remove, reset, toggle};
pub use search::{SearchDone, poll_search, search};
