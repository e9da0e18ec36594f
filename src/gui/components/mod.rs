// src/gui/components/mod.rs
pub mod card;
pub mod favorites_panel;
pub mod results;
pub mod search_bar;
