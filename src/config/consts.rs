// src/config/consts.rs

// Directory API
pub const API_BASE: &str = "https://api.tvmaze.com";
pub const SEARCH_PATH: &str = "/search/shows";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("tv_favs/", env!("CARGO_PKG_VERSION"));

// Shown when the directory has no poster for a show
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/210x295/ffffff/666666/?text=TV";

// Local storage
pub const STORE_DIR: &str = ".store";
pub const FAVORITES_KEY: &str = "favoriteShows";
pub const LOG_FILE: &str = "debug.log";

// Environment overrides
pub const ENV_API_BASE: &str = "TV_FAVS_API_BASE";
pub const ENV_STORE_DIR: &str = "TV_FAVS_STORE";

// Cards
pub const CARD_W: f32 = 210.0;
pub const CARD_H: f32 = 295.0;
pub const FAV_CARD_W: f32 = 105.0;
pub const FAV_CARD_H: f32 = 147.5;
