// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub store: StoreOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            store: StoreOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, then `TV_FAVS_API_BASE` / `TV_FAVS_STORE` if set and non-blank.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(base) = env_nonblank(ENV_API_BASE) {
            opts.api.set_base_url(&base);
        }
        if let Some(dir) = env_nonblank(ENV_STORE_DIR) {
            opts.store.dir = PathBuf::from(dir);
        }
        opts
    }
}

fn env_nonblank(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(API_BASE),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiOptions {
    pub fn base_url(&self) -> &str { &self.base_url }

    /// Trailing slashes are dropped so paths can be appended verbatim.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = s!(url.trim().trim_end_matches('/'));
    }

    pub fn search_url(&self) -> String {
        join!(&self.base_url, SEARCH_PATH)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
    /// false → favorites live in memory only for this run
    pub persist: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            persist: true,
        }
    }
}

impl StoreOptions {
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}
