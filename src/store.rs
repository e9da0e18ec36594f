// src/store.rs
//
// Durable key/value slots plus the favorites save/load bridge on top of them.

use std::{collections::HashMap, fs, io, path::PathBuf};

use crate::{
    Error, Result, Show,
    config::consts::FAVORITES_KEY,
    favorites::Favorites,
};

/// String-keyed string storage, shaped like a browser's local storage.
pub trait Storage: Send {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// One file per key: `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(join!(key, ".json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir)?;
        }
        // Write aside, then swap in, so a crash never leaves half a file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local storage; nothing survives the run.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(s!(key), s!(value));
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Serialize favorites as a JSON array under `favoriteShows`.
pub fn save(favorites: &Favorites, storage: &mut dyn Storage) -> Result<()> {
    let text = serde_json::to_string(favorites.as_slice())?;
    storage.set_item(FAVORITES_KEY, &text)?;
    logd!("Store: Saved {} favorite(s)", favorites.len());
    Ok(())
}

/// `None` when nothing was ever saved. A value that isn't an array of show
/// records is reported as `Error::Corrupt`.
pub fn load(storage: &dyn Storage) -> Result<Option<Favorites>> {
    let Some(text) = storage.get_item(FAVORITES_KEY)? else {
        return Ok(None);
    };
    let shows: Vec<Show> = serde_json::from_str(&text).map_err(|source| Error::Corrupt {
        key: s!(FAVORITES_KEY),
        source,
    })?;
    Ok(Some(Favorites::from_shows(shows)))
}
