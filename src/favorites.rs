// src/favorites.rs
use crate::Show;

/// The user's favorites: unique by id, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    shows: Vec<Show>,
}

impl Favorites {
    pub fn new() -> Self { Self::default() }

    /// Build from stored records. Later duplicates of an id are dropped.
    pub fn from_shows(shows: Vec<Show>) -> Self {
        let mut favs = Self::new();
        for show in shows {
            favs.add(show);
        }
        favs
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.shows.iter().any(|s| s.id == id)
    }

    /// Appends unless already present. Returns true if the list changed.
    pub fn add(&mut self, mut show: Show) -> bool {
        if self.is_favorite(show.id) {
            return false;
        }
        show.favorite = true;
        self.shows.push(show);
        true
    }

    /// Removes the entry with this id, handing it back unflagged.
    pub fn remove(&mut self, id: u64) -> Option<Show> {
        let ix = self.shows.iter().position(|s| s.id == id)?;
        let mut show = self.shows.remove(ix);
        show.favorite = false;
        Some(show)
    }

    /// Add if absent, remove if present. Returns the new favorite state.
    pub fn toggle(&mut self, show: Show) -> bool {
        if self.remove(show.id).is_some() {
            false
        } else {
            self.add(show)
        }
    }

    pub fn reset(&mut self) {
        self.shows.clear();
    }

    pub fn len(&self) -> usize { self.shows.len() }
    pub fn is_empty(&self) -> bool { self.shows.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Show> { self.shows.iter() }
    pub fn as_slice(&self) -> &[Show] { &self.shows }

    pub fn ids(&self) -> Vec<u64> {
        self.shows.iter().map(|s| s.id).collect()
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a Show;
    type IntoIter = std::slice::Iter<'a, Show>;
    fn into_iter(self) -> Self::IntoIter { self.shows.iter() }
}
