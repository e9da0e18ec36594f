// src/session.rs
//
// The one owned application state: current results, favorites, and where
// favorites are persisted. Every mutation goes through here so the favorite
// flags on result copies and the stored value never drift.

use crate::{
    Error, Result, Show,
    directory::{self, Directory, SearchHit},
    favorites::Favorites,
    progress::Progress,
    store::{self, Storage},
};

/// Number handed out per search; only the latest one may land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

pub struct Session {
    results: Vec<Show>,
    favorites: Favorites,
    storage: Box<dyn Storage>,
    last_query: String,
    issued: u64,
}

impl Session {
    /// Empty session; call `load` to pull persisted favorites.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            results: Vec::new(),
            favorites: Favorites::new(),
            storage,
            last_query: String::new(),
            issued: 0,
        }
    }

    /// Replace favorites wholesale with what storage holds.
    /// On error favorites are left empty. Returns the number loaded.
    pub fn load(&mut self) -> Result<usize> {
        let loaded = match store::load(self.storage.as_ref()) {
            Ok(favs) => {
                self.favorites = favs.unwrap_or_default();
                logf!("Session: Loaded {} favorite(s)", self.favorites.len());
                Ok(self.favorites.len())
            }
            Err(e) => {
                self.favorites.reset();
                Err(e)
            }
        };
        self.refresh_flags();
        loaded
    }

    pub fn results(&self) -> &[Show] { &self.results }
    pub fn favorites(&self) -> &Favorites { &self.favorites }
    pub fn last_query(&self) -> &str { &self.last_query }

    /// Favorites panel is hidden while empty.
    pub fn favorites_visible(&self) -> bool { !self.favorites.is_empty() }

    /* ---------- search ---------- */

    /// Blocking search: fetch, normalize, replace results.
    pub fn search(
        &mut self,
        dir: &dyn Directory,
        query: &str,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<usize> {
        let ticket = self.begin_search(query)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Searching \"{}\"…", query.trim()));
        }
        let hits = dir.search(query);
        let applied = self.finish_search(ticket, hits, progress)?;
        Ok(applied.unwrap_or(0))
    }

    /// Validate the query and issue a ticket for it.
    pub fn begin_search(&mut self, query: &str) -> Result<Ticket> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        self.issued += 1;
        self.last_query = s!(query);
        logf!("Search: Begin #{} q={:?}", self.issued, query);
        Ok(Ticket(self.issued))
    }

    /// The ticket issued most recently, if any.
    pub fn latest_ticket(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    /// Apply a search response. Responses for superseded tickets are dropped
    /// and yield `Ok(None)`; otherwise the results are replaced and the new
    /// count returned. On error the previous results stay.
    pub fn finish_search(
        &mut self,
        ticket: Ticket,
        hits: Result<Vec<SearchHit>>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Option<usize>> {
        if Some(ticket) != self.latest_ticket() {
            logw!("Search: Dropping stale response #{} (latest #{})", ticket.0, self.issued);
            return Ok(None);
        }

        let hits = match hits {
            Ok(h) => h,
            Err(e) => {
                loge!("Search: Error #{}: {}", ticket.0, e);
                return Err(e);
            }
        };

        if let Some(p) = progress.as_deref_mut() { p.begin(hits.len()); }
        let results = directory::normalize(hits, &self.favorites);
        if let Some(p) = progress.as_deref_mut() {
            for show in &results { p.item_done(show.id); }
            p.finish();
        }

        logf!("Search: OK #{} results={}", ticket.0, results.len());
        self.results = results;
        Ok(Some(self.results.len()))
    }

    /* ---------- favorites ---------- */

    /// Flip a show's favorite state. Looks in results first, then favorites.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let show = self.results.iter()
            .chain(self.favorites.iter())
            .find(|s| s.id == id)
            .cloned()
            .ok_or(Error::UnknownShow(id))?;

        let now = self.favorites.toggle(show);
        logf!("Favorites: Toggle id={} → {}", id, now);
        self.after_mutation()?;
        Ok(now)
    }

    /// Remove by id. `Ok(None)` if it wasn't a favorite (nothing persisted).
    pub fn remove(&mut self, id: u64) -> Result<Option<Show>> {
        let Some(gone) = self.favorites.remove(id) else {
            logd!("Favorites: Remove id={} (not a favorite)", id);
            return Ok(None);
        };
        logf!("Favorites: Removed id={} name={:?}", id, gone.name);
        self.after_mutation()?;
        Ok(Some(gone))
    }

    pub fn reset(&mut self) -> Result<()> {
        logf!("Favorites: Reset ({} removed)", self.favorites.len());
        self.favorites.reset();
        self.after_mutation()
    }

    fn after_mutation(&mut self) -> Result<()> {
        logd!("Favorites: Panel visible={}", self.favorites_visible());
        self.refresh_flags();
        store::save(&self.favorites, self.storage.as_mut())
    }

    fn refresh_flags(&mut self) {
        let favs = &self.favorites;
        for show in &mut self.results {
            show.favorite = favs.is_favorite(show.id);
        }
    }
}
