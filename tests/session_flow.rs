// tests/session_flow.rs
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use tv_favs::{Error, Result};
use tv_favs::cli::{self, Params};
use tv_favs::config::consts::{FAVORITES_KEY, PLACEHOLDER_IMAGE};
use tv_favs::directory::{Directory, SearchHit, parse_search_response};
use tv_favs::progress::{NullProgress, Progress};
use tv_favs::session::Session;
use tv_favs::store::{MemoryStorage, Storage};

/// Canned directory: answers every query with the same body.
struct FakeDirectory {
    body: &'static str,
}

impl Directory for FakeDirectory {
    fn search(&self, _query: &str) -> Result<Vec<SearchHit>> {
        parse_search_response(self.body)
    }
}

const BREAKING_BAD: &str = r#"[{"score": 1.0, "show": {"id": 169, "name": "Breaking Bad", "image": null}}]"#;

const THREE: &str = r#"[
  {"show": {"id": 1, "name": "Girls", "image": null}},
  {"show": {"id": 2, "name": "Lost", "image": null}},
  {"show": {"id": 3, "name": "Fargo", "image": null}}
]"#;

/// Storage that lets the test peek at what was written, and how often.
#[derive(Clone, Default)]
struct SharedStorage {
    inner: Arc<Mutex<MemoryStorage>>,
    writes: Arc<AtomicUsize>,
}

impl SharedStorage {
    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn stored_ids(&self) -> Vec<u64> {
        let text = self.get_item(FAVORITES_KEY).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        v.as_array().unwrap().iter().map(|s| s["id"].as_u64().unwrap()).collect()
    }
}

impl Storage for SharedStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.lock().unwrap().get_item(key)
    }
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.lock().unwrap().set_item(key, value)
    }
    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.lock().unwrap().remove_item(key)
    }
}

/// Records which progress callbacks fired.
#[derive(Default)]
struct RecordingProgress {
    began: Option<usize>,
    items: usize,
    finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.began = Some(total); }
    fn item_done(&mut self, _id: u64) { self.items += 1; }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn breaking_bad_search_then_favorite() {
    let storage = SharedStorage::default();
    let mut session = Session::new(Box::new(storage.clone()));
    session.load().unwrap();

    let dir = FakeDirectory { body: BREAKING_BAD };
    assert_eq!(session.search(&dir, "Breaking Bad", Some(&mut NullProgress)).unwrap(), 1);

    let card = &session.results()[0];
    assert_eq!(card.id, 169);
    assert_eq!(card.image, PLACEHOLDER_IMAGE);
    assert!(!card.favorite);
    assert!(!session.favorites_visible());

    assert!(session.toggle(169).unwrap());

    assert!(session.results()[0].favorite);
    assert_eq!(session.favorites().ids(), vec![169]);
    assert!(session.favorites_visible());

    let saved = storage.get_item(FAVORITES_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&saved).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], 169);
}

#[test]
fn toggle_twice_is_involution_at_session_level() {
    let storage = SharedStorage::default();
    let mut session = Session::new(Box::new(storage.clone()));
    session.search(&FakeDirectory { body: BREAKING_BAD }, "bb", None).unwrap();

    session.toggle(169).unwrap();
    session.toggle(169).unwrap();

    assert!(session.favorites().is_empty());
    assert!(!session.results()[0].favorite);
    assert_eq!(storage.get_item(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn remove_and_reset_refresh_result_flags() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));
    session.search(&FakeDirectory { body: BREAKING_BAD }, "bb", None).unwrap();
    session.toggle(169).unwrap();

    let gone = session.remove(169).unwrap().unwrap();
    assert_eq!(gone.name, "Breaking Bad");
    assert!(!session.results()[0].favorite);
    assert!(session.remove(169).unwrap().is_none());

    session.toggle(169).unwrap();
    session.reset().unwrap();
    session.reset().unwrap();
    assert!(session.favorites().is_empty());
    assert!(!session.results()[0].favorite);
}

#[test]
fn remove_and_reset_are_persisted() {
    let storage = SharedStorage::default();
    let mut session = Session::new(Box::new(storage.clone()));
    session.search(&FakeDirectory { body: THREE }, "any", None).unwrap();
    for id in [1, 2, 3] {
        session.toggle(id).unwrap();
    }
    assert_eq!(storage.stored_ids(), vec![1, 2, 3]);

    session.remove(2).unwrap().unwrap();
    assert_eq!(storage.stored_ids(), vec![1, 3]);
    assert_eq!(session.favorites().ids(), vec![1, 3]);

    // Removing something that isn't a favorite writes nothing
    let before = storage.writes();
    assert!(session.remove(2).unwrap().is_none());
    assert!(session.remove(99).unwrap().is_none());
    assert_eq!(storage.writes(), before);

    session.reset().unwrap();
    assert_eq!(storage.get_item(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    assert!(session.results().iter().all(|s| !s.favorite));
}

#[test]
fn failed_search_does_not_report_finish() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));
    let mut prog = RecordingProgress::default();
    let err = session.search(&FakeDirectory { body: "{oops" }, "bb", Some(&mut prog));
    assert!(err.is_err());
    assert!(!prog.finished);
    assert_eq!(prog.began, None);

    let mut prog = RecordingProgress::default();
    session.search(&FakeDirectory { body: THREE }, "bb", Some(&mut prog)).unwrap();
    assert_eq!(prog.began, Some(3));
    assert_eq!(prog.items, 3);
    assert!(prog.finished);
}

#[test]
fn favorites_survive_a_new_search() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));
    session.search(&FakeDirectory { body: BREAKING_BAD }, "bb", None).unwrap();
    session.toggle(169).unwrap();

    session.search(&FakeDirectory { body: "[]" }, "nothing", None).unwrap();
    assert!(session.results().is_empty());
    assert_eq!(session.favorites().ids(), vec![169]);

    // Favorites can still be toggled off even though they're not in results
    assert!(!session.toggle(169).unwrap());
    assert!(matches!(session.toggle(169), Err(Error::UnknownShow(169))));
}

#[test]
fn stale_response_is_dropped() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));

    let first = session.begin_search("breaking").unwrap();
    let second = session.begin_search("girls").unwrap();
    assert_eq!(session.latest_ticket(), Some(second));

    // Latest lands first, then the older one straggles in
    let girls = parse_search_response(r#"[{"show": {"id": 1, "name": "Girls", "image": null}}]"#);
    assert_eq!(session.finish_search(second, girls, None).unwrap(), Some(1));

    let bb = parse_search_response(BREAKING_BAD);
    assert_eq!(session.finish_search(first, bb, None).unwrap(), None);

    assert_eq!(session.results()[0].name, "Girls");
    assert_eq!(session.last_query(), "girls");
}

#[test]
fn failed_search_keeps_previous_results() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));
    session.search(&FakeDirectory { body: BREAKING_BAD }, "bb", None).unwrap();

    let err = session.search(&FakeDirectory { body: "<html>oops</html>" }, "bb", None).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(session.results().len(), 1);
}

#[test]
fn blank_query_is_refused() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));
    assert!(matches!(session.begin_search("   "), Err(Error::EmptyQuery)));
    assert_eq!(session.latest_ticket(), None);
}

#[test]
fn cli_execute_prints_results_and_favorites() {
    let mut session = Session::new(Box::new(MemoryStorage::new()));
    let params = Params {
        search: Some("breaking bad".into()),
        toggle: vec![169],
        list: true,
        ..Params::default()
    };

    let mut out: Vec<u8> = Vec::new();
    cli::execute(&params, &mut session, &FakeDirectory { body: BREAKING_BAD }, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let row = format!("169\tBreaking Bad\t{}\t*", PLACEHOLDER_IMAGE);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![row.as_str(), "", row.as_str()]);
}
