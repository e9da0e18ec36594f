// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc::{self, Receiver, Sender}},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    directory::{Directory, TvMaze},
    session::Session,
    store::{FileStorage, MemoryStorage, Storage},
};

use super::{actions::SearchDone, components};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "TV Favorites",
        options,
        Box::new(move |cc| {
            // Posters are remote URLs; egui needs http + image loaders for them
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(state)?))
        }),
    )?;
    Ok(())
}

pub struct App {
    // UI thread only
    pub state: AppState,
    pub session: Session,

    pub directory: Arc<dyn Directory>,

    // status/progress (search worker results land here via GuiProgress)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // finished searches from worker threads
    pub search_tx: Sender<SearchDone>,
    pub search_rx: Receiver<SearchDone>,
}

impl App {
    pub fn new(state: AppState) -> crate::Result<Self> {
        let directory: Arc<dyn Directory> = Arc::new(TvMaze::new(&state.options.api)?);
        let storage: Box<dyn Storage> = if state.options.store.persist {
            Box::new(FileStorage::new(state.options.store.dir.clone()))
        } else {
            Box::new(MemoryStorage::new())
        };
        Ok(Self::with_parts(state, directory, storage))
    }

    pub fn with_parts(state: AppState, directory: Arc<dyn Directory>, storage: Box<dyn Storage>) -> Self {
        let mut session = Session::new(storage);

        let status = match session.load() {
            Ok(0) => s!("Idle"),
            Ok(n) => format!("Loaded {} favorite(s)", n),
            Err(e) => {
                loge!("Init: Favorites not loaded: {}", e);
                format!("Favorites could not be loaded: {e}")
            }
        };

        logf!("Init: api={} store={} persist={}",
            state.options.api.base_url(),
            state.options.store.dir.display(),
            state.options.store.persist
        );

        let (search_tx, search_rx) = mpsc::channel();

        Self {
            state,
            session,
            directory,
            status: Arc::new(Mutex::new(status)),
            running: false,
            search_tx,
            search_rx,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll_search(self);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self);
        });

        if self.session.favorites_visible() {
            egui::SidePanel::left("favorites")
                .resizable(false)
                .show(ctx, |ui| {
                    components::favorites_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::results::draw(ui, self);
        });
    }
}
