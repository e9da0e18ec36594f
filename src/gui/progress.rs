// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.done = 0;
        self.set_status(format!("Loading {} result(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _id: u64) {
        self.done += 1;
    }
    fn finish(&mut self) {
        match self.done {
            0 => self.set_status("No shows found"),
            1 => self.set_status("Found 1 show"),
            n => self.set_status(format!("Found {} shows", n)),
        }
    }
}
