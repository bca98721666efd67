//! `famtree` — run an edit-and-sync session against an in-process store.
//!
//! Usage:
//!   famtree [records.json]
//!
//! Reads an optional JSON array of person records, seeds the store with
//! it, performs a sample save cycle, and prints the rendered tree.

use famtree_app::{connect, wait_for, App, Renderer, POLL_INTERVAL, STARTUP_TIMEOUT};
use famtree_core::TreeSnapshot;
use famtree_sync::{MemoryPrefs, MemoryStore, RemoteStore, SyncCoordinator, ThreadRandom};
use std::cell::RefCell;
use std::rc::Rc;

/// Renders the tree as an indented id/name listing on stdout.
#[derive(Default)]
struct StdoutRenderer {
    focus: Option<String>,
}

impl Renderer for StdoutRenderer {
    fn render(&mut self, snapshot: &TreeSnapshot, focus: Option<&str>) {
        self.focus = focus.map(String::from);
        println!("tree ({} records):", snapshot.len());
        for record in snapshot.iter() {
            let marker = if focus == Some(record.id()) { "*" } else { " " };
            let name = record.name().unwrap_or("(unnamed)");
            println!("  {marker} {}: {name}", record.id());
        }
    }

    fn current_focus(&self) -> Option<String> {
        self.focus.clone()
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().collect();
    let initial = match args.get(1) {
        Some(path) => {
            let data = match std::fs::read_to_string(path) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            };
            let value: serde_json::Value = match serde_json::from_str(&data) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            };
            match TreeSnapshot::from_value(&value) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => TreeSnapshot::new(),
    };

    let mut store = MemoryStore::new();
    store.write_all(&initial).unwrap_or_else(|e| {
        eprintln!("seed write failed: {e}");
        std::process::exit(1);
    });

    // The in-process renderer is available immediately; a real widget
    // may take a few polls to show up.
    let renderer = match wait_for(
        || Some(StdoutRenderer::default()),
        STARTUP_TIMEOUT,
        POLL_INTERVAL,
    ) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    let sync = SyncCoordinator::new(Box::new(MemoryPrefs::new()), Box::new(ThreadRandom));
    let app = Rc::new(RefCell::new(App::new(
        &TreeSnapshot::new(),
        sync,
        Box::new(renderer),
    )));

    connect(&app, &mut store);
    store.pump();

    // Simulate a form submission: write the snapshot straight back and
    // let the change fan out through the subscription.
    if let Err(e) = app.borrow_mut().handle_form_submitted(&mut store) {
        eprintln!("save failed: {e}");
        std::process::exit(1);
    }
    store.pump();

    if let Some(notice) = app.borrow().messages().current() {
        println!("notice: {}", notice.message);
    };
}
