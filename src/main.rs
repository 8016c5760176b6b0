//! # Dungeoneer Main Entry Point
//!
//! Dungeoneer is an interactive visualizer for procedural dungeon-layout
//! generation. This file wires up the composition root: one session
//! store, one generation engine, and the egui application that hosts the
//! settings form, grid view, and step-by-step playback.

use std::error::Error;

use log::info;

use dungeoneer::engine::RoomsEngine;
use dungeoneer::session::SessionStore;
use dungeoneer::ui::DungeoneerApp;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("Dungeoneer starting...");

    // Each top-level window gets its own store and engine; nothing here
    // is process-global.
    let session = SessionStore::new();
    let engine = Box::new(RoomsEngine::new());

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Dungeoneer",
        native_options,
        Box::new(move |_cc| Box::new(DungeoneerApp::new(session, engine))),
    );
    // run_native returns () so we simply return Ok.
    info!("Dungeoneer exiting.");
    Ok(())
}
