//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use quotecard::config::{ApiConfig, OverlapPolicy};
use quotecard::locale::Locale;
use quotecard::ui::app::{App, UiCommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::sync::mpsc;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// App wired to a command channel the test can inspect.
pub fn make_app(locale: Locale, overlap: OverlapPolicy) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(locale, overlap);
    app.set_command_sender(tx);
    (app, rx)
}

/// Drains every command issued so far.
pub fn drain_commands(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Ticks the app every frame from `from` to `to` inclusive.
pub fn run_frames(app: &mut App, from: Instant, to: Instant) {
    let mut now = from;
    while now <= to {
        app.on_tick(now);
        now += ms(16);
    }
    app.on_tick(to);
}

pub fn api_config(endpoint: String) -> ApiConfig {
    ApiConfig {
        endpoint,
        max_length: None,
        timeout_seconds: Some(5),
    }
}

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
