//! Full-screen rendering through ratatui's TestBackend.

mod common;

use common::*;
use quotecard::config::OverlapPolicy;
use quotecard::locale::Locale;
use quotecard::quote::Quote;
use quotecard::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Instant;

fn screen_text(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn settled_screen_shows_quote_author_and_button() {
    let (mut app, _rx) = make_app(Locale::En, OverlapPolicy::Restart);
    app.on_resize(80, 24);
    let t0 = Instant::now();
    app.on_mount(t0);
    app.on_quote_fetched(1, Ok(Quote::new("Be curious.", "Ada")), t0 + ms(20));
    let end = t0 + ms(1_000);
    run_frames(&mut app, t0, end);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &app, end)).unwrap();
    let lines = screen_text(terminal.backend().buffer());

    assert!(contains(&lines, "\"Be curious.\""), "{:#?}", lines);
    assert!(contains(&lines, "- Ada"), "{:#?}", lines);
    assert!(contains(&lines, "New Quote"), "{:#?}", lines);
    assert!(contains(&lines, concat!("v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn long_quote_never_hides_the_author() {
    let (mut app, _rx) = make_app(Locale::En, OverlapPolicy::Restart);
    app.on_resize(60, 24);
    let t0 = Instant::now();
    app.on_mount(t0);
    let text = "word ".repeat(80);
    app.on_quote_fetched(1, Ok(Quote::new(text.trim_end(), "Ada")), t0 + ms(20));
    let end = t0 + ms(1_000);
    run_frames(&mut app, t0, end);

    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &app, end)).unwrap();
    let lines = screen_text(terminal.backend().buffer());

    assert!(contains(&lines, "- Ada"), "{:#?}", lines);
    assert!(contains(&lines, "\"word word"), "{:#?}", lines);
    assert!(contains(&lines, "New Quote"));
}

#[test]
fn french_screen_uses_french_labels() {
    let (mut app, _rx) = make_app(Locale::Fr, OverlapPolicy::Restart);
    app.on_resize(100, 30);
    let t0 = Instant::now();
    app.on_mount(t0);
    app.on_quote_fetched(1, Ok(Quote::new("Rien", "")), t0 + ms(20));
    let end = t0 + ms(1_000);
    run_frames(&mut app, t0, end);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, &app, end)).unwrap();
    let lines = screen_text(terminal.backend().buffer());

    assert!(contains(&lines, "Nouvelle citation"));
    assert!(contains(&lines, "- Auteur inconnu"));
}

#[test]
fn card_is_off_screen_right_after_the_swap() {
    let (mut app, _rx) = make_app(Locale::En, OverlapPolicy::Restart);
    let t0 = Instant::now();
    app.on_mount(t0);
    app.on_quote_fetched(1, Ok(Quote::new("Sliding", "In")), t0 + ms(20));
    let swap = t0 + ms(300);
    app.on_tick(swap);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &app, swap)).unwrap();
    let lines = screen_text(terminal.backend().buffer());

    assert!(!contains(&lines, "Sliding"));
    // The button never moves.
    assert!(contains(&lines, "New Quote"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let (mut app, _rx) = make_app(Locale::Fr, OverlapPolicy::Restart);
    let now = Instant::now();
    app.on_mount(now);

    for (cols, rows) in [(1, 1), (5, 3), (12, 6), (30, 4)] {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| draw(frame, &app, now)).unwrap();
    }
}
