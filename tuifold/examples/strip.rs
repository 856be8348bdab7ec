use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuifold::{
    Event, FoldState, HoverFold, Key, Page, PointerState, Section, Terminal, Theme,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("strip.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let page = page();
    let theme = Theme::default();
    let mut fold = FoldState::new(&page, HoverFold::Enabled);
    let mut pointer = PointerState::new();
    let mut term = Terminal::new()?;

    loop {
        term.draw(&page, &fold, &theme, pointer.hovered())?;

        let raw_events = term.poll(Some(Duration::from_millis(100)))?;
        let events = pointer.process_events(&raw_events, term.layout());
        fold.process_events(&events);

        // Exit on 'q' or Escape
        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}

fn page() -> Page {
    Page::new()
        .section(
            Section::new("rust", "Rust")
                .link("crates.io", "https://crates.io")
                .link("docs.rs", "https://docs.rs")
                .link("std docs", "https://doc.rust-lang.org/std/"),
        )
        .section(
            Section::new("code", "Code")
                .link("github", "https://github.com")
                .link("gitlab", "https://gitlab.com"),
        )
        .section(
            Section::new("news", "News")
                .link("hacker news", "https://news.ycombinator.com")
                .link("lobsters", "https://lobste.rs")
                .link("this week in rust", "https://this-week-in-rust.org"),
        )
        .section(
            Section::new("media", "Media")
                .link("youtube", "https://youtube.com")
                .link("bandcamp", "https://bandcamp.com"),
        )
}
