use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    alert, info,
    links::LinkOpener,
    success,
    types::{PlaylistEntry, PlaylistSource, PlaylistTableRow, Recommendations, WeatherSnapshot},
    warning,
};

pub fn welcome() {
    println!();
    println!("  {}", "🎵 Welcome to TuneCast! 🎶".magenta().bold());
    println!("  {}", "Music that matches your weather".dimmed());
    println!();
}

/// Blocks until the user presses Enter. Input errors count as a start.
pub fn wait_for_start() {
    print!("  Press {} to start ", "Enter".bold());
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub fn recommendations(recommendations: &Recommendations) {
    if let Some(a) = &recommendations.alert {
        alert!(a.title, "{}", a.message);
    }

    if let Some(snapshot) = &recommendations.weather {
        weather(snapshot);
    }

    playlists(&recommendations.playlists, recommendations.source);
}

pub fn weather(snapshot: &WeatherSnapshot) {
    println!();
    println!("  {}", snapshot.city.magenta().bold());
    println!("  {}  {}", snapshot.temperature.bold(), snapshot.condition);
    if !snapshot.icon_url.is_empty() {
        println!("  {}", snapshot.icon_url.dimmed());
    }
    println!();
}

pub fn playlists(entries: &[PlaylistEntry], source: PlaylistSource) {
    if entries.is_empty() {
        info!("No playlists to recommend.");
        return;
    }

    println!("{}", "Recommended Playlists".magenta().bold());
    let rows: Vec<PlaylistTableRow> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| PlaylistTableRow {
            index: i + 1,
            name: e.name.clone(),
            link: e.url.clone(),
            image: e.image.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));

    if source == PlaylistSource::Fallback {
        info!("Showing offline playlists.");
    }
}

/// Parses a 1-based selection into an index into a list of `len` entries.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

pub fn open_selection(entries: &[PlaylistEntry], index: usize, opener: &dyn LinkOpener) -> bool {
    let Some(entry) = entries.get(index) else {
        warning!("There is no playlist #{}", index + 1);
        return false;
    };

    match opener.open(&entry.url) {
        Ok(()) => {
            success!("Opened {}", entry.name);
            true
        }
        Err(e) => {
            warning!("{}. Please open {} manually", e, entry.url);
            false
        }
    }
}

/// Opens the `n`-th playlist, counting from 1. `0` selects nothing.
pub fn open_nth(entries: &[PlaylistEntry], n: usize, opener: &dyn LinkOpener) -> bool {
    match n.checked_sub(1) {
        Some(index) => open_selection(entries, index, opener),
        None => {
            warning!("Playlists are numbered from 1");
            false
        }
    }
}

/// Lets the user open playlists by number until an empty line or EOF.
pub fn prompt_selection(entries: &[PlaylistEntry], opener: &dyn LinkOpener) {
    if entries.is_empty() {
        return;
    }

    let stdin = io::stdin();
    loop {
        print!("Open playlist [1-{}] or press Enter to quit: ", entries.len());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line.trim().is_empty() => break,
            Ok(_) => match parse_selection(&line, entries.len()) {
                Some(index) => {
                    open_selection(entries, index, opener);
                }
                None => warning!("Pick a number between 1 and {}", entries.len()),
            },
        }
    }
}
