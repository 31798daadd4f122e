//! TuneCast Library
//!
//! This library provides everything behind the `tunecast` command: it finds
//! the user's location, fetches the current weather, maps the weather
//! condition to a mood and searches the Spotify catalog for playlists that
//! match it. When the catalog has nothing usable to offer, a static fallback
//! catalog keyed by weather condition takes its place.
//!
//! # Modules
//!
//! - `app` - Session state machine and the fetch/fallback orchestration
//! - `cli` - Terminal presentation of the welcome, loading and results screens
//! - `config` - Configuration management and environment variables
//! - `errors` - Error types for every external call
//! - `fallback` - Static playlists used when the live search comes back empty
//! - `links` - Opening playlist links in the browser
//! - `location` - Location consent and coordinate lookup
//! - `mood` - Weather condition to search term mapping
//! - `spotify` - Spotify Web API client (token exchange, playlist search)
//! - `types` - Data structures and type definitions
//! - `weather` - OpenWeather client

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod links;
pub mod location;
pub mod mood;
pub mod spotify;
pub mod types;
pub mod weather;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Searching playlists for \"{}\"", mood);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Opened {}", playlist.name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. The session flow itself never uses it: every failure
/// while loading recommendations degrades to an alert. It is reserved for
/// the binary's top level, e.g. a broken configuration directory.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice, such as a browser that could not be opened.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser. Please open {} manually", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a boxed alert with a bold title line.
///
/// Alerts are the terminal counterpart of a modal dialog: the session
/// raises one when location access is denied or when live data could not
/// be fetched and offline playlists are shown instead.
///
/// # Example
///
/// ```
/// alert!("Permission Denied", "We need location access to show weather‑based playlists.");
/// ```
#[macro_export]
macro_rules! alert {
  ($title:expr, $($arg:tt)*) => ({
    use colored::Colorize;
    println!();
    println!("[{}] {}", "!".magenta().bold(), $title.to_string().bold());
    println!("    {}", std::format_args!($($arg)*));
    println!();
  })
}
