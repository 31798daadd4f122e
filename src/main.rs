use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use tunecast::{cli, config, error, location::Consent};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightMagenta.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find playlists for the weather where you are
    Start(StartOptions),

    /// Search playlists for a weather condition (Clear, Clouds, Rain, Snow, ...)
    Search(SearchOptions),

    /// Show the offline playlists for a weather condition
    Fallback(ConditionOption),

    /// Show the search term a weather condition maps to
    Mood(ConditionOption),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct StartOptions {
    /// Latitude in degrees; skips location lookup together with --lon
    #[clap(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in degrees
    #[clap(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Use the approximate location without asking
    #[clap(long, conflicts_with = "deny_location")]
    allow_location: bool,

    /// Refuse location access
    #[clap(long)]
    deny_location: bool,

    /// Skip the welcome screen
    #[clap(long)]
    skip_welcome: bool,

    /// Open the n-th recommended playlist right away
    #[clap(long, value_name = "N")]
    open: Option<usize>,

    /// Do not ask which playlist to open
    #[clap(long)]
    no_prompt: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    condition: String,

    /// Open the n-th playlist
    #[clap(long, value_name = "N")]
    open: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConditionOption {
    condition: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Start(opt) => {
            let consent = if opt.allow_location {
                Consent::Granted
            } else if opt.deny_location {
                Consent::Denied
            } else {
                Consent::Ask
            };

            cli::start(cli::SessionOptions {
                latitude: opt.lat,
                longitude: opt.lon,
                consent,
                skip_welcome: opt.skip_welcome,
                open: opt.open,
                no_prompt: opt.no_prompt,
            })
            .await
        }
        Command::Search(opt) => cli::search(opt.condition, opt.open).await,
        Command::Fallback(opt) => cli::fallback(opt.condition),
        Command::Mood(opt) => cli::mood(opt.condition),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
