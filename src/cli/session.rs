use tracing::debug;

use crate::{
    app::{Event, Orchestrator, Screen},
    cli::render,
    config::Settings,
    links::BrowserOpener,
    location::{self, Consent, FixedLocation, IpLocation, LocationProvider},
    types::PermissionStatus,
};

/// Options of a full session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub consent: Consent,
    pub skip_welcome: bool,
    pub open: Option<usize>,
    pub no_prompt: bool,
}

/// Runs a session: welcome screen, loading, results.
///
/// Never exits the process on failure; every outcome of the loading sequence
/// ends on the results screen, possibly with an alert and no playlists.
pub async fn start(options: SessionOptions) {
    let settings = Settings::from_env();

    let mut screen = Screen::Welcome;
    render::welcome();
    if !options.skip_welcome {
        render::wait_for_start();
    }

    screen = screen.transition(Event::Start);
    debug!(?screen, "session started");

    // The consent prompt needs the terminal, so it is answered before the
    // spinner takes over.
    let location = location_provider(&settings, &options).await;
    let orchestrator = Orchestrator::from_settings(&settings, location);

    let pb = render::spinner("Finding music for your weather...");
    let recommendations = orchestrator.load().await;
    pb.finish_and_clear();

    screen = screen.transition(Event::Loaded(recommendations));
    let Some(recommendations) = screen.recommendations() else {
        return;
    };

    render::recommendations(recommendations);

    let opener = BrowserOpener;
    if let Some(n) = options.open {
        render::open_nth(&recommendations.playlists, n, &opener);
    } else if !options.no_prompt {
        render::prompt_selection(&recommendations.playlists, &opener);
    }
}

async fn location_provider(
    settings: &Settings,
    options: &SessionOptions,
) -> Box<dyn LocationProvider> {
    if let (Some(lat), Some(lon)) = (options.latitude, options.longitude) {
        return Box::new(FixedLocation::new(lat, lon));
    }

    let consent = match options.consent {
        Consent::Ask => match tokio::task::spawn_blocking(location::prompt_consent).await {
            Ok(PermissionStatus::Granted) => Consent::Granted,
            _ => Consent::Denied,
        },
        decided => decided,
    };

    Box::new(IpLocation::new(
        reqwest::Client::new(),
        settings.geolocation_url.clone(),
        consent,
    ))
}
