use crate::types::Recommendations;

/// The three screens of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Waiting for the user to start.
    Welcome,
    /// Fetching location, weather and playlists.
    Loading,
    /// Terminal state: results (or the lack of them) are on screen.
    Ready(Recommendations),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start,
    Loaded(Recommendations),
}

impl Screen {
    /// Applies an event. Events that mean nothing in the current screen
    /// leave it unchanged; in particular `Ready` is never left, a new
    /// session starts from a new `Welcome`.
    pub fn transition(self, event: Event) -> Screen {
        match (self, event) {
            (Screen::Welcome, Event::Start) => Screen::Loading,
            (Screen::Loading, Event::Loaded(recommendations)) => Screen::Ready(recommendations),
            (screen, _) => screen,
        }
    }

    pub fn recommendations(&self) -> Option<&Recommendations> {
        match self {
            Screen::Ready(recommendations) => Some(recommendations),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlaylistSource;

    fn empty() -> Recommendations {
        Recommendations {
            weather: None,
            playlists: Vec::new(),
            source: PlaylistSource::None,
            alert: None,
        }
    }

    #[test]
    fn test_happy_path() {
        let screen = Screen::Welcome.transition(Event::Start);
        assert_eq!(screen, Screen::Loading);

        let screen = screen.transition(Event::Loaded(empty()));
        assert_eq!(screen, Screen::Ready(empty()));
        assert_eq!(screen.recommendations(), Some(&empty()));
    }

    #[test]
    fn test_welcome_ignores_loaded() {
        assert_eq!(Screen::Welcome.transition(Event::Loaded(empty())), Screen::Welcome);
    }

    #[test]
    fn test_loading_ignores_second_start() {
        assert_eq!(Screen::Loading.transition(Event::Start), Screen::Loading);
        assert!(Screen::Loading.recommendations().is_none());
    }

    #[test]
    fn test_ready_is_terminal() {
        let ready = Screen::Ready(empty());
        assert_eq!(ready.clone().transition(Event::Start), ready);
        assert_eq!(ready.clone().transition(Event::Loaded(empty())), ready);
    }
}
