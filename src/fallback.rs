//! Offline playlists shown when the catalog search has nothing usable.
//!
//! Each weather condition has a bucket of two hand-picked playlists with
//! bundled artwork. Conditions without a bucket of their own share the
//! `Default` one.

use crate::types::{Condition, PlaylistEntry, PlaylistImage};

/// Artwork used for live playlists that come without an image.
pub const PLACEHOLDER_IMAGE: &str = "assets/calm.png";

struct FallbackPlaylist {
    name: &'static str,
    url: &'static str,
    image: &'static str,
}

const CLEAR: [FallbackPlaylist; 2] = [
    FallbackPlaylist {
        name: "☀️ Sunshine Vibes",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX4WYpdgoIcn6",
        image: "assets/sunshine.png",
    },
    FallbackPlaylist {
        name: "Good Day Energy",
        url: "https://open.spotify.com/playlist/37i9dQZF1DXdPec7aLTmlC",
        image: "assets/lofi.png",
    },
];

const CLOUDS: [FallbackPlaylist; 2] = [
    FallbackPlaylist {
        name: "☁️ Chill & Cozy",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX4sWSpwq3LiO",
        image: "assets/vibes.png",
    },
    FallbackPlaylist {
        name: "Lo‑Fi Study",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX8Uebhn9wzrS",
        image: "assets/golden.png",
    },
];

const RAIN: [FallbackPlaylist; 2] = [
    FallbackPlaylist {
        name: "🌧️ Rainy Day",
        url: "https://open.spotify.com/playlist/37i9dQZEVXbMDoHDwVN2tF",
        image: "assets/rainyday.png",
    },
    FallbackPlaylist {
        name: "Calm & Mellow",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX4WYpdgoIcn6",
        image: "assets/calm.png",
    },
];

const SNOW: [FallbackPlaylist; 2] = [
    FallbackPlaylist {
        name: "❄️ Winter Chill",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX4H7FFUM2osB",
        image: "assets/winterchill.png",
    },
    FallbackPlaylist {
        name: "Cozy Fireplace",
        url: "https://open.spotify.com/playlist/37i9dQZF1DWVY4Y6o9hW0X",
        image: "assets/fireplace.png",
    },
];

const DEFAULT: [FallbackPlaylist; 2] = [
    FallbackPlaylist {
        name: "Mood Booster",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX3rxVfibe1L0",
        image: "assets/moodbooster.png",
    },
    FallbackPlaylist {
        name: "Chill Hits",
        url: "https://open.spotify.com/playlist/37i9dQZF1DX4WYpdgoIcn7",
        image: "assets/chillhits.png",
    },
];

fn bucket(condition: &Condition) -> &'static [FallbackPlaylist] {
    match condition {
        Condition::Clear => &CLEAR,
        Condition::Clouds => &CLOUDS,
        Condition::Rain => &RAIN,
        Condition::Snow => &SNOW,
        Condition::Other(_) => &DEFAULT,
    }
}

/// Returns the fallback playlists for a condition.
pub fn fallback_playlists(condition: &Condition) -> Vec<PlaylistEntry> {
    to_entries(bucket(condition))
}

/// Returns the bucket used when no condition is known at all.
pub fn default_playlists() -> Vec<PlaylistEntry> {
    to_entries(&DEFAULT)
}

fn to_entries(playlists: &[FallbackPlaylist]) -> Vec<PlaylistEntry> {
    playlists
        .iter()
        .map(|p| PlaylistEntry {
            name: p.name.to_string(),
            url: p.url.to_string(),
            image: PlaylistImage::Local(p.image),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[PlaylistEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_rain_bucket() {
        let rain = fallback_playlists(&Condition::Rain);
        assert_eq!(names(&rain), vec!["🌧️ Rainy Day", "Calm & Mellow"]);
    }

    #[test]
    fn test_unmapped_condition_uses_default() {
        let fog = fallback_playlists(&Condition::from("Fog"));
        assert_eq!(fog, default_playlists());
        assert_eq!(names(&fog), vec!["Mood Booster", "Chill Hits"]);
    }

    #[test]
    fn test_every_bucket_is_complete() {
        let conditions = [
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Snow,
            Condition::Other("Mist".to_string()),
        ];

        for condition in conditions {
            let entries = fallback_playlists(&condition);
            assert_eq!(entries.len(), 2, "bucket for {}", condition);
            for entry in entries {
                assert!(!entry.name.is_empty());
                assert!(entry.url.starts_with("https://open.spotify.com/playlist/"));
                assert!(matches!(entry.image, PlaylistImage::Local(path) if path.starts_with("assets/")));
            }
        }
    }
}
