use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt;

/// An episode as returned by the hosting platform.
/// Only `id` must be present; missing optional fields decode as `None`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EpisodeRecord {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub audio_url: Option<String>,
    pub published_at: Option<String>,
    pub episode_number: Option<u32>,
    pub season_number: Option<u32>,
    pub explicit: Option<bool>,
    pub private: Option<bool>,
    pub tags: Option<String>,
    pub duration: Option<u64>,
    pub total_plays: Option<u64>,
}

impl EpisodeRecord {
    pub fn published(&self) -> Option<DateTime<FixedOffset>> {
        self.published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

impl fmt::Display for EpisodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}",
            self.id,
            self.title.as_deref().unwrap_or("(untitled)")
        )?;
        match (self.season_number, self.episode_number) {
            (Some(s), Some(e)) => write!(f, " [S{}E{}]", s, e)?,
            (None, Some(e)) => write!(f, " [E{}]", e)?,
            _ => {}
        }
        if let Some(at) = &self.published_at {
            write!(f, " published {}", at)?;
        }
        if let Some(url) = &self.audio_url {
            write!(f, " {}", url)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EpisodeGroup(pub Vec<EpisodeRecord>);

impl EpisodeGroup {
    /// Latest published episode. Undated episodes rank below dated ones and
    /// the higher id wins a tie.
    pub fn newest(&self) -> Option<&EpisodeRecord> {
        self.0.iter().max_by_key(|e| (e.published(), e.id))
    }
}

impl From<Vec<EpisodeRecord>> for EpisodeGroup {
    fn from(eps: Vec<EpisodeRecord>) -> Self {
        EpisodeGroup(eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, published_at: Option<&str>) -> EpisodeRecord {
        EpisodeRecord {
            id,
            published_at: published_at.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn decode_api_json() {
        let body = r#"[{
            "id": 2195,
            "title": "Too Many Podcasts",
            "audio_url": "https://www.buzzsprout.com/140/2195.mp3",
            "artwork_url": "https://www.buzzsprout.com/140/2195.jpg",
            "description": "",
            "published_at": "2019-09-12T03:00:00.000-04:00",
            "duration": 23462,
            "episode_number": 12,
            "season_number": null,
            "explicit": false,
            "private": true,
            "total_plays": 13
        }]"#;
        let eps: Vec<EpisodeRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].id, 2195);
        assert_eq!(eps[0].episode_number, Some(12));
        assert_eq!(eps[0].season_number, None);
        assert_eq!(eps[0].private, Some(true));
        assert!(eps[0].published().is_some());
    }

    #[test]
    fn id_required() {
        let err = serde_json::from_str::<EpisodeRecord>(r#"{"title": "No id"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));

        let bare: EpisodeRecord = serde_json::from_str(r#"{"id": 8}"#).unwrap();
        assert_eq!(bare.id, 8);
        assert_eq!(bare.title, None);
    }

    #[test]
    fn newest_by_publish_time() {
        let group = EpisodeGroup::from(vec![
            record(9, Some("2021-01-01T10:00:00.000-05:00")),
            record(3, Some("2023-06-01T10:00:00.000+02:00")),
            record(7, Some("2022-03-01T10:00:00Z")),
        ]);
        assert_eq!(group.newest().map(|e| e.id), Some(3));
    }

    #[test]
    fn newest_offsets_compared_as_instants() {
        let group = EpisodeGroup::from(vec![
            record(1, Some("2023-06-01T10:00:00+02:00")),
            record(2, Some("2023-06-01T09:30:00Z")),
        ]);
        assert_eq!(group.newest().map(|e| e.id), Some(2));
    }

    #[test]
    fn undated_ranks_last_and_ids_break_ties() {
        let group = EpisodeGroup::from(vec![
            record(50, None),
            record(4, Some("2020-01-01T00:00:00Z")),
            record(5, Some("2020-01-01T00:00:00Z")),
            record(60, Some("not a date")),
        ]);
        assert_eq!(group.newest().map(|e| e.id), Some(5));

        let undated = EpisodeGroup::from(vec![record(50, None), record(51, None)]);
        assert_eq!(undated.newest().map(|e| e.id), Some(51));
        assert_eq!(EpisodeGroup::default().newest(), None);
    }

    #[test]
    fn display_line() {
        let ep = EpisodeRecord {
            id: 77,
            title: Some("Pilot".to_string()),
            episode_number: Some(1),
            season_number: Some(2),
            published_at: Some("2026-11-02T07:05:00.000-04:00".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ep.to_string(),
            "#77 Pilot [S2E1] published 2026-11-02T07:05:00.000-04:00"
        );
        assert_eq!(EpisodeRecord::default().to_string(), "#0 (untitled)");
    }
}
