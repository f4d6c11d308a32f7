use crate::model::EpisodeGroup;

pub type EpisodeNumber = u32;
pub type SeasonNumber = Option<u32>;

/// Numbering that follows on from the newest existing episode. An empty
/// podcast starts at episode 1 without a season.
pub fn default_numbers(group: &EpisodeGroup) -> (EpisodeNumber, SeasonNumber) {
    match group.newest() {
        Some(newest) => (
            newest.episode_number.unwrap_or(0).saturating_add(1),
            newest.season_number,
        ),
        None => (1, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EpisodeRecord;

    fn ep(id: u64, at: &str, number: Option<u32>, season: Option<u32>) -> EpisodeRecord {
        EpisodeRecord {
            id,
            published_at: Some(at.to_string()),
            episode_number: number,
            season_number: season,
            ..Default::default()
        }
    }

    #[test]
    fn follows_newest() {
        let group = EpisodeGroup::from(vec![
            ep(1, "2024-01-01T00:00:00Z", Some(40), Some(2)),
            ep(2, "2024-02-01T00:00:00Z", Some(41), Some(3)),
        ]);
        assert_eq!(default_numbers(&group), (42, Some(3)));
    }

    #[test]
    fn newest_not_highest_number() {
        let group = EpisodeGroup::from(vec![
            ep(1, "2024-01-01T00:00:00Z", Some(90), Some(1)),
            ep(2, "2024-02-01T00:00:00Z", Some(5), None),
        ]);
        assert_eq!(default_numbers(&group), (6, None));
    }

    #[test]
    fn unnumbered_newest() {
        let group = EpisodeGroup::from(vec![ep(1, "2024-01-01T00:00:00Z", None, Some(1))]);
        assert_eq!(default_numbers(&group), (1, Some(1)));
    }

    #[test]
    fn empty_podcast() {
        assert_eq!(default_numbers(&EpisodeGroup::default()), (1, None));
    }
}
