use crate::{
    client::EpisodeApi,
    entity::Episode,
    model::{EpisodeGroup, EpisodeRecord},
    numbering::default_numbers,
};
use chrono::NaiveDateTime;
use simple_error::{SimpleError, SimpleResult};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadRequest {
    pub audio: PathBuf,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub publish_at: Option<NaiveDateTime>,
    pub episode_number: Option<u32>,
    pub season_number: Option<u32>,
    pub private: bool,
    pub explicit: bool,
    pub email_after_process: bool,
}

impl UploadRequest {
    fn into_episode(self, episode_number: u32, season_number: Option<u32>) -> Episode {
        Episode {
            title: self.title,
            description: self.description,
            tags: Episode::join_tags(&self.tags),
            published_at: None,
            episode_number,
            season_number,
            explicit: self.explicit,
            private: self.private,
            email_user_after_audio_processed: self.email_after_process,
        }
        .with_publish_at(self.publish_at)
    }
}

pub fn upload_episode(api: &impl EpisodeApi, req: UploadRequest) -> SimpleResult<EpisodeRecord> {
    if !req.audio.is_file() {
        return Err(SimpleError::new(format!(
            "audio file not found: {}",
            req.audio.display()
        )));
    }

    // numbering is only looked up when the caller left part of it out
    let (episode_number, season_number) = match (req.episode_number, req.season_number) {
        (Some(ep), Some(season)) => (ep, Some(season)),
        (ep, season) => {
            let group = EpisodeGroup::from(api.list_episodes()?);
            let (default_ep, default_season) = default_numbers(&group);
            log::info!(
                "defaults from newest episode: episode {} season {:?}",
                default_ep,
                default_season
            );
            (ep.unwrap_or(default_ep), season.or(default_season))
        }
    };

    let audio = req.audio.clone();
    let episode = req.into_episode(episode_number, season_number);
    if let Ok(json) = serde_json::to_string(&episode) {
        log::debug!("episode {}", json);
    }
    let created = api.post_episode(&episode, &audio)?;
    log::info!("created episode {}", created.id);
    Ok(created)
}
