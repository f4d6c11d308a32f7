use crate::{entity::Episode, model::EpisodeRecord, multipart::Form};
use simple_error::{SimpleError, SimpleResult};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://www.buzzsprout.com/api";
const AUDIO_FIELD: &str = "audio_file";

pub trait EpisodeApi {
    fn list_episodes(&self) -> SimpleResult<Vec<EpisodeRecord>>;
    fn post_episode(&self, episode: &Episode, audio: &Path) -> SimpleResult<EpisodeRecord>;
}

pub struct Client {
    agent: ureq::Agent,
    api_url: String,
    podcast_id: String,
    api_key: String,
}

impl Client {
    pub fn new(api_url: &str, podcast_id: &str, api_key: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(30))
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build();
        Client {
            agent,
            api_url: api_url.trim_end_matches('/').to_string(),
            podcast_id: podcast_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn episodes_url(&self) -> String {
        format!("{}/{}/episodes.json", self.api_url, self.podcast_id)
    }

    fn token(&self) -> String {
        format!("Token token={}", self.api_key)
    }
}

impl EpisodeApi for Client {
    fn list_episodes(&self) -> SimpleResult<Vec<EpisodeRecord>> {
        let url = self.episodes_url();
        log::debug!("listing episodes from {}", url);
        let res = self
            .agent
            .get(&url)
            .set("Authorization", &self.token())
            .set("Accept", "application/json")
            .call();
        let eps: Vec<EpisodeRecord> = check(res)?
            .into_json()
            .map_err(|e| SimpleError::with("episode list unreadable", e))?;
        log::debug!("{} existing episodes", eps.len());
        Ok(eps)
    }

    fn post_episode(&self, episode: &Episode, audio: &Path) -> SimpleResult<EpisodeRecord> {
        let cannot_read = |e| SimpleError::with(&format!("cannot read {}", audio.display()), e);
        let file = File::open(audio).map_err(cannot_read)?;
        let size = file.metadata().map_err(cannot_read)?.len();
        let filename = audio
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| AUDIO_FIELD.to_string());

        let mut form = Form::new();
        for (name, value) in episode.form_fields() {
            form.text(name, &value);
        }
        let body = form.file(AUDIO_FIELD, &filename, audio_mime(audio), file, size);

        let url = self.episodes_url();
        log::info!("uploading {} ({} bytes) to {}", filename, size, url);
        let res = self
            .agent
            .post(&url)
            .set("Authorization", &self.token())
            .set("Accept", "application/json")
            .set("Content-Type", &body.content_type)
            .set("Content-Length", &body.len.to_string())
            .send(body.reader);
        check(res)?
            .into_json()
            .map_err(|e| SimpleError::with("created episode unreadable", e))
    }
}

// non-2xx responses carry the body the API sent back
fn check(res: Result<ureq::Response, ureq::Error>) -> SimpleResult<ureq::Response> {
    match res {
        Ok(r) => Ok(r),
        Err(ureq::Error::Status(code, r)) => {
            let body = r.into_string().unwrap_or_default();
            Err(SimpleError::new(format!(
                "buzzsprout returned {}: {}",
                code,
                body.trim()
            )))
        }
        Err(e) => Err(SimpleError::with("request failed", e)),
    }
}

pub fn audio_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "m4a" | "mp4" | "aac" => "audio/mp4",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}
