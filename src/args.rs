use crate::{
    client::DEFAULT_API_URL,
    schedule::{parse_date, parse_time},
    upload::UploadRequest,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Upload a podcast episode to Buzzsprout
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Input audio filename.
    #[arg(long)]
    pub audio: PathBuf,

    /// Title of the episode.
    #[arg(long)]
    pub title: String,

    /// Description of the episode.
    #[arg(long)]
    pub description: String,

    /// Tags for the episode.
    #[arg(long, num_args = 0..)]
    pub tags: Vec<String>,

    /// Date to publish the episode (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub publish_at_date: Option<NaiveDate>,

    /// Time to publish the episode (HH:MM[:SS]).
    #[arg(long, value_parser = parse_time)]
    pub publish_at_time: Option<NaiveTime>,

    /// Episode number (if none, most recent episode number + 1).
    #[arg(long)]
    pub episode_number: Option<u32>,

    /// Season number (if none, season number of the most recent episode).
    #[arg(long)]
    pub season_number: Option<u32>,

    /// Whether or not the episode is private.
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub private: bool,

    /// Whether or not the episode is explicit.
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub explicit: bool,

    /// Whether or not to email after the audio processing is done.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub email_after_process: bool,

    /// API key to use when calling Buzzsprout.
    #[arg(long, env = "BUZZSPROUT_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// ID of the podcast to upload to.
    #[arg(long, env = "BUZZSPROUT_PODCAST_ID")]
    pub podcast_id: String,

    /// Base URL of the Buzzsprout API.
    #[arg(long, env = "BUZZSPROUT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Read/write timeout of the upload, in seconds.
    #[arg(long, default_value_t = 600)]
    pub timeout: u64,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn upload_request(&self, publish_at: Option<NaiveDateTime>) -> UploadRequest {
        UploadRequest {
            audio: self.audio.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            publish_at,
            episode_number: self.episode_number,
            season_number: self.season_number,
            private: self.private,
            explicit: self.explicit,
            email_after_process: self.email_after_process,
        }
    }
}
