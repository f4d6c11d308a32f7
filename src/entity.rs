use chrono::NaiveDateTime;
use serde::Serialize;

use crate::schedule::format_publish_at;

/// One episode submission, as sent to the hosting platform.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct Episode {
    pub title: String,
    pub description: String,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub episode_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    pub explicit: bool,
    pub private: bool,
    pub email_user_after_audio_processed: bool,
}

impl Episode {
    pub fn join_tags(tags: &[String]) -> String {
        tags.join(",")
    }

    pub fn with_publish_at(mut self, publish_at: Option<NaiveDateTime>) -> Self {
        self.published_at = publish_at.as_ref().map(format_publish_at);
        self
    }

    /// Text parts of the upload form, in submission order. Unset optional
    /// fields are left out.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("tags", self.tags.clone()),
        ];
        if let Some(at) = &self.published_at {
            fields.push(("published_at", at.clone()));
        }
        fields.push(("episode_number", self.episode_number.to_string()));
        if let Some(season) = self.season_number {
            fields.push(("season_number", season.to_string()));
        }
        fields.push(("explicit", self.explicit.to_string()));
        fields.push(("private", self.private.to_string()));
        fields.push((
            "email_user_after_audio_processed",
            self.email_user_after_audio_processed.to_string(),
        ));
        fields
    }
}
