pub mod args;
pub mod client;
pub mod entity;
pub mod model;
pub mod multipart;
pub mod numbering;
pub mod schedule;
pub mod upload;
pub mod util;

#[cfg(test)]
mod testutil;

use chrono::Local;
use model::EpisodeRecord;
use simple_error::SimpleResult;
use std::time::Duration;

// validate the schedule, then talk to the api
pub fn run(args: &args::Args) -> SimpleResult<EpisodeRecord> {
    let publish_at = schedule::resolve_publish_at(
        args.publish_at_date,
        args.publish_at_time,
        Local::now().naive_local(),
    )?;
    if let Some(at) = &publish_at {
        log::info!("scheduling for {}", schedule::format_publish_at(at));
    }
    let client = client::Client::new(
        &args.api_url,
        &args.podcast_id,
        &args.api_key,
        Duration::from_secs(args.timeout),
    );
    upload::upload_episode(&client, args.upload_request(publish_at))
}
