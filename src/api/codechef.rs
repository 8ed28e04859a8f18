use serde_json::{Number, Value};

use crate::api::fetcher::UpstreamClient;
use crate::config::Platform;
use crate::model::profile::CodechefProfile;
use crate::util::json::{count, get_or_default};

pub static DEFAULT_STARS: &str = "Unrated";

/// The CodeChef numbers come from a community aggregator, not CodeChef itself.
pub async fn get_profile(client: &UpstreamClient, platform: &Platform) -> CodechefProfile {
    tracing::debug!(handle = %platform.handle, "fetching codechef profile");

    let user = client
        .fetch(&format!("{}/handle/{}", platform.api_base, platform.handle))
        .await
        .into_value();

    summarize(&platform.handle, &user)
}

pub fn summarize(handle: &str, user: &Value) -> CodechefProfile {
    CodechefProfile {
        username: handle.to_string(),
        stars: get_or_default(user, &["stars"], DEFAULT_STARS.to_string()),
        current_rating: get_or_default(user, &["currentRating"], Number::from(0)),
        highest_rating: get_or_default(user, &["highestRating"], Number::from(0)),
        contests_given: count(user, &["ratingData"]),
        country_rank: get_or_default(user, &["countryRank"], Number::from(0)),
    }
}
