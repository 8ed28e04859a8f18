use serde_json::{Number, Value};

use crate::api::fetcher::UpstreamClient;
use crate::config::Platform;
use crate::model::profile::CodeforcesProfile;
use crate::util::json::{count, count_where, get_or_default};

pub static DEFAULT_TITLE: &str = "Unranked";
pub static DEFAULT_MAX_TITLE: &str = "None";
pub static ACCEPTED_VERDICT: &str = "OK";

pub async fn get_profile(client: &UpstreamClient, platform: &Platform) -> CodeforcesProfile {
    tracing::debug!(handle = %platform.handle, "fetching codeforces profile");

    let user_info = client
        .fetch(&format!("{}/user.info?handles={}", platform.api_base, platform.handle))
        .await
        .into_value();
    let rating_history = client
        .fetch(&format!("{}/user.rating?handle={}", platform.api_base, platform.handle))
        .await
        .into_value();
    let submissions = client
        .fetch(&format!("{}/user.status?handle={}", platform.api_base, platform.handle))
        .await
        .into_value();

    summarize(&platform.handle, &user_info, &rating_history, &submissions)
}

/// Builds the summary from the three (possibly empty) upstream bodies.
pub fn summarize(
    handle: &str,
    user_info: &Value,
    rating_history: &Value,
    submissions: &Value,
) -> CodeforcesProfile {
    let field = |name| ["result", "0", name];

    CodeforcesProfile {
        username: handle.to_string(),
        title: get_or_default(user_info, &field("rank"), DEFAULT_TITLE.to_string()),
        max_title: get_or_default(user_info, &field("maxRank"), DEFAULT_MAX_TITLE.to_string()),
        contest_rating: get_or_default(user_info, &field("rating"), Number::from(0)),
        max_contest_rating: get_or_default(user_info, &field("maxRating"), Number::from(0)),
        rated_contests: count(rating_history, &["result"]),
        problems_solved: count_where(submissions, &["result"], |submission| {
            submission["verdict"] == ACCEPTED_VERDICT
        }),
    }
}
