use serde_json::{Number, Value};

use crate::api::fetcher::UpstreamClient;
use crate::config::Platform;
use crate::model::profile::LeetcodeProfile;
use crate::util::json::get_or_default;

pub static DEFAULT_TITLE: &str = "None";

pub async fn get_profile(client: &UpstreamClient, platform: &Platform) -> LeetcodeProfile {
    tracing::debug!(handle = %platform.handle, "fetching leetcode profile");

    let contest = client
        .fetch(&format!("{}/{}/contest", platform.api_base, platform.handle))
        .await
        .into_value();
    let solved = client
        .fetch(&format!("{}/{}/solved", platform.api_base, platform.handle))
        .await
        .into_value();

    summarize(&platform.handle, &contest, &solved)
}

pub fn summarize(handle: &str, contest: &Value, solved: &Value) -> LeetcodeProfile {
    LeetcodeProfile {
        username: handle.to_string(),
        title: get_or_default(contest, &["contestBadges", "name"], DEFAULT_TITLE.to_string()),
        contest_rating: get_or_default(contest, &["contestRating"], Number::from(0)),
        percentage: get_or_default(contest, &["contestTopPercentage"], Number::from(0)),
        contest_given: get_or_default(contest, &["contestAttend"], Number::from(0)),
        problems_solved: get_or_default(solved, &["solvedProblem"], Number::from(0)),
    }
}
