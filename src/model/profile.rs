use rocket::serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CodeforcesProfile {
    pub username: String,
    pub title: String,
    pub max_title: String,
    pub contest_rating: Number,
    pub max_contest_rating: Number,
    pub rated_contests: usize,
    pub problems_solved: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CodechefProfile {
    pub username: String,
    pub stars: String,
    pub current_rating: Number,
    pub highest_rating: Number,
    #[serde(rename = "contestgiven")]
    pub contests_given: usize,
    #[serde(rename = "countryrank")]
    pub country_rank: Number,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct LeetcodeProfile {
    pub username: String,
    pub title: String,
    pub contest_rating: Number,
    pub percentage: Number,
    pub contest_given: Number,
    pub problems_solved: Number,
}
