#[macro_use]
extern crate rocket;

mod api;
mod config;
mod logging;
mod middleware;
mod model;
mod util;

use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};

use api::fetcher::UpstreamClient;
use api::{codechef, codeforces, leetcode};
use config::AppConfig;
use middleware::catcher::{internal_server_error, not_found};
use middleware::cors::{preflight, Cors};
use model::profile::{CodechefProfile, CodeforcesProfile, LeetcodeProfile};

#[get("/")]
async fn index() -> &'static str {
    "GET /codeforces\nGET /codechef\nGET /leetcode"
}

#[get("/codeforces")]
async fn get_codeforces_profile(client: &State<UpstreamClient>, config: &State<AppConfig>) -> Json<CodeforcesProfile> {
    Json(codeforces::get_profile(client, &config.codeforces).await)
}

#[get("/codechef")]
async fn get_codechef_profile(client: &State<UpstreamClient>, config: &State<AppConfig>) -> Json<CodechefProfile> {
    Json(codechef::get_profile(client, &config.codechef).await)
}

#[get("/leetcode")]
async fn get_leetcode_profile(client: &State<UpstreamClient>, config: &State<AppConfig>) -> Json<LeetcodeProfile> {
    Json(leetcode::get_profile(client, &config.leetcode).await)
}

fn build(config: AppConfig) -> anyhow::Result<Rocket<Build>> {
    let client = UpstreamClient::new(config.upstream_timeout)?;
    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));

    Ok(rocket::custom(figment)
        .mount("/", routes![
            index, get_codeforces_profile, get_codechef_profile, get_leetcode_profile, preflight
        ])
        .register("/", catchers![
            not_found, internal_server_error
        ])
        .attach(Cors)
        .manage(client)
        .manage(config))
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = AppConfig::from_env()?;
    tracing::info!(
        codeforces = %config.codeforces.handle,
        codechef = %config.codechef.handle,
        leetcode = %config.leetcode.handle,
        "serving profiles on {}:{}", config.address, config.port
    );

    let _rocket = build(config)?
        .launch()
        .await
        .map_err(|err| anyhow::anyhow!("rocket failed to launch: {err}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rocket::http::{Method, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};

    async fn client_for(server: &MockServer) -> Client {
        let rocket = build(AppConfig::with_api_base(&server.base_url())).expect("valid rocket");
        Client::tracked(rocket).await.expect("valid rocket instance")
    }

    async fn get_json(client: &Client, uri: &str) -> Value {
        let response = client.get(uri).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        response.into_json::<Value>().await.expect("json body")
    }

    #[rocket::async_test]
    async fn codeforces_defaults_when_every_upstream_fails() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/codeforces").await;

        assert_eq!(
            body,
            json!({
                "username": "Prabhat_007",
                "title": "Unranked",
                "maxTitle": "None",
                "contestRating": 0,
                "maxContestRating": 0,
                "ratedContests": 0,
                "problemsSolved": 0
            })
        );
    }

    #[rocket::async_test]
    async fn codechef_defaults_when_upstream_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/handle/prabhats_007");
                then.status(503);
            })
            .await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/codechef").await;

        assert_eq!(
            body,
            json!({
                "username": "prabhats_007",
                "stars": "Unrated",
                "currentRating": 0,
                "highestRating": 0,
                "contestgiven": 0,
                "countryrank": 0
            })
        );
    }

    #[rocket::async_test]
    async fn leetcode_defaults_when_every_upstream_fails() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/leetcode").await;

        assert_eq!(
            body,
            json!({
                "username": "Prabhat_007",
                "title": "None",
                "contestRating": 0,
                "percentage": 0,
                "contestGiven": 0,
                "problemsSolved": 0
            })
        );
    }

    #[rocket::async_test]
    async fn codeforces_combines_three_upstream_calls() {
        let server = MockServer::start_async().await;
        let info = server
            .mock_async(|when, then| {
                when.method(GET).path("/user.info").query_param("handles", "Prabhat_007");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "result": [{ "rank": "specialist", "maxRank": "expert", "rating": 1480, "maxRating": 1611 }]
                }));
            })
            .await;
        let rating = server
            .mock_async(|when, then| {
                when.method(GET).path("/user.rating").query_param("handle", "Prabhat_007");
                then.status(200).json_body(json!({ "status": "OK", "result": [{}, {}, {}] }));
            })
            .await;
        let status = server
            .mock_async(|when, then| {
                when.method(GET).path("/user.status").query_param("handle", "Prabhat_007");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "result": [
                        { "verdict": "OK" },
                        { "verdict": "WRONG_ANSWER" },
                        { "verdict": "OK" },
                        { "verdict": "COMPILATION_ERROR" },
                        { "verdict": "OK" }
                    ]
                }));
            })
            .await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/codeforces").await;

        info.assert_async().await;
        rating.assert_async().await;
        status.assert_async().await;
        assert_eq!(
            body,
            json!({
                "username": "Prabhat_007",
                "title": "specialist",
                "maxTitle": "expert",
                "contestRating": 1480,
                "maxContestRating": 1611,
                "ratedContests": 3,
                "problemsSolved": 3
            })
        );
    }

    #[rocket::async_test]
    async fn codeforces_empty_user_list_does_not_block_other_calls() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user.info");
                then.status(200).json_body(json!({ "status": "OK", "result": [] }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user.rating");
                then.status(200).json_body(json!({ "status": "OK", "result": [{}, {}] }));
            })
            .await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/codeforces").await;

        assert_eq!(body["title"], "Unranked");
        assert_eq!(body["contestRating"], 0);
        assert_eq!(body["ratedContests"], 2);
        assert_eq!(body["problemsSolved"], 0);
    }

    #[rocket::async_test]
    async fn codechef_without_rating_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/handle/prabhats_007");
                then.status(200).json_body(json!({
                    "success": true,
                    "stars": "2★",
                    "currentRating": 1544,
                    "highestRating": 1602,
                    "countryRank": 35120
                }));
            })
            .await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/codechef").await;

        assert_eq!(body["stars"], "2★");
        assert_eq!(body["contestgiven"], 0);
        assert_eq!(body["countryrank"], 35120);
    }

    #[rocket::async_test]
    async fn leetcode_without_badge_but_with_solved_count() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/Prabhat_007/contest");
                then.status(200).json_body(json!({
                    "contestAttend": 9,
                    "contestRating": 1534.2,
                    "contestTopPercentage": 31.5
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/Prabhat_007/solved");
                then.status(200).json_body(json!({ "solvedProblem": 287 }));
            })
            .await;
        let client = client_for(&server).await;

        let body = get_json(&client, "/leetcode").await;

        assert_eq!(
            body,
            json!({
                "username": "Prabhat_007",
                "title": "None",
                "contestRating": 1534.2,
                "percentage": 31.5,
                "contestGiven": 9,
                "problemsSolved": 287
            })
        );
    }

    #[rocket::async_test]
    async fn repeated_calls_return_identical_bodies() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/Prabhat_007/contest");
                then.status(200).json_body(json!({ "contestBadges": { "name": "Guardian" }, "contestRating": 2210 }));
            })
            .await;
        let client = client_for(&server).await;

        let first = client.get("/leetcode").dispatch().await.into_string().await;
        let second = client.get("/leetcode").dispatch().await.into_string().await;

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[rocket::async_test]
    async fn profile_responses_are_flat_objects_with_cors() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;

        for uri in ["/codeforces", "/codechef", "/leetcode"] {
            let response = client.get(uri).dispatch().await;
            assert_eq!(response.status(), Status::Ok);
            assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("*"));

            let body = response.into_json::<Value>().await.expect("json body");
            let object = body.as_object().expect("object body");
            assert!(object.values().all(|v| v.is_string() || v.is_number()), "{uri} is not flat");
        }
    }

    #[rocket::async_test]
    async fn preflight_is_answered() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;

        let response = client.req(Method::Options, "/codeforces").dispatch().await;

        assert_eq!(response.status(), Status::NoContent);
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
    }

    #[rocket::async_test]
    async fn index_lists_routes_and_unknown_routes_are_json() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;

        let index = client.get("/").dispatch().await.into_string().await;
        assert_eq!(index.as_deref(), Some("GET /codeforces\nGET /codechef\nGET /leetcode"));

        let response = client.get("/atcoder").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body = response.into_json::<Value>().await.expect("json body");
        assert_eq!(body, json!({ "status": "not found", "message": "route not found" }));
    }
}
