//! Paginated listing tests.

mod common;

use common::{page_params, TestServer};
use serde_json::{json, Value};

async fn list(server: &TestServer, query: &[(&str, &str)]) -> (u16, Value) {
    let response = reqwest::Client::new()
        .get(server.schools_url())
        .query(query)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn link(body: &Value, name: &str) -> Option<(u64, u64)> {
    body["links"].get(name).map(|l| page_params(l.as_str().unwrap()))
}

#[tokio::test]
async fn test_list_schools_simple() {
    let server = TestServer::start_with_schools(150).await;
    let (status, body) = list(&server, &[]).await;

    assert_eq!(status, 200);
    assert_eq!(body["schools"].as_array().unwrap().len(), 100);
    assert_eq!(body["meta"]["total"], 150);
    assert_eq!(link(&body, "first"), Some((0, 100)));
    assert_eq!(link(&body, "last"), Some((100, 100)));
    assert_eq!(link(&body, "next"), Some((100, 100)));
    assert_eq!(link(&body, "prev"), None);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let server = TestServer::start().await;
    let (status, body) = list(&server, &[("limit", "10")]).await;

    assert_eq!(status, 200);
    assert_eq!(body["schools"], json!([]));
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["links"]["first"], body["links"]["last"]);
    assert_eq!(link(&body, "first"), Some((0, 10)));
    assert!(body["links"].get("next").is_none());
    assert!(body["links"].get("prev").is_none());
}

#[tokio::test]
async fn test_list_first_and_last_pages_of_250() {
    let server = TestServer::start_with_schools(250).await;

    let (_, body) = list(&server, &[("limit", "100"), ("offset", "0")]).await;
    let schools = body["schools"].as_array().unwrap();
    assert_eq!(schools.len(), 100);
    assert_eq!(schools[0]["id"], 0);
    assert_eq!(schools[99]["id"], 99);
    assert_eq!(link(&body, "next"), Some((100, 100)));
    assert_eq!(link(&body, "prev"), None);
    assert_eq!(link(&body, "last"), Some((200, 100)));

    let (_, body) = list(&server, &[("limit", "100"), ("offset", "200")]).await;
    let schools = body["schools"].as_array().unwrap();
    assert_eq!(schools.len(), 50);
    assert_eq!(schools[0]["id"], 200);
    assert_eq!(schools[49]["id"], 249);
    assert_eq!(link(&body, "next"), None);
    assert_eq!(link(&body, "prev"), Some((100, 100)));
}

#[tokio::test]
async fn test_list_schools_pagination() {
    let server = TestServer::start_with_schools(95).await;
    let (status, body) = list(&server, &[("offset", "10"), ("limit", "10")]).await;

    assert_eq!(status, 200);
    assert_eq!(link(&body, "next"), Some((20, 10)));
    assert_eq!(link(&body, "prev"), Some((0, 10)));
    assert_eq!(link(&body, "first"), Some((0, 10)));
    assert_eq!(link(&body, "last"), Some((90, 10)));
}

#[tokio::test]
async fn test_list_offset_past_end() {
    let server = TestServer::start_with_schools(250).await;
    let (status, body) = list(&server, &[("offset", "1000"), ("limit", "100")]).await;

    assert_eq!(status, 200);
    assert_eq!(body["schools"], json!([]));
    assert_eq!(body["meta"]["total"], 250);
    assert_eq!(link(&body, "next"), None);
    assert_eq!(link(&body, "prev"), Some((200, 100)));
    assert_eq!(link(&body, "last"), Some((200, 100)));
}

#[tokio::test]
async fn test_walking_next_links_visits_every_school() {
    let server = TestServer::start_with_schools(57).await;
    let client = reqwest::Client::new();

    let mut url = format!("{}?limit=10", server.schools_url());
    let mut seen = Vec::new();
    loop {
        let body: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        for school in body["schools"].as_array().unwrap() {
            seen.push(school["id"].as_u64().unwrap());
        }
        match body["links"].get("next") {
            Some(next) => url = next.as_str().unwrap().to_string(),
            None => break,
        }
    }
    assert_eq!(seen, (0..57).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_list_reflects_new_schools() {
    let server = TestServer::start_with_schools(10).await;
    let client = reqwest::Client::new();

    let (_, body) = list(&server, &[("limit", "10")]).await;
    assert!(body["links"].get("next").is_none());
    assert_eq!(link(&body, "last"), Some((0, 10)));

    client
        .post(server.schools_url())
        .json(&json!({ "name": "Eleventh" }))
        .send()
        .await
        .unwrap();

    let (_, body) = list(&server, &[("limit", "10")]).await;
    assert_eq!(body["meta"]["total"], 11);
    assert_eq!(link(&body, "next"), Some((10, 10)));
    assert_eq!(link(&body, "last"), Some((10, 10)));
}

#[tokio::test]
async fn test_list_schools_bad_limits() {
    let server = TestServer::start().await;
    let bad_limit_msg = "limit query parameter must be at least 1 and no greater than 100";

    for limit in ["0", "-1", "1000"] {
        let (status, body) = list(&server, &[("limit", limit)]).await;
        assert_eq!(status, 400);
        assert_eq!(body["code"], "InvalidLimit");
        assert_eq!(body["message"], bad_limit_msg);
    }

    let (status, body) = list(&server, &[("limit", "many")]).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "limit query parameter must be a number");
}

#[tokio::test]
async fn test_list_schools_bad_offset() {
    let server = TestServer::start().await;

    let (status, body) = list(&server, &[("offset", "-1")]).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "InvalidOffset");
    assert_eq!(body["message"], "offset query parameter must be at least 0");

    let (status, body) = list(&server, &[("offset", "first")]).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "offset query parameter must be a number");
}
