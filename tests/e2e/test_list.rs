use crate::e2e::helpers;

use helpers::storage::BUCKET_URL;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_empty_bucket(ctx: &mut TestContext) {
    let response = ctx.client.get("/list-prayers").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.unwrap(), json!({ "prayers": [] }));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pair_audio_with_text(ctx: &mut TestContext) {
    ctx.storage.insert("output-a-english.mp3", &[0xFF], "audio/mpeg");
    ctx.storage.insert("prayer-a-english.txt", "Amen".as_bytes(), "text/plain");
    ctx.storage.insert("output-b.mp3", &[0xFF], "audio/mpeg");
    ctx.storage.insert("prayer-b.txt", "آمين".as_bytes(), "text/plain");
    ctx.storage.insert("poster-c.png", &[0x89], "image/png");

    let response = ctx.client.get("/list-prayers").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.unwrap(),
        json!({
            "prayers": [
                {
                    "audioUrl": format!("{}/output-a-english.mp3", BUCKET_URL),
                    "textUrl": format!("{}/prayer-a-english.txt", BUCKET_URL),
                    "text": "Amen"
                },
                {
                    "audioUrl": format!("{}/output-b.mp3", BUCKET_URL),
                    "textUrl": format!("{}/prayer-b.txt", BUCKET_URL),
                    "text": "آمين"
                }
            ]
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_entries_with_missing_text(ctx: &mut TestContext) {
    ctx.storage.insert("output-orphan-french.mp3", &[0xFF], "audio/mpeg");

    let response = ctx.client.get("/list-prayers").await.unwrap();

    response.assert_status(StatusCode::OK);
    let prayers = response.body.as_ref().unwrap()["prayers"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(prayers.len(), 1);
    assert_eq!(
        prayers[0]["textUrl"],
        format!("{}/prayer-orphan-french.txt", BUCKET_URL)
    );
    assert!(prayers[0].get("text").is_none());
}
