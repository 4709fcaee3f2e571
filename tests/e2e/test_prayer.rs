use crate::e2e::helpers;

use helpers::storage::BUCKET_URL;
use helpers::{TestContext, MP3_BYTES};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

const PRAYER: &str = "For the morning light and every quiet mercy, we give thanks.";

fn key_of(url: &str) -> &str {
    url.strip_prefix(BUCKET_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_else(|| panic!("url outside bucket: {}", url))
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_and_store_prayer(ctx: &mut TestContext) {
    let completion = ctx
        .mock_completion("Generate a prayer about gratitude", PRAYER)
        .await;
    let synthesis = ctx.mock_synthesis("en-US-Wavenet-D").await;

    let response = ctx
        .client
        .post(
            "/generate-prayer",
            &json!({ "topic": "gratitude", "writer": "Maya Angelou", "language": "english" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    completion.assert_async().await;
    synthesis.assert_async().await;

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["prayer"], PRAYER);
    assert_eq!(body["language"], "english");
    let audio_url = body["audioUrl"].as_str().unwrap();
    let text_url = body["textUrl"].as_str().unwrap();
    assert!(audio_url.ends_with(".mp3"));
    assert!(text_url.ends_with(".txt"));

    // Both keys share the identifier and the language suffix
    let audio_key = key_of(audio_url);
    let text_key = key_of(text_url);
    let id = audio_key
        .strip_prefix("output-")
        .and_then(|rest| rest.strip_suffix("-english.mp3"))
        .unwrap();
    assert_eq!(text_key, format!("prayer-{}-english.txt", id));

    let objects = ctx.storage.objects();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].key, audio_key);
    assert_eq!(objects[0].body, MP3_BYTES);
    assert_eq!(objects[0].content_type, "audio/mpeg");
    assert_eq!(objects[1].key, text_key);
    assert_eq!(objects[1].body, PRAYER.as_bytes());
    assert_eq!(objects[1].content_type, "text/plain; charset=utf-8");

    assert_eq!(ctx.staged_file_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_language_prompt_and_voice(ctx: &mut TestContext) {
    let completion = ctx
        .mock_completion(
            "Génère une prière sur le thème : paix",
            "Seigneur, donne-nous la paix.",
        )
        .await;
    let synthesis = ctx.mock_synthesis("fr-FR-Wavenet-A").await;

    let response = ctx
        .client
        .post(
            "/generate-prayer",
            &json!({ "topic": "paix", "writer": "Victor Hugo", "language": "french" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    completion.assert_async().await;
    synthesis.assert_async().await;
    assert!(response.body.as_ref().unwrap()["audioUrl"]
        .as_str()
        .unwrap()
        .ends_with("-french.mp3"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_input_before_calling_apis(ctx: &mut TestContext) {
    let completion = ctx.mock_completion_unreachable().await;
    let synthesis = ctx.mock_synthesis_unreachable().await;

    let cases = [
        (
            json!({ "topic": "gratitude", "writer": "Maya Angelou", "language": "klingon" }),
            "Invalid language: klingon",
        ),
        (
            json!({ "topic": "procrastination", "writer": "Maya Angelou", "language": "english" }),
            "Invalid topic: procrastination",
        ),
        (
            json!({ "topic": "gratitude", "writer": "Nobody", "language": "english" }),
            "Invalid writer: Nobody",
        ),
    ];

    for (body, message) in cases {
        let response = ctx.client.post("/generate-prayer", &body).await.unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_text(message);
    }

    completion.assert_async().await;
    synthesis.assert_async().await;
    assert!(ctx.storage.objects().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_body(ctx: &mut TestContext) {
    let completion = ctx.mock_completion_unreachable().await;

    let response = ctx
        .client
        .post("/generate-prayer", &json!({ "topic": "gratitude" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx.client.post_raw("/generate-prayer", "{not json").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    completion.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_hide_synthesis_failure_details(ctx: &mut TestContext) {
    let _completion = ctx
        .mock_completion("Generate a prayer about gratitude", PRAYER)
        .await;
    let _synthesis = ctx.mock_synthesis_failure(403).await;

    let response = ctx
        .client
        .post(
            "/generate-prayer",
            &json!({ "topic": "gratitude", "writer": "Maya Angelou", "language": "english" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_text("Error generating prayer and audio");
    assert!(ctx.storage.objects().is_empty());
    assert_eq!(ctx.staged_file_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clean_up_staging_when_upload_fails(ctx: &mut TestContext) {
    let _completion = ctx
        .mock_completion("Generate a prayer about gratitude", PRAYER)
        .await;
    let _synthesis = ctx.mock_synthesis("en-US-Wavenet-D").await;
    ctx.storage.fail_uploads_with_prefix("prayer-");

    let response = ctx
        .client
        .post(
            "/generate-prayer",
            &json!({ "topic": "gratitude", "writer": "Maya Angelou", "language": "english" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_text("Error generating prayer and audio");

    // Audio went up first and is left without its text
    let objects = ctx.storage.objects();
    assert_eq!(objects.len(), 1);
    assert!(objects[0].key.starts_with("output-"));
    assert_eq!(ctx.staged_file_count(), 0);
}
