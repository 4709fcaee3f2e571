use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_topics_for_language(ctx: &mut TestContext) {
    let response = ctx.client.get("/topics?language=english").await.unwrap();

    response.assert_status(StatusCode::OK);
    let topics: Vec<String> = response.json().unwrap();
    assert!(topics.contains(&"gratitude".to_string()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_writers_for_language(ctx: &mut TestContext) {
    let response = ctx.client.get("/writers?language=arabic").await.unwrap();

    response.assert_status(StatusCode::OK);
    let writers: Vec<String> = response.json().unwrap();
    assert!(writers.contains(&"نجيب محفوظ".to_string()));

    let response = ctx.client.get("/writers?language=french").await.unwrap();
    let writers: Vec<String> = response.json().unwrap();
    assert!(writers.contains(&"Victor Hugo".to_string()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_language(ctx: &mut TestContext) {
    let response = ctx.client.get("/topics?language=klingon").await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_text("Invalid language: klingon");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_language(ctx: &mut TestContext) {
    let response = ctx.client.get("/writers").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}
