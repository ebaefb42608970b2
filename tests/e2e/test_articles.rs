use crate::e2e::helpers;

use helpers::assertions::{assert_article_audio_response, PAUSE};
use helpers::synthesis_mocks::FAILING_TEXT;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ingest_article_and_detect_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles",
            &json!({
                "articleKey": "article-en",
                "textContent": "The quick brown fox jumps over the lazy dog.\n\n  Another   paragraph about the weather in London today.\n",
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let body = response.json.as_ref().unwrap();
    assert_eq!(body.get("articleKey").and_then(|v| v.as_str()), Some("article-en"));
    assert_eq!(body.get("language").and_then(|v| v.as_str()), Some("en"));
    assert_eq!(body.get("paragraphCount").and_then(|v| v.as_u64()), Some(2));

    let stored = ctx.fixtures.stored_content("article-en").await.unwrap();
    assert_eq!(
        stored.paragraphs,
        vec![
            "The quick brown fox jumps over the lazy dog.".to_string(),
            "Another paragraph about the weather in London today.".to_string(),
        ]
    );
    assert_eq!(stored.language.as_deref(), Some("en"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_language_given_by_caller(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles",
            &json!({
                "articleKey": "article-de",
                "textContent": "Short text.",
                "language": "de",
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let body = response.json.as_ref().unwrap();
    assert_eq!(body.get("language").and_then(|v| v.as_str()), Some("de"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_article_without_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles",
            &json!({ "articleKey": "blank", "textContent": " \n\t\n " }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("invalid_input", "no paragraphs");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_article_key(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles",
            &json!({ "articleKey": "../outside", "textContent": "Some text." }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("invalid_input", "relative path segment");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_and_store_article_audio(ctx: &TestContext) {
    ctx.fixtures
        .seed_article("article-1", &["First paragraph.", "Second paragraph."], Some("es"))
        .await
        .unwrap();

    let response = ctx
        .client
        .post_empty("/api/articles/article-1/audio")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json.as_ref().unwrap();
    assert_article_audio_response(body, "article-1", "Lucia");
    assert_eq!(body.get("fragmentCount").and_then(|v| v.as_u64()), Some(2));

    let expected = format!("First paragraph. {PAUSE}Second paragraph. {PAUSE}");
    assert_eq!(
        body.get("audioSizeBytes").and_then(|v| v.as_u64()),
        Some(expected.len() as u64)
    );

    let audio = ctx.fixtures.stored_audio("article-1").await.unwrap();
    assert_eq!(String::from_utf8(audio).unwrap(), expected);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_ingested_article_with_detected_voice(ctx: &TestContext) {
    ctx.client
        .post(
            "/api/articles",
            &json!({
                "articleKey": "article-fr",
                "textContent": "Ceci est un article écrit en français.\nLe gouvernement a annoncé de nouvelles mesures aujourd'hui.",
            }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .client
        .post_empty("/api/articles/article-fr/audio")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_article_audio_response(response.json.as_ref().unwrap(), "article-fr", "Lea");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_fallback_voice_for_article_without_language(ctx: &TestContext) {
    ctx.fixtures
        .seed_article("no-lang", &["Plain text."], None)
        .await
        .unwrap();

    let response = ctx
        .client
        .post_empty("/api/articles/no-lang/audio")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_article_audio_response(response.json.as_ref().unwrap(), "no-lang", "Joanna");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_missing_article(ctx: &TestContext) {
    let response = ctx
        .client
        .post_empty("/api/articles/missing/audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("not_found", "missing");
    assert!(ctx.synthesis.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_article_with_blank_paragraph(ctx: &TestContext) {
    ctx.fixtures
        .seed_raw_content("broken", r#"{"paragraphs": ["Fine.", ""], "iso2Lang": "en"}"#)
        .await
        .unwrap();

    let response = ctx
        .client
        .post_empty("/api/articles/broken/audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("invalid_input", "paragraph 1 is empty");
    assert!(ctx.synthesis.calls().is_empty());
    assert!(ctx.fixtures.stored_audio("broken").await.is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_article_record(ctx: &TestContext) {
    ctx.fixtures
        .seed_raw_content("garbled", r#"{"paragraphs": "not a list"}"#)
        .await
        .unwrap();

    let response = ctx
        .client
        .post_empty("/api/articles/garbled/audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("invalid_input", "article record is not valid");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_store_audio_when_synthesis_fails(ctx: &TestContext) {
    let broken = format!("This paragraph contains {}.", FAILING_TEXT);
    ctx.fixtures
        .seed_article("fails", &["Fine.", broken.as_str()], Some("en"))
        .await
        .unwrap();

    let response = ctx
        .client
        .post_empty("/api/articles/fails/audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error("synthesis_failed", "paragraph 1, chunk 0");
    assert!(ctx.fixtures.stored_audio("fails").await.is_none());
}
