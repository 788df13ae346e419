use super::*;
use crate::{
    model::{
        ai::{ChatMessageDto, ChatRole, DescriptionRequestDto},
        listing::ListingType,
    },
    server::{error::external::ExternalError, service::ai::AiService},
};
use wiremock::matchers::query_param;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

/// Tests generating a listing description.
///
/// Expected: Ok(String) with the candidate text trimmed
#[tokio::test]
async fn generates_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "gemini-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(" A lovely home. \n")))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let description = AiService::new(&http_client, &config.gemini)
        .describe(&DescriptionRequestDto {
            name: "Palm Villa".to_string(),
            address: "12 Beach Road".to_string(),
            listing_type: ListingType::Rent,
            bedrooms: 2,
            bathrooms: 1,
            furnished: false,
            parking: true,
            offer: false,
            regular_price: 1800,
        })
        .await
        .unwrap();

    assert_eq!(description, "A lovely home.");
}

/// Tests a chat reply.
///
/// Expected: Ok(String) from the first candidate
#[tokio::test]
async fn answers_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Try the search page.")))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let answer = AiService::new(&http_client, &config.gemini)
        .chat(&[ChatMessageDto {
            role: ChatRole::User,
            content: "How do I find rentals?".to_string(),
        }])
        .await
        .unwrap();

    assert_eq!(answer, "Try the search page.");
}

/// Tests a response without any candidate.
///
/// Expected: Err(ExternalError::InvalidResponse)
#[tokio::test]
async fn rejects_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let result = AiService::new(&http_client, &config.gemini)
        .chat(&[ChatMessageDto {
            role: ChatRole::User,
            content: "Hello".to_string(),
        }])
        .await;

    assert!(matches!(
        result,
        Err(AppError::ExternalErr(ExternalError::InvalidResponse { .. }))
    ));
}
