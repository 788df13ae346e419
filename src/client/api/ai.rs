use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::ai::{ChatMessageDto, ChatReplyDto, ChatRequestDto, DescriptionDto, DescriptionRequestDto},
};

pub async fn generate_description(payload: DescriptionRequestDto) -> Result<String, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/ai/description").body(body)).await?;
    let dto: DescriptionDto = parse_response(response).await?;
    Ok(dto.description)
}

pub async fn chat(messages: Vec<ChatMessageDto>) -> Result<String, ApiError> {
    let body = serialize_json(&ChatRequestDto { messages })?;
    let response = send_request(post("/api/ai/chat").body(body)).await?;
    let dto: ChatReplyDto = parse_response(response).await?;
    Ok(dto.reply)
}
