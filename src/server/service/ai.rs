//! Listing descriptions and the chat assistant, backed by the Gemini API.

use serde::{Deserialize, Serialize};

use crate::{
    model::{
        ai::{ChatMessageDto, ChatRole, DescriptionRequestDto},
        listing::ListingType,
    },
    server::{
        config::GeminiConfig,
        error::{external::ExternalError, AppError},
    },
};

const PROVIDER: &str = "gemini";

pub const MAX_CHAT_MESSAGES: usize = 20;
pub const MAX_CHAT_MESSAGE_LENGTH: usize = 2000;

const ASSISTANT_INSTRUCTIONS: &str = "You are the OasisSpace assistant. Help visitors search \
    for homes to rent or buy, explain how listings, offers and seller verification work, and \
    keep answers short and friendly. Decline questions unrelated to real estate.";

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct AiService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a GeminiConfig,
}

impl<'a> AiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a GeminiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Writes a marketing description for a listing.
    ///
    /// # Returns
    /// - `Ok(String)` - Generated description
    /// - `Err(AppError::BadRequest)` - Name or address missing
    /// - `Err(AppError::ExternalErr)` - Gemini failed or returned no text
    pub async fn describe(&self, dto: &DescriptionRequestDto) -> Result<String, AppError> {
        if dto.name.trim().is_empty() || dto.address.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Name and address are required to generate a description".to_string(),
            ));
        }

        let prompt = description_prompt(dto);
        let request = GenerateRequest {
            system_instruction: None,
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: &prompt }],
            }],
        };

        self.generate(&request).await
    }

    /// Answers the latest message of a chat conversation.
    ///
    /// # Arguments
    /// - `messages` - Conversation so far, ending with the user's message
    ///
    /// # Returns
    /// - `Ok(String)` - Assistant reply
    /// - `Err(AppError::BadRequest)` - Conversation failed validation
    /// - `Err(AppError::ExternalErr)` - Gemini failed or returned no text
    pub async fn chat(&self, messages: &[ChatMessageDto]) -> Result<String, AppError> {
        validate_chat(messages)?;

        let request = GenerateRequest {
            system_instruction: Some(Content {
                role: "user",
                parts: vec![Part {
                    text: ASSISTANT_INSTRUCTIONS,
                }],
            }),
            contents: messages
                .iter()
                .map(|message| Content {
                    role: match message.role {
                        ChatRole::User => "user",
                        ChatRole::Assistant => "model",
                    },
                    parts: vec![Part {
                        text: &message.content,
                    }],
                })
                .collect(),
        };

        self.generate(&request).await
    }

    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.config.api_url, self.config.model
            ))
            .query(&[("key", &self.config.api_key)])
            .json(request)
            .send()
            .await?;

        let response = ExternalError::check(PROVIDER, response).await?;
        let body = response.json::<GenerateResponse>().await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        text.ok_or_else(|| {
            ExternalError::InvalidResponse {
                provider: PROVIDER,
                reason: "response contained no text candidate".to_string(),
            }
            .into()
        })
    }
}

/// Builds the prompt for a listing description.
pub fn description_prompt(dto: &DescriptionRequestDto) -> String {
    let purpose = match dto.listing_type {
        ListingType::Rent => "for rent",
        ListingType::Sale => "for sale",
    };
    let mut features = Vec::new();
    if dto.furnished {
        features.push("furnished");
    }
    if dto.parking {
        features.push("parking spot");
    }
    if dto.offer {
        features.push("special offer price");
    }
    let features = if features.is_empty() {
        "none listed".to_string()
    } else {
        features.join(", ")
    };

    format!(
        "Write an engaging real-estate listing description of about 120 words for a property {}.\n\
         Name: {}\nAddress: {}\nBedrooms: {}\nBathrooms: {}\nPrice: {}\nFeatures: {}\n\
         Return plain text only, without headings or markdown.",
        purpose,
        dto.name.trim(),
        dto.address.trim(),
        dto.bedrooms,
        dto.bathrooms,
        dto.regular_price,
        features
    )
}

/// Checks a chat conversation before it is forwarded.
pub fn validate_chat(messages: &[ChatMessageDto]) -> Result<(), AppError> {
    let Some(last) = messages.last() else {
        return Err(AppError::BadRequest("Conversation is empty".to_string()));
    };
    if last.role != ChatRole::User {
        return Err(AppError::BadRequest(
            "Conversation must end with a user message".to_string(),
        ));
    }
    if messages.len() > MAX_CHAT_MESSAGES {
        return Err(AppError::BadRequest(format!(
            "Conversation is limited to {} messages",
            MAX_CHAT_MESSAGES
        )));
    }
    if messages
        .iter()
        .any(|m| m.content.trim().is_empty() || m.content.chars().count() > MAX_CHAT_MESSAGE_LENGTH)
    {
        return Err(AppError::BadRequest(format!(
            "Messages must be between 1 and {} characters",
            MAX_CHAT_MESSAGE_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: ChatRole, content: &str) -> ChatMessageDto {
        ChatMessageDto {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn prompt_mentions_listing_details() {
        let prompt = description_prompt(&DescriptionRequestDto {
            name: "Palm Villa".to_string(),
            address: "12 Beach Road".to_string(),
            listing_type: ListingType::Sale,
            bedrooms: 3,
            bathrooms: 2,
            furnished: true,
            parking: false,
            offer: false,
            regular_price: 250000,
        });

        assert!(prompt.contains("for sale"));
        assert!(prompt.contains("Palm Villa"));
        assert!(prompt.contains("Bedrooms: 3"));
        assert!(prompt.contains("Features: furnished"));
    }

    #[test]
    fn chat_must_end_with_user_message() {
        assert!(validate_chat(&[]).is_err());
        assert!(validate_chat(&[message(ChatRole::User, "hi")]).is_ok());
        assert!(validate_chat(&[
            message(ChatRole::User, "hi"),
            message(ChatRole::Assistant, "hello")
        ])
        .is_err());
    }

    #[test]
    fn chat_rejects_long_conversations() {
        let messages: Vec<_> = (0..=MAX_CHAT_MESSAGES)
            .map(|_| message(ChatRole::User, "hi"))
            .collect();
        assert!(validate_chat(&messages).is_err());

        let long = "a".repeat(MAX_CHAT_MESSAGE_LENGTH + 1);
        assert!(validate_chat(&[message(ChatRole::User, &long)]).is_err());
    }
}
