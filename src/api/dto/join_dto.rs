//! Join request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::BingoError;

/// Longest accepted identity, after trimming.
pub const MAX_PHONE_NUMBER_LEN: usize = 32;

/// Request body for `POST /join`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    /// Player identity, usually a phone number such as `"+251911000000"`.
    pub phone_number: String,
    /// Bingo card to claim (1 or higher).
    pub card_id: u32,
}

impl JoinRequest {
    /// Trims and checks the payload, returning the identity and card.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::InvalidPayload`] for an empty or over-long
    /// identity or a zero card.
    pub fn validate(&self) -> Result<(&str, u32), BingoError> {
        let phone_number = self.phone_number.trim();
        if phone_number.is_empty() {
            return Err(BingoError::InvalidPayload(
                "phoneNumber must not be empty".to_string(),
            ));
        }
        if phone_number.chars().count() > MAX_PHONE_NUMBER_LEN {
            return Err(BingoError::InvalidPayload(format!(
                "phoneNumber must be at most {MAX_PHONE_NUMBER_LEN} characters"
            )));
        }
        if self.card_id == 0 {
            return Err(BingoError::InvalidPayload(
                "cardId must be 1 or higher".to_string(),
            ));
        }
        Ok((phone_number, self.card_id))
    }
}

/// Response body for a successful `POST /join`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    /// Always `"Joined successfully"`.
    pub message: String,
    /// Players in the lobby after this join.
    pub players_count: usize,
    /// `true` if this join started the round.
    pub round_started: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(phone_number: &str, card_id: u32) -> JoinRequest {
        JoinRequest {
            phone_number: phone_number.to_string(),
            card_id,
        }
    }

    #[test]
    fn validate_trims_identity() {
        assert_eq!(request("  +1000 ", 4).validate(), Ok(("+1000", 4)));
    }

    #[test]
    fn validate_rejects_blank_and_zero() {
        assert!(matches!(
            request("   ", 1).validate(),
            Err(BingoError::InvalidPayload(_))
        ));
        assert!(matches!(
            request("+1000", 0).validate(),
            Err(BingoError::InvalidPayload(_))
        ));
    }

    #[test]
    fn validate_rejects_long_identity() {
        let long = "9".repeat(MAX_PHONE_NUMBER_LEN + 1);
        assert!(matches!(
            request(&long, 1).validate(),
            Err(BingoError::InvalidPayload(_))
        ));
        let exact = "9".repeat(MAX_PHONE_NUMBER_LEN);
        assert!(request(&exact, 1).validate().is_ok());
    }

    #[test]
    fn request_uses_camel_case_keys() {
        let parsed: Result<JoinRequest, _> =
            serde_json::from_str(r#"{"phoneNumber":"+1000","cardId":1}"#);
        assert!(parsed.is_ok());
        let snake: Result<JoinRequest, _> =
            serde_json::from_str(r#"{"phone_number":"+1000","card_id":1}"#);
        assert!(snake.is_err());
    }
}
