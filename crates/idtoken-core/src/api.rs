use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            return_secure_token: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub local_id: String,
    pub email: String,
    #[serde(deserialize_with = "seconds_from_number_or_string")]
    pub expires_in: u64,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
}

impl ErrorEnvelope {
    pub fn message(&self) -> &str {
        &self.error.message
    }
}

// The service sends `expiresIn` as a decimal string; tolerate plain integers too.
fn seconds_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(u64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Number(value) => Ok(value),
        Seconds::Text(value) => value
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid expiresIn: {value:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_wire_field_names() {
        let body = serde_json::to_value(SignInRequest::new("a@example.com", "pw")).expect("json");
        assert_eq!(
            body,
            json!({
                "email": "a@example.com",
                "password": "pw",
                "returnSecureToken": true
            })
        );
    }

    #[test]
    fn response_accepts_string_expiry() {
        let response: SignInResponse = serde_json::from_value(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "uid-1",
            "email": "a@example.com",
            "displayName": "",
            "idToken": "id-token",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        }))
        .expect("response");
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.local_id, "uid-1");
        assert_eq!(response.id_token, "id-token");
    }

    #[test]
    fn response_accepts_numeric_expiry() {
        let response: SignInResponse = serde_json::from_value(json!({
            "localId": "uid-1",
            "email": "a@example.com",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "expiresIn": 1800
        }))
        .expect("response");
        assert_eq!(response.expires_in, 1800);
    }

    #[test]
    fn response_rejects_garbage_expiry() {
        let result = serde_json::from_value::<SignInResponse>(json!({
            "localId": "uid-1",
            "email": "a@example.com",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "expiresIn": "soon"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn response_requires_token() {
        let result = serde_json::from_value::<SignInResponse>(json!({
            "localId": "uid-1",
            "email": "a@example.com",
            "expiresIn": "3600"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn error_envelope_reads_message() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": {
                "code": 400,
                "message": "INVALID_PASSWORD",
                "errors": [{"message": "INVALID_PASSWORD", "domain": "global", "reason": "invalid"}]
            }
        }))
        .expect("envelope");
        assert_eq!(envelope.message(), "INVALID_PASSWORD");
        assert_eq!(envelope.error.code, Some(400));
    }
}
