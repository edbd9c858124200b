use crate::{
    AuditList, AuditRequest, ListAuditsRequest, RegisterRequest, TokenRequest, TokenResponse,
    UpdateProfileRequest, UserProfile,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// How the request body goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// No body (GET).
    Empty,
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
}

/// Whether the endpoint wants a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    None,
    /// Attached when a token is available.
    Optional,
    Required,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    const ENCODING: BodyEncoding;
    const AUTH: AuthMode;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for TokenRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/api/token";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Form;
    const AUTH: AuthMode = AuthMode::None;
}

/// Register a new account. Success bodies vary, so they stay untyped.
impl ApiRequest for RegisterRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = "/api/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Json;
    const AUTH: AuthMode = AuthMode::None;
}

/// Submit an audit. The result is loosely typed and goes through the normalizer.
impl ApiRequest for AuditRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = "/api/audit";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: BodyEncoding = BodyEncoding::Json;
    const AUTH: AuthMode = AuthMode::Optional;
}

impl ApiRequest for ListAuditsRequest {
    type Response = AuditList;
    const PATH: &'static str = "/api/user/audits";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: BodyEncoding = BodyEncoding::Empty;
    const AUTH: AuthMode = AuthMode::Required;
}

impl ApiRequest for UpdateProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/api/user/profile";
    const METHOD: HttpMethod = HttpMethod::Put;
    const ENCODING: BodyEncoding = BodyEncoding::Json;
    const AUTH: AuthMode = AuthMode::Required;
}

// =========================================================
// Body encoding
// =========================================================

/// Encode a flat struct as `application/x-www-form-urlencoded`.
///
/// Nested values are skipped; `null` fields are omitted.
pub fn encode_form<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(value)?;
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    if let serde_json::Value::Object(fields) = value {
        for (key, field) in fields {
            match field {
                serde_json::Value::String(s) => {
                    serializer.append_pair(&key, &s);
                }
                serde_json::Value::Number(n) => {
                    serializer.append_pair(&key, &n.to_string());
                }
                serde_json::Value::Bool(b) => {
                    serializer.append_pair(&key, if b { "true" } else { "false" });
                }
                _ => {}
            }
        }
    }
    Ok(serializer.finish())
}

/// Encode a request body according to the endpoint's declared encoding.
pub fn encode_body<R: ApiRequest>(request: &R) -> Result<Option<String>, serde_json::Error> {
    match R::ENCODING {
        BodyEncoding::Empty => Ok(None),
        BodyEncoding::Json => serde_json::to_string(request).map(Some),
        BodyEncoding::Form => encode_form(request).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_request_is_form_encoded() {
        let req = TokenRequest {
            username: "a+b@example.com".into(),
            password: "p@ss word".into(),
        };
        let body = encode_body(&req).unwrap().unwrap();
        assert_eq!(body, "username=a%2Bb%40example.com&password=p%40ss+word");
    }

    #[test]
    fn profile_update_omits_absent_new_password() {
        let req = UpdateProfileRequest {
            nom: None,
            prenom: Some("Jane".into()),
            email: "jane@example.com".into(),
            current_password: "secret".into(),
            new_password: None,
        };
        let body = encode_body(&req).unwrap().unwrap();
        assert!(!body.contains("new_password"));
        assert!(body.contains("\"nom\":null"));
    }

    #[test]
    fn list_audits_has_no_body() {
        assert_eq!(encode_body(&ListAuditsRequest).unwrap(), None);
        assert_eq!(ListAuditsRequest::AUTH, AuthMode::Required);
    }
}
