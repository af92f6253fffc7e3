use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{
    Diet, Exercise, LoginRequest, LoginResponse, Member, NewDiet, NewExercise, NewMember,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("istek gönderilemedi: {0}")]
    Request(#[from] reqwest::Error),
    #[error("sunucu {status} döndürdü: {body}")]
    Status { status: StatusCode, body: String },
}

impl ApiError {
    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Request(_))
    }

    /// Raw body of an HTTP error response, if the server sent any text.
    pub fn server_text(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }

    /// `message` field of a JSON error body, the shape the auth endpoint
    /// answers with.
    pub fn server_message(&self) -> Option<String> {
        let body: serde_json::Value = serde_json::from_str(self.server_text()?).ok()?;
        body.get("message")?.as_str().map(str::to_owned)
    }
}

/// Blocking client for the FitLife backend. Cheap to clone; every worker
/// thread gets its own handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post(self.login_url(), request)
    }

    pub fn list_members(&self) -> Result<Vec<Member>, ApiError> {
        self.get(self.members_url())
    }

    pub fn create_member(&self, member: &NewMember) -> Result<Member, ApiError> {
        self.post(self.create_member_url(), member)
    }

    pub fn list_exercises(&self, member_id: &str) -> Result<Vec<Exercise>, ApiError> {
        self.get(self.exercises_url(member_id))
    }

    pub fn create_exercise(
        &self,
        member_id: &str,
        exercise: &NewExercise,
    ) -> Result<Exercise, ApiError> {
        self.post(self.create_exercise_url(member_id), exercise)
    }

    pub fn list_diets(&self, member_id: &str) -> Result<Vec<Diet>, ApiError> {
        self.get(self.diets_url(member_id))
    }

    pub fn create_diet(&self, member_id: &str, diet: &NewDiet) -> Result<Diet, ApiError> {
        self.post(self.create_diet_url(member_id), diet)
    }

    fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");
        decode(self.client.get(&url).send()?)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, url: String, body: &B) -> Result<T, ApiError> {
        tracing::debug!("POST {url}");
        decode(self.client.post(&url).json(body).send()?)
    }

    // The backend serves reads and writes under different prefixes, and
    // the member pair is split the opposite way (list under admin,
    // create under read). Kept exactly as deployed; see ApiConfig.

    fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.config.base_url)
    }

    fn members_url(&self) -> String {
        format!("{}{}/members", self.config.base_url, self.config.admin_prefix)
    }

    fn create_member_url(&self) -> String {
        format!("{}{}/users", self.config.base_url, self.config.read_prefix)
    }

    fn exercises_url(&self, member_id: &str) -> String {
        format!(
            "{}{}/users/{}/exercises",
            self.config.base_url, self.config.read_prefix, member_id
        )
    }

    fn create_exercise_url(&self, member_id: &str) -> String {
        format!(
            "{}{}/users/{}/exercises",
            self.config.base_url, self.config.admin_prefix, member_id
        )
    }

    fn diets_url(&self, member_id: &str) -> String {
        format!(
            "{}{}/users/{}/diets",
            self.config.base_url, self.config.read_prefix, member_id
        )
    }

    fn create_diet_url(&self, member_id: &str) -> String {
        format!(
            "{}{}/users/{}/diets",
            self.config.base_url, self.config.admin_prefix, member_id
        )
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json()?)
    } else {
        let body = response.text().unwrap_or_default();
        tracing::warn!("sunucu hatası {status}: {body}");
        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::default())
    }

    #[test]
    fn read_endpoints_use_the_v1_prefix() {
        let api = client();
        assert_eq!(
            api.exercises_url("42"),
            "http://localhost:8082/api/v1/users/42/exercises"
        );
        assert_eq!(api.diets_url("42"), "http://localhost:8082/api/v1/users/42/diets");
    }

    #[test]
    fn write_endpoints_use_the_admin_prefix() {
        let api = client();
        assert_eq!(
            api.create_exercise_url("42"),
            "http://localhost:8082/api/admin/users/42/exercises"
        );
        assert_eq!(
            api.create_diet_url("42"),
            "http://localhost:8082/api/admin/users/42/diets"
        );
    }

    #[test]
    fn member_endpoints_keep_their_inverted_split() {
        let api = client();
        assert_eq!(api.members_url(), "http://localhost:8082/api/admin/members");
        assert_eq!(api.create_member_url(), "http://localhost:8082/api/v1/users");
    }

    #[test]
    fn login_lives_outside_both_prefixes() {
        assert_eq!(client().login_url(), "http://localhost:8082/api/auth/login");
    }

    #[test]
    fn prefixes_follow_the_configuration() {
        let api = ApiClient::new(ApiConfig {
            base_url: "http://fit.example.com:9000".to_string(),
            read_prefix: "/api/v2".to_string(),
            admin_prefix: "/api/yonetim".to_string(),
        });
        assert_eq!(
            api.exercises_url("7"),
            "http://fit.example.com:9000/api/v2/users/7/exercises"
        );
        assert_eq!(
            api.create_diet_url("7"),
            "http://fit.example.com:9000/api/yonetim/users/7/diets"
        );
    }

    #[test]
    fn server_message_reads_the_json_message_field() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"message":"Geçersiz email veya şifre"}"#.to_string(),
        };
        assert_eq!(err.server_message().as_deref(), Some("Geçersiz email veya şifre"));
        assert!(!err.is_connection());
    }

    #[test]
    fn server_message_is_none_for_plain_text_bodies() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "email already taken".to_string(),
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.server_text(), Some("email already taken"));
    }

    #[test]
    fn blank_error_bodies_yield_no_server_text() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "  ".to_string(),
        };
        assert_eq!(err.server_text(), None);
        assert_eq!(err.server_message(), None);
    }
}
