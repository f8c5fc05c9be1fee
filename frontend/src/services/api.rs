use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AccountSummary, Credentials, DashboardConfig, ExchangeTokenRequest, IdentityService,
    LinkToken, LinkedAccount, LinkingService, PublicToken, ServiceError, SessionUser,
    SignInResponse, SignUpRequest,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkTokenRequest<'a> {
    user_id: &'a str,
}

/// API client for the identity, linking and account endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: DashboardConfig,
}

impl ApiClient {
    /// Create a new API client with the default configuration
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Balances of every account linked by the signed-in user
    pub async fn get_accounts(&self) -> Result<AccountSummary, ServiceError> {
        let url = self.config.endpoint("/api/accounts");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let text = read_body(response).await?;
        decode::<AccountSummary>(&text)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ServiceError> {
        let url = self.config.endpoint(path);

        match Request::post(&url)
            .json(body)
            .map_err(|e| ServiceError::Serialize(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => read_body(response).await,
            Err(e) => Err(ServiceError::Network(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl IdentityService for ApiClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<SessionUser>, ServiceError> {
        let text = self.post("/api/auth/sign-up", request).await?;
        if is_empty_body(&text) {
            return Ok(None);
        }
        decode::<Option<SessionUser>>(&text)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Option<SignInResponse>, ServiceError> {
        let text = self.post("/api/auth/sign-in", credentials).await?;
        if is_empty_body(&text) {
            return Ok(None);
        }
        let response = decode::<SignInResponse>(&text)?;
        Ok(response.is_truthy().then_some(response))
    }
}

#[async_trait(?Send)]
impl LinkingService for ApiClient {
    async fn create_link_token(&self, user: &SessionUser) -> Result<LinkToken, ServiceError> {
        let text = self
            .post("/api/link/token", &LinkTokenRequest { user_id: &user.id })
            .await?;
        decode::<LinkToken>(&text)
    }

    async fn exchange_public_token(
        &self,
        user: &SessionUser,
        public_token: &PublicToken,
    ) -> Result<LinkedAccount, ServiceError> {
        let request = ExchangeTokenRequest {
            user_id: user.id.clone(),
            public_token: public_token.public_token.clone(),
        };
        let text = self.post("/api/link/exchange", &request).await?;
        decode::<LinkedAccount>(&text)
    }
}

async fn read_body(response: Response) -> Result<String, ServiceError> {
    let ok = response.ok();
    let status = response.status();
    let text = response.text().await;

    if ok {
        text.map_err(|e| ServiceError::Decode(e.to_string()))
    } else {
        let message = text
            .ok()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(ServiceError::Http { status, message })
    }
}

fn is_empty_body(text: &str) -> bool {
    text.trim().is_empty()
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ServiceError> {
    serde_json::from_str(text).map_err(|e| ServiceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = ApiClient::with_config(DashboardConfig {
            api_base_url: "https://api.horizon.test/".to_string(),
            ..DashboardConfig::default()
        });
        assert_eq!(
            client.config().endpoint("/api/auth/sign-in"),
            "https://api.horizon.test/api/auth/sign-in"
        );
        assert_eq!(ApiClient::default(), ApiClient::new());
    }

    #[test]
    fn test_decode_session_user_variants() {
        let user = decode::<Option<SessionUser>>(r#"{"$id": "u1", "email": "a@b.co"}"#).unwrap();
        assert_eq!(user.map(|u| u.id), Some("u1".to_string()));
        assert_eq!(decode::<Option<SessionUser>>("null").unwrap(), None);
        assert!(is_empty_body("  \n"));
    }

    #[test]
    fn test_decode_reports_bad_json() {
        let err = decode::<LinkToken>("{\"nope\": 1}").unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[test]
    fn test_link_token_request_shape() {
        let json = serde_json::to_value(LinkTokenRequest { user_id: "u1" }).unwrap();
        assert_eq!(json["userId"], "u1");
    }
}
