use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use super::AccountService;

/// A registration to submit to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAccount {
    pub id: String,
    pub email: String,
}

/// A failure to create an account. All failures surface the same way to the
/// user, the detail is only for the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "Account service error (HTTP {}): {}", status, self.error)
        } else {
            write!(f, "Account service error: {}", self.error)
        }
    }
}

impl std::error::Error for AccountError {}

impl From<reqwest::Error> for AccountError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AccountError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl AccountService for AccountClient {
    async fn create_account(&self, account: NewAccount) -> Result<CreatedAccount, AccountError> {
        let response = self.post_json("users", &account).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AccountError {
                http_status: Some(status.as_u16()),
                error: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response body".to_string()),
            });
        }
        let created = response.json().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_uses_the_backend_field_names() {
        let account = NewAccount {
            first_name: "Maria".to_string(),
            last_name: "Rossi".to_string(),
            email: "maria@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&account).unwrap(),
            r#"{"firstName":"Maria","lastName":"Rossi","email":"maria@example.com"}"#
        );
    }

    #[test]
    fn created_account_is_decoded_from_the_backend_response() {
        let created: CreatedAccount =
            serde_json::from_str(r#"{"id":"42","email":"maria@example.com"}"#).unwrap();
        assert_eq!(
            created,
            CreatedAccount {
                id: "42".to_string(),
                email: "maria@example.com".to_string(),
            }
        );
    }

    #[test]
    fn account_error_display_mentions_the_status() {
        let error = AccountError {
            http_status: Some(500),
            error: "Internal Server Error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Account service error (HTTP 500): Internal Server Error"
        );

        let error = AccountError {
            http_status: None,
            error: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Account service error: connection refused");
    }
}
