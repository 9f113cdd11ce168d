// file: src/daemon/client.rs
// version: 1.3.0
// guid: a2f6c8d3-9e1b-4f7a-8c4d-5b0e3a9f7c26

//! HTTP client for the davit configuration daemon
//!
//! One blocking-style call per operation, no retries, no local timeouts beyond
//! the transport default. Failure bodies from the daemon are surfaced verbatim.

use crate::config::GoogleCloudBuildAccount;
use crate::{DavitError, Result};
use tracing::debug;
use url::Url;

#[cfg(test)]
use std::sync::{Mutex, MutexGuard, OnceLock};

#[cfg(test)]
#[derive(Default)]
struct MockResponses {
    get_account: Option<Result<GoogleCloudBuildAccount>>,
    set_account: Option<Result<()>>,
    add_account: Option<Result<()>>,
    delete_account: Option<Result<()>>,
    list_accounts: Option<Result<Vec<GoogleCloudBuildAccount>>>,
    submitted: Vec<SubmittedAccount>,
}

/// One recorded submit call, for asserting call counts and forwarded flags
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SubmittedAccount {
    pub name: String,
    pub validate: bool,
    pub account: GoogleCloudBuildAccount,
}

#[cfg(test)]
static MOCK_RESPONSES: OnceLock<Mutex<MockResponses>> = OnceLock::new();

#[cfg(test)]
static MOCK_SESSION: OnceLock<Mutex<()>> = OnceLock::new();

#[cfg(test)]
fn mock_storage() -> &'static Mutex<MockResponses> {
    MOCK_RESPONSES.get_or_init(|| Mutex::new(MockResponses::default()))
}

/// Serialize access to the process-global mock state and reset it.
///
/// Hold the returned guard for the duration of the test.
#[cfg(test)]
pub(crate) fn mock_session() -> MutexGuard<'static, ()> {
    let guard = MOCK_SESSION
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    *mock_storage().lock().unwrap() = MockResponses::default();
    guard
}

#[cfg(test)]
pub(crate) fn set_mock_get_account(result: Result<GoogleCloudBuildAccount>) {
    mock_storage().lock().unwrap().get_account = Some(result);
}

#[cfg(test)]
pub(crate) fn set_mock_set_account(result: Result<()>) {
    mock_storage().lock().unwrap().set_account = Some(result);
}

#[cfg(test)]
pub(crate) fn set_mock_add_account(result: Result<()>) {
    mock_storage().lock().unwrap().add_account = Some(result);
}

#[cfg(test)]
pub(crate) fn set_mock_delete_account(result: Result<()>) {
    mock_storage().lock().unwrap().delete_account = Some(result);
}

#[cfg(test)]
pub(crate) fn set_mock_list_accounts(result: Result<Vec<GoogleCloudBuildAccount>>) {
    mock_storage().lock().unwrap().list_accounts = Some(result);
}

#[cfg(test)]
pub(crate) fn take_submitted_accounts() -> Vec<SubmittedAccount> {
    std::mem::take(&mut mock_storage().lock().unwrap().submitted)
}

#[cfg(test)]
fn take_mock_get_account() -> Option<Result<GoogleCloudBuildAccount>> {
    mock_storage().lock().unwrap().get_account.take()
}

#[cfg(test)]
fn take_mock_set_account() -> Option<Result<()>> {
    mock_storage().lock().unwrap().set_account.take()
}

#[cfg(test)]
fn take_mock_add_account() -> Option<Result<()>> {
    mock_storage().lock().unwrap().add_account.take()
}

#[cfg(test)]
fn take_mock_delete_account() -> Option<Result<()>> {
    mock_storage().lock().unwrap().delete_account.take()
}

#[cfg(test)]
fn take_mock_list_accounts() -> Option<Result<Vec<GoogleCloudBuildAccount>>> {
    mock_storage().lock().unwrap().list_accounts.take()
}

#[cfg(test)]
fn record_submitted(submitted: SubmittedAccount) {
    mock_storage().lock().unwrap().submitted.push(submitted);
}

/// Client for the configuration daemon's REST surface
pub struct DaemonClient {
    base_url: Url,
    client: Option<reqwest::Client>,
}

impl DaemonClient {
    /// Create a client for the daemon at `endpoint`
    pub fn new(endpoint: &str) -> Result<Self> {
        let base_url = Url::parse(endpoint)?;

        #[cfg(test)]
        {
            Ok(Self {
                base_url,
                client: None,
            })
        }

        #[cfg(not(test))]
        {
            Ok(Self {
                base_url,
                client: Some(reqwest::Client::new()),
            })
        }
    }

    /// Fetch the current copy of a CI account record
    pub async fn get_account(
        &self,
        deployment: &str,
        ci: &str,
        name: &str,
        validate: bool,
    ) -> Result<GoogleCloudBuildAccount> {
        #[cfg(test)]
        if let Some(mock) = take_mock_get_account() {
            return mock;
        }

        let url = self.account_url(deployment, ci, name, Some(validate))?;
        debug!("GET {}", url);

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        let response = client.get(url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    /// Submit an edited CI account record
    pub async fn set_account(
        &self,
        deployment: &str,
        ci: &str,
        name: &str,
        validate: bool,
        account: &GoogleCloudBuildAccount,
    ) -> Result<()> {
        #[cfg(test)]
        {
            record_submitted(SubmittedAccount {
                name: name.to_string(),
                validate,
                account: account.clone(),
            });
            if let Some(mock) = take_mock_set_account() {
                return mock;
            }
        }

        let url = self.account_url(deployment, ci, name, Some(validate))?;
        debug!("PUT {}", url);

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        let response = client.put(url).json(account).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Register a new CI account record
    pub async fn add_account(
        &self,
        deployment: &str,
        ci: &str,
        validate: bool,
        account: &GoogleCloudBuildAccount,
    ) -> Result<()> {
        #[cfg(test)]
        {
            record_submitted(SubmittedAccount {
                name: account.name.clone(),
                validate,
                account: account.clone(),
            });
            if let Some(mock) = take_mock_add_account() {
                return mock;
            }
        }

        let url = self.accounts_url(deployment, ci, Some(validate))?;
        debug!("POST {}", url);

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        let response = client.post(url).json(account).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Remove a CI account record
    pub async fn delete_account(
        &self,
        deployment: &str,
        ci: &str,
        name: &str,
        validate: bool,
    ) -> Result<()> {
        #[cfg(test)]
        if let Some(mock) = take_mock_delete_account() {
            return mock;
        }

        let url = self.account_url(deployment, ci, name, Some(validate))?;
        debug!("DELETE {}", url);

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        let response = client.delete(url).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// List the CI account records for a deployment
    pub async fn list_accounts(
        &self,
        deployment: &str,
        ci: &str,
    ) -> Result<Vec<GoogleCloudBuildAccount>> {
        #[cfg(test)]
        if let Some(mock) = take_mock_list_accounts() {
            return mock;
        }

        let url = self.accounts_url(deployment, ci, None)?;
        debug!("GET {}", url);

        let client = self
            .client
            .as_ref()
            .expect("reqwest client available outside tests");

        let response = client.get(url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    fn accounts_url(&self, deployment: &str, ci: &str, validate: Option<bool>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DavitError::config("daemon endpoint cannot be a base URL"))?
            .pop_if_empty()
            .extend(["v1", "config", "deployments", deployment, "ci", ci, "accounts"]);
        if let Some(validate) = validate {
            url.query_pairs_mut()
                .append_pair("validate", if validate { "true" } else { "false" });
        }
        Ok(url)
    }

    fn account_url(
        &self,
        deployment: &str,
        ci: &str,
        name: &str,
        validate: Option<bool>,
    ) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DavitError::config("daemon endpoint cannot be a base URL"))?
            .pop_if_empty()
            .extend([
                "v1",
                "config",
                "deployments",
                deployment,
                "ci",
                ci,
                "accounts",
                name,
            ]);
        if let Some(validate) = validate {
            url.query_pairs_mut()
                .append_pair("validate", if validate { "true" } else { "false" });
        }
        Ok(url)
    }

    /// Map a non-success response to a daemon error carrying the body message
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        // Daemon failures come back as {"message": "..."}; fall back to the
        // raw body, then to the status line, so something is always surfaced.
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        if message.is_empty() {
            Err(DavitError::daemon(format!(
                "daemon request failed with status {}",
                status
            )))
        } else {
            Err(DavitError::daemon(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_url_includes_validate_flag() {
        let client = DaemonClient::new("http://localhost:8064").unwrap();

        let url = client
            .account_url("default", "gcb", "build-prod", Some(false))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8064/v1/config/deployments/default/ci/gcb/accounts/build-prod?validate=false"
        );
    }

    #[test]
    fn test_accounts_url_without_validate() {
        let client = DaemonClient::new("http://localhost:8064").unwrap();

        let url = client.accounts_url("staging", "gcb", None).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8064/v1/config/deployments/staging/ci/gcb/accounts"
        );
    }

    #[test]
    fn test_rejects_non_base_endpoint() {
        let client = DaemonClient::new("mailto:daemon@localhost").unwrap();

        let result = client.accounts_url("default", "gcb", None);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_account_returns_mock() {
        let _session = mock_session();
        set_mock_get_account(Ok(GoogleCloudBuildAccount::new("build-prod")));

        let client = DaemonClient::new("http://localhost:8064").unwrap();
        let account = client
            .get_account("default", "gcb", "build-prod", false)
            .await
            .unwrap();

        assert_eq!(account.name, "build-prod");
    }

    #[tokio::test]
    async fn test_set_account_records_submission() {
        let _session = mock_session();
        set_mock_set_account(Ok(()));

        let client = DaemonClient::new("http://localhost:8064").unwrap();
        let account = GoogleCloudBuildAccount::new("build-prod");
        client
            .set_account("default", "gcb", "build-prod", true, &account)
            .await
            .unwrap();

        let submitted = take_submitted_accounts();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].name, "build-prod");
        assert!(submitted[0].validate);
    }
}
