//! SigV4-signed JSON 1.1 client
//!
//! Every operation is a `POST /` with an `X-Amz-Target` header naming the
//! operation. Non-2xx responses are decoded into [`AwsError::Service`].

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::credentials::Credentials;
use super::sigv4::SigV4Signer;
use crate::error::AwsError;

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The two services the grant pipeline talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwsService {
    IdentityStore,
    SsoAdmin,
}

impl AwsService {
    /// SigV4 signing name
    pub fn signing_name(self) -> &'static str {
        match self {
            AwsService::IdentityStore => "identitystore",
            AwsService::SsoAdmin => "sso",
        }
    }

    /// `X-Amz-Target` prefix
    pub fn target_prefix(self) -> &'static str {
        match self {
            AwsService::IdentityStore => "AWSIdentityStore",
            AwsService::SsoAdmin => "SWBExternalService",
        }
    }

    pub fn default_endpoint(self, region: &str) -> String {
        match self {
            AwsService::IdentityStore => format!("https://identitystore.{}.amazonaws.com/", region),
            AwsService::SsoAdmin => format!("https://sso.{}.amazonaws.com/", region),
        }
    }
}

pub struct AwsJsonClient {
    http: Client,
    service: AwsService,
    url: Url,
    host: String,
    signer: SigV4Signer,
    credentials: Credentials,
}

impl AwsJsonClient {
    /// Create a client for `service`; `endpoint` overrides the regional default
    pub fn new(
        service: AwsService,
        region: &str,
        endpoint: Option<&str>,
        credentials: Credentials,
    ) -> Result<Self, AwsError> {
        let endpoint = endpoint
            .map(str::to_string)
            .unwrap_or_else(|| service.default_endpoint(region));
        let url = Url::parse(&endpoint).map_err(|_| AwsError::Endpoint(endpoint.clone()))?;
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{}:{}", h, p),
            (Some(h), None) => h.to_string(),
            (None, _) => return Err(AwsError::Endpoint(endpoint)),
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            service,
            url,
            host,
            signer: SigV4Signer::new(region, service.signing_name()),
            credentials,
        })
    }

    /// Invoke one operation and decode its JSON response
    pub async fn call<Req, Resp>(&self, operation: &'static str, request: &Req) -> Result<Resp, AwsError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request)
            .map_err(|source| AwsError::Encode { operation, source })?;
        let target = format!("{}.{}", self.service.target_prefix(), operation);
        let now = Utc::now();

        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), CONTENT_TYPE.to_string());
        headers.insert("host".to_string(), self.host.clone());
        headers.insert("x-amz-date".to_string(), SigV4Signer::amz_date(now));
        headers.insert("x-amz-target".to_string(), target);
        if let Some(token) = self.credentials.session_token() {
            headers.insert("x-amz-security-token".to_string(), token.to_string());
        }

        let authorization = self.signer.authorization(
            &self.credentials,
            "POST",
            self.url.path(),
            &headers,
            &body,
            now,
        );

        tracing::debug!(
            service = self.service.signing_name(),
            operation,
            "Calling AWS API"
        );

        let mut builder = self
            .http
            .post(self.url.clone())
            .header("authorization", authorization);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(service_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|source| AwsError::Decode { operation, source })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    error_type: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

/// Decode `{"__type": "...#Code", "message": "..."}` into a service error
fn service_error(status: u16, body: &str) -> AwsError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = match parsed {
        Some(e) => (
            e.error_type
                .map(|t| t.rsplit('#').next().unwrap_or(&t).to_string())
                .unwrap_or_else(|| format!("HTTP {}", status)),
            e.message.unwrap_or_default(),
        ),
        None => (
            format!("HTTP {}", status),
            body.chars().take(200).collect::<String>(),
        ),
    };
    AwsError::service(status, code, message)
}
