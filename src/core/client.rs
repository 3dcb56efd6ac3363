use crate::config::SupabaseConfig;
use crate::core::query::QueryBuilder;
use crate::core::{KeyRole, PostgrestResponse, TableSource};
use crate::utils::error::{Result, SupabaseError};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::OnceLock;
use url::Url;

/// Supabase 專案的 REST 連線
///
/// 建立時不檢查網址或金鑰，空字串也照收；
/// 問題會在第一次請求時以 `Err` 回報。
#[derive(Clone)]
pub struct SupabaseClient {
    pub(crate) http: Client,
    url: String,
    api_key: String,
}

/// 以網址和金鑰建立連線
pub fn create_client(url: impl Into<String>, api_key: impl Into<String>) -> SupabaseClient {
    SupabaseClient::new(url, api_key)
}

/// 整個行程共用的連線，第一次使用時從環境變數建立
pub fn shared() -> &'static SupabaseClient {
    static CLIENT: OnceLock<SupabaseClient> = OnceLock::new();
    CLIENT.get_or_init(|| SupabaseClient::from_config(&SupabaseConfig::from_env()))
}

impl SupabaseClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// 優先使用 service role key
    pub fn from_config(config: &SupabaseConfig) -> Self {
        let (key, role) = config.preferred_key();
        tracing::debug!("Creating Supabase client for {} with {} key", config.url, role);
        Self::new(config.url.clone(), key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 對某張表開始一個查詢
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table)
    }

    /// `{url}/rest/v1/{table}?select={columns}`
    pub(crate) fn rest_url(&self, table: &str, columns: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;

        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|_| SupabaseError::InvalidConfigValueError {
                        field: "SUPABASE_URL".to_string(),
                        value: self.url.clone(),
                        reason: "URL cannot be used as a base".to_string(),
                    })?;
            segments.pop_if_empty().extend(["rest", "v1", table]);
        }

        url.query_pairs_mut().append_pair("select", columns);
        Ok(url)
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TableSource for SupabaseClient {
    async fn select_all(&self, table: &str, columns: &str) -> Result<PostgrestResponse> {
        self.from(table).select(columns).execute().await
    }
}

/// 前端用的受限連線，加上可以繞過 RLS 的管理連線
///
/// 沒有 service role key 時 `admin` 就是 `public` 的複本。
#[derive(Debug, Clone)]
pub struct ClientPair {
    pub public: SupabaseClient,
    pub admin: SupabaseClient,
    admin_role: KeyRole,
}

impl ClientPair {
    pub fn from_config(config: &SupabaseConfig) -> Self {
        let public = SupabaseClient::new(config.url.clone(), config.anon_key.clone());

        let (admin, admin_role) = match config.preferred_key() {
            (key, KeyRole::ServiceRole) => {
                (SupabaseClient::new(config.url.clone(), key), KeyRole::ServiceRole)
            }
            (_, KeyRole::Anon) => {
                tracing::debug!("No service role key, admin client falls back to anon key");
                (public.clone(), KeyRole::Anon)
            }
        };

        Self {
            public,
            admin,
            admin_role,
        }
    }

    pub fn from_env() -> Self {
        Self::from_config(&SupabaseConfig::from_env())
    }

    pub fn admin_role(&self) -> KeyRole {
        self.admin_role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_rest_url_layout() {
        let client = create_client("https://abc.supabase.co", "key");
        let url = client.rest_url("profiles", "*").unwrap();
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/profiles?select=*");

        let client = create_client("http://localhost:54321/", "key");
        let url = client.rest_url("teams", "id,name").unwrap();
        assert_eq!(url.path(), "/rest/v1/teams");
        assert_eq!(
            url.query_pairs().collect::<Vec<_>>(),
            vec![("select".into(), "id,name".into())]
        );
    }

    #[test]
    fn test_empty_url_is_accepted_until_first_request() {
        let client = create_client("", "");
        assert_eq!(client.url(), "");
        assert!(matches!(
            client.rest_url("profiles", "*"),
            Err(SupabaseError::UrlError(_))
        ));
    }

    #[test]
    fn test_cannot_be_base_url_rejected() {
        let client = create_client("mailto:someone@example.com", "key");
        assert!(matches!(
            client.rest_url("profiles", "*"),
            Err(SupabaseError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_debug_output_hides_key() {
        let client = create_client("https://abc.supabase.co", "super-secret");
        assert!(!format!("{:?}", client).contains("super-secret"));
    }

    #[test]
    fn test_client_pair_roles() {
        let with_service = SupabaseConfig::new(
            "https://abc.supabase.co",
            Some("service-key".to_string()),
            "anon-key",
        );
        let pair = ClientPair::from_config(&with_service);
        assert_eq!(pair.public.api_key(), "anon-key");
        assert_eq!(pair.admin.api_key(), "service-key");
        assert_eq!(pair.admin_role(), KeyRole::ServiceRole);

        let anon_only = SupabaseConfig::new("https://abc.supabase.co", None, "anon-key");
        let pair = ClientPair::from_config(&anon_only);
        assert_eq!(pair.admin.api_key(), "anon-key");
        assert_eq!(pair.admin_role(), KeyRole::Anon);
    }

    #[tokio::test]
    async fn test_select_all_sends_key_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/profiles")
                .query_param("select", "*")
                .header("apikey", "service-key")
                .header("Authorization", "Bearer service-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"id": 1}]));
        });

        let config = SupabaseConfig::new(
            server.base_url(),
            Some("service-key".to_string()),
            "anon-key",
        );
        let client = SupabaseClient::from_config(&config);
        let response = client.select_all("profiles", "*").await.unwrap();

        mock.assert();
        assert_eq!(response.status, 200);
        assert_eq!(response.data, Some(vec![serde_json::json!({"id": 1})]));
        assert!(response.error.is_none());
    }
}
