// 共用連線只會建立一次，所以這個檔案只放一個測試，避免和其他測試搶先初始化
use anyhow::Result;
use httpmock::prelude::*;
use supabase_profiles::{fetch_profiles, shared};

#[tokio::test]
async fn test_shared_client_reads_environment_once() -> Result<()> {
    let server = MockServer::start();
    let privileged = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/profiles")
            .query_param("select", "*")
            .header("apikey", "env-service-key")
            .header("Authorization", "Bearer env-service-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"id": "from-env"}]));
    });

    std::env::set_var("SUPABASE_URL", server.base_url());
    std::env::set_var("SUPABASE_SERVICE_ROLE_KEY", "env-service-key");
    std::env::set_var("SUPABASE_ANON_KEY", "env-anon-key");

    let client = shared();
    assert_eq!(client.url(), server.base_url());
    assert!(std::ptr::eq(client, shared()));

    // 初始化之後再改環境變數不會影響已建立的連線
    std::env::set_var("SUPABASE_URL", "http://127.0.0.1:1");
    assert_eq!(shared().url(), server.base_url());

    let profiles = fetch_profiles(shared()).await?;

    privileged.assert();
    assert_eq!(profiles, vec![serde_json::json!({"id": "from-env"})]);
    Ok(())
}
