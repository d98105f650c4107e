//! Spawns the real binary in http mode.

use serde_json::json;
use shippo_test_support::{
    McpStreamableHttpSession, MockResponse, MockShippo, ServerProcess, tool_call_text,
};
use std::time::Duration;

const BIN: &str = env!("CARGO_BIN_EXE_shippo-mcp");

#[tokio::test]
async fn serves_health_in_http_mode() -> anyhow::Result<()> {
    let server = ServerProcess::spawn_http(BIN, &[]).await?;

    let body = reqwest::get(format!("{}/health", server.base_url()))
        .await?
        .text()
        .await?;
    assert_eq!(body, "ok");
    Ok(())
}

#[tokio::test]
async fn header_credentials_reach_the_api() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "GET",
        "/addresses/",
        MockResponse::ok(&json!({"count": 1, "next": null, "previous": null,
            "results": [{"object_id": "addr_1", "name": "Jane Doe"}]})),
    );

    let server = ServerProcess::spawn_http(BIN, &[]).await?;

    let session = McpStreamableHttpSession::connect(
        server.base_url(),
        &[
            ("X-Shippo-Api-Key", "hdr_key"),
            ("X-Shippo-Base-Url", mock.base_url()),
        ],
    )
    .await?;

    let msg = session
        .request(
            1,
            "tools/call",
            json!({"name": "list_addresses", "arguments": {"results": 1}}),
            Duration::from_secs(10),
        )
        .await?;
    let (text, is_error) = tool_call_text(&msg)?;
    assert!(!is_error, "{text}");
    assert!(text.contains("| addr_1 | Jane Doe |"), "{text}");

    let req = mock.last_request().expect("request");
    assert_eq!(req.header("authorization"), Some("ShippoToken hdr_key"));

    let msg = session
        .request(2, "tools/call", json!({"name": "nope", "arguments": {}}), Duration::from_secs(10))
        .await?;
    let (text, is_error) = tool_call_text(&msg)?;
    assert!(is_error);
    let env: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(env["details"]["type"], "unknown_tool");
    Ok(())
}

#[tokio::test]
async fn operator_key_is_never_sent_to_a_caller_chosen_host() -> anyhow::Result<()> {
    let elsewhere = MockShippo::start().await?;
    elsewhere.on(
        "GET",
        "/addresses/",
        MockResponse::ok(&json!({"count": 0, "next": null, "previous": null, "results": []})),
    );

    let server =
        ServerProcess::spawn_http(BIN, &[("SHIPPO_API_KEY", "operator_secret_key")]).await?;
    let session = McpStreamableHttpSession::connect(
        server.base_url(),
        &[("X-Shippo-Base-Url", elsewhere.base_url())],
    )
    .await?;

    let msg = session
        .request(
            1,
            "tools/call",
            json!({"name": "list_addresses", "arguments": {}}),
            Duration::from_secs(10),
        )
        .await?;
    let (text, is_error) = tool_call_text(&msg)?;
    assert!(is_error, "{text}");
    let env: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(env["details"]["type"], "authentication");

    assert!(elsewhere.requests().is_empty());
    elsewhere.shutdown().await;
    Ok(())
}
