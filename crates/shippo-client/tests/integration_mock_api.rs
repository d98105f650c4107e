use serde_json::json;
use shippo_client::{
    Credentials, ErrorKind, ListParams, OrderFilter, ShippoClient, ShippoError,
};
use shippo_test_support::{MockResponse, MockShippo};

fn client_for(mock: &MockShippo) -> ShippoClient {
    ShippoClient::new(Credentials::new("shippo_test_key").with_base_url(mock.base_url()))
}

#[tokio::test]
async fn missing_api_key_makes_no_network_call() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on("GET", "/addresses/", MockResponse::ok(&json!({"results": []})));

    let client = ShippoClient::new(Credentials::from_parts(None, Some(mock.base_url().into())));
    let err = client
        .list_addresses(&ListParams::default())
        .await
        .expect_err("missing key must fail");
    assert_eq!(err.kind(), ErrorKind::Authentication);

    let blank = ShippoClient::new(Credentials::new("  ").with_base_url(mock.base_url()));
    assert!(matches!(
        blank.get_address("addr_1").await,
        Err(ShippoError::Authentication { .. })
    ));

    assert_eq!(mock.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn list_addresses_sends_auth_and_query() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    let envelope = json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{"object_id": "addr_1", "name": "Jane Doe"}]
    });
    mock.on("GET", "/addresses/", MockResponse::ok(&envelope));

    let page = client_for(&mock)
        .list_addresses(&ListParams::new(Some(1), None))
        .await?;
    assert_eq!(page.count(), Some(1));
    assert_eq!(page.results()[0]["object_id"], "addr_1");
    assert_eq!(page.as_value(), &envelope);

    let req = mock.last_request().expect("recorded request");
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/addresses/");
    assert_eq!(req.query.as_deref(), Some("results=1"));
    assert_eq!(req.header("authorization"), Some("ShippoToken shippo_test_key"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    Ok(())
}

#[tokio::test]
async fn create_forwards_json_body() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "POST",
        "/parcels/",
        MockResponse::json(201, &json!({"object_id": "parcel_1", "length": "10"})),
    );

    let body = json!({"length": "10", "width": "5", "height": "4", "distance_unit": "in",
        "weight": "2", "mass_unit": "lb"});
    let parcel = client_for(&mock).create_parcel(&body).await?;
    assert_eq!(parcel["object_id"], "parcel_1");

    let req = mock.last_request().expect("recorded request");
    assert_eq!(req.method, "POST");
    assert_eq!(req.body, Some(body));
    Ok(())
}

#[tokio::test]
async fn path_segments_are_encoded() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "GET",
        "/tracks/usps/9205%20590",
        MockResponse::ok(&json!({"tracking_number": "9205 590"})),
    );

    let status = client_for(&mock)
        .get_tracking_status("usps", "9205 590")
        .await?;
    assert_eq!(status["tracking_number"], "9205 590");
    Ok(())
}

#[tokio::test]
async fn default_parcel_template_not_found_is_none() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "GET",
        "/live-rates/settings/parcel-template",
        MockResponse::json(404, &json!({"detail": "Not found."})),
    );

    let template = client_for(&mock).get_default_parcel_template().await?;
    assert_eq!(template, None);
    Ok(())
}

#[tokio::test]
async fn default_parcel_template_server_error_propagates() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "GET",
        "/live-rates/settings/parcel-template",
        MockResponse::json(500, &json!({"detail": "boom"})),
    );

    match client_for(&mock).get_default_parcel_template().await {
        Err(ShippoError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn other_not_found_errors_are_not_downgraded() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    let err = client_for(&mock)
        .get_user_parcel_template("missing")
        .await
        .expect_err("unprogrammed route answers 404");
    assert!(err.is_not_found());
    Ok(())
}

#[tokio::test]
async fn live_rates_unwrap_results() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "POST",
        "/live-rates",
        MockResponse::ok(&json!({"results": [
            {"title": "Ground", "amount": "5.50", "currency": "USD", "estimated_days": 3}
        ]})),
    );

    let rates = client_for(&mock)
        .create_live_rate(&json!({"address_to": "addr_1", "line_items": []}))
        .await?;
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["title"], "Ground");
    Ok(())
}

#[tokio::test]
async fn delete_accepts_no_content() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "DELETE",
        "/user-parcel-templates/tpl_1",
        MockResponse::no_content(),
    );
    mock.on(
        "DELETE",
        "/live-rates/settings/parcel-template",
        MockResponse::no_content(),
    );

    let client = client_for(&mock);
    client.delete_user_parcel_template("tpl_1").await?;
    client.delete_default_parcel_template().await?;
    assert_eq!(mock.request_count(), 2);
    Ok(())
}

#[tokio::test]
async fn rate_limit_reads_retry_after() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "GET",
        "/shipments/",
        MockResponse::json(429, &json!({"detail": "slow down"})).with_header("Retry-After", "120"),
    );

    let err = client_for(&mock)
        .list_shipments(&ListParams::default(), &Default::default())
        .await
        .expect_err("429");
    assert_eq!(err.retry_after_seconds(), Some(120));
    assert!(err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn batch_actions_and_order_filters_hit_expected_paths() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on("POST", "/batches/b_1/purchase", MockResponse::ok(&json!({"status": "PURCHASING"})));
    mock.on("GET", "/orders/", MockResponse::ok(&json!({"count": 0, "results": []})));

    let client = client_for(&mock);
    let batch = client.purchase_batch("b_1").await?;
    assert_eq!(batch["status"], "PURCHASING");
    assert_eq!(mock.last_request().expect("request").body, None);

    let filter = OrderFilter {
        order_status: Some("PAID".into()),
        ..OrderFilter::default()
    };
    client
        .list_orders(&ListParams::new(None, Some(2)), &filter)
        .await?;
    let req = mock.last_request().expect("request");
    assert_eq!(req.query.as_deref(), Some("page=2&order_status%5B%5D=PAID"));
    Ok(())
}

#[tokio::test]
async fn service_group_update_puts_collection() -> anyhow::Result<()> {
    let mock = MockShippo::start().await?;
    mock.on(
        "PUT",
        "/service-groups",
        MockResponse::ok(&json!({"object_id": "sg_1", "name": "Fast"})),
    );

    let body = json!({"object_id": "sg_1", "name": "Fast", "description": "d",
        "type": "FLAT_RATE", "service_levels": [], "is_active": true});
    let group = client_for(&mock).update_service_group(&body).await?;
    assert_eq!(group["object_id"], "sg_1");
    assert_eq!(mock.last_request().expect("request").body, Some(body));
    Ok(())
}
