//! End-to-end tests of the self-hosted round trip
//!
//! The JSON façade is backed by `SoapCalculator` pointed at the SOAP
//! endpoint of the same server, so every façade call crosses the SOAP
//! codec, the client and the endpoint handler.

use std::time::Duration;

use axum::routing::post;
use evtrip_client::testing::{unused_addr, TestServer};
use evtrip_tests::{get_json, start_self_hosted, start_with_upstream};
use serde_json::json;

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn facade_goes_through_soap() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    let (status, body) = get_json(
        &server,
        "/api/trip-time?distance=300&autonomy=200&chargingTime=30",
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "tripTime": 3.5 }));
}

#[tokio::test]
async fn zero_distance() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    let (status, body) = get_json(
        &server,
        "/api/trip-time?distance=0&autonomy=200&chargingTime=30",
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["tripTime"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn floor_recharge_edge() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    // 2.99999 h of driving plus 2 recharges of 1 h
    let result = server.client.trip_time(299.999, 100.0, 60.0).await.unwrap();
    assert!((result.trip_time - 4.99999).abs() < 1e-9);

    // 3 h of driving plus 3 recharges of 1 h
    let result = server.client.trip_time(300.0, 100.0, 60.0).await.unwrap();
    assert_eq!(result.trip_time, 6.0);
}

#[tokio::test]
async fn facade_and_soap_agree() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    for (distance, autonomy, charging_time) in
        [(523.7, 310.2, 45.0), (1200.0, 400.0, 35.0), (80.0, 450.0, 20.0)]
    {
        let via_facade = server
            .client
            .trip_time(distance, autonomy, charging_time)
            .await
            .unwrap();
        let via_soap = server
            .client
            .calculate_trip_time(&evtrip_core::TripRequest::new(
                distance,
                autonomy,
                charging_time,
            ))
            .await
            .unwrap();
        let local = evtrip_core::estimate(distance, autonomy, charging_time).unwrap();

        assert_eq!(via_facade, local);
        assert_eq!(via_soap, local);
    }
}

#[tokio::test]
async fn missing_autonomy_is_400() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    let (status, body) = get_json(&server, "/api/trip-time?distance=300&chargingTime=30").await;
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({ "error": "distance, autonomy and chargingTime must be numbers" })
    );
}

#[tokio::test]
async fn non_numeric_autonomy_is_400() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    let (status, _) = get_json(
        &server,
        "/api/trip-time?distance=300&autonomy=abc&chargingTime=30",
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn zero_autonomy_is_400() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    let (status, body) = get_json(
        &server,
        "/api/trip-time?distance=300&autonomy=0&chargingTime=30",
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "autonomy must be greater than 0");
}

#[tokio::test]
async fn unreachable_upstream_is_500() {
    let upstream = format!("http://{}", unused_addr().await.unwrap());
    let server = start_with_upstream(&upstream, Duration::from_millis(500))
        .await
        .unwrap();

    let (status, body) = get_json(
        &server,
        "/api/trip-time?distance=300&autonomy=200&chargingTime=30",
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "failed to calculate trip time" }));
}

#[tokio::test]
async fn slow_upstream_is_bounded_by_timeout() {
    let slow = TestServer::start(axum::Router::new().route(
        "/wsdl",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            ""
        }),
    ))
    .await
    .unwrap();
    let server = start_with_upstream(&slow.base_url(), Duration::from_millis(200))
        .await
        .unwrap();

    let started = std::time::Instant::now();
    let (status, _) = get_json(
        &server,
        "/api/trip-time?distance=300&autonomy=200&chargingTime=30",
    )
    .await;
    assert_eq!(status, 500);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn wsdl_points_at_own_endpoint() {
    let server = start_self_hosted(TIMEOUT).await.unwrap();

    let wsdl = server.client.fetch_wsdl().await.unwrap();
    assert!(wsdl.contains(&format!(
        r#"<soap:address location="{}/wsdl"/>"#,
        server.base_url()
    )));
}
