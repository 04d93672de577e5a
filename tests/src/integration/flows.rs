//! End-to-end flows: real gateway on an ephemeral port, driven over HTTP.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use chain_clock::{ChainClock, ChainSpec, FixedClock};
use frame_fixtures::{
    FrameSynthesizer, NodeRegistry, PinnedSelector, StaticForkChoice, FIXTURE_FRAME_ID,
};
use mock_gateway::{AppState, GatewayConfig, MockGateway};

fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// State frozen at a fixed instant with deterministic seams.
fn frozen_state(at: &str) -> AppState {
    let clock = ChainClock::new(
        ChainSpec::goerli().unwrap(),
        Arc::new(FixedClock(instant(at))),
    );
    let synthesizer = FrameSynthesizer::new(
        clock.clone(),
        Arc::new(NodeRegistry::goerli()),
        Arc::new(PinnedSelector(2)),
        Arc::new(StaticForkChoice(
            serde_json::json!({ "fork_choice_nodes": [] }),
        )),
    );
    AppState::new("goerli", clock, synthesizer)
}

/// Boot a gateway on an ephemeral port; returns it with its API base URL.
async fn start_gateway(state: AppState) -> (MockGateway, String) {
    let config = GatewayConfig {
        listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        ..Default::default()
    };
    let mut gateway = MockGateway::new(config, state).unwrap();
    gateway.start().await.unwrap();

    let addr = gateway.local_addr().unwrap();
    (gateway, format!("http://{addr}/api/v1"))
}

#[tokio::test]
async fn test_all_five_routes_respond_with_envelopes() {
    let (mut gateway, base) = start_gateway(frozen_state("2021-03-23T14:02:24Z")).await;
    let client = reqwest::Client::new();

    let now: Value = client
        .get(format!("{base}/ethereum/now"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(now["data"]["slot"], 12);
    assert_eq!(now["data"]["epoch"], 0);

    let spec: Value = client
        .get(format!("{base}/ethereum/spec"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        spec,
        serde_json::json!({
            "data": {
                "network_name": "goerli",
                "spec": {
                    "seconds_per_slot": 12,
                    "slots_per_epoch": 32,
                    "genesis_time": "2021-03-23T14:00:00Z",
                },
            },
        })
    );

    let nodes: Value = client
        .post(format!("{base}/metadata/nodes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        nodes["data"]["nodes"],
        serde_json::json!(["ams3-teku-001", "syd1-lighthouse-001", "syd1-prysm-001"])
    );
    assert_eq!(nodes["data"]["pagination"]["total"], 3);

    let listing: Value = client
        .post(format!("{base}/metadata"))
        .json(&serde_json::json!({ "pagination": { "offset": 10 } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing["data"]["pagination"]["total"], 1);
    assert_eq!(listing["data"]["frames"][0]["id"], FIXTURE_FRAME_ID);
    assert_eq!(listing["data"]["frames"][0]["node"], "syd1-prysm-001");

    let frame: Value = client
        .get(format!("{base}/frames/abc123"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(frame["data"]["frame"]["metadata"]["id"], "abc123");
    assert!(!frame["data"]["frame"]["data"].is_null());

    gateway.shutdown().await;
}

#[tokio::test]
async fn test_now_and_frame_listing_agree_under_frozen_clock() {
    let (mut gateway, base) = start_gateway(frozen_state("2021-03-23T15:30:07Z")).await;
    let client = reqwest::Client::new();

    let now: Value = client
        .get(format!("{base}/ethereum/now"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listing: Value = client
        .post(format!("{base}/metadata"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let frame = &listing["data"]["frames"][0];
    assert_eq!(frame["wall_clock_slot"], now["data"]["slot"]);
    assert_eq!(frame["wall_clock_epoch"], now["data"]["epoch"]);

    // fetched_at re-derives the same slot through the clock formula.
    let fetched_at = instant(frame["fetched_at"].as_str().unwrap());
    let spec = ChainSpec::goerli().unwrap();
    assert_eq!(
        chain_clock::reading_at(&spec, fetched_at).slot,
        now["data"]["slot"].as_i64().unwrap()
    );

    gateway.shutdown().await;
}

#[tokio::test]
async fn test_production_wiring_serves_consistent_readings() {
    let (mut gateway, base) = start_gateway(AppState::goerli().unwrap()).await;
    let client = reqwest::Client::new();

    let now: Value = client
        .get(format!("{base}/ethereum/now"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slot = now["data"]["slot"].as_i64().unwrap();
    let epoch = now["data"]["epoch"].as_i64().unwrap();

    assert!(slot >= 0);
    assert_eq!(epoch, slot.div_euclid(32));

    // The random fork-choice payload is present and structurally a graph.
    let frame: Value = client
        .get(format!("{base}/frames/e2e-check"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = &frame["data"]["frame"]["data"];
    assert!(data["fork_choice_nodes"].is_array());
    assert!(!data["fork_choice_nodes"].as_array().unwrap().is_empty());

    gateway.shutdown().await;
}

#[tokio::test]
async fn test_custom_base_path_mounts_routes() {
    let config = GatewayConfig {
        listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        base_path: "/mock/".to_string(),
        ..Default::default()
    };
    let mut gateway =
        MockGateway::new(config, frozen_state("2021-03-23T14:02:24Z")).unwrap();
    gateway.start().await.unwrap();
    let addr = gateway.local_addr().unwrap();

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/mock/api/v1/ethereum/now"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .get(format!("http://{addr}/api/v1/ethereum/now"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    gateway.shutdown().await;
}
