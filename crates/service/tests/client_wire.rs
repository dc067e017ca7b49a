#![cfg(feature = "testkit")]

use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;

use common::prelude::*;
use service::api::profile::CreateProfile;
use service::api::room::{CreateRoom, GetRoom, SearchRooms};
use service::testkit::StubServer;
use service::{run, AdapterError, ApiClient, ClientConfig, Credentials, OutputOptions};

fn forced() -> OutputOptions {
    OutputOptions {
        force: true,
        ..Default::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_room_over_http() -> anyhow::Result<()> {
    timeout(Duration::from_secs(10), async {
        let server = StubServer::start().await?;
        let arn = server.reply_created("CreateRoom", "RoomArn");

        let config = ClientConfig::new(server.endpoint().clone())
            .with_region("eu-west-1")
            .with_credentials(Credentials::new("AKID", "secret").with_session_token("tok"));
        let client = ApiClient::new(&config)?;

        let params = CreateRoom {
            room_name: Some("Lab1".into()),
            tags: vec!["floor=3".parse()?],
            ..Default::default()
        };
        let envelope = run(params, &forced(), &Decline, &client)
            .await?
            .expect("forced");
        assert_eq!(envelope.payload(), Some(&json!(arn)));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.target.as_deref(), Some("RoomService.CreateRoom"));
        assert_eq!(request.region.as_deref(), Some("eu-west-1"));
        assert_eq!(request.session_token.as_deref(), Some("tok"));
        assert_eq!(
            request.authorization.as_deref(),
            Some("Basic QUtJRDpzZWNyZXQ=")
        );
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
        assert!(request
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.starts_with("roomctl/")));
        assert_eq!(
            request.body,
            json!({ "RoomName": "Lab1", "Tags": [{ "Key": "floor", "Value": "3" }] })
        );

        server.stop().await
    })
    .await?
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn service_error_lands_in_envelope() -> anyhow::Result<()> {
    timeout(Duration::from_secs(10), async {
        let server = StubServer::start().await?;
        server.reply_error("GetRoom", 404, "NotFoundException", "room not found");

        let client = ApiClient::new(&ClientConfig::new(server.endpoint().clone()))?;
        let envelope = run(GetRoom::default(), &forced(), &Decline, &client)
            .await?
            .expect("reads are never declined");

        let err = envelope.error().expect("failure envelope");
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.status(), Some(404));
        assert!(envelope.payload().is_none());
        assert!(server.requests()[0].authorization.is_none());

        server.stop().await
    })
    .await?
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unstructured_error_body() -> anyhow::Result<()> {
    let server = StubServer::start().await?;
    server.reply_raw("SearchRooms", 502, "bad gateway");

    let client = ApiClient::new(&ClientConfig::new(server.endpoint().clone()))?;
    let envelope = run(SearchRooms::default(), &forced(), &Decline, &client)
        .await?
        .expect("reads are never declined");

    let err = envelope.error().expect("failure envelope");
    assert_eq!(err.to_string(), "Unknown: bad gateway (HTTP 502)");

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn nested_member_on_the_wire() -> anyhow::Result<()> {
    let server = StubServer::start().await?;
    let client = ApiClient::new(&ClientConfig::new(server.endpoint().clone()))?;

    let params = CreateProfile {
        profile_name: Some("Standard".into()),
        require_check_in_release_after_minutes: Some(10),
        ..Default::default()
    };
    let envelope = run(params, &forced(), &Decline, &client)
        .await?
        .expect("forced");

    // five required parameters were left out
    assert_eq!(envelope.warnings.len(), 5);
    assert_eq!(
        server.requests()[0].body,
        json!({
            "ProfileName": "Standard",
            "MeetingRoomConfiguration": { "RequireCheckIn": { "ReleaseAfterMinutes": 10 } }
        })
    );

    server.stop().await
}

#[tokio::test]
async fn unreachable_endpoint_is_reported() -> anyhow::Result<()> {
    let endpoint = StubServer::closed_endpoint().await?;
    let config = ClientConfig::new(endpoint.clone()).with_timeout(Duration::from_secs(5));
    let client = ApiClient::new(&config)?;

    let err = run(GetRoom::default(), &forced(), &Decline, &client)
        .await
        .expect_err("nothing listens there");

    match err {
        AdapterError::Unreachable {
            command,
            endpoint: reported,
            ..
        } => {
            assert_eq!(command, "Get-Room");
            assert_eq!(reported, endpoint.to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}
