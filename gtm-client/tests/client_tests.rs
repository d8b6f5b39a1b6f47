//! gtm-client against a live gtm-bff on an ephemeral port

use gtm_bff::{build_router, AppState};
use gtm_client::requests::{BrandVisionForm, LandscapeScan, PlanRequest, SegmentationForm};
use gtm_client::{BffClient, ClientError, Navigator, Route, View, ViewData};
use gtm_common::auth::{create_user, issue_token, SqliteTokenVerifier};
use gtm_common::brief::BriefEdit;
use gtm_common::config::ClientConfig;
use gtm_common::db::open_in_memory;
use gtm_common::funnel::{parse_csv, FunnelBoard};
use gtm_common::uuid_utils::ProjectRef;
use std::sync::Arc;

const API_KEY: &str = "client-test-key";

/// Start a server; returns a signed-in client for it
async fn spawn_service() -> BffClient {
    let db = open_in_memory().await.unwrap();
    let user = create_user(&db, "client@example.com").await.unwrap();
    let token = issue_token(&db, &user).await.unwrap();

    let verifier = Arc::new(SqliteTokenVerifier::new(db.clone()));
    let router = build_router(AppState::new(db, verifier, Some(API_KEY.to_string())));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{}", addr), API_KEY).unwrap();
    BffClient::new(config).unwrap().with_token(token)
}

async fn scan(client: &BffClient) -> String {
    let result = client
        .scan_landscape(&LandscapeScan {
            category: "Protein Bar".to_string(),
            geography: "India".to_string(),
            brand: None,
        })
        .await
        .unwrap();
    result.project.id
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let client = spawn_service().await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.module, "gtm-bff");
}

#[tokio::test]
async fn test_bad_token_surfaces_service_message() {
    let client = spawn_service().await.with_token("not-a-real-token");

    let err = client.projects().await.unwrap_err();
    assert!(err.is_unauthorized());
    match err {
        ClientError::Api { message, .. } => assert_eq!(message, "Authentication failed"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_landscape_route_loads_stored_insights() {
    let client = spawn_service().await;
    let project_id = scan(&client).await;

    let nav = Navigator::default();
    let route = Route::parse(&format!("/project/{}/landscape", project_id)).unwrap();
    let data = nav.open(&client, route).await.unwrap();

    let context = data.context.unwrap();
    assert_eq!(context.project.category, "Protein Bar");
    assert!(context.progress.landscape);
    assert_eq!(data.projects.len(), 1);
    match data.view {
        ViewData::Landscape(insights) => assert_eq!(insights.len(), 2),
        other => panic!("unexpected view data: {:?}", other),
    }
}

#[tokio::test]
async fn test_new_project_route_skips_project_reads() {
    let client = spawn_service().await;

    let data = Navigator::default()
        .open(&client, Route::default().with_view(View::Gtm))
        .await
        .unwrap();

    assert!(data.context.is_none());
    assert_eq!(data.view, ViewData::Gtm { plan: None, brief: None });
}

#[tokio::test]
async fn test_plan_board_export_and_brief_flow() {
    let client = spawn_service().await;
    let project_id = scan(&client).await;

    client
        .generate_segments(&SegmentationForm {
            project_id: project_id.clone(),
            product_name: "OatFuel".to_string(),
            product_form: "bar".to_string(),
            price_range: "premium".to_string(),
            ingredients: "oats".to_string(),
            target_consumer: None,
            channels: vec![],
        })
        .await
        .unwrap();
    client
        .save_brand_vision(&BrandVisionForm {
            project_id: project_id.clone(),
            mission: "Fuel people".to_string(),
            tone: "Energetic".to_string(),
            communication_dos: vec![],
            communication_donts: vec![],
        })
        .await
        .unwrap();
    let generated = client
        .generate_plan(&PlanRequest {
            project_id: Some(project_id.clone()),
            name: "Launch".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();

    let mut board = FunnelBoard::new(generated.plan.to_plan());
    board.start_drag("awareness-0");
    board.end_drag("awareness-0", Some("consideration"));

    let csv = client.export_plan(board.plan()).await.unwrap();
    let rows = parse_csv(&csv).unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].title, "Influencer Partnerships");
    assert_eq!(rows[3].title, "Social Media Engagement");

    let brief = client
        .generate_brief(&gtm_client::requests::BriefRequest {
            project_id: project_id.clone(),
            segment_id: None,
        })
        .await
        .unwrap();
    let edited = client
        .edit_brief(&brief.id, &BriefEdit::Objective("Own mornings".to_string()))
        .await
        .unwrap();
    assert_eq!(edited.objective, "Own mornings");

    let project = ProjectRef::parse(&project_id).unwrap();
    let latest = client.latest_brief(&project).await.unwrap().unwrap();
    assert_eq!(latest.objective, "Own mornings");
    let text = client.download_brief(&brief.id).await.unwrap();
    assert!(text.contains("Own mornings"));
}

#[tokio::test]
async fn test_foreign_or_unknown_project_is_not_found() {
    let client = spawn_service().await;

    let err = client
        .project_context("00000000-0000-4000-8000-000000000000")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
