//! Integration tests for the module handlers
//!
//! Each test drives the router with `oneshot` against an in-memory SQLite
//! database holding a single authenticated user.

mod common;

use axum::http::StatusCode;
use common::{authed, TestApp};
use gtm_common::funnel::parse_csv;
use serde_json::{json, Value};

const UNKNOWN_PROJECT: &str = "00000000-0000-4000-8000-000000000000";

// =============================================================================
// Market landscape
// =============================================================================

#[tokio::test]
async fn test_landscape_scan_creates_project_and_listings() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/functions/v1/market-landscape",
            json!({"category": "Kombucha", "geography": "India", "brand": "Fizz"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["category"], "Kombucha");
    assert_eq!(body["project"]["brand"], "Fizz");
    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["product_name"], "Organic Kombucha");
    assert_eq!(insights[1]["platform"], "Flipkart");

    let project_id = body["project"]["id"].as_str().unwrap();
    let (status, body) = app
        .get(&format!("/functions/v1/market-landscape?projectId={}", project_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insights"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_landscape_requires_category() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/functions/v1/market-landscape",
            json!({"category": "", "geography": "India"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn test_repeated_posts_create_duplicate_rows() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    for _ in 0..2 {
        let (status, _) = app
            .post(
                "/functions/v1/consumer-sentiment",
                json!({"category": "Tea", "projectId": project_id}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app
        .get(&format!("/functions/v1/consumer-sentiment?projectId={}", project_id))
        .await;
    assert_eq!(body["insights"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Project identifiers and ownership
// =============================================================================

#[tokio::test]
async fn test_new_project_gets_return_empty() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/functions/v1/market-landscape?projectId=new").await;
    assert_eq!(body["insights"], json!([]));
    let (_, body) = app.get("/functions/v1/consumer-sentiment?projectId=new").await;
    assert_eq!(body["insights"], json!([]));
    let (_, body) = app.get("/functions/v1/segmentation?projectId=new").await;
    assert_eq!(body["segments"], json!([]));
    let (_, body) = app.get("/functions/v1/brand-vision?projectId=new").await;
    assert_eq!(body["vision"], Value::Null);
    let (_, body) = app.get("/functions/v1/gtm-plan?projectId=new").await;
    assert_eq!(body["plan"], Value::Null);
    let (status, body) = app.get("/functions/v1/creative-brief?projectId=new").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brief"], Value::Null);
}

#[tokio::test]
async fn test_malformed_project_id_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .get("/functions/v1/brand-vision?projectId=not-a-uuid")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid project ID format");

    let (status, _) = app.get("/functions/v1/brand-vision").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/functions/v1/projects/12345").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_users_project_is_not_found() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;
    let intruder = app.other_user_token().await;

    let uri = format!("/functions/v1/market-landscape?projectId={}", project_id);
    let (status, _) = app.json(authed("GET", &uri, &intruder, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get(&format!("/functions/v1/segmentation?projectId={}", UNKNOWN_PROJECT))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Segmentation
// =============================================================================

#[tokio::test]
async fn test_segmentation_for_new_project() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/functions/v1/segmentation",
            json!({
                "productName": "OatFuel",
                "productForm": "bar",
                "priceRange": "premium",
                "ingredients": "oats and dates",
                "channels": ["D2C"],
                "projectId": "new"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let segments = body["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert!(segments[0]["positioning"]
        .as_str()
        .unwrap()
        .contains("OatFuel is a premium bar"));
    assert!(segments[0]["messages"]["whatsapp"].is_string());

    let project_id = body["projectId"].as_str().unwrap();
    assert_ne!(project_id, "new");
    let (_, context) = app
        .get(&format!("/functions/v1/projects/{}", project_id))
        .await;
    assert_eq!(context["project"]["category"], "OatFuel");
    assert_eq!(context["project"]["geography"], "global");
    assert_eq!(context["progress"]["segments"], true);
}

#[tokio::test]
async fn test_segmentation_missing_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/functions/v1/segmentation",
            json!({"productName": "OatFuel", "projectId": "new"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    let (_, body) = app.get("/functions/v1/projects").await;
    assert_eq!(body["projects"], json!([]));
}

// =============================================================================
// Brand vision
// =============================================================================

#[tokio::test]
async fn test_brand_vision_upsert() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/functions/v1/brand-vision",
            json!({
                "projectId": "new",
                "mission": "Honest snacks",
                "tone": "Playful",
                "communicationDos": ["Be direct"],
                "communicationDonts": ["Overclaim"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let project_id = body["vision"]["project_id"].as_str().unwrap().to_string();
    let vision_id = body["vision"]["id"].clone();

    let (_, body) = app
        .post(
            "/functions/v1/brand-vision",
            json!({
                "projectId": project_id,
                "mission": "Honest snacks for everyone",
                "tone": "Playful",
                "communicationDos": [],
                "communicationDonts": []
            }),
        )
        .await;
    assert_eq!(body["vision"]["id"], vision_id);

    let (_, body) = app
        .get(&format!("/functions/v1/brand-vision?projectId={}", project_id))
        .await;
    assert_eq!(body["vision"]["mission"], "Honest snacks for everyone");
    assert_eq!(body["vision"]["communication_dos"], json!([]));
}

// =============================================================================
// Packaging
// =============================================================================

#[tokio::test]
async fn test_packaging_review_keeps_both_sides() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (status, _) = app
        .post(
            "/functions/v1/packaging-analysis",
            json!({"projectId": project_id, "imageType": "front", "imageUrl": "front.png"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post(
            "/functions/v1/packaging-analysis",
            json!({
                "projectId": project_id,
                "imageType": "back",
                "imageUrl": "back.png",
                "scannedText": "Ingredients: green tea"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let review = &body["review"];
    assert_eq!(review["front_image_url"], "front.png");
    assert_eq!(review["back_image_url"], "back.png");
    assert_eq!(review["readability_score"], 85);
    assert_eq!(review["clutter_score"], 25);
    assert_eq!(review["compliance_issues"][0]["type"], "Font Size");
    assert_eq!(review["recommendations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_packaging_rejects_unknown_side() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (status, _) = app
        .post(
            "/functions/v1/packaging-analysis",
            json!({"projectId": project_id, "imageType": "side", "imageUrl": "x.png"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// GTM plan
// =============================================================================

#[tokio::test]
async fn test_gtm_plan_generation_and_export() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (status, body) = app
        .post(
            "/functions/v1/gtm-plan",
            json!({"projectId": project_id, "name": "Q3 Launch Plan", "description": "Tea launch"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insights"]["landscape"].as_array().unwrap().len(), 2);

    let plan = body["plan"].clone();
    assert_eq!(plan["awareness_strategies"][0]["id"], "awareness-0");
    assert_eq!(plan["loyalty_strategies"][1]["id"], "loyalty-1");
    assert_eq!(plan["conversion_strategies"][0]["title"], "Performance Marketing");

    let (_, latest) = app
        .get(&format!("/functions/v1/gtm-plan?projectId={}", project_id))
        .await;
    assert_eq!(latest["plan"]["id"], plan["id"]);

    let (status, csv) = app
        .send(authed("POST", "/functions/v1/gtm-plan/export", &app.token, Some(plan)))
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = parse_csv(&String::from_utf8(csv).unwrap()).unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].title, "Social Media Engagement");
    assert_eq!(rows[7].stage.label(), "Loyalty");
}

#[tokio::test]
async fn test_export_sets_download_headers() {
    let app = TestApp::new().await;

    let plan = json!({
        "id": "p1",
        "name": "Q3 Launch Plan",
        "awareness_strategies": [],
        "consideration_strategies": [],
        "conversion_strategies": [],
        "loyalty_strategies": []
    });
    let response = tower::util::ServiceExt::oneshot(
        app.router.clone(),
        authed("POST", "/functions/v1/gtm-plan/export", &app.token, Some(plan)),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()["content-disposition"].to_str().unwrap();
    assert!(disposition.contains("q3-launch-plan-gtm-plan.csv"));
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
}

#[tokio::test]
async fn test_gtm_plan_requires_name() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/functions/v1/gtm-plan", json!({"projectId": "new", "name": " "}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Creative brief
// =============================================================================

async fn prepare_brief_inputs(app: &TestApp) -> String {
    let project_id = app.scan_project("Protein Bar").await;

    app.post(
        "/functions/v1/segmentation",
        json!({
            "productName": "OatFuel",
            "productForm": "bar",
            "priceRange": "premium",
            "ingredients": "oats",
            "channels": [],
            "projectId": project_id
        }),
    )
    .await;
    app.post(
        "/functions/v1/brand-vision",
        json!({
            "projectId": project_id,
            "mission": "Fuel people",
            "tone": "Energetic",
            "communicationDos": ["Be bold"],
            "communicationDonts": ["Be vague"]
        }),
    )
    .await;
    app.post(
        "/functions/v1/gtm-plan",
        json!({"projectId": project_id, "name": "Launch"}),
    )
    .await;

    project_id
}

#[tokio::test]
async fn test_creative_brief_needs_inputs() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (status, body) = app
        .post("/functions/v1/creative-brief", json!({"projectId": project_id}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("segment"));
}

#[tokio::test]
async fn test_creative_brief_versions_increment() {
    let app = TestApp::new().await;
    let project_id = prepare_brief_inputs(&app).await;

    let (status, first) = app
        .post("/functions/v1/creative-brief", json!({"projectId": project_id}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["brief"]["version"], 1);
    assert_eq!(
        first["brief"]["target_segment"]["name"],
        "Health-Conscious Professionals"
    );
    assert_eq!(first["brief"]["tone_voice"]["brand_tone"], "Energetic");

    let (_, second) = app
        .post("/functions/v1/creative-brief", json!({"projectId": project_id}))
        .await;
    assert_eq!(second["brief"]["version"], 2);

    let (_, latest) = app
        .get(&format!("/functions/v1/creative-brief?projectId={}", project_id))
        .await;
    assert_eq!(latest["brief"]["version"], 2);
}

#[tokio::test]
async fn test_creative_brief_section_edit_and_download() {
    let app = TestApp::new().await;
    let project_id = prepare_brief_inputs(&app).await;

    let (_, created) = app
        .post("/functions/v1/creative-brief", json!({"projectId": project_id}))
        .await;
    let brief_id = created["brief"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .patch(
            &format!("/functions/v1/creative-brief/{}", brief_id),
            json!({"section": "objective", "value": "Own the gym bag"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brief"]["objective"], "Own the gym bag");
    assert_eq!(body["brief"]["key_messages"], created["brief"]["key_messages"]);

    let (status, text) = app
        .send(authed(
            "GET",
            &format!("/functions/v1/creative-brief/{}/download", brief_id),
            &app.token,
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(text).unwrap();
    assert!(text.starts_with("CREATIVE BRIEF - v1"));
    assert!(text.contains("OBJECTIVE\nOwn the gym bag"));

    let intruder = app.other_user_token().await;
    let (status, _) = app
        .json(authed(
            "PATCH",
            &format!("/functions/v1/creative-brief/{}", brief_id),
            &intruder,
            Some(json!({"section": "objective", "value": "hijacked"})),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Qualitative research and channel feasibility
// =============================================================================

#[tokio::test]
async fn test_qualitative_research_upload() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (status, body) = app
        .post(
            "/functions/v1/qualitative-research",
            json!({
                "projectId": project_id,
                "researchType": "fgd",
                "fileName": "fgd-mumbai.txt",
                "fileContent": "Moderator: ..."
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let insight = &body["insight"];
    assert_eq!(insight["research_type"], "fgd");
    assert!(insight["file_url"].as_str().unwrap().ends_with("/fgd-mumbai.txt"));
    assert_eq!(insight["themes"].as_array().unwrap().len(), 3);
    assert_eq!(insight["sentiment"], "positive");
}

#[tokio::test]
async fn test_channel_feasibility_grid() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (status, body) = app
        .post(
            "/functions/v1/channel-feasibility",
            json!({"projectId": project_id}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 12);
    for row in rows {
        let score = row["feasibility_score"].as_str().unwrap();
        assert!(["High", "Medium", "Low"].contains(&score));
        assert!(!row["rationale"].as_str().unwrap().is_empty());
    }

    let (status, _) = app
        .post("/functions/v1/channel-feasibility", json!({"projectId": "new"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn test_project_list_context_and_duplicate() {
    let app = TestApp::new().await;
    let project_id = app.scan_project("Tea").await;

    let (_, context) = app
        .get(&format!("/functions/v1/projects/{}", project_id))
        .await;
    assert_eq!(context["progress"]["landscape"], true);
    assert_eq!(context["progress"]["brand_vision"], false);
    assert_eq!(context["progress"]["deck"], false);

    let (status, body) = app
        .post(
            &format!("/functions/v1/projects/{}/duplicate", project_id),
            json!({}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["category"], "Tea");
    assert_eq!(body["project"]["geography"], "India");
    let copy_id = body["project"]["id"].as_str().unwrap().to_string();

    let (_, list) = app.get("/functions/v1/projects").await;
    let projects = list["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["id"], copy_id.as_str());

    let (_, copy_context) = app.get(&format!("/functions/v1/projects/{}", copy_id)).await;
    assert_eq!(copy_context["progress"]["landscape"], false);
}
