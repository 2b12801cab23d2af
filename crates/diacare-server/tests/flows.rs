mod common;

use axum::http::StatusCode;

use common::{body_text, location, TestApp};

async fn register_and_login(app: &TestApp, phone: &str) -> String {
    let response = app
        .post_form("/auth/register", &format!("name=Alice&phone={phone}"))
        .await;
    assert_eq!(location(&response), "/auth/login");

    let response = app.post_form("/auth/login", &format!("phone={phone}")).await;
    let dashboard = location(&response);
    assert!(dashboard.starts_with("/dashboard?userId="));
    dashboard
}

#[tokio::test]
async fn registering_twice_reports_existing_user() {
    let app = TestApp::new();

    let response = app
        .post_form("/auth/register", "name=Alice&phone=555-0100")
        .await;
    assert_eq!(location(&response), "/auth/login");

    let response = app
        .post_form("/auth/register", "name=Alice&phone=555-0100")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "User already exists. Please login.");

    assert_eq!(app.person_count().await, 1);
}

#[tokio::test]
async fn login_with_unknown_phone_goes_to_register() {
    let app = TestApp::new();
    let response = app.post_form("/auth/login", "phone=555-0199").await;
    assert_eq!(location(&response), "/auth/register");
}

#[tokio::test]
async fn type_2_high_reading_report() {
    let app = TestApp::new();
    let dashboard = register_and_login(&app, "555-0100").await;

    let response = app
        .post_form(
            &dashboard,
            "diabetesType=Type+2&bloodSugar=140&age=45&medications=Metformin%2CLisinopril",
        )
        .await;
    let report = location(&response);
    assert!(report.starts_with("/report/"));

    let response = app.get(&report).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<li>Metformin</li>"));
    assert!(html.contains("<li>SGLT2 inhibitors</li>"));
    assert!(html.contains("<li>GLP-1 receptor agonists</li>"));
    assert!(!html.contains("Lisinopril"));
    assert!(html.contains(
        "Your blood sugar is high, consider reducing carbs and increasing physical activity."
    ));
}

#[tokio::test]
async fn gestational_report_with_no_medications() {
    let app = TestApp::new();
    let dashboard = register_and_login(&app, "555-0101").await;

    let response = app
        .post_form(
            &dashboard,
            "diabetesType=Gestational&bloodSugar=95&age=29&medications=",
        )
        .await;
    let html = body_text(app.get(&location(&response)).await).await;

    assert!(html.contains("<li>Insulin therapy (if needed)</li>"));
    assert!(html.contains("<li>Blood glucose monitoring</li>"));
    assert!(html.contains(
        "Maintain a balanced diet, monitor blood sugar closely, and consult your doctor regularly."
    ));
}

#[tokio::test]
async fn type_2_boundary_reading_is_normal() {
    let app = TestApp::new();
    let dashboard = register_and_login(&app, "555-0102").await;

    let response = app
        .post_form(&dashboard, "diabetesType=Type+2&bloodSugar=130&age=50")
        .await;
    let html = body_text(app.get(&location(&response)).await).await;
    assert!(html.contains("Your blood sugar is within normal range. Keep up the good work!"));
    assert!(html.contains("<li>Continue with your prescribed medications</li>"));
}

#[tokio::test]
async fn non_numeric_reading_is_rejected() {
    let app = TestApp::new();
    let dashboard = register_and_login(&app, "555-0103").await;

    let response = app
        .post_form(&dashboard, "diabetesType=Type+1&bloodSugar=high&age=30")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("bloodSugar"));
}

#[tokio::test]
async fn submission_without_user_is_rejected() {
    let app = TestApp::new();
    let response = app
        .post_form("/dashboard", "diabetesType=Type+1&bloodSugar=90&age=30")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_report_is_not_found() {
    let app = TestApp::new();

    let response = app
        .get("/report/7a8e2b7c-4a6f-4f8e-9a39-2f1c3a0d5e11")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get("/report/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_finite_reading_is_rejected_and_not_stored() {
    let app = TestApp::new();
    let dashboard = register_and_login(&app, "555-0104").await;

    for reading in ["NaN", "inf"] {
        let response = app
            .post_form(
                &dashboard,
                &format!("diabetesType=Type+2&bloodSugar={reading}&age=40"),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{reading}");
        assert!(body_text(response).await.contains("bloodSugar"));
    }

    assert!(app.memory.list("health-records/").await.is_empty());
}
