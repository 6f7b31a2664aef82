#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use shiftbook::db::db::Storage;
    use shiftbook::server::build_app;
    use shiftbook::server::error::ErrorBody;
    use shiftbook::server::state::AppState;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct TestApp {
        _temp_dir: TempDir,
        app: Router,
    }

    impl TestApp {
        fn new() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let static_dir = temp_dir.path().join("static");
            std::fs::create_dir_all(&static_dir).unwrap();
            std::fs::write(static_dir.join("index.html"), "<h1>shiftbook</h1>").unwrap();
            std::fs::write(static_dir.join("app.js"), "console.log('hi');").unwrap();

            let storage = Storage::new(temp_dir.path().join("shifts.db"));
            storage.init().unwrap();

            TestApp {
                app: build_app(AppState::new(storage, static_dir)),
                _temp_dir: temp_dir,
            }
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
            let mut request = Request::builder().method(method).uri(uri);
            let body = match body {
                Some(value) => {
                    request = request.header(header::CONTENT_TYPE, "application/json");
                    Body::from(value.to_string())
                }
                None => Body::empty(),
            };

            let response = self.app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            (status, bytes.to_vec())
        }

        async fn get(&self, uri: &str) -> (StatusCode, Value) {
            let (status, bytes) = self.send(Method::GET, uri, None).await;
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
            let (status, bytes) = self.send(Method::POST, uri, Some(body)).await;
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
            let (status, bytes) = self.send(Method::POST, uri, None).await;
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        async fn employee(&self, name: &str, active: bool) -> i64 {
            let (status, body) = self
                .post("/api/employees/", json!({"full_name": name, "role": "cashier", "is_active": active}))
                .await;
            assert_eq!(status, StatusCode::OK);
            body["id"].as_i64().unwrap()
        }
    }

    fn error_code(body: Value) -> String {
        serde_json::from_value::<ErrorBody>(body).unwrap().code
    }

    // === EMPLOYEES ===

    #[tokio::test]
    async fn test_create_and_fetch_employee() {
        let app = TestApp::new();

        let (status, created) = app
            .post(
                "/api/employees/",
                json!({"full_name": "Ana Lopez", "role": "cashier", "phone": "555-0101", "hourly_rate": 1500}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["full_name"], "Ana Lopez");
        assert_eq!(created["phone"], "555-0101");
        assert_eq!(created["hourly_rate"], 1500);
        assert_eq!(created["is_active"], true);

        let id = created["id"].as_i64().unwrap();
        let (status, fetched) = app.get(&format!("/api/employees/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_optional_employee_fields_default() {
        let app = TestApp::new();

        let (status, created) = app.post("/api/employees", json!({"full_name": "Ben", "role": "cook"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["phone"], Value::Null);
        assert_eq!(created["hourly_rate"], Value::Null);
        assert_eq!(created["is_active"], true);
    }

    #[tokio::test]
    async fn test_list_employees_active_filter() {
        let app = TestApp::new();
        app.employee("Zoe", true).await;
        app.employee("Ben", false).await;
        app.employee("Amy", true).await;

        let names = |list: Value| -> Vec<String> {
            list.as_array()
                .unwrap()
                .iter()
                .map(|e| e["full_name"].as_str().unwrap().to_string())
                .collect()
        };

        let (status, active) = app.get("/api/employees/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(active), vec!["Amy", "Zoe"]);

        let (_, active) = app.get("/api/employees?only_active=true").await;
        assert_eq!(names(active), vec!["Amy", "Zoe"]);

        let (_, all) = app.get("/api/employees/?only_active=false").await;
        assert_eq!(names(all), vec!["Amy", "Ben", "Zoe"]);

        for flag in ["0", "no", "off"] {
            let (status, all) = app.get(&format!("/api/employees/?only_active={}", flag)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(names(all), vec!["Amy", "Ben", "Zoe"]);
        }
        for flag in ["1", "yes", "on"] {
            let (status, active) = app.get(&format!("/api/employees/?only_active={}", flag)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(names(active), vec!["Amy", "Zoe"]);
        }
    }

    #[tokio::test]
    async fn test_missing_employee_is_404() {
        let app = TestApp::new();

        let (status, body) = app.get("/api/employees/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(body), "not_found");
    }

    #[tokio::test]
    async fn test_bad_input_is_422() {
        let app = TestApp::new();

        let (status, body) = app.post("/api/employees/", json!({"role": "cook"})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_code(body), "validation_error");

        let (status, _) = app.get("/api/employees/abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = app.post("/api/shifts/", json!({"date": "not-a-date"})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    // === SHIFTS ===

    #[tokio::test]
    async fn test_create_shift_embeds_employee() {
        let app = TestApp::new();
        let ana = app.employee("Ana", true).await;

        let (status, shift) = app
            .post(
                "/api/shifts/",
                json!({"date": "2024-06-03", "start_time": "09:00:00", "end_time": "17:00:00", "position": "register", "employee_id": ana}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(shift["id"].as_i64().unwrap() > 0);
        assert_eq!(shift["date"], "2024-06-03");
        assert_eq!(shift["start_time"], "09:00:00");
        assert_eq!(shift["end_time"], "17:00:00");
        assert_eq!(shift["employee_id"], ana);
        assert_eq!(shift["employee"]["full_name"], "Ana");
    }

    #[tokio::test]
    async fn test_unassigned_shift_has_null_employee() {
        let app = TestApp::new();

        let (status, shift) = app
            .post(
                "/api/shifts",
                json!({"date": "2024-06-03", "start_time": "09:00:00", "end_time": "17:00:00", "position": "register"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(shift["employee_id"], Value::Null);
        assert_eq!(shift["employee"], Value::Null);
    }

    #[tokio::test]
    async fn test_shift_for_missing_or_inactive_employee_is_400() {
        let app = TestApp::new();
        let ben = app.employee("Ben", false).await;

        for employee_id in [ben, 999] {
            let (status, body) = app
                .post(
                    "/api/shifts/",
                    json!({"date": "2024-06-03", "start_time": "09:00:00", "end_time": "17:00:00", "position": "grill", "employee_id": employee_id}),
                )
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error_code(body), "invalid_reference");
        }

        let (_, shifts) = app.get("/api/shifts/").await;
        assert!(shifts.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_shifts_with_filters_and_week() {
        let app = TestApp::new();
        let ana = app.employee("Ana", true).await;

        for (date, employee_id) in [("2024-06-02", None), ("2024-06-05", Some(ana)), ("2024-06-09", None), ("2024-06-10", Some(ana))] {
            let (status, _) = app
                .post(
                    "/api/shifts/",
                    json!({"date": date, "start_time": "09:00:00", "end_time": "17:00:00", "position": "register", "employee_id": employee_id}),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }

        let dates = |list: Value| -> Vec<String> {
            list.as_array()
                .unwrap()
                .iter()
                .map(|s| s["date"].as_str().unwrap().to_string())
                .collect()
        };

        let (_, all) = app.get("/api/shifts/").await;
        assert_eq!(dates(all), vec!["2024-06-02", "2024-06-05", "2024-06-09", "2024-06-10"]);

        let (_, ranged) = app.get("/api/shifts/?start_date=2024-06-05&end_date=2024-06-09").await;
        assert_eq!(dates(ranged), vec!["2024-06-05", "2024-06-09"]);

        let (_, anas) = app.get(&format!("/api/shifts?employee_id={}", ana)).await;
        assert_eq!(dates(anas), vec!["2024-06-05", "2024-06-10"]);

        let (status, week) = app.get("/api/schedule/week/?any_date_in_week=2024-06-06").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dates(week), vec!["2024-06-05", "2024-06-09"]);

        let (_, week) = app.get("/api/schedule/week?any_date_in_week=2024-06-09").await;
        assert_eq!(dates(week), vec!["2024-06-05", "2024-06-09"]);

        let (status, _) = app.get("/api/schedule/week/").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    // === TIME OFF ===

    #[tokio::test]
    async fn test_time_off_lifecycle() {
        let app = TestApp::new();
        let ana = app.employee("Ana", true).await;

        let (status, request) = app
            .post(
                "/api/timeoff/",
                json!({"employee_id": ana, "date": "2024-07-01", "reason": "dentist", "status": "approved"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(request["status"], "pending");
        assert_eq!(request["reason"], "dentist");
        assert_eq!(request["employee"]["id"], ana);

        let id = request["id"].as_i64().unwrap();

        let (status, approved) = app.post_empty(&format!("/api/timeoff/{}/approve", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(approved["status"], "approved");

        let (status, rejected) = app.post_empty(&format!("/api/timeoff/{}/reject", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rejected["status"], "rejected");
        assert_eq!(rejected["employee"]["full_name"], "Ana");
    }

    #[tokio::test]
    async fn test_time_off_errors() {
        let app = TestApp::new();

        let (status, body) = app.post("/api/timeoff/", json!({"employee_id": 42, "date": "2024-07-01"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(body), "invalid_reference");

        let (status, body) = app.post_empty("/api/timeoff/9/approve").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(body), "not_found");

        let (status, _) = app.post_empty("/api/timeoff/9/reject").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_status_filter_matches_nothing() {
        let app = TestApp::new();
        let ana = app.employee("Ana", true).await;
        let (status, _) = app.post("/api/timeoff/", json!({"employee_id": ana, "date": "2024-07-01"})).await;
        assert_eq!(status, StatusCode::OK);

        // Exact match: other spellings of a known status match nothing either
        for filter in ["maybe", "Pending", "PENDING"] {
            let (status, body) = app.get(&format!("/api/timeoff/?status={}", filter)).await;
            assert_eq!(status, StatusCode::OK, "status={}", filter);
            assert_eq!(body, json!([]), "status={}", filter);
        }

        let (_, pending) = app.get("/api/timeoff/?status=pending").await;
        assert_eq!(pending.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_time_off_by_status() {
        let app = TestApp::new();
        let ana = app.employee("Ana", true).await;
        let ben = app.employee("Ben", false).await;

        let (_, first) = app.post("/api/timeoff/", json!({"employee_id": ana, "date": "2024-07-09"})).await;
        let (status, _) = app.post("/api/timeoff/", json!({"employee_id": ben, "date": "2024-07-02"})).await;
        assert_eq!(status, StatusCode::OK);
        app.post_empty(&format!("/api/timeoff/{}/approve", first["id"])).await;

        let (_, all) = app.get("/api/timeoff/").await;
        let all = all.as_array().unwrap().clone();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0]["date"], "2024-07-02");
        assert_eq!(all[1]["date"], "2024-07-09");

        let (_, unfiltered) = app.get("/api/timeoff?status=").await;
        assert_eq!(unfiltered.as_array().unwrap().len(), 2);

        let (_, pending) = app.get("/api/timeoff/?status=pending").await;
        let pending = pending.as_array().unwrap().clone();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0]["employee"]["full_name"], "Ben");

        let (_, approved) = app.get("/api/timeoff/?status=approved").await;
        assert_eq!(approved.as_array().unwrap().len(), 1);

        let (_, rejected) = app.get("/api/timeoff/?status=rejected").await;
        assert!(rejected.as_array().unwrap().is_empty());
    }

    // === FRONT END ===

    #[tokio::test]
    async fn test_serves_front_end() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>shiftbook</h1>");

        let (status, body) = app.send(Method::GET, "/static/app.js", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('hi');");

        let (status, _) = app.send(Method::GET, "/static/missing.css", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
