//! Page loads and writes against a mock backend

mod support;

use crmdesk_core::NotificationLevel;
use crmdesk_domain::{CrmError, LeadStatus, NewReturn};
use crmdesk_lib::pages::{DashboardPage, ReturnsPage, ACCESS_DENIED};
use crmdesk_lib::{act, open, PageAction, PageFilters, PageOutcome, Route};
use serde_json::{json, Value};
use support::{signed_in, signed_out, toasts};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn leave(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "employeeName": "Ravi Kumar",
        "leaveType": "Casual",
        "startDate": "2026-10-01",
        "endDate": "2026-10-02",
        "status": status
    })
}

fn rendered(outcome: PageOutcome) -> String {
    match outcome {
        PageOutcome::Rendered(page) => page,
        PageOutcome::Redirect(target) => panic!("unexpected redirect to {target}"),
    }
}

#[tokio::test]
async fn protected_route_without_token_redirects_before_fetching() {
    let server = MockServer::start().await;
    let (ctx, _) = signed_out(&server);

    let outcome = open(&ctx, Route::Leads, &PageFilters::default()).await.unwrap();

    assert_eq!(outcome, PageOutcome::Redirect("/auth/login".into()));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn page_requests_carry_the_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/trainers"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "t1", "name": "Anil", "email": "anil@example.com", "specialization": "Rust"},
            {"_id": "t2", "name": "Divya", "email": "divya@example.com", "specialization": "Go"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "sales");
    let filters = PageFilters { query: "rust".into(), status: None };
    let page = rendered(open(&ctx, Route::Trainers, &filters).await.unwrap());

    assert!(page.contains("Anil"));
    assert!(!page.contains("Divya"));
    assert!(page.contains("signed in as Meera Nair (sales)"));
}

#[tokio::test]
async fn approving_pending_leave_reloads_and_drops_it_from_pending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaves"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([leave("l-1", "Pending")])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/leaves"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([leave("l-1", "Approved")])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/leaves/l-1/status"))
        .and(body_json(json!({"status": "Approved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(leave("l-1", "Approved")))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "manager");
    let outcome = act(
        &ctx,
        Route::PendingLeaves,
        PageAction::ApproveLeave("l-1".into()),
        &PageFilters::default(),
    )
    .await
    .unwrap();

    let page = rendered(outcome);
    assert!(page.contains("No pending leave requests"));

    let toasts = toasts(&ctx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, NotificationLevel::Success);
    assert_eq!(toasts[0].message, "Leave request approved");
}

#[tokio::test]
async fn failed_write_keeps_list_and_raises_one_toast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaves"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([leave("l-9", "Pending")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/leaves/l-9/status"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Leave already processed"})),
        )
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "hr");
    let filters = PageFilters { query: String::new(), status: Some("pending".into()) };
    let outcome =
        act(&ctx, Route::Leaves, PageAction::RejectLeave("l-9".into()), &filters).await.unwrap();

    let page = rendered(outcome);
    assert!(page.contains("l-9"));
    assert!(page.contains("Ravi Kumar"));

    let toasts = toasts(&ctx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, NotificationLevel::Error);
    assert_eq!(toasts[0].message, "Leave already processed");
}

#[tokio::test]
async fn failed_write_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "u-7", "name": "Kiran", "email": "kiran@example.com", "role": "sales"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/u-7/reset-password"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "admin");
    let action = PageAction::ResetPassword { user_id: "u-7".into(), password: "n3w".into() };
    let page = rendered(act(&ctx, Route::Employees, action, &PageFilters::default()).await.unwrap());

    assert!(page.contains("Kiran"));
    let toasts = toasts(&ctx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Something went wrong");
}

#[tokio::test]
async fn staff_pages_are_hidden_from_other_roles() {
    let server = MockServer::start().await;
    let (ctx, _) = signed_in(&server, "warehouse");

    let page = rendered(open(&ctx, Route::Employees, &PageFilters::default()).await.unwrap());
    assert!(page.contains(ACCESS_DENIED));
    assert!(!page.contains("/dashboard/expenses"));

    let action = PageAction::ResetPassword { user_id: "u-7".into(), password: "n3w".into() };
    let page = rendered(act(&ctx, Route::Employees, action, &PageFilters::default()).await.unwrap());
    assert!(page.contains(ACCESS_DENIED));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() {
    let server = MockServer::start().await;
    let (ctx, _) = signed_in(&server, "sales");

    let filters = PageFilters { query: String::new(), status: Some("Archived".into()) };
    let err = open(&ctx, Route::Leads, &filters).await.unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[tokio::test]
async fn action_on_the_wrong_route_is_rejected() {
    let server = MockServer::start().await;
    let (ctx, _) = signed_in(&server, "admin");

    let err = act(&ctx, Route::Sales, PageAction::ApproveLeave("l-1".into()), &PageFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
}

#[tokio::test]
async fn dashboard_joins_reports_and_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sales": [
            {"_id": "s1", "customerName": "Acme", "product": "CRM seat", "amount": 1000.0},
            {"_id": "s2", "customerName": "Globex", "product": "Support", "amount": 250.5}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reports/leads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leads": [
            {"_id": "l1", "name": "Initech", "status": "New"},
            {"_id": "l2", "name": "Umbrella", "status": "New"},
            {"_id": "l3", "name": "Hooli", "status": "Lost"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/delivery-challans/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 4, "delivered": 3, "pending": 1})))
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "manager");
    let mut page = DashboardPage::new(&ctx);
    assert!(page.load(&ctx).await);

    assert!((page.revenue() - 1250.5).abs() < f64::EPSILON);
    assert_eq!(page.lead_count(LeadStatus::New), 2);
    assert_eq!(page.lead_count(LeadStatus::Lost), 1);
    assert_eq!(page.data().challans.delivered, 3);

    let text = page.render();
    assert!(text.contains("1,250.50"));
    assert!(text.contains("Delivered"));
    assert!(toasts(&ctx).is_empty());
}

#[tokio::test]
async fn dashboard_keeps_nothing_when_one_fetch_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sales": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reports/leads"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "Reports offline"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/delivery-challans/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 1})))
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "manager");
    let mut page = DashboardPage::new(&ctx);
    assert!(!page.load(&ctx).await);

    assert_eq!(page.data().challans.total, 0);
    let toasts = toasts(&ctx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Reports offline");
}

#[tokio::test]
async fn invalid_return_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/returns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "warehouse");
    let mut page = ReturnsPage::new(&ctx);
    page.load(&ctx).await;

    let created = page
        .create(
            &ctx,
            NewReturn { item_id: "w-1".into(), quantity: 0, reason: "Damaged".into(), challan_number: None },
        )
        .await;

    assert!(created.is_none());
    let toasts = toasts(&ctx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Quantity must be greater than zero");

    let posts = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.method.as_str() == "POST")
        .count();
    assert_eq!(posts, 0);
}

#[tokio::test]
async fn created_return_is_shown_after_reload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/returns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/returns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "r-1", "itemId": "w-1", "itemName": "Router", "quantity": 2, "reason": "Damaged"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/returns"))
        .and(body_json(json!({"itemId": "w-1", "quantity": 2, "reason": "Damaged"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"_id": "r-1", "itemId": "w-1", "quantity": 2, "reason": "Damaged"}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = signed_in(&server, "warehouse");
    let request =
        NewReturn { item_id: "w-1".into(), quantity: 2, reason: "Damaged".into(), challan_number: None };
    let page = rendered(
        act(&ctx, Route::Returns, PageAction::CreateReturn(request), &PageFilters::default())
            .await
            .unwrap(),
    );

    assert!(page.contains("Router"));
    let toasts = toasts(&ctx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Return recorded");
}
