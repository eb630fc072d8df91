use super::*;
use caredesk_shared::models::{Role, UserProfile};
use serde::de::DeserializeOwned;
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

/// 固定种子 + 10 条记录的后端
fn backend10() -> MockBackend {
    MockBackend::with_user_count(42, 10)
}

fn get(path: &str) -> MockRequest {
    MockRequest::new(HttpMethod::Get, path)
}

fn post(path: &str, body: Value) -> MockRequest {
    MockRequest::new(HttpMethod::Post, path).with_body(body)
}

fn login_body(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

fn decode<T: DeserializeOwned>(envelope: Envelope<Value>) -> T {
    assert_eq!(envelope.code, code::OK, "期望成功信封: {}", envelope.message);
    serde_json::from_value(envelope.data.expect("成功信封应携带 data")).expect("载荷应可解码")
}

// =========================================================
// 登录
// =========================================================

#[test]
fn login_succeeds_with_demo_credentials() {
    let backend = backend10();
    let env = backend.handle(post("/api/auth/login", login_body("admin", "123456")));
    let payload: LoginPayload = decode(env);

    assert!(!payload.token.is_empty());
    assert_eq!(payload.user_info.role, Role::Admin);
    assert!(payload.user_info.permissions.contains(&"dashboard".to_string()));
}

#[test]
fn login_rejects_unknown_credentials() {
    let backend = backend10();
    let env = backend.handle(post("/api/auth/login", login_body("admin", "wrong")));
    assert_eq!(env.code, code::UNAUTHORIZED);
    assert!(env.data.is_none());
    assert!(!env.message.is_empty());
}

#[test]
fn login_compares_credentials_exactly() {
    let backend = backend10();
    // 不折叠大小写
    let env = backend.handle(post("/api/auth/login", login_body("Admin", "123456")));
    assert_eq!(env.code, code::UNAUTHORIZED);
    // 不修剪空白
    let env = backend.handle(post("/api/auth/login", login_body("admin", "123456 ")));
    assert_eq!(env.code, code::UNAUTHORIZED);
}

#[test]
fn login_without_body_is_rejected() {
    let backend = backend10();
    let env = backend.handle(MockRequest::new(HttpMethod::Post, "/api/auth/login"));
    assert_eq!(env.code, code::UNAUTHORIZED);
}

#[test]
fn consecutive_logins_issue_distinct_tokens() {
    let backend = backend10();
    let first: LoginPayload =
        decode(backend.handle(post("/api/auth/login", login_body("admin", "123456"))));
    let second: LoginPayload =
        decode(backend.handle(post("/api/auth/login", login_body("admin", "123456"))));
    assert_ne!(first.token, second.token);
}

// =========================================================
// 用户档案
// =========================================================

#[test]
fn profile_fetch_is_fixed_and_idempotent() {
    let backend = backend10();
    let first: UserProfile = decode(backend.handle(get("/api/user/info")));
    let second: UserProfile = decode(backend.handle(get("/api/user/info")));

    // 整体替换语义：两次拉取字段完全一致，权限不会累积
    assert_eq!(first, second);
    assert_eq!(first.role, Role::Admin);
}

// =========================================================
// 分页列表
// =========================================================

#[test]
fn list_slices_by_page() {
    let backend = backend10();
    let env = backend.handle(
        get("/api/user/list")
            .with_query("page", 2)
            .with_query("pageSize", 4),
    );
    let payload: UserListPayload = decode(env);

    let ids: Vec<u64> = payload.list.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![5, 6, 7, 8]);
    assert_eq!(payload.total, 10);
    assert_eq!(payload.page, 2);
    assert_eq!(payload.page_size, 4);
}

#[test]
fn list_out_of_range_page_is_empty_not_an_error() {
    let backend = backend10();
    let env = backend.handle(
        get("/api/user/list")
            .with_query("page", 5)
            .with_query("pageSize", 4),
    );
    let payload: UserListPayload = decode(env);

    assert!(payload.list.is_empty());
    assert_eq!(payload.total, 10);
}

#[test]
fn list_defaults_to_first_page_of_ten() {
    let backend = backend10();
    let payload: UserListPayload = decode(backend.handle(get("/api/user/list")));

    assert_eq!(payload.page, 1);
    assert_eq!(payload.page_size, 10);
    assert_eq!(payload.list.len(), 10);
}

#[test]
fn list_coerces_string_parameters() {
    let backend = backend10();

    // 合法数字字符串正常生效
    let payload: UserListPayload = decode(backend.handle(
        get("/api/user/list")
            .with_query("page", "2")
            .with_query("pageSize", "3"),
    ));
    assert_eq!(payload.page, 2);
    assert_eq!(payload.list.len(), 3);

    // 垃圾值与 0 退回默认
    let payload: UserListPayload = decode(backend.handle(
        get("/api/user/list")
            .with_query("page", "abc")
            .with_query("pageSize", "0"),
    ));
    assert_eq!(payload.page, 1);
    assert_eq!(payload.page_size, 10);
}

#[test]
fn generated_ids_are_monotonic() {
    let backend = backend10();
    let payload: UserListPayload = decode(backend.handle(get("/api/user/list")));
    let ids: Vec<u64> = payload.list.iter().map(|u| u.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
}

#[test]
fn same_seed_yields_the_same_dataset() {
    let a: UserListPayload =
        decode(MockBackend::with_user_count(7, 10).handle(get("/api/user/list")));
    let b: UserListPayload =
        decode(MockBackend::with_user_count(7, 10).handle(get("/api/user/list")));
    assert_eq!(a.list, b.list);
}

// =========================================================
// 更新与删除
// =========================================================

#[test]
fn update_echoes_submitted_body() {
    let backend = backend10();
    let body = json!({ "id": 3, "username": "renamed", "status": "inactive" });
    let env = backend.handle(
        MockRequest::new(HttpMethod::Put, "/api/user/update").with_body(body.clone()),
    );

    assert_eq!(env.code, code::OK);
    assert_eq!(env.data, Some(body));
}

#[test]
fn delete_succeeds_for_any_numeric_id() {
    let backend = backend10();
    for path in ["/api/user/3", "/api/user/9999"] {
        let env = backend.handle(MockRequest::new(HttpMethod::Delete, path));
        assert_eq!(env.code, code::OK);
        assert_eq!(env.data, Some(Value::Null));
    }
}

#[test]
fn delete_with_non_numeric_id_is_not_found() {
    let backend = backend10();
    let env = backend.handle(MockRequest::new(HttpMethod::Delete, "/api/user/abc"));
    assert_eq!(env.code, code::NOT_FOUND);
}

// =========================================================
// 统计
// =========================================================

#[test]
fn statistics_stay_within_documented_ranges() {
    let backend = backend10();
    let stats: DashboardStats = decode(backend.handle(get("/api/statistics")));

    assert!((1000..5000).contains(&stats.user_count));
    assert!((200..2000).contains(&stats.today_conversations));
    assert!((0.8..=3.0).contains(&stats.average_response_time));
    assert!((90.0..=99.9).contains(&stats.satisfaction_rate));
}

#[test]
fn statistics_draw_fresh_values_each_call() {
    let backend = backend10();
    let a: DashboardStats = decode(backend.handle(get("/api/statistics")));
    let b: DashboardStats = decode(backend.handle(get("/api/statistics")));
    let c: DashboardStats = decode(backend.handle(get("/api/statistics")));

    // 不做 memoize：连续调用不可能全部相同
    assert!(!(a == b && b == c));
}

#[test]
fn statistics_are_reproducible_for_the_same_seed() {
    let a: DashboardStats =
        decode(MockBackend::with_user_count(7, 10).handle(get("/api/statistics")));
    let b: DashboardStats =
        decode(MockBackend::with_user_count(7, 10).handle(get("/api/statistics")));
    assert_eq!(a, b);
}

// =========================================================
// 路由表
// =========================================================

#[test]
fn unknown_route_returns_not_found() {
    let backend = backend10();
    let env = backend.handle(get("/api/unknown"));
    assert_eq!(env.code, code::NOT_FOUND);
    assert!(env.data.is_none());
}

#[test]
fn method_mismatch_is_not_found() {
    let backend = backend10();
    let env = backend.handle(get("/api/auth/login"));
    assert_eq!(env.code, code::NOT_FOUND);
}

#[test]
fn logout_always_succeeds_with_null_data() {
    let backend = backend10();
    let env = backend.handle(post("/api/auth/logout", Value::Null));
    assert_eq!(env.code, code::OK);
    assert_eq!(env.data, Some(Value::Null));
}
