//! 进程内 mock 服务
//!
//! 开发期的后端替身：客户端的请求在进入任何网络层之前被拦截到这里，
//! 由路由表分发给各 handler，返回 `{code, data, message}` 信封。
//! 除登录 401 与未知路由 404 外，所有端点无条件成功。
//! 数据集按种子一次生成后不可变；统计接口每次调用重新取随机数，
//! 模拟实时变化的大盘。

use std::cell::RefCell;

use caredesk_shared::models::{DashboardStats, UserRecord};
use caredesk_shared::protocol::{HttpMethod, LoginPayload, LoginRequest, UserListPayload};
use caredesk_shared::response::{Envelope, code};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;
use serde_json::Value;

pub mod data;

#[cfg(test)]
mod tests;

/// 演示环境的固定账号；仅做精确字节比较，不折叠大小写
pub const MOCK_USERNAME: &str = "admin";
pub const MOCK_PASSWORD: &str = "123456";

/// HTTP 形状的请求，客户端拦截层的传输单元
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl MockRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// mock 后端
pub struct MockBackend {
    users: Vec<UserRecord>,
    rng: RefCell<SmallRng>,
}

impl MockBackend {
    /// 按种子构造，数据集大小取默认值
    pub fn new(seed: u64) -> Self {
        Self::with_user_count(seed, data::DEFAULT_USER_COUNT)
    }

    /// 按种子与指定数据集大小构造（测试注入固定种子用）
    pub fn with_user_count(seed: u64, count: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let users = data::generate_users(&mut rng, count);
        Self {
            users,
            rng: RefCell::new(rng),
        }
    }

    /// 路由表：按 (method, path) 分发到 handler
    pub fn handle(&self, req: MockRequest) -> Envelope<Value> {
        let MockRequest {
            method,
            path,
            query,
            body,
        } = req;

        match (method, path.as_str()) {
            (HttpMethod::Post, "/api/auth/login") => self.login(body.as_ref()),
            (HttpMethod::Post, "/api/auth/logout") => Envelope::ok(Value::Null),
            (HttpMethod::Get, "/api/user/info") => ok_json(&data::admin_profile()),
            (HttpMethod::Get, "/api/user/list") => self.user_list(&query),
            (HttpMethod::Put, "/api/user/update") => Envelope::ok(body.unwrap_or(Value::Null)),
            (HttpMethod::Delete, p) if p.starts_with("/api/user/") => delete_user(p),
            (HttpMethod::Get, "/api/statistics") => self.statistics(),
            _ => Envelope::err(code::NOT_FOUND, format!("接口不存在: {path}")),
        }
    }

    fn login(&self, body: Option<&Value>) -> Envelope<Value> {
        let req: Option<LoginRequest> = body.and_then(|b| serde_json::from_value(b.clone()).ok());
        match req {
            Some(r) if r.username == MOCK_USERNAME && r.password == MOCK_PASSWORD => {
                let payload = LoginPayload {
                    token: self.fresh_token(),
                    user_info: data::admin_profile(),
                };
                ok_json(&payload)
            }
            _ => Envelope::err(code::UNAUTHORIZED, "用户名或密码错误"),
        }
    }

    fn user_list(&self, query: &[(String, String)]) -> Envelope<Value> {
        let page = coerce_number(query_param(query, "page"), 1);
        let page_size = coerce_number(query_param(query, "pageSize"), 10);

        // 越界页返回空切片而非错误
        let start = (page as u64 - 1).saturating_mul(page_size as u64);
        let list: Vec<UserRecord> = if start >= self.users.len() as u64 {
            Vec::new()
        } else {
            let start = start as usize;
            let end = start
                .saturating_add(page_size as usize)
                .min(self.users.len());
            self.users[start..end].to_vec()
        };

        ok_json(&UserListPayload {
            list,
            total: self.users.len() as u64,
            page,
            page_size,
        })
    }

    fn statistics(&self) -> Envelope<Value> {
        let mut rng = self.rng.borrow_mut();
        let stats = DashboardStats {
            user_count: rng.gen_range(1000..5000),
            today_conversations: rng.gen_range(200..2000),
            average_response_time: rng.gen_range(8..=30) as f64 / 10.0,
            satisfaction_rate: rng.gen_range(900..=999) as f64 / 10.0,
        };
        ok_json(&stats)
    }

    fn fresh_token(&self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.borrow_mut().fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .simple()
            .to_string()
    }
}

fn delete_user(path: &str) -> Envelope<Value> {
    // id 不存在同样视为成功：数据集本身不可变
    match path.trim_start_matches("/api/user/").parse::<u64>() {
        Ok(_) => Envelope::ok(Value::Null),
        Err(_) => Envelope::err(code::NOT_FOUND, format!("接口不存在: {path}")),
    }
}

fn query_param<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// 按原始后台的行为把查询参数强转为数字：解析失败或为 0 时退回默认值
fn coerce_number(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(|s| s.trim().parse::<u32>().ok()) {
        None | Some(0) => default,
        Some(v) => v,
    }
}

fn ok_json<T: Serialize>(data: &T) -> Envelope<Value> {
    match serde_json::to_value(data) {
        Ok(v) => Envelope::ok(v),
        Err(e) => Envelope::err(code::INTERNAL, format!("响应序列化失败: {e}")),
    }
}
