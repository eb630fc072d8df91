//! API 协议定义
//!
//! 每个端点一个请求类型，通过 `ApiRequest` trait 把请求与响应类型、
//! 路径和方法绑定在一起；客户端按这些常量整形请求，mock 服务按
//! 相同的路径分发。

use crate::models::{DashboardStats, UserProfile, UserRecord};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// 端点元数据：请求-响应关系 + 路径 + 方法
pub trait ApiRequest: Serialize + DeserializeOwned {
    type Response: Serialize + DeserializeOwned;
    const PATH: &'static str;
    const METHOD: HttpMethod;
}

// =========================================================
// 认证
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub token: String,
    pub user_info: UserProfile,
}

impl ApiRequest for LoginRequest {
    type Response = LoginPayload;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = ();
    const PATH: &'static str = "/api/auth/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// 用户
// =========================================================

/// 拉取当前用户档案；mock 层不校验提交的 token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/api/user/info";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 分页列表查询；参数以查询串传输，缺省由服务端补默认值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListPayload {
    pub list: Vec<UserRecord>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl ApiRequest for UserListRequest {
    type Response = UserListPayload;
    const PATH: &'static str = "/api/user/list";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 更新用户：mock 服务原样回显请求体，不与既有记录合并
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateUserRequest(pub serde_json::Value);

impl ApiRequest for UpdateUserRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = "/api/user/update";
    const METHOD: HttpMethod = HttpMethod::Put;
}

/// 删除用户；id 走路径参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub id: u64,
}

impl DeleteUserRequest {
    /// 把路径模板中的 `:id` 替换为具体 id
    pub fn path(&self) -> String {
        Self::PATH.replace(":id", &self.id.to_string())
    }
}

impl ApiRequest for DeleteUserRequest {
    type Response = ();
    const PATH: &'static str = "/api/user/:id";
    const METHOD: HttpMethod = HttpMethod::Delete;
}

// =========================================================
// 统计
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsRequest;

impl ApiRequest for StatisticsRequest {
    type Response = DashboardStats;
    const PATH: &'static str = "/api/statistics";
    const METHOD: HttpMethod = HttpMethod::Get;
}
