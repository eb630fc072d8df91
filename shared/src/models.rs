//! 领域模型
//!
//! 线上字段名统一为 camelCase，与原有管理后台的接口契约保持一致。

use crate::date::Timestamp;
use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "管理员",
            Role::User => "普通用户",
        }
    }
}

/// 账号状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "启用",
            UserStatus::Inactive => "停用",
        }
    }
}

/// 当前登录用户的档案
///
/// 由会话独占持有；每次拉取整体替换，从不做部分修补。
/// `permissions` 是页面标识的集合，守卫之外的菜单渲染消费它。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub role: Role,
    pub avatar: String,
    pub permissions: Vec<String>,
}

/// 用户列表记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub role: Role,
    pub status: UserStatus,
    pub create_time: Timestamp,
    pub last_login_time: Timestamp,
}

/// 工作台统计指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub user_count: u32,
    pub today_conversations: u32,
    pub average_response_time: f64,
    pub satisfaction_rate: f64,
}
