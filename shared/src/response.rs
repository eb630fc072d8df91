//! 响应信封与类型化错误
//!
//! 线上契约是 `{code, data, message}`。类型化代码一律使用
//! `ApiResult<T>`：信封只在客户端边界转换一次，不做散落在各处的
//! 状态码判断。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 业务状态码
pub mod code {
    pub const OK: u16 = 200;
    pub const UNAUTHORIZED: u16 = 401;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL: u16 = 500;
}

/// `{code, data, message}` 响应信封
///
/// 失败时 `data` 为 `null`；成功分支的 `data` 一定存在
/// （`data: null` 的成功响应用 `Value::Null` 表达）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: Option<T>,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: code::OK,
            data: Some(data),
            message: "success".to_string(),
        }
    }

    pub fn err(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: message.into(),
        }
    }
}

impl Envelope<serde_json::Value> {
    /// 把信封转换为类型化结果；非 200 一律映射为 `ApiError`
    pub fn into_result<T: DeserializeOwned>(self) -> ApiResult<T> {
        if self.code != code::OK {
            return Err(ApiError::new(self.code, self.message));
        }
        serde_json::from_value(self.data.unwrap_or(serde_json::Value::Null))
            .map_err(|e| ApiError::new(code::INTERNAL, format!("响应解码失败: {e}")))
    }
}

/// API 层的类型化错误（每个端点失败分支的载体）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
