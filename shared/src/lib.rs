//! CareDesk 共享类型库
//!
//! 前端与进程内 mock 服务共用的数据模型、API 协议与响应信封。
//! 这里只有可序列化的纯类型，不依赖任何浏览器 API。

pub mod date;
pub mod models;
pub mod protocol;
pub mod response;

pub use date::Timestamp;
pub use models::{DashboardStats, Role, UserProfile, UserRecord, UserStatus};
pub use response::{ApiError, ApiResult, Envelope};
