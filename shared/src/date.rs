//! 毫秒时间戳类型
//!
//! 传输与存储一律使用 `Timestamp`（自 Unix 纪元以来的毫秒数，
//! serde 透明序列化为整数）；展示格式化经 chrono 完成。

use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }

    /// 格式化为 `YYYY-MM-DD HH:MM` 的展示字符串
    ///
    /// 超出 chrono 可表示范围时返回空串。
    pub fn format_display(&self) -> String {
        DateTime::from_timestamp_millis(self.0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
