//! 会话持久化适配器
//!
//! 两个固定键：token 字符串与 JSON 序列化的用户档案。
//! 所有操作同步、不失败（底层存储异常一律降级为 `None` / no-op），
//! 也不做任何值形状校验。

use caredesk_shared::models::UserProfile;

pub const TOKEN_KEY: &str = "caredesk_token";
pub const USER_INFO_KEY: &str = "caredesk_user_info";

/// 浏览器 LocalStorage 的薄封装
struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// 会话层依赖的持久化接口
///
/// 会话上下文经由它水合与落盘；测试注入内存实现。
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn remove_token(&self);
    fn user_info(&self) -> Option<UserProfile>;
    fn set_user_info(&self, profile: &UserProfile);
    fn remove_user_info(&self);
}

/// LocalStorage 实现
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn token(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) {
        LocalStorage::set(TOKEN_KEY, token);
    }

    fn remove_token(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }

    fn user_info(&self) -> Option<UserProfile> {
        // 档案损坏等同于不存在
        LocalStorage::get(USER_INFO_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
    }

    fn set_user_info(&self, profile: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(profile) {
            LocalStorage::set(USER_INFO_KEY, &raw);
        }
    }

    fn remove_user_info(&self) {
        LocalStorage::delete(USER_INFO_KEY);
    }
}
