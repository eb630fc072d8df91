//! 种子化的 mock 数据生成
//!
//! 数据集在 mock 后端构造时一次生成，之后不可变；同一种子总是得到
//! 同一批记录，测试据此注入固定数据。时间字段相对固定基准时刻推算，
//! 生成过程不读墙上时钟。

use caredesk_shared::date::Timestamp;
use caredesk_shared::models::{Role, UserProfile, UserRecord, UserStatus};
use rand::Rng;
use rand::rngs::SmallRng;

/// 应用默认的数据集大小
pub const DEFAULT_USER_COUNT: u64 = 36;

/// 生成时间的固定基准时刻（2025-06 中旬）
const BASE_TIME_MS: i64 = 1_750_000_000_000;
const DAY_MS: i64 = 86_400_000;

const NAME_POOL: &[&str] = &[
    "chen", "wang", "li", "zhang", "liu", "yang", "huang", "zhao", "wu", "zhou",
];

/// `/api/user/info` 与登录响应固定返回的管理员档案
pub fn admin_profile() -> UserProfile {
    UserProfile {
        id: 1,
        username: "admin".to_string(),
        role: Role::Admin,
        avatar: avatar_for("admin"),
        permissions: vec![
            "dashboard".to_string(),
            "users".to_string(),
            "statistics".to_string(),
            "settings".to_string(),
        ],
    }
}

/// 生成 id 单调递增的用户记录集
pub fn generate_users(rng: &mut SmallRng, count: u64) -> Vec<UserRecord> {
    (1..=count)
        .map(|id| {
            let family = NAME_POOL[rng.gen_range(0..NAME_POOL.len())];
            let username = format!("{family}_{id:03}");
            let create_ms = BASE_TIME_MS - rng.gen_range(0..180 * DAY_MS);
            // 最近登录不早于注册
            let last_login_ms = (BASE_TIME_MS - rng.gen_range(0..7 * DAY_MS)).max(create_ms);
            UserRecord {
                id,
                email: format!("{username}@example.com"),
                avatar: avatar_for(&username),
                role: if rng.gen_bool(0.1) {
                    Role::Admin
                } else {
                    Role::User
                },
                status: if rng.gen_bool(0.8) {
                    UserStatus::Active
                } else {
                    UserStatus::Inactive
                },
                create_time: Timestamp::new(create_ms),
                last_login_time: Timestamp::new(last_login_ms),
                username,
            }
        })
        .collect()
}

fn avatar_for(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}
