//! 工作台页面
//!
//! 统计卡片来自 `/api/statistics`；接口每次调用返回新鲜随机数，
//! 这里叠加一个周期刷新，模拟实时大盘。

use leptos::prelude::*;
use leptos::task::spawn_local;

use caredesk_shared::models::DashboardStats;

use super::icons::{LogoutIcon, UsersIcon};
use crate::api::ApiClient;
use crate::console_warn;
use crate::session::{fetch_profile, logout, use_session};
use crate::web::router::use_router;
use crate::web::{BrowserStore, Interval};

/// 统计刷新间隔（毫秒）
const STATS_REFRESH_MS: u32 = 30_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let api = expect_context::<ApiClient>();

    let (stats, set_stats) = signal(Option::<DashboardStats>::None);

    let load_stats = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.statistics().await {
                    Ok(s) => set_stats.set(Some(s)),
                    Err(e) => console_warn!("[Dashboard] 加载统计数据失败: {}", e),
                }
            });
        }
    };

    // 进入页面：刷新档案（整体替换）+ 首次拉取统计
    {
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = fetch_profile(&session, &BrowserStore, &api).await {
                console_warn!("[Dashboard] 刷新用户档案失败: {}", e);
            }
        });
    }
    load_stats();

    let ticker = Interval::new(STATS_REFRESH_MS, {
        let load_stats = load_stats.clone();
        move || load_stats()
    });
    on_cleanup(move || drop(ticker));

    let on_logout = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                // 本地状态无条件清空；路由服务监听认证信号自动跳回登录页
                logout(&session, &BrowserStore, &api).await;
            });
        }
    };

    let on_users = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate("/users");
    };

    let profile = move || session.state.get().profile;

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-6">
                <div class="flex-1">
                    <span class="text-xl font-bold">"CareDesk 工作台"</span>
                </div>
                <div class="flex-none flex items-center gap-3">
                    <a href="/users" class="btn btn-ghost btn-sm" on:click=on_users>
                        <UsersIcon class="h-5 w-5" />
                        "用户管理"
                    </a>
                    {move || profile().map(|p| view! {
                        <div class="flex items-center gap-2">
                            <img src=p.avatar class="w-8 h-8 rounded-full" />
                            <span class="text-sm">{p.username}</span>
                        </div>
                    })}
                    <button class="btn btn-ghost btn-sm text-error" on:click=on_logout>
                        <LogoutIcon class="h-5 w-5" />
                        "退出"
                    </button>
                </div>
            </div>

            <div class="p-6">
                {move || match stats.get() {
                    None => view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any(),
                    Some(s) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                            <StatCard title="用户总数" value=s.user_count.to_string() />
                            <StatCard title="今日会话" value=s.today_conversations.to_string() />
                            <StatCard
                                title="平均响应时长"
                                value=format!("{:.1} s", s.average_response_time)
                            />
                            <StatCard
                                title="满意度"
                                value=format!("{:.1}%", s.satisfaction_rate)
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(#[prop(into)] title: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <span class="text-sm text-base-content/60">{title}</span>
                <span class="text-3xl font-bold">{value}</span>
            </div>
        </div>
    }
}
