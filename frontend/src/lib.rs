//! CareDesk 前端应用
//!
//! 健康咨询服务的管理后台，CSR 渲染。职责划分：
//! - `web::route` / `web::router`：路由定义与导航守卫
//! - `session`：会话生命周期（水合 / 登录 / 刷新档案 / 注销）
//! - `mock`：进程内 HTTP 形状的 mock 服务（开发期的后端替身）
//! - `api`：API 客户端，把类型化请求派发进 mock 服务
//! - `components`：页面组件层

// 控制台日志宏：wasm 下走浏览器 console，原生（单元测试）下走标准流
#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => { web_sys::console::log_1(&format!($($t)*).into()) }
}
#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => { println!($($t)*) }
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($t:tt)*) => { web_sys::console::warn_1(&format!($($t)*).into()) }
}
#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($t:tt)*) => { eprintln!($($t)*) }
}

pub(crate) use {console_log, console_warn};

mod api;
mod components {
    pub mod dashboard;
    pub mod icons;
    pub mod login;
    pub mod users;
}
mod mock;
mod session;
pub(crate) mod web;

use crate::api::ApiClient;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::users::UsersPage;
use crate::mock::MockBackend;
use crate::session::SessionContext;
use crate::web::BrowserStore;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;
use std::rc::Rc;

/// 路由匹配函数：根据当前路由返回对应的页面视图
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login { .. } => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 进程内 mock 后端：加载时取时钟做种子，数据集一次生成
    let backend = Rc::new(MockBackend::new(js_sys::Date::now() as u64));
    let api = ApiClient::new(backend);
    provide_context(api);

    // 2. 会话上下文：构造后立即从 LocalStorage 水合
    let session = SessionContext::new();
    session.hydrate(&BrowserStore);
    provide_context(session);

    // 3. 认证信号注入路由服务，守卫与会话解耦
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
