//! 路由服务 - 核心引擎
//!
//! 封装 History API 的"请求 -> 守卫 -> 处理 -> 加载"导航流程。
//! 任何路由切换（编程式、浏览器前进后退、认证状态变化）都先经过
//! `route::decide` 得出结论，之后才推进历史记录并更新当前路由信号，
//! 受保护页面不会在守卫结论之前被构造。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardDecision, decide};
use crate::console_log;

/// 当前浏览器地址（路径 + 查询串）
fn current_url() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            let path = location.pathname().ok()?;
            let search = location.search().ok()?;
            Some(format!("{path}{search}"))
        })
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn apply_history(path: &str, use_push: bool) {
    if use_push {
        push_history_state(path);
    } else {
        replace_history_state(path);
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证状态以信号注入，与会话实现解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 初始路由同样要过守卫：直接打开受保护地址时替换为登录页
        let requested = AppRoute::from_path(&current_url());
        let initial = match decide(&requested, is_authenticated.get_untracked()) {
            GuardDecision::Proceed => requested,
            GuardDecision::Redirect(target) => {
                replace_history_state(&target.to_path());
                target
            }
        };
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 当前路由（只读信号）
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 编程式导航入口
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let requested_path = target.to_path();
        let is_auth = self.is_authenticated.get_untracked();

        match decide(&target, is_auth) {
            GuardDecision::Proceed => {
                apply_history(&requested_path, use_push);
                self.set_route.set(target);
            }
            GuardDecision::Redirect(redirect) => {
                console_log!(
                    "[Router] {} blocked by guard, redirecting to {}.",
                    requested_path,
                    redirect.to_path()
                );
                apply_history(&redirect.to_path(), use_push);
                self.set_route.set(redirect);
            }
        }
    }

    /// 浏览器前进/后退同样执行守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_url());
            match decide(&target, is_authenticated.get_untracked()) {
                GuardDecision::Proceed => set_route.set(target),
                GuardDecision::Redirect(redirect) => {
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器生命周期与页面一致，泄漏闭包保持存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                // 刚登录：从登录页跳回 redirect 记录的目标
                if route.should_redirect_when_authenticated() {
                    let target = route.post_login_target();
                    console_log!("[Router] Logged in, redirecting to {}.", target.to_path());
                    push_history_state(&target.to_path());
                    set_route.set(target);
                }
            } else if route.requires_auth() {
                // 刚注销：回到登录页
                let target = AppRoute::Login { redirect: None };
                console_log!("[Router] Logged out, redirecting to login.");
                push_history_state(&target.to_path());
                set_route.set(target);
            }
        });
    }
}

/// 提供路由服务到 Context 并完成初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件：根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
