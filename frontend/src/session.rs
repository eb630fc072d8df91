//! 会话生命周期管理
//!
//! 会话是显式的上下文对象：在应用根部构造、从持久化存储水合、
//! 经 Context 注入路由守卫与页面组件，注销时显式清空，不做
//! 模块级单例。认证状态只看内存中 token 是否存在——不做过期
//! 判断，也不做服务端校验。

use leptos::prelude::*;

use caredesk_shared::models::UserProfile;
use caredesk_shared::protocol::{LoginPayload, LoginRequest};
use caredesk_shared::response::ApiResult;

use crate::api::AuthApi;
use crate::console_warn;
use crate::web::SessionStore;

/// 会话状态
///
/// token 与档案各自独立持有；mock 层的档案接口不校验 token，
/// 档案存在并不意味着 token 存在。
#[derive(Clone, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// 会话上下文，通过 Context 在组件间共享
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建空会话（匿名态）
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 从持久化存储水合：token 存在即视为已认证
    pub fn hydrate<S: SessionStore>(&self, store: &S) {
        let token = store.token();
        let profile = store.user_info();
        self.set_state.update(|state| {
            state.token = token;
            state.profile = profile;
        });
    }

    /// 认证状态信号（注入路由服务用，实现解耦）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 登录
///
/// 成功时先落盘再更新内存状态，返回前状态已可见，随后的守卫
/// 求值不会读到旧值；失败原样向上传播，不改变任何状态。
pub async fn login<S: SessionStore, A: AuthApi>(
    ctx: &SessionContext,
    store: &S,
    api: &A,
    req: LoginRequest,
) -> ApiResult<LoginPayload> {
    let payload = api.login(req).await?;

    store.set_token(&payload.token);
    store.set_user_info(&payload.user_info);

    ctx.set_state.update(|state| {
        state.token = Some(payload.token.clone());
        state.profile = Some(payload.user_info.clone());
    });

    Ok(payload)
}

/// 拉取并整体替换用户档案；不改变认证状态本身
pub async fn fetch_profile<S: SessionStore, A: AuthApi>(
    ctx: &SessionContext,
    store: &S,
    api: &A,
) -> ApiResult<UserProfile> {
    let profile = api.fetch_profile().await?;

    store.set_user_info(&profile);
    ctx.set_state.update(|state| {
        state.profile = Some(profile.clone());
    });

    Ok(profile)
}

/// 注销
///
/// 注销接口的结果只记日志：无论成败，本地内存与持久化一律清空，
/// 客户端不会在一次注销尝试之后卡在"已认证"。
pub async fn logout<S: SessionStore, A: AuthApi>(ctx: &SessionContext, store: &S, api: &A) {
    if let Err(e) = api.logout().await {
        console_warn!("[Session] 注销接口调用失败，仍清空本地状态: {}", e);
    }

    store.remove_token();
    store.remove_user_info();
    ctx.set_state.set(SessionState::default());
}
