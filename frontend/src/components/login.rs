//! 登录页

use leptos::prelude::*;
use leptos::task::spawn_local;

use caredesk_shared::protocol::LoginRequest;

use super::icons::HeartPulse;
use crate::api::ApiClient;
use crate::session::{login, use_session};
use crate::web::BrowserStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = expect_context::<ApiClient>();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入用户名和密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let req = LoginRequest {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            match login(&session, &BrowserStore, &api, req).await {
                // 登录成功后路由服务监听到认证状态变化，
                // 自动跳回 redirect 记录的目标页面
                Ok(_) => {}
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <HeartPulse class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"CareDesk 管理后台"</h1>
                        <p class="text-base-content/70">"健康咨询服务统一管理入口"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="admin"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登 录".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-xs text-base-content/50 text-center mt-2">
                            "演示账号 admin / 123456"
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
