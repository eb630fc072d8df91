//! 用户管理页面
//!
//! 分页表格来自 `/api/user/list`。mock 层的数据集不可变：
//! 删除总是"成功"但不落库，更新以回显体作为行的新状态。

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use caredesk_shared::models::{UserRecord, UserStatus};
use caredesk_shared::protocol::{UpdateUserRequest, UserListPayload, UserListRequest};

use crate::api::ApiClient;
use crate::console_warn;
use crate::web::router::use_router;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn UsersPage() -> impl IntoView {
    let router = use_router();
    let api = expect_context::<ApiClient>();

    let (page, set_page) = signal(1u32);
    let (payload, set_payload) = signal(Option::<UserListPayload>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let load = {
        let api = api.clone();
        move |p: u32| {
            let api = api.clone();
            spawn_local(async move {
                let req = UserListRequest {
                    page: Some(p),
                    page_size: Some(PAGE_SIZE),
                };
                match api.user_list(&req).await {
                    Ok(data) => set_payload.set(Some(data)),
                    Err(e) => console_warn!("[Users] 加载用户列表失败: {}", e),
                }
            });
        }
    };

    // 页码变化时重新拉取（首次渲染也经由这里）
    Effect::new({
        let load = load.clone();
        move |_| load(page.get())
    });

    let on_delete = {
        let api = api.clone();
        let load = load.clone();
        move |id: u64| {
            let api = api.clone();
            let load = load.clone();
            spawn_local(async move {
                match api.delete_user(id).await {
                    Ok(()) => {
                        set_notice.set(Some(format!("用户 #{id} 已删除")));
                        set_timeout(move || set_notice.set(None), Duration::from_secs(3));
                        load(page.get_untracked());
                    }
                    Err(e) => console_warn!("[Users] 删除用户失败: {}", e),
                }
            });
        }
    };

    let on_toggle = {
        let api = api.clone();
        move |record: UserRecord| {
            let api = api.clone();
            spawn_local(async move {
                let mut updated = record;
                updated.status = match updated.status {
                    UserStatus::Active => UserStatus::Inactive,
                    UserStatus::Inactive => UserStatus::Active,
                };
                let body = match serde_json::to_value(&updated) {
                    Ok(v) => v,
                    Err(e) => {
                        console_warn!("[Users] 更新请求序列化失败: {}", e);
                        return;
                    }
                };
                match api.update_user(&UpdateUserRequest(body)).await {
                    // 回显体即新状态，直接替换本地行
                    Ok(echoed) => {
                        if let Ok(fresh) = serde_json::from_value::<UserRecord>(echoed) {
                            set_payload.update(|current| {
                                if let Some(p) = current {
                                    if let Some(slot) =
                                        p.list.iter_mut().find(|u| u.id == fresh.id)
                                    {
                                        *slot = fresh;
                                    }
                                }
                            });
                        }
                    }
                    Err(e) => console_warn!("[Users] 更新用户失败: {}", e),
                }
            });
        }
    };

    let on_back = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate("/");
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-6">
                <div class="flex-1 flex items-center gap-4">
                    <a href="/" class="btn btn-ghost btn-sm" on:click=on_back>
                        "← 返回工作台"
                    </a>
                    <span class="text-xl font-bold">"用户管理"</span>
                </div>
            </div>

            <div class="p-6">
                <Show when=move || notice.get().is_some()>
                    <div class="alert alert-success text-sm py-2 mb-4">
                        <span>{move || notice.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                {move || {
                    let on_delete = on_delete.clone();
                    let on_toggle = on_toggle.clone();
                    match payload.get() {
                        None => view! {
                            <div class="flex justify-center py-16">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                        .into_any(),
                        Some(p) => {
                            let total = p.total;
                            let current = p.page;
                            let total_pages = total.div_ceil(PAGE_SIZE as u64).max(1);
                            let next_disabled = current as u64 >= total_pages;
                            let rows = p
                                .list
                                .into_iter()
                                .map(|u| {
                                    let on_delete = on_delete.clone();
                                    let on_toggle = on_toggle.clone();
                                    let record = u.clone();
                                    let id = u.id;
                                    let status_class = match u.status {
                                        UserStatus::Active => "badge badge-success badge-sm",
                                        UserStatus::Inactive => "badge badge-ghost badge-sm",
                                    };
                                    let toggle_label = match u.status {
                                        UserStatus::Active => "停用",
                                        UserStatus::Inactive => "启用",
                                    };
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td><img src=u.avatar class="w-8 h-8 rounded-full" /></td>
                                            <td>{u.username}</td>
                                            <td>{u.email}</td>
                                            <td>{u.role.label()}</td>
                                            <td><span class=status_class>{u.status.label()}</span></td>
                                            <td>{u.create_time.format_display()}</td>
                                            <td>{u.last_login_time.format_display()}</td>
                                            <td class="flex gap-1">
                                                <button
                                                    class="btn btn-ghost btn-xs"
                                                    on:click=move |_| on_toggle(record.clone())
                                                >
                                                    {toggle_label}
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    "删除"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view();

                            view! {
                                <div class="card bg-base-100 shadow-sm">
                                    <div class="card-body p-0">
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th>"ID"</th>
                                                    <th>"头像"</th>
                                                    <th>"用户名"</th>
                                                    <th>"邮箱"</th>
                                                    <th>"角色"</th>
                                                    <th>"状态"</th>
                                                    <th>"注册时间"</th>
                                                    <th>"最近登录"</th>
                                                    <th>"操作"</th>
                                                </tr>
                                            </thead>
                                            <tbody>{rows}</tbody>
                                        </table>
                                        <div class="flex items-center justify-end gap-3 p-4">
                                            <button
                                                class="btn btn-sm"
                                                disabled=move || page.get() <= 1
                                                on:click=move |_| set_page.update(|v| if *v > 1 { *v -= 1 })
                                            >
                                                "上一页"
                                            </button>
                                            <span class="text-sm">
                                                {format!("第 {current} / {total_pages} 页，共 {total} 条")}
                                            </span>
                                            <button
                                                class="btn btn-sm"
                                                disabled=next_disabled
                                                on:click=move |_| set_page.update(|v| *v += 1)
                                            >
                                                "下一页"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}
