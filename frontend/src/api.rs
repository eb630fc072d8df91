//! API 客户端
//!
//! 对页面暴露按端点的类型化方法；内部把请求整形为 `MockRequest`，
//! 派发进进程内 mock 服务，并把响应信封解码为 `ApiResult<T>`。
//! 真实网络传输是非目标：请求从不离开进程。

use std::rc::Rc;

use async_trait::async_trait;
use caredesk_shared::models::{DashboardStats, UserProfile};
use caredesk_shared::protocol::{
    ApiRequest, DeleteUserRequest, LoginPayload, LoginRequest, LogoutRequest, ProfileRequest,
    StatisticsRequest, UpdateUserRequest, UserListPayload, UserListRequest,
};
use caredesk_shared::response::{ApiError, ApiResult, code};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::mock::{MockBackend, MockRequest};

/// 认证相关端点的抽象；会话层只依赖这个 trait
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, req: LoginRequest) -> ApiResult<LoginPayload>;
    async fn fetch_profile(&self) -> ApiResult<UserProfile>;
    async fn logout(&self) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct ApiClient {
    backend: Rc<MockBackend>,
}

impl ApiClient {
    pub fn new(backend: Rc<MockBackend>) -> Self {
        Self { backend }
    }

    fn send<T: DeserializeOwned>(&self, req: MockRequest) -> ApiResult<T> {
        self.backend.handle(req).into_result()
    }

    /// 分页用户列表；参数按查询串传输，由 mock 服务做数字强转
    pub async fn user_list(&self, req: &UserListRequest) -> ApiResult<UserListPayload> {
        let mut request = MockRequest::new(UserListRequest::METHOD, UserListRequest::PATH);
        if let Some(page) = req.page {
            request = request.with_query("page", page);
        }
        if let Some(page_size) = req.page_size {
            request = request.with_query("pageSize", page_size);
        }
        self.send(request)
    }

    /// 更新用户；mock 服务原样回显提交的内容
    pub async fn update_user(&self, req: &UpdateUserRequest) -> ApiResult<Value> {
        let request = MockRequest::new(UpdateUserRequest::METHOD, UpdateUserRequest::PATH)
            .with_body(req.0.clone());
        self.send(request)
    }

    pub async fn delete_user(&self, id: u64) -> ApiResult<()> {
        let req = DeleteUserRequest { id };
        self.send(MockRequest::new(DeleteUserRequest::METHOD, req.path()))
    }

    pub async fn statistics(&self) -> ApiResult<DashboardStats> {
        self.send(MockRequest::new(
            StatisticsRequest::METHOD,
            StatisticsRequest::PATH,
        ))
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, req: LoginRequest) -> ApiResult<LoginPayload> {
        let request =
            MockRequest::new(LoginRequest::METHOD, LoginRequest::PATH).with_body(to_body(&req)?);
        self.send(request)
    }

    async fn fetch_profile(&self) -> ApiResult<UserProfile> {
        self.send(MockRequest::new(ProfileRequest::METHOD, ProfileRequest::PATH))
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(MockRequest::new(LogoutRequest::METHOD, LogoutRequest::PATH))
    }
}

fn to_body<T: Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::new(code::INTERNAL, format!("请求序列化失败: {e}")))
}
