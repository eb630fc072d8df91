//! 路由定义与守卫决策 - 领域模型
//!
//! 纯逻辑层，不依赖 DOM 或 web_sys。路由自身声明是否需要认证；
//! `decide` 是导航守卫的决策函数，任何路由切换生效前先在这里得出
//! "放行"或"重定向"的唯一结论。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// 登录页；`redirect` 记录登录成功后要回到的路径
    Login { redirect: Option<String> },
    /// 工作台（需要认证）
    Dashboard,
    /// 用户管理（需要认证）
    Users,
    /// 页面未找到
    NotFound,
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::Login { redirect: None }
    }
}

impl AppRoute {
    /// 将 URL path（可含查询串）解析为路由
    pub fn from_path(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        match path {
            "/" | "/dashboard" => Self::Dashboard,
            "/login" => Self::Login {
                redirect: query.and_then(redirect_param),
            },
            "/users" => Self::Users,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login { redirect: None } => "/login".to_string(),
            Self::Login {
                redirect: Some(target),
            } => format!("/login?redirect={target}"),
            Self::Dashboard => "/".to_string(),
            Self::Users => "/users".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 守卫核心：该路由是否要求已认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Users)
    }

    /// 已认证用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login { .. })
    }

    /// 登录成功后的去向：优先回到 `redirect` 记录的目标
    ///
    /// 目标解析回登录页或 404 时退回工作台，避免自引用循环。
    pub fn post_login_target(&self) -> AppRoute {
        match self {
            Self::Login {
                redirect: Some(target),
            } => match AppRoute::from_path(target) {
                AppRoute::Login { .. } | AppRoute::NotFound => AppRoute::Dashboard,
                route => route,
            },
            _ => AppRoute::Dashboard,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 从查询串中取出 redirect 参数
fn redirect_param(query: &str) -> Option<String> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("redirect="))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 守卫决策：放行，或改道到另一条路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(AppRoute),
}

/// 导航守卫决策函数
///
/// - 目标需要认证而会话匿名：改道登录页，并把目标路径记入 redirect
/// - 已认证访问登录页：改道 redirect 记录的目标（缺省工作台）
/// - 其余情况放行
pub fn decide(target: &AppRoute, is_authenticated: bool) -> GuardDecision {
    if target.requires_auth() && !is_authenticated {
        return GuardDecision::Redirect(AppRoute::Login {
            redirect: Some(target.to_path()),
        });
    }
    if target.should_redirect_when_authenticated() && is_authenticated {
        return GuardDecision::Redirect(target.post_login_target());
    }
    GuardDecision::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/users"), AppRoute::Users);
        assert_eq!(
            AppRoute::from_path("/login"),
            AppRoute::Login { redirect: None }
        );
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn login_redirect_query_round_trips() {
        let route = AppRoute::from_path("/login?redirect=/users");
        assert_eq!(
            route,
            AppRoute::Login {
                redirect: Some("/users".to_string())
            }
        );
        assert_eq!(route.to_path(), "/login?redirect=/users");
    }

    #[test]
    fn redirect_param_skips_unrelated_pairs() {
        assert_eq!(
            AppRoute::from_path("/login?foo=1&redirect=/users"),
            AppRoute::Login {
                redirect: Some("/users".to_string())
            }
        );
        // 空值等同于缺失
        assert_eq!(
            AppRoute::from_path("/login?redirect="),
            AppRoute::Login { redirect: None }
        );
    }

    #[test]
    fn guard_blocks_anonymous_access_to_protected_routes() {
        assert_eq!(
            decide(&AppRoute::Users, false),
            GuardDecision::Redirect(AppRoute::Login {
                redirect: Some("/users".to_string())
            })
        );
        assert_eq!(
            decide(&AppRoute::Dashboard, false),
            GuardDecision::Redirect(AppRoute::Login {
                redirect: Some("/".to_string())
            })
        );
    }

    #[test]
    fn guard_allows_authenticated_access() {
        assert_eq!(decide(&AppRoute::Users, true), GuardDecision::Proceed);
        assert_eq!(decide(&AppRoute::Dashboard, true), GuardDecision::Proceed);
    }

    #[test]
    fn guard_allows_anonymous_public_routes() {
        assert_eq!(
            decide(&AppRoute::Login { redirect: None }, false),
            GuardDecision::Proceed
        );
        assert_eq!(decide(&AppRoute::NotFound, false), GuardDecision::Proceed);
        assert_eq!(decide(&AppRoute::NotFound, true), GuardDecision::Proceed);
    }

    #[test]
    fn authenticated_login_visit_redirects_to_recorded_target() {
        assert_eq!(
            decide(
                &AppRoute::Login {
                    redirect: Some("/users".to_string())
                },
                true
            ),
            GuardDecision::Redirect(AppRoute::Users)
        );
        assert_eq!(
            decide(&AppRoute::Login { redirect: None }, true),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn post_login_target_never_points_back_at_login() {
        let route = AppRoute::Login {
            redirect: Some("/login".to_string()),
        };
        assert_eq!(route.post_login_target(), AppRoute::Dashboard);

        let route = AppRoute::Login {
            redirect: Some("/broken".to_string()),
        };
        assert_eq!(route.post_login_target(), AppRoute::Dashboard);
    }

    #[test]
    fn intended_destination_survives_the_full_redirect_cycle() {
        // 匿名访问受保护路径 -> 带 redirect 的登录路由
        let decision = decide(&AppRoute::Users, false);
        let GuardDecision::Redirect(login) = decision else {
            panic!("anonymous navigation should be redirected");
        };
        assert_eq!(login.to_path(), "/login?redirect=/users");

        // 地址栏往返一次后仍能恢复目标
        let reparsed = AppRoute::from_path(&login.to_path());
        assert_eq!(reparsed.post_login_target(), AppRoute::Users);
    }
}
