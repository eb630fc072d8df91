//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
//! 以减小 WASM 二进制体积。路由与存储的纯逻辑部分不依赖 DOM，
//! 可以在原生目标下直接跑单元测试。

pub mod route;
pub mod router;
mod storage;
mod timer;

pub use storage::{BrowserStore, SessionStore};
pub use timer::Interval;
