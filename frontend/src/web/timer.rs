//! 定时器封装模块
//!
//! `setInterval` 的 RAII 封装：`Interval` 被 drop 时自动清除定时器，
//! 页面离开后不会留下悬挂的回调。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 周期性定时器
pub struct Interval {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// 每隔 `millis` 毫秒触发一次 `callback`
    ///
    /// # Panics
    /// 无法获取 window 对象或设置定时器失败时 panic。
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("无法获取 window 对象");

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("设置定时器失败");

        Self { handle, closure }
    }

    /// 手动取消；通常交给 drop 处理
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
