//! 定时器封装模块

use localaudit::Delay;
use std::time::Duration;

/// 基于 `setTimeout` 的异步等待
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait::async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
