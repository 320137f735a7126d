//! 事件处理器（EventHandler）
//!
//! 定义消费某类事件的处理逻辑与元信息（名称）。
//!
use super::Event;
use async_trait::async_trait;

/// 事件处理器：处理某一类型的事件
#[async_trait]
pub trait EventHandler<E>: Send + Sync
where
    E: Event,
{
    /// 处理器名称（用于失败标记与日志）
    fn handler_name(&self) -> &str;
    /// 处理事件
    async fn handle(&self, event: &E) -> anyhow::Result<()>;
}
