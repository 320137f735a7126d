//! 事件分发器（EventDispatcher）协议
//!
//! 以事件名称为键维护处理器注册表。处理器以实例身份（同一个 `Arc`）区分，
//! 同一实例可注册到多个事件名称下。
//!
use super::{Event, EventHandler};
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 事件分发器：注册处理器并按事件名称分发
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// 该分发器承载的事件类型
    type Event: Event;

    /// 注册处理器；同一实例重复注册到同一名称时返回错误
    fn register(
        &self,
        event_name: &str,
        handler: Arc<dyn EventHandler<Self::Event>>,
    ) -> Result<()>;

    /// 将事件分发给其名称下的全部处理器
    async fn dispatch(&self, event: &Self::Event) -> Result<()>;

    /// 移除处理器；不存在时同样视为成功
    fn remove(&self, event_name: &str, handler: &Arc<dyn EventHandler<Self::Event>>)
    -> Result<()>;

    /// 处理器是否已注册到该名称下
    fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler<Self::Event>>) -> bool;

    /// 清空全部注册
    fn clear(&self);
}

#[async_trait]
impl<T> EventDispatcher for Arc<T>
where
    T: EventDispatcher + ?Sized,
{
    type Event = T::Event;

    fn register(
        &self,
        event_name: &str,
        handler: Arc<dyn EventHandler<Self::Event>>,
    ) -> Result<()> {
        (**self).register(event_name, handler)
    }

    async fn dispatch(&self, event: &Self::Event) -> Result<()> {
        (**self).dispatch(event).await
    }

    fn remove(
        &self,
        event_name: &str,
        handler: &Arc<dyn EventHandler<Self::Event>>,
    ) -> Result<()> {
        (**self).remove(event_name, handler)
    }

    fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler<Self::Event>>) -> bool {
        (**self).has(event_name, handler)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
