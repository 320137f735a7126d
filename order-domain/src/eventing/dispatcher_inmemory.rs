//! 内存版事件分发器（InMemoryEventDispatcher）
//!
//! 基于 `DashMap` 的进程内分发器，满足 `EventDispatcher` 协议：
//! - `register`：同名下以 `Arc::ptr_eq` 判断是否重复；
//! - `dispatch`：同名事件的全部处理器并发执行（受 `handler_concurrency` 限制），
//!   全部完成后按注册顺序返回第一个失败；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 注意：分发前会复制处理器列表，不会在 `.await` 期间持有注册表的锁。

use crate::error::{DomainError, DomainResult as Result};
use crate::eventing::{Event, EventDispatcher, EventHandler};
use async_trait::async_trait;
use dashmap::DashMap;
use futures_util::{StreamExt, stream};
use std::sync::Arc;

/// 分发器配置
#[derive(Clone, Copy, Debug)]
pub struct DispatcherConfig {
    /// 单个事件的处理并发（同一事件广播给多个 handler）
    pub handler_concurrency: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            handler_concurrency: 8,
        }
    }
}

/// 简单的内存事件分发器实现
pub struct InMemoryEventDispatcher<E>
where
    E: Event,
{
    handlers: DashMap<String, Vec<Arc<dyn EventHandler<E>>>>,
    config: DispatcherConfig,
}

impl<E> Default for InMemoryEventDispatcher<E>
where
    E: Event,
{
    fn default() -> Self {
        Self::with_config(DispatcherConfig::default())
    }
}

impl<E> InMemoryEventDispatcher<E>
where
    E: Event,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: DashMap::new(),
            config,
        }
    }

    /// 某事件名称下的处理器数量
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers
            .get(event_name)
            .map(|list| list.len())
            .unwrap_or(0)
    }

    /// 已注册的事件名称列表（只读视图）
    pub fn registered_events(&self) -> Vec<String> {
        self.handlers.iter().map(|e| e.key().clone()).collect()
    }
}

#[async_trait]
impl<E> EventDispatcher for InMemoryEventDispatcher<E>
where
    E: Event,
{
    type Event = E;

    fn register(&self, event_name: &str, handler: Arc<dyn EventHandler<E>>) -> Result<()> {
        // 先在分片锁内完成判重与写入，释放锁后再调用处理器自身的方法
        let duplicated = {
            let mut list = self.handlers.entry(event_name.to_string()).or_default();
            if list.iter().any(|h| Arc::ptr_eq(h, &handler)) {
                true
            } else {
                list.push(handler.clone());
                false
            }
        };

        let handler_name = handler.handler_name();
        if duplicated {
            return Err(DomainError::HandlerAlreadyRegistered {
                event: event_name.to_string(),
                handler: handler_name.to_string(),
            });
        }

        tracing::debug!(
            event = event_name,
            handler = handler_name,
            "event handler registered"
        );
        Ok(())
    }

    async fn dispatch(&self, event: &E) -> Result<()> {
        let Some(handlers) = self.handlers.get(event.name()).map(|h| h.value().clone()) else {
            tracing::debug!(event = event.name(), "no handlers registered, skipping");
            return Ok(());
        };

        // 先构造全部 future 再交给 buffered：保持注册顺序输出，同时最多并发执行 handler_concurrency 个
        let pending: Vec<_> = handlers.iter().map(|h| h.handle(event)).collect();
        let outcomes: Vec<anyhow::Result<()>> = stream::iter(pending)
            .buffered(self.config.handler_concurrency.max(1))
            .collect()
            .await;

        let mut first_failure = None;
        for (h, outcome) in handlers.iter().zip(outcomes) {
            if let Err(err) = outcome {
                tracing::warn!(
                    event = event.name(),
                    handler = h.handler_name(),
                    error = %err,
                    "event handler failed"
                );
                first_failure.get_or_insert_with(|| DomainError::EventHandler {
                    handler: h.handler_name().to_string(),
                    reason: err.to_string(),
                });
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn remove(&self, event_name: &str, handler: &Arc<dyn EventHandler<E>>) -> Result<()> {
        let emptied = match self.handlers.get_mut(event_name) {
            Some(mut list) => {
                list.retain(|h| !Arc::ptr_eq(h, handler));
                list.is_empty()
            }
            None => false,
        };

        if emptied {
            self.handlers.remove_if(event_name, |_, list| list.is_empty());
        }
        Ok(())
    }

    fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler<E>>) -> bool {
        self.handlers
            .get(event_name)
            .is_some_and(|list| list.iter().any(|h| Arc::ptr_eq(h, handler)))
    }

    fn clear(&self) {
        self.handlers.clear();
    }
}
