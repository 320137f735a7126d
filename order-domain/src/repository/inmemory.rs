//! 内存版订单仓储（InMemoryOrderRepository）
//!
//! 以订单 id 为键覆盖写入，永不失败；用于测试、示例与本地开发。

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::order::Order;
use crate::repository::OrderRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<Mutex<HashMap<String, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.store().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    // 持锁期间不会 panic，中毒时直接沿用内部数据
    fn store(&self) -> std::sync::MutexGuard<'_, HashMap<String, Order>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> DomainResult<()> {
        self.store().insert(order.id().clone(), order.clone());
        tracing::debug!(order_id = %order.id(), "order stored in memory");
        Ok(())
    }
}
