//! 订单仓储（OrderRepository）
//!
//! 仅定义持久化单个订单的能力，具体存储后端由基础设施层实现并注入。
//!
use crate::error::DomainResult;
use crate::order::Order;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(feature = "inmemory")]
mod inmemory;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryOrderRepository;

/// 订单仓储：保存一个订单
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &Order) -> DomainResult<()>;
}

#[async_trait]
impl<T> OrderRepository for Arc<T>
where
    T: OrderRepository + ?Sized,
{
    async fn save(&self, order: &Order) -> DomainResult<()> {
        (**self).save(order).await
    }
}
