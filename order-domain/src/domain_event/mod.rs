//! 领域事件（Domain Event）
//!
//! 订单上下文中的具体事件，实现 [`Event`](crate::eventing::Event) 以便经由分发器投递。

mod order_created;

pub use order_created::OrderCreated;
