//! 订单应用层（order-application）
//!
//! 编排领域对象完成用例：输入 DTO → 领域实体 → 仓储持久化 → 事件分发 → 输出 DTO。
//!
pub mod create_order;
pub mod dto;
pub mod error;
pub mod use_case;

pub use create_order::CreateOrderUseCase;
pub use dto::{OrderInputDto, OrderOutputDto};
