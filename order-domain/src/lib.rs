//! 订单领域层（order-domain）
//!
//! 提供“创建订单”用例所依赖的领域模型与能力接口：
//! - 订单实体（`order`）及派生字段（最终价格）的计算与校验
//! - 订单仓储接口（`repository`）
//! - 事件系统（`eventing`）：事件、处理器与按名称分发的事件分发器
//! - 具体领域事件（`domain_event`），如 `OrderCreated`
//!
//! 本 crate 仅定义领域层接口与最小必要的错误类型；开启 `inmemory` 特性时
//! 额外提供内存版分发器与仓储，用于测试、示例与本地开发。
//!
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod eventing;
pub mod order;
pub mod repository;

pub use domain_event::OrderCreated;
pub use order::Order;
