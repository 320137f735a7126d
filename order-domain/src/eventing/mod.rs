//! 事件子系统（eventing）
//!
//! 提供按事件名称进行发布/处理的基础抽象：
//! - `Event`：事件信封，携带名称、发生时间与可替换的载荷；
//! - `EventHandler`：对某类事件进行消费处理；
//! - `EventDispatcher`：按事件名称注册/分发/移除/检查/清空处理器；
//! - `InMemoryEventDispatcher`（`inmemory` 特性）：进程内实现，并发执行同名事件的全部处理器。
//!
//! 该模块仅定义协议与进程内实现，不绑定具体消息中间件。
//!
pub mod dispatcher;
#[cfg(feature = "inmemory")]
pub mod dispatcher_inmemory;
pub mod event;
pub mod handler;

pub use dispatcher::EventDispatcher;
#[cfg(feature = "inmemory")]
pub use dispatcher_inmemory::{DispatcherConfig, InMemoryEventDispatcher};
pub use event::Event;
pub use handler::EventHandler;
