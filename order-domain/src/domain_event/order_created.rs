use crate::eventing::Event;
use crate::order::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 订单已创建事件，载荷为已保存的订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    date_time: DateTime<Utc>,
    payload: Option<Order>,
}

impl OrderCreated {
    /// 事件的稳定名称（用于注册与路由）
    pub const NAME: &'static str = "OrderCreated";

    pub fn new() -> Self {
        Self {
            date_time: Utc::now(),
            payload: None,
        }
    }
}

impl Default for OrderCreated {
    fn default() -> Self {
        Self::new()
    }
}

impl Event for OrderCreated {
    type Payload = Order;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn date_time(&self) -> DateTime<Utc> {
        self.date_time
    }

    fn payload(&self) -> Option<&Order> {
        self.payload.as_ref()
    }

    fn set_payload(&mut self, payload: Order) {
        self.payload = Some(payload);
    }
}
