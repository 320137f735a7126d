use order_domain::Order;
use order_domain::entity::Entity;
use serde::{Deserialize, Serialize};

/// 数据传输对象（DTO）
///
/// - 作为应用层的输入/输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

/// 创建订单的输入，不包含派生数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInputDto {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

/// 订单的输出投影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutputDto {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl Dto for OrderInputDto {}
impl Dto for OrderOutputDto {}

impl From<&Order> for OrderOutputDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().clone(),
            price: order.price(),
            tax: order.tax(),
            final_price: order.final_price(),
        }
    }
}
