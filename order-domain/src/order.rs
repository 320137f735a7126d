//! 订单实体（Order）
//!
//! 持有标识与价格字段，并按需计算派生字段 `final_price = price + tax`。
//! 最终价格只能通过 [`Order::calculate_final_price`] 得出，不允许外部直接设置；
//! 反序列化同样经过 [`Order::new`] 校验，并忽略输入中的 `final_price`。
//!
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// 订单实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderFields")]
pub struct Order {
    id: String,
    price: f64,
    tax: f64,
    final_price: f64,
}

impl Order {
    /// 创建订单并执行校验；最终价格在调用 `calculate_final_price` 前为 0
    pub fn new(id: impl Into<String>, price: f64, tax: f64) -> DomainResult<Self> {
        let order = Self {
            id: id.into(),
            price,
            tax,
            final_price: 0.0,
        };
        order.validate()?;
        Ok(order)
    }

    /// 校验顺序：id → price → tax，返回第一个失败项
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid_value("invalid id"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::invalid_value("invalid price"));
        }
        if !self.tax.is_finite() || self.tax < 0.0 {
            return Err(DomainError::invalid_value("invalid tax"));
        }
        Ok(())
    }

    /// 计算最终价格（幂等）
    pub fn calculate_final_price(&mut self) {
        self.final_price = self.price + self.tax;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }
}

/// 反序列化时的原始字段，派生字段不参与
#[derive(Deserialize)]
struct OrderFields {
    id: String,
    price: f64,
    tax: f64,
}

impl TryFrom<OrderFields> for Order {
    type Error = DomainError;

    fn try_from(fields: OrderFields) -> DomainResult<Self> {
        let mut order = Order::new(fields.id, fields.price, fields.tax)?;
        order.calculate_final_price();
        Ok(order)
    }
}

impl Entity for Order {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_price_is_price_plus_tax() {
        let mut order = Order::new("123", 100.0, 10.0).unwrap();
        assert_eq!(order.final_price(), 0.0);

        order.calculate_final_price();
        assert_eq!(order.final_price(), 110.0);

        // 重复计算结果不变
        order.calculate_final_price();
        assert_eq!(order.final_price(), 110.0);
    }

    #[test]
    fn final_price_holds_for_a_range_of_inputs() {
        for (price, tax) in [(0.0, 0.0), (0.5, 0.0), (1.25, 0.25), (99.99, 7.5), (1e6, 1e5)] {
            let mut order = Order::new("o-1", price, tax).unwrap();
            order.calculate_final_price();
            assert_eq!(order.final_price(), price + tax);
        }
    }

    #[test]
    fn invalid_fields_should_error() {
        let err = Order::new("  ", 10.0, 1.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("invalid id"));

        let err = Order::new("o-1", -0.01, 1.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("invalid price"));

        let err = Order::new("o-1", f64::NAN, 1.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("invalid price"));

        let err = Order::new("o-1", 10.0, -1.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("invalid tax"));

        // id 优先于 price 报错
        let err = Order::new("", -1.0, -1.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_value("invalid id"));
    }

    #[test]
    fn serializes_all_fields() {
        let mut order = Order::new("o-9", 20.0, 2.0).unwrap();
        order.calculate_final_price();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "o-9");
        assert_eq!(json["final_price"], 22.0);
        assert_eq!(order.id(), "o-9");
    }

    #[test]
    fn deserialize_recomputes_final_price() {
        let order: Order =
            serde_json::from_str(r#"{"id":"o-5","price":40.0,"tax":4.0,"final_price":999.0}"#)
                .unwrap();
        assert_eq!(order.final_price(), 44.0);

        let order: Order = serde_json::from_str(r#"{"id":"o-6","price":3.0,"tax":0.5}"#).unwrap();
        assert_eq!(order.final_price(), 3.5);
    }

    #[test]
    fn deserialize_rejects_invalid_fields() {
        let err = serde_json::from_str::<Order>(
            r#"{"id":"","price":-5.0,"tax":1.0,"final_price":999.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid id"));

        let err =
            serde_json::from_str::<Order>(r#"{"id":"o-7","price":-5.0,"tax":1.0}"#).unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }

    #[test]
    fn serialize_then_deserialize_keeps_invariant() {
        let mut order = Order::new("o-8", 12.5, 2.5).unwrap();
        order.calculate_final_price();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
