//! 创建订单用例（CreateOrderUseCase）
//!
//! 标准流程：构建并校验订单 → 计算最终价格 → 仓储保存 → 以订单为载荷分发事件 → 返回输出 DTO。
//!
//! - 保存失败时直接返回错误，不分发事件；
//! - 保存成功但分发失败时，订单已持久化，调用方仍收到错误（无补偿动作）；
//! - 注入的事件实例作为原型，每次执行克隆一份再设置载荷，原型本身不被修改。
//!
use crate::dto::{OrderInputDto, OrderOutputDto};
use crate::error::AppError;
use crate::use_case::UseCase;
use async_trait::async_trait;
use bon::Builder;
use order_domain::Order;
use order_domain::eventing::{Event, EventDispatcher};
use order_domain::repository::OrderRepository;
use tracing::Instrument;

/// 面向接口层的创建订单用例。
///
/// - `R`：订单仓储（实现 `OrderRepository`）
/// - `E`：订单已创建事件（实现 `Event<Payload = Order>`）
/// - `D`：事件分发器（实现 `EventDispatcher<Event = E>`）
#[derive(Builder)]
pub struct CreateOrderUseCase<R, E, D> {
    order_repository: R,
    order_created: E,
    event_dispatcher: D,
}

impl<R, E, D> CreateOrderUseCase<R, E, D>
where
    R: OrderRepository,
    E: Event<Payload = Order>,
    D: EventDispatcher<Event = E>,
{
    pub fn new(order_repository: R, order_created: E, event_dispatcher: D) -> Self {
        Self {
            order_repository,
            order_created,
            event_dispatcher,
        }
    }

    async fn run(&self, input: OrderInputDto) -> Result<OrderOutputDto, AppError> {
        let mut order = Order::new(input.id, input.price, input.tax)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected order input"))?;
        order.calculate_final_price();

        self.order_repository
            .save(&order)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to save order"))?;
        tracing::debug!(final_price = order.final_price(), "order saved");

        let mut event = self.order_created.clone();
        event.set_payload(order.clone());
        self.event_dispatcher
            .dispatch(&event)
            .await
            .inspect_err(|err| {
                tracing::warn!(event = event.name(), error = %err, "failed to dispatch event")
            })?;
        tracing::debug!(event = event.name(), "event dispatched");

        Ok(OrderOutputDto::from(&order))
    }
}

#[async_trait]
impl<R, E, D> UseCase for CreateOrderUseCase<R, E, D>
where
    R: OrderRepository,
    E: Event<Payload = Order>,
    D: EventDispatcher<Event = E>,
{
    type Input = OrderInputDto;
    type Output = OrderOutputDto;
    type Error = AppError;

    async fn execute(&self, input: OrderInputDto) -> Result<OrderOutputDto, AppError> {
        let span = tracing::info_span!("create_order", order_id = %input.id);
        self.run(input).instrument(span).await
    }
}
