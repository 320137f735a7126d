use async_trait::async_trait;
use order_application::use_case::UseCase;
use order_application::{CreateOrderUseCase, OrderInputDto};
use order_domain::OrderCreated;
use order_domain::entity::Entity;
use order_domain::eventing::{Event, EventDispatcher, EventHandler, InMemoryEventDispatcher};
use order_domain::repository::InMemoryOrderRepository;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 打印订单已创建事件（代替消息队列发布）
struct OrderCreatedLogger;

#[async_trait]
impl EventHandler<OrderCreated> for OrderCreatedLogger {
    fn handler_name(&self) -> &str {
        "order-created-logger"
    }

    async fn handle(&self, event: &OrderCreated) -> anyhow::Result<()> {
        let order = event
            .payload()
            .ok_or_else(|| anyhow::anyhow!("order payload missing"))?;
        tracing::info!(
            event = event.name(),
            at = %event.date_time(),
            order_id = %order.id(),
            final_price = order.final_price(),
            "order created"
        );
        Ok(())
    }
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("demo=info,order_application=debug,order_domain=debug")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let repo = InMemoryOrderRepository::new();
    let dispatcher = Arc::new(InMemoryEventDispatcher::<OrderCreated>::new());
    dispatcher.register(OrderCreated::NAME, Arc::new(OrderCreatedLogger))?;

    let create_order = CreateOrderUseCase::builder()
        .order_repository(repo.clone())
        .order_created(OrderCreated::new())
        .event_dispatcher(dispatcher.clone())
        .build();

    // 下单
    for (price, tax) in [(100.0, 10.0), (59.9, 5.99)] {
        let input = OrderInputDto {
            id: ulid::Ulid::new().to_string(),
            price,
            tax,
        };
        let output = create_order.execute(input).await?;
        println!("created: {}", serde_json::to_string(&output)?);
    }

    // 非法输入 -> 返回校验错误，不保存也不分发
    let rejected = create_order
        .execute(OrderInputDto {
            id: "bad-1".into(),
            price: -1.0,
            tax: 1.0,
        })
        .await;
    match rejected {
        Ok(out) => anyhow::bail!("invalid order unexpectedly accepted: {}", out.id),
        Err(err) => eprintln!("rejected as expected: {err}"),
    }

    println!("orders stored: {}", repo.len());
    Ok(())
}
