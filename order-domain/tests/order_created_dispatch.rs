use async_trait::async_trait;
use order_domain::entity::Entity;
use order_domain::error::DomainError;
use order_domain::eventing::{
    DispatcherConfig, Event, EventDispatcher, EventHandler, InMemoryEventDispatcher,
};
use order_domain::repository::{InMemoryOrderRepository, OrderRepository};
use order_domain::{Order, OrderCreated};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct AuditLog {
    entries: Mutex<Vec<String>>,
}

#[async_trait]
impl EventHandler<OrderCreated> for AuditLog {
    fn handler_name(&self) -> &str {
        "audit"
    }

    async fn handle(&self, event: &OrderCreated) -> anyhow::Result<()> {
        let order = event
            .payload()
            .ok_or_else(|| anyhow::anyhow!("order payload missing"))?;
        self.entries
            .lock()
            .unwrap()
            .push(format!("{}:{}:{}", event.name(), order.id(), order.final_price()));
        Ok(())
    }
}

#[derive(Default)]
struct Counter {
    hits: AtomicUsize,
}

#[async_trait]
impl EventHandler<OrderCreated> for Counter {
    fn handler_name(&self) -> &str {
        "counter"
    }

    async fn handle(&self, _event: &OrderCreated) -> anyhow::Result<()> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn priced(id: &str, price: f64, tax: f64) -> Order {
    let mut order = Order::new(id, price, tax).unwrap();
    order.calculate_final_price();
    order
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn saved_orders_flow_to_registered_handlers() {
    let repo = InMemoryOrderRepository::new();
    let dispatcher = InMemoryEventDispatcher::<OrderCreated>::with_config(DispatcherConfig {
        handler_concurrency: 4,
    });
    let audit = Arc::new(AuditLog::default());
    let counter = Arc::new(Counter::default());
    let counter_dyn: Arc<dyn EventHandler<OrderCreated>> = counter.clone();

    dispatcher.register(OrderCreated::NAME, audit.clone()).unwrap();
    dispatcher
        .register(OrderCreated::NAME, counter_dyn.clone())
        .unwrap();

    for (id, price, tax) in [("o-1", 10.0, 1.0), ("o-2", 20.0, 2.0)] {
        let order = priced(id, price, tax);
        repo.save(&order).await.unwrap();

        let mut event = OrderCreated::new();
        event.set_payload(order);
        dispatcher.dispatch(&event).await.unwrap();
    }

    // 移除计数器后只剩审计处理器
    dispatcher.remove(OrderCreated::NAME, &counter_dyn).unwrap();
    let mut event = OrderCreated::new();
    event.set_payload(priced("o-3", 30.0, 3.0));
    dispatcher.dispatch(&event).await.unwrap();

    assert_eq!(repo.len(), 2);
    assert_eq!(counter.hits.load(Ordering::SeqCst), 2);
    assert_eq!(
        *audit.entries.lock().unwrap(),
        vec![
            "OrderCreated:o-1:11".to_string(),
            "OrderCreated:o-2:22".to_string(),
            "OrderCreated:o-3:33".to_string(),
        ]
    );
}

#[tokio::test]
async fn event_without_payload_fails_in_handler() {
    let dispatcher = InMemoryEventDispatcher::<OrderCreated>::new();
    dispatcher
        .register(OrderCreated::NAME, Arc::new(AuditLog::default()))
        .unwrap();

    let err = dispatcher
        .dispatch(&OrderCreated::new())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::EventHandler {
            handler: "audit".into(),
            reason: "order payload missing".into(),
        }
    );
}

#[tokio::test]
async fn shared_dispatcher_behind_arc_keeps_registrations() {
    let dispatcher = Arc::new(InMemoryEventDispatcher::<OrderCreated>::new());
    let counter = Arc::new(Counter::default());
    let counter_dyn: Arc<dyn EventHandler<OrderCreated>> = counter.clone();

    let clone = dispatcher.clone();
    clone.register(OrderCreated::NAME, counter_dyn.clone()).unwrap();
    assert!(dispatcher.has(OrderCreated::NAME, &counter_dyn));

    let mut event = OrderCreated::new();
    event.set_payload(priced("o-9", 1.0, 0.0));
    dispatcher.dispatch(&event).await.unwrap();
    assert_eq!(counter.hits.load(Ordering::SeqCst), 1);

    clone.clear();
    assert!(!dispatcher.has(OrderCreated::NAME, &counter_dyn));
}
