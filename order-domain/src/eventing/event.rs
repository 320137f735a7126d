use chrono::{DateTime, Utc};

/// 事件信封需要满足的通用能力边界
///
/// 载荷以关联类型表达，每个具体事件决定自己携带的数据。
pub trait Event: Clone + Send + Sync + 'static {
    /// 事件载荷类型
    type Payload: Clone + Send + Sync;

    /// 事件名称（分发器据此路由到处理器）
    fn name(&self) -> &str;

    /// 事件发生时间
    fn date_time(&self) -> DateTime<Utc>;

    /// 当前载荷；尚未设置时为 `None`
    fn payload(&self) -> Option<&Self::Payload>;

    /// 替换载荷
    fn set_payload(&mut self, payload: Self::Payload);
}
