//! 领域层统一错误定义
//!
//! 聚焦实体校验、仓储与事件分发的最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // --- 实体校验 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },

    // --- 事件系统 ---
    #[error("event dispatch error: {reason}")]
    EventDispatch { reason: String },
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("handler already registered: event={event}, handler={handler}")]
    HandlerAlreadyRegistered { event: String, handler: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    pub fn event_dispatch(reason: impl Into<String>) -> Self {
        Self::EventDispatch {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
