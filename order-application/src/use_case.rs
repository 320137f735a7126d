//! 应用用例（Use Case）
//!
//! 以纯接口方式定义一次请求/响应式的应用操作：输入、输出与错误类型。
//!
use async_trait::async_trait;

/// 应用用例：接收输入 DTO，返回输出 DTO
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
