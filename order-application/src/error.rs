use order_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 领域层错误原样透出
    #[error(transparent)]
    Domain(#[from] DomainError),
}
