pub mod badge_service;
pub mod dashboard_service;
pub mod insight_service;

pub use badge_service::BadgeService;
pub use dashboard_service::{Dashboard, DashboardService};
pub use insight_service::{InsightRules, InsightService};

use crate::errors::{DataError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
