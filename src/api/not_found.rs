use crate::error::DashboardError;

pub async fn not_found() -> DashboardError {
    DashboardError::NotFound
}
