use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::dashboard::DashboardStatsDto,
};

pub async fn get_stats() -> Result<DashboardStatsDto, ApiError> {
    let response = send_request(get("/api/dashboard/stats")).await?;
    parse_response(response).await
}
