use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::dto::vessel_order_dto::{
    CalculateRequest, CalculateResponse, ClientGroupDto, ReportQuery, ReportResponse, VesselGroupDto,
};
use crate::dto::ApiResponse;
use crate::models::Entity;
use crate::services::duty_calculator::{calculate_duty_days, with_live_figures, BillingAmounts};
use crate::services::duty_report::{self, DutyFilter};
use crate::state::AppState;
use crate::utils::dates::parse_date;

pub fn create_vessel_order_router() -> Router<AppState> {
    Router::new()
        .route("/api/vessel-orders/report", get(report))
        .route("/api/vessel-orders/calculate", post(calculate))
}

async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<ApiResponse<ReportResponse>> {
    let dispatch = state.facade.list(Entity::VesselOrders).await;
    let source = dispatch.source.as_str().to_string();

    if !dispatch.response.success {
        return Json(ApiResponse::error(
            dispatch
                .response
                .message
                .unwrap_or_else(|| "Error loading orders".to_string()),
        ));
    }

    let now = state.clock.now();
    let filter = DutyFilter::from(query);
    let visible: Vec<_> = duty_report::filter(&dispatch.response.into_list(), &filter)
        .iter()
        .map(|order| with_live_figures(order, now))
        .collect();

    let groups = duty_report::group_by_client_and_vessel(&visible)
        .into_iter()
        .map(|group| ClientGroupDto {
            client: group.client,
            vessels: group
                .vessels
                .into_iter()
                .map(|v| VesselGroupDto {
                    vessel: v.vessel,
                    orders: v.orders,
                })
                .collect(),
        })
        .collect();

    Json(ApiResponse::success(ReportResponse {
        summary: duty_report::summarize(&visible),
        groups,
        source,
    }))
}

async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    let end_date = request.end_date.as_deref().and_then(parse_date);
    let duty_days = calculate_duty_days(
        request.start_date.as_deref().and_then(parse_date),
        request.start_shift.unwrap_or_default(),
        end_date,
        request.end_shift,
        state.clock.now(),
    );
    let amounts = BillingAmounts::new(duty_days, request.rate_per_day, request.conveyance);

    Json(CalculateResponse {
        duty_days: amounts.duty_days,
        revenue: amounts.revenue,
        total_amount: amounts.total_amount,
        ongoing: end_date.is_none(),
    })
}
