use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{CheckoutDto, CreateOrderDto, OrderDto, VerifyPaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Open a checkout for a listing.
///
/// Creates the order at the payment gateway and returns it with the public key the
/// checkout widget needs.
///
/// # Returns
/// - `201 Created` - Pending order and key id
/// - `400 Bad Request` - Listing unavailable or owned by the caller
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - Listing not found
/// - `502 Bad Gateway` - Gateway rejected the order
#[utoipa::path(
    post,
    path = "/api/payment/order",
    tag = PAYMENT_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = CheckoutDto),
        (status = 400, description = "Listing cannot be purchased", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 502, description = "Payment gateway failed", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let service = PaymentService::new(&state.db, &state.http_client, &state.config);
    let order = service.create_order(&user, payload.listing_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutDto {
            order: order.into_dto(),
            key_id: service.key_id().to_string(),
        }),
    ))
}

/// Verify a completed checkout.
///
/// # Returns
/// - `200 OK` - Order marked successful
/// - `400 Bad Request` - Order is not pending
/// - `401 Unauthorized` - Not signed in, or the signature does not match
/// - `403 Forbidden` - Order belongs to another user
/// - `404 Not Found` - Unknown order
#[utoipa::path(
    post,
    path = "/api/payment/verify",
    tag = PAYMENT_TAG,
    request_body = VerifyPaymentDto,
    responses(
        (status = 200, description = "Payment verified", body = OrderDto),
        (status = 400, description = "Order not pending", body = ErrorDto),
        (status = 401, description = "Invalid signature or not signed in", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<VerifyPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let order = PaymentService::new(&state.db, &state.http_client, &state.config)
        .verify(&user, payload)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Cancel one of the caller's pending orders.
#[utoipa::path(
    post,
    path = "/api/payment/cancel/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 400, description = "Order not pending", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let order = PaymentService::new(&state.db, &state.http_client, &state.config)
        .cancel(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/payment/orders",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Caller's orders, newest first", body = Vec<OrderDto>),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let orders = PaymentService::new(&state.db, &state.http_client, &state.config)
        .list(&user)
        .await?;
    let orders: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders)))
}

/// Delete one of the caller's orders.
#[utoipa::path(
    delete,
    path = "/api/payment/orders/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    PaymentService::new(&state.db, &state.http_client, &state.config)
        .delete(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Order has been deleted"))))
}
