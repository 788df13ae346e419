use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::order::{CheckoutDto, CreateOrderDto, OrderDto, VerifyPaymentDto},
};

pub async fn create_order(listing_id: i32) -> Result<CheckoutDto, ApiError> {
    let body = serialize_json(&CreateOrderDto { listing_id })?;
    let response = send_request(post("/api/payment/order").body(body)).await?;
    parse_response(response).await
}

pub async fn verify_payment(payload: VerifyPaymentDto) -> Result<OrderDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/payment/verify").body(body)).await?;
    parse_response(response).await
}

pub async fn cancel_order(id: i32) -> Result<OrderDto, ApiError> {
    let url = format!("/api/payment/cancel/{}", id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn get_orders() -> Result<Vec<OrderDto>, ApiError> {
    let response = send_request(get("/api/payment/orders")).await?;
    parse_response(response).await
}

pub async fn delete_order(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/payment/orders/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Result reported by the gateway's checkout widget.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CheckoutOutcome {
    Paid(VerifyPaymentDto),
    Failed { error: String },
}

const CHECKOUT_SCRIPT: &str = r#"
const options = await dioxus.recv();
const load = () => new Promise((resolve, reject) => {
    if (window.Razorpay) return resolve();
    const script = document.createElement("script");
    script.src = "https://checkout.razorpay.com/v1/checkout.js";
    script.onload = resolve;
    script.onerror = () => reject(new Error("Could not load the payment widget"));
    document.head.appendChild(script);
});
try {
    await load();
    const checkout = new window.Razorpay({
        ...options,
        handler: (res) => dioxus.send({
            order_id: res.razorpay_order_id,
            payment_id: res.razorpay_payment_id,
            signature: res.razorpay_signature,
        }),
        modal: { ondismiss: () => dioxus.send(null) },
    });
    checkout.on("payment.failed", (res) => dioxus.send({ error: res.error.description }));
    checkout.open();
} catch (e) {
    dioxus.send({ error: String(e) });
}
"#;

/// Opens the gateway's checkout widget for a created order.
///
/// # Returns
/// - `Ok(Some(VerifyPaymentDto))` - Payment completed; pass it to [`verify_payment`]
/// - `Ok(None)` - The buyer closed the widget without paying
/// - `Err(ApiError)` - The widget failed to load or the payment failed
pub async fn open_checkout(
    checkout: &CheckoutDto,
    description: &str,
    buyer_name: &str,
    buyer_email: &str,
) -> Result<Option<VerifyPaymentDto>, ApiError> {
    use dioxus::prelude::document;

    let script_error = |e: String| ApiError {
        status: 500,
        message: format!("Checkout failed: {}", e),
    };

    let mut eval = document::eval(CHECKOUT_SCRIPT);
    eval.send(serde_json::json!({
        "key": checkout.key_id,
        "amount": checkout.order.amount,
        "currency": checkout.order.currency,
        "name": "OasisSpace",
        "description": description,
        "order_id": checkout.order.gateway_order_id,
        "prefill": { "name": buyer_name, "email": buyer_email },
    }))
    .map_err(|e| script_error(e.to_string()))?;

    match eval
        .recv::<Option<CheckoutOutcome>>()
        .await
        .map_err(|e| script_error(e.to_string()))?
    {
        Some(CheckoutOutcome::Paid(payment)) => Ok(Some(payment)),
        Some(CheckoutOutcome::Failed { error }) => Err(ApiError {
            status: 402,
            message: error,
        }),
        None => Ok(None),
    }
}
