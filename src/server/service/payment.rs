//! Razorpay checkout orders and payment signature verification.

use dioxus_logger::tracing;
use entity::{listing::ListingStatus, order::OrderStatus};
use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::{
    model::order::VerifyPaymentDto,
    server::{
        config::Config,
        data::{listing::ListingRepository, order::OrderRepository, user::UserRepository},
        error::{auth::AuthError, external::ExternalError, AppError},
        model::{
            listing::Listing,
            order::{CreateOrderParams, Order, ORDER_CURRENCY},
            user::User,
        },
        service::{
            mail::MailService,
            notification::{escape_html, NotificationService},
        },
    },
};

const PROVIDER: &str = "razorpay";

#[derive(Serialize)]
struct GatewayOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: String,
}

#[derive(Deserialize)]
struct GatewayOrderResponse {
    id: String,
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Opens a checkout for a listing.
    ///
    /// Creates an order at Razorpay for the listing's effective price and records it as
    /// pending.
    ///
    /// # Arguments
    /// - `actor` - Buyer
    /// - `listing_id` - Listing being paid for
    ///
    /// # Returns
    /// - `Ok(Order)` - Pending order carrying the gateway order id
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AppError::BadRequest)` - Listing is not available or belongs to the buyer
    /// - `Err(AppError::ExternalErr)` - Razorpay rejected the order
    pub async fn create_order(&self, actor: &User, listing_id: i32) -> Result<Order, AppError> {
        let Some(listing) = ListingRepository::new(self.db).find_by_id(listing_id).await? else {
            return Err(AppError::NotFound(format!(
                "Listing {} not found",
                listing_id
            )));
        };

        if listing.owner_id == actor.id {
            return Err(AppError::BadRequest(
                "Cannot pay for your own listing".to_string(),
            ));
        }
        if listing.status != ListingStatus::Available {
            return Err(AppError::BadRequest(format!(
                "Listing {} is no longer available",
                listing_id
            )));
        }

        let amount = listing
            .effective_price()
            .checked_mul(100)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Listing {} price is too large to charge", listing_id))
            })?;
        let request = GatewayOrderRequest {
            amount,
            currency: ORDER_CURRENCY,
            receipt: format!("listing_{}_user_{}", listing.id, actor.id),
        };

        let response = self
            .http_client
            .post(format!("{}/v1/orders", self.config.razorpay.api_url))
            .basic_auth(
                &self.config.razorpay.key_id,
                Some(&self.config.razorpay.key_secret),
            )
            .json(&request)
            .send()
            .await?;
        let response = ExternalError::check(PROVIDER, response).await?;
        let gateway_order = response.json::<GatewayOrderResponse>().await?;

        let order = OrderRepository::new(self.db)
            .create(CreateOrderParams {
                user_id: actor.id,
                listing_id: listing.id,
                amount,
                currency: ORDER_CURRENCY.to_string(),
                gateway_order_id: gateway_order.id,
            })
            .await?;

        Ok(order)
    }

    /// Public key id the checkout widget is opened with.
    pub fn key_id(&self) -> &str {
        &self.config.razorpay.key_id
    }

    /// Verifies the signature returned by the checkout and settles the order.
    ///
    /// A valid signature claims the listing (sold or rented), marks the order `success`,
    /// notifies the owner and emails the buyer. An invalid signature, or a listing that
    /// another buyer already claimed, marks the order `failed`.
    ///
    /// # Arguments
    /// - `actor` - Buyer who placed the order
    /// - `dto` - Gateway order id, payment id and signature
    ///
    /// # Returns
    /// - `Ok(Order)` - Successful order
    /// - `Err(AppError::NotFound)` - Unknown gateway order id
    /// - `Err(AuthError::AccessDenied)` - Order belongs to another user
    /// - `Err(AppError::BadRequest)` - Order is no longer pending
    /// - `Err(AuthError::InvalidPaymentSignature)` - Signature did not match
    /// - `Err(AppError::BadRequest)` - Listing was deleted or already sold or rented
    pub async fn verify(&self, actor: &User, dto: VerifyPaymentDto) -> Result<Order, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let Some(order) = order_repo.find_by_gateway_order_id(&dto.order_id).await? else {
            return Err(AppError::NotFound(format!(
                "Order {} not found",
                dto.order_id
            )));
        };
        if order.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Order {} belongs to another user", order.id),
            )
            .into());
        }
        if order.status != OrderStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Order {} is not pending",
                order.id
            )));
        }

        if !verify_signature(
            &self.config.razorpay.key_secret,
            &dto.order_id,
            &dto.payment_id,
            &dto.signature,
        ) {
            order_repo
                .set_status(order.id, OrderStatus::Failed, None)
                .await?;

            return Err(AuthError::InvalidPaymentSignature(dto.order_id).into());
        }

        let listing_repo = ListingRepository::new(self.db);
        let listing = listing_repo.find_by_id(order.listing_id).await?;
        let claimed = match &listing {
            Some(listing) => {
                listing_repo
                    .claim_available(listing.id, listing.purchased_status())
                    .await?
            }
            None => false,
        };
        let Some(listing) = listing.filter(|_| claimed) else {
            tracing::warn!(
                "Payment {} for order {} arrived after listing {} was taken",
                dto.payment_id,
                order.id,
                order.listing_id
            );
            order_repo
                .set_status(order.id, OrderStatus::Failed, Some(dto.payment_id))
                .await?;

            return Err(AppError::BadRequest(format!(
                "Listing {} is no longer available",
                order.listing_id
            )));
        };

        let order = order_repo
            .set_status(order.id, OrderStatus::Success, Some(dto.payment_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order.id)))?;

        self.announce_purchase(actor, &order, &listing).await;

        Ok(order)
    }

    /// Informs the owner and the buyer of a settled order.
    ///
    /// Notification and mail failures are logged; the sale is already recorded.
    async fn announce_purchase(
        &self,
        buyer: &User,
        order: &Order,
        listing: &Listing,
    ) {
        let amount = format!("{}.{:02} {}", order.amount / 100, order.amount % 100, order.currency);

        if let Err(e) = NotificationService::new(self.db, self.http_client, &self.config.brevo)
            .notify(
                listing.owner_id,
                Some(listing.id),
                format!(
                    "{} paid {} for {}",
                    buyer.username, amount, listing.name
                ),
            )
            .await
        {
            tracing::warn!("Failed to notify owner of listing {} about order {}: {}", listing.id, order.id, e);
        }

        let mail = MailService::new(self.http_client, &self.config.brevo);
        let html = format!(
            "<p>Your payment of <strong>{}</strong> for <strong>{}</strong> was successful.</p>\
             <p>Payment reference: {}</p>",
            escape_html(&amount),
            escape_html(&listing.name),
            escape_html(order.gateway_payment_id.as_deref().unwrap_or_default())
        );
        if let Err(e) = mail
            .send(&buyer.email, &buyer.username, "Payment confirmation", &html)
            .await
        {
            tracing::warn!("Failed to email payment confirmation for order {}: {}", order.id, e);
        }

        let owner = match UserRepository::new(self.db).find_by_id(listing.owner_id).await {
            Ok(owner) => owner,
            Err(e) => {
                tracing::warn!("Failed to load owner of listing {}: {}", listing.id, e);
                None
            }
        };
        if let Some(owner) = owner {
            let html = format!(
                "<p><strong>{}</strong> completed a payment of <strong>{}</strong> for <strong>{}</strong>.</p>",
                escape_html(&buyer.username),
                escape_html(&amount),
                escape_html(&listing.name)
            );
            if let Err(e) = mail
                .send(&owner.email, &owner.username, "Your listing was purchased", &html)
                .await
            {
                tracing::warn!("Failed to email owner {} about order {}: {}", owner.id, order.id, e);
            }
        }
    }

    /// Cancels one of the caller's pending orders.
    pub async fn cancel(&self, actor: &User, id: i32) -> Result<Order, AppError> {
        let order = self.find_owned(actor, id).await?;
        if order.status != OrderStatus::Pending {
            return Err(AppError::BadRequest(format!("Order {} is not pending", id)));
        }

        OrderRepository::new(self.db)
            .set_status(id, OrderStatus::Cancelled, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn list(&self, actor: &User) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_user(actor.id).await?)
    }

    /// Deletes one of the caller's orders.
    ///
    /// # Returns
    /// - `Ok(())` - Order deleted
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AuthError::AccessDenied)` - Order belongs to another user
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.find_owned(actor, id).await?;

        OrderRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn find_owned(&self, actor: &User, id: i32) -> Result<Order, AppError> {
        let Some(order) = OrderRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Order {} not found", id)));
        };

        if order.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Order {} belongs to another user", id),
            )
            .into());
        }

        Ok(order)
    }
}

/// Checks a Razorpay payment signature.
///
/// The expected signature is the hex-encoded HMAC-SHA256 of `"{order_id}|{payment_id}"`
/// keyed with the API secret. Comparison is constant time; a signature that is not
/// valid hex never matches.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    mac.verify_slice(&expected).is_ok()
}

/// Computes the signature Razorpay would send for an order and payment.
#[cfg(test)]
pub fn sign(secret: &str, order_id: &str, payment_id: &str) -> Option<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    Some(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_signature() {
        let signature = sign("secret", "order_1", "pay_1").unwrap();

        assert!(verify_signature("secret", "order_1", "pay_1", &signature));
    }

    #[test]
    fn rejects_signature_for_other_pair_or_secret() {
        let signature = sign("secret", "order_1", "pay_1").unwrap();

        assert!(!verify_signature("secret", "order_1", "pay_2", &signature));
        assert!(!verify_signature("secret", "order_2", "pay_1", &signature));
        assert!(!verify_signature("other", "order_1", "pay_1", &signature));
    }

    #[test]
    fn rejects_malformed_signature() {
        assert!(!verify_signature("secret", "order_1", "pay_1", "not-hex"));
        assert!(!verify_signature("secret", "order_1", "pay_1", ""));
    }

    #[test]
    fn matches_known_vector() {
        // HMAC-SHA256("key", "The quick brown fox jumps over the lazy dog")
        let mut mac = Hmac::<Sha256>::new_from_slice(b"key").unwrap();
        mac.update(b"The quick brown fox jumps over the lazy dog");

        assert_eq!(
            hex::encode(mac.finalize().into_bytes()),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }
}
