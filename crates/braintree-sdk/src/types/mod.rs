//! Request and response records.
//!
//! Records mirror the service's JSON documents: camelCase keys, optional
//! fields omitted when absent, RFC 3339 timestamps. Where one record extends
//! another, the base is embedded with `#[serde(flatten)]`.

pub mod address;
pub mod card;
pub mod client_token;
pub mod credit_card;
pub mod customer;
pub mod dispute;
pub mod line_item;
pub mod merchant_account;
pub mod modifier;
pub mod nonce;
pub mod payment_method;
pub mod plan;
pub mod settlement;
pub mod subscription;
pub mod transaction;
pub mod verification;
pub mod wallet;

/// Instant carried by every date field.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

pub use address::*;
pub use card::*;
pub use client_token::*;
pub use credit_card::*;
pub use customer::*;
pub use dispute::*;
pub use line_item::*;
pub use merchant_account::*;
pub use modifier::*;
pub use nonce::*;
pub use payment_method::*;
pub use plan::*;
pub use settlement::*;
pub use subscription::*;
pub use transaction::*;
pub use verification::*;
pub use wallet::*;

/// A stored record with creation and last-modification instants.
///
/// `updated_at` is never earlier than `created_at` for records the service
/// returns.
pub trait Timestamped {
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;
}

macro_rules! timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Timestamped for $ty {
                fn created_at(&self) -> Timestamp {
                    self.created_at
                }

                fn updated_at(&self) -> Timestamp {
                    self.updated_at
                }
            }
        )+
    };
}

timestamped!(
    AddressResponse,
    AndroidPayCardResponse,
    ApplePayCardResponse,
    CreditCardResponse,
    CustomerResponse,
    Dispute,
    MasterpassCardResponse,
    PayPalAccountResponse,
    Plan,
    SamsungPayCardResponse,
    SubscriptionResponse,
    TransactionResponse,
    VenmoAccountResponse,
    VisaCheckoutCardResponse,
);

impl Timestamped for PaymentMethodResponse {
    fn created_at(&self) -> Timestamp {
        PaymentMethodResponse::created_at(self)
    }

    fn updated_at(&self) -> Timestamp {
        PaymentMethodResponse::updated_at(self)
    }
}
