use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::address::Address;
use super::card::{Commercial, Debit, DurbinRegulated, HealthCare, Payroll, Prepaid};
use super::credit_card::{CreditCardCoreResponse, CreditCardRequest};
use super::customer::{Customer, CustomerRiskData};
use super::dispute::DisputeResponse;
use super::line_item::TransactionLineItem;
use super::modifier::{AddOnResponse, DiscountResponse};
use super::wallet::{
    AndroidPayCard, ApplePayCard, MasterpassCard, PayPalAccount, SamsungPayCard, VenmoAccount,
    VisaCheckoutCard,
};
use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    AuthorizationExpired,
    Authorized,
    Authorizing,
    SettlementPending,
    /// The identifier keeps the declared misspelling. The wire value does
    /// not: it is written as `settlement_declined`, the value the service
    /// emits, and differs from the declared `settlemnet_declined`, which is
    /// still accepted on decode.
    #[serde(rename = "settlement_declined", alias = "settlemnet_declined")]
    SettlemnetDeclined,
    Failed,
    GatewayRejected,
    ProcessorDeclined,
    Settled,
    Settling,
    SubmittedForSettlement,
    Voided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscrowStatus {
    HoldPending,
    Held,
    ReleasePending,
    Released,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayRejectionReason {
    ApplicationIncomplete,
    Avs,
    AvsAndCvv,
    Cvv,
    Duplicate,
    Fraud,
    RiskThreshold,
    ThreeDSecure,
    TokenIssuance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentInstrumentType {
    AndroidPayCard,
    ApplePayCard,
    CreditCard,
    MasterpassCard,
    PaypalAccount,
    SamsungPayCard,
    VenmoAccount,
    VisaCheckoutCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionProcessorResponseType {
    Approved,
    SoftDeclined,
    HardDeclined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSource {
    Api,
    ControlPanel,
    Recurring,
}

/// Dynamic descriptor shown on the cardholder's statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub name: String,
    pub phone: String,
    pub url: String,
}

/// Fields common to transaction requests and responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<Descriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    #[serde(default)]
    pub line_items: Vec<TransactionLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    /// Superseded by `TransactionRequest::transaction_source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ships_from_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreditCard {
    #[serde(flatten)]
    pub card: CreditCardRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalVault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_network_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPaypalOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecureOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenmoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_billing_address_to_payment_method: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_in_escrow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<TransactionPaypalOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_advanced_fraud_checking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_avs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_cvv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_in_vault: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_in_vault_on_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_shipping_address_in_vault: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_for_settlement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_secure: Option<ThreeDSecureOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venmo: Option<VenmoOptions>,
}

/// Externally authenticated 3-D Secure data.
///
/// `three_d_secure_vision` keeps the declared wire key `threeDSecureVision`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecurePassThru {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cavv: Option<String>,
    pub eci_flag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_secure_vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xid: Option<String>,
}

/// Body of `TransactionGateway::sale`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<TransactionCreditCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_vault: Option<ExternalVault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransactionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_data: Option<CustomerRiskData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_billing_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_payment_method_nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_payment_method_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_shipping_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_secure_pass_thru: Option<ThreeDSecurePassThru>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_source: Option<String>,
}

impl RequestShape for TransactionRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["amount"];
}

/// Body of `TransactionGateway::clone_transaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneTransactionRequest {
    pub amount: String,
    pub options: CloneTransactionOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneTransactionOptions {
    pub submit_for_settlement: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationAdjustment {
    pub amount: String,
    pub success: bool,
    pub timestamp: Timestamp,
    pub processor_response_type: String,
    pub processor_response_code: String,
    pub processor_response_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementDetails {
    pub disbursement_date: Timestamp,
    pub funds_held: bool,
    pub settlement_amount: String,
    pub settlement_currency_exchange_rate: String,
    pub settlement_currency_iso_code: String,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitatedDetails {
    pub merchant_id: String,
    pub merchant_name: String,
    pub payment_method_nonce: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitatorDetails {
    pub oauth_application_client_id: String,
    pub oauth_application_name: String,
    pub source_payment_method_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRiskData {
    pub decision: String,
    pub device_data_captured: bool,
    pub fraud_service_provider: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusHistory {
    pub amount: String,
    pub status: TransactionStatus,
    pub timestamp: Timestamp,
    /// Wire key is all lowercase: `transactionsource`.
    #[serde(rename = "transactionsource")]
    pub transaction_source: TransactionSource,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionThreeDSecureInfo {
    pub enrolled: String,
    pub liability_shift_possible: bool,
    pub liability_shifted: bool,
    pub status: String,
}

/// Billing or shipping address as captured on a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAddress {
    #[serde(flatten)]
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAndroidPayCard {
    #[serde(flatten)]
    pub card: AndroidPayCard,
    pub commercial: Commercial,
    pub country_of_issuance: String,
    pub debit: Debit,
    pub durbin_regulated: DurbinRegulated,
    pub healthcare: HealthCare,
    pub payroll: Payroll,
    pub prepaid: Prepaid,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionApplePayCard {
    #[serde(flatten)]
    pub card: ApplePayCard,
    pub commercial: Commercial,
    pub country_of_issuance: String,
    pub debit: Debit,
    pub durbin_regulated: DurbinRegulated,
    pub healthcare: HealthCare,
    pub issuing_bank: String,
    pub payroll: Payroll,
    pub prepaid: Prepaid,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreditCardDetails {
    #[serde(flatten)]
    pub card: CreditCardCoreResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayPalAccount {
    #[serde(flatten)]
    pub account: PayPalAccount,
    pub authorization_id: String,
    pub capture_id: String,
    pub custom_field: String,
    pub payer_email: String,
    pub payer_first_name: String,
    pub payer_last_name: String,
    pub payer_status: String,
    pub payment_id: String,
    pub refund_from_transaction_fee_amount: String,
    pub refund_from_transaction_fee_currency_iso_code: String,
    pub refund_id: String,
    pub seller_protection_status: String,
    pub tax_id: String,
    pub tax_id_type: String,
    pub transaction_fee_amount: String,
    pub transaction_fee_currency_iso_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSubscriptionDetails {
    pub billing_period_end_date: Timestamp,
    pub billing_period_start_date: Timestamp,
}

/// A processed transaction.
///
/// Only the snapshot matching `payment_instrument_type` is populated; every
/// other instrument field is `None`. Fields that only exist for some
/// outcomes (rejection reason, escrow, refunds, subscription billing) are
/// optional as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<Descriptor>,
    #[serde(default)]
    pub line_items: Vec<TransactionLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ships_from_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,

    #[serde(default)]
    pub add_ons: Vec<AddOnResponse>,
    /// Wire key `additionalProccessorResponse`, spelled as declared.
    pub additional_proccessor_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_pay_card: Option<TransactionAndroidPayCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_pay_card: Option<TransactionApplePayCard>,
    #[serde(default)]
    pub authorization_adjustments: Vec<AuthorizationAdjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_expires_at: Option<Timestamp>,
    pub avs_error_response_code: String,
    pub avs_postal_code_response_code: String,
    pub avs_street_address_response_code: String,
    pub billing: TransactionAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<TransactionCreditCardDetails>,
    pub currency_iso_code: String,
    pub cvv_response_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disbursement_details: Option<DisbursementDetails>,
    pub discount_amount: String,
    #[serde(default)]
    pub discounts: Vec<DiscountResponse>,
    #[serde(default)]
    pub disputes: Vec<DisputeResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escrow_status: Option<EscrowStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilitated_details: Option<FacilitatedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilitator_details: Option<FacilitatorDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_rejection_reason: Option<GatewayRejectionReason>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masterpass_card_details: Option<MasterpassCard>,
    pub network_transaction_id: String,
    pub payment_instrument_type: PaymentInstrumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_account: Option<TransactionPayPalAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Absent when the charge never reached an approving processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_authorization_code: Option<String>,
    pub processor_response_code: String,
    pub processor_response_text: String,
    pub processor_response_type: TransactionProcessorResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_settlement_response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_settlement_response_text: Option<String>,
    #[serde(default)]
    pub refund_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_transaction_id: Option<String>,
    pub risk_data: TransactionRiskData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samsung_pay_card_details: Option<SamsungPayCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_batch_id: Option<String>,
    pub shipping: TransactionAddress,
    pub status: TransactionStatus,
    #[serde(default)]
    pub status_history: Vec<TransactionStatusHistory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<TransactionSubscriptionDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_secure_info: Option<TransactionThreeDSecureInfo>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venmo_account: Option<VenmoAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_checkout_card_details: Option<VisaCheckoutCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_referral_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for TransactionResponse {
    const KEY: &'static str = "transaction";
}

/// Borrowed view of the instrument a transaction was charged to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionInstrument<'a> {
    AndroidPayCard(&'a TransactionAndroidPayCard),
    ApplePayCard(&'a TransactionApplePayCard),
    CreditCard(&'a TransactionCreditCardDetails),
    MasterpassCard(&'a MasterpassCard),
    PayPalAccount(&'a TransactionPayPalAccount),
    SamsungPayCard(&'a SamsungPayCard),
    VenmoAccount(&'a VenmoAccount),
    VisaCheckoutCard(&'a VisaCheckoutCard),
}

impl TransactionResponse {
    /// The snapshot selected by `payment_instrument_type`, if it was sent.
    pub fn instrument(&self) -> Option<TransactionInstrument<'_>> {
        match self.payment_instrument_type {
            PaymentInstrumentType::AndroidPayCard => self
                .android_pay_card
                .as_ref()
                .map(TransactionInstrument::AndroidPayCard),
            PaymentInstrumentType::ApplePayCard => self
                .apple_pay_card
                .as_ref()
                .map(TransactionInstrument::ApplePayCard),
            PaymentInstrumentType::CreditCard => self
                .credit_card
                .as_ref()
                .map(TransactionInstrument::CreditCard),
            PaymentInstrumentType::MasterpassCard => self
                .masterpass_card_details
                .as_ref()
                .map(TransactionInstrument::MasterpassCard),
            PaymentInstrumentType::PaypalAccount => self
                .paypal_account
                .as_ref()
                .map(TransactionInstrument::PayPalAccount),
            PaymentInstrumentType::SamsungPayCard => self
                .samsung_pay_card_details
                .as_ref()
                .map(TransactionInstrument::SamsungPayCard),
            PaymentInstrumentType::VenmoAccount => self
                .venmo_account
                .as_ref()
                .map(TransactionInstrument::VenmoAccount),
            PaymentInstrumentType::VisaCheckoutCard => self
                .visa_checkout_card_details
                .as_ref()
                .map(TransactionInstrument::VisaCheckoutCard),
        }
    }
}
