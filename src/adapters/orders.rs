//! The segregated-interface side of the order example.
//!
//! No type implements the wide [`crate::domain::ports::Order`] contract; a
//! digital storefront has no stock to check, so its order type implements
//! only the two segregated traits it actually needs.

use crate::domain::ports::{OrderShipper, PaymentProcessor};

#[derive(Debug, Clone, Copy, Default)]
pub struct DigitalOrder;

impl PaymentProcessor for DigitalOrder {
    fn process_payment(&self) {
        tracing::debug!("processing payment for a digital order");
    }
}

impl OrderShipper for DigitalOrder {
    fn ship_order(&self) {
        tracing::debug!("delivering a digital order");
    }
}
