//! Optimization requests and their validation.
//!
//! Optimizers accept only a [`ValidatedRequest`], so every precondition the
//! search relies on is checked once, up front, by [`LoadRequest::validate`].

use std::collections::HashSet;

use thiserror::Error;

use crate::{Order, OrderId, Truck};

/// Largest number of orders accepted in one request.
pub const MAX_ORDERS: usize = 25;

/// A truck and the orders competing for it, as supplied by the caller.
///
/// # Examples
/// ```rust
/// use smartload_core::{Capacity, LoadRequest, Truck};
///
/// let request = LoadRequest {
///     truck: Truck::new("truck-123", Capacity::new(44_000, 3_000)),
///     orders: Vec::new(),
/// };
/// let validated = request.validate().expect("an empty order list is valid");
/// assert!(validated.orders().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// The truck being loaded.
    pub truck: Truck,
    /// Candidate orders in caller order.
    pub orders: Vec<Order>,
}

/// Reasons a [`LoadRequest`] is rejected before optimization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// The truck identifier was blank.
    #[error("truck id must not be empty")]
    EmptyTruckId,
    /// The truck cannot carry any weight.
    #[error("truck max_weight_lbs must be greater than zero")]
    ZeroMaxWeight,
    /// The truck cannot carry any volume.
    #[error("truck max_volume_cuft must be greater than zero")]
    ZeroMaxVolume,
    /// More orders than the service accepts.
    #[error("request contains {count} orders; at most {limit} are accepted")]
    TooManyOrders {
        /// Orders supplied.
        count: usize,
        /// Orders accepted.
        limit: usize,
    },
    /// An order identifier was blank.
    #[error("order at position {index} has an empty id")]
    EmptyOrderId {
        /// Position of the order in the request.
        index: usize,
    },
    /// Two orders share an identifier.
    #[error("order id {id} appears more than once")]
    DuplicateOrderId {
        /// The repeated identifier.
        id: OrderId,
    },
    /// An order weighs nothing.
    #[error("order {id} must have a positive weight_lbs")]
    ZeroWeight {
        /// The offending order.
        id: OrderId,
    },
    /// An order occupies no space.
    #[error("order {id} must have a positive volume_cuft")]
    ZeroVolume {
        /// The offending order.
        id: OrderId,
    },
    /// An order has a blank origin.
    #[error("order {id} has an empty origin")]
    EmptyOrigin {
        /// The offending order.
        id: OrderId,
    },
    /// An order has a blank destination.
    #[error("order {id} has an empty destination")]
    EmptyDestination {
        /// The offending order.
        id: OrderId,
    },
    /// A time window ends before it starts.
    #[error("order {id} has a {window} window that ends before it starts")]
    InvertedWindow {
        /// The offending order.
        id: OrderId,
        /// Which window, `pickup` or `delivery`.
        window: &'static str,
    },
    /// Delivery opens before pickup does.
    #[error("order {id} must be delivered on or after its pickup")]
    DeliveryBeforePickup {
        /// The offending order.
        id: OrderId,
    },
}

impl LoadRequest {
    /// Check every precondition and wrap the request for optimization.
    ///
    /// # Errors
    /// Returns the first [`RequestValidationError`] found.
    pub fn validate(self) -> Result<ValidatedRequest, RequestValidationError> {
        self.validate_detailed()?;
        Ok(ValidatedRequest(self))
    }

    /// Check every precondition without consuming the request.
    ///
    /// # Errors
    /// Returns the first [`RequestValidationError`] found, checking the truck
    /// before the orders and orders in request order.
    pub fn validate_detailed(&self) -> Result<(), RequestValidationError> {
        let capacity = self.truck.capacity;
        if self.truck.id.as_str().trim().is_empty() {
            return Err(RequestValidationError::EmptyTruckId);
        }
        if capacity.max_weight == 0 {
            return Err(RequestValidationError::ZeroMaxWeight);
        }
        if capacity.max_volume == 0 {
            return Err(RequestValidationError::ZeroMaxVolume);
        }
        if self.orders.len() > MAX_ORDERS {
            return Err(RequestValidationError::TooManyOrders {
                count: self.orders.len(),
                limit: MAX_ORDERS,
            });
        }

        let mut seen = HashSet::with_capacity(self.orders.len());
        for (index, order) in self.orders.iter().enumerate() {
            if order.id.is_blank() {
                return Err(RequestValidationError::EmptyOrderId { index });
            }
            if !seen.insert(&order.id) {
                return Err(RequestValidationError::DuplicateOrderId {
                    id: order.id.clone(),
                });
            }
            validate_order(order)?;
        }
        Ok(())
    }
}

fn validate_order(order: &Order) -> Result<(), RequestValidationError> {
    let id = || order.id.clone();
    if order.weight_lbs == 0 {
        return Err(RequestValidationError::ZeroWeight { id: id() });
    }
    if order.volume_cuft == 0 {
        return Err(RequestValidationError::ZeroVolume { id: id() });
    }
    if order.origin.is_empty() {
        return Err(RequestValidationError::EmptyOrigin { id: id() });
    }
    if order.destination.is_empty() {
        return Err(RequestValidationError::EmptyDestination { id: id() });
    }
    if !order.pickup.is_well_formed() {
        return Err(RequestValidationError::InvertedWindow {
            id: id(),
            window: "pickup",
        });
    }
    if !order.delivery.is_well_formed() {
        return Err(RequestValidationError::InvertedWindow {
            id: id(),
            window: "delivery",
        });
    }
    if order.delivery.start() < order.pickup.start() {
        return Err(RequestValidationError::DeliveryBeforePickup { id: id() });
    }
    Ok(())
}

/// A [`LoadRequest`] that passed [`LoadRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest(LoadRequest);

impl ValidatedRequest {
    /// The truck being loaded.
    #[must_use]
    pub const fn truck(&self) -> &Truck {
        &self.0.truck
    }

    /// Candidate orders in caller order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.0.orders
    }

    /// Recover the underlying request.
    #[must_use]
    pub fn into_inner(self) -> LoadRequest {
        self.0
    }
}

impl TryFrom<LoadRequest> for ValidatedRequest {
    type Error = RequestValidationError;

    fn try_from(request: LoadRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}
