//! Behavioural tests for `LoadRequest::validate` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use smartload_core::{
    Capacity, LoadRequest, Location, MAX_ORDERS, Order, OrderId, RequestValidationError,
    TimeWindow, Truck, ValidatedRequest,
};

fn order(id: &str, weight_lbs: u64, volume_cuft: u64) -> Order {
    Order {
        id: OrderId::new(id),
        payout_cents: 100_000,
        weight_lbs,
        volume_cuft,
        origin: Location::new("Los Angeles, CA"),
        destination: Location::new("Dallas, TX"),
        pickup: TimeWindow::day(0),
        delivery: TimeWindow::day(4),
        is_hazmat: false,
    }
}

#[derive(Debug)]
struct ValidationWorld {
    truck: RefCell<Truck>,
    orders: RefCell<Vec<Order>>,
    outcome: RefCell<Option<Result<ValidatedRequest, RequestValidationError>>>,
}

impl ValidationWorld {
    fn new() -> Self {
        Self {
            truck: RefCell::new(Truck::new("truck-123", Capacity::new(44_000, 3_000))),
            orders: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<ValidatedRequest, RequestValidationError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_error(&self) -> RequestValidationError {
        self.expect_outcome()
            .expect_err("expected validation to fail")
    }
}

#[fixture]
fn world() -> ValidationWorld {
    ValidationWorld::new()
}

#[given("a truck with capacity 44000 lbs and 3000 cuft")]
fn given_standard_truck(world: &ValidationWorld) {
    world
        .truck
        .replace(Truck::new("truck-123", Capacity::new(44_000, 3_000)));
}

#[given("a truck with no weight capacity")]
fn given_weightless_truck(world: &ValidationWorld) {
    world
        .truck
        .replace(Truck::new("truck-123", Capacity::new(0, 3_000)));
}

#[given("two compatible orders")]
fn given_two_orders(world: &ValidationWorld) {
    world.orders.replace(vec![
        order("ord-001", 18_000, 1_200),
        order("ord-002", 12_000, 900),
    ]);
}

#[given("two orders sharing the id ord-001")]
fn given_duplicate_orders(world: &ValidationWorld) {
    world.orders.replace(vec![
        order("ord-001", 18_000, 1_200),
        order("ord-001", 12_000, 900),
    ]);
}

#[given("twenty-six small orders")]
fn given_too_many_orders(world: &ValidationWorld) {
    let orders = (0..=MAX_ORDERS)
        .map(|i| order(&format!("ord-{i:03}"), 10, 1))
        .collect();
    world.orders.replace(orders);
}

#[given("an order delivered before it is picked up")]
fn given_backwards_order(world: &ValidationWorld) {
    let backwards =
        order("ord-009", 1_000, 10).with_windows(TimeWindow::day(10), TimeWindow::day(8));
    world.orders.replace(vec![backwards]);
}

#[when("the request is validated")]
fn when_validated(world: &ValidationWorld) {
    let request = LoadRequest {
        truck: world.truck.borrow().clone(),
        orders: world.orders.borrow().clone(),
    };
    world.outcome.replace(Some(request.validate()));
}

#[then("validation succeeds with 2 orders")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_succeeds(world: &ValidationWorld) {
    let validated = world.expect_outcome().expect("expected validation success");
    assert_eq!(validated.orders().len(), 2);
}

#[then("validation fails because ord-001 is duplicated")]
fn then_duplicate(world: &ValidationWorld) {
    assert_eq!(
        world.expect_error(),
        RequestValidationError::DuplicateOrderId {
            id: OrderId::new("ord-001"),
        }
    );
}

#[then("validation fails because the truck cannot carry weight")]
fn then_weightless(world: &ValidationWorld) {
    assert_eq!(world.expect_error(), RequestValidationError::ZeroMaxWeight);
}

#[then("validation fails because the order limit is exceeded")]
fn then_too_many(world: &ValidationWorld) {
    assert!(matches!(
        world.expect_error(),
        RequestValidationError::TooManyOrders { count: 26, limit: 25 }
    ));
}

#[then("validation fails because delivery precedes pickup")]
fn then_backwards(world: &ValidationWorld) {
    assert_eq!(
        world.expect_error(),
        RequestValidationError::DeliveryBeforePickup {
            id: OrderId::new("ord-009"),
        }
    );
}

#[scenario(path = "tests/features/request_validation.feature", index = 0)]
fn accepts_valid_request(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/request_validation.feature", index = 1)]
fn rejects_duplicate_ids(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/request_validation.feature", index = 2)]
fn rejects_weightless_truck(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/request_validation.feature", index = 3)]
fn rejects_oversized_request(world: ValidationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/request_validation.feature", index = 4)]
fn rejects_backwards_windows(world: ValidationWorld) {
    let _ = world;
}
