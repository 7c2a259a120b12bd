use serde::Serialize;

use storefront_core::{
    ensure_valid, entity_id, DomainResult, Entity, Notification, Repository, Validatable,
    Validator,
};
use storefront_customers::{Customer, CustomerId};
use storefront_products::{Product, ProductId};

entity_id!(
    /// Order identifier.
    OrderId
);

entity_id!(
    /// Order item identifier (unique within the order).
    OrderItemId
);

/// Validation context for orders.
pub const ORDER_CONTEXT: &str = "order";

/// Validation context for order items.
pub const ORDER_ITEM_CONTEXT: &str = "order_item";

/// Order line: a product snapshot (name, unit price) and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    id: OrderItemId,
    product_id: ProductId,
    name: String,
    /// Unit price at the time the item was added.
    price: f64,
    quantity: i64,
}

impl OrderItem {
    pub fn new(
        id: OrderItemId,
        product_id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        ensure_valid(Self {
            id,
            product_id,
            name: name.into(),
            price,
            quantity,
        })
    }

    /// Snapshot `product` into a new item with a generated id.
    pub fn for_product(product: &Product, quantity: i64) -> DomainResult<Self> {
        Self::new(
            OrderItemId::generate(),
            product.id().clone(),
            product.name(),
            product.price(),
            quantity,
        )
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Field rules for [`OrderItem`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderItemValidator;

impl Validator<OrderItem> for OrderItemValidator {
    fn validate(&self, candidate: &OrderItem) -> Notification {
        let mut notification = Notification::new();
        if candidate.id.is_blank() {
            notification.add(ORDER_ITEM_CONTEXT, "Id is required");
        }
        if candidate.product_id.is_blank() {
            notification.add(ORDER_ITEM_CONTEXT, "ProductId is required");
        }
        if candidate.quantity <= 0 {
            notification.add(ORDER_ITEM_CONTEXT, "Quantity must be greater than zero");
        }
        if !candidate.price.is_finite() || candidate.price < 0.0 {
            notification.add(ORDER_ITEM_CONTEXT, "Price must be greater than zero");
        } else if !candidate.total().is_finite() {
            notification.add(ORDER_ITEM_CONTEXT, "Total must be a finite number");
        }
        notification
    }
}

impl Validatable for OrderItem {
    type Validator = OrderItemValidator;
}

/// Entity: Order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, items: Vec<OrderItem>) -> DomainResult<Self> {
        ensure_valid(Self {
            id,
            customer_id,
            items,
        })
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of item totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    pub fn add_item(&mut self, item: OrderItem) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.items.push(item);
        *self = ensure_valid(candidate)?;
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    const KIND: &'static str = ORDER_CONTEXT;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Field rules for [`Order`].
///
/// Items are validated when they are built, so only their presence is checked here.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderValidator;

impl Validator<Order> for OrderValidator {
    fn validate(&self, candidate: &Order) -> Notification {
        let mut notification = Notification::new();
        if candidate.id.is_blank() {
            notification.add(ORDER_CONTEXT, "Id is required");
        }
        if candidate.customer_id.is_blank() {
            notification.add(ORDER_CONTEXT, "CustomerId is required");
        }
        if candidate.items.is_empty() {
            notification.add(ORDER_CONTEXT, "Items are required");
        }
        if !candidate.total().is_finite() {
            notification.add(ORDER_CONTEXT, "Total must be a finite number");
        }
        notification
    }
}

impl Validatable for Order {
    type Validator = OrderValidator;
}

/// Builds orders with generated identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderFactory;

impl OrderFactory {
    pub fn create(customer_id: CustomerId, items: Vec<OrderItem>) -> DomainResult<Order> {
        Order::new(OrderId::generate(), customer_id, items)
    }
}

/// Operations spanning orders and customers.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderService;

impl OrderService {
    /// Build an order for `customer` and credit half its total as reward points.
    ///
    /// The customer is only credited once the order is valid.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> DomainResult<Order> {
        let order = OrderFactory::create(customer.id().clone(), items)?;
        customer.add_reward_points(order.total() / 2.0)?;
        Ok(order)
    }

    /// Sum of the totals of `orders`.
    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }
}

/// Persistence port for orders.
pub trait OrderRepository: Repository<Order> {}

impl<R> OrderRepository for R where R: Repository<Order> + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DomainError;

    fn item(id: &str, price: f64, quantity: i64) -> OrderItem {
        OrderItem::new(OrderItemId::new(id), ProductId::new("p1"), "Widget", price, quantity).unwrap()
    }

    fn messages(err: &DomainError) -> Vec<&str> {
        err.validation_errors()
            .expect("Expected Validation error")
            .messages()
            .collect()
    }

    #[test]
    fn order_total_sums_item_totals() {
        let order = Order::new(
            OrderId::new("o1"),
            CustomerId::new("c1"),
            vec![item("i1", 100.0, 2), item("i2", 200.0, 2)],
        )
        .unwrap();

        assert_eq!(order.items()[0].total(), 200.0);
        assert_eq!(order.total(), 600.0);
    }

    #[test]
    fn order_requires_id_customer_and_items() {
        let err = Order::new(OrderId::new(""), CustomerId::new(""), vec![]).unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["Id is required", "CustomerId is required", "Items are required"]
        );
    }

    #[test]
    fn item_rejects_non_positive_quantity_and_negative_price() {
        let err = OrderItem::new(OrderItemId::new("i1"), ProductId::new("p1"), "Widget", -1.0, 0)
            .unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["Quantity must be greater than zero", "Price must be greater than zero"]
        );
        let errors = err.validation_errors().unwrap();
        assert!(errors.errors().iter().all(|e| e.context == ORDER_ITEM_CONTEXT));
    }

    #[test]
    fn item_reports_every_rule_in_order() {
        let err = OrderItem::new(OrderItemId::new(""), ProductId::new(" "), "Widget", -1.0, 0)
            .unwrap_err();
        assert_eq!(
            messages(&err),
            vec![
                "Id is required",
                "ProductId is required",
                "Quantity must be greater than zero",
                "Price must be greater than zero",
            ]
        );
        let errors = err.validation_errors().unwrap();
        assert!(errors.errors().iter().all(|e| e.context == ORDER_ITEM_CONTEXT));
    }

    #[test]
    fn item_total_overflowing_to_infinity_is_rejected() {
        let err = OrderItem::new(
            OrderItemId::new("i1"),
            ProductId::new("p1"),
            "Widget",
            1e300,
            10_000_000_000,
        )
        .unwrap_err();
        assert_eq!(messages(&err), vec!["Total must be a finite number"]);
    }

    #[test]
    fn order_total_overflowing_to_infinity_is_rejected() {
        let items = vec![item("i1", f64::MAX, 1), item("i2", f64::MAX, 1)];
        let err = Order::new(OrderId::new("o1"), CustomerId::new("c1"), items).unwrap_err();
        assert_eq!(messages(&err), vec!["Total must be a finite number"]);
    }

    #[test]
    fn overflowing_order_credits_no_points() {
        let mut customer = Customer::new(CustomerId::new("c1"), "Ada").unwrap();
        let items = vec![item("i1", f64::MAX, 1), item("i2", f64::MAX, 1)];

        assert!(OrderService::place_order(&mut customer, items).is_err());
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn item_snapshots_product() {
        let product = Product::new(ProductId::new("p1"), "Widget", 9.99).unwrap();
        let item = OrderItem::for_product(&product, 3).unwrap();
        assert_eq!(item.product_id(), &ProductId::new("p1"));
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price(), 9.99);
        assert_eq!(item.quantity(), 3);
        assert!(!item.id().is_blank());
    }

    #[test]
    fn add_item_grows_total() {
        let mut order = Order::new(OrderId::new("o1"), CustomerId::new("c1"), vec![item("i1", 10.0, 1)])
            .unwrap();
        order.add_item(item("i2", 5.0, 2)).unwrap();
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total(), 20.0);
    }

    #[test]
    fn place_order_credits_half_the_total() {
        let mut customer = Customer::new(CustomerId::new("c1"), "Ada").unwrap();

        let order = OrderService::place_order(&mut customer, vec![item("i1", 10.0, 1)]).unwrap();
        assert_eq!(customer.reward_points(), 5.0);
        assert_eq!(order.customer_id(), &CustomerId::new("c1"));

        OrderService::place_order(&mut customer, vec![item("i2", 20.0, 1)]).unwrap();
        assert_eq!(customer.reward_points(), 15.0);
    }

    #[test]
    fn place_order_without_items_leaves_points_untouched() {
        let mut customer = Customer::new(CustomerId::new("c1"), "Ada").unwrap();
        let err = OrderService::place_order(&mut customer, vec![]).unwrap_err();
        assert_eq!(messages(&err), vec!["Items are required"]);
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn service_total_sums_orders() {
        let a = Order::new(OrderId::new("o1"), CustomerId::new("c1"), vec![item("i1", 100.0, 1)]).unwrap();
        let b = Order::new(OrderId::new("o2"), CustomerId::new("c1"), vec![item("i2", 200.0, 2)]).unwrap();
        assert_eq!(OrderService::total(&[a, b]), 500.0);
        assert_eq!(OrderService::total(&[]), 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: order total is the sum of price * quantity over all items.
            #[test]
            fn total_matches_item_sum(
                lines in prop::collection::vec((0u32..10_000, 1i64..100), 1..20)
            ) {
                let items: Vec<OrderItem> = lines
                    .iter()
                    .enumerate()
                    .map(|(i, (cents, qty))| item(&format!("i{i}"), *cents as f64 / 100.0, *qty))
                    .collect();
                let expected: f64 = items.iter().map(|i| i.price() * i.quantity() as f64).sum();

                let order = Order::new(OrderId::new("o1"), CustomerId::new("c1"), items).unwrap();
                prop_assert_eq!(order.total(), expected);
            }
        }
    }
}
