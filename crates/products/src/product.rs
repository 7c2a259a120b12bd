use serde::Serialize;

use storefront_core::{
    ensure_valid, entity_id, DomainResult, Entity, Notification, Repository, Validatable,
    Validator,
};

entity_id!(
    /// Product identifier.
    ProductId
);

/// Validation context for products.
pub const PRODUCT_CONTEXT: &str = "product";

/// Entity: Product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Build and validate a product. Every failing rule is reported together.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        ensure_valid(Self {
            id,
            name: name.into(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        *self = ensure_valid(candidate)?;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.price = price;
        *self = ensure_valid(candidate)?;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    const KIND: &'static str = PRODUCT_CONTEXT;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Field rules for [`Product`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductValidator;

impl Validator<Product> for ProductValidator {
    fn validate(&self, candidate: &Product) -> Notification {
        let mut notification = Notification::new();
        if candidate.id.is_blank() {
            notification.add(PRODUCT_CONTEXT, "Id is required");
        }
        if candidate.name.trim().is_empty() {
            notification.add(PRODUCT_CONTEXT, "Name is required");
        }
        // Zero is a valid price; negatives and NaN/inf are not.
        if !candidate.price.is_finite() || candidate.price < 0.0 {
            notification.add(PRODUCT_CONTEXT, "Price must be greater than zero");
        }
        notification
    }
}

impl Validatable for Product {
    type Validator = ProductValidator;
}

/// Builds products with generated identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(name: impl Into<String>, price: f64) -> DomainResult<Product> {
        Product::new(ProductId::generate(), name, price)
    }
}

/// Operations spanning several products.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductService;

impl ProductService {
    /// Raise every price by `percentage` percent.
    ///
    /// All-or-nothing: if any resulting price is invalid no product is changed.
    pub fn increase_price(products: &mut [Product], percentage: f64) -> DomainResult<()> {
        let mut repriced = products.to_vec();
        for product in &mut repriced {
            let price = product.price * (1.0 + percentage / 100.0);
            product.change_price(price)?;
        }
        products.clone_from_slice(&repriced);
        Ok(())
    }
}

/// Persistence port for products.
pub trait ProductRepository: Repository<Product> {}

impl<R> ProductRepository for R where R: Repository<Product> + ?Sized {}
