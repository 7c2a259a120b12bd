//! Product use cases.

use std::sync::Arc;

use chrono::Utc;

use storefront_core::{Entity, Repository};
use storefront_events::EventDispatcher;
use storefront_products::{ProductEvent, ProductFactory, ProductId, ProductRepository};

use crate::dto::{
    CreateProductInput, FindProductInput, ListProductsOutput, ProductOutput, UpdateProductInput,
};
use crate::error::UseCaseResult;

/// Create a product, persist it, then dispatch `ProductCreated`.
pub struct CreateProductUseCase {
    repository: Arc<dyn ProductRepository>,
    dispatcher: Arc<EventDispatcher<ProductEvent>>,
}

impl CreateProductUseCase {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        dispatcher: Arc<EventDispatcher<ProductEvent>>,
    ) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub async fn execute(&self, input: CreateProductInput) -> UseCaseResult<ProductOutput> {
        let product = ProductFactory::create(input.name, input.price)?;

        self.repository.create(&product).await?;
        tracing::info!(product_id = %product.id(), price = product.price(), "product created");

        self.dispatcher
            .notify(&ProductEvent::created(&product, Utc::now()))?;

        Ok(ProductOutput::from(&product))
    }
}

pub struct FindProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl FindProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: FindProductInput) -> UseCaseResult<ProductOutput> {
        let product = self.repository.find(&ProductId::from(input.id)).await?;
        Ok(ProductOutput::from(&product))
    }
}

pub struct ListProductsUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> UseCaseResult<ListProductsOutput> {
        let products = self.repository.find_all().await?;
        Ok(ListProductsOutput {
            products: products.iter().map(ProductOutput::from).collect(),
        })
    }
}

/// Rename and/or reprice a product. No event is dispatched.
pub struct UpdateProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: UpdateProductInput) -> UseCaseResult<ProductOutput> {
        let mut product = self.repository.find(&ProductId::from(input.id)).await?;

        if let Some(name) = input.name {
            product.change_name(name)?;
        }
        if let Some(price) = input.price {
            product.change_price(price)?;
        }

        self.repository.update(&product).await?;
        tracing::info!(product_id = %product.id(), "product updated");

        Ok(ProductOutput::from(&product))
    }
}
