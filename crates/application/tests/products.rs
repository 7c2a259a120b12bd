mod common;

use common::{failing, recording, silent_products, MailerDown, Recorder, Stores};
use storefront_application::dto::{CreateProductInput, FindProductInput, UpdateProductInput};
use storefront_application::{
    CreateProductUseCase, FindProductUseCase, ListProductsUseCase, UpdateProductUseCase,
    UseCaseError,
};
use storefront_core::DomainError;
use storefront_products::PRODUCT_CREATED;

fn input(name: &str, price: f64) -> CreateProductInput {
    CreateProductInput {
        name: name.into(),
        price,
    }
}

fn validation_messages(err: &UseCaseError) -> Vec<String> {
    err.domain()
        .and_then(DomainError::validation_errors)
        .expect("Expected Validation error")
        .messages()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn create_persists_then_dispatches_product_created() {
    let stores = Stores::new();
    let recorder = Recorder::default();
    let create = CreateProductUseCase::new(
        stores.products.clone(),
        recording(PRODUCT_CREATED, &recorder),
    );

    let output = create.execute(input("Widget", 9.99)).await.unwrap();

    assert_eq!(output.name, "Widget");
    assert_eq!(output.price, 9.99);
    assert_eq!(recorder.seen(), vec![PRODUCT_CREATED]);

    let found = FindProductUseCase::new(stores.products.clone())
        .execute(FindProductInput { id: output.id.clone() })
        .await
        .unwrap();
    assert_eq!(found, output);
}

#[tokio::test]
async fn invalid_product_reports_all_rules_and_dispatches_nothing() {
    let stores = Stores::new();
    let recorder = Recorder::default();
    let create = CreateProductUseCase::new(
        stores.products.clone(),
        recording(PRODUCT_CREATED, &recorder),
    );

    let err = create.execute(input("", -10.0)).await.unwrap_err();

    assert_eq!(
        validation_messages(&err),
        vec!["Name is required", "Price must be greater than zero"]
    );
    assert!(stores.products.is_empty().unwrap());
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn list_returns_products_in_creation_order() {
    let stores = Stores::new();
    let create = CreateProductUseCase::new(stores.products.clone(), silent_products());
    create.execute(input("Widget", 1.0)).await.unwrap();
    create.execute(input("Gadget", 2.0)).await.unwrap();

    let listed = ListProductsUseCase::new(stores.products.clone())
        .execute()
        .await
        .unwrap();

    let names: Vec<_> = listed.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "Gadget"]);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let stores = Stores::new();
    let created = CreateProductUseCase::new(stores.products.clone(), silent_products())
        .execute(input("Widget", 10.0))
        .await
        .unwrap();
    let update = UpdateProductUseCase::new(stores.products.clone());

    let output = update
        .execute(UpdateProductInput {
            id: created.id.clone(),
            name: None,
            price: Some(12.5),
        })
        .await
        .unwrap();

    assert_eq!(output.name, "Widget");
    assert_eq!(output.price, 12.5);
}

#[tokio::test]
async fn rejected_update_keeps_stored_product() {
    let stores = Stores::new();
    let created = CreateProductUseCase::new(stores.products.clone(), silent_products())
        .execute(input("Widget", 10.0))
        .await
        .unwrap();

    let err = UpdateProductUseCase::new(stores.products.clone())
        .execute(UpdateProductInput {
            id: created.id.clone(),
            name: Some("Gadget".into()),
            price: Some(-1.0),
        })
        .await
        .unwrap_err();
    assert_eq!(validation_messages(&err), vec!["Price must be greater than zero"]);

    let stored = FindProductUseCase::new(stores.products.clone())
        .execute(FindProductInput { id: created.id })
        .await
        .unwrap();
    assert_eq!(stored.name, "Widget");
    assert_eq!(stored.price, 10.0);
}

#[tokio::test]
async fn update_unknown_product_is_not_found() {
    let stores = Stores::new();
    let err = UpdateProductUseCase::new(stores.products.clone())
        .execute(UpdateProductInput {
            id: "missing".into(),
            name: Some("Gadget".into()),
            price: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn handler_failure_propagates_and_product_stays_stored() {
    let stores = Stores::new();
    let create = CreateProductUseCase::new(stores.products.clone(), failing(PRODUCT_CREATED));

    let err = create.execute(input("Widget", 9.99)).await.unwrap_err();

    match err {
        UseCaseError::Handler(e) => assert!(e.is::<MailerDown>()),
        other => panic!("Expected Handler error, got {other:?}"),
    }
    assert_eq!(stores.products.len().unwrap(), 1);
}
