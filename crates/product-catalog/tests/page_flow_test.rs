use product_catalog::api::{ApiError, FakeCatalogApi, Operation};
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{Comment, CommentId, Product, ProductId, Size};
use product_catalog::page::{FormMode, ListPage, Modal, PageError};
use product_catalog::sort::SortOrder;
use product_catalog::validation::Field;
use product_catalog::view::ListStatus;
use std::sync::Arc;

fn product(id: u64, name: &str, count: u32, weight: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        image_url: format!("https://img.example/{id}.png"),
        count,
        size: Size {
            width: 30.0,
            height: 40.0,
        },
        weight: weight.to_string(),
        comments: vec![],
    }
}

fn comment(id: u64, product_id: u64) -> Comment {
    Comment {
        id: CommentId(id),
        product_id: ProductId(product_id),
        description: format!("comment {id}"),
        date: "2024-06-01".to_string(),
    }
}

async fn mounted(api: Arc<FakeCatalogApi>) -> (CatalogSystem, ListPage) {
    let system = CatalogSystem::with_api(api, 8);
    let page = ListPage::new(system.product_client.clone(), system.comment_client.clone());
    page.mount().await.unwrap();
    (system, page)
}

async fn close(system: CatalogSystem, page: ListPage) {
    drop(page);
    system.shutdown().await.unwrap();
}

fn fill_valid(page: &mut ListPage) {
    for (field, value) in [
        (Field::Name, "Stool"),
        (Field::ImageUrl, "https://img.example/stool.png"),
        (Field::Count, "6"),
        (Field::Weight, "3kg"),
        (Field::Width, "35"),
        (Field::Height, "60"),
    ] {
        page.update_field(field, value).unwrap();
    }
}

fn card_names(page: &ListPage) -> Vec<String> {
    page.list_view().cards.into_iter().map(|c| c.name).collect()
}

#[tokio::test]
async fn test_mount_loads_both_stores() {
    let api = Arc::new(FakeCatalogApi::new(
        vec![product(1, "Pear", 1, "1g"), product(2, "apple", 1, "1g")],
        vec![comment(1, 1)],
    ));
    let (system, mut page) = mounted(api.clone()).await;

    let list = page.list_view();
    assert_eq!(list.title, "Product List");
    assert_eq!(list.status, ListStatus::Ready);
    assert_eq!(card_names(&page), vec!["apple", "Pear"]);

    page.open_details(ProductId(1)).await.unwrap();
    let details = page.details_view().unwrap();
    assert_eq!(details.comments, vec![comment(1, 1)]);
    page.close_details();
    assert_eq!(page.modal(), Modal::Closed);

    let mut calls = api.calls();
    calls.sort_by_key(|op| format!("{op:?}"));
    assert_eq!(calls, vec![Operation::FetchComments, Operation::FetchProducts]);

    close(system, page).await;
}

#[tokio::test]
async fn test_mount_failure_is_shown_on_the_list() {
    let api = Arc::new(FakeCatalogApi::default());
    api.fail_next(ApiError::application(
        Operation::FetchProducts,
        500,
        Some("Database offline".to_string()),
    ));
    let system = CatalogSystem::with_api(api, 8);
    let page = ListPage::new(system.product_client.clone(), system.comment_client.clone());

    let err = page.mount().await.unwrap_err();
    assert_eq!(err.to_string(), "Database offline");

    let list = page.list_view();
    assert_eq!(list.status.text().as_deref(), Some("Error: Database offline"));
    assert_eq!(list.empty_message, Some("No products found"));

    close(system, page).await;
}

#[tokio::test]
async fn test_add_flow() {
    let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Lamp", 1, "1g")], vec![]));
    let (system, mut page) = mounted(api.clone()).await;

    page.open_add_form().await.unwrap();
    let form = page.form_view().unwrap();
    assert_eq!(form.title, "Add New Product");
    assert_eq!(form.values.name, "");
    assert!(form.errors.is_empty());

    fill_valid(&mut page);
    let created = page.submit_form().await.unwrap();
    assert_eq!(created.id, ProductId(2));
    assert_eq!(page.modal(), Modal::Closed);
    assert_eq!(card_names(&page), vec!["Lamp", "Stool"]);
    assert_eq!(
        api.calls()
            .iter()
            .filter(|op| **op == Operation::AddProduct)
            .count(),
        1
    );

    close(system, page).await;
}

#[tokio::test]
async fn test_negative_count_blocks_submit() {
    let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Lamp", 1, "1g")], vec![]));
    let (system, mut page) = mounted(api.clone()).await;

    page.open_edit_form(ProductId(1)).await.unwrap();
    let errors = page.update_field(Field::Count, "-1").unwrap();
    assert_eq!(
        errors.get(&Field::Count).map(String::as_str),
        Some("Count must be non-negative")
    );

    let err = page.submit_form().await.unwrap_err();
    assert!(matches!(err, PageError::Invalid(errors) if errors.contains_key(&Field::Count)));
    assert_eq!(
        page.modal(),
        Modal::Form(FormMode::Edit {
            product_id: ProductId(1)
        })
    );
    assert!(!api.calls().contains(&Operation::EditProduct));
    assert!(!api.calls().contains(&Operation::AddProduct));

    close(system, page).await;
}

#[tokio::test]
async fn test_edit_prefills_and_keeps_identity() {
    let mut lamp = product(1, "Lamp", 4, "900g");
    lamp.comments = vec![comment(7, 1)];
    let api = Arc::new(FakeCatalogApi::new(vec![lamp, product(2, "Rug", 1, "2kg")], vec![]));
    let (system, mut page) = mounted(api.clone()).await;

    page.open_edit_form(ProductId(1)).await.unwrap();
    let form = page.form_view().unwrap();
    assert_eq!(form.title, "Edit Product");
    assert_eq!(form.values.name, "Lamp");
    assert_eq!(form.values.count, "4");
    assert_eq!(form.values.weight, "900g");
    assert_eq!(
        system.product_client.state().editing_target.map(|p| p.id),
        Some(ProductId(1))
    );

    page.update_field(Field::Name, "Floor lamp").unwrap();
    let saved = page.submit_form().await.unwrap();
    assert_eq!(saved.id, ProductId(1));
    assert_eq!(saved.comments, vec![comment(7, 1)]);

    let state = system.product_client.state();
    assert_eq!(state.editing_target, None);
    assert_eq!(state.products.items[0].name, "Floor lamp");
    assert_eq!(state.products.items.len(), 2);

    close(system, page).await;
}

#[tokio::test]
async fn test_switching_to_add_resets_form() {
    let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Lamp", 4, "900g")], vec![]));
    let (system, mut page) = mounted(api).await;

    page.open_edit_form(ProductId(1)).await.unwrap();
    page.cancel_form().await.unwrap();
    assert_eq!(page.modal(), Modal::Closed);
    assert_eq!(system.product_client.state().editing_target, None);

    page.open_edit_form(ProductId(1)).await.unwrap();
    page.open_add_form().await.unwrap();
    assert_eq!(page.form().name, "");
    assert_eq!(page.modal(), Modal::Form(FormMode::Add));
    assert_eq!(system.product_client.state().editing_target, None);

    close(system, page).await;
}

#[tokio::test]
async fn test_leaving_the_form_clears_edit_target() {
    let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Lamp", 4, "900g")], vec![]));
    let (system, mut page) = mounted(api.clone()).await;

    page.open_edit_form(ProductId(1)).await.unwrap();
    page.request_delete(ProductId(1)).await.unwrap();
    assert_eq!(
        page.modal(),
        Modal::ConfirmDelete {
            product_id: ProductId(1),
            over_details: false
        }
    );
    assert_eq!(system.product_client.state().editing_target, None);
    assert_eq!(page.form().name, "");
    page.cancel_delete().unwrap();
    assert_eq!(page.modal(), Modal::Closed);

    page.open_edit_form(ProductId(1)).await.unwrap();
    page.open_details(ProductId(1)).await.unwrap();
    assert_eq!(
        page.modal(),
        Modal::Details {
            product_id: ProductId(1)
        }
    );
    assert_eq!(system.product_client.state().editing_target, None);
    assert!(page.form_view().is_none());
    assert!(!api.calls().contains(&Operation::EditProduct));

    close(system, page).await;
}

#[tokio::test]
async fn test_failed_submit_still_closes_form() {
    let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Lamp", 4, "900g")], vec![]));
    let (system, mut page) = mounted(api.clone()).await;

    page.open_edit_form(ProductId(1)).await.unwrap();
    api.fail_next(ApiError::network(Operation::EditProduct, "reset"));
    let err = page.submit_form().await.unwrap_err();
    assert_eq!(err.to_string(), "Network error during editing product");

    assert_eq!(page.modal(), Modal::Closed);
    let state = system.product_client.state();
    assert_eq!(state.editing_target, None);
    assert_eq!(
        state.products.error.as_deref(),
        Some("Network error during editing product")
    );

    close(system, page).await;
}

#[tokio::test]
async fn test_cancel_delete_keeps_details_open() {
    let api = Arc::new(FakeCatalogApi::new(vec![product(1, "Lamp", 1, "1g")], vec![]));
    let (system, mut page) = mounted(api.clone()).await;

    page.open_details(ProductId(1)).await.unwrap();
    page.request_delete(ProductId(1)).await.unwrap();
    assert!(page.details_view().is_some());
    page.cancel_delete().unwrap();

    assert_eq!(
        page.modal(),
        Modal::Details {
            product_id: ProductId(1)
        }
    );
    assert!(!api.calls().contains(&Operation::DeleteProduct));

    close(system, page).await;
}

#[tokio::test]
async fn test_confirm_delete_closes_both_and_removes() {
    let api = Arc::new(FakeCatalogApi::new(
        vec![product(1, "Lamp", 1, "1g"), product(2, "Rug", 1, "1g")],
        vec![],
    ));
    let (system, mut page) = mounted(api).await;

    page.open_details(ProductId(1)).await.unwrap();
    page.request_delete(ProductId(1)).await.unwrap();
    assert_eq!(page.confirm_delete().await.unwrap(), ProductId(1));

    assert_eq!(page.modal(), Modal::Closed);
    assert!(page.details_view().is_none());
    assert_eq!(card_names(&page), vec!["Rug"]);

    close(system, page).await;
}

#[tokio::test]
async fn test_sort_order_changes_card_order() {
    let api = Arc::new(FakeCatalogApi::new(
        vec![
            product(1, "A", 9, "10kg"),
            product(2, "B", 3, "2kg"),
            product(3, "C", 5, "33kg"),
        ],
        vec![],
    ));
    let (system, mut page) = mounted(api).await;

    page.set_sort_order(SortOrder::Count);
    assert_eq!(card_names(&page), vec!["B", "C", "A"]);

    page.set_sort_order(SortOrder::Weight);
    assert_eq!(card_names(&page), vec!["B", "A", "C"]);

    close(system, page).await;
}
