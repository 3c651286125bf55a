mod utils;

use librarium::shared::errors::AppError;
use utils::{
    factories::{BookFactory, EditorialFactory, ReviewFactory},
    helpers,
};

#[tokio::test]
async fn review_is_persisted_under_its_book() {
    let services = helpers::build_test_services();

    let editorial = services
        .editorial_service
        .create_editorial(EditorialFactory::new().build())
        .await
        .unwrap();
    let book = services
        .book_service
        .create_book(BookFactory::new().with_editorial(editorial.id).build())
        .await
        .unwrap();

    let created = services
        .review_service
        .create_review(&book.id, ReviewFactory::new().with_source("El País").build())
        .await
        .expect("review creation should succeed");

    assert_eq!(created.book_id, Some(book.id));

    let listed = services.review_service.get_reviews(&book.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[tokio::test]
async fn create_review_under_missing_book_is_not_found() {
    let services = helpers::build_test_services();

    let result = services
        .review_service
        .create_review(&uuid::Uuid::new_v4(), ReviewFactory::new().build())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn review_does_not_resolve_under_another_book() {
    let services = helpers::build_test_services();

    let editorial = services
        .editorial_service
        .create_editorial(EditorialFactory::new().build())
        .await
        .unwrap();
    let book = services
        .book_service
        .create_book(BookFactory::new().with_editorial(editorial.id).build())
        .await
        .unwrap();
    let other_book = services
        .book_service
        .create_book(BookFactory::new().with_editorial(editorial.id).build())
        .await
        .unwrap();

    let review = services
        .review_service
        .create_review(&book.id, ReviewFactory::new().build())
        .await
        .unwrap();

    // Fetching under the wrong parent fails
    let misfetched = services
        .review_service
        .get_review(&other_book.id, &review.id)
        .await;
    assert!(matches!(misfetched, Err(AppError::NotFound(_))));

    // So does deleting; the review stays with its real book
    let misdeleted = services
        .review_service
        .delete_review(&other_book.id, &review.id)
        .await;
    assert!(matches!(misdeleted, Err(AppError::NotFound(_))));

    let still_there = services
        .review_service
        .get_review(&book.id, &review.id)
        .await;
    assert!(still_there.is_ok());
}

#[tokio::test]
async fn update_review_keeps_id_and_book() {
    let services = helpers::build_test_services();

    let editorial = services
        .editorial_service
        .create_editorial(EditorialFactory::new().build())
        .await
        .unwrap();
    let book = services
        .book_service
        .create_book(BookFactory::new().with_editorial(editorial.id).build())
        .await
        .unwrap();
    let review = services
        .review_service
        .create_review(&book.id, ReviewFactory::new().build())
        .await
        .unwrap();

    let payload = ReviewFactory::new().with_name("Updated Review").build();
    let updated = services
        .review_service
        .update_review(&book.id, &review.id, payload)
        .await
        .unwrap();

    assert_eq!(updated.id, review.id);
    assert_eq!(updated.book_id, Some(book.id));
    assert_eq!(updated.name, "Updated Review");
}

#[tokio::test]
async fn delete_review_under_its_book_succeeds() {
    let services = helpers::build_test_services();

    let editorial = services
        .editorial_service
        .create_editorial(EditorialFactory::new().build())
        .await
        .unwrap();
    let book = services
        .book_service
        .create_book(BookFactory::new().with_editorial(editorial.id).build())
        .await
        .unwrap();
    let review = services
        .review_service
        .create_review(&book.id, ReviewFactory::new().build())
        .await
        .unwrap();

    services
        .review_service
        .delete_review(&book.id, &review.id)
        .await
        .unwrap();

    let gone = services.review_service.get_review(&book.id, &review.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));
}
