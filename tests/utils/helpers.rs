/// Test helper functions and service builders
use std::sync::Arc;

use librarium::modules::{
    author::{AuthorBooksService, AuthorRepository, AuthorRepositoryImpl, AuthorService},
    book::{
        BookAuthorsService, BookEditorialService, BookRepository, BookRepositoryImpl, BookService,
    },
    editorial::{
        EditorialBooksService, EditorialRepository, EditorialRepositoryImpl, EditorialService,
    },
    organization::{OrganizationRepository, OrganizationRepositoryImpl, OrganizationService},
    prize::{PrizeAuthorService, PrizeRepository, PrizeRepositoryImpl, PrizeService},
    review::{ReviewRepository, ReviewRepositoryImpl, ReviewService},
};
use librarium::shared::domain::value_objects::ReplacePolicy;
use librarium::shared::utils::logger::init_logger;

pub struct TestServices {
    pub author_service: Arc<AuthorService>,
    pub book_service: Arc<BookService>,
    pub editorial_service: Arc<EditorialService>,
    pub organization_service: Arc<OrganizationService>,
    pub prize_service: Arc<PrizeService>,
    pub review_service: Arc<ReviewService>,
    pub author_books: Arc<AuthorBooksService>,
    pub book_authors: Arc<BookAuthorsService>,
    pub book_editorial: Arc<BookEditorialService>,
    pub editorial_books: Arc<EditorialBooksService>,
    pub prize_author: Arc<PrizeAuthorService>,
    pub book_repository: Arc<dyn BookRepository>,
    pub review_repository: Arc<dyn ReviewRepository>,
}

/// Build the full service graph over fresh in-memory stores, using the
/// default additive replace policy.
pub fn build_test_services() -> TestServices {
    build_test_services_with_policy(ReplacePolicy::default())
}

pub fn build_test_services_with_policy(policy: ReplacePolicy) -> TestServices {
    init_logger();

    let author_repo: Arc<dyn AuthorRepository> = Arc::new(AuthorRepositoryImpl::new());
    let book_repo: Arc<dyn BookRepository> = Arc::new(BookRepositoryImpl::new());
    let editorial_repo: Arc<dyn EditorialRepository> = Arc::new(EditorialRepositoryImpl::new());
    let organization_repo: Arc<dyn OrganizationRepository> =
        Arc::new(OrganizationRepositoryImpl::new());
    let prize_repo: Arc<dyn PrizeRepository> = Arc::new(PrizeRepositoryImpl::new());
    let review_repo: Arc<dyn ReviewRepository> = Arc::new(ReviewRepositoryImpl::new());

    let author_service = Arc::new(AuthorService::new(
        author_repo.clone(),
        book_repo.clone(),
        prize_repo.clone(),
    ));
    let book_service = Arc::new(BookService::new(
        book_repo.clone(),
        editorial_repo.clone(),
        review_repo.clone(),
    ));
    let editorial_service = Arc::new(EditorialService::new(
        editorial_repo.clone(),
        book_repo.clone(),
    ));
    let organization_service = Arc::new(OrganizationService::new(
        organization_repo.clone(),
        prize_repo.clone(),
    ));
    let prize_service = Arc::new(PrizeService::new(
        prize_repo.clone(),
        organization_repo.clone(),
    ));
    let review_service = Arc::new(ReviewService::new(review_repo.clone(), book_repo.clone()));

    let author_books = Arc::new(
        AuthorBooksService::new(author_repo.clone(), book_repo.clone()).with_policy(policy),
    );
    let book_authors = Arc::new(
        BookAuthorsService::new(book_repo.clone(), author_repo.clone()).with_policy(policy),
    );
    let book_editorial = Arc::new(BookEditorialService::new(
        book_repo.clone(),
        editorial_repo.clone(),
    ));
    let editorial_books = Arc::new(
        EditorialBooksService::new(editorial_repo.clone(), book_repo.clone()).with_policy(policy),
    );
    let prize_author = Arc::new(PrizeAuthorService::new(
        prize_repo.clone(),
        author_repo.clone(),
    ));

    TestServices {
        author_service,
        book_service,
        editorial_service,
        organization_service,
        prize_service,
        review_service,
        author_books,
        book_authors,
        book_editorial,
        editorial_books,
        prize_author,
        book_repository: book_repo,
        review_repository: review_repo,
    }
}
