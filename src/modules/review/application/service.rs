use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::review::Review, repositories::review_repository::ReviewRepository,
};
use crate::modules::book::BookRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Reviews are always addressed through their parent book: every
/// operation takes the book id out-of-band and a review never resolves
/// under a book it does not belong to.
pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    book_repo: Arc<dyn BookRepository>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewRepository>, book_repo: Arc<dyn BookRepository>) -> Self {
        Self {
            review_repo,
            book_repo,
        }
    }

    pub async fn create_review(&self, book_id: &Uuid, mut review: Review) -> AppResult<Review> {
        log_debug!("Creating review '{}' under book {}", review.name, book_id);

        self.require_book(book_id).await?;

        review.book_id = Some(*book_id);
        let saved = self.review_repo.save(&review).await?;

        log_info!("Created review {} under book {}", saved.id, book_id);
        Ok(saved)
    }

    pub async fn get_reviews(&self, book_id: &Uuid) -> AppResult<Vec<Review>> {
        self.require_book(book_id).await?;
        self.review_repo.find_by_book(book_id).await
    }

    pub async fn get_review(&self, book_id: &Uuid, review_id: &Uuid) -> AppResult<Review> {
        self.require_book(book_id).await?;

        self.review_repo
            .find_by_book_and_id(book_id, review_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Review with ID {} is not associated to book {}",
                    review_id, book_id
                ))
            })
    }

    pub async fn update_review(
        &self,
        book_id: &Uuid,
        review_id: &Uuid,
        mut review: Review,
    ) -> AppResult<Review> {
        self.get_review(book_id, review_id).await?;

        // The path ids win over whatever the payload carries
        review.id = *review_id;
        review.book_id = Some(*book_id);
        self.review_repo.update(&review).await
    }

    pub async fn delete_review(&self, book_id: &Uuid, review_id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting review {} under book {}", review_id, book_id);

        let review = self.get_review(book_id, review_id).await?;
        self.review_repo.delete(&review.id).await?;

        log_info!("Deleted review {} under book {}", review_id, book_id);
        Ok(())
    }

    async fn require_book(&self, book_id: &Uuid) -> AppResult<()> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))?;
        Ok(())
    }
}
