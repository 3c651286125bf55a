use chrono::{NaiveDate, Utc};

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// ISBN format check applied on create and update. Uniqueness is a
    /// separate store lookup and is only enforced on create.
    pub fn validate_isbn(isbn: &str) -> Result<(), AppError> {
        if isbn.is_empty() {
            return Err(AppError::IllegalOperation("ISBN is not valid".to_string()));
        }
        Ok(())
    }

    /// An author cannot be born after the day the record is created.
    pub fn validate_birth_date(birth_date: NaiveDate) -> Result<(), AppError> {
        if birth_date > Utc::now().date_naive() {
            return Err(AppError::IllegalOperation(
                "Birth date is after the current date".to_string(),
            ));
        }
        Ok(())
    }
}
