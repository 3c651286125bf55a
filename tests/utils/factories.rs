/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use librarium::modules::{
    author::Author,
    book::Book,
    editorial::Editorial,
    organization::{Organization, OrganizationCategory},
    prize::Prize,
    review::Review,
};
use uuid::Uuid;

pub struct AuthorFactory {
    name: String,
    description: Option<String>,
    image: Option<String>,
    birth_date: NaiveDate,
}

impl Default for AuthorFactory {
    fn default() -> Self {
        Self {
            name: "Test Author".to_string(),
            description: None,
            image: None,
            birth_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        }
    }
}

impl AuthorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn build(self) -> Author {
        let mut author = Author::new(self.name, self.birth_date);
        author.description = self.description;
        author.image = self.image;
        author
    }
}

pub struct BookFactory {
    name: String,
    isbn: String,
    image: Option<String>,
    publishing_date: Option<NaiveDate>,
    description: Option<String>,
    editorial_id: Option<Uuid>,
}

impl Default for BookFactory {
    fn default() -> Self {
        Self {
            name: "Test Book".to_string(),
            // Unique by default so parallel fixtures never collide
            isbn: format!("978-{}", rand::random::<u32>() % 900_000_000 + 100_000_000),
            image: None,
            publishing_date: None,
            description: None,
            editorial_id: None,
        }
    }
}

impl BookFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_isbn(mut self, isbn: &str) -> Self {
        self.isbn = isbn.to_string();
        self
    }

    pub fn with_publishing_date(mut self, publishing_date: NaiveDate) -> Self {
        self.publishing_date = Some(publishing_date);
        self
    }

    pub fn with_editorial(mut self, editorial_id: Uuid) -> Self {
        self.editorial_id = Some(editorial_id);
        self
    }

    pub fn build(self) -> Book {
        let mut book = Book::new(self.name, self.isbn);
        book.image = self.image;
        book.publishing_date = self.publishing_date;
        book.description = self.description;
        book.editorial_id = self.editorial_id;
        book
    }
}

pub struct EditorialFactory {
    name: String,
}

impl Default for EditorialFactory {
    fn default() -> Self {
        Self {
            name: format!("Editorial {}", rand::random::<u32>() % 1_000_000),
        }
    }
}

impl EditorialFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn build(self) -> Editorial {
        Editorial::new(self.name)
    }
}

pub struct OrganizationFactory {
    name: String,
    category: OrganizationCategory,
}

impl Default for OrganizationFactory {
    fn default() -> Self {
        Self {
            name: format!("Organization {}", rand::random::<u32>() % 1_000_000),
            category: OrganizationCategory::Foundation,
        }
    }
}

impl OrganizationFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_category(mut self, category: OrganizationCategory) -> Self {
        self.category = category;
        self
    }

    pub fn build(self) -> Organization {
        Organization::new(self.name, self.category)
    }
}

pub struct PrizeFactory {
    name: String,
    description: Option<String>,
    premiation_date: Option<NaiveDate>,
    organization_id: Option<Uuid>,
}

impl Default for PrizeFactory {
    fn default() -> Self {
        Self {
            name: "Test Prize".to_string(),
            description: None,
            premiation_date: None,
            organization_id: None,
        }
    }
}

impl PrizeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_premiation_date(mut self, premiation_date: NaiveDate) -> Self {
        self.premiation_date = Some(premiation_date);
        self
    }

    pub fn with_organization(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    pub fn build(self) -> Prize {
        let mut prize = Prize::new(self.name);
        prize.description = self.description;
        prize.premiation_date = self.premiation_date;
        prize.organization_id = self.organization_id;
        prize
    }
}

pub struct ReviewFactory {
    name: String,
    source: Option<String>,
    description: Option<String>,
}

impl Default for ReviewFactory {
    fn default() -> Self {
        Self {
            name: "Test Review".to_string(),
            source: None,
            description: None,
        }
    }
}

impl ReviewFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn build(self) -> Review {
        let mut review = Review::new(self.name);
        review.source = self.source;
        review.description = self.description;
        review
    }
}
