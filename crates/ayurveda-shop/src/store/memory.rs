use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::info;

use super::RepositoryError;
use crate::cart::{CartItem, CartItemId, CartRepository, NewCartItem, UserId};
use crate::catalog::seed::default_products;
use crate::catalog::{CatalogReader, CatalogWriter, NewProduct, Product, ProductId};
use crate::consultation::{
    default_practitioners, Booking, BookingRepository, NewPractitioner, Practitioner,
    PractitionerDirectory, PractitionerId, PractitionerWriter,
};
use crate::quiz::{
    default_questions, NewQuizQuestion, QuestionBank, QuestionBankWriter, QuestionId,
    QuizQuestion,
};

/// Rows keyed by a serial id. Ids start at 1 and are never reused within one store.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(u32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn values(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: u32) -> Option<T> {
        self.rows.get(&id).cloned()
    }
}

/// Process-local storage backing every repository trait in the crate.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Mutex<Table<Product>>,
    questions: Mutex<Table<QuizQuestion>>,
    cart: Mutex<Table<CartItem>>,
    practitioners: Mutex<Table<Practitioner>>,
    bookings: Mutex<Vec<Booking>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `products` plus the standard question bank and practitioner roster.
    pub fn seeded(products: Vec<NewProduct>) -> Result<Self, RepositoryError> {
        let store = Self::new();
        let product_count = products.len();

        for product in products {
            store.insert_product(product)?;
        }
        for question in default_questions() {
            store.insert_question(question)?;
        }
        for practitioner in default_practitioners() {
            store.insert_practitioner(practitioner)?;
        }

        info!(
            products = product_count,
            questions = lock(&store.questions)?.rows.len(),
            practitioners = lock(&store.practitioners)?.rows.len(),
            "storefront data seeded"
        );
        Ok(store)
    }

    /// Store seeded with the built-in storefront catalog.
    pub fn with_fixtures() -> Result<Self, RepositoryError> {
        Self::seeded(default_products())
    }
}

impl CatalogReader for InMemoryStore {
    fn all_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(lock(&self.products)?.values())
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(lock(&self.products)?.get(id.0))
    }
}

impl CatalogWriter for InMemoryStore {
    fn insert_product(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut table = lock(&self.products)?;
        Ok(table.insert_with(|id| product.into_product(ProductId(id))))
    }
}

impl QuestionBank for InMemoryStore {
    fn all_questions(&self) -> Result<Vec<QuizQuestion>, RepositoryError> {
        Ok(lock(&self.questions)?.values())
    }

    fn question(&self, id: QuestionId) -> Result<Option<QuizQuestion>, RepositoryError> {
        Ok(lock(&self.questions)?.get(id.0))
    }
}

impl QuestionBankWriter for InMemoryStore {
    fn insert_question(&self, question: NewQuizQuestion) -> Result<QuizQuestion, RepositoryError> {
        let mut table = lock(&self.questions)?;
        Ok(table.insert_with(|id| question.into_question(QuestionId(id))))
    }
}

impl CartRepository for InMemoryStore {
    fn items_for_user(&self, user: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let table = lock(&self.cart)?;
        Ok(table
            .rows
            .values()
            .filter(|item| item.user_id == user)
            .cloned()
            .collect())
    }

    fn find(&self, user: UserId, product: ProductId) -> Result<Option<CartItem>, RepositoryError> {
        let table = lock(&self.cart)?;
        Ok(table
            .rows
            .values()
            .find(|item| item.user_id == user && item.product_id == product)
            .cloned())
    }

    fn insert_item(&self, item: NewCartItem) -> Result<CartItem, RepositoryError> {
        let mut table = lock(&self.cart)?;
        Ok(table.insert_with(|id| item.into_item(CartItemId(id))))
    }

    fn update_quantity(
        &self,
        id: CartItemId,
        quantity: u32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut table = lock(&self.cart)?;
        Ok(table.rows.get_mut(&id.0).map(|item| {
            item.quantity = quantity;
            item.clone()
        }))
    }

    fn remove_item(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        let mut table = lock(&self.cart)?;
        Ok(table.rows.remove(&id.0).is_some())
    }
}

impl PractitionerDirectory for InMemoryStore {
    fn all_practitioners(&self) -> Result<Vec<Practitioner>, RepositoryError> {
        Ok(lock(&self.practitioners)?.values())
    }

    fn practitioner(&self, id: PractitionerId) -> Result<Option<Practitioner>, RepositoryError> {
        Ok(lock(&self.practitioners)?.get(id.0))
    }
}

impl PractitionerWriter for InMemoryStore {
    fn insert_practitioner(
        &self,
        practitioner: NewPractitioner,
    ) -> Result<Practitioner, RepositoryError> {
        let mut table = lock(&self.practitioners)?;
        Ok(table.insert_with(|id| practitioner.into_practitioner(PractitionerId(id))))
    }
}

impl BookingRepository for InMemoryStore {
    fn insert_booking(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        let mut bookings = lock(&self.bookings)?;
        let clash = bookings.iter().any(|existing| {
            existing.practitioner_id == booking.practitioner_id
                && existing.overlaps(booking.date, booking.time, booking.duration_minutes)
        });
        if clash {
            return Err(RepositoryError::Conflict);
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    fn bookings_on(
        &self,
        practitioner: PractitionerId,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let bookings = lock(&self.bookings)?;
        Ok(bookings
            .iter()
            .filter(|booking| booking.practitioner_id == practitioner && booking.date == date)
            .cloned()
            .collect())
    }
}
