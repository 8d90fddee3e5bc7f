//! Fixed records every new session starts from.

use shelfkeep_core::CatalogResult;

use crate::book::BookRecord;
use crate::catalog::Catalog;

pub fn seed_records() -> Vec<BookRecord> {
    vec![
        BookRecord::new("B-101", "The Great Gatsby", "F. Scott Fitzgerald", 5),
        BookRecord::new("B-102", "Clean Code", "Robert C. Martin", 2),
        BookRecord::new("B-103", "Introduction to Algorithms", "Thomas H. Cormen", 0),
        BookRecord::new("B-104", "Design Patterns", "Erich Gamma", 3),
    ]
}

impl Catalog {
    /// A catalog holding the seed records, in seed order.
    pub fn seeded() -> CatalogResult<Self> {
        Catalog::from_records(seed_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_records_with_one_out_of_stock() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 4);

        let out: Vec<&str> = catalog
            .records()
            .iter()
            .filter(|b| !b.is_available())
            .map(|b| b.book_id().as_str())
            .collect();
        assert_eq!(out, vec!["B-103"]);
    }
}
