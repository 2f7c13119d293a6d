//! Database tests

use super::*;
use crate::error::Error;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_tx(amount: f64, date: &str, category: Category, kind: TransactionKind) -> NewTransaction {
        NewTransaction {
            amount,
            date: date.parse().unwrap(),
            description: format!("{} {}", category, date),
            category,
            kind,
        }
    }

    fn new_budget(category: Category, amount: f64, month: Month, year: i32) -> NewBudget {
        NewBudget {
            category,
            amount,
            month,
            year,
        }
    }

    #[test]
    fn test_fresh_db_is_empty() {
        let db = Database::in_memory().unwrap();
        assert!(db.list_transactions().unwrap().is_empty());
        assert!(db.list_budgets(None).unwrap().is_empty());
        assert_eq!(db.count_transactions().unwrap(), 0);
        assert_eq!(db.count_budgets().unwrap(), 0);
    }

    #[test]
    fn test_transaction_crud() {
        let db = Database::in_memory().unwrap();

        let stored = db
            .insert_transaction(&new_tx(
                42.5,
                "2024-03-15",
                Category::FoodAndDining,
                TransactionKind::Expense,
            ))
            .unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.amount, 42.5);
        assert_eq!(stored.category, Category::FoodAndDining);
        assert_eq!(stored.kind, TransactionKind::Expense);
        assert_eq!(stored.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        let fetched = db.get_transaction(stored.id).unwrap().unwrap();
        assert_eq!(fetched.description, stored.description);

        let updated = db
            .update_transaction(
                stored.id,
                &new_tx(10.0, "2024-03-16", Category::Travel, TransactionKind::Income),
            )
            .unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.amount, 10.0);
        assert_eq!(updated.category, Category::Travel);
        assert_eq!(updated.kind, TransactionKind::Income);

        db.delete_transaction(stored.id).unwrap();
        assert!(db.get_transaction(stored.id).unwrap().is_none());
    }

    #[test]
    fn test_transaction_not_found_errors() {
        let db = Database::in_memory().unwrap();

        assert!(db.get_transaction(999).unwrap().is_none());

        let err = db
            .update_transaction(
                999,
                &new_tx(1.0, "2024-01-01", Category::Other, TransactionKind::Expense),
            )
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = db.delete_transaction(999).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_list_transactions_newest_first() {
        let db = Database::in_memory().unwrap();
        db.insert_transaction(&new_tx(1.0, "2024-01-10", Category::Other, TransactionKind::Expense))
            .unwrap();
        db.insert_transaction(&new_tx(2.0, "2024-03-01", Category::Other, TransactionKind::Expense))
            .unwrap();
        db.insert_transaction(&new_tx(3.0, "2024-02-15", Category::Other, TransactionKind::Income))
            .unwrap();

        let list = db.list_transactions().unwrap();
        let dates: Vec<String> = list.iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-15", "2024-01-10"]);
    }

    #[test]
    fn test_same_date_orders_by_id_desc() {
        let db = Database::in_memory().unwrap();
        let a = db
            .insert_transaction(&new_tx(1.0, "2024-01-10", Category::Other, TransactionKind::Expense))
            .unwrap();
        let b = db
            .insert_transaction(&new_tx(2.0, "2024-01-10", Category::Other, TransactionKind::Expense))
            .unwrap();

        let list = db.list_transactions().unwrap();
        assert_eq!(list[0].id, b.id);
        assert_eq!(list[1].id, a.id);
    }

    #[test]
    fn test_budget_crud() {
        let db = Database::in_memory().unwrap();

        let stored = db
            .create_budget(&new_budget(Category::Travel, 500.0, Month::June, 2024))
            .unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.category, Category::Travel);
        assert_eq!(stored.month, Month::June);
        assert_eq!(stored.year, 2024);

        let updated = db
            .update_budget(
                stored.id,
                &new_budget(Category::Travel, 650.0, Month::July, 2024),
            )
            .unwrap();
        assert_eq!(updated.amount, 650.0);
        assert_eq!(updated.month, Month::July);

        db.delete_budget(stored.id).unwrap();
        assert!(db.get_budget(stored.id).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_budget_rejected_and_original_kept() {
        let db = Database::in_memory().unwrap();

        let original = db
            .create_budget(&new_budget(Category::FoodAndDining, 120.0, Month::June, 2024))
            .unwrap();

        let err = db
            .create_budget(&new_budget(Category::FoodAndDining, 999.0, Month::June, 2024))
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        // Existing record untouched
        let budgets = db.list_budgets(None).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].id, original.id);
        assert_eq!(budgets[0].amount, 120.0);
    }

    #[test]
    fn test_same_category_different_scope_allowed() {
        let db = Database::in_memory().unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::June, 2024))
            .unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::July, 2024))
            .unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::June, 2025))
            .unwrap();
        assert_eq!(db.count_budgets().unwrap(), 3);
    }

    #[test]
    fn test_budget_update_collision_is_conflict() {
        let db = Database::in_memory().unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::June, 2024))
            .unwrap();
        let other = db
            .create_budget(&new_budget(Category::Travel, 100.0, Month::July, 2024))
            .unwrap();

        let err = db
            .update_budget(
                other.id,
                &new_budget(Category::Travel, 100.0, Month::June, 2024),
            )
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn test_list_budgets_scoped_to_month_year() {
        let db = Database::in_memory().unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::June, 2024))
            .unwrap();
        db.create_budget(&new_budget(Category::Shopping, 50.0, Month::June, 2024))
            .unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::July, 2024))
            .unwrap();
        db.create_budget(&new_budget(Category::Travel, 100.0, Month::June, 2023))
            .unwrap();

        let scoped = db.list_budgets(Some((Month::June, 2024))).unwrap();
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|b| b.month == Month::June && b.year == 2024));

        let all = db.list_budgets(None).unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_budget_not_found_errors() {
        let db = Database::in_memory().unwrap();

        let err = db
            .update_budget(42, &new_budget(Category::Other, 1.0, Month::January, 2024))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = db.delete_budget(42).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
