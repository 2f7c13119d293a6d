//! Domain models for Tally

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending category - the fixed vocabulary shared by transactions and budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Health & Fitness")]
    HealthAndFitness,
    Travel,
    Education,
    Business,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Gifts & Donations")]
    GiftsAndDonations,
    Investments,
    Other,
}

/// All categories in display order
pub const CATEGORIES: [Category; 13] = [
    Category::FoodAndDining,
    Category::Transportation,
    Category::Shopping,
    Category::Entertainment,
    Category::BillsAndUtilities,
    Category::HealthAndFitness,
    Category::Travel,
    Category::Education,
    Category::Business,
    Category::PersonalCare,
    Category::GiftsAndDonations,
    Category::Investments,
    Category::Other,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::HealthAndFitness => "Health & Fitness",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Business => "Business",
            Self::PersonalCare => "Personal Care",
            Self::GiftsAndDonations => "Gifts & Donations",
            Self::Investments => "Investments",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CATEGORIES
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Calendar month a budget is scoped to, stored by its full English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Calendar number, 1 = January
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Three-letter abbreviation used in chart labels ("Jan", "Feb", ...)
    pub fn abbrev(&self) -> &'static str {
        &self.as_str()[..3]
    }

    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let months = [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ];
        months
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded money movement, income or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Always positive; `kind` carries the direction
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated transaction ready for insertion
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub kind: TransactionKind,
}

/// A spending cap for one category in one calendar month/year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: Category,
    pub amount: f64,
    pub month: Month,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated budget ready for insertion
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub category: Category,
    pub amount: f64,
    pub month: Month,
    pub year: i32,
}

/// One bucket of the trailing monthly expense series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpense {
    /// Label like "Jan 2024"
    pub month: String,
    pub amount: f64,
}

/// Expense total for one category, with its share of all expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub category: Category,
    pub amount: f64,
    /// Share of total expenses, rounded half-up to a whole percent
    pub percentage: i64,
}

/// The full analytics bundle computed from all transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub monthly_expenses: Vec<MonthlyExpense>,
    pub category_breakdown: Vec<CategoryExpense>,
    pub recent_transactions: Vec<Transaction>,
    pub total_transactions: i64,
    pub total_expenses: f64,
    pub total_income: f64,
}

/// How far a budget has been consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Success,
    Warning,
    Danger,
}

impl BudgetStatus {
    /// Classify a percentage-of-budget value. Boundaries are exact:
    /// 100 and above is danger, 80 up to (but not including) 100 is warning.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Danger
        } else if percentage >= 80.0 {
            Self::Warning
        } else {
            Self::Success
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spent amount and consumed share for a single budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub spent: f64,
    /// Uncapped - exceeds 100 when the budget is blown
    pub percentage: f64,
}

/// Full progress row for one budget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgressRow {
    pub budget_id: i64,
    pub category: Category,
    /// The budgeted cap
    pub budget: f64,
    pub spent: f64,
    /// Never negative
    pub remaining: f64,
    pub percentage: f64,
    pub status: BudgetStatus,
}

/// Per-budget rows plus the overall roll-up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub budgets: Vec<BudgetProgressRow>,
    pub total_budget: f64,
    pub total_spent: f64,
    pub percentage: f64,
    pub status: BudgetStatus,
}
