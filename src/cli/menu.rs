//! Main menu choices
//!
//! The menu is the whole CLI surface: five numbered entries read as a token.

/// Menu text shown before each choice
pub const MENU: &str = "\n--- Personal Finance Manager ---\n\
1. Add Income\n\
2. Add Expense\n\
3. View Transactions\n\
4. View Balance\n\
5. Exit\n\
--------------------------------\n";

/// Prompt for the choice token
pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    View,
    Balance,
    Exit,
}

impl MenuChoice {
    /// Match a choice token exactly; surrounding whitespace is not ignored
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::AddIncome),
            "2" => Some(Self::AddExpense),
            "3" => Some(Self::View),
            "4" => Some(Self::Balance),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}
