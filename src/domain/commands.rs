use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Book, User};

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendBook {
    pub user: User,
    pub book: Book,
    pub borrowed_at: NaiveDate,
}
