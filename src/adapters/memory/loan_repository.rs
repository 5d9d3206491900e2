use crate::domain::value_objects::{BookId, UserId};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, RepositoryError, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// LoanRepositoryのインメモリ実装
///
/// 貸出中の貸出を(利用者, 書籍)の組をキーに保持する。
/// `add_loan`自体が一意性を強制するため、同時に`lend`が走っても
/// 2件目は`RepositoryError::Conflict`になる。
#[derive(Debug, Default)]
pub struct LoanRepository {
    active_loans: Mutex<HashMap<(UserId, BookId), NaiveDate>>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 貸出中の件数
    pub fn len(&self) -> usize {
        self.loans().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans().is_empty()
    }

    /// 貸出中であれば返却期限を返す
    pub fn due_date_of(&self, user_id: &UserId, book_id: &BookId) -> Option<NaiveDate> {
        self.loans()
            .get(&(user_id.clone(), book_id.clone()))
            .copied()
    }

    /// すべての貸出を消去する（テスト間の状態リセット用）
    pub fn clear(&self) {
        self.loans().clear();
    }

    fn loans(&self) -> MutexGuard<'_, HashMap<(UserId, BookId), NaiveDate>> {
        // 保持するのは単純なマップのみで、パニック後も整合性は崩れない
        self.active_loans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl LoanRepositoryTrait for LoanRepository {
    fn has_active_loan(&self, user_id: &UserId, book_id: &BookId) -> Result<bool> {
        Ok(self
            .loans()
            .contains_key(&(user_id.clone(), book_id.clone())))
    }

    fn add_loan(&self, user_id: &UserId, book_id: &BookId, due_date: NaiveDate) -> Result<()> {
        let mut loans = self.loans();
        let key = (user_id.clone(), book_id.clone());

        if loans.contains_key(&key) {
            return Err(RepositoryError::Conflict {
                user_id: key.0,
                book_id: key.1,
            });
        }

        loans.insert(key, due_date);
        tracing::debug!(%user_id, %book_id, %due_date, "loan recorded");
        Ok(())
    }
}
