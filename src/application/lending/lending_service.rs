use crate::config::LendingPolicy;
use crate::domain::{self, LoanPeriod, LoanRecord, commands::LendBook, value_objects::*};
use crate::ports::{LoanRepository, RepositoryError};
use chrono::NaiveDate;
use std::sync::Arc;

use super::errors::{LendingError, Result};

/// 貸出サービス
///
/// 返却期限の決定と、重複貸出の拒否だけを担う。
/// リポジトリはコンストラクタで注入する。
#[derive(Clone)]
pub struct LendingService {
    repository: Arc<dyn LoanRepository>,
    policy: LendingPolicy,
}

impl LendingService {
    /// 既定のポリシー（通常本14日、人気本7日）で作成
    pub fn new(repository: Arc<dyn LoanRepository>) -> Self {
        Self::with_policy(repository, LendingPolicy::default())
    }

    pub fn with_policy(repository: Arc<dyn LoanRepository>, policy: LendingPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 利用者ID・書籍IDは空であってはならない
    /// - 同じ組で貸出中のものがあればエラー
    /// - 人気本は7日、それ以外は14日
    ///
    /// 処理は「確認してから記録」の順で、この層では原子的ではない。
    /// 同時実行時の一意性はリポジトリの`add_loan`が保証し、
    /// その衝突は`DuplicateLoan`として返す。
    ///
    /// # エラー
    /// - InvalidArgument: 入力が不正（リポジトリには触れない）
    /// - DuplicateLoan: 貸出中のものがある、または記録時に衝突した
    /// - Repository: リポジトリの障害
    pub fn lend(&self, user: &User, book: &Book, borrowed_at: NaiveDate) -> Result<LoanRecord> {
        // 1. 入力の検証（返却期限が表現可能かも含めて先に確定させる）
        let due_date = self.validate(user, book, borrowed_at)?;

        // 2. 重複確認
        let has_active_loan = self
            .repository
            .has_active_loan(&user.id, &book.id)
            .map_err(LendingError::Repository)?;

        if has_active_loan {
            return Err(LendingError::DuplicateLoan {
                user_id: user.id.clone(),
                book_id: book.id.clone(),
            });
        }

        // 3. 記録
        self.repository
            .add_loan(&user.id, &book.id, due_date)
            .map_err(|e| match e {
                RepositoryError::Conflict { user_id, book_id } => {
                    LendingError::DuplicateLoan { user_id, book_id }
                }
                other => LendingError::Repository(other),
            })?;

        tracing::debug!(
            user_id = %user.id,
            book_id = %book.id,
            %borrowed_at,
            %due_date,
            popular = book.is_popular,
            "book lent"
        );

        Ok(LoanRecord {
            user_id: user.id.clone(),
            book_id: book.id.clone(),
            due_date,
        })
    }

    /// コマンドで貸し出す
    pub fn execute(&self, cmd: LendBook) -> Result<LoanRecord> {
        self.lend(&cmd.user, &cmd.book, cmd.borrowed_at)
    }

    fn validate(&self, user: &User, book: &Book, borrowed_at: NaiveDate) -> Result<NaiveDate> {
        if user.id.is_blank() {
            return Err(LendingError::InvalidArgument(
                "user id must not be empty".to_string(),
            ));
        }
        if book.id.is_blank() {
            return Err(LendingError::InvalidArgument(
                "book id must not be empty".to_string(),
            ));
        }

        let days = self.policy.days_for(LoanPeriod::for_book(book));
        domain::loan::due_date(borrowed_at, days).ok_or_else(|| {
            LendingError::InvalidArgument(format!(
                "borrowed_at {borrowed_at} plus {days} days is out of the calendar range"
            ))
        })
    }
}
