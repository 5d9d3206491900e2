use crate::domain::value_objects::{BookId, UserId};
use chrono::NaiveDate;
use thiserror::Error;

/// リポジトリのエラー
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 同じ利用者・書籍の組に貸出中のレコードが既にある（一意制約違反）
    #[error("active loan already exists for user {user_id} and book {book_id}")]
    Conflict { user_id: UserId, book_id: BookId },

    /// ストレージ側の障害
    #[error("repository backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 貸出リポジトリポート
///
/// 貸出サービスが依存する唯一の外部境界。
/// 実装（インメモリ、データベースなど）は呼び出し側が注入する。
pub trait LoanRepository: Send + Sync {
    /// 指定の組に未返却の貸出があるか
    ///
    /// 貸出処理ではいかなる更新よりも前に呼ばれる。
    fn has_active_loan(&self, user_id: &UserId, book_id: &BookId) -> Result<bool>;

    /// 新しい貸出を記録する
    ///
    /// 同時実行下の重複は、実装側で`RepositoryError::Conflict`として報告すること。
    fn add_loan(&self, user_id: &UserId, book_id: &BookId, due_date: NaiveDate) -> Result<()>;
}
