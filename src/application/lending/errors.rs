use crate::domain::value_objects::{BookId, UserId};
use crate::ports::RepositoryError;
use thiserror::Error;

/// 貸出アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LendingError {
    /// 利用者・書籍・貸出日が不正
    ///
    /// リポジトリへのアクセス前に判定される。
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 同じ利用者が同じ書籍を既に借りている
    #[error("Book {book_id} is already on loan to user {user_id}")]
    DuplicateLoan { user_id: UserId, book_id: BookId },

    /// リポジトリのエラー（そのまま伝播する）
    #[error("Loan repository error")]
    Repository(#[source] RepositoryError),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
