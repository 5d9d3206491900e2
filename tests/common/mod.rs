#![allow(dead_code)]

use book_lending::domain::value_objects::{BookId, UserId};
use book_lending::ports::loan_repository::{self, LoanRepository, RepositoryError};
use chrono::NaiveDate;
use std::sync::Mutex;

/// テスト用のサブスクライバを初期化（多重呼び出し可）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("book_lending=debug")
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// add_loanの振る舞い
pub enum AddLoanOutcome {
    Ok,
    Conflict,
    Fail(&'static str),
}

/// 呼び出しを記録するスタブリポジトリ
pub struct RecordingRepository {
    active: bool,
    fail_lookup: Option<&'static str>,
    add_outcome: AddLoanOutcome,
    pub lookups: Mutex<Vec<(UserId, BookId)>>,
    pub added: Mutex<Vec<(UserId, BookId, NaiveDate)>>,
}

impl RecordingRepository {
    /// 貸出中なし
    pub fn empty() -> Self {
        Self {
            active: false,
            fail_lookup: None,
            add_outcome: AddLoanOutcome::Ok,
            lookups: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    /// 常に貸出中あり
    pub fn with_active_loan() -> Self {
        Self {
            active: true,
            ..Self::empty()
        }
    }

    pub fn failing_lookup(message: &'static str) -> Self {
        Self {
            fail_lookup: Some(message),
            ..Self::empty()
        }
    }

    pub fn with_add_outcome(add_outcome: AddLoanOutcome) -> Self {
        Self {
            add_outcome,
            ..Self::empty()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn added(&self) -> Vec<(UserId, BookId, NaiveDate)> {
        self.added.lock().unwrap().clone()
    }
}

impl LoanRepository for RecordingRepository {
    fn has_active_loan(&self, user_id: &UserId, book_id: &BookId) -> loan_repository::Result<bool> {
        self.lookups
            .lock()
            .unwrap()
            .push((user_id.clone(), book_id.clone()));
        match self.fail_lookup {
            Some(message) => Err(RepositoryError::Backend(message.into())),
            None => Ok(self.active),
        }
    }

    fn add_loan(
        &self,
        user_id: &UserId,
        book_id: &BookId,
        due_date: NaiveDate,
    ) -> loan_repository::Result<()> {
        self.added
            .lock()
            .unwrap()
            .push((user_id.clone(), book_id.clone(), due_date));
        match self.add_outcome {
            AddLoanOutcome::Ok => Ok(()),
            AddLoanOutcome::Conflict => Err(RepositoryError::Conflict {
                user_id: user_id.clone(),
                book_id: book_id.clone(),
            }),
            AddLoanOutcome::Fail(message) => Err(RepositoryError::Backend(message.into())),
        }
    }
}
