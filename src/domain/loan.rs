use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Book, BookId, UserId};

/// 貸出期間（日数）- 通常本
pub const LOAN_PERIOD_DAYS: u64 = 14;

/// 貸出期間（日数）- 人気本
pub const POPULAR_LOAN_PERIOD_DAYS: u64 = 7;

/// 貸出期間
///
/// 書籍の人気本フラグから決まる。それ以外の属性は期間に影響しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanPeriod {
    Normal,
    Popular,
}

impl LoanPeriod {
    pub fn for_book(book: &Book) -> Self {
        if book.is_popular {
            LoanPeriod::Popular
        } else {
            LoanPeriod::Normal
        }
    }

    /// 既定の日数
    pub fn days(&self) -> u64 {
        match self {
            LoanPeriod::Normal => LOAN_PERIOD_DAYS,
            LoanPeriod::Popular => POPULAR_LOAN_PERIOD_DAYS,
        }
    }
}

/// 貸出結果
///
/// lendが成功するたびに1つ作られ、以後変更されない。
/// 永続化はリポジトリの責務であり、この値自体は保存されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub user_id: UserId,
    pub book_id: BookId,
    pub due_date: NaiveDate,
}

/// 純粋関数：返却期限を計算する
///
/// 暦日で加算する。タイムゾーンは考慮しない。
/// 表現可能な日付の範囲を超える場合は`None`。
pub fn due_date(borrowed_at: NaiveDate, period_days: u64) -> Option<NaiveDate> {
    borrowed_at.checked_add_days(Days::new(period_days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_loan_period_for_book() {
        assert_eq!(LoanPeriod::for_book(&Book::normal("B1")), LoanPeriod::Normal);
        assert_eq!(LoanPeriod::for_book(&Book::popular("B2")), LoanPeriod::Popular);
        assert_eq!(LoanPeriod::Normal.days(), 14);
        assert_eq!(LoanPeriod::Popular.days(), 7);
    }

    #[test]
    fn test_due_date_normal() {
        assert_eq!(due_date(date(2025, 1, 1), 14), Some(date(2025, 1, 15)));
    }

    #[test]
    fn test_due_date_popular() {
        assert_eq!(due_date(date(2025, 1, 1), 7), Some(date(2025, 1, 8)));
    }

    // 月末・年末・うるう年をまたぐ
    #[test]
    fn test_due_date_crosses_boundaries() {
        assert_eq!(due_date(date(2024, 2, 20), 14), Some(date(2024, 3, 5)));
        assert_eq!(due_date(date(2025, 2, 20), 14), Some(date(2025, 3, 6)));
        assert_eq!(due_date(date(2025, 12, 28), 7), Some(date(2026, 1, 4)));
    }

    #[test]
    fn test_due_date_out_of_range() {
        assert_eq!(due_date(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_loan_record_serializes_due_date_as_iso_date() {
        let record = LoanRecord {
            user_id: UserId::new("U1"),
            book_id: BookId::new("B1"),
            due_date: date(2025, 1, 15),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"user_id": "U1", "book_id": "B1", "due_date": "2025-01-15"})
        );
    }
}
