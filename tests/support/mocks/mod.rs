// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール

pub mod article_repos;
pub mod time;
pub mod util;

pub use article_repos::{ConcurrentlyDeletedRepo, FailingArticleRepo, InMemoryArticleRepo};
pub use time::fixed_now;
pub use util::{FixedClock, TickingClock};
