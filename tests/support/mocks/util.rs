// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicI64, Ordering};

use article_service::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};

use super::time::fixed_now;

/// 常に同じ時刻を返すクロック
#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 呼び出しごとに1分進むクロック
#[derive(Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::minutes(tick)
    }
}
