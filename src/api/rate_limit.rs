//! Per-caller admission control for the calculation endpoint.
//!
//! Each caller (client IP) gets `permit_limit` requests per fixed window.
//! Requests beyond that are queued, up to `queue_limit`, and released in
//! arrival order as later windows open. Once the queue is full further
//! requests are rejected immediately.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::RateLimitConfig;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Number of tracked callers above which idle entries are purged.
const PURGE_THRESHOLD: usize = 1024;

/// Outcome of asking the limiter to admit a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A permit is available in the current window.
    Immediate,
    /// The request holds a queue slot and may proceed at `until`.
    Queued {
        /// Start of the window the request was assigned to.
        until: Instant,
    },
    /// Both the window permits and the queue are exhausted.
    Rejected,
}

/// Slots handed out to one caller, counted from the start of its current window.
#[derive(Debug)]
struct CallerWindow {
    window_start: Instant,
    reserved: u64,
}

impl CallerWindow {
    /// Rolls the window forward to the one containing `now`, releasing the
    /// permits of every window that has fully elapsed.
    fn advance(&mut self, now: Instant, window: Duration, permits: u64) {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < window {
            return;
        }
        let windows_elapsed = elapsed.as_nanos() / window.as_nanos();
        let remainder = elapsed.as_nanos() % window.as_nanos();
        self.window_start = now - Duration::from_nanos(remainder as u64);
        let released = u64::try_from(windows_elapsed)
            .unwrap_or(u64::MAX)
            .saturating_mul(permits);
        self.reserved = self.reserved.saturating_sub(released);
    }
}

/// Fixed-window rate limiter with a bounded FIFO queue, keyed by caller IP.
///
/// # Example
///
/// ```
/// use auction_fees::api::{Admission, RateLimiter};
/// use auction_fees::config::RateLimitConfig;
/// use std::net::{IpAddr, Ipv4Addr};
/// use tokio::time::Instant;
///
/// let limiter = RateLimiter::new(&RateLimitConfig {
///     window_secs: 10,
///     permit_limit: 1,
///     queue_limit: 0,
/// });
/// let caller = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// let now = Instant::now();
///
/// assert_eq!(limiter.admit(caller, now), Admission::Immediate);
/// assert_eq!(limiter.admit(caller, now), Admission::Rejected);
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    permit_limit: u64,
    queue_limit: u64,
    callers: Mutex<HashMap<IpAddr, CallerWindow>>,
}

impl RateLimiter {
    /// Creates a limiter from the configured window, permit and queue sizes.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            window: config.window(),
            permit_limit: u64::from(config.permit_limit.max(1)),
            queue_limit: u64::from(config.queue_limit),
            callers: Mutex::new(HashMap::new()),
        }
    }

    /// Decides whether a request from `caller` arriving at `now` may proceed.
    ///
    /// Queued requests are assigned to windows in arrival order, so a request
    /// never waits for a later window than one that arrived after it.
    pub fn admit(&self, caller: IpAddr, now: Instant) -> Admission {
        let mut callers = self.callers.lock().unwrap_or_else(PoisonError::into_inner);

        if callers.len() >= PURGE_THRESHOLD {
            callers.retain(|_, entry| {
                entry.advance(now, self.window, self.permit_limit);
                entry.reserved > 0
            });
        }

        let entry = callers.entry(caller).or_insert_with(|| CallerWindow {
            window_start: now,
            reserved: 0,
        });
        entry.advance(now, self.window, self.permit_limit);

        if entry.reserved >= self.permit_limit + self.queue_limit {
            return Admission::Rejected;
        }

        let windows_ahead = entry.reserved / self.permit_limit;
        if windows_ahead == 0 {
            entry.reserved += 1;
            return Admission::Immediate;
        }

        // A window that cannot be represented as an instant is never reached.
        let until = u32::try_from(windows_ahead)
            .ok()
            .and_then(|n| self.window.checked_mul(n))
            .and_then(|offset| entry.window_start.checked_add(offset));
        match until {
            Some(until) => {
                entry.reserved += 1;
                Admission::Queued { until }
            }
            None => Admission::Rejected,
        }
    }

    /// Returns the number of callers currently tracked.
    pub fn tracked_callers(&self) -> usize {
        self.callers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Middleware applying the shared [`RateLimiter`] to each request.
///
/// The caller is identified by the peer address recorded in
/// [`ConnectInfo`]; requests without one share a single bucket.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let caller = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    match state.limiter().admit(caller, Instant::now()) {
        Admission::Immediate => next.run(request).await,
        Admission::Queued { until } => {
            debug!(
                caller = %caller,
                wait_ms = until.saturating_duration_since(Instant::now()).as_millis() as u64,
                "Request queued by rate limiter"
            );
            tokio::time::sleep_until(until).await;
            next.run(request).await
        }
        Admission::Rejected => {
            warn!(caller = %caller, "Request rejected by rate limiter");
            ApiErrorResponse::too_many_requests().into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(window_secs: u64, permit_limit: u32, queue_limit: u32) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig {
            window_secs,
            permit_limit,
            queue_limit,
        })
    }

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[test]
    fn test_allows_up_to_permit_limit() {
        let limiter = limiter(10, 3, 0);
        let now = Instant::now();

        for _ in 0..3 {
            assert_eq!(limiter.admit(ip(1), now), Admission::Immediate);
        }
        assert_eq!(limiter.admit(ip(1), now), Admission::Rejected);
    }

    #[test]
    fn test_queues_excess_in_arrival_order() {
        let limiter = limiter(10, 2, 3);
        let now = Instant::now();
        let window = Duration::from_secs(10);

        assert_eq!(limiter.admit(ip(1), now), Admission::Immediate);
        assert_eq!(limiter.admit(ip(1), now), Admission::Immediate);
        assert_eq!(
            limiter.admit(ip(1), now),
            Admission::Queued { until: now + window }
        );
        assert_eq!(
            limiter.admit(ip(1), now),
            Admission::Queued { until: now + window }
        );
        // third queued request spills into the window after next
        assert_eq!(
            limiter.admit(ip(1), now),
            Admission::Queued {
                until: now + window * 2
            }
        );
        assert_eq!(limiter.admit(ip(1), now), Admission::Rejected);
    }

    #[test]
    fn test_window_rollover_releases_permits() {
        let limiter = limiter(10, 1, 0);
        let start = Instant::now();

        assert_eq!(limiter.admit(ip(1), start), Admission::Immediate);
        assert_eq!(
            limiter.admit(ip(1), start + Duration::from_secs(9)),
            Admission::Rejected
        );
        assert_eq!(
            limiter.admit(ip(1), start + Duration::from_secs(10)),
            Admission::Immediate
        );
    }

    #[test]
    fn test_queued_requests_consume_next_window() {
        let limiter = limiter(10, 1, 1);
        let start = Instant::now();

        assert_eq!(limiter.admit(ip(1), start), Admission::Immediate);
        assert_eq!(
            limiter.admit(ip(1), start),
            Admission::Queued {
                until: start + Duration::from_secs(10)
            }
        );

        // The queued request owns the next window's only permit.
        let next_window = start + Duration::from_secs(11);
        assert_eq!(
            limiter.admit(ip(1), next_window),
            Admission::Queued {
                until: start + Duration::from_secs(20)
            }
        );
        assert_eq!(limiter.admit(ip(1), next_window), Admission::Rejected);
    }

    #[test]
    fn test_unreachable_window_is_rejected() {
        let limiter = limiter(u64::MAX, 1, 3);
        let now = Instant::now();

        assert_eq!(limiter.admit(ip(1), now), Admission::Immediate);
        assert_eq!(limiter.admit(ip(1), now), Admission::Rejected);
        assert_eq!(limiter.admit(ip(1), now), Admission::Rejected);
    }

    #[test]
    fn test_long_idle_resets_caller() {
        let limiter = limiter(10, 1, 0);
        let start = Instant::now();

        assert_eq!(limiter.admit(ip(1), start), Admission::Immediate);
        assert_eq!(
            limiter.admit(ip(1), start + Duration::from_secs(3600)),
            Admission::Immediate
        );
    }

    #[test]
    fn test_callers_are_independent() {
        let limiter = limiter(10, 1, 0);
        let now = Instant::now();

        assert_eq!(limiter.admit(ip(1), now), Admission::Immediate);
        assert_eq!(limiter.admit(ip(2), now), Admission::Immediate);
        assert_eq!(limiter.admit(ip(1), now), Admission::Rejected);
        assert_eq!(limiter.tracked_callers(), 2);
    }

    #[test]
    fn test_idle_callers_are_purged() {
        let limiter = limiter(1, 1, 0);
        let start = Instant::now();

        for i in 0..PURGE_THRESHOLD {
            let caller = IpAddr::V4(Ipv4Addr::from(i as u32));
            limiter.admit(caller, start);
        }
        assert_eq!(limiter.tracked_callers(), PURGE_THRESHOLD);

        limiter.admit(ip(1), start + Duration::from_secs(5));
        assert_eq!(limiter.tracked_callers(), 1);
    }
}
