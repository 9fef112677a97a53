//! Debounced, coalescing query controller.
//!
//! A [`QueryCoalescer`] sits between a stream of keystroke-driven queries and
//! a [`SearchTransport`]. It guarantees at most one transport call in flight
//! per controller, services the most recent query rather than every
//! intermediate one, and keeps a single busy indicator visible for as long as
//! any request in the chain is outstanding.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::sink::ResultSink;
use crate::transport::SearchTransport;


/// Default quiet period before an eligible query is dispatched.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Default minimum number of whitespace-separated tokens in an eligible query.
pub const MIN_QUERY_TOKENS: usize = 2;

/// Default minimum length, in characters, of each token.
pub const MIN_TOKEN_LEN: usize = 3;

/// Tunable constants governing a [`QueryCoalescer`].
#[derive(Debug, Clone)]
pub struct CoalescerConfig {
    /// Key of the busy-indicator entry the coalescer revokes when a request
    /// chain drains. Must be distinct from any result key.
    pub busy_key: String,
    /// Quiet period between scheduling and dispatching a query.
    pub debounce: Duration,
    /// Minimum number of tokens required for a query to be dispatched.
    pub min_tokens: usize,
    /// Minimum length of each token, in characters.
    pub min_token_len: usize,
}

impl CoalescerConfig {
    /// Build a config with the default timing and eligibility constants.
    #[must_use]
    pub fn new(busy_key: impl Into<String>) -> Self {
        Self {
            busy_key: busy_key.into(),
            debounce: DEBOUNCE_DELAY,
            min_tokens: MIN_QUERY_TOKENS,
            min_token_len: MIN_TOKEN_LEN,
        }
    }

    /// Override the debounce delay.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Override the eligibility thresholds.
    #[must_use]
    pub fn with_eligibility(mut self, min_tokens: usize, min_token_len: usize) -> Self {
        self.min_tokens = min_tokens;
        self.min_token_len = min_token_len;
        self
    }

    /// Returns `true` when `query` is worth sending to the transport: at
    /// least `min_tokens` whitespace-separated tokens, each at least
    /// `min_token_len` characters long.
    #[must_use]
    pub fn eligible(&self, query: &str) -> bool {
        let mut tokens = 0usize;
        for token in query.split_whitespace() {
            if token.chars().count() < self.min_token_len {
                return false;
            }
            tokens += 1;
        }
        tokens >= self.min_tokens
    }
}

/// A query/sink pair parked while another request is in flight.
struct Pending {
    query: String,
    sink: Arc<dyn ResultSink>,
}

/// Mutable controller state. One instance per provider registration; reset to
/// all-empty on deregistration.
#[derive(Default)]
struct State {
    /// True between transport dispatch and settlement.
    in_flight: bool,
    /// Most recent query received while a request was in flight. At most one
    /// is retained; later arrivals overwrite earlier ones.
    pending: Option<Pending>,
    /// Cancellation handle for the scheduled-but-not-yet-fired debounce
    /// timer. Present only before a request starts; once the timer fires,
    /// `in_flight` governs state until settlement.
    debounce: Option<CancellationToken>,
    /// Bumped on reset so continuations from a previous registration become
    /// no-ops instead of mutating fresh state.
    generation: u64,
}

/// Debounced, coalescing search-request controller.
///
/// Cheap to clone; clones share the same controller state. All state
/// transitions are serialized through an internal mutex that is never held
/// across an await point.
#[derive(Clone)]
pub struct QueryCoalescer {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn SearchTransport>,
    config: CoalescerConfig,
    state: Mutex<State>,
}

impl QueryCoalescer {
    /// Create a controller dispatching queries to `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn SearchTransport>, config: CoalescerConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                config,
                state: Mutex::new(State::default()),
            }),
        }
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &CoalescerConfig {
        &self.inner.config
    }

    /// Feed a query into the controller.
    ///
    /// Returns `true` when the caller should keep a busy indicator visible:
    /// either a new debounce cycle was scheduled, or the query was parked
    /// behind an in-flight request and will be serviced when it settles.
    ///
    /// First match wins:
    /// 1. A request is in flight: park the query/sink pair, overwriting any
    ///    previously parked pair.
    /// 2. A debounce timer is scheduled: cancel it and return `false`. The
    ///    keystroke is dropped unless the caller submits again, at which
    ///    point scheduling restarts from a clean slate.
    /// 3. Otherwise, apply the eligibility filter and schedule the debounce
    ///    timer for eligible queries.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, query: &str, sink: Arc<dyn ResultSink>) -> bool {
        let (token, generation) = {
            let mut state = self.inner.state.lock();

            if state.in_flight {
                state.pending = Some(Pending {
                    query: query.to_owned(),
                    sink,
                });
                return true;
            }

            // On a multi-thread runtime the sleep may already have won the
            // select when this cancel lands; that fire action still runs and
            // the caller is told no busy indicator is needed. The generation
            // check in `run` does not cover this window, only resets do.
            if let Some(timer) = state.debounce.take() {
                timer.cancel();
                return false;
            }

            if !self.inner.config.eligible(query) {
                return false;
            }

            let token = CancellationToken::new();
            state.debounce = Some(token.clone());
            (token, state.generation)
        };

        let coalescer = self.clone();
        let query = query.to_owned();
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = sleep(coalescer.inner.config.debounce) => {
                    coalescer.run(generation, query, sink).await;
                }
            }
        });

        true
    }

    /// Cancel any scheduled timer and clear all controller state.
    ///
    /// Call on provider deregistration. Continuations belonging to the old
    /// registration observe the generation bump and exit without publishing
    /// or revoking anything.
    pub fn reset(&self) {
        let mut state = self.inner.state.lock();
        state.generation = state.generation.wrapping_add(1);
        if let Some(timer) = state.debounce.take() {
            timer.cancel();
        }
        state.in_flight = false;
        state.pending = None;
    }

    /// Timer fire action: execute the transport call and drain the chain.
    async fn run(&self, generation: u64, query: String, sink: Arc<dyn ResultSink>) {
        {
            let mut state = self.inner.state.lock();
            if state.generation != generation {
                return;
            }
            state.debounce = None;
            state.in_flight = true;
        }

        let outcome = self.inner.transport.execute(&query).await;

        let pending = {
            let mut state = self.inner.state.lock();
            if state.generation != generation {
                // The controller was reset while the call was in flight; its
                // result must not reach the sink.
                return;
            }
            state.in_flight = false;
            state.pending.take()
        };

        match outcome {
            Ok(Some(entry)) => sink.publish(vec![entry]),
            Ok(None) => {}
            Err(err) => error!("search transport failed for {query:?}: {err:#}"),
        }

        match pending {
            Some(next) => {
                // Restart the flow with the freshest query. The busy entry
                // stays visible across the hand-off; if the parked query
                // fails the eligibility filter no new cycle starts and the
                // chain drains here instead.
                if !self.submit(&next.query, Arc::clone(&next.sink)) {
                    next.sink.revoke(&self.inner.config.busy_key);
                }
            }
            None => sink.revoke(&self.inner.config.busy_key),
        }
    }
}
