/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry support for aws-hyper
//!
//! Retries use a token bucket shared by every request sent through one client. Each retry
//! withdraws from the bucket and each success refunds the cost of the last retry, so a failing
//! service quickly stops receiving retries while a healthy one is unaffected. The delay between
//! attempts is exponential with a random base, capped by `max_backoff`.

use smithy_http::operation::Operation;
use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

/// Retry configuration for a client
///
/// ```rust
/// use aws_hyper::RetryConfig;
/// use std::time::Duration;
/// let config = RetryConfig::default()
///     .with_max_retries(5)
///     .with_max_backoff(Duration::from_secs(10));
/// ```
#[derive(Clone, Debug)]
pub struct RetryConfig {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_retries: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    /// For deterministic tests, enable using a static base instead of random base for exponential backoff
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    /// Maximum number of attempts, including the first one
    ///
    /// A value of `1` disables retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Upper bound on the delay between two attempts
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// Size of the retry token bucket shared by all requests of a client
    pub fn with_initial_retry_tokens(mut self, tokens: usize) -> Self {
        self.initial_retry_tokens = tokens;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: 10,
            max_retries: MAX_RETRIES,
            max_backoff: Duration::from_secs(20),
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

const MAX_RETRIES: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;

/// Creates a [`StandardRetryStrategy`] for each request, all sharing the same token bucket
#[derive(Clone)]
pub(crate) struct RetryHandlerFactory {
    ctx: Arc<Mutex<RetryCtx>>,
}

impl RetryHandlerFactory {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            ctx: Arc::new(Mutex::new(RetryCtx::new(config))),
        }
    }

    pub fn with_config(&mut self, config: RetryConfig) {
        self.ctx = Arc::new(Mutex::new(RetryCtx::new(config)));
    }

    pub fn new_handler(&self) -> StandardRetryStrategy {
        StandardRetryStrategy::new(self.ctx.clone())
    }
}

/// StandardRetryStrategy
///
/// `ctx` captures cross-request retry state, whereas `attempts` captures retry state local to this
/// request
#[derive(Clone)]
pub(crate) struct StandardRetryStrategy {
    attempts: u32,
    ctx: Arc<Mutex<RetryCtx>>,
}

fn lock(ctx: &Mutex<RetryCtx>) -> MutexGuard<'_, RetryCtx> {
    ctx.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl StandardRetryStrategy {
    pub fn new(ctx: Arc<Mutex<RetryCtx>>) -> Self {
        Self { attempts: 0, ctx }
    }

    #[cfg(test)]
    pub fn ctx(&self) -> MutexGuard<'_, RetryCtx> {
        lock(&self.ctx)
    }

    pub fn do_retry(&self, retry_kind: Result<(), ErrorKind>) -> Option<(Self, Duration)> {
        let mut ctx = lock(&self.ctx);
        let can_retry = match retry_kind {
            Ok(_) => {
                ctx.retry_quota_release();
                return None;
            }
            Err(e) => {
                if self.attempts >= ctx.config.max_retries - 1 {
                    return None;
                }
                ctx.get_retry_quota(e)
            }
        };
        if !can_retry {
            return None;
        };
        let b = (ctx.config.base)();
        let r: i32 = 2;
        let backoff = b * (r.pow(self.attempts) as f64);
        let backoff = Duration::from_secs_f64(backoff).min(ctx.config.max_backoff);
        let mut next = self.clone();
        next.attempts += 1;
        Some((next, backoff))
    }
}

pub(crate) struct RetryCtx {
    retry_quota: usize,
    last_retry: Option<usize>,
    config: RetryConfig,
}

impl RetryCtx {
    pub fn new(config: RetryConfig) -> Self {
        RetryCtx {
            retry_quota: config.initial_retry_tokens,
            last_retry: None,
            config,
        }
    }

    fn retry_quota_release(&mut self) {
        self.retry_quota += self
            .last_retry
            .take()
            .unwrap_or(self.config.no_retry_increment);
        self.retry_quota = self.retry_quota.min(self.config.initial_retry_tokens);
    }

    fn get_retry_quota(&mut self, err: ErrorKind) -> bool {
        let retry_cost = if err == ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.retry_quota {
            false
        } else {
            self.last_retry = Some(retry_cost);
            self.retry_quota -= retry_cost;
            true
        }
    }

    #[cfg(test)]
    fn with_base_provider(mut self, base: fn() -> f64) -> Self {
        self.config.base = base;
        self
    }
}

impl<Handler, R, T, E> tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>>
    for StandardRetryStrategy
where
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self> + Send>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        let policy = req.retry_policy();
        let retry = policy.classify(result);
        let (next, dur) = match retry {
            RetryKind::Explicit(dur) => (self.clone(), dur),
            RetryKind::NotRetryable => {
                if result.is_ok() {
                    self.do_retry(Ok(()));
                }
                return None;
            }
            RetryKind::Error(err) => self.do_retry(Err(err))?,
            _ => return None,
        };
        debug!(attempt = next.attempts, backoff = ?dur, "retrying request");
        let fut = async move {
            tokio::time::sleep(dur).await;
            next
        };
        Some(Box::pin(fut))
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}
