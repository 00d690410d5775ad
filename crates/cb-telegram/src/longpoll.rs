//! Long-poll loop: pulls updates, converts them and hands them to the
//! application handler.
//!
//! Each update runs as its own task; the router serializes same-user
//! events behind its gate. Transport hiccups are retried with a growing pause
//! and never reach the handler, only a dead token or a competing
//! consumer stops the loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use cb_core::ports::{ChatEventHandlerPort, GatewayError};

use crate::api::client::BotApiClient;
use crate::api::types::Update;
use crate::convert;

const ERROR_BACKOFF: Duration = Duration::from_secs(3);
const MAX_BACKOFF_STEPS: u32 = 5;

pub struct UpdatePoller {
    client: Arc<BotApiClient>,
    handler: Arc<dyn ChatEventHandlerPort>,
    poll_timeout: Duration,
    error_backoff: Duration,
}

impl UpdatePoller {
    pub fn new(
        client: Arc<BotApiClient>,
        handler: Arc<dyn ChatEventHandlerPort>,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            client,
            handler,
            poll_timeout,
            error_backoff: ERROR_BACKOFF,
        }
    }

    /// Overrides the retry backoff base.
    pub fn with_error_backoff(mut self, backoff: Duration) -> Self {
        self.error_backoff = backoff;
        self
    }

    /// Polls until a fatal gateway error. Transport failures back off and
    /// retry in place.
    pub async fn run(&self) -> anyhow::Result<()> {
        info!(
            timeout_secs = self.poll_timeout.as_secs(),
            "starting long-poll loop"
        );
        let mut offset = self.drop_backlog().await;
        let mut failures = 0u32;
        loop {
            offset = self.poll_once(offset, &mut failures).await?;
        }
    }

    /// Updates queued while the process was down predate every session;
    /// confirm them unseen. `offset = -1` hands back only the newest one.
    async fn drop_backlog(&self) -> Option<i64> {
        match self.client.get_updates(Some(-1), Duration::ZERO).await {
            Ok(updates) => {
                let next = updates.last().map(|update| update.update_id + 1);
                if let Some(next) = next {
                    info!(next, "dropped the pending update backlog");
                }
                next
            }
            Err(err) => {
                warn!(error = %err, "could not drop the update backlog");
                None
            }
        }
    }

    async fn poll_once(
        &self,
        offset: Option<i64>,
        failures: &mut u32,
    ) -> anyhow::Result<Option<i64>> {
        match self.client.get_updates(offset, self.poll_timeout).await {
            Ok(updates) => {
                *failures = 0;
                let mut next = offset;
                for update in updates {
                    // Confirmed on the next pull even when nothing routes.
                    next = Some(update.update_id + 1);
                    self.dispatch(update);
                }
                Ok(next)
            }
            Err(err) if is_fatal(&err) => {
                error!(error = %err, "update polling cannot continue");
                Err(err.into())
            }
            Err(err) => {
                *failures += 1;
                let wait = self.error_backoff * (*failures).min(MAX_BACKOFF_STEPS);
                warn!(error = %err, attempt = *failures, wait_ms = wait.as_millis() as u64, "getUpdates failed, backing off");
                sleep(wait).await;
                Ok(offset)
            }
        }
    }

    fn dispatch(&self, update: Update) {
        let id = update.update_id;
        if let Some(stamp) = update.message.as_ref().map(|m| m.date) {
            let lag = Utc::now().signed_duration_since(stamp);
            debug!(update = id, lag_ms = lag.num_milliseconds(), "update received");
        }

        let Some(event) = convert::chat_event(update) else {
            debug!(update = id, "update carries no routable event");
            return;
        };

        let handler = Arc::clone(&self.handler);
        tokio::spawn(async move {
            if let Err(err) = handler.handle(event).await {
                error!(update = id, error = %err, "event handling failed");
            }
        });
    }
}

/// 401/404 mean the token is dead; 409 means another consumer holds
/// `getUpdates`. Retrying those would loop forever.
fn is_fatal(err: &GatewayError) -> bool {
    matches!(
        err,
        GatewayError::Api {
            code: 401 | 404 | 409,
            ..
        }
    )
}
