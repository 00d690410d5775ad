use async_trait::async_trait;

use crate::messaging::event::ChatEvent;

/// Inbound event sink implemented by the application layer.
///
/// The transport only converts wire updates and hands them over; everything
/// after that is application policy.
#[async_trait]
pub trait ChatEventHandlerPort: Send + Sync {
    async fn handle(&self, event: ChatEvent) -> anyhow::Result<()>;
}
