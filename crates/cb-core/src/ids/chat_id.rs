use serde::{Deserialize, Serialize};

use super::id_macro::impl_int_id;

/// Telegram chat identifier. Negative values address channels and groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl_int_id!(ChatId);
