use serde::{Deserialize, Serialize};

use super::id_macro::impl_int_id;

/// Telegram user identifier.
/// Telegram 用户标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl_int_id!(UserId);
