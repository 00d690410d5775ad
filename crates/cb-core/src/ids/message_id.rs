use serde::{Deserialize, Serialize};

use super::id_macro::impl_int_id;

/// Message identifier, unique within one chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl_int_id!(MessageId);
