//! Serde serialization helpers for ensuring consistent JSON output

use super::tick_value::{format_tick_value, TickValue};
use serde::Serializer;

/// Serialize a tick value as an `"n/d"` string so JSON consumers get it exactly
pub fn serialize_tick_value<S>(value: &TickValue, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_tick_value(value))
}
