use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::RoomType;

/// Mark a room type unavailable for a date range.
///
/// `reason` is always sent, as an empty string when the operator left it
/// blank. Date ordering is not checked here or by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDate {
    pub room_type: RoomType,
    pub check_in_date: Date,
    pub check_out_date: Date,
    #[serde(default)]
    pub reason: String,
}
