//! Validation engine
//!
//! Three layers: pure field predicates ([`numeric`], [`dates`]),
//! payload-level aggregation ([`payload`]) and cross-document checks against
//! reference data ([`cross`]).

pub mod cross;
pub mod dates;
pub mod numeric;
pub mod payload;

pub use cross::{lines_for, CrossCheckLine, CrossValidator};
pub use dates::{
    parse_display_date, validate_date_is_same_or_before, validate_maximum_future_date,
    validate_today_or_in_the_past, DISPLAY_DATE_FORMAT,
};
pub use numeric::{is_invalid_length, is_numbers_only, is_positive_number_with_two_decimals};
pub use payload::validate_payload;
