//! The date, time and time zone components provided by `tinytz`.
//!
//! The local types (`LocalDate`, `LocalTime`, `LocalDateTime`) carry no
//! offset. `OffsetDateTime` pairs a local date time with a fixed offset and
//! identifies an instant. `ZonedDateTime` additionally carries the
//! [`TimeZone`] that produced the offset.

pub mod timezone;

mod date;
mod datetime;
mod offset;
mod offset_datetime;
mod period;
mod time;
mod zoneddatetime;

#[doc(inline)]
pub use date::LocalDate;
#[doc(inline)]
pub use datetime::LocalDateTime;
#[doc(inline)]
pub use offset::TimeOffset;
#[doc(inline)]
pub use offset_datetime::OffsetDateTime;
#[doc(inline)]
pub use period::TimePeriod;
#[doc(inline)]
pub use time::LocalTime;
#[doc(inline)]
pub use timezone::{ShortTimeZone, TimeZone, TimeZoneData, TimeZoneKind, ZoneHandle};
#[doc(inline)]
pub use zoneddatetime::ZonedDateTime;
