use crate::common::{parse_data_valid, parse_location, parse_trailing_mode, parse_utc_time};
use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::message::{FixStatus, NmeaMessage};

/// `lat,N,lon,E,time,status[,posMode]`
pub fn parse_gll(cursor: &mut SentenceCursor, message: &mut NmeaMessage) -> Result<(), NmeaError> {
    parse_location(cursor, &mut message.location)?;
    parse_utc_time(cursor, &mut message.time)?;
    cursor.expect(b',')?;
    message.status = if parse_data_valid(cursor)? {
        FixStatus::Autonomous
    } else {
        FixStatus::Invalid
    };
    parse_trailing_mode(cursor, &mut message.status)
}
