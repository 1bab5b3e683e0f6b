use crate::common::{
    parse_data_valid, parse_letter, parse_location, parse_trailing_mode, parse_utc_date,
    parse_utc_time,
};
use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::field::{is_field_empty, parse_fq12, parse_optional_fq12};
use crate::message::{FixStatus, Hemisphere, NmeaMessage};

/// `time,status,lat,N,lon,E,spd,cog,date,mv,mvEW[,posMode[,navStatus]]`
pub fn parse_rmc(cursor: &mut SentenceCursor, message: &mut NmeaMessage) -> Result<(), NmeaError> {
    parse_utc_time(cursor, &mut message.time)?;
    cursor.expect(b',')?;
    message.status = if parse_data_valid(cursor)? {
        FixStatus::Autonomous
    } else {
        FixStatus::Invalid
    };
    cursor.expect(b',')?;
    parse_location(cursor, &mut message.location)?;

    message.speed.sog = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    let course = parse_optional_fq12(cursor)?;
    if let Some(course) = course {
        message.angle.true_north = course;
    }
    cursor.expect(b',')?;
    parse_utc_date(cursor, &mut message.date)?;
    cursor.expect(b',')?;

    let variation = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    let direction = if is_field_empty(cursor) {
        None
    } else {
        Some(parse_letter(cursor, |b| match b {
            b'E' => Some(Hemisphere::East),
            b'W' => Some(Hemisphere::West),
            _ => None,
        })?)
    };
    if let (Some(course), Some(direction)) = (course, direction) {
        // easterly variation means magnetic north lies east of true north
        let magnetic = match direction {
            Hemisphere::West => course.checked_add(variation),
            _ => course.checked_sub(variation),
        }
        .ok_or(NmeaError::MalformedInteger)?;
        message.angle.magnetic_north = magnetic.wrap_degrees();
    }

    parse_trailing_mode(cursor, &mut message.status)
}
