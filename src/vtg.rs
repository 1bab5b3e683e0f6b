use crate::common::{parse_trailing_mode, skip_unit};
use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::field::{parse_fq12, parse_optional_fq12};
use crate::message::NmeaMessage;

/// `cogt,T,cogm,M,sogn,N,sogk,K[,posMode]`
///
/// Empty course fields leave the previous course in place.
pub fn parse_vtg(cursor: &mut SentenceCursor, message: &mut NmeaMessage) -> Result<(), NmeaError> {
    if let Some(course) = parse_optional_fq12(cursor)? {
        message.angle.true_north = course;
    }
    cursor.expect(b',')?;
    skip_unit(cursor, b'T')?;
    cursor.expect(b',')?;
    if let Some(course) = parse_optional_fq12(cursor)? {
        message.angle.magnetic_north = course;
    }
    cursor.expect(b',')?;
    skip_unit(cursor, b'M')?;
    cursor.expect(b',')?;

    message.speed.sog = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    skip_unit(cursor, b'N')?;
    cursor.expect(b',')?;
    message.speed.kph = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    skip_unit(cursor, b'K')?;

    parse_trailing_mode(cursor, &mut message.status)
}
