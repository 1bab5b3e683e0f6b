use crate::common::{fix_status_from_quality, parse_location, parse_utc_time, skip_unit};
use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::field::{parse_fq12, parse_u8};
use crate::message::NmeaMessage;

/// `hhmmss.ss,lat,N,lon,E,quality,numSV,HDOP,alt,M,sep,M,diffAge,diffStation`
///
/// Differential age and station are not decoded.
pub fn parse_gga(cursor: &mut SentenceCursor, message: &mut NmeaMessage) -> Result<(), NmeaError> {
    parse_utc_time(cursor, &mut message.time)?;
    cursor.expect(b',')?;
    parse_location(cursor, &mut message.location)?;

    message.status = fix_status_from_quality(parse_u8(cursor)?)?;
    cursor.expect(b',')?;
    message.precision.satellite_count = parse_u8(cursor)?;
    cursor.expect(b',')?;
    message.precision.hdop = parse_fq12(cursor)?;
    cursor.expect(b',')?;

    message.location.altitude = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    skip_unit(cursor, b'M')?;
    cursor.expect(b',')?;
    message.location.geoid_separation = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    skip_unit(cursor, b'M')
}
