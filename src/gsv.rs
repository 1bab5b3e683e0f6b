use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::field::{is_field_empty, parse_u16, parse_u8};
use crate::message::{NmeaMessage, SatelliteInfo};

/// `numMsg,msgNum,numSV{,prn,elv,az,cno}x0..4[,signalId]`
///
/// Only this page is stored, earlier pages are replaced.
pub fn parse_gsv(cursor: &mut SentenceCursor, message: &mut NmeaMessage) -> Result<(), NmeaError> {
    let sky = &mut message.sky;
    sky.message_count = parse_u8(cursor)?;
    cursor.expect(b',')?;
    sky.message_index = parse_u8(cursor)?;
    cursor.expect(b',')?;
    sky.satellites_in_view = parse_u8(cursor)?;

    sky.satellites.clear();
    while cursor.peek() == b',' {
        cursor.advance()?;
        let prn = parse_u8(cursor)?;
        if cursor.at_end() {
            // lone trailing field is the NMEA 4.10 signal id
            break;
        }
        cursor.expect(b',')?;
        let elevation = parse_u8(cursor)?;
        cursor.expect(b',')?;
        let azimuth = parse_u16(cursor)?;
        cursor.expect(b',')?;
        let snr = if is_field_empty(cursor) {
            None
        } else {
            Some(parse_u8(cursor)?)
        };

        let satellite = SatelliteInfo {
            prn,
            elevation,
            azimuth,
            snr,
        };
        if sky.satellites.push(satellite).is_err() {
            log_warn!("GSV page carries more than 4 satellites, dropping PRN {}", prn);
        }
    }
    Ok(())
}
