use crate::common::parse_letter;
use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::field::{is_field_empty, parse_fq12, parse_u8};
use crate::message::{FixType, NmeaMessage};

const PRN_SLOTS: usize = 12;

/// `opMode,navMode,{PRN}x12,PDOP,HDOP,VDOP[,systemId]`
pub fn parse_gsa(cursor: &mut SentenceCursor, message: &mut NmeaMessage) -> Result<(), NmeaError> {
    // manual or automatic 2D/3D switching, not kept
    parse_letter(cursor, |b| matches!(b, b'M' | b'A').then_some(()))?;
    cursor.expect(b',')?;

    let precision = &mut message.precision;
    precision.fix_type = match parse_u8(cursor)? {
        1 => FixType::NoFix,
        2 => FixType::Fix2D,
        3 => FixType::Fix3D,
        _ => return Err(NmeaError::MalformedInteger),
    };
    cursor.expect(b',')?;

    precision.used_satellites.clear();
    for _ in 0..PRN_SLOTS {
        if !is_field_empty(cursor) {
            let prn = parse_u8(cursor)?;
            precision
                .used_satellites
                .push(prn)
                .map_err(|_| NmeaError::Overflow)?;
        }
        cursor.expect(b',')?;
    }

    precision.pdop = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    precision.hdop = parse_fq12(cursor)?;
    cursor.expect(b',')?;
    precision.vdop = parse_fq12(cursor)?;
    Ok(())
}
