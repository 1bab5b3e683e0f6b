#![cfg_attr(not(test), no_std)]

mod fmt;

mod classify;
mod common;
mod cursor;
mod error;
mod fast_div;
mod field;
mod fixed_point;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod message;
mod rmc;
mod vtg;

pub use crate::classify::{parse_sentence_type, parse_talker_id};
pub use crate::common::{parse_degree, parse_location, parse_utc_date, parse_utc_time};
pub use crate::cursor::{SentenceCursor, END_OF_SENTENCE};
pub use crate::error::NmeaError;
pub use crate::fast_div::{div_mod_10, div_mod_100};
pub use crate::field::{parse_fq12, parse_i32, parse_u16, parse_u32, parse_u8};
pub use crate::fixed_point::Fq12;
pub use crate::message::{
    Angle, Degree, FixStatus, FixType, Hemisphere, Location, NmeaMessage, Precision,
    SatelliteInfo, SentenceType, SkyView, Speed, TalkerId, UtcDate, UtcTime,
};

use crate::cursor::is_end_of_sentence;
use heapless::Vec;

/// Longest sentence the decoder will look at. NMEA itself caps sentences at
/// 82 bytes; the headroom is for receivers that do not.
pub const MAX_SENTENCE_LEN: usize = 256;

/// Fixed-size storage for one raw sentence, reused between reads.
pub type SentenceBuffer = Vec<u8, MAX_SENTENCE_LEN>;

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Checks the `*hh` trailer against the XOR of everything between `$` and `*`.
pub fn validate_checksum(sentence: &[u8]) -> Result<(), NmeaError> {
    let mut cursor = SentenceCursor::new(sentence);
    cursor.expect(b'$').map_err(|_| NmeaError::Checksum)?;

    let mut checksum: u8 = 0;
    loop {
        let byte = cursor.peek();
        if byte == b'*' {
            break;
        }
        if is_end_of_sentence(byte) {
            return Err(NmeaError::Checksum);
        }
        checksum ^= byte;
        cursor.advance()?;
    }
    cursor.advance()?;

    let high = hex_value(cursor.peek()).ok_or(NmeaError::Checksum)?;
    cursor.advance()?;
    let low = hex_value(cursor.peek()).ok_or(NmeaError::Checksum)?;

    let expected = (high << 4) | low;
    if checksum != expected {
        log_warn!("checksum mismatch, expected {} got {}", expected, checksum);
        return Err(NmeaError::Checksum);
    }
    Ok(())
}

/// Decodes one sentence into `message` through an existing cursor.
///
/// Talker and sentence type are written as soon as they are recognized; the
/// rest follows field by field, stopping at the first error.
pub fn dispatch(
    cursor: &mut SentenceCursor,
    message: &mut NmeaMessage,
) -> Result<SentenceType, NmeaError> {
    cursor.expect(b'$')?;
    message.talker = parse_talker_id(cursor)?;
    let sentence = parse_sentence_type(cursor)?;
    message.sentence = sentence;
    cursor.expect(b',')?;

    match sentence {
        SentenceType::Gga => gga::parse_gga(cursor, message)?,
        SentenceType::Gsa => gsa::parse_gsa(cursor, message)?,
        SentenceType::Gsv => gsv::parse_gsv(cursor, message)?,
        SentenceType::Rmc => rmc::parse_rmc(cursor, message)?,
        SentenceType::Vtg => vtg::parse_vtg(cursor, message)?,
        SentenceType::Gll => gll::parse_gll(cursor, message)?,
    }
    Ok(sentence)
}

/// Decodes one `$...` sentence into `message`. The checksum is not looked at,
/// see [`parse_checked`].
pub fn parse(sentence: &[u8], message: &mut NmeaMessage) -> Result<SentenceType, NmeaError> {
    let mut cursor = SentenceCursor::new(sentence);
    let result = dispatch(&mut cursor, message);
    match &result {
        Ok(sentence) => log_trace!("decoded {}{}", message.talker, sentence),
        Err(e) => log_debug!("sentence rejected at byte {}: {}", cursor.position(), e),
    }
    result
}

/// [`parse`], after [`validate_checksum`] has accepted the sentence.
pub fn parse_checked(
    sentence: &[u8],
    message: &mut NmeaMessage,
) -> Result<SentenceType, NmeaError> {
    validate_checksum(sentence)?;
    parse(sentence, message)
}

impl NmeaMessage {
    pub fn update(&mut self, sentence: &[u8]) -> Result<SentenceType, NmeaError> {
        parse(sentence, self)
    }
}
