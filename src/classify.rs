use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::message::{SentenceType, TalkerId};

/// Consumes `expected` or fails with `error`, leaving the cursor on the
/// offending byte.
fn take(cursor: &mut SentenceCursor, expected: u8, error: NmeaError) -> Result<(), NmeaError> {
    if cursor.peek() != expected {
        return Err(error);
    }
    cursor.advance()
}

/// Consumes the current byte if `pick` maps it to a value.
fn branch<T>(
    cursor: &mut SentenceCursor,
    error: NmeaError,
    pick: impl FnOnce(u8) -> Option<T>,
) -> Result<T, NmeaError> {
    let value = pick(cursor.peek()).ok_or(error)?;
    cursor.advance()?;
    Ok(value)
}

/// `GP`, `GL`, `GN` or `BD`.
pub fn parse_talker_id(cursor: &mut SentenceCursor) -> Result<TalkerId, NmeaError> {
    const ERR: NmeaError = NmeaError::MalformedTalkerId;

    match branch(cursor, ERR, |b| matches!(b, b'G' | b'B').then_some(b))? {
        b'G' => branch(cursor, ERR, |b| match b {
            b'P' => Some(TalkerId::Gps),
            b'L' => Some(TalkerId::Glonass),
            b'N' => Some(TalkerId::Gnss),
            _ => None,
        }),
        _ => {
            take(cursor, b'D', ERR)?;
            Ok(TalkerId::BeiDou)
        }
    }
}

/// `GGA`, `GLL`, `GSA`, `GSV`, `RMC` or `VTG`.
pub fn parse_sentence_type(cursor: &mut SentenceCursor) -> Result<SentenceType, NmeaError> {
    const ERR: NmeaError = NmeaError::MalformedCommandType;

    match branch(cursor, ERR, |b| matches!(b, b'G' | b'R' | b'V').then_some(b))? {
        b'G' => match branch(cursor, ERR, |b| matches!(b, b'G' | b'L' | b'S').then_some(b))? {
            b'G' => {
                take(cursor, b'A', ERR)?;
                Ok(SentenceType::Gga)
            }
            b'L' => {
                take(cursor, b'L', ERR)?;
                Ok(SentenceType::Gll)
            }
            _ => branch(cursor, ERR, |b| match b {
                b'A' => Some(SentenceType::Gsa),
                b'V' => Some(SentenceType::Gsv),
                _ => None,
            }),
        },
        b'R' => {
            take(cursor, b'M', ERR)?;
            take(cursor, b'C', ERR)?;
            Ok(SentenceType::Rmc)
        }
        _ => {
            take(cursor, b'T', ERR)?;
            take(cursor, b'G', ERR)?;
            Ok(SentenceType::Vtg)
        }
    }
}
