use core::fmt;

/// Everything that can go wrong while decoding a sentence.
///
/// Decoding stops at the first error. Fields of the target
/// [`NmeaMessage`](crate::NmeaMessage) written before the failure keep their
/// new values, so a failed sentence may leave the message half updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NmeaError {
    /// The cursor tried to move past the buffer capacity.
    Overflow,
    /// A non-digit showed up before the field delimiter, or the value does not
    /// fit the target width.
    MalformedInteger,
    MalformedTalkerId,
    MalformedCommandType,
    /// An expected literal (`$`, `.`, `,`, a hemisphere or status letter) is
    /// missing or wrong.
    MalformedFixChar,
    /// The `*hh` checksum is missing, unreadable or does not match.
    Checksum,
}

impl fmt::Display for NmeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NmeaError::Overflow => "sentence overflows the buffer",
            NmeaError::MalformedInteger => "malformed integer field",
            NmeaError::MalformedTalkerId => "unknown talker id",
            NmeaError::MalformedCommandType => "unknown sentence type",
            NmeaError::MalformedFixChar => "unexpected character",
            NmeaError::Checksum => "bad checksum",
        };
        f.write_str(msg)
    }
}
