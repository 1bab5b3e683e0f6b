use crate::cursor::{is_end_of_sentence, SentenceCursor};
use crate::error::NmeaError;
use crate::fixed_point::Fq12;

/// Fraction digits kept by [`parse_fq12`]; later digits are checked and dropped.
const FQ12_MAX_DECIMALS: u8 = 5;

pub fn is_delimiter(byte: u8) -> bool {
    byte == b',' || byte == b'.' || is_end_of_sentence(byte)
}

/// True when the cursor sits on an empty field.
pub fn is_field_empty(cursor: &SentenceCursor) -> bool {
    cursor.peek() == b',' || cursor.at_end()
}

/// Scans digits up to the next delimiter. Returns the value and the number of
/// digits read. The delimiter is left in place.
fn parse_digits(cursor: &mut SentenceCursor, max: u32) -> Result<(u32, u8), NmeaError> {
    let mut value: u32 = 0;
    let mut digits: u8 = 0;
    loop {
        let byte = cursor.peek();
        if is_delimiter(byte) {
            return Ok((value, digits));
        }
        if !byte.is_ascii_digit() {
            return Err(NmeaError::MalformedInteger);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as u32))
            .filter(|v| *v <= max)
            .ok_or(NmeaError::MalformedInteger)?;
        digits = digits.saturating_add(1);
        cursor.advance()?;
    }
}

pub fn parse_u8(cursor: &mut SentenceCursor) -> Result<u8, NmeaError> {
    parse_digits(cursor, u8::MAX as u32).map(|(value, _)| value as u8)
}

pub fn parse_u16(cursor: &mut SentenceCursor) -> Result<u16, NmeaError> {
    parse_digits(cursor, u16::MAX as u32).map(|(value, _)| value as u16)
}

pub fn parse_u32(cursor: &mut SentenceCursor) -> Result<u32, NmeaError> {
    parse_digits(cursor, u32::MAX).map(|(value, _)| value)
}

/// Like [`parse_u32`], also returning how many digits were read.
pub fn parse_u32_counted(cursor: &mut SentenceCursor) -> Result<(u32, u8), NmeaError> {
    parse_digits(cursor, u32::MAX)
}

/// Decimal integer with an optional leading `-`.
pub fn parse_i32(cursor: &mut SentenceCursor) -> Result<i32, NmeaError> {
    let negative = cursor.peek() == b'-';
    if negative {
        cursor.advance()?;
    }
    // a second `-` is a non-digit and fails inside parse_digits
    let limit = if negative {
        i32::MIN.unsigned_abs()
    } else {
        i32::MAX as u32
    };
    let (magnitude, digits) = parse_digits(cursor, limit)?;
    if negative && digits == 0 {
        return Err(NmeaError::MalformedInteger);
    }
    Ok(if negative {
        0i32.wrapping_sub_unsigned(magnitude)
    } else {
        magnitude as i32
    })
}

/// `[-]digits[.digits]` as a Q12 value. An empty field reads as zero, a `-`
/// without integer digits is rejected.
pub fn parse_fq12(cursor: &mut SentenceCursor) -> Result<Fq12, NmeaError> {
    let negative = cursor.peek() == b'-';
    if negative {
        cursor.advance()?;
    }
    let (int, digits) = parse_u32_counted(cursor)?;
    if negative && digits == 0 {
        return Err(NmeaError::MalformedInteger);
    }

    let mut frac: u32 = 0;
    let mut kept: u8 = 0;
    if cursor.peek() == b'.' {
        cursor.advance()?;
        loop {
            let byte = cursor.peek();
            if is_delimiter(byte) {
                break;
            }
            if !byte.is_ascii_digit() {
                return Err(NmeaError::MalformedInteger);
            }
            if kept < FQ12_MAX_DECIMALS {
                frac = frac * 10 + (byte - b'0') as u32;
                kept += 1;
            }
            cursor.advance()?;
        }
    }

    Fq12::from_decimal(negative, int, frac, kept).ok_or(NmeaError::MalformedInteger)
}

/// `parse_fq12` for fields that may be absent.
pub fn parse_optional_fq12(cursor: &mut SentenceCursor) -> Result<Option<Fq12>, NmeaError> {
    if is_field_empty(cursor) {
        return Ok(None);
    }
    parse_fq12(cursor).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(input: &str) -> SentenceCursor<'_> {
        SentenceCursor::new(input.as_bytes())
    }

    #[test]
    fn unsigned_stops_at_delimiter() {
        for digits in ["0", "7", "42", "255", "65535", "123456", "4294967295"] {
            let input = format!("{},", digits);
            let mut c = cursor(&input);
            let value = parse_u32(&mut c).unwrap();
            assert_eq!(value, digits.parse::<u32>().unwrap());
            assert_eq!(c.position(), digits.len());
            assert_eq!(c.peek(), b',');
        }
    }

    #[test]
    fn unsigned_widths() {
        assert_eq!(parse_u8(&mut cursor("255,")), Ok(255));
        assert_eq!(parse_u8(&mut cursor("256,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_u16(&mut cursor("65535.")), Ok(65535));
        assert_eq!(parse_u16(&mut cursor("65536.")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_u32(&mut cursor("4294967296")), Err(NmeaError::MalformedInteger));
    }

    #[test]
    fn unsigned_empty_field_is_zero() {
        let mut c = cursor(",5");
        assert_eq!(parse_u16(&mut c), Ok(0));
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn unsigned_terminators() {
        assert_eq!(parse_u8(&mut cursor("12*3F")), Ok(12));
        assert_eq!(parse_u8(&mut cursor("12\r\n")), Ok(12));
        assert_eq!(parse_u8(&mut cursor("12")), Ok(12));
        assert_eq!(parse_u8(&mut cursor("12.5")), Ok(12));
    }

    #[test]
    fn malformed_integer_stops_on_bad_byte() {
        let mut c = cursor("12a,");
        assert_eq!(parse_u16(&mut c), Err(NmeaError::MalformedInteger));
        assert_eq!(c.position(), 2);
        assert_eq!(c.peek(), b'a');
    }

    #[test]
    fn signed() {
        let mut c = cursor("-1234,");
        assert_eq!(parse_i32(&mut c), Ok(-1234));
        assert_eq!(c.position(), 5);
        assert_eq!(parse_i32(&mut cursor("2147483647,")), Ok(i32::MAX));
        assert_eq!(parse_i32(&mut cursor("-2147483648,")), Ok(i32::MIN));
        assert_eq!(parse_i32(&mut cursor("2147483648,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_i32(&mut cursor(",")), Ok(0));
    }

    #[test]
    fn signed_rejects_stray_minus() {
        assert_eq!(parse_i32(&mut cursor("12-3,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_i32(&mut cursor("--3,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_i32(&mut cursor("-,")), Err(NmeaError::MalformedInteger));
    }

    #[test]
    fn fixed_point_fields() {
        assert_eq!(parse_fq12(&mut cursor("1.5,")), Ok(Fq12(6144)));
        assert_eq!(parse_fq12(&mut cursor("-0.25,")), Ok(Fq12(-1024)));
        assert_eq!(parse_fq12(&mut cursor("12,")), Ok(Fq12::from_int(12)));
        assert_eq!(parse_fq12(&mut cursor(",")), Ok(Fq12::ZERO));
        assert_eq!(parse_fq12(&mut cursor("054.7,T")), Ok(Fq12(54 * 4096 + 2867)));
        // digits past the fifth are ignored
        assert_eq!(
            parse_fq12(&mut cursor("0.1250000009,")),
            parse_fq12(&mut cursor("0.125,"))
        );
        assert_eq!(parse_fq12(&mut cursor("1.2x,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_fq12(&mut cursor("600000.0,")), Err(NmeaError::MalformedInteger));
    }

    #[test]
    fn fixed_point_rejects_bare_minus() {
        assert_eq!(parse_fq12(&mut cursor("-,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_fq12(&mut cursor("-.5,")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_fq12(&mut cursor("-*")), Err(NmeaError::MalformedInteger));
        assert_eq!(parse_fq12(&mut cursor("-0.5,")), Ok(Fq12(-2048)));
    }

    #[test]
    fn optional_fixed_point() {
        assert_eq!(parse_optional_fq12(&mut cursor(",")), Ok(None));
        assert_eq!(parse_optional_fq12(&mut cursor("*7A")), Ok(None));
        assert_eq!(parse_optional_fq12(&mut cursor("2,")), Ok(Some(Fq12::from_int(2))));
    }
}
