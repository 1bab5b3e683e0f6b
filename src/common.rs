use crate::cursor::SentenceCursor;
use crate::error::NmeaError;
use crate::fast_div::div_mod_100;
use crate::field::{is_field_empty, parse_i32, parse_u16, parse_u32_counted};
use crate::message::{Degree, FixStatus, Hemisphere, Location, UtcDate, UtcTime};

/// Consumes one letter, mapped through `pick`. Anything `pick` rejects is a
/// `MalformedFixChar` and is left unconsumed.
pub fn parse_letter<T>(
    cursor: &mut SentenceCursor,
    pick: impl FnOnce(u8) -> Option<T>,
) -> Result<T, NmeaError> {
    let value = pick(cursor.peek()).ok_or(NmeaError::MalformedFixChar)?;
    cursor.advance()?;
    Ok(value)
}

/// `hhmmss.sss`. Hour, minute and second are written before the fraction is
/// read, so they stay updated if the fraction turns out to be malformed.
pub fn parse_utc_time(cursor: &mut SentenceCursor, time: &mut UtcTime) -> Result<(), NmeaError> {
    let hhmmss = parse_i32(cursor)?;
    let hhmmss = u32::try_from(hhmmss).map_err(|_| NmeaError::MalformedInteger)?;
    let (hhmm, second) = div_mod_100(hhmmss);
    let (hour, minute) = div_mod_100(hhmm);
    // 60 is a leap second
    if hour > 23 || minute > 59 || second > 60 {
        return Err(NmeaError::MalformedInteger);
    }
    time.hour = hour as u8;
    time.minute = minute as u8;
    time.second = second as u8;

    cursor.expect(b'.')?;
    let (fraction, digits) = parse_u32_counted(cursor)?;
    // The fraction is scaled by its digit count, so `.5` is 500 ms rather than
    // the raw integer 5. More than three digits cannot be held in milliseconds.
    time.millisecond = match digits {
        0 => 0,
        1 => fraction * 100,
        2 => fraction * 10,
        3 => fraction,
        _ => return Err(NmeaError::MalformedInteger),
    } as u16;
    Ok(())
}

/// `ddmmyy`, years are taken to be in 2000-2099.
pub fn parse_utc_date(cursor: &mut SentenceCursor, date: &mut UtcDate) -> Result<(), NmeaError> {
    let (ddmmyy, digits) = parse_u32_counted(cursor)?;
    if digits != 6 {
        return Err(NmeaError::MalformedInteger);
    }
    let (ddmm, year) = div_mod_100(ddmmyy);
    let (day, month) = div_mod_100(ddmm);
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(NmeaError::MalformedInteger);
    }
    date.year = 2000 + year as u16;
    date.month = month as u8;
    date.day = day as u8;
    Ok(())
}

/// `(d)ddmm.mmmm`. Leaves the hemisphere alone.
pub fn parse_degree(cursor: &mut SentenceCursor, degree: &mut Degree) -> Result<(), NmeaError> {
    let ddmm = parse_u16(cursor)?;
    cursor.expect(b'.')?;
    let (minute_decimal, digits) = parse_u32_counted(cursor)?;

    let (degrees, minutes) = div_mod_100(ddmm as u32);
    if degrees > 180 || minutes > 59 {
        return Err(NmeaError::MalformedInteger);
    }
    degree.degrees = degrees as u8;
    degree.minutes = minutes as u8;
    degree.minute_decimal = minute_decimal;
    degree.minute_decimal_digits = digits;
    Ok(())
}

/// `lat,N|S,lon,E|W,` including the trailing comma.
pub fn parse_location(
    cursor: &mut SentenceCursor,
    location: &mut Location,
) -> Result<(), NmeaError> {
    parse_degree(cursor, &mut location.latitude)?;
    cursor.expect(b',')?;
    location.latitude.hemisphere = Some(parse_letter(cursor, |b| match b {
        b'N' => Some(Hemisphere::North),
        b'S' => Some(Hemisphere::South),
        _ => None,
    })?);
    cursor.expect(b',')?;

    parse_degree(cursor, &mut location.longitude)?;
    cursor.expect(b',')?;
    location.longitude.hemisphere = Some(parse_letter(cursor, |b| match b {
        b'E' => Some(Hemisphere::East),
        b'W' => Some(Hemisphere::West),
        _ => None,
    })?);
    cursor.expect(b',')
}

/// NMEA 2.3 mode indicator.
pub fn parse_fix_status(cursor: &mut SentenceCursor) -> Result<FixStatus, NmeaError> {
    parse_letter(cursor, |b| match b {
        b'A' => Some(FixStatus::Autonomous),
        b'D' | b'F' | b'R' => Some(FixStatus::Differential),
        b'E' => Some(FixStatus::Estimation),
        b'N' => Some(FixStatus::Invalid),
        _ => None,
    })
}

/// `A` (valid) or `V` (void).
pub fn parse_data_valid(cursor: &mut SentenceCursor) -> Result<bool, NmeaError> {
    parse_letter(cursor, |b| match b {
        b'A' => Some(true),
        b'V' => Some(false),
        _ => None,
    })
}

/// A unit letter such as the `M` after an altitude. Some receivers leave it
/// empty, which is accepted.
pub fn skip_unit(cursor: &mut SentenceCursor, unit: u8) -> Result<(), NmeaError> {
    if is_field_empty(cursor) {
        return Ok(());
    }
    cursor.expect(unit)
}

/// The optional `,<mode>` that NMEA 2.3 appended to RMC, VTG and GLL.
/// Overrides `status` when present.
pub fn parse_trailing_mode(
    cursor: &mut SentenceCursor,
    status: &mut FixStatus,
) -> Result<(), NmeaError> {
    if cursor.peek() != b',' {
        return Ok(());
    }
    cursor.advance()?;
    if !is_field_empty(cursor) {
        *status = parse_fix_status(cursor)?;
    }
    Ok(())
}

/// GGA fix quality digit.
pub fn fix_status_from_quality(quality: u8) -> Result<FixStatus, NmeaError> {
    match quality {
        0 => Ok(FixStatus::Invalid),
        1 => Ok(FixStatus::Autonomous),
        2..=5 => Ok(FixStatus::Differential),
        6..=8 => Ok(FixStatus::Estimation),
        _ => Err(NmeaError::MalformedInteger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(input: &str) -> SentenceCursor<'_> {
        SentenceCursor::new(input.as_bytes())
    }

    #[test]
    fn utc_time() {
        let mut time = UtcTime::default();
        parse_utc_time(&mut cursor("235316.000,"), &mut time).unwrap();
        assert_eq!(
            time,
            UtcTime {
                hour: 23,
                minute: 53,
                second: 16,
                millisecond: 0
            }
        );

        parse_utc_time(&mut cursor("080023.5,"), &mut time).unwrap();
        assert_eq!((time.hour, time.minute, time.second), (8, 0, 23));
        assert_eq!(time.millisecond, 500);

        parse_utc_time(&mut cursor("000000.25*"), &mut time).unwrap();
        assert_eq!(time.millisecond, 250);
    }

    #[test]
    fn utc_time_partial_write() {
        let mut time = UtcTime {
            hour: 1,
            minute: 2,
            second: 3,
            millisecond: 4,
        };
        let mut c = cursor("120102,A");
        assert_eq!(parse_utc_time(&mut c, &mut time), Err(NmeaError::MalformedFixChar));
        assert_eq!(c.peek(), b',');
        // the integer part landed, the fraction did not
        assert_eq!((time.hour, time.minute, time.second), (12, 1, 2));
        assert_eq!(time.millisecond, 4);
    }

    #[test]
    fn utc_time_out_of_range() {
        let mut time = UtcTime::default();
        assert_eq!(
            parse_utc_time(&mut cursor("246000.000,"), &mut time),
            Err(NmeaError::MalformedInteger)
        );
        assert_eq!(
            parse_utc_time(&mut cursor("-10000.000,"), &mut time),
            Err(NmeaError::MalformedInteger)
        );
        assert_eq!(
            parse_utc_time(&mut cursor("120000.1234,"), &mut time),
            Err(NmeaError::MalformedInteger)
        );
        assert_eq!(time, UtcTime { hour: 12, ..UtcTime::default() });
    }

    #[test]
    fn utc_date() {
        let mut date = UtcDate::default();
        parse_utc_date(&mut cursor("091202,"), &mut date).unwrap();
        assert_eq!(
            date,
            UtcDate {
                year: 2002,
                month: 12,
                day: 9
            }
        );
        assert_eq!(
            parse_utc_date(&mut cursor("91202,"), &mut date),
            Err(NmeaError::MalformedInteger)
        );
        assert_eq!(
            parse_utc_date(&mut cursor("321302,"), &mut date),
            Err(NmeaError::MalformedInteger)
        );
    }

    #[test]
    fn degree() {
        let mut degree = Degree::default();
        parse_degree(&mut cursor("12000.0090,"), &mut degree).unwrap();
        assert_eq!(degree.degrees, 120);
        assert_eq!(degree.minutes, 0);
        assert_eq!(degree.minute_decimal, 90);
        assert_eq!(degree.minute_decimal_digits, 4);
        assert_eq!(degree.hemisphere, None);

        parse_degree(&mut cursor("4717.11437,"), &mut degree).unwrap();
        assert_eq!((degree.degrees, degree.minutes), (47, 17));
        assert_eq!(degree.minute_decimal, 11437);
        assert_eq!(degree.minute_decimal_digits, 5);
    }

    #[test]
    fn degree_needs_decimal_point() {
        let mut degree = Degree::default();
        assert_eq!(
            parse_degree(&mut cursor("4717,N"), &mut degree),
            Err(NmeaError::MalformedFixChar)
        );
        assert_eq!(
            parse_degree(&mut cursor(",N"), &mut degree),
            Err(NmeaError::MalformedFixChar)
        );
    }

    #[test]
    fn location() {
        let mut location = Location::default();
        let mut c = cursor("2959.9925,N,12000.0090,W,");
        parse_location(&mut c, &mut location).unwrap();
        assert!(c.at_end());

        let lat = location.latitude;
        assert_eq!(lat.hemisphere, Some(Hemisphere::North));
        assert_eq!(lat.hemisphere.map(Hemisphere::sign), Some(1));
        assert_eq!((lat.degrees, lat.minutes, lat.minute_decimal), (29, 59, 9925));

        let lon = location.longitude;
        assert_eq!(lon.hemisphere, Some(Hemisphere::West));
        assert_eq!(lon.hemisphere.map(Hemisphere::sign), Some(1));
        assert_eq!((lon.degrees, lon.minutes, lon.minute_decimal), (120, 0, 90));
    }

    #[test]
    fn location_south_east() {
        let mut location = Location::default();
        parse_location(&mut cursor("3351.1234,S,15112.5,E,"), &mut location).unwrap();
        assert_eq!(location.latitude.hemisphere, Some(Hemisphere::South));
        assert_eq!(location.latitude.hemisphere.map(Hemisphere::sign), Some(0));
        assert_eq!(location.longitude.hemisphere, Some(Hemisphere::East));
        assert_eq!(location.longitude.hemisphere.map(Hemisphere::sign), Some(0));
    }

    #[test]
    fn location_bad_hemisphere_keeps_latitude() {
        let mut location = Location::default();
        let mut c = cursor("2959.9925,N,12000.0090,X,");
        assert_eq!(
            parse_location(&mut c, &mut location),
            Err(NmeaError::MalformedFixChar)
        );
        assert_eq!(c.peek(), b'X');
        assert_eq!(location.latitude.hemisphere, Some(Hemisphere::North));
        assert_eq!(location.longitude.degrees, 120);
        assert_eq!(location.longitude.hemisphere, None);
    }

    #[test]
    fn status_letters() {
        assert_eq!(parse_fix_status(&mut cursor("A*")), Ok(FixStatus::Autonomous));
        assert_eq!(parse_fix_status(&mut cursor("D*")), Ok(FixStatus::Differential));
        assert_eq!(parse_fix_status(&mut cursor("E*")), Ok(FixStatus::Estimation));
        assert_eq!(parse_fix_status(&mut cursor("N*")), Ok(FixStatus::Invalid));
        assert_eq!(parse_fix_status(&mut cursor("Q*")), Err(NmeaError::MalformedFixChar));
        assert_eq!(parse_data_valid(&mut cursor("V,")), Ok(false));
        assert_eq!(fix_status_from_quality(2), Ok(FixStatus::Differential));
        assert_eq!(fix_status_from_quality(9), Err(NmeaError::MalformedInteger));
    }

    #[test]
    fn units_and_modes() {
        assert_eq!(skip_unit(&mut cursor("M,"), b'M'), Ok(()));
        assert_eq!(skip_unit(&mut cursor(",M"), b'M'), Ok(()));
        assert_eq!(skip_unit(&mut cursor("F,"), b'M'), Err(NmeaError::MalformedFixChar));

        let mut status = FixStatus::Autonomous;
        parse_trailing_mode(&mut cursor("*3C"), &mut status).unwrap();
        assert_eq!(status, FixStatus::Autonomous);
        parse_trailing_mode(&mut cursor(",*3C"), &mut status).unwrap();
        assert_eq!(status, FixStatus::Autonomous);
        parse_trailing_mode(&mut cursor(",D*3C"), &mut status).unwrap();
        assert_eq!(status, FixStatus::Differential);
    }
}
