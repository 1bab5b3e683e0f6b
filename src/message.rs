use core::fmt;

use heapless::Vec;

use crate::fixed_point::Fq12;

/// Satellite system that produced the sentence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TalkerId {
    BeiDou,
    #[default]
    Gps,
    Glonass,
    Gnss,
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TalkerId::BeiDou => "BD",
            TalkerId::Gps => "GP",
            TalkerId::Glonass => "GL",
            TalkerId::Gnss => "GN",
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SentenceType {
    #[default]
    Gga,
    Gsa,
    Gsv,
    Rmc,
    Vtg,
    Gll,
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SentenceType::Gga => "GGA",
            SentenceType::Gsa => "GSA",
            SentenceType::Gsv => "GSV",
            SentenceType::Rmc => "RMC",
            SentenceType::Vtg => "VTG",
            SentenceType::Gll => "GLL",
        })
    }
}

/// Positioning mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixStatus {
    /// `A`
    Autonomous,
    /// `E`, dead reckoning
    Estimation,
    /// `N` or `V`
    #[default]
    Invalid,
    /// `D`, also used for RTK (`F`, `R`)
    Differential,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UtcTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UtcDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl fmt::Display for UtcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// 1 for north latitudes and west longitudes, 0 otherwise.
    pub fn sign(self) -> u8 {
        match self {
            Hemisphere::North | Hemisphere::West => 1,
            Hemisphere::South | Hemisphere::East => 0,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

/// One coordinate axis as sent on the wire: whole degrees, whole minutes and
/// the fractional minute digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Degree {
    /// `None` until a hemisphere letter has been read for this axis.
    pub hemisphere: Option<Hemisphere>,
    pub degrees: u8,
    pub minutes: u8,
    /// Fraction digits verbatim, `"0090"` is 90.
    pub minute_decimal: u32,
    /// Number of fraction digits, `"0090"` is 4.
    pub minute_decimal_digits: u8,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}.{:0width$}'",
            self.degrees,
            self.minutes,
            self.minute_decimal,
            width = self.minute_decimal_digits as usize
        )?;
        if let Some(hemisphere) = self.hemisphere {
            write!(f, "{}", hemisphere.as_char())?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Location {
    pub longitude: Degree,
    pub latitude: Degree,
    /// Meters above mean sea level.
    pub altitude: Fq12,
    /// Meters between the geoid and the WGS84 ellipsoid.
    pub geoid_separation: Fq12,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Speed {
    pub kph: Fq12,
    /// Speed over ground in knots.
    pub sog: Fq12,
}

/// Course over ground in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle {
    pub true_north: Fq12,
    pub magnetic_north: Fq12,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixType {
    #[default]
    NoFix,
    Fix2D,
    Fix3D,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Precision {
    /// Satellites used in the fix, from GGA.
    pub satellite_count: u8,
    pub pdop: Fq12,
    pub hdop: Fq12,
    pub vdop: Fq12,
    pub fix_type: FixType,
    /// PRNs listed by the last GSA sentence.
    pub used_satellites: Vec<u8, 12>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SatelliteInfo {
    pub prn: u8,
    /// Degrees above the horizon.
    pub elevation: u8,
    /// Degrees from true north.
    pub azimuth: u16,
    /// dB-Hz, `None` when the satellite is not tracked.
    pub snr: Option<u8>,
}

/// A single GSV page. Pages are not merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SkyView {
    pub message_count: u8,
    pub message_index: u8,
    pub satellites_in_view: u8,
    pub satellites: Vec<SatelliteInfo, 4>,
}

/// Decoded state, updated in place by every sentence.
///
/// Only the fields carried by the current sentence are written; everything
/// else keeps whatever it held before. Call [`NmeaMessage::clear`] to start
/// over.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NmeaMessage {
    pub talker: TalkerId,
    pub sentence: SentenceType,
    pub status: FixStatus,
    pub time: UtcTime,
    pub date: UtcDate,
    pub location: Location,
    pub speed: Speed,
    pub angle: Angle,
    pub precision: Precision,
    pub sky: SkyView,
}

impl NmeaMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_fix(&self) -> bool {
        self.status != FixStatus::Invalid
            && self.location.latitude.hemisphere.is_some()
            && self.location.longitude.hemisphere.is_some()
    }
}
