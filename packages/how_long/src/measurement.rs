use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

pub(crate) const NANOS_PER_HOUR: u128 = 3_600_000_000_000;
pub(crate) const NANOS_PER_MINUTE: u128 = 60_000_000_000;
pub(crate) const NANOS_PER_SECOND: u128 = 1_000_000_000;
pub(crate) const NANOS_PER_MILLI: u128 = 1_000_000;

/// The rendering style used by [`Measurement::to_string_as`].
///
/// All formats follow the same unit tiering rule: only units at or above the
/// largest nonzero unit are shown, and once a unit is shown every finer unit
/// down to milliseconds is shown too. When hours, minutes and seconds are all
/// zero, only milliseconds are shown, with two decimal places.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeFormat {
    /// `1hrs 1min 5.500sec`, `1min 5.500sec`, `5.500sec` or `500.00ms`.
    #[default]
    Human,

    /// `01:01:05.500`, `01:05.500`, `5.500` or `500.00`.
    Condensed,

    /// `1 Hours, 1 Minutes, and 5.500 Seconds` down to `500.00 Milliseconds`.
    Expressive,
}

/// An immutable nanosecond-precision elapsed-time value.
///
/// A `Measurement` wraps a non-negative whole number of nanoseconds and
/// exposes it decomposed into hours, minutes, seconds and fractional
/// milliseconds, alongside exact arithmetic, total ordering and several
/// string renderings.
///
/// The nanosecond count is held as an exact integer, so equality and
/// arithmetic stay precise over multi-hour spans where floating point
/// would drift. Subtraction clamps at zero instead of failing: durations
/// cannot be negative, so `a - b` where `b >= a` yields the zero
/// measurement. This is a deliberate semantic, not an error condition.
///
/// # Examples
///
/// ```
/// use how_long::Measurement;
///
/// let measurement = Measurement::from_nanos(65_500_000_000);
///
/// assert_eq!(measurement.minutes(), 1);
/// assert_eq!(measurement.seconds(), 5);
/// assert_eq!(measurement.to_string(), "1min 5.500sec");
/// ```
///
/// Arithmetic and comparison work directly on values:
///
/// ```
/// use how_long::Measurement;
///
/// let short = Measurement::from_nanos(1_000_000);
/// let long = Measurement::from_nanos(2_000_000);
///
/// assert!(short < long);
/// assert_eq!(long - short, short);
/// assert_eq!(short - long, Measurement::ZERO); // Clamped, never negative.
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Measurement {
    nanoseconds: u128,
}

impl Measurement {
    /// The zero-length measurement.
    pub const ZERO: Self = Self::from_nanos(0);

    /// Creates a measurement from a whole number of nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanoseconds: u128) -> Self {
        Self { nanoseconds }
    }

    /// The total length of this measurement, in nanoseconds.
    #[must_use]
    pub fn nanoseconds(&self) -> u128 {
        self.nanoseconds
    }

    /// The whole hours component of the decomposed value. Unbounded above.
    #[must_use]
    pub fn hours(&self) -> u128 {
        self.nanoseconds / NANOS_PER_HOUR
    }

    /// The whole minutes component of the decomposed value, 0-59.
    #[must_use]
    pub fn minutes(&self) -> u8 {
        u8::try_from((self.nanoseconds % NANOS_PER_HOUR) / NANOS_PER_MINUTE)
            .expect("remainder of an hour is always below 60 minutes")
    }

    /// The whole seconds component of the decomposed value, 0-59.
    #[must_use]
    pub fn seconds(&self) -> u8 {
        u8::try_from((self.nanoseconds % NANOS_PER_MINUTE) / NANOS_PER_SECOND)
            .expect("remainder of a minute is always below 60 seconds")
    }

    /// The milliseconds component of the decomposed value, 0-999.999...
    ///
    /// Fractional: sub-millisecond precision is preserved as the fraction.
    #[must_use]
    pub fn milliseconds(&self) -> f64 {
        (self.nanoseconds % NANOS_PER_SECOND) as f64 / 1e6
    }

    /// The nanosecond count as a floating point number.
    ///
    /// Exact up to 2^53 nanoseconds (roughly 104 days); beyond that the
    /// conversion loses precision. Use [`nanoseconds()`][Self::nanoseconds]
    /// when exactness matters.
    #[must_use]
    pub fn as_nanos_f64(&self) -> f64 {
        self.nanoseconds as f64
    }

    /// Returns the sum of this measurement and another.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::from_nanos(self.nanoseconds.saturating_add(other.nanoseconds))
    }

    /// Returns the difference between this measurement and another,
    /// clamped at zero.
    ///
    /// Subtracting a longer measurement from a shorter one yields
    /// [`Measurement::ZERO`] rather than an error, because durations
    /// cannot be negative.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::from_nanos(self.nanoseconds.saturating_sub(other.nanoseconds))
    }

    /// Renders the measurement in the requested format.
    ///
    /// # Examples
    ///
    /// ```
    /// use how_long::{Measurement, TimeFormat};
    ///
    /// let measurement = Measurement::from_nanos(3_665_500_000_000);
    ///
    /// assert_eq!(measurement.to_string_as(TimeFormat::Human), "1hrs 1min 5.500sec");
    /// assert_eq!(measurement.to_string_as(TimeFormat::Condensed), "01:01:05.500");
    /// assert_eq!(
    ///     measurement.to_string_as(TimeFormat::Expressive),
    ///     "1 Hours, 1 Minutes, and 5.500 Seconds"
    /// );
    /// ```
    #[must_use]
    pub fn to_string_as(&self, format: TimeFormat) -> String {
        match format {
            TimeFormat::Human => self.human(),
            TimeFormat::Condensed => self.condensed(),
            TimeFormat::Expressive => self.expressive(),
        }
    }

    /// Projects the decomposed fields onto a time-of-day value.
    ///
    /// The hour field is deliberately not wrapped modulo 24: a measurement
    /// of more than a day reports 24 or more hours. The millisecond field
    /// is truncated to a whole number.
    #[must_use]
    pub fn to_time_of_day(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hours(),
            minute: self.minutes(),
            second: self.seconds(),
            millisecond: u16::try_from((self.nanoseconds % NANOS_PER_SECOND) / NANOS_PER_MILLI)
                .expect("remainder of a second is always below 1000 milliseconds"),
        }
    }

    /// Sub-second milliseconds rounded to the nearest whole number, for the
    /// three-digit millisecond field of the seconds-and-above format tiers.
    fn subsec_millis_rounded(&self) -> u128 {
        ((self.nanoseconds % NANOS_PER_SECOND) + NANOS_PER_MILLI / 2) / NANOS_PER_MILLI
    }

    fn condensed(&self) -> String {
        if self.hours() != 0 {
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else if self.minutes() != 0 {
            format!(
                "{:02}:{:02}.{:03}",
                self.minutes(),
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else if self.seconds() != 0 {
            format!("{}.{:03}", self.seconds(), self.subsec_millis_rounded())
        } else {
            // The milliseconds-only branch keeps its fraction, with two
            // decimal places. Output compatibility depends on this exact
            // asymmetry with the three-digit field of the other branches.
            format!("{:.2}", self.milliseconds())
        }
    }

    fn human(&self) -> String {
        if self.hours() != 0 {
            format!(
                "{}hrs {}min {}.{:03}sec",
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else if self.minutes() != 0 {
            format!(
                "{}min {}.{:03}sec",
                self.minutes(),
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else if self.seconds() != 0 {
            format!("{}.{:03}sec", self.seconds(), self.subsec_millis_rounded())
        } else {
            format!("{:.2}ms", self.milliseconds())
        }
    }

    fn expressive(&self) -> String {
        if self.hours() != 0 {
            format!(
                "{} Hours, {} Minutes, and {}.{:03} Seconds",
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else if self.minutes() != 0 {
            format!(
                "{} Minutes, and {}.{:03} Seconds",
                self.minutes(),
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else if self.seconds() != 0 {
            format!(
                "{}.{:03} Seconds",
                self.seconds(),
                self.subsec_millis_rounded()
            )
        } else {
            format!("{:.2} Milliseconds", self.milliseconds())
        }
    }
}

impl fmt::Display for Measurement {
    /// Renders the default [`TimeFormat::Human`] form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human())
    }
}

impl Add for Measurement {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Measurement::add(self, other)
    }
}

impl Sub for Measurement {
    type Output = Self;

    /// Clamps at zero; see [`Measurement::subtract`].
    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl From<Duration> for Measurement {
    fn from(duration: Duration) -> Self {
        Self::from_nanos(duration.as_nanos())
    }
}

impl From<Measurement> for Duration {
    /// Nanosecond-exact for any measurement whose second count fits in `u64`;
    /// saturates at the maximum representable duration beyond that.
    fn from(measurement: Measurement) -> Self {
        let nanos = measurement.nanoseconds();

        let Ok(secs) = u64::try_from(nanos / NANOS_PER_SECOND) else {
            return Self::MAX;
        };

        let subsec = u32::try_from(nanos % NANOS_PER_SECOND)
            .expect("remainder of a second always fits in u32");

        Self::new(secs, subsec)
    }
}

impl From<Measurement> for u128 {
    /// The nanosecond count.
    fn from(measurement: Measurement) -> Self {
        measurement.nanoseconds()
    }
}

/// A local time-of-day projection of a [`Measurement`].
///
/// Produced by [`Measurement::to_time_of_day`]. The hour field is not
/// wrapped modulo 24, so measurements longer than a day project onto an
/// "overflowed" time of day; this is accepted behavior, not corrected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeOfDay {
    hour: u128,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl TimeOfDay {
    /// The hour, 0 and up (not wrapped modulo 24).
    #[must_use]
    pub fn hour(&self) -> u128 {
        self.hour
    }

    /// The minute, 0-59.
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The second, 0-59.
    #[must_use]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// The whole milliseconds, 0-999, truncated from the fractional value.
    #[must_use]
    pub fn millisecond(&self) -> u16 {
        self.millisecond
    }
}
