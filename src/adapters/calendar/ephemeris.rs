//! Apparent geocentric longitude of the sun.
//!
//! Earth's heliocentric longitude comes from Meeus' abridged VSOP87 table.
//! The geometric position is then corrected to the FK5 frame and for
//! nutation plus aberration. Term instants found this way agree with the
//! published tables to within a minute over 1900-2100.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

/// Julian day of 0001-01-01 00:00 (proleptic Gregorian) minus one day,
/// so that adding `num_days_from_ce` lands on midnight of the date.
const JD_CE_OFFSET: f64 = 1_721_424.5;

const J2000: f64 = 2_451_545.0;

const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Newton steps stop once a correction falls under this many seconds.
const CONVERGENCE_SECONDS: f64 = 1.0;

const MAX_ITERATIONS: usize = 10;

/// (amplitude in 1e-8 rad, phase, frequency per Julian millennium)
type Term = (f64, f64, f64);

const L0: [Term; 64] = [
    (175_347_046.0, 0.0, 0.0),
    (3_341_656.0, 4.669_256_8, 6_283.075_85),
    (34_894.0, 4.626_1, 12_566.151_7),
    (3_497.0, 2.744_1, 5_753.384_9),
    (3_418.0, 2.828_9, 3.523_1),
    (3_136.0, 3.627_7, 77_713.771_5),
    (2_676.0, 4.418_1, 7_860.419_4),
    (2_343.0, 6.135_2, 3_930.209_7),
    (1_324.0, 0.742_5, 11_506.769_8),
    (1_273.0, 2.037_1, 529.691),
    (1_199.0, 1.109_6, 1_577.343_5),
    (990.0, 5.233, 5_884.927),
    (902.0, 2.045, 26.298),
    (857.0, 3.508, 398.149),
    (780.0, 1.179, 5_223.694),
    (753.0, 2.533, 5_507.553),
    (505.0, 4.583, 18_849.228),
    (492.0, 4.205, 775.523),
    (357.0, 2.92, 0.067),
    (317.0, 5.849, 11_790.629),
    (284.0, 1.899, 796.298),
    (271.0, 0.315, 10_977.079),
    (243.0, 0.345, 5_486.778),
    (206.0, 4.806, 2_544.314),
    (205.0, 1.869, 5_573.143),
    (202.0, 2.458, 6_069.777),
    (156.0, 0.833, 213.299),
    (132.0, 3.411, 2_942.463),
    (126.0, 1.083, 20.775),
    (115.0, 0.645, 0.98),
    (103.0, 0.636, 4_694.003),
    (102.0, 0.976, 15_720.839),
    (102.0, 4.267, 7.114),
    (99.0, 6.21, 2_146.17),
    (98.0, 0.68, 155.42),
    (86.0, 5.98, 161_000.69),
    (85.0, 1.3, 6_275.96),
    (85.0, 3.67, 71_430.7),
    (80.0, 1.81, 17_260.15),
    (79.0, 3.04, 12_036.46),
    (75.0, 1.76, 5_088.63),
    (74.0, 3.5, 3_154.69),
    (74.0, 4.68, 801.82),
    (70.0, 0.83, 9_437.76),
    (62.0, 3.98, 8_827.39),
    (61.0, 1.82, 7_084.9),
    (57.0, 2.78, 6_286.6),
    (56.0, 4.39, 14_143.5),
    (56.0, 3.47, 6_279.55),
    (52.0, 0.19, 12_139.55),
    (52.0, 1.33, 1_748.02),
    (51.0, 0.28, 5_856.48),
    (49.0, 0.49, 1_194.45),
    (41.0, 5.37, 8_429.24),
    (41.0, 2.4, 19_651.05),
    (39.0, 6.17, 10_447.39),
    (37.0, 6.04, 10_213.29),
    (37.0, 2.57, 1_059.38),
    (36.0, 1.71, 2_352.87),
    (36.0, 1.78, 6_812.77),
    (33.0, 0.59, 17_789.85),
    (30.0, 0.44, 83_996.85),
    (30.0, 2.74, 1_349.87),
    (25.0, 3.16, 4_690.48),
];

const L1: [Term; 34] = [
    (628_331_966_747.0, 0.0, 0.0),
    (206_059.0, 2.678_235, 6_283.075_85),
    (4_303.0, 2.635_1, 12_566.151_7),
    (425.0, 1.59, 3.523),
    (119.0, 5.796, 26.298),
    (109.0, 2.966, 1_577.344),
    (93.0, 2.59, 18_849.23),
    (72.0, 1.14, 529.69),
    (68.0, 1.87, 398.15),
    (67.0, 4.41, 5_507.55),
    (59.0, 2.89, 5_223.69),
    (56.0, 2.17, 155.42),
    (45.0, 0.4, 796.3),
    (36.0, 0.47, 775.52),
    (29.0, 2.65, 7.11),
    (21.0, 5.34, 0.98),
    (19.0, 1.85, 5_486.78),
    (19.0, 4.97, 213.3),
    (17.0, 2.99, 6_275.96),
    (16.0, 0.03, 2_544.31),
    (16.0, 1.43, 2_146.17),
    (15.0, 1.21, 10_977.08),
    (12.0, 2.83, 1_748.02),
    (12.0, 3.26, 5_088.63),
    (12.0, 5.27, 1_194.45),
    (12.0, 2.08, 4_694.0),
    (11.0, 0.77, 553.57),
    (10.0, 1.3, 6_286.6),
    (10.0, 4.24, 1_349.87),
    (9.0, 2.7, 242.73),
    (9.0, 5.64, 951.72),
    (8.0, 5.3, 2_352.87),
    (6.0, 2.65, 9_437.76),
    (6.0, 4.67, 4_690.48),
];

const L2: [Term; 20] = [
    (52_919.0, 0.0, 0.0),
    (8_720.0, 1.072_1, 6_283.075_8),
    (309.0, 0.867, 12_566.152),
    (27.0, 0.05, 3.52),
    (16.0, 5.19, 26.3),
    (16.0, 3.68, 155.42),
    (10.0, 0.76, 18_849.23),
    (9.0, 2.06, 77_713.77),
    (7.0, 0.83, 775.52),
    (5.0, 4.66, 1_577.34),
    (4.0, 1.03, 7.11),
    (4.0, 3.44, 5_573.14),
    (3.0, 5.14, 796.3),
    (3.0, 6.05, 5_507.55),
    (3.0, 1.19, 242.73),
    (3.0, 6.12, 529.69),
    (3.0, 0.31, 398.15),
    (3.0, 2.28, 553.57),
    (2.0, 4.38, 5_223.69),
    (2.0, 3.75, 0.98),
];

const L3: [Term; 7] = [
    (289.0, 5.844, 6_283.076),
    (35.0, 0.0, 0.0),
    (17.0, 5.49, 12_566.15),
    (3.0, 5.2, 155.42),
    (1.0, 4.72, 3.52),
    (1.0, 5.3, 18_849.23),
    (1.0, 5.97, 242.73),
];

const L4: [Term; 3] = [(114.0, 3.142, 0.0), (8.0, 4.13, 6_283.08), (1.0, 3.84, 12_566.15)];

const L5: [Term; 1] = [(1.0, 3.14, 0.0)];

/// Julian day of a UT instant.
pub fn julian_day(instant: NaiveDateTime) -> f64 {
    let seconds = f64::from(instant.num_seconds_from_midnight())
        + f64::from(instant.nanosecond()) / 1e9;
    f64::from(instant.date().num_days_from_ce()) + JD_CE_OFFSET + seconds / SECONDS_PER_DAY
}

/// TT minus UT in seconds (Espenak-Meeus polynomials, long-term parabola
/// outside 1961-2050).
pub fn delta_t_seconds(year: f64) -> f64 {
    if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t * t
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.334_5 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

fn series(terms: &[Term], tau: f64) -> f64 {
    terms
        .iter()
        .map(|(amplitude, phase, frequency)| amplitude * (phase + frequency * tau).cos())
        .sum()
}

/// Apparent longitude of the sun in degrees `[0, 360)` at a UT instant.
pub fn apparent_longitude(instant: NaiveDateTime) -> f64 {
    let decimal_year = f64::from(instant.year()) + f64::from(instant.ordinal0()) / 365.25;
    let jde = julian_day(instant) + delta_t_seconds(decimal_year) / SECONDS_PER_DAY;
    let tau = (jde - J2000) / DAYS_PER_MILLENNIUM;

    let earth = [&L0[..], &L1[..], &L2[..], &L3[..], &L4[..], &L5[..]]
        .iter()
        .rev()
        .fold(0.0, |acc, terms| acc * tau + series(terms, tau))
        / 1e8;
    let geometric = earth.to_degrees() + 180.0;

    let t = tau * 10.0;
    let node = (125.044_52 - 1_934.136_261 * t).to_radians();
    let sun_mean = (280.466_5 + 36_000.769_8 * t).to_radians();
    let moon_mean = (218.316_5 + 481_267.881_3 * t).to_radians();
    let nutation = -17.20 * node.sin() - 1.32 * (2.0 * sun_mean).sin()
        - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * node).sin();

    let arcseconds = nutation - 0.090_33 - 20.489_8;
    (geometric + arcseconds / 3_600.0).rem_euclid(360.0)
}

/// UT instant at which the sun reaches `target` degrees, searched from `guess`.
pub fn solar_longitude_instant(target: f64, guess: NaiveDateTime) -> NaiveDateTime {
    let mut instant = guess;
    for _ in 0..MAX_ITERATIONS {
        let behind = (target - apparent_longitude(instant) + 540.0).rem_euclid(360.0) - 180.0;
        let seconds = behind / 360.0 * TROPICAL_YEAR_DAYS * SECONDS_PER_DAY;
        instant += Duration::milliseconds((seconds * 1_000.0).round() as i64);
        if seconds.abs() < CONVERGENCE_SECONDS {
            break;
        }
    }
    instant
}
