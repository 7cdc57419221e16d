//! Maps current conditions to the two-color background gradient.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Linear interpolation between two colors, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// Local-hour bucket used only for gradient selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Fixed hour boundaries: [5,11) morning, [11,16) day, [16,20) evening,
    /// everything else night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Morning,
            11..=15 => Self::Day,
            16..=19 => Self::Evening,
            _ => Self::Night,
        }
    }
}

/// An ordered top-to-bottom color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

const NIGHT_BLACK: Rgb = Rgb::from_hex(0x0b0f1a);
const DARK_NAVY: Rgb = Rgb::from_hex(0x0f172a);
const BLUE: Rgb = Rgb::from_hex(0x3b82f6);
const LIGHT_BLUE: Rgb = Rgb::from_hex(0x93c5fd);
const DARK_SLATE: Rgb = Rgb::from_hex(0x334155);
const NEAR_WHITE: Rgb = Rgb::from_hex(0xf8fafc);
const LIGHT_GREY: Rgb = Rgb::from_hex(0xcbd5e1);
const SLATE: Rgb = Rgb::from_hex(0x475569);
const PALE_GREY_BLUE: Rgb = Rgb::from_hex(0xdbe3ec);
const GREY_BLUE: Rgb = Rgb::from_hex(0x94a3b8);
const PALE_YELLOW: Rgb = Rgb::from_hex(0xfef9c3);
const AMBER: Rgb = Rgb::from_hex(0xf59e0b);
const BURNT_ORANGE: Rgb = Rgb::from_hex(0xc2410c);
const GREY: Rgb = Rgb::from_hex(0x6b7280);
const PALE_SKY: Rgb = Rgb::from_hex(0xbae6fd);
const SKY_BLUE: Rgb = Rgb::from_hex(0x38bdf8);
const MORNING_GOLD: Rgb = Rgb::from_hex(0xfef3c7);
const MORNING_PEACH: Rgb = Rgb::from_hex(0xfdba74);
const DAY_GOLD: Rgb = Rgb::from_hex(0xfde68a);
const DAY_AZURE: Rgb = Rgb::from_hex(0x60a5fa);
const EVENING_ROSE: Rgb = Rgb::from_hex(0xfca5a5);
const EVENING_VIOLET: Rgb = Rgb::from_hex(0x7c3aed);

/// Shared pair for clear nights and the generic night default. Both paths
/// must resolve to the same colors.
const NIGHT_DEFAULT: Gradient = Gradient {
    start: NIGHT_BLACK,
    end: GREY,
};

/// Gradient shown when no weather is available (the screen's static
/// background color).
pub fn fallback() -> Gradient {
    Gradient {
        start: DARK_NAVY,
        end: DARK_SLATE,
    }
}

/// Pick the background pair for the current weather. Total over any input;
/// condition matching is a case-insensitive substring check. The branch
/// order matters: precipitation beats temperature beats clear-sky handling.
pub fn select_gradient(condition: &str, time_of_day: TimeOfDay, temperature_c: f64) -> Gradient {
    let condition = condition.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|needle| condition.contains(needle));
    let night = time_of_day == TimeOfDay::Night;

    if has(&["rain", "drizzle"]) {
        return if night {
            Gradient {
                start: DARK_NAVY,
                end: BLUE,
            }
        } else {
            Gradient {
                start: BLUE,
                end: LIGHT_BLUE,
            }
        };
    }
    if has(&["storm", "thunder"]) {
        return Gradient {
            start: NIGHT_BLACK,
            end: DARK_SLATE,
        };
    }
    if has(&["snow", "sleet"]) {
        return Gradient {
            start: NEAR_WHITE,
            end: LIGHT_GREY,
        };
    }

    // Exclusive bounds: exactly 5 and 25 degrees count as mild
    if temperature_c < 5.0 {
        return if night {
            Gradient {
                start: NIGHT_BLACK,
                end: SLATE,
            }
        } else {
            Gradient {
                start: PALE_GREY_BLUE,
                end: GREY_BLUE,
            }
        };
    }
    if temperature_c > 25.0 {
        return if night {
            Gradient {
                start: NIGHT_BLACK,
                end: BURNT_ORANGE,
            }
        } else {
            Gradient {
                start: PALE_YELLOW,
                end: AMBER,
            }
        };
    }

    if has(&["sun", "clear", "fair"]) {
        return match time_of_day {
            TimeOfDay::Morning => Gradient {
                start: MORNING_GOLD,
                end: MORNING_PEACH,
            },
            TimeOfDay::Day => Gradient {
                start: DAY_GOLD,
                end: DAY_AZURE,
            },
            TimeOfDay::Evening => Gradient {
                start: EVENING_ROSE,
                end: EVENING_VIOLET,
            },
            TimeOfDay::Night => NIGHT_DEFAULT,
        };
    }
    if night {
        return NIGHT_DEFAULT;
    }
    Gradient {
        start: PALE_SKY,
        end: SKY_BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_ignores_temperature() {
        let night = select_gradient("light rain", TimeOfDay::Night, 10.0);
        assert_eq!(night.start, DARK_NAVY);
        assert_eq!(night.end, BLUE);

        for temp in [-20.0, 5.0, 18.0, 40.0] {
            assert_eq!(select_gradient("light rain", TimeOfDay::Night, temp), night);
            assert_eq!(
                select_gradient("Patchy drizzle", TimeOfDay::Day, temp),
                Gradient {
                    start: BLUE,
                    end: LIGHT_BLUE,
                }
            );
        }
    }

    #[test]
    fn storm_pair_is_constant() {
        let expected = select_gradient("Thunderstorms", TimeOfDay::Day, 30.0);
        assert_eq!(expected.start, NIGHT_BLACK);
        assert_eq!(expected.end, DARK_SLATE);

        for time_of_day in [
            TimeOfDay::Morning,
            TimeOfDay::Day,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ] {
            for temp in [-10.0, 12.0, 35.0] {
                assert_eq!(select_gradient("storm approaching", time_of_day, temp), expected);
            }
        }
    }

    #[test]
    fn snow_pair_is_constant() {
        let expected = Gradient {
            start: NEAR_WHITE,
            end: LIGHT_GREY,
        };
        assert_eq!(select_gradient("Snow showers", TimeOfDay::Night, -5.0), expected);
        assert_eq!(select_gradient("sleet", TimeOfDay::Day, 2.0), expected);
    }

    #[test]
    fn rain_beats_snow_in_mixed_conditions() {
        // "Rain and snow" hits the rain branch first
        assert_eq!(
            select_gradient("Rain and snow", TimeOfDay::Day, 0.0),
            Gradient {
                start: BLUE,
                end: LIGHT_BLUE,
            }
        );
    }

    #[test]
    fn temperature_bounds_are_exclusive() {
        let default_day = Gradient {
            start: PALE_SKY,
            end: SKY_BLUE,
        };
        assert_eq!(select_gradient("Cloudy", TimeOfDay::Day, 5.0), default_day);
        assert_eq!(select_gradient("Cloudy", TimeOfDay::Day, 25.0), default_day);

        assert_eq!(
            select_gradient("Cloudy", TimeOfDay::Day, 4.9),
            Gradient {
                start: PALE_GREY_BLUE,
                end: GREY_BLUE,
            }
        );
        assert_eq!(
            select_gradient("Cloudy", TimeOfDay::Day, 25.1),
            Gradient {
                start: PALE_YELLOW,
                end: AMBER,
            }
        );
    }

    #[test]
    fn cold_and_hot_nights_darken() {
        assert_eq!(
            select_gradient("Overcast", TimeOfDay::Night, -3.0),
            Gradient {
                start: NIGHT_BLACK,
                end: SLATE,
            }
        );
        assert_eq!(
            select_gradient("Overcast", TimeOfDay::Night, 31.0),
            Gradient {
                start: NIGHT_BLACK,
                end: BURNT_ORANGE,
            }
        );
    }

    #[test]
    fn clear_sky_follows_time_of_day() {
        assert_eq!(
            select_gradient("Clear", TimeOfDay::Morning, 15.0),
            Gradient {
                start: MORNING_GOLD,
                end: MORNING_PEACH,
            }
        );
        assert_eq!(
            select_gradient("Sunny", TimeOfDay::Day, 20.0),
            Gradient {
                start: DAY_GOLD,
                end: DAY_AZURE,
            }
        );
        assert_eq!(
            select_gradient("Fair", TimeOfDay::Evening, 12.0),
            Gradient {
                start: EVENING_ROSE,
                end: EVENING_VIOLET,
            }
        );
    }

    #[test]
    fn clear_night_matches_generic_night_default() {
        let clear_night = select_gradient("Clear", TimeOfDay::Night, 15.0);
        let cloudy_night = select_gradient("Cloudy", TimeOfDay::Night, 15.0);
        assert_eq!(clear_night, cloudy_night);
        assert_eq!(clear_night, NIGHT_DEFAULT);
    }

    #[test]
    fn mild_cloudy_day_uses_default_pair() {
        assert_eq!(
            select_gradient("Partly Cloudy", TimeOfDay::Day, 18.0),
            Gradient {
                start: PALE_SKY,
                end: SKY_BLUE,
            }
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            select_gradient("RAIN", TimeOfDay::Day, 10.0),
            select_gradient("rain", TimeOfDay::Day, 10.0)
        );
        assert_eq!(
            select_gradient("THUNDER", TimeOfDay::Morning, 10.0),
            select_gradient("thunder", TimeOfDay::Evening, -10.0)
        );
    }

    #[test]
    fn total_over_arbitrary_input() {
        for condition in ["", "  ", "???", "A very long unknown condition text"] {
            for temp in [f64::MIN, -273.15, 0.0, 25.0, f64::MAX] {
                select_gradient(condition, TimeOfDay::Night, temp);
                select_gradient(condition, TimeOfDay::Day, temp);
            }
        }
        assert_eq!(
            select_gradient("", TimeOfDay::Night, 18.0),
            NIGHT_DEFAULT
        );
    }

    #[test]
    fn hour_buckets() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(10), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(15), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::from_hex(0x000000);
        let b = Rgb::from_hex(0xffffff);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::from_hex(0x808080));
    }
}
