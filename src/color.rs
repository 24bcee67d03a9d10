use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YarnColor {
    White,
    LightBlue,
    DarkBlue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl YarnColor {
    /// Coldest band first.
    pub const ALL: [YarnColor; 7] = [
        Self::White,
        Self::LightBlue,
        Self::DarkBlue,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Red,
    ];

    /// Lower (inclusive) and upper (exclusive) bounds of the band in °F.
    pub fn bounds(self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::White => (None, Some(30.0)),
            Self::LightBlue => (Some(30.0), Some(40.0)),
            Self::DarkBlue => (Some(40.0), Some(50.0)),
            Self::Green => (Some(50.0), Some(60.0)),
            Self::Yellow => (Some(60.0), Some(70.0)),
            Self::Orange => (Some(70.0), Some(80.0)),
            Self::Red => (Some(80.0), None),
        }
    }

    /// Agrees with [`yarn_color`], `NaN` included.
    pub fn contains(self, temperature: f64) -> bool {
        let (low, high) = self.bounds();
        // NaN clears every lower bound and no upper bound
        low.map_or(true, |low| temperature >= low || temperature.is_nan())
            && high.map_or(true, |high| temperature < high)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::LightBlue => "light blue",
            Self::DarkBlue => "dark blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for YarnColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the yarn for a daily average temperature in Fahrenheit.
///
/// `NaN` compares false against every bound and ends up in the last band.
pub fn yarn_color(temperature: f64) -> YarnColor {
    if temperature < 30.0 {
        YarnColor::White
    } else if temperature < 40.0 {
        YarnColor::LightBlue
    } else if temperature < 50.0 {
        YarnColor::DarkBlue
    } else if temperature < 60.0 {
        YarnColor::Green
    } else if temperature < 70.0 {
        YarnColor::Yellow
    } else if temperature < 80.0 {
        YarnColor::Orange
    } else {
        YarnColor::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_days() {
        assert_eq!(yarn_color(31.0).to_string(), "light blue");
        assert_eq!(yarn_color(50.0).to_string(), "green");
        assert_eq!(yarn_color(29.0).to_string(), "white");
        assert_eq!(yarn_color(80.0).to_string(), "red");
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(yarn_color(29.999), YarnColor::White);
        assert_eq!(yarn_color(30.0), YarnColor::LightBlue);
        assert_eq!(yarn_color(40.0), YarnColor::DarkBlue);
        assert_eq!(yarn_color(59.5), YarnColor::Green);
        assert_eq!(yarn_color(60.0), YarnColor::Yellow);
        assert_eq!(yarn_color(79.9), YarnColor::Orange);
    }

    #[test]
    fn open_ended_bands() {
        assert_eq!(yarn_color(-40.0), YarnColor::White);
        assert_eq!(yarn_color(f64::NEG_INFINITY), YarnColor::White);
        assert_eq!(yarn_color(120.0), YarnColor::Red);
        assert_eq!(yarn_color(f64::INFINITY), YarnColor::Red);
    }

    #[test]
    fn exactly_one_band_matches() {
        let mut temperature = -20.0;
        while temperature <= 110.0 {
            let matching: Vec<_> = YarnColor::ALL
                .into_iter()
                .filter(|color| color.contains(temperature))
                .collect();
            assert_eq!(matching, vec![yarn_color(temperature)], "at {temperature}");
            temperature += 0.25;
        }
    }

    #[test]
    fn nan_lands_in_exactly_the_red_band() {
        let matching: Vec<_> = YarnColor::ALL
            .into_iter()
            .filter(|color| color.contains(f64::NAN))
            .collect();
        assert_eq!(matching, vec![YarnColor::Red]);
        assert_eq!(yarn_color(f64::NAN), YarnColor::Red);
    }
}
