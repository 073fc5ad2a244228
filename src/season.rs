use time::{Date, OffsetDateTime};

/// Northern-hemisphere season for a calendar date.
///
/// Boundaries follow the astronomical calendar: spring starts March 20,
/// summer June 21, fall September 23, winter December 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn on(date: Date) -> Self {
        let month = date.month() as u8;
        let day = date.day();

        match (month, day) {
            (3, 20..) | (4..=5, _) | (6, ..=20) => Season::Spring,
            (6, _) | (7..=8, _) | (9, ..=22) => Season::Summer,
            (9, _) | (10..=11, _) | (12, ..=20) => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn today() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::on(now.date())
    }

    /// Hero background for the season. Spring reuses the summer art,
    /// it is the closest match in the current asset set.
    pub fn background_image(self) -> &'static str {
        match self {
            Season::Spring | Season::Summer => "/static/images/summer_bg_lrg.png",
            Season::Fall => "/static/images/fall_bg_lrg.png",
            Season::Winter => "/static/images/winter_bg_lrg.png",
        }
    }

    /// Class hooked by the stylesheet for per-season accent colors.
    pub fn css_class(self) -> String {
        format!("season-{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn equinox_and_solstice_boundaries() {
        assert_eq!(Season::on(date!(2025 - 03 - 19)), Season::Winter);
        assert_eq!(Season::on(date!(2025 - 03 - 20)), Season::Spring);
        assert_eq!(Season::on(date!(2025 - 06 - 20)), Season::Spring);
        assert_eq!(Season::on(date!(2025 - 06 - 21)), Season::Summer);
        assert_eq!(Season::on(date!(2025 - 09 - 22)), Season::Summer);
        assert_eq!(Season::on(date!(2025 - 09 - 23)), Season::Fall);
        assert_eq!(Season::on(date!(2025 - 12 - 20)), Season::Fall);
        assert_eq!(Season::on(date!(2025 - 12 - 21)), Season::Winter);
        assert_eq!(Season::on(date!(2026 - 01 - 15)), Season::Winter);
    }

    #[test]
    fn spring_shares_the_summer_backdrop() {
        assert_eq!(
            Season::Spring.background_image(),
            Season::Summer.background_image()
        );
        assert_ne!(
            Season::Fall.background_image(),
            Season::Winter.background_image()
        );
    }

    #[test]
    fn css_class_is_lowercase() {
        assert_eq!(Season::Fall.css_class(), "season-fall");
    }
}
