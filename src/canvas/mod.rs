//! Controls on the derived canvas surface. Each one turns a gesture into a token write
//! that is sent back into the store as a reverse-sync edit.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::tokens::{TokenStore, TokenValue};

pub const COLOR_CYCLE: [&str; 5] = ["#7c3aed", "#2563eb", "#059669", "#e11d48", "#d97706"];
pub const RADIUS_RANGE: RangeInclusive<i64> = 0..=32;
pub const GAP_RANGE: RangeInclusive<i64> = 4..=40;
pub const HEADING_WEIGHTS: [i64; 4] = [400, 500, 600, 700];

const PRIMARY_COLOR_KEY: &str = "color.action.primary";
const RADIUS_KEY: &str = "radius.component";
const GAP_KEY: &str = "space.content.gap";
const HEADING_WEIGHT_KEY: &str = "type.heading.weight";

pub type CanvasResult<T> = std::result::Result<T, CanvasError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("heading weight {0} is not offered on the canvas")]
    UnsupportedWeight(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasControl {
    /// Clicking the sample card advances the primary color.
    ColorCycle,
    RadiusSlider(i64),
    GapSlider(i64),
    WeightSelector(i64),
}

impl CanvasControl {
    pub const fn token_key(self) -> &'static str {
        match self {
            Self::ColorCycle => PRIMARY_COLOR_KEY,
            Self::RadiusSlider(_) => RADIUS_KEY,
            Self::GapSlider(_) => GAP_KEY,
            Self::WeightSelector(_) => HEADING_WEIGHT_KEY,
        }
    }

    /// The write this gesture produces, given the current store.
    pub fn edit(self, store: &TokenStore) -> CanvasResult<(&'static str, TokenValue)> {
        let value = match self {
            Self::ColorCycle => {
                let current = store.get(PRIMARY_COLOR_KEY).and_then(TokenValue::as_text);
                TokenValue::from(cycle_color(current))
            }
            Self::RadiusSlider(value) => TokenValue::Number(clamp_to(value, &RADIUS_RANGE)),
            Self::GapSlider(value) => TokenValue::Number(clamp_to(value, &GAP_RANGE)),
            Self::WeightSelector(weight) => {
                if !HEADING_WEIGHTS.contains(&weight) {
                    return Err(CanvasError::UnsupportedWeight(weight));
                }
                TokenValue::Number(weight)
            }
        };
        Ok((self.token_key(), value))
    }
}

/// Next color after `current`; colors outside the cycle restart it.
pub fn cycle_color(current: Option<&str>) -> &'static str {
    let next = current
        .and_then(|color| COLOR_CYCLE.iter().position(|candidate| *candidate == color))
        .map_or(0, |index| (index + 1) % COLOR_CYCLE.len());
    COLOR_CYCLE[next]
}

fn clamp_to(value: i64, range: &RangeInclusive<i64>) -> i64 {
    value.clamp(*range.start(), *range.end())
}
