//! Input pipeline configuration.
//!
//! Defines the timing windows, threshold table and identifier layout the
//! router is built from. Config is immutable after construction: the input
//! topology is fixed for the life of the process, so there is no runtime
//! parameter store behind it. Board variants and tests derive variants with
//! the `with_*` builders.
//!
//! # Identifier layout
//!
//! - Ordinary channels report as `channel_id_base + channel` (channels 3..=7
//!   with the default wiring, so ids 103..=107).
//! - While the selector sits in the routed range, the shared lines report
//!   under `routed_id_base + (position - routed_first_position) * 3`:
//!   the direct button at `base`, the encoder at `base + 1` (counter-
//!   clockwise) and `base + 2` (clockwise).
//!
//! The two formulas are applied literally, matching the board's established
//! id scheme; the host side distinguishes sources by id alone.

/// Number of physical lines behind the shift register.
pub const CHANNEL_COUNT: usize = 8;

/// Shared lines multiplexed by the selector: direct button, encoder clock,
/// encoder data.
pub const ROUTED_LINE_COUNT: usize = 3;

/// Selector positions that activate routing, one mapped mode per position.
pub const ROUTED_POSITION_COUNT: usize = 3;

/// Discrete selector positions on the ladder.
pub const POSITION_COUNT: usize = 12;

// --- Defaults ---

const DEFAULT_DEBOUNCE_MS: u32 = 50;
const DEFAULT_ENCODER_DEBOUNCE_MS: u32 = 5;
const DEFAULT_ROTARY_INTERVAL_MS: u32 = 10;
const DEFAULT_CHANNEL_ID_BASE: u16 = 100;
const DEFAULT_ROUTED_ID_BASE: u16 = 100;
const DEFAULT_ROUTED_FIRST_POSITION: u8 = 8;

/// Ladder band upper bounds on the 10-bit scale, midpoints between the ideal
/// divider outputs of adjacent positions.
pub const DEFAULT_THRESHOLDS: [u16; POSITION_COUNT] =
    [46, 139, 232, 325, 418, 511, 604, 697, 790, 883, 976, 1023];

// --- Ranges ---

const MIN_DEBOUNCE_MS: u32 = 1;

/// Identifier policy for the routed encoder pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderIdMode {
    /// Ids follow the selector position: `base + 1` for counter-clockwise,
    /// `base + 2` for clockwise.
    PositionRouted,
    /// Fixed ids independent of the selector position.
    Fixed {
        /// Id emitted for a counter-clockwise detent.
        ccw_id: u16,
        /// Id emitted for a clockwise detent.
        cw_id: u16,
    },
}

impl EncoderIdMode {
    /// Conventional fixed pair (200 counter-clockwise, 201 clockwise).
    pub const DEFAULT_FIXED: EncoderIdMode = EncoderIdMode::Fixed {
        ccw_id: 200,
        cw_id: 201,
    };
}

/// Reasons an [`InputConfig`] fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Threshold table is not strictly ascending.
    NonAscendingThresholds,
    /// Debounce window below the minimum would report raw bounce.
    ZeroDebounceWindow,
    /// Routed positions fall outside `1..=POSITION_COUNT`.
    RoutedRangeOutOfBounds,
}

impl ConfigError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigError::NonAscendingThresholds => "NonAscendingThresholds",
            ConfigError::ZeroDebounceWindow => "ZeroDebounceWindow",
            ConfigError::RoutedRangeOutOfBounds => "RoutedRangeOutOfBounds",
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NonAscendingThresholds => {
                write!(f, "threshold table is not strictly ascending")
            }
            ConfigError::ZeroDebounceWindow => {
                write!(f, "debounce window must be at least 1 ms")
            }
            ConfigError::RoutedRangeOutOfBounds => {
                write!(f, "routed positions fall outside the selector range")
            }
        }
    }
}

/// Configuration for the whole acquisition pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Silence window a line must hold before a transition is reported (ms)
    pub debounce_ms: u32,
    /// Minimum spacing between accepted encoder detents (ms)
    pub encoder_debounce_ms: u32,
    /// Minimum spacing between selector ladder samples (ms)
    pub rotary_interval_ms: u32,
    /// Ascending band upper bounds mapping a reading to positions 1..=12
    pub thresholds: [u16; POSITION_COUNT],
    /// Identifier base for ordinary channels (`base + channel`)
    pub channel_id_base: u16,
    /// Identifier base for the routed triple at the first routed position
    pub routed_id_base: u16,
    /// First selector position of the routed range
    pub routed_first_position: u8,
    /// Identifier policy for the encoder pair
    pub encoder_id_mode: EncoderIdMode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl InputConfig {
    /// Creates the default configuration for the reference board.
    pub const fn new() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            encoder_debounce_ms: DEFAULT_ENCODER_DEBOUNCE_MS,
            rotary_interval_ms: DEFAULT_ROTARY_INTERVAL_MS,
            thresholds: DEFAULT_THRESHOLDS,
            channel_id_base: DEFAULT_CHANNEL_ID_BASE,
            routed_id_base: DEFAULT_ROUTED_ID_BASE,
            routed_first_position: DEFAULT_ROUTED_FIRST_POSITION,
            encoder_id_mode: EncoderIdMode::PositionRouted,
        }
    }

    /// Sets the debounce window in milliseconds.
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Sets the encoder detent spacing in milliseconds.
    pub const fn with_encoder_debounce_ms(mut self, encoder_debounce_ms: u32) -> Self {
        self.encoder_debounce_ms = encoder_debounce_ms;
        self
    }

    /// Sets the selector sampling interval in milliseconds.
    pub const fn with_rotary_interval_ms(mut self, rotary_interval_ms: u32) -> Self {
        self.rotary_interval_ms = rotary_interval_ms;
        self
    }

    /// Replaces the ladder threshold table.
    pub const fn with_thresholds(mut self, thresholds: [u16; POSITION_COUNT]) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the identifier base for ordinary channels.
    pub const fn with_channel_id_base(mut self, channel_id_base: u16) -> Self {
        self.channel_id_base = channel_id_base;
        self
    }

    /// Sets the identifier base for the routed triples.
    pub const fn with_routed_id_base(mut self, routed_id_base: u16) -> Self {
        self.routed_id_base = routed_id_base;
        self
    }

    /// Sets the first selector position of the routed range.
    pub const fn with_routed_first_position(mut self, routed_first_position: u8) -> Self {
        self.routed_first_position = routed_first_position;
        self
    }

    /// Sets the identifier policy for the encoder pair.
    pub const fn with_encoder_id_mode(mut self, encoder_id_mode: EncoderIdMode) -> Self {
        self.encoder_id_mode = encoder_id_mode;
        self
    }

    /// True when `position` maps the shared lines to routed ids.
    pub const fn is_routed(&self, position: u8) -> bool {
        position >= self.routed_first_position
            && position < self.routed_first_position + ROUTED_POSITION_COUNT as u8
    }

    /// Base identifier for the routed triple at `position`.
    ///
    /// `position` must be inside the routed range.
    pub const fn routed_base(&self, position: u8) -> u16 {
        self.routed_id_base
            + (position - self.routed_first_position) as u16 * ROUTED_LINE_COUNT as u16
    }

    /// Validates the configuration.
    ///
    /// Runs once at initialization; polling never re-validates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms < MIN_DEBOUNCE_MS {
            return Err(ConfigError::ZeroDebounceWindow);
        }
        for pair in self.thresholds.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ConfigError::NonAscendingThresholds);
            }
        }
        let first = self.routed_first_position as usize;
        if first < 1 || first + ROUTED_POSITION_COUNT - 1 > POSITION_COUNT {
            return Err(ConfigError::RoutedRangeOutOfBounds);
        }
        Ok(())
    }

    /// Validate input configuration
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = InputConfig::default();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.encoder_debounce_ms, 5);
        assert_eq!(config.rotary_interval_ms, 10);
        assert_eq!(config.channel_id_base, 100);
        assert_eq!(config.routed_id_base, 100);
        assert_eq!(config.routed_first_position, 8);
        assert_eq!(config.encoder_id_mode, EncoderIdMode::PositionRouted);
        assert!(config.is_valid());
    }

    #[test]
    fn test_builders_override_fields() {
        let config = InputConfig::new()
            .with_debounce_ms(20)
            .with_encoder_debounce_ms(2)
            .with_rotary_interval_ms(5)
            .with_channel_id_base(300)
            .with_routed_id_base(400)
            .with_routed_first_position(1)
            .with_encoder_id_mode(EncoderIdMode::DEFAULT_FIXED);

        assert_eq!(config.debounce_ms, 20);
        assert_eq!(config.encoder_debounce_ms, 2);
        assert_eq!(config.rotary_interval_ms, 5);
        assert_eq!(config.channel_id_base, 300);
        assert_eq!(config.routed_id_base, 400);
        assert_eq!(config.routed_first_position, 1);
        assert_eq!(
            config.encoder_id_mode,
            EncoderIdMode::Fixed {
                ccw_id: 200,
                cw_id: 201
            }
        );
        assert!(config.is_valid());
    }

    #[test]
    fn test_non_ascending_thresholds_rejected() {
        let mut thresholds = DEFAULT_THRESHOLDS;
        thresholds[5] = thresholds[4]; // equal neighbours are invalid too
        let config = InputConfig::new().with_thresholds(thresholds);
        assert_eq!(config.validate(), Err(ConfigError::NonAscendingThresholds));

        thresholds[5] = thresholds[4] - 1;
        let config = InputConfig::new().with_thresholds(thresholds);
        assert_eq!(config.validate(), Err(ConfigError::NonAscendingThresholds));
        assert!(!config.is_valid());
    }

    #[test]
    fn test_zero_debounce_window_rejected() {
        let config = InputConfig::new().with_debounce_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounceWindow));
    }

    #[test]
    fn test_routed_range_must_fit_position_space() {
        // Positions 10, 11, 12 still fit.
        let config = InputConfig::new().with_routed_first_position(10);
        assert!(config.is_valid());

        // Positions 11, 12, 13 do not.
        let config = InputConfig::new().with_routed_first_position(11);
        assert_eq!(config.validate(), Err(ConfigError::RoutedRangeOutOfBounds));

        // Position 0 does not exist on the ladder.
        let config = InputConfig::new().with_routed_first_position(0);
        assert_eq!(config.validate(), Err(ConfigError::RoutedRangeOutOfBounds));
    }

    #[test]
    fn test_routed_range_membership() {
        let config = InputConfig::default();
        assert!(!config.is_routed(7));
        assert!(config.is_routed(8));
        assert!(config.is_routed(9));
        assert!(config.is_routed(10));
        assert!(!config.is_routed(11));
    }

    #[test]
    fn test_routed_base_arithmetic() {
        let config = InputConfig::default();
        assert_eq!(config.routed_base(8), 100);
        assert_eq!(config.routed_base(9), 103);
        assert_eq!(config.routed_base(10), 106);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::NonAscendingThresholds.as_str(),
            "NonAscendingThresholds"
        );

        let mut rendered: heapless::String<64> = heapless::String::new();
        write!(rendered, "{}", ConfigError::ZeroDebounceWindow).unwrap();
        assert_eq!(rendered.as_str(), "debounce window must be at least 1 ms");
    }
}
