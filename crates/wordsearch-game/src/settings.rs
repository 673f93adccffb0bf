use std::time::Duration;

/// Timing settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// How long a matched trace stays selected before it is cleared.
    pub clear_delay: Duration,
    /// How long a "word found" notification should stay visible.
    ///
    /// The game itself does not display notifications; front ends read this
    /// value when they show one.
    pub notification_duration: Duration,
}

impl GameSettings {
    /// Default for [`GameSettings::clear_delay`].
    pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(1000);
    /// Default for [`GameSettings::notification_duration`].
    pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

    /// Sets [`GameSettings::clear_delay`].
    #[must_use]
    pub fn clear_delay(mut self, clear_delay: Duration) -> Self {
        self.clear_delay = clear_delay;
        self
    }

    /// Sets [`GameSettings::notification_duration`].
    #[must_use]
    pub fn notification_duration(mut self, notification_duration: Duration) -> Self {
        self.notification_duration = notification_duration;
        self
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            clear_delay: Self::DEFAULT_CLEAR_DELAY,
            notification_duration: Self::DEFAULT_NOTIFICATION_DURATION,
        }
    }
}
