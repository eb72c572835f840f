// Floating hearts: a fixed-capacity rolling buffer refreshed on a timer.
// The host seeds the RNG so the browser build needs no entropy source.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Spawner settings passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartSettings {
    #[serde(default = "default_max_hearts")]
    pub max_hearts: usize,
    /// Spawn period the host timer should use (milliseconds).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
}

impl Default for HeartSettings {
    fn default() -> Self {
        HeartSettings {
            max_hearts: default_max_hearts(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_max_hearts() -> usize {
    24
}

fn default_interval_ms() -> u32 {
    500
}

/// One drifting heart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub id: u64,
    /// Percent from the left edge.
    pub left: f32,
    /// Font size in px.
    pub size: f32,
    /// Rise animation length in seconds.
    pub duration: f32,
    /// Pink-ish hue for `hsl(hue, 80%, 60%)`.
    pub hue: f32,
}

pub struct HeartField {
    settings: HeartSettings,
    hearts: VecDeque<Heart>,
    next_id: u64,
    rng: SmallRng,
}

impl HeartField {
    pub fn new(settings: HeartSettings, seed: u64) -> Self {
        HeartField {
            hearts: VecDeque::with_capacity(settings.max_hearts + 1),
            settings,
            next_id: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> &HeartSettings {
        &self.settings
    }

    pub fn hearts(&self) -> &VecDeque<Heart> {
        &self.hearts
    }

    /// Timer tick: add a heart, evicting the oldest beyond capacity.
    pub fn spawn(&mut self) -> &Heart {
        let heart = Heart {
            id: self.next_id,
            left: self.rng.random_range(0.0..100.0),
            size: self.rng.random_range(14.0..36.0),
            duration: self.rng.random_range(6.0..12.0),
            hue: self.rng.random_range(330.0..360.0),
        };
        self.next_id += 1;
        self.hearts.push_back(heart);

        while self.hearts.len() > self.settings.max_hearts.max(1) {
            self.hearts.pop_front();
        }
        // Just pushed, so the buffer is never empty here.
        &self.hearts[self.hearts.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_bounded_and_keeps_newest() {
        let mut field = HeartField::new(HeartSettings::default(), 7);
        for _ in 0..100 {
            field.spawn();
        }
        assert_eq!(field.hearts().len(), 24);
        assert_eq!(field.hearts().front().map(|h| h.id), Some(76));
        assert_eq!(field.hearts().back().map(|h| h.id), Some(99));
    }

    #[test]
    fn attributes_stay_in_range() {
        let mut field = HeartField::new(HeartSettings::default(), 42);
        for _ in 0..500 {
            let heart = field.spawn().clone();
            assert!((0.0..100.0).contains(&heart.left));
            assert!((14.0..36.0).contains(&heart.size));
            assert!((6.0..12.0).contains(&heart.duration));
            assert!((330.0..360.0).contains(&heart.hue));
        }
    }

    #[test]
    fn same_seed_same_hearts() {
        let mut a = HeartField::new(HeartSettings::default(), 1);
        let mut b = HeartField::new(HeartSettings::default(), 1);
        assert_eq!(a.spawn(), b.spawn());
    }
}
