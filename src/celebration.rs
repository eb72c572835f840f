// Confetti burst plans. Rendering belongs to the host's particle library;
// the engine only decides what to fire and when.

use serde::{Deserialize, Serialize};

/// Palette shared by the celebratory bursts.
pub const PINK_PALETTE: [&str; 4] = ["#ff6b81", "#ff99ac", "#ffd1dc", "#ffe6ea"];

/// Launch point in normalized viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    pub y: f32,
}

/// One call into the particle library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub delay_ms: u32,
    pub particle_count: u32,
    pub spread: f32,
    /// Launch angle in degrees; the library default (straight up) when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    pub origin: Origin,
    /// Library default colors when empty.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl Burst {
    fn new(delay_ms: u32, particle_count: u32, spread: f32, y: f32) -> Self {
        Burst {
            delay_ms,
            particle_count,
            spread,
            angle: None,
            origin: Origin { x: None, y },
            colors: Vec::new(),
        }
    }

    fn from_side(mut self, x: f32, angle: f32) -> Self {
        self.origin.x = Some(x);
        self.angle = Some(angle);
        self
    }

    fn colored(mut self, colors: &[&str]) -> Self {
        self.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }
}

/// Which celebration to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Celebration {
    /// Center burst followed by a crossfire from both edges.
    Standard,
    /// Larger, longer sequence for the enthusiastic answer.
    Mega,
    /// Single burst when the surprise section opens.
    Reveal,
}

impl Celebration {
    pub fn bursts(self) -> Vec<Burst> {
        match self {
            Celebration::Standard => vec![
                Burst::new(0, 130, 70.0, 0.6).colored(&PINK_PALETTE),
                Burst::new(220, 90, 100.0, 0.7)
                    .from_side(0.0, 60.0)
                    .colored(&PINK_PALETTE[..2]),
                Burst::new(220, 90, 100.0, 0.7)
                    .from_side(1.0, 120.0)
                    .colored(&[PINK_PALETTE[0], PINK_PALETTE[2]]),
            ],
            Celebration::Mega => vec![
                Burst::new(0, 200, 80.0, 0.6).colored(&PINK_PALETTE),
                Burst::new(150, 180, 100.0, 0.6)
                    .from_side(0.0, 60.0)
                    .colored(&PINK_PALETTE),
                Burst::new(150, 180, 100.0, 0.6)
                    .from_side(1.0, 120.0)
                    .colored(&PINK_PALETTE),
                Burst::new(350, 120, 60.0, 0.6).colored(&PINK_PALETTE),
            ],
            Celebration::Reveal => vec![Burst::new(0, 120, 70.0, 0.7)],
        }
    }
}
