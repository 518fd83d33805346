//! Time-based animation drivers.
//!
//! Both drivers are pure functions of elapsed time, which keeps them
//! deterministic under test; the event loop only controls how often frames
//! are sampled.

use std::time::Duration;

/// Spinner frames, one per 45° of rotation
const SPIN_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Looping rotation shown while a fetch is in flight.
///
/// One full revolution per second, restarting from 0° every time a screen
/// enters `Loading`.
pub struct Spin;

impl Spin {
    /// One full revolution
    pub const CYCLE: Duration = Duration::from_millis(1000);

    /// Rotation angle in degrees for the given time in `Loading`
    pub fn angle(elapsed: Duration) -> f32 {
        let cycle_ms = Self::CYCLE.as_millis();
        let ms = elapsed.as_millis() % cycle_ms;
        (ms as f32 / cycle_ms as f32) * 360.0
    }

    /// Spinner glyph for the given time in `Loading`
    pub fn frame(elapsed: Duration) -> &'static str {
        let idx = (Self::angle(elapsed) / 45.0) as usize;
        SPIN_FRAMES[idx % SPIN_FRAMES.len()]
    }
}

/// Discrete opacity rendition for terminals, which have no true alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// Early phase, barely visible
    Faint,
    /// Middle phase
    Dim,
    /// Fully opaque
    Full,
}

/// One-shot fade + slide run when content becomes ready.
///
/// A single progress value in [0, 1] drives both properties: opacity 0→1
/// and vertical offset −20→0 over 500 ms.
pub struct Entrance;

impl Entrance {
    /// Total animation length
    pub const DURATION: Duration = Duration::from_millis(500);

    /// Starting vertical offset in pixels (negative = above rest position)
    pub const SLIDE_PX: f32 = 20.0;

    /// Approximate pixel height of one terminal cell
    const CELL_PX: f32 = 5.0;

    /// Progress in [0, 1] since the `Loading → Ready` transition
    pub fn progress(elapsed: Duration) -> f32 {
        (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity in [0, 1]
    pub fn opacity(elapsed: Duration) -> f32 {
        Self::progress(elapsed)
    }

    /// Vertical offset in pixels, interpolated −20 → 0
    pub fn offset_y(elapsed: Duration) -> f32 {
        -Self::SLIDE_PX * (1.0 - Self::progress(elapsed))
    }

    /// Whether the animation has run to completion
    pub fn is_done(elapsed: Duration) -> bool {
        elapsed >= Self::DURATION
    }

    /// Offset mapped to rows of top padding for the terminal rendition
    pub fn offset_rows(elapsed: Duration) -> u16 {
        (-Self::offset_y(elapsed) / Self::CELL_PX).round() as u16
    }

    /// Opacity mapped to a discrete fade phase
    pub fn fade(elapsed: Duration) -> Fade {
        let opacity = Self::opacity(elapsed);
        if opacity < 1.0 / 3.0 {
            Fade::Faint
        } else if opacity < 2.0 / 3.0 {
            Fade::Dim
        } else {
            Fade::Full
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_starts_at_zero_degrees() {
        assert_eq!(Spin::angle(Duration::ZERO), 0.0);
        assert_eq!(Spin::frame(Duration::ZERO), SPIN_FRAMES[0]);
    }

    #[test]
    fn spin_loops_every_second() {
        let half = Spin::angle(Duration::from_millis(500));
        assert!((half - 180.0).abs() < 1.0);

        // 1500 ms into the loop is the same pose as 500 ms
        assert_eq!(
            Spin::frame(Duration::from_millis(1500)),
            Spin::frame(Duration::from_millis(500))
        );
        assert_eq!(Spin::frame(Duration::from_millis(1000)), SPIN_FRAMES[0]);
    }

    #[test]
    fn entrance_interpolates_both_properties() {
        assert_eq!(Entrance::opacity(Duration::ZERO), 0.0);
        assert!((Entrance::offset_y(Duration::ZERO) + 20.0).abs() < f32::EPSILON);

        let mid = Duration::from_millis(250);
        assert!((Entrance::opacity(mid) - 0.5).abs() < 0.01);
        assert!((Entrance::offset_y(mid) + 10.0).abs() < 0.1);

        let end = Duration::from_millis(500);
        assert_eq!(Entrance::opacity(end), 1.0);
        assert_eq!(Entrance::offset_y(end), 0.0);
        assert!(Entrance::is_done(end));
    }

    #[test]
    fn entrance_clamps_past_the_end() {
        let late = Duration::from_secs(10);
        assert_eq!(Entrance::progress(late), 1.0);
        assert_eq!(Entrance::offset_y(late), 0.0);
        assert_eq!(Entrance::fade(late), Fade::Full);
    }

    #[test]
    fn entrance_terminal_mapping() {
        assert_eq!(Entrance::offset_rows(Duration::ZERO), 4);
        assert_eq!(Entrance::offset_rows(Duration::from_millis(500)), 0);
        assert_eq!(Entrance::fade(Duration::ZERO), Fade::Faint);
        assert_eq!(Entrance::fade(Duration::from_millis(250)), Fade::Dim);
        assert_eq!(Entrance::fade(Duration::from_millis(450)), Fade::Full);
    }
}
