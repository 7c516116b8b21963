use crate::time::Timeline;

use super::curve::{Curve, Easing};
use super::lerp::{interpolate, Interpolate};

/// Builds a [`Track`] from an initial value and `frame => Curve / Easing =>
/// value` keyframes. Curves and easings are named by their [`Curve`] and
/// [`Easing`] items.
///
/// ```rust
/// use vyde_timing::keyframes;
///
/// let x = keyframes![0.0; 10 => Linear / Out => 100.0, 20 => BACK_OUT / Out => 50.0];
/// assert_eq!(x.evaluate(5), 50.0);
/// assert_eq!(x.end_frame(), 20);
/// ```
#[macro_export]
macro_rules! keyframes {
    ($initial:expr; $($frame:expr => $curve:ident / $easing:ident => $value:expr),* $(,)?) => {
        $crate::interp::Track::new($initial)
            $(.keyframe(
                $frame,
                $crate::interp::Curve::$curve,
                $crate::interp::Easing::$easing,
                $value,
            ))*
    };
}

/// Target value reached at `frame`, approached through `curve`/`easing`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe<T> {
    pub frame: u64,
    pub curve: Curve,
    pub easing: Easing,
    pub value: T,
}

/// Keyframed property: an initial value at frame 0 followed by keyframes.
///
/// Between two keyframes the value is interpolated with the shaping of the
/// later one; after the last keyframe the last value is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    initial: T,
    keyframes: Vec<Keyframe<T>>,
}

impl<T: Interpolate + Clone> Track<T> {
    pub fn new(initial: T) -> Self {
        Self {
            initial,
            keyframes: Vec::new(),
        }
    }

    /// Builder form of [`push`](Self::push).
    pub fn keyframe(mut self, frame: u64, curve: Curve, easing: Easing, value: T) -> Self {
        self.push(Keyframe { frame, curve, easing, value });
        self
    }

    /// Holds the current value for `frames` more frames.
    pub fn hold(mut self, frames: u64) -> Self {
        let (frame, value) = match self.keyframes.last() {
            Some(last) => (last.frame.saturating_add(frames), last.value.clone()),
            None => (frames, self.initial.clone()),
        };
        self.push(Keyframe {
            frame,
            curve: Curve::Linear,
            easing: Easing::Out,
            value,
        });
        self
    }

    /// Inserts `keyframe`, keeping keyframes ordered by frame. Keyframes on
    /// the same frame keep insertion order.
    pub fn push(&mut self, keyframe: Keyframe<T>) {
        let at = self.keyframes.partition_point(|k| k.frame <= keyframe.frame);
        self.keyframes.insert(at, keyframe);
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    /// Frame of the last keyframe, or 0 when there is none.
    pub fn end_frame(&self) -> u64 {
        self.keyframes.last().map_or(0, |k| k.frame)
    }

    pub fn evaluate(&self, frame: u64) -> T {
        let mut from_frame = 0;
        let mut from = &self.initial;

        for keyframe in &self.keyframes {
            if frame < keyframe.frame {
                let t = (frame - from_frame) as f64 / (keyframe.frame - from_frame) as f64;
                return interpolate(
                    from.clone(),
                    keyframe.value.clone(),
                    t,
                    keyframe.curve,
                    keyframe.easing,
                );
            }
            from_frame = keyframe.frame;
            from = &keyframe.value;
        }

        from.clone()
    }

    /// Value at the timeline's current frame.
    pub fn evaluate_at(&self, timeline: &Timeline) -> T {
        self.evaluate(timeline.frame())
    }
}
