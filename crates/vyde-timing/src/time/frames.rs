/// Lengths convertible into a frame count at a given rate.
///
/// Integers are frames, floats are seconds.
pub trait IntoFrames {
    fn into_frames(self, rate: f64) -> f64;
}

impl IntoFrames for u64 {
    fn into_frames(self, _rate: f64) -> f64 {
        self as f64
    }
}

impl IntoFrames for u32 {
    fn into_frames(self, _rate: f64) -> f64 {
        self as f64
    }
}

impl IntoFrames for i32 {
    fn into_frames(self, _rate: f64) -> f64 {
        self as f64
    }
}

impl IntoFrames for f64 {
    fn into_frames(self, rate: f64) -> f64 {
        self * rate
    }
}

impl IntoFrames for f32 {
    fn into_frames(self, rate: f64) -> f64 {
        (self as f64).into_frames(rate)
    }
}

impl IntoFrames for std::time::Duration {
    fn into_frames(self, rate: f64) -> f64 {
        self.as_secs_f64().into_frames(rate)
    }
}
