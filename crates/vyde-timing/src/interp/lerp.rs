use super::curve::{Curve, Easing};

/// Values that can be blended linearly between a start and an end.
///
/// `t = 0` gives `start`, `t = 1` gives `end`; anything outside extrapolates.
pub trait Interpolate: Sized {
    fn interpolate(start: Self, end: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    #[inline]
    fn interpolate(start: Self, end: Self, t: f64) -> Self {
        (end - start) * t + start
    }
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(start: Self, end: Self, t: f64) -> Self {
        (end - start) * t as f32 + start
    }
}

// Integers blend in f64 and round to nearest; `as` saturates at the bounds.
macro_rules! impl_interpolate_int {
    ($($typ:ty),*) => {
        $(
            impl Interpolate for $typ {
                #[inline]
                fn interpolate(start: Self, end: Self, t: f64) -> Self {
                    f64::interpolate(start as f64, end as f64, t).round() as $typ
                }
            }
        )*
    };
}

impl_interpolate_int!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_interpolate_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Interpolate),+> Interpolate for ($($name,)+) {
            #[inline]
            fn interpolate(start: Self, end: Self, t: f64) -> Self {
                ($($name::interpolate(start.$idx, end.$idx, t),)+)
            }
        }
    };
}

impl_interpolate_tuple!(A: 0, B: 1);
impl_interpolate_tuple!(A: 0, B: 1, C: 2);
impl_interpolate_tuple!(A: 0, B: 1, C: 2, D: 3);

/// Plain linear blend.
#[inline]
pub fn lerp<T: Interpolate>(start: T, end: T, t: f64) -> T {
    T::interpolate(start, end, t)
}

/// Blends `start` → `end` by `progress` shaped through `curve` and `easing`.
///
/// Computes `(end - start) * easing(curve, progress) + start`. `progress` is
/// not clamped: values outside `[0, 1]` overshoot, which some effects rely on.
#[inline]
pub fn interpolate<T: Interpolate>(
    start: T,
    end: T,
    progress: f64,
    curve: Curve,
    easing: Easing,
) -> T {
    T::interpolate(start, end, easing.apply(curve, progress))
}
