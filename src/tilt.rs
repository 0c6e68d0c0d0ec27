//! Cursor-driven "3D" tilt for a hover card.
//!
//! The math lives in [`compute_tilt`] and never touches the DOM. The two
//! handlers below measure the element, write its inline `transform` and
//! bypass Yew's re-render, since pointer-move fires far too often for a
//! full render per event.

use std::fmt;

use log::debug;
use web_sys::{DomRect, HtmlElement};

const TILT_DIVISOR: f64 = 18.0;
const HOVER_SCALE: f64 = 1.03;
const PERSPECTIVE_PX: u32 = 1000;

/// Pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&DomRect> for SurfaceRect {
    fn from(rect: &DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Rotation in degrees plus uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl TiltTransform {
    pub const RESET: TiltTransform = TiltTransform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TiltTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            PERSPECTIVE_PX, self.rotate_x, self.rotate_y, self.scale
        )
    }
}

pub fn compute_tilt(pointer: PointerSample, rect: SurfaceRect) -> TiltTransform {
    let local_x = pointer.x - rect.left;
    let local_y = pointer.y - rect.top;

    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;

    // `+ 0.0` turns the -0.0 at the centre line into 0.0
    TiltTransform {
        rotate_x: -(local_y - center_y) / TILT_DIVISOR + 0.0,
        rotate_y: (local_x - center_x) / TILT_DIVISOR + 0.0,
        scale: HOVER_SCALE,
    }
}

fn write_transform(surface: &HtmlElement, transform: &TiltTransform) {
    if let Err(err) = surface.style().set_property("transform", &transform.to_css()) {
        debug!("Could not write tilt transform: {:?}", err);
    }
}

/// Pointer-move handler body. No-op while motion is off or the card is not
/// mounted. The rect is measured on every call since the card can move.
pub fn tilt_surface(
    enabled: bool,
    surface: Option<&HtmlElement>,
    pointer: PointerSample,
) -> Option<TiltTransform> {
    if !enabled {
        return None;
    }
    let surface = surface?;

    let rect = SurfaceRect::from(&surface.get_bounding_client_rect());
    let transform = compute_tilt(pointer, rect);
    write_transform(surface, &transform);
    Some(transform)
}

/// Pointer-leave handler body. Only checks that the card is mounted.
pub fn reset_surface(surface: Option<&HtmlElement>) {
    if let Some(surface) = surface {
        write_transform(surface, &TiltTransform::RESET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: SurfaceRect = SurfaceRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 300.0,
    };

    fn assert_close(actual: f64, expected: f64) {
        let delta = (actual - expected).abs();
        assert!(delta <= 1e-9, "expected {expected} got {actual} (delta {delta})");
    }

    #[test]
    fn center_is_flat_but_scaled() {
        let t = compute_tilt(PointerSample { x: 300.0, y: 200.0 }, RECT);
        assert_close(t.rotate_x, 0.0);
        assert_close(t.rotate_y, 0.0);
        assert_close(t.scale, 1.03);
    }

    #[test]
    fn center_css_has_no_negative_zero() {
        let t = compute_tilt(PointerSample { x: 300.0, y: 200.0 }, RECT);
        assert_eq!(
            t.to_css(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1.03)"
        );
    }

    #[test]
    fn top_left_corner_tilts_towards_pointer() {
        let t = compute_tilt(PointerSample { x: 120.0, y: 60.0 }, RECT);
        assert_close(t.rotate_x, 140.0 / 18.0);
        assert!((t.rotate_x - 7.78).abs() < 0.01);
        assert_close(t.rotate_y, -10.0);
    }

    #[test]
    fn rotation_is_bounded_inside_the_surface() {
        let steps = 20;
        for i in 1..steps {
            for j in 1..steps {
                let pointer = PointerSample {
                    x: RECT.left + RECT.width * i as f64 / steps as f64,
                    y: RECT.top + RECT.height * j as f64 / steps as f64,
                };
                let t = compute_tilt(pointer, RECT);
                assert!(t.rotate_x.abs() <= RECT.height / 36.0);
                assert!(t.rotate_y.abs() <= RECT.width / 36.0);
            }
        }
    }

    #[test]
    fn reset_is_flat_and_unscaled() {
        assert_eq!(TiltTransform::RESET.rotate_x, 0.0);
        assert_eq!(TiltTransform::RESET.rotate_y, 0.0);
        assert_eq!(TiltTransform::RESET.scale, 1.0);
        assert_eq!(
            TiltTransform::RESET.to_css(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)"
        );
    }

    #[test]
    fn css_keeps_perspective_and_scale() {
        let t = compute_tilt(PointerSample { x: 282.0, y: 164.0 }, RECT);
        assert_eq!(
            t.to_css(),
            "perspective(1000px) rotateX(2deg) rotateY(-1deg) scale(1.03)"
        );
    }

    #[test]
    fn disabled_never_reads_the_surface() {
        let sample = PointerSample { x: 120.0, y: 60.0 };
        assert_eq!(tilt_surface(false, None, sample), None);
        assert_eq!(tilt_surface(true, None, sample), None);
    }
}
