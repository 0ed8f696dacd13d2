use crate::types::Component;
use glam::IVec2;
use serde::Serialize;

/// A two-dimensional integer vector with its display angle.
///
/// Built once both components are known; the angle is derived in
/// [`Vector::new`] and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Vector {
    x: Component,
    y: Component,
    angle: Option<f64>,
}

impl Vector {
    pub fn new(x: Component, y: Component) -> Self {
        Self {
            x,
            y,
            angle: angle_of(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> Component {
        self.x
    }

    #[inline]
    pub fn y(&self) -> Component {
        self.y
    }

    /// Counter-clockwise angle from the +x axis in degrees, in `[0, 360)`.
    ///
    /// `None` when `y == 0`.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    #[inline]
    pub fn components(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl From<IVec2> for Vector {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Angle of `(x, y)` measured counter-clockwise from the +x axis.
///
/// The reference angle against the x axis is computed from absolute values
/// and then moved into the right quadrant. Horizontal vectors have no angle.
fn angle_of(x: Component, y: Component) -> Option<f64> {
    if y == 0 {
        return None;
    }
    // x == 0 gives atan(inf) = 90 degrees.
    let base = (f64::from(y.abs()) / f64::from(x.abs())).atan().to_degrees();
    let angle = if x < 0 {
        if y < 0 { 180.0 + base } else { 180.0 - base }
    } else if y < 0 {
        360.0 - base
    } else {
        base
    };
    Some(angle)
}
