use bevy::prelude::*;

/// Window geometry captured once per scene build. Not kept live: a resize
/// tears the scene down and recaptures instead of re-laying-out in place.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// World-space wrap rectangle `(min, max)`, centered on the origin.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let h = self.half_extents();
        (-h, h)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_symmetric_around_origin() {
        let vp = Viewport {
            width: 200.0,
            height: 100.0,
        };
        let (min, max) = vp.bounds();
        assert_eq!(min, Vec2::new(-100.0, -50.0));
        assert_eq!(max, Vec2::new(100.0, 50.0));
        assert_eq!(min, -max);
    }

    #[test]
    fn area_matches_dimensions() {
        let vp = Viewport {
            width: 640.0,
            height: 360.0,
        };
        assert_eq!(vp.area(), 640.0 * 360.0);
    }
}
