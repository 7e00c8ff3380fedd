use bevy::prelude::*;

/// Marker component identifying a floating decorative bubble (holds physics
/// body & collider).
#[derive(Component)]
pub struct Bubble;

/// Logical radius used both for the collider and the circle visual scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BubbleRadius(pub f32);

/// Creation order within the current scene; even serials take the first
/// palette fill, odd the second.
#[derive(Component, Debug, Copy, Clone)]
pub struct BubbleSerial(pub usize);

/// Tag component for the circle mesh child of a bubble.
#[derive(Component)]
pub struct BubbleVisual;

/// Invisible dynamic body the anchor spring holds at the button's rest point.
/// Bubbles bumping into it produce the button wobble.
#[derive(Component)]
pub struct CtaAnchor;

/// The call-to-action button UI node. `base` is its untranslated top-left
/// offset in logical pixels.
#[derive(Component, Debug, Copy, Clone)]
pub struct CtaButton {
    pub base: Vec2,
}

/// Everything a scene rebuild despawns carries this marker.
#[derive(Component)]
pub struct BannerEntity;
