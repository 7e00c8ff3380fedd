//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (scroll kicks / anchor spring pull before Rapier integrates)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (world wrap + button offset sync)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // velocity edits applied before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // corrections & UI sync after the physics step
