//! Flat circle rendering for bubbles: one shared unit mesh, one material per
//! palette fill, a scaled mesh child attached to every new bubble.

use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use crate::core::components::{Bubble, BubbleRadius, BubbleSerial, BubbleVisual};
use crate::rendering::palette::color_for_serial;

#[derive(Resource)]
struct BubbleVisualAssets {
    mesh: Handle<Mesh>,
    fills: [Handle<ColorMaterial>; 2],
}

pub struct BubbleVisualsPlugin;

impl Plugin for BubbleVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, prepare_bubble_assets)
            .add_systems(Update, attach_bubble_visuals);
    }
}

fn prepare_bubble_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(Mesh::from(Circle { radius: 0.5 }));
    let fills = [
        materials.add(color_for_serial(0)),
        materials.add(color_for_serial(1)),
    ];
    commands.insert_resource(BubbleVisualAssets { mesh, fills });
}

fn attach_bubble_visuals(
    mut commands: Commands,
    assets: Option<Res<BubbleVisualAssets>>,
    q_new: Query<(Entity, &BubbleRadius, &BubbleSerial), Added<Bubble>>,
) {
    let Some(assets) = assets else {
        return;
    };
    for (entity, radius, serial) in &q_new {
        let fill = assets.fills[serial.0 % assets.fills.len()].clone();
        let child = commands
            .spawn((
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(fill),
                // unit circle has diameter 1; scale by the bubble diameter
                Transform::from_scale(Vec3::splat(radius.0 * 2.0)),
                BubbleVisual,
            ))
            .id();
        commands.entity(entity).add_child(child);
    }
}
