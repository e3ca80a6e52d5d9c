use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Rectangle;
use tracing::info;

use crate::simulation::scenario::AtwoodScenario;
use crate::simulation::states::AtwoodSample;
use crate::visualization::playback::Playback;

/// Precomputed Atwood trajectory plus the drawn pulley size
#[derive(Resource)]
struct AtwoodPlayback {
    playback: Playback<AtwoodSample>,
    pulley_radius: f32,
}

#[derive(Component, Clone, Copy)]
enum Mass {
    Right,
    Left,
}

const MASS_SIDE: f32 = 30.0;
const PULLEY_SEGMENTS: usize = 64;
const WINDOW_HEIGHT: f32 = 720.0;

pub fn run_2d(scenario: AtwoodScenario) {
    info!(frames = scenario.samples.len(), "starting Bevy 2D viewer for the Atwood machine");

    let pulley_radius = scenario.render.pulley_radius as f32;
    let playback = Playback::from_step(scenario.samples, scenario.grid.step);

    App::new()
        .insert_resource(AtwoodPlayback { playback, pulley_radius })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_atwood)
        .add_systems(Update, (advance_playback, sync_masses, draw_pulley_and_strings).chain())
        .run();
}

/// Horizontal position of a mass: it hangs straight down from the pulley rim
fn mass_x(mass: Mass, pulley_radius: f32) -> f32 {
    match mass {
        Mass::Right => pulley_radius,
        Mass::Left => -pulley_radius,
    }
}

fn mass_y(mass: Mass, sample: &AtwoodSample) -> f32 {
    match mass {
        Mass::Right => sample.y_right as f32,
        Mass::Left => sample.y_left as f32,
    }
}

fn setup_atwood(
    mut commands: Commands,
    scene: Res<AtwoodPlayback>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let r = scene.pulley_radius;

    // Frame everything between the pulley top and the lowest point either mass reaches
    let lowest = scene
        .playback
        .frames()
        .iter()
        .map(|s| s.y_right.min(s.y_left) as f32)
        .fold(0.0_f32, f32::min);
    let top = r;
    let span = (top - lowest) + 2.0 * r;

    let mut camera = Camera2dBundle::default();
    camera.transform.translation.y = 0.5 * (top + lowest);
    camera.projection.scale = (span / WINDOW_HEIGHT).max(1.0);
    commands.spawn(camera);

    for (mass, color) in [
        (Mass::Right, Color::srgb(0.0, 0.0, 1.0)), // blue
        (Mass::Left, Color::srgb(1.0, 0.0, 0.0)),  // red
    ] {
        let y = scene.playback.current().map_or(0.0, |s| mass_y(mass, s));

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Rectangle::new(MASS_SIDE, MASS_SIDE))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(mass_x(mass, r), y, 1.0),
                ..Default::default()
            },
            mass,
        ));
    }
}

fn advance_playback(time: Res<Time>, mut scene: ResMut<AtwoodPlayback>) {
    scene.playback.advance(time.delta());
}

fn sync_masses(scene: Res<AtwoodPlayback>, mut query: Query<(&Mass, &mut Transform)>) {
    let Some(sample) = scene.playback.current() else {
        return;
    };

    for (mass, mut transform) in &mut query {
        transform.translation.x = mass_x(*mass, scene.pulley_radius);
        transform.translation.y = mass_y(*mass, sample);
    }
}

fn draw_pulley_and_strings(scene: Res<AtwoodPlayback>, mut gizmos: Gizmos) {
    let r = scene.pulley_radius;
    let gray = Color::srgb(0.5, 0.5, 0.5);

    // Pulley rim, axle cross, and the string lying over the top half
    let rim: Vec<Vec2> = (0..=PULLEY_SEGMENTS)
        .map(|i| {
            let theta = i as f32 / PULLEY_SEGMENTS as f32 * std::f32::consts::TAU;
            Vec2::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    for pair in rim.windows(2) {
        gizmos.line_2d(pair[0], pair[1], gray);
    }
    for pair in rim[..=PULLEY_SEGMENTS / 2].windows(2) {
        gizmos.line_2d(pair[0], pair[1], Color::WHITE);
    }
    gizmos.line_2d(Vec2::new(-8.0, 0.0), Vec2::new(8.0, 0.0), Color::WHITE);
    gizmos.line_2d(Vec2::new(0.0, -8.0), Vec2::new(0.0, 8.0), Color::WHITE);

    let Some(sample) = scene.playback.current() else {
        return;
    };

    // Hanging strings from the rim down to each mass
    for mass in [Mass::Right, Mass::Left] {
        let x = mass_x(mass, r);
        gizmos.line_2d(Vec2::new(x, 0.0), Vec2::new(x, mass_y(mass, sample)), Color::WHITE);
    }
}
