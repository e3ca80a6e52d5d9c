use bevy::prelude::*;
use bevy::math::primitives::Sphere;
use tracing::info;

use crate::simulation::scenario::CylinderScenario;
use crate::simulation::states::{CylinderSample, NVec3};
use crate::visualization::playback::Playback;

/// Precomputed cylinder trajectory plus the drawn cylinder geometry
#[derive(Resource)]
struct CylinderPlayback {
    playback: Playback<CylinderSample>,
    radius: f32,
    half_height: f32,
}

/// Component tagging the particle sphere
#[derive(Component)]
struct Particle;

/// World-space → screen-space scaling factor for positions and radii
const SCALE3D: f32 = 100.0;

/// Distance of the camera from the origin
const CAMERA_DISTANCE: f32 = 900.0;

const PARTICLE_RADIUS: f32 = 0.06;
const WIRE_SEGMENTS: usize = 48;
const WIRE_RINGS: usize = 9;

pub fn run_3d(scenario: CylinderScenario) {
    info!(frames = scenario.samples.len(), "starting Bevy 3D viewer for the cylinder");

    let radius = scenario.motion.params().radius as f32;
    let half_height = scenario.render.cylinder_half_height as f32;
    let playback = Playback::from_step(scenario.samples, scenario.grid.step);

    App::new()
        .insert_resource(CylinderPlayback { playback, radius, half_height })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (advance_playback, sync_particle, draw_cylinder).chain())
        .run();
}

/// Physics frame has z up; Bevy has y up. (x, y, z) -> (x, z, -y) keeps the handedness.
fn to_world(p: &NVec3) -> Vec3 {
    Vec3::new(p.x as f32, p.z as f32, -(p.y as f32)) * SCALE3D
}

fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<CylinderPlayback>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.6 * CAMERA_DISTANCE, 0.4 * CAMERA_DISTANCE, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 2000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(200.0, 200.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    let start = scene
        .playback
        .current()
        .map_or(Vec3::ZERO, |s| to_world(&s.position));

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(PARTICLE_RADIUS * SCALE3D).mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.0, 0.0), // red
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_translation(start),
            ..Default::default()
        },
        Particle,
    ));
}

fn advance_playback(time: Res<Time>, mut scene: ResMut<CylinderPlayback>) {
    scene.playback.advance(time.delta());
}

fn sync_particle(scene: Res<CylinderPlayback>, mut query: Query<&mut Transform, With<Particle>>) {
    let Some(sample) = scene.playback.current() else {
        return;
    };

    for mut transform in &mut query {
        transform.translation = to_world(&sample.position);
    }
}

/// Wireframe of the cylinder, its axis, and the path travelled so far
fn draw_cylinder(scene: Res<CylinderPlayback>, mut gizmos: Gizmos) {
    let r = scene.radius;
    let h = scene.half_height;
    let wire = Color::srgba(0.5, 0.5, 0.5, 0.3);

    let rim_point = |i: usize, z: f32| {
        let theta = i as f32 / WIRE_SEGMENTS as f32 * std::f32::consts::TAU;
        to_world(&NVec3::new(
            (r * theta.cos()) as f64,
            (r * theta.sin()) as f64,
            z as f64,
        ))
    };

    for ring in 0..WIRE_RINGS {
        let z = -h + 2.0 * h * ring as f32 / (WIRE_RINGS - 1) as f32;
        for i in 0..WIRE_SEGMENTS {
            gizmos.line(rim_point(i, z), rim_point(i + 1, z), wire);
        }
    }
    for i in (0..WIRE_SEGMENTS).step_by(4) {
        gizmos.line(rim_point(i, -h), rim_point(i, h), wire);
    }

    // axis
    gizmos.line(
        to_world(&NVec3::new(0.0, 0.0, -h as f64)),
        to_world(&NVec3::new(0.0, 0.0, h as f64)),
        Color::WHITE,
    );

    for pair in scene.playback.shown().windows(2) {
        gizmos.line(
            to_world(&pair[0].position),
            to_world(&pair[1].position),
            Color::srgb(1.0, 0.4, 0.4),
        );
    }
}
