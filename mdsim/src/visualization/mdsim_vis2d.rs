use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};
use log::{error, info};

use crate::simulation::driver::Simulation;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Simulation plus the frame budget, owned by the bevy world
#[derive(Resource)]
struct Viewer {
    simulation: Simulation,
    steps: usize,  // stop advancing after this many steps
    extent: f64,   // world-space size mapped onto the window
    halted: bool,  // set on divergence
}

const SCALE: f32 = 500.0; // pixels per unit cell length at extent 1.0
const PARTICLE_RADIUS: f32 = 3.0;

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting bevy 2D viewer with {} particles", scenario.initial.len());

    let steps = scenario.steps;
    let extent = if scenario.parameters.periodic() {
        scenario.parameters.cell_size()
    } else {
        1.0
    };

    App::new()
        .insert_resource(Viewer {
            simulation: scenario.into_simulation(),
            steps,
            extent,
            halted: false,
        })
        // env_logger already owns the `log` facade
        .add_plugins(DefaultPlugins.build().disable::<bevy::log::LogPlugin>())
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

fn to_screen(viewer: &Viewer, x: f64, y: f64) -> Vec2 {
    let s = SCALE / viewer.extent as f32;
    let half = 0.5 * viewer.extent as f32;
    Vec2::new((x as f32 - half) * s, (y as f32 - half) * s)
}

fn setup_particles_system(mut commands: Commands, viewer: Res<Viewer>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Cell outline behind the particles
    if viewer.simulation.stepper().params().periodic() {
        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Rectangle::new(SCALE, SCALE))),
            material: materials.add(ColorMaterial::from(Color::srgb(0.08, 0.08, 0.12))),
            transform: Transform::from_xyz(0.0, 0.0, -1.0),
            ..Default::default()
        });
    }

    let mesh = Mesh2dHandle(meshes.add(Circle::new(PARTICLE_RADIUS)));
    let material = materials.add(ColorMaterial::from(Color::WHITE));

    for (i, p) in viewer.simulation.ensemble().positions.iter().enumerate() {
        let at = to_screen(&viewer, p.x, p.y);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_xyz(at.x, at.y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(mut viewer: ResMut<Viewer>) {
    if viewer.halted || viewer.simulation.steps_done() >= viewer.steps {
        return;
    }

    let result = viewer.simulation.advance().map(|_| ());
    if let Err(e) = result {
        error!("viewer halted: {e}");
        viewer.halted = true;
    }
}

fn sync_transforms_system(viewer: Res<Viewer>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    let positions = &viewer.simulation.ensemble().positions;
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = positions.get(*i) {
            let at = to_screen(&viewer, p.x, p.y);
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
    }
}
