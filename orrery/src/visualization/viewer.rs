//! Bevy 2D window around the simulation
//!
//! Render coordinates are window pixels: origin top-left, y pointing down.
//! The default 2D camera looks at the window center with y up, so every
//! position goes through [`to_world`] before it reaches a transform.

use std::collections::HashMap;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};
use log::{info, warn};

use crate::simulation::engine::SpawnRequest;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{PlanetId, Rgb};
use crate::simulation::vector::NVec2;

#[derive(Component)]
struct PlanetMarker(PlanetId);

#[derive(Resource)]
struct PlanetMesh(Handle<Mesh>);

pub fn run_2d(scenario: Scenario) {
    info!(
        "run_2d: opening {}x{} window with {} queued planets",
        scenario.width,
        scenario.height,
        scenario.engine.pending_spawns()
    );

    let window = Window {
        title: "Sun and Planets".into(),
        resolution: WindowResolution::new(scenario.width as f32, scenario.height as f32),
        resizable: false,
        ..default()
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                // env_logger already owns the `log` facade
                .disable::<LogPlugin>(),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                spawn_on_click_system,
                physics_step_system,
                sync_planets_system,
                draw_trails_system,
            )
                .chain(),
        )
        .run();
}

/// Render position -> bevy world position
fn to_world(p: NVec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        p.x as f32 - width as f32 / 2.0,
        height as f32 / 2.0 - p.y as f32,
    )
}

fn color_of(c: Rgb, alpha: f32) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle {
        tonemapping: Tonemapping::None,
        ..default()
    });

    let view = scenario.engine.view();
    let sun = to_world(view.sun.position, scenario.width, scenario.height);
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(view.sun.radius as f32))),
        material: materials.add(ColorMaterial::from(Color::srgb(1.0, 1.0, 0.0))),
        transform: Transform::from_translation(sun.extend(0.0)),
        ..default()
    });

    let planet_radius = scenario.engine.params().planet_radius as f32;
    commands.insert_resource(PlanetMesh(meshes.add(Circle::new(planet_radius))));
}

fn spawn_on_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    // Logical pixels, origin top-left: already render coordinates
    if let Some(cursor) = window.cursor_position() {
        let request = SpawnRequest::at(cursor.x as f64, cursor.y as f64);
        if let Err(e) = scenario.engine.request_spawn(request) {
            warn!("spawn dropped: {e}");
        }
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    if let Err(e) = scenario.engine.tick(time.delta_seconds() as f64) {
        warn!("frame skipped: {e}");
    }
}

fn sync_planets_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mesh: Res<PlanetMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &PlanetMarker, &mut Transform)>,
) {
    let (w, h) = (scenario.width, scenario.height);
    let view = scenario.engine.view();
    let mut live: HashMap<PlanetId, NVec2> =
        view.planets.iter().map(|p| (p.id, p.position)).collect();

    // Move known planets, despawn the ones that hit the Sun
    for (entity, marker, mut transform) in &mut query {
        match live.remove(&marker.0) {
            Some(position) => transform.translation = to_world(position, w, h).extend(1.0),
            None => commands.entity(entity).despawn(),
        }
    }

    // Whatever is left has no entity yet
    for planet in view.planets.iter().filter(|p| live.contains_key(&p.id)) {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(mesh.0.clone()),
                material: materials.add(ColorMaterial::from(color_of(planet.color, 1.0))),
                transform: Transform::from_translation(to_world(planet.position, w, h).extend(1.0)),
                ..default()
            },
            PlanetMarker(planet.id),
        ));
    }
}

fn draw_trails_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    let (w, h) = (scenario.width, scenario.height);
    for planet in &scenario.engine.view().planets {
        let n = planet.trail.len();
        if n < 2 {
            continue;
        }
        // Fade in from the oldest point to the newest
        gizmos.linestrip_gradient_2d(planet.trail.iter().enumerate().map(|(i, p)| {
            let alpha = (i + 1) as f32 / n as f32;
            (to_world(*p, w, h), color_of(planet.color, alpha))
        }));
    }
}
