use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use crate::components::{CockpitCamera, HudText, StallBanner};
use crate::plugins::FlightSet;
use crate::resources::FlightSimulation;
use crate::systems::pose_to_transform;
use crate::utils::FEET_TO_METERS;

const RUNWAY_LENGTH_FT: f64 = 5000.0;
const RUNWAY_WIDTH_FT: f64 = 100.0;
const CENTERLINE_DASH_FT: f64 = 50.0;
const CENTERLINE_WIDTH_FT: f64 = 2.0;

/// Ground checkerboard half-extent and tile size (m).
const TERRAIN_EXTENT: i32 = 20_000;
const TERRAIN_TILE: i32 = 1_000;

const SKY: Color = Color::srgb(0.5, 0.7, 1.0);

/// The visible world: cockpit camera, sky, light, terrain, runway and HUD.
/// Needs the rendering plugins and `FlightSimPlugin`.
pub struct CockpitScenePlugin;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SceneSet {
    Spawn,
}

impl Plugin for CockpitScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
            })
            .add_systems(
                Startup,
                (spawn_camera, spawn_world, spawn_hud, grab_cursor).in_set(SceneSet::Spawn),
            )
            .add_systems(Update, release_cursor_on_pause.after(FlightSet::Input));
    }
}

fn spawn_camera(mut commands: Commands, simulation: Res<FlightSimulation>) {
    let camera = &simulation.config().camera;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: (camera.fov as f32).to_radians(),
            near: camera.near as f32,
            far: camera.far as f32,
            ..default()
        }),
        pose_to_transform(&simulation.camera_pose()),
        CockpitCamera,
    ));
}

fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    simulation: Res<FlightSimulation>,
) {
    let elevation = simulation.config().airfield.elevation as f32;

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(0.0, elevation + 1000.0, 0.0)
            .looking_at(Vec3::new(300.0, elevation, -1000.0), Vec3::Y),
    ));

    let tile = meshes.add(Plane3d::default().mesh().size(TERRAIN_TILE as f32, TERRAIN_TILE as f32));
    let dark = materials.add(Color::srgb(0.0, 0.5, 0.0));
    let light = materials.add(Color::srgb(0.0, 0.6, 0.0));
    let half = TERRAIN_TILE as f32 / 2.0;
    for x in (-TERRAIN_EXTENT..TERRAIN_EXTENT).step_by(TERRAIN_TILE as usize) {
        for z in (-TERRAIN_EXTENT..TERRAIN_EXTENT).step_by(TERRAIN_TILE as usize) {
            let material = if (x + z).rem_euclid(2 * TERRAIN_TILE) == 0 {
                dark.clone()
            } else {
                light.clone()
            };
            commands.spawn((
                Mesh3d(tile.clone()),
                MeshMaterial3d(material),
                Transform::from_xyz(x as f32 + half, elevation, z as f32 + half),
            ));
        }
    }

    // Runway runs from the origin toward -z, centred on x = 0.
    let length = (RUNWAY_LENGTH_FT * FEET_TO_METERS) as f32;
    let width = (RUNWAY_WIDTH_FT * FEET_TO_METERS) as f32;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(width, length))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.3, 0.3))),
        Transform::from_xyz(0.0, elevation + 0.1, -length / 2.0),
    ));

    let dash = (CENTERLINE_DASH_FT * FEET_TO_METERS) as f32;
    let dash_width = (CENTERLINE_WIDTH_FT * FEET_TO_METERS) as f32;
    let dash_mesh = meshes.add(Plane3d::default().mesh().size(dash_width, dash));
    let marking = materials.add(Color::WHITE);
    let mut start = 0.0;
    while start + dash <= length {
        commands.spawn((
            Mesh3d(dash_mesh.clone()),
            MeshMaterial3d(marking.clone()),
            Transform::from_xyz(0.0, elevation + 0.2, -(start + dash / 2.0)),
        ));
        start += 2.0 * dash;
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            ..default()
        },
        HudText,
    ));

    commands.spawn((
        Text::new("STALL WARNING"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.0, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(50.0),
            left: Val::Percent(50.0),
            margin: UiRect::left(Val::Px(-90.0)),
            ..default()
        },
        Visibility::Hidden,
        StallBanner,
    ));

    // artificial horizon reference bar
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(50.0),
            left: Val::Percent(50.0),
            width: Val::Px(200.0),
            height: Val::Px(2.0),
            margin: UiRect::left(Val::Px(-100.0)),
            ..default()
        },
        BackgroundColor(Color::WHITE),
    ));
}

fn grab_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.visible = false;
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
    }
}

/// Hand the pointer back to the desktop while paused.
fn release_cursor_on_pause(
    paused: Res<crate::resources::SimPaused>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !paused.is_changed() {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.visible = paused.0;
        window.cursor_options.grab_mode = if paused.0 {
            CursorGrabMode::None
        } else {
            CursorGrabMode::Locked
        };
    }
}
