use std::collections::VecDeque;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;
use bevy::math::primitives::Circle;

use crate::configuration::config::DisplayConfig;
use crate::simulation::constants::R_SUN;
use crate::simulation::sim_loop::SimulationLoop;

/// The loop lives in the ECS world; only `physics_step_system` mutates it
#[derive(Resource)]
struct Sim(SimulationLoop);

/// Screen geometry shared by the drawing systems
#[derive(Resource, Clone)]
struct View {
    display: DisplayConfig,
    box_size: f64, // solar radii
    scale: f32, // pixels per solar radius
}

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct TimeText;

#[derive(Resource, Default)]
struct Tracks(Vec<VecDeque<Vec2>>);

const TIME_BOX_PAD: f32 = 20.0;
const LABEL_PAD: f32 = 5.0;

/// Open a window and run `sim` in it, `steps_per_frame` full steps per frame
///
/// `box_size` is in solar radii. Returns when the window is closed.
pub fn run_viewer(sim: SimulationLoop, display: DisplayConfig, box_size: f64) {
    log::info!(
        "run_viewer: starting Bevy 2D viewer with {} bodies ({})",
        sim.bodies().len(),
        sim.describe()
    );

    let size = display.window_size as f32;
    let view = View {
        scale: size / box_size as f32,
        box_size,
        display,
    };

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(view)
        .insert_resource(Sim(sim))
        .init_resource::<Tracks>()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "N-Body Gravitational Simulator".into(),
                        resolution: WindowResolution::new(size, size),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger already owns the global logger
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, (setup_bodies_system, setup_axes_system))
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_ticks_system,
                draw_tracks_system,
                time_display_system,
            )
                .chain(),
        )
        .run();
}

/// Window pixel coordinates (origin top-left, y down) -> world (origin centre, y up)
fn to_world(view: &View, px: Vec2) -> Vec2 {
    let half = view.display.window_size as f32 / 2.0;
    Vec2::new(px.x - half, half - px.y)
}

/// Body position (m, offset from box centre) -> window pixels
fn body_pixels(view: &View, x: f64, y: f64) -> Vec2 {
    let half_box = view.box_size / 2.0;
    Vec2::new(
        ((x / R_SUN + half_box) as f32) * view.scale,
        ((y / R_SUN + half_box) as f32) * view.scale,
    )
}

fn setup_bodies_system(
    mut commands: Commands,
    sim: Res<Sim>,
    view: Res<View>,
    mut tracks: ResMut<Tracks>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in sim.0.bodies().iter().enumerate() {
        // display radius scales with the box, plus a 2 px floor so tiny bodies stay visible
        let radius_screen = body.radius as f32 * view.scale + 2.0;
        let [r, g, b] = body.color;
        let pos = to_world(&view, body_pixels(&view, body.x.x, body.x.y));

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    tracks.0 = vec![VecDeque::new(); sim.0.bodies().len()];
}

/// Tick labels along the left and top edges and the time box
fn setup_axes_system(mut commands: Commands, view: Res<View>) {
    let d = &view.display;
    let tick_num = d.tick_num.max(1);
    let tick_space = d.window_size as f32 / tick_num as f32; // pixels between ticks
    let tick_jump = view.box_size / tick_num as f64; // solar radii between ticks
    let tick_len = d.tick_len as f32;

    let style = TextStyle {
        font_size: 13.0,
        color: Color::BLACK,
        ..Default::default()
    };

    for i in 1..tick_num {
        let label = format!("{:.1}Rsun", i as f64 * tick_jump);
        let offset = i as f32 * tick_space;

        // Left edge, reading down
        commands.spawn(Text2dBundle {
            text: Text::from_section(label.clone(), style.clone()),
            text_anchor: Anchor::CenterLeft,
            transform: Transform::from_translation(
                to_world(&view, Vec2::new(tick_len + LABEL_PAD, offset)).extend(2.0),
            ),
            ..Default::default()
        });

        // Top edge, reading right
        commands.spawn(Text2dBundle {
            text: Text::from_section(label, style.clone()),
            text_anchor: Anchor::TopCenter,
            transform: Transform::from_translation(
                to_world(&view, Vec2::new(offset, tick_len + LABEL_PAD)).extend(2.0),
            ),
            ..Default::default()
        });
    }

    // Elapsed time, lower right corner
    commands.spawn((
        TextBundle::from_section(
            format!("{:.5} yr", 0.0),
            TextStyle {
                font_size: 15.0,
                color: Color::BLACK,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            right: Val::Px(tick_len + TIME_BOX_PAD),
            bottom: Val::Px(tick_len + TIME_BOX_PAD),
            ..Default::default()
        }),
        TimeText,
    ));
}

fn physics_step_system(
    mut sim: ResMut<Sim>,
    view: Res<View>,
    mut exit: EventWriter<AppExit>,
    mut announced: Local<bool>,
) {
    for _ in 0..view.display.steps_per_frame.max(1) {
        if sim.0.is_exhausted() {
            if !*announced {
                log::info!("cycle budget reached after {} steps", sim.0.cycle());
                *announced = true;
            }
            return;
        }

        if let Err(e) = sim.0.step() {
            log::error!("simulation stopped: {e}");
            exit.send(AppExit::error());
            return;
        }
    }
}

fn sync_transforms_system(
    sim: Res<Sim>,
    view: Res<View>,
    mut tracks: ResMut<Tracks>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sim.0.bodies().get(*i) {
            let pos = to_world(&view, body_pixels(&view, b.x.x, b.x.y));
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;

            if view.display.tracks {
                if let Some(track) = tracks.0.get_mut(*i) {
                    track.push_back(pos);
                    if track.len() > view.display.track_len {
                        track.pop_front();
                    }
                }
            }
        }
    }
}

/// Tick marks on all four edges
fn draw_ticks_system(view: Res<View>, mut gizmos: Gizmos) {
    let d = &view.display;
    let tick_num = d.tick_num.max(1);
    let size = d.window_size as f32;
    let tick_space = size / tick_num as f32;
    let tick_len = d.tick_len as f32;

    for i in 0..tick_num {
        let at = i as f32 * tick_space;
        let ticks = [
            (Vec2::new(0.0, at), Vec2::new(tick_len, at)), // left
            (Vec2::new(size - tick_len, at), Vec2::new(size, at)), // right
            (Vec2::new(at, 0.0), Vec2::new(at, tick_len)), // top
            (Vec2::new(at, size - tick_len), Vec2::new(at, size)), // bottom
        ];
        for (a, b) in ticks {
            gizmos.line_2d(to_world(&view, a), to_world(&view, b), Color::BLACK);
        }
    }
}

fn draw_tracks_system(sim: Res<Sim>, view: Res<View>, tracks: Res<Tracks>, mut gizmos: Gizmos) {
    if !view.display.tracks {
        return;
    }
    for (track, body) in tracks.0.iter().zip(sim.0.bodies()) {
        let [r, g, b] = body.color;
        gizmos.linestrip_2d(track.iter().copied(), Color::srgb_u8(r, g, b));
    }
}

fn time_display_system(sim: Res<Sim>, mut query: Query<&mut Text, With<TimeText>>) {
    let years = sim.0.frame().elapsed_years();
    for mut text in &mut query {
        text.sections[0].value = format!("{years:.5} yr");
    }
}
