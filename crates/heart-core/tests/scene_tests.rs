// Host-side tests for the frame loop, driven through a recording surface.

use glam::Vec2;
use heart_core::{
    particle_count_for_width, BlendMode, DrawSurface, Hsl, Rgba, Scene, SceneParams,
    SimulationMode, Viewport,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Overlay(Rgba),
    Blend(BlendMode),
    Circle { center: Vec2, radius: f32, blend: BlendMode },
}

struct Recorder {
    viewport: Viewport,
    blend: BlendMode,
    ops: Vec<Op>,
}

impl Recorder {
    fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            blend: BlendMode::SourceOver,
            ops: Vec::new(),
        }
    }

    fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count()
    }
}

impl DrawSurface for Recorder {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
    fn paint_overlay(&mut self, color: Rgba) {
        assert_eq!(self.blend, BlendMode::SourceOver, "overlay under additive blend");
        self.ops.push(Op::Overlay(color));
    }
    fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
        self.ops.push(Op::Blend(blend));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Hsl) {
        self.ops.push(Op::Circle {
            center,
            radius,
            blend: self.blend,
        });
    }
}

fn small_scene(seed: u64) -> Scene {
    Scene::with_particle_count(SceneParams::default(), Viewport::new(800.0, 600.0), 64, seed)
}

#[test]
fn population_follows_the_mobile_breakpoint() {
    assert_eq!(particle_count_for_width(375.0), 1000);
    assert_eq!(particle_count_for_width(767.9), 1000);
    assert_eq!(particle_count_for_width(768.0), 1800);
    let scene = Scene::new(SceneParams::default(), Viewport::new(1280.0, 720.0), 1);
    assert_eq!(scene.field().len(), 1800);
}

#[test]
fn frame_composites_overlay_then_additive_particles() {
    let mut scene = small_scene(21);
    let mut surface = Recorder::new(800.0, 600.0);
    let drawn = scene.frame(&mut surface);

    assert_eq!(surface.ops.first(), Some(&Op::Overlay(scene.params().trail)));
    assert_eq!(surface.ops.get(1), Some(&Op::Blend(BlendMode::Lighter)));
    assert_eq!(surface.ops.last(), Some(&Op::Blend(BlendMode::SourceOver)));
    for op in &surface.ops {
        if let Op::Circle { blend, radius, .. } = op {
            assert_eq!(*blend, BlendMode::Lighter);
            assert!(*radius >= 0.0);
        }
    }
    // Shallow z band: every particle is in front of the camera
    assert_eq!(drawn, 64);
    assert_eq!(surface.circles(), 64);
}

#[test]
fn frames_never_clear_the_surface() {
    let mut scene = small_scene(22);
    let mut surface = Recorder::new(800.0, 600.0);
    for _ in 0..3 {
        scene.frame(&mut surface);
    }
    let overlays = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Overlay(_)))
        .count();
    assert_eq!(overlays, 3);
    assert_eq!(surface.circles(), 3 * 64);
}

#[test]
fn sim_time_advances_a_fixed_step_per_frame() {
    let mut scene = small_scene(23);
    let mut surface = Recorder::new(800.0, 600.0);
    for _ in 0..50 {
        scene.frame(&mut surface);
    }
    assert!((scene.sim_time() - 1.0).abs() < 1e-4);
    assert!(scene.camera().rotation_y > 0.0, "camera drifts on its own");
}

#[test]
fn zero_sized_surface_skips_drawing_but_keeps_simulating() {
    let mut scene = small_scene(24);
    let mut surface = Recorder::new(0.0, 0.0);
    assert_eq!(scene.frame(&mut surface), 0);
    assert!(surface.ops.is_empty());
    assert!(scene.sim_time() > 0.0);
}

#[test]
fn idle_frames_keep_targets_and_hug_the_heart() {
    let mut scene = small_scene(25);
    let targets: Vec<_> = scene.field().iter().map(|p| p.target()).collect();
    let mut surface = Recorder::new(800.0, 600.0);
    for _ in 0..200 {
        scene.frame(&mut surface);
    }
    for (p, t) in scene.field().iter().zip(&targets) {
        assert_eq!(p.target(), *t);
        // Pulse keeps positions within ~5% of the target radius
        assert!((p.position.truncate() - t.truncate()).length() <= t.truncate().length() * 0.06 + 1e-3);
        assert_eq!(p.position.z, t.z);
    }
}

#[test]
fn celebration_disperses_the_field_and_freezes_evasion() {
    let mut scene = small_scene(26);
    let mut surface = Recorder::new(800.0, 600.0);

    let before = scene.decline_triggered(Vec2::new(100.0, 40.0));
    assert!(before.is_some());

    assert!(scene.accept_activated());
    assert!(!scene.accept_activated());
    assert_eq!(scene.mode(), SimulationMode::Celebrating);

    let index = scene.evasion().phrase_index();
    assert!(scene.decline_triggered(Vec2::new(100.0, 40.0)).is_none());
    assert_eq!(scene.evasion().phrase_index(), index);

    for _ in 0..200 {
        scene.frame(&mut surface);
    }
    let mean_drift: f32 = scene
        .field()
        .iter()
        .map(|p| (p.position - p.target()).length())
        .sum::<f32>()
        / scene.field().len() as f32;
    assert!(mean_drift > 10.0, "mean drift {mean_drift}");
}

#[test]
fn pointer_moves_retarget_the_camera() {
    let mut scene = small_scene(27);
    scene.pointer_moved(Vec2::new(600.0, 300.0));
    let t = scene.camera_controller().target();
    assert!((t.rotation_y - 0.2).abs() < 1e-6);
    assert_eq!(t.rotation_x, 0.0);

    scene.resize(Viewport::new(1200.0, 600.0));
    scene.pointer_moved(Vec2::new(600.0, 300.0));
    assert_eq!(scene.camera_controller().target().rotation_y, 0.0);
}

#[test]
fn same_seed_replays_the_same_field() {
    let a = small_scene(28);
    let b = small_scene(28);
    for (pa, pb) in a.field().iter().zip(b.field().iter()) {
        assert_eq!(pa.target(), pb.target());
        assert_eq!(pa.size, pb.size);
        assert_eq!(pa.color, pb.color);
    }
}

#[test]
fn evasion_scale_step_comes_from_params() {
    let params = SceneParams {
        evasion_scale_step: 0.25,
        ..SceneParams::default()
    };
    let mut scene = Scene::with_particle_count(params, Viewport::new(800.0, 600.0), 8, 29);
    scene.decline_triggered(Vec2::new(100.0, 40.0));
    let ev = scene.decline_triggered(Vec2::new(100.0, 40.0)).unwrap();
    assert!((ev.accept_scale - 1.5).abs() < 1e-6);
}
