/// Benchmark suite for the frame renderer
/// Covers draw-list construction and the framebuffer fill/stroke passes
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use voxel_painter::{
    Camera, CommandRecorder, FrameRenderer, Framebuffer, RotationMode, Scene, SceneConfig, Voxel,
    GRID_SIZE, VOXEL_SIZE,
};

/// Random scene with `count` voxels; depth starts at 1 so no corner has z = 0
fn random_scene(count: usize, seed: u64) -> Scene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let voxels = (0..count)
        .map(|_| {
            let cell = |rng: &mut ChaCha8Rng, lo: usize| rng.gen_range(lo..GRID_SIZE) as f64 * VOXEL_SIZE;
            let anchor = DVec3::new(cell(&mut rng, 0), cell(&mut rng, 0), cell(&mut rng, 1));
            Voxel::new(anchor, format!("#{:06x}", rng.gen_range(0..0x1000000u32)))
        })
        .collect();
    Scene::new(voxels).expect("random anchors are grid aligned")
}

fn bench_build_draw_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_draw_list");
    let camera = SceneConfig::starter().camera.build(RotationMode::Compatibility);

    for &count in &[4usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let scene = random_scene(count, 42);
            let mut renderer = FrameRenderer::default();
            b.iter(|| black_box(renderer.build_draw_list(black_box(&scene), &camera)))
        });
    }
    group.finish();
}

fn bench_render_starter_framebuffer(c: &mut Criterion) {
    c.bench_function("render_starter_framebuffer", |b| {
        let config = SceneConfig::starter();
        let scene = config.build_scene().unwrap();
        let camera = config.camera.build(RotationMode::Compatibility);
        let mut renderer = FrameRenderer::default();
        let mut framebuffer = Framebuffer::new(720, 480);

        b.iter(|| black_box(renderer.render(&scene, &camera, &mut framebuffer)))
    });
}

fn bench_render_recorder(c: &mut Criterion) {
    c.bench_function("render_command_recorder_512", |b| {
        let scene = random_scene(512, 7);
        let camera = Camera::new(
            DVec3::new(80.0, 80.0, -1000.0),
            DVec3::ZERO,
            90.0,
            RotationMode::Compatibility,
        );
        let mut renderer = FrameRenderer::default();

        b.iter(|| {
            let mut recorder = CommandRecorder::new(720, 480);
            black_box(renderer.render(&scene, &camera, &mut recorder)).ok();
            recorder.commands.len()
        })
    });
}

criterion_group!(
    benches,
    bench_build_draw_list,
    bench_render_starter_framebuffer,
    bench_render_recorder
);
criterion_main!(benches);
