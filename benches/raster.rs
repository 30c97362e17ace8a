use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wirerast::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

type Tri = (Vec2<i32>, Vec2<i32>, Vec2<i32>);

fn small_triangle() -> Tri {
    (
        Vec2::new(100, 100),
        Vec2::new(120, 100),
        Vec2::new(110, 120),
    )
}

fn medium_triangle() -> Tri {
    (
        Vec2::new(100, 100),
        Vec2::new(300, 100),
        Vec2::new(200, 300),
    )
}

fn large_triangle() -> Tri {
    (Vec2::new(50, 50), Vec2::new(750, 100), Vec2::new(400, 550))
}

fn benchmark_fill_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");

    let color = Color::rgb(255, 0, 0);
    let (c0, c1, c2) = (
        ColorF::rgb(1.0, 0.0, 0.0),
        ColorF::rgb(0.0, 1.0, 0.0),
        ColorF::rgb(0.0, 0.0, 1.0),
    );

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("flat", name), &triangle, |b, tri| {
            let mut surface = Surface::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                let (p0, p1, p2) = *black_box(tri);
                fill_triangle(&mut surface, p0, p1, p2, color);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("interpolated", name),
            &triangle,
            |b, tri| {
                let mut surface = Surface::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                b.iter(|| {
                    let (p0, p1, p2) = *black_box(tri);
                    fill_triangle_interpolated(&mut surface, p0, p1, p2, c0, c1, c2);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_draw_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    let color = Color::rgb(0, 255, 0);
    let segments = [
        ("horizontal", (Vec2::new(0, 300), Vec2::new(799, 300))),
        ("diagonal", (Vec2::new(0, 0), Vec2::new(799, 599))),
        ("steep", (Vec2::new(400, 0), Vec2::new(420, 599))),
    ];

    for (name, segment) in segments {
        group.bench_with_input(BenchmarkId::new("checked", name), &segment, |b, seg| {
            let mut surface = Surface::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                let (p0, p1) = *black_box(seg);
                draw_line(&mut surface, p0, p1, color, true);
            });
        });

        group.bench_with_input(BenchmarkId::new("safe", name), &segment, |b, seg| {
            let mut surface = Surface::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                let (p0, p1) = *black_box(seg);
                draw_line_safe(&mut surface, p0, p1, color);
            });
        });
    }

    group.finish();
}

fn benchmark_mesh_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Grid of small triangles covering most of the buffer
    let triangles: Vec<Tri> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                (
                    Vec2::new(x, y),
                    Vec2::new(x + 35, y),
                    Vec2::new(x + 17, y + 25),
                )
            })
        })
        .collect();

    let color = Color::rgb(255, 0, 0);
    group.bench_function("flat_400_triangles", |b| {
        let mut surface = Surface::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            for (p0, p1, p2) in black_box(&triangles) {
                fill_triangle(&mut surface, *p0, *p1, *p2, color);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fill_triangle,
    benchmark_draw_line,
    benchmark_mesh_fill
);
criterion_main!(benches);
