// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scanfill::core::raster::edge::EdgeTable;
use scanfill::core::raster::interpolate::{interpolate, Axis};
use scanfill::core::{fill_flat, fill_gouraud, Canvas, Color, Point, Scene, Vertex};
use std::hint::black_box;

const COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Triangle covering roughly half of a size x size canvas
fn triangle(size: i32) -> [Vertex; 3] {
    [
        Vertex::new(0, 0),
        Vertex::new(size - 1, size / 3),
        Vertex::new(size / 4, size - 1),
    ]
}

fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in [16, 128, 512].iter() {
        let vertices = triangle(*size);

        group.bench_with_input(BenchmarkId::new("flat", size), size, |b, &size| {
            let mut canvas = Canvas::new(size as usize, size as usize);
            b.iter(|| {
                black_box(fill_flat(&mut canvas, black_box(&vertices), &COLORS).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("gouraud", size), size, |b, &size| {
            let mut canvas = Canvas::new(size as usize, size as usize);
            b.iter(|| {
                black_box(fill_gouraud(&mut canvas, black_box(&vertices), &COLORS).unwrap());
            });
        });
    }

    group.finish();
}

fn setup_benchmark(c: &mut Criterion) {
    c.bench_function("edge_table", |b| {
        b.iter(|| black_box(EdgeTable::new(black_box(triangle(128)))));
    });

    c.bench_function("interpolate", |b| {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(40.0, 25.0);
        b.iter(|| {
            black_box(interpolate(
                p1,
                p2,
                Color::RED,
                Color::BLUE,
                black_box(17.0),
                Axis::Y,
            ))
        });
    });
}

fn scene_benchmark(c: &mut Criterion) {
    // 8x8 grid of quads, two triangles each
    let cells = 8;
    let step = 16;
    let mut scene = Scene {
        width: (cells * step + 1) as usize,
        height: (cells * step + 1) as usize,
        background: Color::WHITE,
        shading: Default::default(),
        vertices: Vec::new(),
        colors: Vec::new(),
        faces: Vec::new(),
        depth: None,
    };
    for y in 0..=cells {
        for x in 0..=cells {
            scene.vertices.push(Vertex::new(x * step, y * step));
            scene.colors.push(COLORS[((x + y) % 3) as usize]);
        }
    }
    let stride = (cells + 1) as usize;
    for y in 0..cells as usize {
        for x in 0..cells as usize {
            let i = y * stride + x;
            scene.faces.push([i, i + 1, i + stride + 1]);
            scene.faces.push([i, i + stride + 1, i + stride]);
        }
    }

    c.bench_function("scene_render", |b| {
        b.iter(|| black_box(scene.render().unwrap()));
    });
}

criterion_group!(benches, fill_benchmark, setup_benchmark, scene_benchmark);
criterion_main!(benches);
