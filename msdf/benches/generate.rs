/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use msdf_field::*;

use criterion::{criterion_group, criterion_main, Criterion};

///
/// A glyph-like shape: a rounded outline with a hole cut into it
///
fn glyph_shape() -> Shape {
    let mut builder = ShapeBuilder::new();

    builder.move_to(Vector2(0.1, 0.1));
    builder.line_to(Vector2(0.9, 0.1)).unwrap();
    builder.cubic_to(Vector2(1.0, 0.1), Vector2(1.0, 0.5), Vector2(0.9, 0.9)).unwrap();
    builder.quad_to(Vector2(0.5, 1.1), Vector2(0.1, 0.9)).unwrap();
    builder.close();

    builder.move_to(Vector2(0.3, 0.3));
    builder.line_to(Vector2(0.3, 0.6)).unwrap();
    builder.line_to(Vector2(0.7, 0.6)).unwrap();
    builder.line_to(Vector2(0.7, 0.3)).unwrap();
    builder.close();

    let mut shape = builder.build();
    shape.normalize();
    edge_coloring_simple(&mut shape, 3.0, 0);

    shape
}

fn criterion_benchmark(c: &mut Criterion) {
    let shape = glyph_shape();
    let scale = Vector2(64.0, 64.0);
    let translate = Vector2(0.0, 0.0);

    c.bench_function("generate_sdf 64x64", |b| {
        let mut output = Bitmap::<f32>::new(64, 64);
        b.iter(|| generate_sdf(&mut output, &shape, 0.0625, scale, translate))
    });

    c.bench_function("generate_pseudo_sdf 64x64", |b| {
        let mut output = Bitmap::<f32>::new(64, 64);
        b.iter(|| generate_pseudo_sdf(&mut output, &shape, 0.0625, scale, translate))
    });

    c.bench_function("generate_msdf 64x64", |b| {
        let mut output = Bitmap::<F32Rgb>::new(64, 64);
        b.iter(|| generate_msdf(&mut output, &shape, 0.0625, scale, translate, DEFAULT_EDGE_THRESHOLD))
    });

    c.bench_function("edge_coloring_simple", |b| {
        b.iter(|| {
            let mut shape = shape.clone();
            edge_coloring_simple(&mut shape, 3.0, 0);
            shape
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
