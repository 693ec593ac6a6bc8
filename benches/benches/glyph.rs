// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for schema composition and glyph attribute access.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use canopy_glyph::{Catalog, Glyph, GlyphKind, LineVisuals, SchemaBuilder, catalog};
use canopy_property::{GroupCatalog, GroupTag, PropertyMetadata, Value, ValueKind};

fn bench_compose(c: &mut Criterion) {
    let groups = GroupCatalog::standard().unwrap();
    let mut group = c.benchmark_group("glyph/compose");

    group.bench_function("groups", |b| {
        b.iter(|| black_box(GroupCatalog::standard().unwrap()));
    });

    group.bench_function("wedge_schema", |b| {
        b.iter(|| {
            let schema = SchemaBuilder::new("Wedge")
                .own("x", PropertyMetadata::new(ValueKind::Number))
                .own("y", PropertyMetadata::new(ValueKind::Number))
                .own("radius", PropertyMetadata::new(ValueKind::Distance))
                .own("start_angle", PropertyMetadata::new(ValueKind::Angle))
                .own("end_angle", PropertyMetadata::new(ValueKind::Angle))
                .mixin(groups.get(GroupTag::Fill))
                .mixin(groups.get(GroupTag::Line))
                .mixin(groups.get(GroupTag::Glyph))
                .build()
                .unwrap();
            black_box(schema)
        });
    });

    group.bench_function("catalog", |b| {
        b.iter(|| black_box(Catalog::standard().unwrap()));
    });

    group.finish();
}

fn bench_access(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Glyph={} Value={}",
            size_of::<Glyph>(),
            size_of::<Value>(),
        );
    });

    let mut group = c.benchmark_group("glyph/access");

    for overridden in [0_usize, 2, 4] {
        let mut glyph = Glyph::of(GlyphKind::Text);
        let names: Vec<_> = glyph
            .schema()
            .attributes()
            .iter()
            .filter(|attribute| matches!(attribute.kind(), ValueKind::Alpha | ValueKind::Number))
            .map(|attribute| attribute.name().to_string())
            .take(overridden)
            .collect();
        for name in &names {
            glyph.set(name, 0.5).unwrap();
        }
        group.bench_function(BenchmarkId::new("get_default", names.len()), |b| {
            b.iter(|| black_box(glyph.get(black_box("text_font")).unwrap()));
        });
    }

    group.bench_function("instantiate", |b| {
        b.iter(|| black_box(Glyph::of(black_box(GlyphKind::AnnularWedge))));
    });

    group.bench_function("set_color", |b| {
        b.iter_batched(
            || Glyph::of(GlyphKind::Rect),
            |mut glyph| {
                glyph.set("fill_color", "steelblue").unwrap();
                black_box(glyph);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("line_stroke", |b| {
        let glyph = catalog().instantiate(GlyphKind::MultiLine);
        b.iter(|| black_box(LineVisuals::from_glyph(&glyph).unwrap().to_stroke()));
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_access);
criterion_main!(benches);
