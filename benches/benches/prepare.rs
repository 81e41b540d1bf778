use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unicode_wide_ranges_prepare::tables::{prepare, WideRanges, WIDE_UNASSIGNED_RANGES};
use unicode_wide_ranges_source::{extract, CodepointRange, UcdFile};

use unicode_wide_ranges_benches as group;

fn configure(c: &mut Criterion, name: &str) -> criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>
{
    let mut group = c.benchmark_group(name);

    group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

    group
}

fn extraction(c: &mut Criterion)
{
    let sources = group::sources(group::REPEAT);
    let mut group = configure(c, "extract");

    for file in UcdFile::ALL {
        group.bench_with_input(
            criterion::BenchmarkId::new("file", file.file_name()),
            sources.text(file),
            |b, text| b.iter(|| extract(file, black_box(text))),
        );
    }

    group.finish();
}

fn merge(c: &mut Criterion)
{
    let sources = group::sources(group::REPEAT);
    let mut group = configure(c, "merge");

    let mut ranges: Vec<CodepointRange> = vec![];

    for file in UcdFile::ALL {
        ranges.extend(extract(file, sources.text(file)).unwrap());
    }

    ranges.extend_from_slice(WIDE_UNASSIGNED_RANGES);

    group.bench_with_input(
        criterion::BenchmarkId::new("ranges", ranges.len()),
        &ranges,
        |b, ranges| b.iter(|| WideRanges::merge(black_box(ranges).iter().copied())),
    );

    group.bench_function("prepare", |b| {
        b.iter(|| prepare(black_box(&sources), WIDE_UNASSIGNED_RANGES, &mut HashMap::new()))
    });

    group.finish();
}

criterion_group!(benches, extraction, merge);
criterion_main!(benches);
