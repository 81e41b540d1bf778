use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unicode_wide_ranges_prepare::tables::{prepare, WideRanges, WIDE_UNASSIGNED_RANGES};
use unicode_wide_ranges_source::CodepointRange;

use crate::data::{RAW_RANGES, SOURCES};

/// эталонное объединение: раскладываем диапазоны на отдельные кодпоинты,
/// сортируем и собираем подряд идущие кодпоинты обратно в диапазоны
fn merge_by_codepoints(ranges: &[CodepointRange]) -> Vec<CodepointRange>
{
    let mut codepoints: Vec<u32> = ranges
        .iter()
        .flat_map(|range| range.start() ..= range.end())
        .collect::<HashSet<u32>>()
        .into_iter()
        .collect();

    codepoints.sort_unstable();

    let mut groups: Vec<CodepointRange> = vec![];

    for code in codepoints {
        match groups.last_mut() {
            Some(last) if last.end() + 1 == code => last.extend_to(code),
            _ => groups.push(CodepointRange::single(code)),
        }
    }

    groups
}

/// случайный набор диапазонов: короткие, длинные, повторы, одиночные кодпоинты
fn random_ranges(rng: &mut StdRng, count: usize, space: u32) -> Vec<CodepointRange>
{
    let mut ranges: Vec<CodepointRange> = vec![];

    for _ in 0 .. count {
        if !ranges.is_empty() && rng.random_bool(0.1) {
            let repeated = ranges[rng.random_range(0 .. ranges.len())];
            ranges.push(repeated);
            continue;
        }

        let start = rng.random_range(0 .. space);
        let length = match rng.random_range(0 .. 4) {
            0 => 0,
            1 | 2 => rng.random_range(0 .. 16),
            _ => rng.random_range(0 .. 256),
        };

        ranges.push(CodepointRange::new(start, start + length));
    }

    ranges
}

#[test]
fn fixture_matches_oracle()
{
    let merged = WideRanges::merge(RAW_RANGES.iter().copied());

    assert_eq!(merged.as_slice(), merge_by_codepoints(&RAW_RANGES).as_slice());

    let prepared = prepare(&SOURCES, WIDE_UNASSIGNED_RANGES, &mut HashMap::new()).unwrap();

    assert_eq!(prepared, merged);
}

#[test]
fn random_matches_oracle()
{
    let mut rng = StdRng::seed_from_u64(0x1F600);

    for round in 0 .. 500 {
        let count = rng.random_range(0 .. 64);
        let space = match round % 3 {
            0 => 64,
            1 => 1024,
            _ => 0x11_0000,
        };

        let ranges = random_ranges(&mut rng, count, space);

        assert_eq!(
            WideRanges::merge(ranges.iter().copied()).as_slice(),
            merge_by_codepoints(&ranges).as_slice(),
            "раунд {}: {:?}",
            round,
            ranges
        );
    }
}

#[test]
fn input_order_does_not_matter()
{
    let mut rng = StdRng::seed_from_u64(11);

    let forward = WideRanges::merge(RAW_RANGES.iter().copied());
    let backward = WideRanges::merge(RAW_RANGES.iter().rev().copied());

    let mut shuffled = RAW_RANGES.clone();

    for i in (1 .. shuffled.len()).rev() {
        shuffled.swap(i, rng.random_range(0 ..= i));
    }

    assert_eq!(forward, backward);
    assert_eq!(forward, WideRanges::merge(shuffled));
}

#[test]
fn idempotent()
{
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0 .. 100 {
        let once = WideRanges::merge(random_ranges(&mut rng, 48, 2048));
        let twice = WideRanges::merge(once.iter().copied());

        assert_eq!(once, twice);
    }
}

#[test]
fn disjoint_and_ordered()
{
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0 .. 100 {
        let merged = WideRanges::merge(random_ranges(&mut rng, 48, 2048));

        for pair in merged.as_slice().windows(2) {
            assert!(pair[0].start() < pair[1].start());
            assert!(pair[1].start() > pair[0].end() + 1);
        }
    }
}

#[test]
fn total()
{
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0 .. 50 {
        let ranges = random_ranges(&mut rng, 32, 4096);
        let merged = WideRanges::merge(ranges.iter().copied());

        let covered: HashSet<u32> = ranges
            .iter()
            .flat_map(|range| range.start() ..= range.end())
            .collect();

        // каждый входной кодпоинт ровно в одном диапазоне, и ничего лишнего
        for code in 0 .. 4096 + 256 {
            let hits = merged.iter().filter(|range| range.contains(code)).count();

            assert_eq!(hits, usize::from(covered.contains(&code)), "{:04X}", code);
            assert_eq!(merged.contains(code), covered.contains(&code), "{:04X}", code);
        }

        assert_eq!(merged.codepoints(), covered.len() as u64);
    }
}
