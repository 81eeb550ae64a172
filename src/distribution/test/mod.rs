use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

const SAMPLES: usize = 30_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xdeadbeef)
}

#[test]
fn test_byte_within_range() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let size = Byte.next_size(&mut rng);
        assert!(size < BYTE_RANGE, "Byte size {} out of [0, 1024)", size);
    }
}

#[test]
fn test_kilobyte_within_range() {
    let mut rng = rng();
    let mut max_seen = 0;
    for _ in 0..SAMPLES {
        let size = Kilobyte.next_size(&mut rng);
        assert!(size < 1024 * 1024, "Kilobyte size {} out of [0, 1Mb)", size);
        max_seen = max_seen.max(size);
    }
    assert!(max_seen >= 1024, "Kilobyte draws should exceed a single byte draw");
}

#[test]
fn test_megabyte_within_range() {
    let mut rng = rng();
    let mut max_seen = 0;
    for _ in 0..SAMPLES {
        let size = Megabyte.next_size(&mut rng);
        assert!(size < 1024 * 1024 * 1024, "Megabyte size {} out of [0, 1Gb)", size);
        max_seen = max_seen.max(size);
    }
    assert!(max_seen >= 1024 * 1024);
}

#[test]
fn test_kilobyte_composition() {
    // Same seed, same draws: low byte first, then the high byte
    let mut a = rng();
    let mut b = rng();
    for _ in 0..100 {
        let low = Byte.next_size(&mut a);
        let high = Byte.next_size(&mut a);
        assert_eq!(Kilobyte.next_size(&mut b), low + high * 1024);
    }
}

#[test]
fn test_megabyte_composition() {
    let mut a = rng();
    let mut b = rng();
    for _ in 0..100 {
        let mb = Byte.next_size(&mut a);
        let kb = Kilobyte.next_size(&mut a);
        assert_eq!(Megabyte.next_size(&mut b), mb * 1024 * 1024 + kb);
    }
}

#[test]
fn test_equal_selects_each_scale_evenly() {
    let mut rng = rng();
    let mut counts: HashMap<Scale, usize> = HashMap::new();
    for _ in 0..SAMPLES {
        *counts.entry(Equal.choose(&mut rng)).or_default() += 1;
    }

    let expected = SAMPLES / 3;
    let tolerance = expected / 10;
    for scale in [Scale::Byte, Scale::Kilobyte, Scale::Megabyte] {
        let got = counts.get(&scale).copied().unwrap_or(0);
        assert!(
            got.abs_diff(expected) < tolerance,
            "{:?} chosen {} times, expected about {}",
            scale,
            got,
            expected
        );
    }
}

#[test]
fn test_equal_stays_below_megabyte_bound() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        assert!(Equal.next_size(&mut rng) < 1024 * 1024 * 1024);
    }
}

#[test]
fn test_describe_header_and_range() {
    let text = Byte.describe();
    assert!(text.starts_with(DESCRIPTION_HEADER));
    assert!(text.ends_with("Uniform generation in [0-1Kb)\n"));
    assert_eq!(text.lines().count(), 2);

    assert!(Equal.describe().contains("Equal probability of three sizes"));
}

#[test]
fn test_kind_builds_matching_distribution() {
    for kind in DistributionKind::all() {
        let dist = kind.build();
        assert!(dist.describe().starts_with(DESCRIPTION_HEADER), "{}", kind.name());
    }
    assert_eq!(
        DistributionKind::Megabyte.build().range_info(),
        Megabyte.range_info()
    );
    assert_eq!(DistributionKind::default(), DistributionKind::Equal);
}
