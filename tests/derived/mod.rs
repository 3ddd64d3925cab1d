use mtwist::Mt19937;

use crate::common::rand_seed;

// draws for the frequency checks
const SAMPLES: usize = 1_000_000;

// counts values drawn from [0, buckets - 1]
fn frequencies(generator: &mut Mt19937, buckets: usize) -> Vec<usize> {
    let mut counts = vec![0_usize; buckets];

    for _i in 0..SAMPLES {
        let num = generator.next_u32_range(0, buckets as u32 - 1);
        counts[num as usize] += 1;
    }

    counts
}

#[test]
fn coin_flip_is_uniform() {
    let mut generator = Mt19937::new(5489);
    let counts = frequencies(&mut generator, 2);

    // standard deviation is 500, allow ten of them
    for count in counts.iter() {
        assert!(
            (*count as i64 - (SAMPLES / 2) as i64).abs() < 5_000,
            "biased coin: {:?}",
            counts
        );
    }
}

#[test]
fn uneven_range_is_uniform() {
    // 2^32 is not a multiple of 3, a plain modulo would be biased
    let mut generator = Mt19937::from_seed(&rand_seed());
    let counts = frequencies(&mut generator, 3);
    let expected = (SAMPLES / 3) as i64;

    for count in counts.iter() {
        assert!(
            (*count as i64 - expected).abs() < 5_000,
            "biased range: {:?}",
            counts
        );
    }
}

#[test]
fn signed_range_covers_bounds() {
    let mut generator = Mt19937::from_seed(&rand_seed());
    let mut seen = [false; 5];

    for _i in 0..10_000 {
        let num = generator.next_i32_range(-2, 2);
        assert!((-2..=2).contains(&num));
        seen[(num + 2) as usize] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn floats_stay_in_unit_interval() {
    let mut generator = Mt19937::from_seed(&rand_seed());
    let mut sum = 0.0_f64;

    for _i in 0..SAMPLES {
        let num = generator.next_f32();
        assert!(num.is_finite());
        assert!(num >= 0.0 && num < 1.0, "next_f32 out of range: {}", num);
        sum += num as f64;

        let num = generator.next_f64();
        assert!(num >= 0.0 && num < 1.0, "next_f64 out of range: {}", num);
    }

    let mean = sum / SAMPLES as f64;
    assert!((mean - 0.5).abs() < 0.01, "skewed mean: {}", mean);
}
