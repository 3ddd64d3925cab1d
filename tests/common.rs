use mtwist::mersenne::mt19937::{Mt19937, N};

// fresh random 624-word seed
#[allow(dead_code)]
pub fn rand_seed() -> [u32; N] {
    use rand::{thread_rng, RngCore};

    let mut rng = thread_rng();
    let mut seed = [0_u32; N];

    for word in seed.iter_mut() {
        *word = rng.next_u32();
    }

    seed
}

// draw `count` outputs from a generator
#[allow(dead_code)]
pub fn draw(generator: &mut Mt19937, count: usize) -> Vec<u32> {
    (0..count).map(|_| generator.extract_number()).collect()
}
