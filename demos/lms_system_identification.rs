use micro_lms::common::F64ArrayExt;
use micro_lms::{FilterConfig, LmsFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() {
    const TAP_COUNT: usize = 8;
    const CHANNEL_COUNT: usize = 2;
    // The target is modelled as coming from the first witness channel's sensor
    const TARGET_CHANNEL: usize = 0;
    const STEP_SCALE: f64 = 0.05;
    const SAMPLE_COUNT: usize = 20000;
    const BLOCK_SIZE: usize = 2000;
    const NOISE_LEVEL: f64 = 0.01;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Using notation from https://en.wikipedia.org/wiki/Least_mean_squares_filter

    // The unknown system mapping the witness channels onto the target
    let response: [[f64; TAP_COUNT]; CHANNEL_COUNT] = [
        [0.6, -0.3, 0.15, 0.0, 0.0, 0.05, 0.0, 0.0],
        [0.0, 0.0, 0.4, 0.2, -0.5, 0.0, 0.0, 0.1],
    ];

    // x, the witness channels
    let mut rng = StdRng::seed_from_u64(42);
    let witness: Vec<Vec<f64>> = (0..CHANNEL_COUNT)
        .map(|_| {
            (0..SAMPLE_COUNT)
                .map(|_| rng.gen_range(-1.0..=1.0_f64))
                .collect()
        })
        .collect();
    println!("Created {} witness channels of {} samples", CHANNEL_COUNT, SAMPLE_COUNT);
    println!("d(n) <- response applied to x(n), plus noise (level {})", NOISE_LEVEL);
    println!("");

    let config = FilterConfig::new(TAP_COUNT, TARGET_CHANNEL, CHANNEL_COUNT, STEP_SCALE);
    let mut filter = LmsFilter::from_config(config).unwrap();
    println!(
        "Filtering (μ={STEP_SCALE}, taps={TAP_COUNT}, channels={CHANNEL_COUNT}, normalized={})",
        filter.is_normalized()
    );
    println!("");

    println!("Samples          d(n) RMS       e(n) RMS");
    println!("-----------------------------------------");

    // e, the residual after subtracting the prediction from d
    let mut e = vec![];
    let mut d = vec![];
    let mut x = [[0.0; TAP_COUNT]; CHANNEL_COUNT];
    for n in TAP_COUNT..SAMPLE_COUNT {
        for (c, row) in x.iter_mut().enumerate() {
            row.copy_from_slice(&witness[c][n - TAP_COUNT..n]);
        }
        let mut target = NOISE_LEVEL * rng.gen_range(-1.0..=1.0_f64);
        for (x_row, h_row) in x.iter().zip(response.iter()) {
            for (x, h) in x_row.iter().zip(h_row.iter()) {
                target += x * h;
            }
        }

        let y = filter.step(&x, target).unwrap();
        d.push(target);
        e.push(target - y);

        if d.len() == BLOCK_SIZE {
            println!(
                "{:>7}          {:.5}        {:.5}",
                n + 1,
                d.rms_level(),
                e.rms_level()
            );
            d.clear();
            e.clear();
        }
    }
    println!("");

    println!("Channel  Tap   Estimated   Actual");
    println!("----------------------------------");
    for (c, h_row) in response.iter().enumerate() {
        let estimate = filter.channel_coefficients(c).unwrap();
        for (f, h) in h_row.iter().enumerate() {
            println!("{:>7}  {:>3}   {:>9.5}   {:>6.3}", c, f, estimate[f], h);
        }
    }
}
