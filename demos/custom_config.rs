use std::time::Duration;

use timeuuid::{GeneratorConfig, MemoryRepository, UuidGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bound the retry loop: give up if a tick stays exhausted for 50 ms
    let config = GeneratorConfig::builder()
        .retry_interval(Duration::from_millis(2))?
        .max_wait(Duration::from_millis(50))
        .build();

    let generator = UuidGenerator::with_config(MemoryRepository::new(), config);

    // Mint several UUIDs at one pinned timestamp: same tick, distinct
    // clock sequences
    let time = 1_700_000_000_000i64;
    for _ in 0..4 {
        let uuid = generator.generate_at(time, 0)?;
        println!("{uuid}  seq={:#06x}", uuid.clock_sequence());
    }

    let live = generator.generate()?;
    println!("wall clock: {live}  ({} ms since epoch)", live.epoch_millis());

    Ok(())
}
