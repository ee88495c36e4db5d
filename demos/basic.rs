use chrono::{TimeZone, Utc};
use timeuuid::{FileRepository, UuidGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The node id is persisted, so repeated runs keep the same node field
    let repository = FileRepository::new(std::env::temp_dir().join("timeuuid_node_id"));
    let generator = UuidGenerator::new(repository);

    println!("Generating 5 version 1 UUIDs:");
    for _ in 0..5 {
        let uuid = generator.generate()?;
        let minted = Utc
            .timestamp_millis_opt(uuid.epoch_millis())
            .single()
            .expect("UUID timestamp out of range");

        println!(
            "{uuid}  node={}  seq={:#06x}  minted={}",
            uuid.node_hex(),
            uuid.clock_sequence(),
            minted.format("%Y-%m-%d %H:%M:%S%.3f"),
        );
    }

    Ok(())
}
