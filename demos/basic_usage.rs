// ============================================================================
// Basic Usage Example
// ============================================================================

use base36_types::prelude::*;
use base36_types::utils::init_logging;
use chrono::{TimeZone, Utc};

fn main() {
    init_logging(tracing::Level::DEBUG);

    println!("=== Base36 Keys Example ===\n");

    // Encode integers; digits are written least significant first
    let key = Base36Number::from_value(1106, 3).unwrap();
    println!("1106 with 3 digits:   {}", key);
    println!("decoded again:        {}", key.to_i64());

    let parsed: Base36Number = "7A96D".parse().unwrap();
    println!("\"7A96D\" decodes to:   {}", parsed.to_i64());
    println!("stored digit hash:    {}", parsed.digit_hash());

    // Arithmetic returns new values
    let sum = parsed.checked_add(&Base36Number::new("3", 1).unwrap()).unwrap();
    println!("7A96D + 3:            {}", sum);
    println!("7A96D + 100:          {}", parsed.checked_add_value(100).unwrap());

    // Fixed width: overflow is an error
    match Base36Number::new("Z", 1).unwrap().increment() {
        Ok(next) => println!("unexpected: {}", next),
        Err(e) => println!("Z + 1 at width 1:     {}", e),
    }
    println!(
        "Z + 1 at width 2:     {}",
        Base36Number::new("Z", 2).unwrap().increment().unwrap()
    );

    // Key sequence for a table
    println!("\nAllocating keys...");
    let config = KeySequenceConfig::object_id("customers".to_string()).with_start("QU");
    config.validate().unwrap();
    let sequence = KeySequence::from_config(&config).unwrap();
    for _ in 0..3 {
        println!("  next key: {}", sequence.next_key().unwrap());
    }
    println!("issued {} keys", sequence.issued());

    // Value objects
    println!("\nValue objects...");
    let contract = Period::new(
        Some(Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap()),
        None,
    )
    .unwrap();
    println!("contract period:      {}", contract.format(DateStringRepresentation::Date));
    println!("active now:           {}", contract.is_now_enclosed());
    println!("gender:               {} ({})", Gender::ThirdGender, Gender::ThirdGender.name());
    println!("secret set:           {}", !EncryptedString::new("x9f0c1").is_empty());

    println!("\n=== Example Complete ===");
}
