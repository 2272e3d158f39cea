use twimlgen_core::{Compressibility, PayloadError, byte_length, generate};

fn main() -> Result<(), PayloadError> {
    // One run per mode, all at the same byte target
    let test_configs = [
        (Compressibility::Incompressible, 1000),
        (Compressibility::MaximallyCompressible, 1000),
        (Compressibility::StructuredMixed, 1000),
    ];

    println!("TwiML Payload Generator Test");
    println!("{}", "=".repeat(40));

    for (mode, size) in test_configs {
        println!("\nTesting {mode} payload ({size} bytes):");
        println!("{}", "-".repeat(30));

        let payload = generate(size, mode)?;
        let actual_size = byte_length(&payload);

        println!("Target size: {size} bytes");
        println!("Actual size: {actual_size} bytes");

        let preview: String = payload.chars().take(100).collect();
        let ellipsis = if payload.chars().count() > 100 { "..." } else { "" };
        println!("Preview: {preview}{ellipsis}");
    }

    // Asking for an unknown mode name fails instead of falling back
    match "lipsum".parse::<Compressibility>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\nAs expected: {e}"),
    }

    // So does a negative byte target
    match generate(-1, Compressibility::Incompressible) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("As expected: {e}"),
    }

    Ok(())
}
