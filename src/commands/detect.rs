//! Device detection and classification commands

use fcflasher_core::identity::IdentifierRegistry;
use fcflasher_core::FlightController;
use serialport::SerialPortType;

/// Enumerate USB serial ports and classify each against the registry
pub fn run_detect(registry: &IdentifierRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let ports = serialport::available_ports()?;
    let mut found = 0;

    for port in ports {
        let SerialPortType::UsbPort(usb) = port.port_type else {
            continue;
        };
        let product = usb.product.unwrap_or_default();
        let manufacturer = usb.manufacturer.unwrap_or_default();

        match registry.classify(&product, &manufacturer) {
            Some(platform) => {
                let board = FlightController::with_path(
                    product.as_str(),
                    manufacturer.as_str(),
                    platform,
                    port.port_name.as_str(),
                );
                println!(
                    "{:<16} {:<14} {} / {}",
                    port.port_name,
                    board.platform.to_string(),
                    product,
                    manufacturer
                );
                found += 1;
            }
            None => {
                log::debug!(
                    "{}: no identifier rule for {} / {}",
                    port.port_name,
                    product,
                    manufacturer
                );
            }
        }
    }

    if found == 0 {
        println!("No known flight controller attached.");
    }
    Ok(())
}

/// Classify a single product/manufacturer pair
pub fn run_classify(registry: &IdentifierRegistry, product: &str, manufacturer: &str) {
    match registry.classify(product, manufacturer) {
        Some(platform) => println!("{}", platform),
        None => println!("unknown"),
    }
}
