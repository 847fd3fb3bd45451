//! Audio device listing command.

use arrullo_io::{AudioBackend, CpalBackend};
use clap::Args;

#[derive(Args)]
pub struct DevicesArgs {}

pub fn run(_args: DevicesArgs) -> anyhow::Result<()> {
    let backend = CpalBackend::new();
    let devices = backend.list_devices()?;

    if devices.is_empty() {
        println!("No audio output devices found.");
        return Ok(());
    }

    let default_name = backend
        .default_output_device()?
        .map(|device| device.name);

    println!("Output Devices");
    println!("==============\n");

    for (idx, device) in devices.iter().enumerate() {
        let marker = if default_name.as_deref() == Some(device.name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!(
            "  [{}] {} ({} Hz){}",
            idx, device.name, device.default_sample_rate, marker
        );
    }

    println!();
    println!("Tip: select one by partial name:");
    println!("  arrullo play forest --output \"USB\"");

    Ok(())
}
