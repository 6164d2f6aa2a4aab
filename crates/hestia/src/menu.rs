//! Hierarchical menu loops and the device installation workflow.
//!
//! Each menu level loops until an explicit return/exit choice. Failed
//! operations are reported to the user and the loop continues; nothing here
//! is a silent no-op.

use anyhow::Context;
use tracing::info;
use tracing::warn;

use crate::catalog::Catalog;
use crate::catalog::Device;
use crate::catalog::DeviceKind;
use crate::console::Console;

/// Run the main menu loop until the user chooses to exit.
///
/// The catalog reflects every change made during the session when this
/// returns; persisting it is the caller's job.
pub fn main_menu(console: &mut dyn Console, catalog: &mut Catalog) -> anyhow::Result<()> {
    loop {
        console.write_line("")?;
        console.write_line("Main Menu:")?;
        console.write_line("1. Install new device")?;
        console.write_line("2. Control a device")?;
        console.write_line("3. View all devices")?;
        console.write_line("4. Exit")?;

        let choice = console.read_line("Choose an option: ")?;
        match choice.as_str() {
            "1" => install_menu(console, catalog)?,
            "2" => console.write_line("Controlling devices is not implemented yet.")?,
            "3" => console.write_line("Viewing devices is not implemented yet.")?,
            "4" => return Ok(()),
            other => {
                console.write_line(&format!("Invalid choice '{}'. Please try again.", other))?
            }
        }
    }
}

/// Install-a-device submenu. Only the smart light path is wired; the other
/// device kinds report themselves as not implemented.
fn install_menu(console: &mut dyn Console, catalog: &mut Catalog) -> anyhow::Result<()> {
    loop {
        console.write_line("")?;
        console.write_line("Install a Device Menu")?;
        console.write_line("1. Install new Smart Light")?;
        console.write_line("2. Install new Smart Security Camera")?;
        console.write_line("3. Install new Smart Thermostat")?;
        console.write_line("4. Install new Smart Speaker")?;
        console.write_line("5. Return to Main Menu")?;

        let choice = console.read_line("Please choose an option (1-5): ")?;
        match choice.as_str() {
            "1" => {
                if let Err(e) = install_smart_light(console, catalog) {
                    warn!("smart light installation failed: {:#}", e);
                    console.write_line(&format!("Installation failed: {:#}", e))?;
                }
            }
            "2" | "3" | "4" => {
                console.write_line("Installing that device type is not implemented yet.")?
            }
            "5" => return Ok(()),
            other => {
                console.write_line(&format!("Invalid choice '{}'. Please try again.", other))?
            }
        }
    }
}

/// Collect the smart light attributes, construct the device, and append it
/// to the catalog.
///
/// A malformed numeric entry or a duplicate id fails the whole operation;
/// there is no retry prompt. The caller reports the error and the menu loop
/// continues.
fn install_smart_light(console: &mut dyn Console, catalog: &mut Catalog) -> anyhow::Result<()> {
    console.write_line("")?;
    console.write_line("Install Smart Light Menu")?;

    let id: i32 = console
        .read_line("Enter Device ID: ")?
        .parse()
        .context("device id must be an integer")?;

    if catalog.contains_id(id) {
        anyhow::bail!("device id {} is already installed", id);
    }

    let name = console.read_line("Enter Device Name: ")?;

    let brightness: f64 = console
        .read_line("Enter Brightness (1-100): ")?
        .parse()
        .context("brightness must be a number")?;

    let colour = console.read_line("Enter Default Colour: ")?;

    console.write_line("Smart Light Installed")?;
    console.write_line(&format!("Device ID: {}", id))?;
    console.write_line(&format!("Name: {}", name))?;
    console.write_line(&format!("Default Colour: {}", colour))?;
    console.write_line(&format!("Brightness: {}", brightness))?;

    info!("installed smart light {} ({})", id, name);
    catalog.add(Device::new(id, name, DeviceKind::Light { brightness, colour }));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_install_smart_light_appends_device() {
        // Main -> install -> light, then back out of both menus.
        let mut console = ScriptedConsole::with_inputs(&[
            "1", "1", "1", "Lamp", "80", "Warm White", "5", "4",
        ]);
        let mut catalog = Catalog::new();

        main_menu(&mut console, &mut catalog).unwrap();

        assert_eq!(catalog.len(), 1);
        let device = &catalog.all()[0];
        assert_eq!(device.id, 1);
        assert_eq!(device.name, "Lamp");
        assert_eq!(
            device.kind,
            DeviceKind::Light {
                brightness: 80.0,
                colour: "Warm White".to_string(),
            }
        );
        assert!(console.output_contains("Smart Light Installed"));
        assert!(console.output_contains("Device ID: 1"));
        assert!(console.output_contains("Brightness: 80"));
    }

    #[test]
    fn test_malformed_brightness_fails_operation_and_loop_continues() {
        let mut console = ScriptedConsole::with_inputs(&[
            "1", "1", "2", "Lamp", "bright", "5", "4",
        ]);
        let mut catalog = Catalog::new();

        main_menu(&mut console, &mut catalog).unwrap();

        assert!(catalog.is_empty());
        assert!(console.output_contains("Installation failed"));
        assert!(console.output_contains("brightness must be a number"));
    }

    #[test]
    fn test_malformed_device_id_fails_operation() {
        let mut console = ScriptedConsole::with_inputs(&["1", "1", "seven", "5", "4"]);
        let mut catalog = Catalog::new();

        main_menu(&mut console, &mut catalog).unwrap();

        assert!(catalog.is_empty());
        assert!(console.output_contains("device id must be an integer"));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.add(Device::new(
            1,
            "Existing".to_string(),
            DeviceKind::Speaker { volume: 10 },
        ));

        let mut console = ScriptedConsole::with_inputs(&["1", "1", "1", "5", "4"]);
        main_menu(&mut console, &mut catalog).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(console.output_contains("already installed"));
    }

    #[test]
    fn test_unimplemented_paths_report_themselves() {
        let mut console = ScriptedConsole::with_inputs(&["2", "3", "1", "2", "5", "4"]);
        let mut catalog = Catalog::new();

        main_menu(&mut console, &mut catalog).unwrap();

        assert!(console.output_contains("Controlling devices is not implemented yet."));
        assert!(console.output_contains("Viewing devices is not implemented yet."));
        assert!(console.output_contains("Installing that device type is not implemented yet."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_choices_reprompt_with_diagnostic() {
        let mut console = ScriptedConsole::with_inputs(&["9", "1", "0", "5", "4"]);
        let mut catalog = Catalog::new();

        main_menu(&mut console, &mut catalog).unwrap();

        assert!(console.output_contains("Invalid choice '9'"));
        assert!(console.output_contains("Invalid choice '0'"));
    }
}
