//! Models command - list the built-in catalog and keyboard presets

use gameinput_core::{DeviceCatalog, DeviceModel, InputBinding, KeyboardPreset, SlotName};

/// Execute the models command
pub fn execute() {
    let catalog = DeviceCatalog::with_builtin_models();

    println!("=== Generic models (first match wins) ===");
    for model in catalog.generic() {
        print_model(model);
    }

    println!();
    println!("=== Fallback ===");
    print_model(catalog.unknown_standard());

    println!();
    println!("=== Keyboard presets ===");
    for preset in KeyboardPreset::ALL {
        let schema = preset.schema();
        let bindings: Vec<String> = schema
            .iter()
            .filter_map(|(slot, binding)| match binding {
                InputBinding::Key(key) => Some(format!("{slot}={}", key.label())),
                _ => None,
            })
            .collect();
        if bindings.is_empty() {
            println!("  {:<8} (all unbound)", preset.name());
        } else {
            println!("  {:<8} {}", preset.name(), bindings.join(" "));
        }
    }
}

fn print_model(model: &DeviceModel) {
    let control_type = model.control_type();
    let faces: Vec<&str> = [
        SlotName::Button0,
        SlotName::Button1,
        SlotName::Button2,
        SlotName::Button3,
    ]
    .into_iter()
    .map(|slot| control_type.label(slot))
    .collect();
    println!(
        "  {:<24} icon {:<8} type {:<9} faces {}  ({} slots bound)",
        model.describe(),
        model.icon_name(),
        control_type.name(),
        faces.join(" "),
        model.schema().iter().count()
    );
}
