//! Tests for bindings and schemas

use super::*;
use crate::error::ValidationError;
use crate::slot::SlotName;

#[test]
fn test_axis_binding_sign_follows_direction() {
    let axis = AxisBinding::with_params(-2, 0.5, 0.2).unwrap();
    assert_eq!(axis.index(), 2);
    assert_eq!(axis.direction(), Direction::Negative);
    assert_eq!(axis.threshold(), -0.5);
    assert_eq!(axis.deadzone(), -0.2);

    let axis = AxisBinding::with_params(3, -0.4, -0.1).unwrap();
    assert_eq!(axis.index(), 3);
    assert_eq!(axis.direction(), Direction::Positive);
    assert_eq!(axis.threshold(), 0.4);
    assert_eq!(axis.deadzone(), 0.1);
}

#[test]
fn test_axis_binding_signs_for_mixed_inputs() {
    for index in [-4, -1, 1, 4] {
        for threshold in [-0.7, -0.1, 0.0, 0.3, 0.9] {
            for deadzone in [-0.25, 0.0, 0.25] {
                let axis = AxisBinding::with_params(index, threshold, deadzone).unwrap();
                let sign = axis.direction().sign();
                assert!(axis.threshold() * sign >= 0.0);
                assert!(axis.deadzone() * sign >= 0.0);
            }
        }
    }
}

#[test]
fn test_axis_binding_defaults() {
    let axis = AxisBinding::new(1).unwrap();
    assert_eq!(axis.threshold(), DEFAULT_AXIS_THRESHOLD);
    assert_eq!(axis.deadzone(), 0.0);
}

#[test]
fn test_axis_binding_rejects_zero_index() {
    assert_eq!(AxisBinding::new(0), Err(ValidationError::ZeroAxisIndex));
}

#[test]
fn test_axis_binding_rejects_non_finite() {
    assert!(matches!(
        AxisBinding::with_params(1, f32::NAN, 0.0),
        Err(ValidationError::NonFiniteParameter {
            field: "threshold",
            ..
        })
    ));
    assert!(matches!(
        AxisBinding::with_params(1, 0.5, f32::INFINITY),
        Err(ValidationError::NonFiniteParameter {
            field: "deadzone",
            ..
        })
    ));
}

#[test]
fn test_axis_binding_pressed() {
    let up = AxisBinding::new(-2).unwrap();
    assert!(up.is_pressed(-0.8));
    assert!(!up.is_pressed(-0.5));
    assert!(!up.is_pressed(0.8));

    let right = AxisBinding::new(1).unwrap();
    assert!(right.is_pressed(0.51));
    assert!(!right.is_pressed(0.5));
}

#[test]
fn test_button_binding_rejects_zero() {
    assert_eq!(ButtonBinding::new(0), Err(ValidationError::ZeroButtonIndex));
    assert_eq!(ButtonBinding::new(7).unwrap().index(), 7);
}

#[test]
fn test_keyboard_schema_rejects_buttons() {
    let result = Schema::builder()
        .bind(SlotName::DUp, keys::UP_ARROW)
        .bind(SlotName::Button0, ButtonBinding::new(1).unwrap())
        .keyboard("Broken");
    assert_eq!(
        result,
        Err(ValidationError::NonKeyInKeyboardSchema {
            slot: SlotName::Button0
        })
    );
}

#[test]
fn test_gamepad_schema_rejects_keys() {
    let result = Schema::builder()
        .bind(SlotName::Button0, ButtonBinding::new(1).unwrap())
        .bind(SlotName::Menu, keys::ENTER)
        .gamepad();
    assert_eq!(
        result,
        Err(ValidationError::KeyInGamepadSchema {
            slot: SlotName::Menu
        })
    );
}

#[test]
fn test_unbind_removes_binding() {
    let schema = Schema::builder()
        .bind(SlotName::Menu, ButtonBinding::new(10).unwrap())
        .unbind(SlotName::Menu)
        .gamepad()
        .unwrap();
    assert!(schema.get(SlotName::Menu).is_none());
    assert_eq!(schema.iter().count(), 0);
}

#[test]
fn test_keyboard_lookup() {
    let schema = KeyboardPreset::Qwerty.schema();
    assert_eq!(schema.lookup(keys::UP_ARROW.code()), Some(SlotName::DUp));
    assert_eq!(schema.lookup(keys::KEY_A.code()), Some(SlotName::Button0));
    assert_eq!(schema.lookup(keys::KEY_R.code()), Some(SlotName::RTrigger));
    assert_eq!(schema.lookup(keys::KEY_Z.code()), None);
}

#[test]
fn test_presets_are_keyboard_schemas() {
    for preset in KeyboardPreset::ALL {
        let schema = preset.schema();
        assert!(schema.is_keyboard());
        assert_eq!(schema.name(), Some(preset.name()));
        assert!(schema.iter().all(|(_, binding)| binding.is_key()));
        for slot in crate::slot::Side::Left.stick_slots() {
            assert!(schema.get(slot).is_none());
        }
    }
}

#[test]
fn test_blank_preset_is_unbound() {
    assert_eq!(KeyboardPreset::Blank.schema().iter().count(), 0);
}

#[test]
fn test_dvorak_bindings() {
    let schema = KeyboardPreset::Dvorak.schema();
    assert_eq!(schema.lookup(keys::KEY_O.code()), Some(SlotName::Button1));
    assert_eq!(
        schema.lookup(keys::SINGLE_QUOTE.code()),
        Some(SlotName::LButton)
    );
    assert_eq!(schema.lookup(keys::KEY_S.code()), None);
}

#[test]
fn test_preset_parse() {
    assert_eq!("dvorak".parse::<KeyboardPreset>(), Ok(KeyboardPreset::Dvorak));
    assert_eq!("AZERTY".parse::<KeyboardPreset>(), Ok(KeyboardPreset::Azerty));
    assert!("Colemak".parse::<KeyboardPreset>().is_err());
}

#[test]
fn test_standard_gamepad_layout() {
    let schema = standard_gamepad();
    assert!(!schema.is_keyboard());
    assert_eq!(
        schema.get(SlotName::DUp),
        Some(&InputBinding::Button(ButtonBinding::new(13).unwrap()))
    );
    assert_eq!(
        schema.get(SlotName::RTrigger),
        Some(&InputBinding::Button(ButtonBinding::new(8).unwrap()))
    );
    assert_eq!(
        schema.get(SlotName::LUp),
        Some(&InputBinding::Axis(AxisBinding::new(-2).unwrap()))
    );
    assert_eq!(schema.iter().count(), 21);
}

#[test]
fn test_logitech_layout_leaves_shoulders_unbound() {
    let schema = logitech_dual_action();
    assert_eq!(
        schema.get(SlotName::Button2),
        Some(&InputBinding::Button(ButtonBinding::new(1).unwrap()))
    );
    assert!(schema.get(SlotName::LButton).is_none());
    assert!(schema.get(SlotName::RTrigger).is_none());
}

#[test]
fn test_key_constants_table() {
    assert_eq!(keys::ALL.len(), 63);
    assert_eq!(keys::by_code(13).map(KeyBinding::label), Some("Return"));
    assert_eq!(keys::by_code(0), None);
}
