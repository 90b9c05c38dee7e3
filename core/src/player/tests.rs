//! Tests for player frames and derived queries

use std::sync::Arc;

use glam::Vec2;

use super::*;
use crate::catalog::{DeviceModel, ModelIdentity};
use crate::control_type::ControlType;
use crate::schema::{AxisBinding, ButtonBinding, KeyboardPreset, Schema, standard_gamepad};
use crate::slot::Side;

fn assigned(control_type: ControlType, schema: Schema, settings: DeriveSettings) -> Player {
    let model = DeviceModel::new(
        ModelIdentity::UnknownStandard,
        Arc::new(control_type),
        Arc::new(schema),
    );
    let mut player = Player::new(0, settings);
    player.assign(Assignment::from_model(&model));
    player.begin_frame();
    player
}

fn keyboard_player() -> Player {
    let schema = KeyboardPreset::Qwerty.schema();
    let model = DeviceModel::keyboard(
        Arc::new(ControlType::keyboard(KeyboardPreset::Qwerty.theme())),
        Arc::new(schema),
    );
    let mut player = Player::new(1, DeriveSettings::default());
    player.assign(Assignment::from_model(&model));
    player
}

fn deadzone_schema(deadzone: f32) -> Schema {
    Schema::builder()
        .bind(SlotName::LUp, AxisBinding::with_params(-2, 0.5, deadzone).unwrap())
        .bind(SlotName::LDown, AxisBinding::with_params(2, 0.5, deadzone).unwrap())
        .bind(SlotName::LLeft, AxisBinding::with_params(-1, 0.5, deadzone).unwrap())
        .bind(SlotName::LRight, AxisBinding::with_params(1, 0.5, deadzone).unwrap())
        .bind(SlotName::LTrigger, AxisBinding::with_params(5, 0.5, 0.25).unwrap())
        .bind(SlotName::RTrigger, ButtonBinding::new(8).unwrap())
        .gamepad()
        .unwrap()
}

/// Record a left stick reading the way sampling would
fn set_left_stick(player: &mut Player, x: f32, y: f32) {
    player.record(SlotName::LUp, y < -0.5, y);
    player.record(SlotName::LDown, y > 0.5, y);
    player.record(SlotName::LLeft, x < -0.5, x);
    player.record(SlotName::LRight, x > 0.5, x);
}

#[test]
fn test_player_numbering() {
    let player = Player::new(2, DeriveSettings::default());
    assert_eq!(player.index(), 2);
    assert_eq!(player.number(), 3);
    assert!(!player.is_assigned());
    assert!(!player.has_gamepad());
    assert!(!player.has_keyboard());
}

#[test]
fn test_edges_require_previous_entry() {
    let mut player = assigned(ControlType::hedgehog(), standard_gamepad(), DeriveSettings::default());
    player.record(SlotName::Button0, true, 1.0);
    assert_eq!(player.edges().count(), 0);

    player.begin_frame();
    player.record(SlotName::Button0, false, 0.0);
    player.record(SlotName::Button1, true, 1.0);
    let edges: Vec<_> = player.edges().collect();
    assert_eq!(edges, vec![(SlotName::Button0, Edge::Up)]);

    player.begin_frame();
    player.record(SlotName::Button0, true, 1.0);
    player.record(SlotName::Button1, true, 1.0);
    let edges: Vec<_> = player.edges().collect();
    assert_eq!(edges, vec![(SlotName::Button0, Edge::Down)]);
}

#[test]
fn test_begin_frame_moves_current() {
    let mut player = assigned(ControlType::hedgehog(), standard_gamepad(), DeriveSettings::default());
    player.record(SlotName::Menu, true, 1.0);
    player.begin_frame();
    assert!(player.current().is_empty());
    assert_eq!(player.previous().digital(SlotName::Menu), Some(true));
}

#[test]
fn test_stick_vector_axes() {
    let mut player = assigned(ControlType::hedgehog(), standard_gamepad(), DeriveSettings::default());
    set_left_stick(&mut player, 0.3, -0.8);
    let stick = player.stick_vector(Side::Left);
    assert!((stick.x - 0.3).abs() < 1e-6);
    assert!((stick.y + 0.8).abs() < 1e-6);
}

#[test]
fn test_stick_vector_unassigned_is_zero() {
    let player = Player::new(0, DeriveSettings::default());
    assert_eq!(player.stick_vector(Side::Right), Vec2::ZERO);
    assert_eq!(player.normalized_stick_vector(Side::Right), Vec2::ZERO);
}

#[test]
fn test_stick_vector_unbound_bias() {
    let schema = Schema::builder()
        .bind(SlotName::LRight, ButtonBinding::new(3).unwrap())
        .gamepad()
        .unwrap();

    let mut player = assigned(ControlType::hedgehog(), schema.clone(), DeriveSettings::default());
    player.record(SlotName::LRight, false, 0.0);
    assert_eq!(player.stick_vector(Side::Left), Vec2::new(-DIGITAL_STICK_NUDGE, 0.0));
    player.record(SlotName::LRight, true, 1.0);
    assert_eq!(player.stick_vector(Side::Left), Vec2::ZERO);

    let settings = DeriveSettings {
        unbound_stick_bias: false,
        ..DeriveSettings::default()
    };
    let mut player = assigned(ControlType::hedgehog(), schema, settings);
    player.record(SlotName::LRight, true, 1.0);
    assert_eq!(player.stick_vector(Side::Left), Vec2::new(DIGITAL_STICK_NUDGE, 0.0));
}

#[test]
fn test_keyboard_stick_nets_zero() {
    let player = keyboard_player();
    assert_eq!(player.stick_vector(Side::Left), Vec2::ZERO);
    assert_eq!(player.stick_vector(Side::Right), Vec2::ZERO);
}

#[test]
fn test_normalized_stick_inside_deadzone_is_zero() {
    let mut player = assigned(ControlType::hedgehog(), deadzone_schema(0.2), DeriveSettings::default());
    set_left_stick(&mut player, 0.15, 0.0);
    assert_eq!(player.normalized_stick_vector(Side::Left), Vec2::ZERO);
}

#[test]
fn test_normalized_stick_full_scale_is_unit() {
    let mut player = assigned(ControlType::hedgehog(), deadzone_schema(0.2), DeriveSettings::default());
    set_left_stick(&mut player, 1.0, 0.0);
    let stick = player.normalized_stick_vector(Side::Left);
    assert!((stick.length() - 1.0).abs() < 1e-6);
    assert!(stick.x > 0.0);

    set_left_stick(&mut player, -1.0, 1.0);
    let stick = player.normalized_stick_vector(Side::Left);
    assert!((stick.length() - 1.0).abs() < 1e-6);
}

#[test]
fn test_normalized_stick_rescales() {
    let mut player = assigned(ControlType::hedgehog(), deadzone_schema(0.2), DeriveSettings::default());
    set_left_stick(&mut player, 0.0, -0.6);
    let stick = player.normalized_stick_vector(Side::Left);
    assert!((stick.y + 0.5).abs() < 1e-6);
    assert_eq!(stick.x, 0.0);
}

#[test]
fn test_trigger_digital() {
    let mut player = assigned(ControlType::hedgehog(), deadzone_schema(0.0), DeriveSettings::default());
    player.record(SlotName::RTrigger, true, 1.0);
    assert_eq!(player.trigger_value(Side::Right), 1.0);
    player.record(SlotName::RTrigger, false, 0.0);
    assert_eq!(player.trigger_value(Side::Right), 0.0);
}

#[test]
fn test_trigger_analog_remap() {
    let mut player = assigned(ControlType::hedgehog(), deadzone_schema(0.0), DeriveSettings::default());
    player.record(SlotName::LTrigger, false, 0.25);
    assert_eq!(player.trigger_value(Side::Left), 0.0);
    player.record(SlotName::LTrigger, true, 1.0);
    assert_eq!(player.trigger_value(Side::Left), 1.0);
    player.record(SlotName::LTrigger, false, 0.1);
    assert!(player.trigger_value(Side::Left) < 0.0);
}

#[test]
fn test_trigger_clamped_below_deadzone() {
    let settings = DeriveSettings {
        clamp_trigger_below_deadzone: true,
        ..DeriveSettings::default()
    };
    let mut player = assigned(ControlType::hedgehog(), deadzone_schema(0.0), settings);
    player.record(SlotName::LTrigger, false, 0.1);
    assert_eq!(player.trigger_value(Side::Left), 0.0);
}

#[test]
fn test_trigger_unbound_reads_zero() {
    let player = keyboard_player();
    let schema = Schema::builder().gamepad().unwrap();
    let gamepad = assigned(ControlType::hedgehog(), schema, DeriveSettings::default());
    assert_eq!(gamepad.trigger_value(Side::Left), 0.0);
    assert_eq!(player.trigger_value(Side::Left), 0.0);
}

#[test]
fn test_button_text_gamepad() {
    let hedgehog = assigned(ControlType::hedgehog(), standard_gamepad(), DeriveSettings::default());
    assert_eq!(hedgehog.button_text(SlotName::Button0, false), Some("A"));
    assert_eq!(hedgehog.button_text(SlotName::Menu, true), Some("start"));

    let ragdoll = assigned(ControlType::ragdoll(), standard_gamepad(), DeriveSettings::default());
    assert_eq!(ragdoll.button_text(SlotName::Button0, false), Some("x"));
    assert_eq!(ragdoll.button_text(SlotName::Button0, true), Some("cross"));
    assert_eq!(ragdoll.button_text(SlotName::Button3, true), Some("triangle"));
}

#[test]
fn test_button_text_keyboard() {
    let player = keyboard_player();
    assert!(player.has_keyboard());
    assert_eq!(player.button_text(SlotName::DUp, false), Some("↑"));
    assert_eq!(player.button_text(SlotName::Menu, true), Some("Return"));
    assert_eq!(player.button_text(SlotName::LUp, false), None);
}

#[test]
fn test_button_text_unassigned() {
    let player = Player::new(0, DeriveSettings::default());
    assert_eq!(player.button_text(SlotName::Button0, false), None);
}
