use crate::app::events::PickModifiers;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{EntityId, PanelSpec, ViewStyle};

use super::map_intent_to_commands;

fn pick(panel: &str, modifiers: PickModifiers) -> Vec<AppCommand> {
    let state = AppState::new();
    map_intent_to_commands(
        &state,
        AppIntent::PanelPicked {
            panel: Some(EntityId::from(panel)),
            modifiers,
        },
    )
}

#[test]
fn plain_pick_maps_to_exclusive_group_selection() {
    let commands = pick("panel-1", PickModifiers::NONE);

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SelectCabinetGroup {
            additive: false,
            ..
        }
    ));
}

#[test]
fn ctrl_pick_maps_to_additive_group_selection() {
    let commands = pick("panel-1", PickModifiers::CTRL);
    assert!(matches!(
        commands[0],
        AppCommand::SelectCabinetGroup { additive: true, .. }
    ));
}

#[test]
fn shift_pick_maps_to_exclusive_single_selection() {
    let commands = pick("panel-1", PickModifiers::SHIFT);
    assert!(matches!(
        commands[0],
        AppCommand::SelectSinglePanel {
            additive: false,
            ..
        }
    ));
}

#[test]
fn shift_ctrl_pick_maps_to_additive_single_selection() {
    let commands = pick("panel-1", PickModifiers::SHIFT_CTRL);
    assert!(matches!(
        commands[0],
        AppCommand::SelectSinglePanel { additive: true, .. }
    ));
}

#[test]
fn pick_on_empty_space_clears_selection() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PanelPicked {
            panel: None,
            modifiers: PickModifiers::CTRL,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearSelection));
}

#[test]
fn toggle_view_style_flips_current_style() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ToggleViewStyleRequested);
    assert!(matches!(
        commands[0],
        AppCommand::SetViewStyle {
            style: ViewStyle::Solid
        }
    ));

    state.view.style = ViewStyle::Solid;
    let commands = map_intent_to_commands(&state, AppIntent::ToggleViewStyleRequested);
    assert!(matches!(
        commands[0],
        AppCommand::SetViewStyle {
            style: ViewStyle::Wireframe
        }
    ));
}

#[test]
fn cabinet_form_without_dimensions_uses_option_defaults() {
    let mut state = AppState::new();
    state.options.cabinet_width = 450.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CabinetFormSubmitted {
            name: None,
            dimensions: None,
        },
    );

    match &commands[0] {
        AppCommand::CreateCabinetFromDimensions {
            floor, parameters, ..
        } => {
            assert!(floor.is_none());
            assert_eq!(parameters.width, 450.0);
            assert_eq!(parameters.thickness, 18.0);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn new_panel_without_cabinet_targets_existing_active_cabinet() {
    let mut state = AppState::new();
    let cabinet = state
        .store
        .create_cabinet(None, None, None)
        .expect("Schrank erwartet");
    state.view.active_cabinet = Some(cabinet.clone());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::NewPanelRequested {
            cabinet: None,
            spec: PanelSpec::new("Shelf", 500.0, 300.0, 18.0),
        },
    );

    assert!(matches!(
        &commands[0],
        AppCommand::CreatePanel { cabinet: Some(c), .. } if c == &cabinet
    ));
}

#[test]
fn stale_active_cabinet_is_ignored() {
    let mut state = AppState::new();
    state.view.active_cabinet = Some(EntityId::from("cab-gone"));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::NewPanelRequested {
            cabinet: None,
            spec: PanelSpec::new("Shelf", 500.0, 300.0, 18.0),
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::CreatePanel { cabinet: None, .. }
    ));
}

#[test]
fn choosing_empty_cabinet_clears_selection() {
    let mut state = AppState::new();
    let cabinet = state
        .store
        .create_cabinet(None, None, None)
        .expect("Schrank erwartet");

    let commands = map_intent_to_commands(&state, AppIntent::CabinetChosen { cabinet });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SetActiveCabinet { .. }));
    assert!(matches!(commands[1], AppCommand::ClearSelection));
}
