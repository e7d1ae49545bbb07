use scatter_rs::api::{ChartConfig, SelectionController, SideEffect};
use scatter_rs::core::{Attribute, Axis, Dataset, Record};
use scatter_rs::interaction::{AxisState, SelectionEvent};

fn dataset() -> Dataset {
    let rows = [
        ("Alabama", "AL", 18.4, 38.1, 42_278.0, 11.5, 21.3, 32.5),
        ("Alaska", "AK", 11.4, 33.3, 71_583.0, 15.0, 19.9, 29.7),
        ("Arizona", "AZ", 17.7, 37.3, 50_255.0, 13.1, 16.6, 27.4),
    ];
    let records = rows
        .into_iter()
        .map(
            |(state, abbr, poverty, age, income, healthcare, smokes, obesity)| Record {
                state: state.to_owned(),
                abbr: abbr.to_owned(),
                poverty,
                age,
                income,
                healthcare,
                smokes,
                obesity,
            },
        )
        .collect();
    Dataset::new(records).expect("dataset")
}

fn controller() -> SelectionController {
    let config = ChartConfig::default();
    SelectionController::new(config.plot_area(), config.domain_padding)
}

#[test]
fn clicking_the_active_control_is_a_no_op() {
    let data = dataset();
    let controller = controller();
    let state = controller.initial_state(&data, AxisState::default());

    let (next, effects) = controller.transition(
        &state,
        SelectionEvent::LabelClicked(Attribute::Poverty),
        &data,
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());

    let (next, effects) = controller.transition(
        &state,
        SelectionEvent::LabelClicked(Attribute::Healthcare),
        &data,
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn x_switch_emits_effects_in_order() {
    let data = dataset();
    let controller = controller();
    let state = controller.initial_state(&data, AxisState::default());

    let (next, effects) =
        controller.transition(&state, SelectionEvent::LabelClicked(Attribute::Age), &data);

    assert_eq!(next.axes().x(), Attribute::Age);
    assert_eq!(next.axes().y(), Attribute::Healthcare);
    assert_eq!(next.y_scale(), state.y_scale());
    assert_eq!(next.x_scale(), controller.scale_for(&data, Attribute::Age));

    assert_eq!(effects.len(), 5);
    assert_eq!(
        effects[0],
        SideEffect::RenderAxis {
            axis: Axis::X,
            scale: next.x_scale(),
        }
    );
    assert_eq!(effects[1], SideEffect::RenderMarkers(next.projection()));
    assert_eq!(effects[2], SideEffect::RenderLabels(next.projection()));
    assert_eq!(
        effects[3],
        SideEffect::BindTooltip {
            x: Attribute::Age,
            y: Attribute::Healthcare,
        }
    );
    assert_eq!(
        effects[4],
        SideEffect::SetEmphasis {
            axis: Axis::X,
            active: Attribute::Age,
        }
    );
}

#[test]
fn y_switch_rebinds_tooltip_with_the_tracked_y_attribute() {
    let data = dataset();
    let controller = controller();
    let axes = AxisState::new(Attribute::Income, Attribute::Smokes).expect("valid axes");
    let state = controller.initial_state(&data, axes);

    let (next, effects) = controller.transition(
        &state,
        SelectionEvent::LabelClicked(Attribute::Obesity),
        &data,
    );

    assert_eq!(next.axes().x(), Attribute::Income);
    assert_eq!(next.axes().y(), Attribute::Obesity);
    assert_eq!(next.x_scale(), state.x_scale());
    assert!(effects.contains(&SideEffect::BindTooltip {
        x: Attribute::Income,
        y: Attribute::Obesity,
    }));
    assert!(matches!(
        effects[0],
        SideEffect::RenderAxis { axis: Axis::Y, .. }
    ));
    assert_eq!(
        effects[4],
        SideEffect::SetEmphasis {
            axis: Axis::Y,
            active: Attribute::Obesity,
        }
    );
}

#[test]
fn vertical_scales_are_inverted() {
    let data = dataset();
    let controller = controller();
    for attribute in Attribute::Y_CANDIDATES {
        let scale = controller.scale_for(&data, attribute);
        assert_eq!(scale.range(), (400.0, 0.0));
    }
    for attribute in Attribute::X_CANDIDATES {
        let scale = controller.scale_for(&data, attribute);
        assert_eq!(scale.range(), (0.0, 610.0));
    }
}

#[test]
fn transition_does_not_touch_its_input() {
    let data = dataset();
    let controller = controller();
    let state = controller.initial_state(&data, AxisState::default());
    let before = state;

    let (first, first_effects) =
        controller.transition(&state, SelectionEvent::LabelClicked(Attribute::Income), &data);
    let (second, second_effects) =
        controller.transition(&state, SelectionEvent::LabelClicked(Attribute::Income), &data);

    assert_eq!(state, before);
    assert_eq!(first, second);
    assert_eq!(first_effects, second_effects);
}

#[test]
fn control_values_parse_to_events() {
    assert_eq!(
        SelectionEvent::from_control_value("smokes").expect("known value"),
        SelectionEvent::LabelClicked(Attribute::Smokes)
    );
    assert_eq!(
        SelectionEvent::from_control_value("income")
            .expect("known value")
            .axis(),
        Axis::X
    );
    assert!(SelectionEvent::from_control_value("rainfall").is_err());
}

#[test]
fn axis_state_rejects_attributes_on_the_wrong_axis() {
    assert!(AxisState::new(Attribute::Smokes, Attribute::Healthcare).is_err());
    assert!(AxisState::new(Attribute::Poverty, Attribute::Age).is_err());
    assert!(AxisState::new(Attribute::Age, Attribute::Obesity).is_ok());
}
