// Host-side tests for scene parameter validation and colour strings.

use heart_core::{Hsl, ParamsError, Rgba, SceneParams};

#[test]
fn defaults_are_valid() {
    assert_eq!(SceneParams::default().validate(), Ok(()));
}

#[test]
fn non_positive_focal_length_is_rejected() {
    let params = SceneParams {
        focal_length: 0.0,
        ..SceneParams::default()
    };
    assert_eq!(
        params.validate(),
        Err(ParamsError::NotPositive {
            name: "focal_length",
            value: 0.0
        })
    );
}

#[test]
fn overlay_alpha_outside_unit_range_is_rejected() {
    let mut params = SceneParams::default();
    params.trail.a = 1.5;
    assert_eq!(params.validate(), Err(ParamsError::OverlayAlpha(1.5)));
}

#[test]
fn empty_phrase_list_is_rejected() {
    let params = SceneParams {
        phrases: &[],
        ..SceneParams::default()
    };
    assert_eq!(params.validate(), Err(ParamsError::NoPhrases));
}

#[test]
fn colours_format_as_css() {
    let trail = SceneParams::default().trail;
    assert_eq!(trail.to_string(), "rgba(15,2,5,0.3)");
    let c = Hsl {
        hue: 350.5,
        saturation: 100.0,
        lightness: 60.0,
    };
    assert_eq!(c.to_string(), "hsl(350.50,100%,60%)");
    let black = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };
    assert_eq!(black.to_string(), "rgba(0,0,0,1)");
}

fn rejected_as(params: &SceneParams, field: &str) -> bool {
    match params.validate() {
        Err(ParamsError::NotPositive { name, .. })
        | Err(ParamsError::Negative { name, .. })
        | Err(ParamsError::NotFinite { name, .. }) => name == field,
        _ => false,
    }
}

#[test]
fn non_finite_free_knobs_are_rejected() {
    let base = SceneParams::default();
    let cases = [
        ("hue_base", SceneParams { hue_base: f32::NAN, ..base.clone() }),
        ("pulse_frequency", SceneParams { pulse_frequency: f32::NAN, ..base.clone() }),
        ("camera_drift_y", SceneParams { camera_drift_y: f32::NAN, ..base.clone() }),
        ("pointer_gain", SceneParams { pointer_gain: f32::INFINITY, ..base.clone() }),
        ("pointer_gain", SceneParams { pointer_gain: f32::NEG_INFINITY, ..base.clone() }),
    ];
    for (field, params) in &cases {
        assert!(rejected_as(params, field), "{field} accepted: {:?}", params.validate());
    }
}

#[test]
fn negative_free_knobs_stay_allowed() {
    // Drift and pointer gain may run backwards.
    let params = SceneParams {
        camera_drift_y: -0.003,
        pointer_gain: -0.001,
        hue_base: -20.0,
        ..SceneParams::default()
    };
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn non_finite_positive_knobs_are_rejected() {
    let params = SceneParams {
        heart_scale: f32::INFINITY,
        ..SceneParams::default()
    };
    assert!(rejected_as(&params, "heart_scale"));
    let params = SceneParams {
        time_step: f32::NAN,
        ..SceneParams::default()
    };
    assert!(rejected_as(&params, "time_step"));
}

#[test]
fn non_finite_non_negative_knobs_are_rejected() {
    let params = SceneParams {
        seek_factor: f32::NAN,
        ..SceneParams::default()
    };
    assert!(rejected_as(&params, "seek_factor"));
    let params = SceneParams {
        celebration_jitter: f32::INFINITY,
        ..SceneParams::default()
    };
    assert!(rejected_as(&params, "celebration_jitter"));
}

#[test]
fn colour_and_scale_step_knobs_are_checked() {
    for (field, params) in [
        ("saturation", SceneParams { saturation: -1.0, ..SceneParams::default() }),
        ("lightness", SceneParams { lightness: f32::NAN, ..SceneParams::default() }),
        (
            "evasion_scale_step",
            SceneParams { evasion_scale_step: -0.1, ..SceneParams::default() },
        ),
    ] {
        assert!(rejected_as(&params, field), "{field} accepted");
    }
}

#[test]
fn nan_overlay_alpha_is_rejected() {
    let mut params = SceneParams::default();
    params.trail.a = f32::NAN;
    assert!(matches!(params.validate(), Err(ParamsError::OverlayAlpha(_))));
}
