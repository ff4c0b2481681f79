//! Decoding tests — stored payloads, round trips, and malformed input.

use fieldlib::{
    decode, defaults, encode, BasketballField, FieldError, FieldKind, FieldModel, FootballField,
    LineSize, RgbaColor, Sport,
};
use pretty_assertions::assert_eq;

/// A half basketball court as the app has always stored it.
const STORED_HALF_BASKETBALL: &str = r#"{
    "template": {
        "type": "half",
        "mainLinesSize": "2x",
        "aspectRatio": 0.95,
        "fieldInteriorRatio": 1,
        "threePointLineStartingXRatio": 0.12,
        "threePointLineVerticalYRation": 0.66,
        "threePointLineBottomCornerYRatio": 0.3,
        "threePointLineCurveControlXRatio": 0.35,
        "passingLineYRatio": 0.66,
        "interiorLineStartingXRation": 0.6,
        "interiorLineVerticalYRatio": 0.39,
        "reboundXRation": 0.83,
        "reboundYRation": 0.0833,
        "threeSecondZoneLineStartingXRation": 0.8,
        "threeSecondZoneLineVerticalYRation": 0.19
    },
    "colors": {
        "mainLinesColor": { "red": 255, "green": 255, "blue": 255, "alpha": 255 },
        "interiorFillColor": { "red": 255, "green": 0, "blue": 0, "alpha": 255 },
        "threePointLineInteriontFillColor": { "red": 0, "green": 255, "blue": 0, "alpha": 255 },
        "interiorLineFillColor": { "red": 0, "green": 0, "blue": 255, "alpha": 255 }
    }
}"#;

const STORED_HALF_FOOTBALL: &str = r#"{
    "template": {
        "type": "half",
        "mainLinesSize": "2x",
        "aspectRatio": 0.85,
        "fieldInteriorRatio": 1,
        "penaltyAreaStartingXRatio": 0.68,
        "penaltyAreaVerticalYRatio": 0.12,
        "bigPenaltyAreaStartingXRatio": 0.34,
        "bigPenaltyAreaVerticalYRatio": 0.296,
        "arcXRation": 0.75,
        "arcControlPointYRation": 0.385,
        "goalpostStartingXRation": 0.85,
        "goalpostVerticalYRation": 0.03,
        "penaltyPointY": 0.207
    },
    "colors": {
        "mainLinesColor": { "red": 0, "green": 0, "blue": 0, "alpha": 255 },
        "turfColor": { "red": 127, "green": 204, "blue": 76, "alpha": 255 }
    }
}"#;

#[test]
fn stored_basketball_payload_matches_default() {
    let model = decode(STORED_HALF_BASKETBALL.as_bytes()).expect("stored payload should decode");
    assert_eq!(model, FieldModel::from(defaults::half_basketball()));
    assert_eq!(model.sport(), Sport::Basketball);
    assert_eq!(model.line_size(), LineSize::Medium);
}

#[test]
fn stored_football_payload_matches_default() {
    let field = FootballField::from_slice(STORED_HALF_FOOTBALL.as_bytes()).unwrap();
    assert_eq!(field, defaults::half_football());
    assert_eq!(field.colors.turf_color, RgbaColor::rgb(127.0, 204.0, 76.0));
}

#[test]
fn every_default_round_trips() {
    for model in defaults::all() {
        let bytes = encode(&model).unwrap();
        let back = decode(&bytes).unwrap();
        assert_eq!(back, model);
    }
}

#[test]
fn edited_model_round_trips_with_translucent_colors() {
    let mut field = defaults::full_basketball();
    field.template.main_lines_size = LineSize::Large;
    field.template.three_point_line_curve_control_x_ratio = 0.4125;
    field.colors.interior_line_fill_color = RgbaColor::rgba(12.5, 40.0, 200.0, 64.0);
    let model = FieldModel::from(field);

    let back = decode(&encode(&model).unwrap()).unwrap();
    assert_eq!(back, model);
    assert_eq!(back.kind(), FieldKind::Full);
}

#[test]
fn encoded_template_uses_exactly_the_stored_keys() {
    let stored: serde_json::Value = serde_json::from_str(STORED_HALF_BASKETBALL).unwrap();
    let encoded: serde_json::Value =
        serde_json::from_slice(&encode(&defaults::half_basketball().into()).unwrap()).unwrap();

    let keys = |v: &serde_json::Value, section: &str| {
        let mut k: Vec<String> = v[section].as_object().unwrap().keys().cloned().collect();
        k.sort();
        k
    };
    assert_eq!(keys(&encoded, "template"), keys(&stored, "template"));
    assert_eq!(keys(&encoded, "colors"), keys(&stored, "colors"));
}

#[test]
fn malformed_bytes_fail_to_decode() {
    let cases: [&[u8]; 5] = [b"", b"not json", b"{\"template\": {}}", b"[1, 2, 3]", b"\xff\xfe"];
    for bad in cases {
        match decode(bad) {
            Err(FieldError::Decode(_)) => {}
            other => panic!("expected decode failure for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_enum_raw_value_fails_to_decode() {
    let payload = STORED_HALF_BASKETBALL.replace("\"2x\"", "\"4x\"");
    assert!(matches!(decode(payload.as_bytes()), Err(FieldError::Decode(_))));

    let payload = STORED_HALF_FOOTBALL.replace("\"half\"", "\"quarter\"");
    assert!(matches!(decode(payload.as_bytes()), Err(FieldError::Decode(_))));
}

#[test]
fn sport_specific_decoders_reject_the_other_sport() {
    assert!(BasketballField::from_slice(STORED_HALF_FOOTBALL.as_bytes()).is_err());
    assert!(FootballField::from_slice(STORED_HALF_BASKETBALL.as_bytes()).is_err());
}

#[test]
fn missing_alpha_defaults_to_opaque() {
    let payload = STORED_HALF_FOOTBALL.replace(", \"alpha\": 255", "");
    let field = FootballField::from_slice(payload.as_bytes()).unwrap();
    assert_eq!(field.colors.main_lines_color.alpha, 255.0);
    assert_eq!(field.colors.turf_color.opacity(), 1.0);
}
