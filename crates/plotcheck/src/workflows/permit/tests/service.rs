use super::common::*;
use crate::geometry::{InvalidPolygon, Vertex};
use crate::workflows::permit::{PermitServiceError, PlotDescriptor, SubmissionPayload};
use crate::zoning::{InvalidInput, LegalityVerdict};

#[test]
fn submit_records_input_and_formatted_output() {
    let (service, recorder) = build_service();

    let view = service.submit(mid_width_payload()).expect("submission succeeds");

    assert_eq!(view.permissible_fsi, 1.1);
    assert_eq!(view.max_builtup_area_sqm, "962.19");
    assert_eq!(view.max_building_height_m, "13.50");
    assert_eq!(view.max_floors, 4);
    assert_eq!(view.permissible_footprint_sqm, "568.57");

    let records = recorder.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input, mid_width_payload());
    assert_eq!(records[0].output, view);
}

#[test]
fn submit_measures_drawn_boundary_when_no_area_given() {
    let (service, recorder) = build_service();
    let payload = SubmissionPayload::with_vertices(drawn_parcel(), 12.0);

    let view = service.submit(payload.clone()).expect("submission succeeds");

    let area: f64 = view.plot_area_sqm.parse().expect("numeric area");
    assert!((area - 1046.96).abs() < 0.5, "area was {area}");
    assert_eq!(view.permissible_fsi, 1.3);
    assert_eq!(view.max_floors, 6);
    assert_eq!(recorder.records()[0].input, payload);
}

#[test]
fn supplied_area_takes_precedence_over_boundary() {
    let (service, _) = build_service();
    let payload = SubmissionPayload {
        plot: PlotDescriptor {
            area: Some(1000.0),
            vertices: Some(drawn_parcel()),
        },
        ..SubmissionPayload::with_area(0.0, 20.0)
    };

    let result = service.assess(&payload).expect("assessment succeeds");
    assert_eq!(result.plot_area_sqm, 1000.0);
}

#[test]
fn rejected_input_is_not_recorded() {
    let (service, recorder) = build_service();

    let err = service
        .submit(SubmissionPayload::with_area(-5.0, 9.0))
        .unwrap_err();

    assert!(matches!(
        err,
        PermitServiceError::Input(InvalidInput::NonPositive {
            field: "plot_area_sqm",
            ..
        })
    ));
    assert!(err.is_client_error());
    assert!(recorder.records().is_empty());
}

#[test]
fn missing_plot_description_names_the_field() {
    let (service, _) = build_service();
    let payload = SubmissionPayload {
        plot: PlotDescriptor::default(),
        ..SubmissionPayload::with_area(0.0, 9.0)
    };

    let err = service.assess(&payload).unwrap_err();
    assert!(matches!(
        err,
        PermitServiceError::Input(InvalidInput::Missing { field: "plot.area" })
    ));
}

#[test]
fn degenerate_boundary_is_an_invalid_polygon() {
    let (service, _) = build_service();
    let payload = SubmissionPayload::with_vertices(
        vec![Vertex::new(18.52, 73.85), Vertex::new(18.53, 73.86)],
        9.0,
    );

    let err = service.assess(&payload).unwrap_err();
    assert!(matches!(
        err,
        PermitServiceError::Polygon(InvalidPolygon::TooFewVertices(2))
    ));
}

#[test]
fn recorder_failure_is_reported_as_server_side() {
    let service = unavailable_service();

    let err = service.submit(mid_width_payload()).unwrap_err();
    assert!(matches!(err, PermitServiceError::Recorder(_)));
    assert!(!err.is_client_error());
}

#[test]
fn legality_is_inclusive_of_max_floors() {
    let (service, recorder) = build_service();
    let payload = mid_width_payload();

    let at_limit = service
        .check_legality(&payload, 4.0)
        .expect("check succeeds");
    assert_eq!(at_limit.verdict, LegalityVerdict::Legal);
    assert_eq!(at_limit.max_floors, 4);

    let over = service
        .check_legality(&payload, 5.0)
        .expect("check succeeds");
    assert_eq!(over.verdict, LegalityVerdict::Illegal);
    assert_eq!(over.current_floors, 5);

    assert!(recorder.records().is_empty());
}

#[test]
fn legality_rejects_fractional_and_negative_counts() {
    let (service, _) = build_service();
    let payload = mid_width_payload();

    assert!(matches!(
        service.check_legality(&payload, 2.5).unwrap_err(),
        PermitServiceError::Input(InvalidInput::FractionalFloorCount(_))
    ));
    assert!(matches!(
        service.check_legality(&payload, -1.0).unwrap_err(),
        PermitServiceError::Input(InvalidInput::NegativeFloorCount(-1))
    ));
}

#[test]
fn measure_reports_area_and_vertex_count() {
    let (service, _) = build_service();

    let report = service.measure(&drawn_parcel()).expect("valid polygon");
    assert_eq!(report.vertex_count, 4);
    assert!((report.area_sqm - 1046.96).abs() < 0.5);
}
