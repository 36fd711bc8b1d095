//! JSON Schema validation for the types `rdk` prints.
//!
//! Each instance is serialized, checked against its schemars-generated
//! schema, and deserialized back.

use rd_core::entities::Ticket;
use rd_core::enums::{FailureReason, ResponseStatus};
use rd_core::notify::Delivery;
use rd_core::responses::{CreateTicketResponse, DeleteTicketResponse, SetStatusResponse};
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! validate_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );

            let recovered: $ty = serde_json::from_value(instance).unwrap();
            pretty_assertions::assert_eq!(recovered, val);
        }
    };
}

validate_schema!(
    ticket_with_email,
    Ticket,
    Ticket {
        id: 42,
        case_id: "CMT-ABC12345".into(),
        phone: "012-345 6789".into(),
        email: Some("owner@example.com".into()),
        model: "AlphaX".into(),
        status: "Case Logged".into(),
        remarks: Some("No power".into()),
        date: "2026-03-14 10:05".into(),
    }
);

validate_schema!(
    ticket_without_optionals,
    Ticket,
    Ticket {
        id: 1,
        case_id: "CMT-ZZZZ9999".into(),
        phone: "0123456789".into(),
        email: None,
        model: "BetaPhone 3".into(),
        status: "Completed".into(),
        remarks: None,
        date: "2026-03-14 10:06".into(),
    }
);

validate_schema!(
    create_success,
    CreateTicketResponse,
    CreateTicketResponse::success("CMT-ABC12345".into())
);

validate_schema!(
    create_duplicate,
    CreateTicketResponse,
    CreateTicketResponse::error(FailureReason::DuplicateCaseId)
);

validate_schema!(
    set_status_not_found,
    SetStatusResponse,
    SetStatusResponse::failed(FailureReason::NotFound)
);

validate_schema!(
    delete_success,
    DeleteTicketResponse,
    DeleteTicketResponse {
        success: true,
        reason: None,
    }
);

validate_schema!(delivery_skipped, Delivery, Delivery::Skipped("no recipient".into()));

#[test]
fn create_error_omits_case_id() {
    let json = serde_json::to_value(CreateTicketResponse::error(FailureReason::Storage)).unwrap();
    assert_eq!(json["status"], ResponseStatus::Error.as_str());
    assert_eq!(json["reason"], "storage");
    assert!(json.get("case_id").is_none());
}
