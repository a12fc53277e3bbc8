//! Tests for the wire-code mappings of the domain enumerations.
//!
//! Every member must survive encode/decode, codes must be unique within an
//! enumeration, and unknown codes must be rejected.

use getalts_client::{Country, Service, Status, UnknownWireCode};
use std::collections::HashSet;

#[test]
fn test_every_service_round_trips() {
    for service in Service::ALL {
        let code = service.code();
        assert_eq!(Service::from_code(code).unwrap(), *service, "code {code}");
        assert_eq!(code.parse::<Service>().unwrap(), *service);
    }
}

#[test]
fn test_every_country_round_trips() {
    for country in Country::ALL {
        let code = country.code();
        assert_eq!(Country::from_code(code).unwrap(), *country, "code {code}");
        assert_eq!(country.to_string(), code);
    }
}

#[test]
fn test_every_status_round_trips() {
    for status in Status::ALL {
        let json = serde_json::to_string(status).unwrap();
        let decoded: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, *status);
    }
}

#[test]
fn test_codes_unique_per_enumeration() {
    let services: HashSet<_> = Service::ALL.iter().map(Service::code).collect();
    assert_eq!(services.len(), Service::ALL.len());

    let countries: HashSet<_> = Country::ALL.iter().map(Country::code).collect();
    assert_eq!(countries.len(), Country::ALL.len());

    let statuses: HashSet<_> = Status::ALL.iter().map(Status::code).collect();
    assert_eq!(statuses.len(), Status::ALL.len());
}

#[test]
fn test_enumeration_sizes() {
    assert_eq!(Service::ALL.len(), 19);
    assert_eq!(Country::ALL.len(), 47);
    assert_eq!(Status::ALL.len(), 6);
}

#[test]
fn test_known_codes() {
    assert_eq!(Service::Telegram.code(), "tg");
    assert_eq!(Country::Russia.code(), "ru");
    assert_eq!(Country::Chad.code(), "tg");
    assert_eq!(Country::UnitedKingdom.code(), "uk");
    assert_eq!(Status::WaitingForCode.code(), "STATUS_WAIT_CODE");
    assert_eq!(Status::Cancelled.code(), "ACCESS_CANCEL");
}

#[test]
fn test_same_code_in_different_enumerations() {
    // "tg" is Telegram as a service and Chad as a country.
    assert_eq!(Service::from_code("tg").unwrap(), Service::Telegram);
    assert_eq!(Country::from_code("tg").unwrap(), Country::Chad);
}

#[test]
fn test_unknown_codes_rejected() {
    let err: UnknownWireCode = Service::from_code("zz").unwrap_err();
    assert_eq!(err.kind, "service");
    assert_eq!(err.code, "zz");

    assert!(Country::from_code("xx").is_err());
    assert!(Status::from_code("STATUS_UNKNOWN").is_err());
    // Codes are case-sensitive.
    assert!(Status::from_code("ready").is_err());
    assert!(Country::from_code("RU").is_err());

    assert!(serde_json::from_str::<Country>("\"xx\"").is_err());
}
