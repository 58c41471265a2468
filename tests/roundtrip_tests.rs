//! Payload creation, canonical re-encoding and classification properties

use proptest::prelude::*;
use qrcraft::formatter::wifi::security_label;
use qrcraft::models::{GeoPoint, PhoneEntry, PhoneKind, WifiCredentials, WifiEncryption};
use qrcraft::{
    BarcodeRecord, BarcodeValue, ContentType, PayloadRequest, canonical_payload, classify_raw,
    classify_structured,
};

#[test]
fn test_created_payloads_classify_as_their_form() {
    let requests = vec![
        PayloadRequest::Text {
            text: "Meet at the north entrance".into(),
        },
        PayloadRequest::Link {
            url: "example.com/menu".into(),
        },
        PayloadRequest::Phone {
            number: "+44 20 7946 0958".into(),
        },
        PayloadRequest::Geo {
            latitude: "51.5007".into(),
            longitude: "-0.1246".into(),
        },
        PayloadRequest::WiFi {
            ssid: "Cafe Guest".into(),
            password: String::new(),
            encryption: "nopass".into(),
        },
        PayloadRequest::Contact {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
        },
    ];

    for request in requests {
        let payload = request.encode().expect("request should be valid");
        let record = classify_raw(&payload);
        assert_eq!(
            record.content_type(),
            request.content_type(),
            "payload {payload:?}"
        );
    }
}

#[test]
fn test_contact_payload_fields() {
    let payload = PayloadRequest::Contact {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: "555".into(),
    }
    .encode()
    .unwrap();
    let record = classify_raw(&payload);
    let pairs: Vec<_> = record.fields().iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("Name", "Jane Doe"),
            ("Email", "jane@example.com"),
            ("Phone", "555")
        ]
    );
}

#[test]
fn test_canonical_round_trip_examples() {
    for input in [
        "WIFI:T:WPA;S:MyNet;P:secret;;",
        "WIFI:S:Open Net;;",
        "tel:+15550100",
        "(555) 123-4567",
        "geo:48.8584,2.2945?q=Eiffel",
        "-33.8688, 151.2093",
    ] {
        let record = classify_raw(input);
        let payload = canonical_payload(&record).expect("typed record has a payload");
        let again = classify_raw(&payload);
        assert_eq!(again.content_type(), record.content_type(), "{input:?}");
        assert_eq!(again.fields(), record.fields(), "{input:?}");
    }
}

#[test]
fn test_structured_canonical_round_trip() {
    let cases = vec![
        (
            BarcodeRecord::new(
                "WIFI:T:WPA;S:Office;P:hunter2;;",
                BarcodeValue::Wifi(Some(WifiCredentials {
                    ssid: Some("Office".into()),
                    password: Some("hunter2".into()),
                    encryption: WifiEncryption::Wpa,
                })),
            ),
            vec![
                ("SSID", "Office"),
                ("Password", "hunter2"),
                ("Encryption type", "WPA2"),
            ],
        ),
        (
            BarcodeRecord::new(
                "WIFI:T:nopass;S:Lobby;;",
                BarcodeValue::Wifi(Some(WifiCredentials {
                    ssid: Some("Lobby".into()),
                    password: None,
                    encryption: WifiEncryption::Open,
                })),
            ),
            vec![("SSID", "Lobby"), ("Encryption type", "Open")],
        ),
        (
            BarcodeRecord::new(
                "TEL:+1 555 0100",
                BarcodeValue::Phone(Some(PhoneEntry {
                    number: Some("+1 555 0100".into()),
                    kind: PhoneKind::Mobile,
                })),
            ),
            vec![],
        ),
        (
            BarcodeRecord::new("tel:5550100", BarcodeValue::Phone(None)),
            vec![],
        ),
        (
            BarcodeRecord::new(
                "geo:0.00001,0.5",
                BarcodeValue::Geo(Some(GeoPoint::new(0.00001, 0.5))),
            ),
            vec![("", "0.00001, 0.5")],
        ),
        (
            BarcodeRecord::new("geo:37,-122", BarcodeValue::Geo(Some(GeoPoint::new(37.0, -122.0)))),
            vec![("", "37.0, -122.0")],
        ),
    ];

    for (barcode, expected) in cases {
        let record = classify_structured(&barcode);
        let payload = canonical_payload(&record).expect("typed record has a payload");
        let again = classify_raw(&payload);
        assert_eq!(again.content_type(), record.content_type(), "{payload:?}");
        let pairs: Vec<_> = again.fields().iter().collect();
        assert_eq!(pairs, expected, "{payload:?}");
    }
}

#[test]
fn test_structured_geo_without_point() {
    let record = classify_structured(&BarcodeRecord::new(
        "https://goo.gl/maps/abc",
        BarcodeValue::Geo(None),
    ));
    assert_eq!(record.content_type(), ContentType::GeoLocation);
    assert_eq!(canonical_payload(&record), None);

    let record = classify_structured(&BarcodeRecord::new("40.7,-74.0", BarcodeValue::Geo(None)));
    let payload = canonical_payload(&record).expect("bare pair is still a location");
    assert_eq!(classify_raw(&payload).content_type(), ContentType::GeoLocation);
}

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        -180.0f64..180.0,
        -1e-4f64..1e-4,
        -1e-12f64..1e-12,
        Just(0.0),
        Just(-0.0),
    ]
}

proptest! {
    #[test]
    fn prop_structured_geo_round_trip(lat in coordinate(), lng in coordinate()) {
        let record = classify_structured(&BarcodeRecord::new(
            "",
            BarcodeValue::Geo(Some(GeoPoint::new(lat, lng))),
        ));
        let payload = canonical_payload(&record).unwrap();
        let again = classify_raw(&payload);
        prop_assert_eq!(again.content_type(), ContentType::GeoLocation);
        prop_assert_eq!(again.fields(), record.fields());
    }

    #[test]
    fn prop_classification_is_idempotent(text in "\\PC{0,64}") {
        prop_assert_eq!(classify_raw(&text), classify_raw(&text));
    }

    #[test]
    fn prop_no_empty_field_values(text in "\\PC{0,64}") {
        let record = classify_raw(&text);
        prop_assert!(record.fields().iter().all(|(_, v)| !v.is_empty()));
        prop_assert_ne!(record.content_type(), ContentType::Unknown);
        prop_assert_eq!(record.raw_value(), text.trim());
    }

    #[test]
    fn prop_link_prefixes_always_link(
        prefix in prop::sample::select(vec!["http://", "https://", "www.", "HTTP://", "WWW."]),
        rest in "\\PC{0,32}",
    ) {
        let text = format!("{prefix}{rest}");
        prop_assert_eq!(classify_raw(&text).content_type(), ContentType::Link);
    }

    #[test]
    fn prop_wifi_round_trip(
        ssid in "[A-Za-z0-9_-]{1,16}",
        password in "[A-Za-z0-9_-]{0,16}",
        encryption in prop::sample::select(vec!["WPA", "WEP", "nopass", "", "SAE"]),
    ) {
        let payload = PayloadRequest::WiFi {
            ssid: ssid.clone(),
            password: password.clone(),
            encryption: encryption.to_string(),
        }
        .encode()
        .unwrap();
        let record = classify_raw(&payload);
        prop_assert_eq!(record.content_type(), ContentType::WiFi);
        prop_assert_eq!(record.fields().get("SSID"), Some(ssid.as_str()));
        let expected_password = if password.is_empty() { None } else { Some(password.as_str()) };
        prop_assert_eq!(record.fields().get("Password"), expected_password);
        let expected_label = security_label(encryption);
        prop_assert_eq!(
            record.fields().get("Encryption type"),
            Some(expected_label.as_str())
        );

        let again = classify_raw(&canonical_payload(&record).unwrap());
        prop_assert_eq!(again.content_type(), ContentType::WiFi);
        prop_assert_eq!(again.fields(), record.fields());
    }

    #[test]
    fn prop_geo_round_trip(
        lat in "-?[0-9]{1,2}\\.[0-9]{1,6}",
        lng in "-?[0-9]{1,3}\\.[0-9]{1,6}",
    ) {
        let payload = PayloadRequest::Geo { latitude: lat.clone(), longitude: lng.clone() }
            .encode()
            .unwrap();
        let record = classify_raw(&payload);
        prop_assert_eq!(record.content_type(), ContentType::GeoLocation);
        let expected = format!("{lat}, {lng}");
        prop_assert_eq!(record.fields().get(""), Some(expected.as_str()));

        let again = classify_raw(&canonical_payload(&record).unwrap());
        prop_assert_eq!(again.fields(), record.fields());
    }

    #[test]
    fn prop_phone_round_trip(number in "\\+?[0-9]{3,14}") {
        let payload = PayloadRequest::Phone { number }.encode().unwrap();
        let record = classify_raw(&payload);
        prop_assert_eq!(record.content_type(), ContentType::Phone);
        let again = classify_raw(&canonical_payload(&record).unwrap());
        prop_assert_eq!(again.content_type(), ContentType::Phone);
    }
}
