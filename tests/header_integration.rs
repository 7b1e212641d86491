//! Integration tests for header decoding on synthetic save files.

mod common;

use chrono::{Datelike, Timelike};
use common::{build_save, HeaderSpec};
use sav_stats::binary::ByteReader;
use sav_stats::error::ParserError;
use sav_stats::header::SaveHeader;

#[test]
fn test_default_header_fields() {
    let spec = HeaderSpec::default();
    let data = build_save(&spec, 0, &[b"body"]);
    let header = SaveHeader::parse(&data).unwrap();

    assert_eq!(header.header_version, 13);
    assert_eq!(header.save_version, 46);
    assert_eq!(header.build_version, 365_306);
    assert_eq!(header.save_name, "Autosave 0");
    assert_eq!(header.map_name, "Persistent_Level");
    assert_eq!(header.session_name, "Iron Works");
    assert_eq!(header.play_time_formatted, "1h 2m 5s");
    assert_eq!(header.visibility, 1);
    assert_eq!(header.editor_object_version, 170);
    assert_eq!(header.persistent_id, "A1B2C3D4E5F60718");
    assert!(!header.is_modded);
}

#[test]
fn test_save_time_conversion() {
    let data = HeaderSpec::default().encode();
    let header = SaveHeader::parse(&data).unwrap();

    let t = header.save_time;
    assert_eq!((t.year(), t.month(), t.day()), (2024, 1, 15));
    assert_eq!((t.hour(), t.minute(), t.second()), (12, 30, 45));
    assert_eq!(header.save_time_ticks, common::SAMPLE_TICKS);
}

#[test]
fn test_sub_second_ticks() {
    let spec = HeaderSpec {
        save_time_ticks: common::SAMPLE_TICKS + 1_234_567,
        ..HeaderSpec::default()
    };
    let header = SaveHeader::parse(&spec.encode()).unwrap();
    assert_eq!(header.save_time.nanosecond(), 123_456_700);
}

#[test]
fn test_utf16_session_name() {
    let spec = HeaderSpec {
        session_name: "Fabrik Süd ⚙".to_string(),
        utf16_session_name: true,
        ..HeaderSpec::default()
    };
    let header = SaveHeader::parse(&spec.encode()).unwrap();
    assert_eq!(header.session_name, "Fabrik Süd ⚙");
    // Fields after the wide string are still aligned
    assert_eq!(header.play_time_seconds, 3725);
    assert_eq!(header.persistent_id, "A1B2C3D4E5F60718");
}

#[test]
fn test_empty_strings() {
    let spec = HeaderSpec {
        save_name: String::new(),
        map_options: String::new(),
        persistent_id: String::new(),
        ..HeaderSpec::default()
    };
    let header = SaveHeader::parse(&spec.encode()).unwrap();
    assert_eq!(header.save_name, "");
    assert_eq!(header.map_name, "Persistent_Level");
    assert_eq!(header.persistent_id, "");
}

#[test]
fn test_modded_header() {
    let spec = HeaderSpec {
        mod_metadata: r#"{"Version":1,"FullMapName":"Persistent_Level","Mods":[
            {"Reference":"SML","Name":"Satisfactory Mod Loader","Version":"3.6.0"},
            {"Reference":"PowerChecker","Name":"Power Checker","Version":"1.0.0"},
            {"Reference":"AreaActions","Version":"1.6.7"}]}"#
            .to_string(),
        is_modded: 1,
        ..HeaderSpec::default()
    };
    let header = SaveHeader::parse(&spec.encode()).unwrap();

    assert_eq!(header.mod_count, 3);
    assert_eq!(
        header.mod_names,
        vec!["Satisfactory Mod Loader", "Power Checker", "AreaActions"]
    );
    assert!(header.is_modded);
}

#[test]
fn test_mod_metadata_without_list() {
    let spec = HeaderSpec {
        mod_metadata: r#"{"Version":1}"#.to_string(),
        ..HeaderSpec::default()
    };
    let header = SaveHeader::parse(&spec.encode()).unwrap();
    assert_eq!(header.mod_count, 0);
}

#[test]
fn test_any_nonzero_modded_flag() {
    let spec = HeaderSpec {
        is_modded: 7,
        ..HeaderSpec::default()
    };
    assert!(SaveHeader::parse(&spec.encode()).unwrap().is_modded);
}

#[test]
fn test_header_stops_before_body() {
    let spec = HeaderSpec::default();
    let header_len = spec.encode().len();
    let data = build_save(&spec, 0, &[b"Build_Foundry_C"]);

    let mut reader = ByteReader::new(&data);
    SaveHeader::read(&mut reader).unwrap();
    assert_eq!(reader.offset(), header_len);
}

#[test]
fn test_truncated_header_reports_offset() {
    let data = HeaderSpec::default().encode();
    let cut = 20;

    match SaveHeader::parse(&data[..cut]) {
        Err(ParserError::UnexpectedEof {
            offset,
            needed,
            available,
        }) => {
            assert!(offset <= cut);
            assert!(needed > available);
        }
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

#[test]
fn test_oversized_string_length() {
    let mut data = Vec::new();
    for v in [13u32, 46, 1] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    data.extend_from_slice(&i32::MAX.to_le_bytes());
    data.extend_from_slice(b"short");

    assert!(matches!(
        SaveHeader::parse(&data),
        Err(ParserError::UnexpectedEof { offset: 16, .. })
    ));
}

#[test]
fn test_header_json() {
    let spec = HeaderSpec {
        mod_metadata: r#"{"Mods":[{"Reference":"SML"}]}"#.to_string(),
        is_modded: 1,
        ..HeaderSpec::default()
    };
    let header = SaveHeader::parse(&spec.encode()).unwrap();
    let json = serde_json::to_value(&header).unwrap();

    assert_eq!(json["sessionName"], "Iron Works");
    assert_eq!(json["playTimeSeconds"], 3725);
    assert_eq!(json["playTimeFormatted"], "1h 2m 5s");
    assert_eq!(json["saveTime"], "2024-01-15T12:30:45Z");
    assert_eq!(json["modCount"], 1);
    assert_eq!(json["isModded"], true);
    assert!(json.get("modNames").is_none());
}
