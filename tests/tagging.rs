mod common;

use chrono::DateTime;

use ais_tagging::{
    comment_block::TIMESTAMP_KEY,
    filter::TaggingFilter,
    tagging::{SOURCE_BS_KEY, SOURCE_COUNTRY_KEY, SOURCE_ID_KEY},
    transform::{Policy, TaggingTransformer},
    AisPacket, AisTaggingError, CommentBlock, Country, ProprietaryTag, Sentence, SourceTag,
    SourceType, Tagging,
};

fn dnk() -> Country {
    Country::by_code("DNK").unwrap()
}

#[test]
fn test_round_trip_through_comment_block() {
    common::init_tracing();
    let tagging = Tagging {
        source_id: Some("X".to_string()),
        source_bs: Some(123456789),
        source_country: Some(dnk()),
        source_type: Some(SourceType::Satellite),
        ..Tagging::default()
    };

    let mut cb = CommentBlock::new();
    tagging.encode(&mut cb);
    let packet: AisPacket = Sentence::new().with_comment_block(cb).into();

    let parsed = Tagging::parse_packet(Some(&packet)).unwrap();
    assert_eq!(parsed, tagging);
}

/// The `c` key written on encode is not read back on parse; only the
/// sentence reception time is.
#[test]
fn test_timestamp_not_read_from_comment_block() {
    common::init_tracing();
    let tagging = Tagging {
        timestamp: DateTime::from_timestamp(1354719387, 0),
        source_id: Some("X".to_string()),
        ..Tagging::default()
    };

    let cb = tagging.to_comment_block();
    assert!(cb.contains(TIMESTAMP_KEY));

    let sentence = Sentence::new().with_comment_block(cb);
    let parsed = Tagging::parse(Some(&sentence)).unwrap();
    assert_eq!(parsed.timestamp, None);
    assert_ne!(parsed, tagging);

    let received = DateTime::from_timestamp(1354719400, 0).unwrap();
    let parsed = Tagging::parse(Some(&sentence.with_timestamp(received))).unwrap();
    assert_eq!(parsed.timestamp, Some(received));
}

#[test]
fn test_preserving_encode() {
    let tagging = Tagging {
        source_id: Some("new".to_string()),
        ..Tagging::default()
    };
    let mut cb = CommentBlock::new();
    cb.add_string(SOURCE_ID_KEY, "orig");

    assert_eq!(
        tagging.encode_preserve(&mut cb).get_string(SOURCE_ID_KEY),
        Some("orig")
    );
    assert_eq!(
        tagging.encode(&mut cb).get_string(SOURCE_ID_KEY),
        Some("new")
    );
}

#[test]
fn test_proprietary_fallback_precedence() {
    common::init_tracing();
    let sentence = Sentence::new()
        .with_comment_block(CommentBlock::new())
        .with_tag(SourceTag::new(Some(111), None))
        .with_tag(ProprietaryTag::Other {
            raw: "$PVND,x".to_string(),
        })
        .with_tag(SourceTag::new(Some(222), Some(dnk())));

    let parsed = Tagging::parse(Some(&sentence)).unwrap();
    assert_eq!(parsed.source_bs, Some(111));
    assert_eq!(parsed.source_country, Some(dnk()));
}

#[test]
fn test_merge_missing_is_delta() {
    let current = Tagging {
        source_id: Some("A".to_string()),
        ..Tagging::default()
    };
    let proposed = Tagging {
        source_id: Some("B".to_string()),
        source_country: Some(dnk()),
        ..Tagging::default()
    };

    let added = current.merge_missing(&proposed);
    assert_eq!(added.source_id, None);
    assert_eq!(added.source_country, Some(dnk()));
    assert_eq!(added.source_bs, None);
    assert_eq!(added.source_type, None);
}

#[test]
fn test_filter_match() {
    let any = Tagging::default();
    let sat = Tagging {
        source_type: Some(SourceType::Satellite),
        ..Tagging::default()
    };
    let live = Tagging {
        source_type: Some(SourceType::Terrestrial),
        ..Tagging::default()
    };

    assert!(any.filter_match(&sat));
    assert!(any.filter_match(&any));
    assert!(!sat.filter_match(&any));
    assert!(!sat.filter_match(&live));
    assert!(sat.filter_match(&sat));
    assert!(sat.filter_match(&Tagging {
        source_id: Some("extra".to_string()),
        ..sat.clone()
    }));
}

#[test]
fn test_source_type_decoding() {
    assert!(matches!(
        SourceType::decode(Some("FOO")),
        Err(AisTaggingError::InvalidEnumeration(_))
    ));
    assert_eq!(
        SourceType::decode(Some("live")).unwrap(),
        Some(SourceType::Terrestrial)
    );
}

/// Copying does not carry the source type; pinned until decided otherwise.
#[test]
fn test_copy_omits_source_type() {
    let tagging = Tagging {
        source_id: Some("X".to_string()),
        source_type: Some(SourceType::Satellite),
        ..Tagging::default()
    };
    let copy = Tagging::copy_of(&tagging);
    assert_eq!(copy.source_id, tagging.source_id);
    assert_eq!(copy.source_type, None);
}

#[test]
fn test_transform_then_filter() {
    common::init_tracing();
    let stamp = Tagging {
        source_id: Some("AISD".to_string()),
        source_bs: Some(2190047),
        source_country: Some(dnk()),
        ..Tagging::default()
    };
    let transformer = TaggingTransformer::new(Policy::PrependMissing, stamp.clone());

    let mut tagged: AisPacket = Sentence::new()
        .with_tag(SourceTag::new(Some(2190050), Country::by_code("SWE")))
        .into();
    let mut untagged = AisPacket::default();
    transformer.transform_packet(&mut tagged).unwrap();
    transformer.transform_packet(&mut untagged).unwrap();

    let cb = tagged.sentence().and_then(Sentence::comment_block).unwrap();
    assert_eq!(cb.get_string(SOURCE_ID_KEY), Some("AISD"));
    assert!(!cb.contains(SOURCE_BS_KEY));
    assert!(!cb.contains(SOURCE_COUNTRY_KEY));

    let filter = TaggingFilter::new(Tagging {
        source_id: Some("AISD".to_string()),
        ..Tagging::default()
    });
    let packets = [tagged, untagged];
    let accepted: Vec<_> = filter.retain(&packets).collect();
    assert_eq!(accepted.len(), 1);

    let parsed = Tagging::parse_packet(Some(accepted[0])).unwrap();
    assert_eq!(parsed.source_bs, Some(2190050));
    assert_eq!(parsed.source_country, Country::by_code("SWE"));
}

#[test]
fn test_parse_packet_requires_packet() {
    assert!(matches!(
        Tagging::parse_packet(None),
        Err(AisTaggingError::NullInput("packet"))
    ));
}
