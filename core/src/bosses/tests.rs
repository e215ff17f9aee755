use super::*;

#[test]
fn test_detect_first_registered_match_wins() {
    let registry = BossRegistry::builtin();
    let content = "Gallywix #1 (1:00)\nsomeone mentioned NEXUS-KING earlier\n";
    let boss = registry.detect(content).unwrap();
    assert_eq!(boss.id, BossId::NexusKing);
}

#[test]
fn test_detect_is_case_insensitive() {
    let registry = BossRegistry::builtin();
    let boss = registry.detect("STIX BUNKJUNKER #4 (2:00)").unwrap();
    assert_eq!(boss.id, BossId::StixBunkjunker);
}

#[test]
fn test_detect_failure_lists_known_bosses() {
    let registry = BossRegistry::builtin();
    let err = registry.detect("Queen Ansurek #1 (3:00)").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Nexus-King"));
    assert!(message.contains("Stix Bunkjunker"));
}

#[test]
fn test_by_slug() {
    let registry = BossRegistry::builtin();
    assert_eq!(registry.by_slug("MugZee").unwrap().id, BossId::MugZee);
    assert_eq!(registry.by_slug("stix bunkjunker").unwrap().id, BossId::StixBunkjunker);
    assert!(matches!(
        registry.by_slug("ansurek"),
        Err(BossError::UnknownSlug { .. })
    ));
}

#[test]
fn test_restricted_registry_ignores_unregistered_profiles() {
    let registry = BossRegistry::new(vec![&MUG_ZEE]);
    assert!(registry.detect("Gallywix #1").is_err());
    assert!(registry.by_slug("gallywix").is_err());
    assert_eq!(registry.names(), vec!["Mug'Zee"]);
}

#[test]
fn test_format_header() {
    assert_eq!(GALLYWIX.format_header(3, 273), "Gallywix #3   (4:33)");
    assert_eq!(MUG_ZEE.format_header(1, 0), "Mug'Zee #1   (0:00)");
}
