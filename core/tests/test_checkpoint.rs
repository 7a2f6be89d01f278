//! Tests for checkpoint save/restore
//!
//! A restored generator must continue exactly where the original stopped,
//! and a checkpoint whose contents disagree with itself must be refused.

use prngzoo_core::checkpoint::compute_state_hash;
use prngzoo_core::{AnyGenerator, Checkpoint, GeneratorKind, PrngError};

fn advanced(kind: GeneratorKind, seed: u64, draws: u64) -> AnyGenerator {
    let mut rng = AnyGenerator::seeded(kind, seed);
    for _ in 0..draws {
        rng.next_u64();
    }
    rng
}

#[test]
fn test_round_trip_continues_stream() {
    let mut original = advanced(GeneratorKind::Xoshiro256ss, 12345, 1000);

    let json = Checkpoint::capture(&original, 1000).unwrap().to_json().unwrap();
    let checkpoint = Checkpoint::from_json(&json).unwrap();
    assert_eq!(checkpoint.draws, 1000);
    assert_eq!(checkpoint.kind, GeneratorKind::Xoshiro256ss);

    let mut restored = checkpoint.restore().unwrap();
    for i in 0..100 {
        assert_eq!(original.next_u64(), restored.next_u64(), "diverged at {}", i);
    }
}

#[test]
fn test_json_names_the_generator() {
    let rng = AnyGenerator::seeded(GeneratorKind::Pcg8Fast, 3);
    let json = Checkpoint::capture(&rng, 0).unwrap().to_json().unwrap();

    assert!(json.contains("\"kind\": \"pcg8_fast\""));
    assert!(json.contains("\"pcg8_fast\": {"));
    assert!(json.contains("\"state_hash\""));
}

#[test]
fn test_state_hash_matches_registers() {
    let rng = advanced(GeneratorKind::Jsf16, 7, 3);
    let checkpoint = Checkpoint::capture(&rng, 3).unwrap();
    assert_eq!(checkpoint.state_hash, compute_state_hash(&rng).unwrap());
    assert_eq!(checkpoint.state_hash.len(), 64);
}

#[test]
fn test_tampered_registers_rejected() {
    let rng = AnyGenerator::seeded(GeneratorKind::Jsf32, 42);
    let mut checkpoint = Checkpoint::capture(&rng, 0).unwrap();
    checkpoint.generator = AnyGenerator::seeded(GeneratorKind::Jsf32, 43);

    let json = checkpoint.to_json().unwrap();
    let result = Checkpoint::from_json(&json);
    assert!(matches!(result, Err(PrngError::CheckpointMismatch(_))));
}

#[test]
fn test_tampered_kind_rejected() {
    let rng = AnyGenerator::seeded(GeneratorKind::Jsf32, 42);
    let json = Checkpoint::capture(&rng, 0).unwrap().to_json().unwrap();
    let tampered = json.replace("\"kind\": \"jsf32\"", "\"kind\": \"jsf16\"");
    assert_ne!(json, tampered);

    let result = Checkpoint::from_json(&tampered);
    assert!(matches!(result, Err(PrngError::CheckpointMismatch(_))));
}

#[test]
fn test_restore_validates() {
    let rng = AnyGenerator::seeded(GeneratorKind::Xorshift64, 1);
    let mut checkpoint = Checkpoint::capture(&rng, 0).unwrap();
    checkpoint.state_hash = "0".repeat(64);
    assert!(checkpoint.restore().is_err());
}

#[test]
fn test_malformed_json_rejected() {
    let result = Checkpoint::from_json("{\"version\": 1, \"kind\": ");
    assert!(matches!(result, Err(PrngError::Serialization(_))));

    let result = Checkpoint::from_json("{\"version\": 1, \"kind\": \"nope\"}");
    assert!(matches!(result, Err(PrngError::Serialization(_))));
}

#[test]
fn test_every_generator_round_trips() {
    for kind in GeneratorKind::ALL {
        let rng = advanced(kind, 31337, 17);
        let json = Checkpoint::capture(&rng, 17).unwrap().to_json().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored, rng, "{} registers changed across checkpoint", kind);
    }
}

/// Serialize a checkpoint, let `edit` rewrite its registers, and re-sign it
fn resigned(kind: GeneratorKind, edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let rng = AnyGenerator::seeded(kind, 12345);
    let checkpoint = Checkpoint::capture(&rng, 0).unwrap();
    let mut value = serde_json::to_value(&checkpoint).unwrap();
    let registers = value["generator"]
        .as_object_mut()
        .and_then(|variant| variant.values_mut().next())
        .unwrap();
    edit(registers);
    value["state_hash"] = compute_state_hash(&value["generator"]).unwrap().into();
    value.to_string()
}

fn assert_refused(json: &str) {
    match Checkpoint::from_json(json) {
        Err(PrngError::CheckpointMismatch(_)) => {}
        other => panic!("expected CheckpointMismatch, got {:?}", other),
    }
}

#[test]
fn test_resigned_unchanged_registers_accepted() {
    let json = resigned(GeneratorKind::Pcg32, |_| {});
    assert!(Checkpoint::from_json(&json).is_ok());
}

#[test]
fn test_even_pcg_increment_rejected() {
    let json = resigned(GeneratorKind::Pcg32, |regs| regs["inc"] = 2.into());
    assert_refused(&json);
}

#[test]
fn test_even_mcg_state_rejected() {
    for kind in [
        GeneratorKind::Pcg8Fast,
        GeneratorKind::Pcg16Fast,
        GeneratorKind::Pcg32Fast,
        GeneratorKind::Pcg8RxsM,
    ] {
        let json = resigned(kind, |regs| regs["state"] = 0x1000.into());
        assert_refused(&json);
    }
}

#[test]
fn test_zero_xorshift_state_rejected() {
    let json = resigned(GeneratorKind::Xorshift32, |regs| regs["state"] = 0.into());
    assert_refused(&json);

    let json = resigned(GeneratorKind::Xorshift128, |regs| {
        regs["x"] = serde_json::json!([0, 0, 0, 0])
    });
    assert_refused(&json);
}

#[test]
fn test_all_zero_xoshiro_rejected() {
    let json = resigned(GeneratorKind::Xoshiro256pp, |regs| {
        regs["s"] = serde_json::json!([0, 0, 0, 0])
    });
    assert_refused(&json);

    // one nonzero word is enough
    let json = resigned(GeneratorKind::Xoshiro256pp, |regs| {
        regs["s"] = serde_json::json!([0, 0, 0, 1])
    });
    assert!(Checkpoint::from_json(&json).is_ok());
}
