//! Known-answer tests
//!
//! Fixed register states and the first outputs they must produce. The
//! published vectors (pcg32 demo, JSF-64 canonical seeding, splitmix64)
//! pin the algorithms; the table vectors pin the seeding policies.

use prngzoo_core::rng::{
    Generator, Jsf64, Pcg32, Scrambler, SplitMix64, Xoroshiro64, Xoroshiro64Scrambler,
    Xoshiro128, Xoshiro256,
};
use prngzoo_core::{AnyGenerator, GeneratorKind};

/// First four outputs from each generator's fixed reference registers
const REFERENCE: &[(&str, [u64; 4])] = &[
    ("pcg8", [0x1f, 0x50, 0x58, 0xf6]),
    ("pcg8_fast", [0x16, 0x41, 0x0b, 0xcc]),
    ("pcg8_rxs_m", [0x87, 0xae, 0xc9, 0xea]),
    ("pcg16", [0x07a6, 0x6031, 0xa09f, 0xd315]),
    ("pcg16_fast", [0x7f9a, 0x93a9, 0x73f0, 0x60cf]),
    ("pcg32", [0xc4148fbc, 0xea54b9ae, 0x1d217920, 0xc525a721]),
    ("pcg32_fast", [0x275df7e1, 0x5cdf544f, 0x78cdbd62, 0x8740da47]),
    ("xorshift32", [0x21b7828c, 0xed2b259f, 0xba88ab33, 0x523d0444]),
    ("xorshift64", [0x4e03e562a49bd80d, 0xefee96d8a5df4cfd, 0xef80fcd750906d24, 0xb42b8df5de7284fe]),
    ("xorshift128", [0xb11fae15, 0xe69ee244, 0x6dac452b, 0x7249c295]),
    ("xoshiro128ss", [0x04d6e52f, 0xddf50899, 0x907732bd, 0x4d19a122]),
    ("xoshiro128pp", [0x82e47d9b, 0x2b131269, 0x6e21b04d, 0x27b4d320]),
    ("xoshiro128p", [0xff9e3249, 0xc5f4d0fe, 0x5ca31b13, 0x8ee9b888]),
    ("xoroshiro64ss", [0xc47841cb, 0xbb5d1a90, 0xb71f5bd4, 0x7e1776c6]),
    ("xoroshiro64s", [0xeda42a45, 0xbc142ec3, 0x411ed189, 0x8136c836]),
    ("xoshiro256ss", [0x783a9daa72e55e79, 0xc8946fb2a873d07c, 0xecff93f2655f18ee, 0x4d98c6957156c463]),
    ("xoshiro256pp", [0xb8a3051471dc871b, 0xd7fe174c9719deb6, 0x849737fce5c9f589, 0x13a605533270f47c]),
    ("xoshiro256p", [0x3df362bf4c5132e8, 0x2f5e38143149c740, 0xb686803c74bd85e5, 0x8fb1bcf03b9d6c7e]),
    ("xoroshiro128ss", [0x050e196361c30703, 0x89638631b61c312d, 0xc51e6d5fef7273ea, 0x2df990bf8540efd3]),
    ("xoroshiro128pp", [0x1c826747b592883d, 0x16d5432f0ecb2956, 0xe15f9ca63554833d, 0x06f4429aa62ad3f0]),
    ("xoroshiro128p", [0xad5d255bce0edbad, 0xd8752a6b270f8f9f, 0x9e6a36d6bd5eab9b, 0x8a1a7d9a1635fea5]),
    ("brad16", [0x0024, 0x0001, 0x0431, 0x0414]),
    ("tzarc_prng", [0xfd, 0x15, 0xb8, 0x7b]),
    ("xshift8", [0x01, 0x01, 0x01, 0x28]),
    ("jsf8", [0xac, 0xc0, 0x7c, 0xd9]),
    ("jsf16", [0x95b2, 0xe663, 0x2193, 0x36d9]),
    ("jsf32", [0x4d617e2a, 0x66577906, 0xae7cda3a, 0x6d2d98f7]),
    ("jsf64", [0x3d31b6b4f8bff056, 0x8150e1974164f11d, 0x05e24c58c525dea1, 0x728e9d7dcfbe77ce]),
];

/// First four outputs after seeding with 12345
const SEEDED_12345: &[(&str, [u64; 4])] = &[
    ("pcg8", [0x69, 0x24, 0x54, 0x6b]),
    ("pcg8_fast", [0x73, 0xf5, 0x2b, 0x6e]),
    ("pcg8_rxs_m", [0xbe, 0x92, 0x67, 0x80]),
    ("pcg16", [0x2ee8, 0x6d2e, 0x4d75, 0xc9c6]),
    ("pcg16_fast", [0x03d5, 0xa124, 0x1767, 0x8544]),
    ("pcg32", [0x5421840f, 0xbca9019b, 0xc8519e77, 0x9105380b]),
    ("pcg32_fast", [0x9df52de5, 0x77c6f76b, 0x1ece2215, 0x00b3ef70]),
    ("xorshift32", [0xc6e5747a, 0x652a09af, 0xa7e08fa0, 0x748e41ea]),
    ("xorshift64", [0x00000c163a391e19, 0x9c0eb9542f03ca65, 0xa228090ad781f4b1, 0x20f578d6eaf5fb18]),
    ("xorshift128", [0xeb1a798b, 0x83a62095, 0x2d0b71fb, 0x0c7639eb]),
    ("xoshiro128ss", [0x89f4befd, 0x94e95a78, 0x7a8293bc, 0xf0f3ccf8]),
    ("xoshiro128pp", [0xc9c8548f, 0x11ca377a, 0x0c8942f1, 0x70439841]),
    ("xoshiro128p", [0xde3fee85, 0xbaa437d0, 0x6da600ec, 0xe57a2a24]),
    ("xoroshiro64ss", [0x03cfec3c, 0xaae59ea4, 0x92f1ed2d, 0xe9d5efa9]),
    ("xoroshiro64s", [0x666c7fe0, 0xa777d5ca, 0x4a84b648, 0xab0fbcb2]),
    ("xoshiro256ss", [0xbe6a36374160d49b, 0x214aaa0637a688c6, 0xf69d16de9954d388, 0x0c60048c4e96e033]),
    ("xoshiro256pp", [0x8d948a82def8a568, 0x3477f953796702a0, 0x15caa2fce6db8d69, 0x2cef8853c20c6dd0]),
    ("xoshiro256p", [0x4f2790d70610546a, 0xd2ae33f21d5120ec, 0xa28f6ee203d01e40, 0x213ef47a5a3a7584]),
    ("xoroshiro128ss", [0x89f4caece00c92fd, 0x79e82d14ca5e32f1, 0xe0ee89f06b09ec55, 0x991a5fdcdc06551e]),
    ("xoroshiro128pp", [0xe08ec422beebbea0, 0xc5454d3ad5892bf0, 0x5223964c36832da0, 0x8ea7792a1152a13a]),
    ("xoroshiro128p", [0x56805f3ea0e50a8d, 0xe8c8fb10e799d07a, 0x67b37a0b3f115e50, 0x23a7130d9ba9ee0a]),
    ("brad16", [0x31fa, 0x31fb, 0x3e97, 0x31de]),
    ("tzarc_prng", [0xf6, 0x44, 0x67, 0x5d]),
    ("xshift8", [0xd1, 0x09, 0x0d, 0x0b]),
    ("jsf8", [0xbf, 0xcd, 0xab, 0x32]),
    ("jsf16", [0xc243, 0xe6a4, 0x1d04, 0x3a95]),
    ("jsf32", [0x26186b7e, 0x15630dfb, 0x4bcdf9ad, 0xad31214d]),
    ("jsf64", [0x741bfd79f1b3f9c5, 0xb0789af63a105c04, 0xd86680c44e5af7d4, 0x2bc46af483a9cda7]),
];

fn first_four(mut rng: AnyGenerator) -> [u64; 4] {
    [rng.next_u64(), rng.next_u64(), rng.next_u64(), rng.next_u64()]
}

#[test]
fn test_tables_cover_every_generator() {
    assert_eq!(REFERENCE.len(), GeneratorKind::ALL.len());
    assert_eq!(SEEDED_12345.len(), GeneratorKind::ALL.len());
    for kind in GeneratorKind::ALL {
        assert!(REFERENCE.iter().any(|(name, _)| *name == kind.name()));
        assert!(SEEDED_12345.iter().any(|(name, _)| *name == kind.name()));
    }
}

#[test]
fn test_reference_registers() {
    for (name, expected) in REFERENCE {
        let kind: GeneratorKind = name.parse().unwrap();
        let actual = first_four(AnyGenerator::reference(kind));
        assert_eq!(&actual, expected, "{} reference stream", name);
    }
}

#[test]
fn test_seeded_streams() {
    for (name, expected) in SEEDED_12345 {
        let actual = first_four(AnyGenerator::from_name(name, 12345).unwrap());
        assert_eq!(&actual, expected, "{} seeded with 12345", name);
    }
}

#[test]
fn test_jsf64_canonical_seeding() {
    // published 64-bit test registers
    let mut rng = Jsf64::from_registers([
        0xf1ea_eb05_9795_5eed,
        0x80cc_ff3c_ee5c_952c,
        0x80cc_ff3c_ee5c_952c,
        0x80cc_ff3c_ee5c_952c,
    ]);
    assert_eq!(rng.next_value(), 0xaa96_af85_e643_cde2);
    assert_eq!(rng.next_value(), 0x347f_caad_6b01_fddd);
    assert_eq!(rng.next_value(), 0x0def_e2a4_1553_900c);
    assert_eq!(rng.next_value(), 0xb556_7950_a2d1_4e35);
}

#[test]
fn test_pcg32_demo_stream() {
    let mut rng = Pcg32::new(42, 54);
    let expected = [
        0xa15c_02b7u32,
        0x7b47_f409,
        0xba1d_3330,
        0x83d2_f293,
        0xbfa4_784b,
        0xcbed_606e,
    ];
    for value in expected {
        assert_eq!(rng.next_value(), value);
    }
}

#[test]
fn test_splitmix64_zero_seed() {
    let mut sm = SplitMix64::new(0);
    assert_eq!(sm.next_u64(), 0xe220_a839_7b1d_cdaf);
    assert_eq!(sm.next_u64(), 0x6e78_9e6a_a1b9_65f4);
    assert_eq!(sm.next_u64(), 0x06c4_5d18_8009_454f);
    assert_eq!(sm.next_u64(), 0xf88b_b8a8_724c_81ec);
}

#[test]
fn test_xoshiro256_small_registers() {
    let cases: [(Scrambler, [u64; 4]); 3] = [
        (Scrambler::StarStar, [0x2d00, 0, 0x5a00_7080, 0x10e0_0000_0000_9d80]),
        (
            Scrambler::PlusPlus,
            [0x0280_0001, 0x0380_0067, 0x000c_c000_0380_0067, 0x000c_c201_9944_00b2],
        ),
        (
            Scrambler::Plus,
            [5, 0xc000_0000_0007, 0xc000_1800_0007, 0x8001_6000_1804_0302],
        ),
    ];
    for (scrambler, expected) in cases {
        let mut rng = Xoshiro256::from_registers([1, 2, 3, 4], scrambler);
        let actual: Vec<u64> = (0..4).map(|_| rng.next_value()).collect();
        assert_eq!(actual, expected, "xoshiro256 {:?}", scrambler);
    }
}

#[test]
fn test_xoshiro128_small_registers() {
    let cases: [(Scrambler, [u32; 4]); 3] = [
        (Scrambler::StarStar, [0x2d00, 0, 0x005a_7080, 0x0438_9d80]),
        (Scrambler::PlusPlus, [0x281, 0x0018_0387, 0xc018_3387, 0xd1ae_3b02]),
        (Scrambler::Plus, [5, 0x3007, 0x0180_3007, 0x01a0_5c0e]),
    ];
    for (scrambler, expected) in cases {
        let mut rng = Xoshiro128::from_registers([1, 2, 3, 4], scrambler);
        let actual: Vec<u32> = (0..4).map(|_| rng.next_value()).collect();
        assert_eq!(actual, expected, "xoshiro128 {:?}", scrambler);
    }
}

#[test]
fn test_xoroshiro64_uses_published_multiplier() {
    let mut rng = Xoroshiro64::reference(Xoroshiro64Scrambler::StarStar);
    let s0 = rng.registers()[0];
    let expected = s0.wrapping_mul(0x9e37_79bb).rotate_left(5).wrapping_mul(5);
    assert_eq!(rng.next_value(), expected);
}
