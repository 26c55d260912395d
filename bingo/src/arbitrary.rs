use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{generate_card, shuffle_stream, Card, DrawStream, WinRule};

/// A random card and draw stream, plus the rule to play them with.
#[derive(Clone, Debug)]
pub struct GameInput {
    pub card: Card,
    pub stream: DrawStream,
    pub rule: WinRule,
}

impl Arbitrary for GameInput {
    fn arbitrary(g: &mut Gen) -> Self {
        // Generation goes through the real generator, seeded from quickcheck
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        GameInput {
            card: generate_card(&mut rng),
            stream: shuffle_stream(&mut rng),
            rule: WinRule::arbitrary(g),
        }
    }
}

impl Arbitrary for WinRule {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[WinRule::Completed, WinRule::OneShort]).unwrap()
    }
}
