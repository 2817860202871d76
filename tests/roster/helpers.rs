use fake::faker::{lorem::en::Word, name::en::Name};
use fake::Fake;
use team_roster::{services::notifiers::RecordingNotifier, Roster};
use test_context::TestContext;

pub const SEEDED_OUTPUT: &str = "\
==================================================
TEAM ROSTER
==================================================
Hi! I'm Alice Chen, a Senior Developer. I love coding in Python!
Hi! I'm Bob Wang, a DevOps Engineer. I love coding in Go!
Hi! I'm Carol Lin, a Frontend Developer. I love coding in JavaScript!

Total team members: 3
==================================================
";

pub struct SeededRoster {
    pub roster: Roster,
    pub notifier: RecordingNotifier,
}

impl TestContext for SeededRoster {
    fn setup() -> SeededRoster {
        let notifier = RecordingNotifier::new();
        let roster = Roster::seeded(Box::new(notifier.clone()));
        SeededRoster { roster, notifier }
    }
}

/// Introduction lines of a rendered block, between the header and the
/// blank line before the count.
pub fn get_introductions(block: &str) -> Vec<&str> {
    block
        .lines()
        .skip(3)
        .take_while(|line| !line.is_empty())
        .collect()
}

pub fn get_count_line(block: &str) -> &str {
    block
        .lines()
        .rev()
        .nth(1)
        .expect("Rendered block is too short")
}

#[derive(Debug, Clone)]
pub struct MemberFixture {
    pub name: String,
    pub role: String,
    pub favorite_language: String,
}

impl quickcheck::Arbitrary for MemberFixture {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        Self {
            name: Name().fake_with_rng(g),
            role: Word().fake_with_rng(g),
            favorite_language: Word().fake_with_rng(g),
        }
    }
}
