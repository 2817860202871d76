#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub favorite_language: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        favorite_language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            favorite_language: favorite_language.into(),
        }
    }

    pub fn introduce(&self) -> String {
        format!(
            "Hi! I'm {}, a {}. I love coding in {}!",
            self.name, self.role, self.favorite_language
        )
    }

    /// Case-insensitive exact comparison against `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[test]
fn test_introduce() {
    let member = Member::new("Alice Chen", "Senior Developer", "Python");
    assert_eq!(
        member.introduce(),
        "Hi! I'm Alice Chen, a Senior Developer. I love coding in Python!"
    );
}

#[test]
fn test_introduce_empty_fields() {
    let member = Member::new("", "", "");
    assert_eq!(member.introduce(), "Hi! I'm , a . I love coding in !");
}

#[test]
fn test_is_named_ignores_case() {
    let member = Member::new("Alice Chen", "Senior Developer", "Python");
    for name in ["Alice Chen", "alice chen", "ALICE CHEN", "aLiCe cHeN"] {
        assert!(member.is_named(name), "Should match name: {name}");
    }
    for name in ["Alice", "Alice Chen ", "Bob Wang", ""] {
        assert!(!member.is_named(name), "Should not match name: {name:?}");
    }
}

#[test]
fn test_is_named_unicode() {
    let member = Member::new("Zoë Ärlig", "Tester", "Rust");
    assert!(member.is_named("ZOË ÄRLIG"));
}
