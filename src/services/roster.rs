use std::io::{self, Write};
use tracing::Level;

use crate::{
    domain::{Member, Notifier, RosterError},
    log_error_chain,
    utils::constants::{BANNER_CHAR, BANNER_WIDTH, ROSTER_TITLE, SEED_MEMBERS},
};

/// Ordered collection of team members. Display order is insertion order.
pub struct Roster {
    members: Vec<Member>,
    notifier: Box<dyn Notifier>,
}

impl Roster {
    pub fn new(
        seed_members: Vec<Member>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            members: seed_members,
            notifier,
        }
    }

    /// Builds a roster holding the fixed set of members present at start-up.
    pub fn seeded(notifier: Box<dyn Notifier>) -> Self {
        let seed_members = SEED_MEMBERS
            .iter()
            .map(|(name, role, language)| Member::new(*name, *role, *language))
            .collect();
        Self::new(seed_members, notifier)
    }

    /// Appends a member and sends a welcome notification.
    ///
    /// Never fails: a notifier error is logged and the member is kept.
    #[tracing::instrument(name = "Add member to roster", skip_all)]
    pub fn add(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        favorite_language: impl Into<String>,
    ) -> &Member {
        let member = Member::new(name, role, favorite_language);
        let welcome = format!("Welcome {} to the team!", member.name);
        tracing::debug!("member_name: {}", member.name);

        self.members.push(member);

        if let Err(e) = self.notifier.notify(&welcome) {
            log_error_chain(&e, Level::WARN);
        }

        self.members
            .last()
            .expect("Roster cannot be empty after a push")
    }

    /// First member, in insertion order, whose name matches ignoring case.
    #[tracing::instrument(name = "Find roster member", skip(self))]
    pub fn find(&self, name: &str) -> Option<&Member> {
        let found = self.members.iter().find(|member| member.is_named(name));
        tracing::debug!("found: {}", found.is_some());
        found
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Formats the roster block without writing it anywhere.
    pub fn render(&self) -> String {
        let banner = BANNER_CHAR.to_string().repeat(BANNER_WIDTH);

        let mut lines =
            vec![banner.clone(), ROSTER_TITLE.to_owned(), banner.clone()];
        lines.extend(self.members.iter().map(Member::introduce));
        lines.push(String::new());
        lines.push(format!("Total team members: {}", self.members.len()));
        lines.push(banner);

        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    /// Writes the roster block to stdout and returns it.
    pub fn render_all(&self) -> Result<String, RosterError> {
        self.render_all_to(&mut io::stdout().lock())
    }

    #[tracing::instrument(name = "Render roster", skip_all)]
    pub fn render_all_to<W: Write>(
        &self,
        writer: &mut W,
    ) -> Result<String, RosterError> {
        let block = self.render();
        writer
            .write_all(block.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(RosterError::OutputError)?;
        tracing::debug!("rendered {} members", self.members.len());
        Ok(block)
    }
}
