/// Hands out sequential entity identifiers.
///
/// The tracked collections share one generator, so an id is unique across
/// transactions and bills alike. Seeding from loaded state keeps rehydrated
/// sessions from re-issuing an id that is still live on disk.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resumes numbering above the largest id found in `existing`.
    pub fn seeded_from<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let max = existing.into_iter().max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
