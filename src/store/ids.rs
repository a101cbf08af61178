use chrono::Utc;

/// Issues ids of the form `<prefix><unix millis>`.
///
/// Values never repeat within one generator: if the clock has not moved since
/// the last id, the next value is bumped past it.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub(crate) fn next(&mut self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        self.next_at(Utc::now().timestamp_millis(), prefix, taken)
    }

    fn next_at(&mut self, now: i64, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        let mut stamp = now.max(self.last + 1);
        let mut id = format!("{}{}", prefix, stamp);
        while taken(&id) {
            stamp += 1;
            id = format!("{}{}", prefix, stamp);
        }
        self.last = stamp;
        id
    }
}
