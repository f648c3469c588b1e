/// Coalesces search-box input into settled search terms.
///
/// The debouncer does not keep time itself. Each keystroke is recorded with
/// [`SearchDebouncer::input`], which returns a ticket; the caller waits for the
/// quiet period and then calls [`SearchDebouncer::settle`] with that ticket.
/// Only the newest ticket settles, and a term equal to the last dispatched one
/// is swallowed.
#[derive(Debug, Clone, Default)]
pub struct SearchDebouncer {
    generation: u64,
    pending: Option<String>,
    last_dispatched: Option<String>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, term: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some(term.into());
        self.generation
    }

    /// The term to search for once `ticket`'s quiet period ran out, if any.
    pub fn settle(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.generation {
            return None;
        }
        let term = self.pending.take()?;
        if self.last_dispatched.as_deref() == Some(term.as_str()) {
            return None;
        }
        self.last_dispatched = Some(term.clone());
        Some(term)
    }

    /// Records a term that was searched without going through the debounce,
    /// such as one taken from the URL. Pending input is discarded.
    pub fn sync(&mut self, term: impl Into<String>) {
        self.generation += 1;
        self.pending = None;
        self.last_dispatched = Some(term.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_typing_dispatches_only_the_last_term() {
        let mut debouncer = SearchDebouncer::new();
        let a = debouncer.input("a");
        let ab = debouncer.input("ab");
        let abc = debouncer.input("abc");

        let dispatched: Vec<String> = [a, ab, abc]
            .into_iter()
            .filter_map(|ticket| debouncer.settle(ticket))
            .collect();
        assert_eq!(dispatched, vec!["abc".to_string()]);
    }

    #[test]
    fn repeating_the_dispatched_term_is_suppressed() {
        let mut debouncer = SearchDebouncer::new();
        let first = debouncer.input("audi");
        assert_eq!(debouncer.settle(first).as_deref(), Some("audi"));

        let back_and_forth = {
            debouncer.input("aud");
            debouncer.input("audi")
        };
        assert_eq!(debouncer.settle(back_and_forth), None);

        let changed = debouncer.input("");
        assert_eq!(debouncer.settle(changed).as_deref(), Some(""));
    }

    #[test]
    fn a_ticket_settles_once() {
        let mut debouncer = SearchDebouncer::new();
        let ticket = debouncer.input("kia");
        assert!(debouncer.settle(ticket).is_some());
        assert!(debouncer.settle(ticket).is_none());
    }

    #[test]
    fn sync_invalidates_pending_input() {
        let mut debouncer = SearchDebouncer::new();
        let typed = debouncer.input("hon");
        debouncer.sync("honda");
        assert_eq!(debouncer.settle(typed), None);

        let same = debouncer.input("honda");
        assert_eq!(debouncer.settle(same), None);
    }
}
