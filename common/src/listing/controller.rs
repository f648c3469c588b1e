use crate::model::car::CarListItem;
use crate::model::paged::PagedResult;
use crate::requests::CarQuery;

/// How fetched pages combine into what the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// "Load more": each further page is appended to the rows already shown.
    Accumulate,
    /// Numbered pages: every fetch replaces the rows shown.
    Replace,
}

/// A fetch the controller asked for.
///
/// The caller sends [`FetchTicket::query`] and hands the ticket back with the
/// outcome. Tickets are numbered; only the newest one issued may change the
/// controller, so responses that arrive after a newer fetch was started are
/// dropped instead of overwriting fresher rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    append: bool,
    query: CarQuery,
    /// Where the controller stood before this fetch moved it, for fetches
    /// that keep the rows on screen until the answer arrives.
    replaced: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    page: u32,
    page_size: u32,
}

impl FetchTicket {
    pub fn query(&self) -> &CarQuery {
        &self.query
    }

    /// True for a "load more" fetch whose rows get appended.
    pub fn appends(&self) -> bool {
        self.append
    }
}

/// Search and paging state of a car list screen.
#[derive(Debug, Clone)]
pub struct ListController {
    mode: PagingMode,
    term: String,
    page: u32,
    page_size: u32,
    items: Vec<CarListItem>,
    total: u64,
    loading: bool,
    latest: u64,
}

impl ListController {
    pub fn new(mode: PagingMode, page_size: u32) -> Self {
        Self {
            mode,
            term: String::new(),
            page: 1,
            page_size: page_size.max(1),
            items: Vec::new(),
            total: 0,
            loading: false,
            latest: 0,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn items(&self) -> &[CarListItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// Whether the server holds rows beyond what has been shown.
    pub fn has_more(&self) -> bool {
        match self.mode {
            PagingMode::Accumulate => (self.items.len() as u64) < self.total,
            PagingMode::Replace => self.page < self.total_pages(),
        }
    }

    pub fn can_load_more(&self) -> bool {
        self.mode == PagingMode::Accumulate && self.has_more() && !self.loading
    }

    /// Back to page 1 with the current term. An accumulating list forgets its
    /// rows right away.
    pub fn reset(&mut self) -> FetchTicket {
        self.page = 1;
        if self.mode == PagingMode::Accumulate {
            self.items.clear();
        }
        self.issue(false)
    }

    /// Switches to a new search term and starts over from page 1.
    pub fn search(&mut self, term: impl Into<String>) -> FetchTicket {
        self.term = term.into();
        self.reset()
    }

    /// Next batch of an accumulating list; `None` while a fetch is in flight
    /// or when everything has been shown.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if !self.can_load_more() {
            return None;
        }
        let before = self.position();
        self.page += 1;
        let mut ticket = self.issue(true);
        ticket.replaced = Some(before);
        Some(ticket)
    }

    /// Moves `delta` pages; `None` when the target is outside
    /// `[1, total_pages]`.
    pub fn change_page(&mut self, delta: i64) -> Option<FetchTicket> {
        let next = i64::from(self.page) + delta;
        if next < 1 || next > i64::from(self.total_pages()) {
            return None;
        }
        let before = self.position();
        self.page = u32::try_from(next).ok()?;
        let mut ticket = self.issue(false);
        ticket.replaced = Some(before);
        Some(ticket)
    }

    pub fn change_page_size(&mut self, page_size: u32) -> FetchTicket {
        let before = self.position();
        self.page_size = page_size.max(1);
        let mut ticket = self.reset();
        // An accumulating list already dropped its rows; nothing to go back to.
        if self.mode == PagingMode::Replace {
            ticket.replaced = Some(before);
        }
        ticket
    }

    /// Refetches what is on screen: the current page for numbered paging, the
    /// whole list from page 1 for an accumulating one.
    pub fn reload(&mut self) -> FetchTicket {
        match self.mode {
            PagingMode::Accumulate => self.reset(),
            PagingMode::Replace => self.issue(false),
        }
    }

    /// Steps back to the last page when the current one no longer exists,
    /// typically after deleting the only row of the last page.
    pub fn clamp_page(&mut self) -> Option<FetchTicket> {
        if self.loading || self.mode != PagingMode::Replace {
            return None;
        }
        let last = self.total_pages();
        if self.page <= last {
            return None;
        }
        self.page = last;
        Some(self.issue(false))
    }

    /// Applies a successful response. Returns `false`, leaving the state
    /// untouched, when the ticket has been superseded.
    pub fn complete(&mut self, ticket: &FetchTicket, result: PagedResult<CarListItem>) -> bool {
        if ticket.token != self.latest {
            return false;
        }
        let mut rows = result.items;
        rows.truncate(self.page_size as usize);

        if ticket.append {
            self.items.extend(rows);
        } else {
            self.items = rows;
        }
        self.total = result.total_count;
        self.loading = false;
        true
    }

    /// Records a failed fetch. Rows already shown stay, and so does the page
    /// and page size they were fetched with: a failed "load more", page move
    /// or page-size change is undone, so the next attempt asks for the same
    /// page again.
    pub fn fail(&mut self, ticket: &FetchTicket) -> bool {
        if ticket.token != self.latest {
            return false;
        }
        if let Some(before) = ticket.replaced {
            self.page = before.page;
            self.page_size = before.page_size;
        }
        self.loading = false;
        true
    }

    fn position(&self) -> Position {
        Position {
            page: self.page,
            page_size: self.page_size,
        }
    }

    fn issue(&mut self, append: bool) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        FetchTicket {
            token: self.latest,
            append,
            replaced: None,
            query: CarQuery {
                term: self.term.clone(),
                page: self.page,
                page_size: self.page_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: u64) -> CarListItem {
        CarListItem {
            id,
            company: "Toyota".into(),
            model: format!("Sedan {id}"),
            price: 40000.0 + id as f64 * 750.0,
            description: None,
            has_image: false,
            image_data_url: None,
        }
    }

    fn page_of(ids: std::ops::Range<u64>, total: u64, query: &CarQuery) -> PagedResult<CarListItem> {
        PagedResult {
            items: ids.map(car).collect(),
            total_count: total,
            page: query.page,
            page_size: query.page_size,
        }
    }

    #[test]
    fn load_more_appends_the_next_batch() {
        let mut list = ListController::new(PagingMode::Accumulate, 9);
        let first = list.reset();
        assert_eq!(
            first.query(),
            &CarQuery {
                term: String::new(),
                page: 1,
                page_size: 9
            }
        );
        assert!(list.complete(&first, page_of(1..10, 30, first.query())));
        assert!(list.has_more());
        assert_eq!(list.items().len(), 9);

        let second = list.load_more().unwrap();
        assert_eq!(second.query().page, 2);
        assert_eq!(second.query().page_size, 9);
        assert!(second.appends());
        assert!(list.complete(&second, page_of(10..19, 30, second.query())));
        assert_eq!(list.items().len(), 18);
        assert_eq!(list.items()[9].id, 10);
        assert!(list.has_more());
    }

    #[test]
    fn has_more_tracks_accumulated_rows() {
        let mut list = ListController::new(PagingMode::Accumulate, 9);
        let mut ticket = list.reset();
        let mut next_id = 1;
        loop {
            let take = 9.min(20 - (next_id - 1));
            let result = page_of(next_id..next_id + take, 20, ticket.query());
            next_id += take;
            assert!(list.complete(&ticket, result));
            assert!(list.items().len() <= 9 * list.page() as usize);
            assert_eq!(list.has_more(), (list.items().len() as u64) < list.total());
            match list.load_more() {
                Some(t) => ticket = t,
                None => break,
            }
        }
        assert_eq!(list.items().len(), 20);
        assert!(!list.has_more());
        assert_eq!(list.page(), 3);
    }

    #[test]
    fn load_more_waits_for_the_fetch_in_flight() {
        let mut list = ListController::new(PagingMode::Accumulate, 9);
        let first = list.reset();
        assert!(list.load_more().is_none());
        list.complete(&first, page_of(1..10, 30, first.query()));
        assert!(list.load_more().is_some());
        assert!(list.load_more().is_none());
    }

    #[test]
    fn search_replaces_rows_of_the_previous_term() {
        let mut list = ListController::new(PagingMode::Accumulate, 9);
        let first = list.reset();
        list.complete(&first, page_of(1..10, 30, first.query()));
        let more = list.load_more().unwrap();
        list.complete(&more, page_of(10..19, 30, more.query()));

        let search = list.search("bmw");
        assert!(list.items().is_empty());
        assert_eq!(search.query().term, "bmw");
        assert_eq!(search.query().page, 1);

        let response = page_of(100..103, 3, search.query());
        let expected = response.items.clone();
        assert!(list.complete(&search, response));
        assert_eq!(list.items(), expected.as_slice());
        assert!(!list.has_more());
    }

    #[test]
    fn stale_load_more_cannot_leak_into_a_new_search() {
        let mut list = ListController::new(PagingMode::Accumulate, 9);
        let first = list.reset();
        list.complete(&first, page_of(1..10, 30, first.query()));
        let more = list.load_more().unwrap();
        let search = list.search("kia");

        assert!(list.complete(&search, page_of(200..202, 2, search.query())));
        assert!(!list.complete(&more, page_of(10..19, 30, more.query())));
        assert!(!list.fail(&more));

        assert_eq!(list.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![200, 201]);
        assert_eq!(list.total(), 2);
        assert!(!list.loading());
    }

    #[test]
    fn out_of_order_search_responses_keep_the_newest() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let older = list.search("a");
        let newer = list.search("ab");
        assert!(list.complete(&newer, page_of(1..3, 2, newer.query())));
        assert!(!list.complete(&older, page_of(50..60, 40, older.query())));
        assert_eq!(list.total(), 2);
        assert_eq!(list.term(), "ab");
    }

    #[test]
    fn failure_keeps_rows_and_rolls_back_load_more() {
        let mut list = ListController::new(PagingMode::Accumulate, 9);
        let first = list.reset();
        list.complete(&first, page_of(1..10, 30, first.query()));
        let more = list.load_more().unwrap();
        assert_eq!(list.page(), 2);

        assert!(list.fail(&more));
        assert_eq!(list.page(), 1);
        assert_eq!(list.items().len(), 9);
        assert!(!list.loading());

        let retry = list.load_more().unwrap();
        assert_eq!(retry.query().page, 2);
    }

    #[test]
    fn failed_page_move_stays_on_the_shown_page() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let first = list.reset();
        list.complete(&first, page_of(1..11, 50, first.query()));

        let next = list.change_page(1).unwrap();
        assert_eq!(list.page(), 2);
        assert!(list.fail(&next));
        assert_eq!(list.page(), 1);
        assert_eq!(list.items()[0].id, 1);
        assert!(!list.loading());

        let retry = list.change_page(1).unwrap();
        assert_eq!(retry.query().page, 2);
    }

    #[test]
    fn failed_page_size_change_keeps_the_old_size() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let first = list.reset();
        list.complete(&first, page_of(1..11, 50, first.query()));
        let ticket = list.change_page(2).unwrap();
        list.complete(&ticket, page_of(21..31, 50, ticket.query()));

        let resized = list.change_page_size(20);
        assert_eq!((list.page(), list.page_size()), (1, 20));
        assert!(list.fail(&resized));
        assert_eq!((list.page(), list.page_size()), (3, 10));
        assert_eq!(list.total_pages(), 5);
        assert_eq!(list.items()[0].id, 21);
    }

    #[test]
    fn failed_search_is_not_rolled_back() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let first = list.reset();
        list.complete(&first, page_of(1..11, 50, first.query()));
        let ticket = list.change_page(1).unwrap();
        list.complete(&ticket, page_of(11..21, 50, ticket.query()));

        let search = list.search("volvo");
        assert!(list.fail(&search));
        assert_eq!(list.page(), 1);
        assert_eq!(list.term(), "volvo");
    }

    #[test]
    fn oversized_pages_are_truncated() {
        let mut list = ListController::new(PagingMode::Replace, 5);
        let ticket = list.reset();
        list.complete(&ticket, page_of(1..9, 40, ticket.query()));
        assert_eq!(list.items().len(), 5);
    }

    #[test]
    fn total_pages_has_a_floor_of_one() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        assert_eq!(list.total_pages(), 1);
        let ticket = list.reset();
        list.complete(&ticket, page_of(0..0, 0, ticket.query()));
        assert_eq!(list.total_pages(), 1);

        let ticket = list.reset();
        list.complete(&ticket, page_of(1..11, 31, ticket.query()));
        assert_eq!(list.total_pages(), 4);
    }

    #[test]
    fn change_page_stays_within_bounds() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let ticket = list.reset();
        list.complete(&ticket, page_of(1..11, 25, ticket.query()));

        assert!(list.change_page(-1).is_none());
        assert_eq!(list.page(), 1);
        assert!(list.change_page(3).is_none());
        assert_eq!(list.page(), 1);

        let next = list.change_page(2).unwrap();
        assert_eq!(next.query().page, 3);
        assert!(!next.appends());
        list.complete(&next, page_of(21..26, 25, next.query()));
        assert_eq!(list.items().len(), 5);
        assert!(!list.has_more());
        assert!(list.change_page(1).is_none());
        assert_eq!(list.page(), 3);
    }

    #[test]
    fn change_page_size_always_returns_to_page_one() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let ticket = list.reset();
        list.complete(&ticket, page_of(1..11, 50, ticket.query()));
        let ticket = list.change_page(2).unwrap();
        list.complete(&ticket, page_of(21..31, 50, ticket.query()));
        assert_eq!(list.page(), 3);

        let resized = list.change_page_size(20);
        assert_eq!(list.page(), 1);
        assert_eq!(resized.query().page, 1);
        assert_eq!(resized.query().page_size, 20);
    }

    #[test]
    fn reload_keeps_page_and_term_in_replace_mode() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let ticket = list.search("ford");
        list.complete(&ticket, page_of(1..11, 30, ticket.query()));
        let ticket = list.change_page(1).unwrap();
        list.complete(&ticket, page_of(11..21, 30, ticket.query()));

        let reload = list.reload();
        assert_eq!(
            reload.query(),
            &CarQuery {
                term: "ford".into(),
                page: 2,
                page_size: 10
            }
        );
    }

    #[test]
    fn clamp_steps_back_after_the_last_row_disappears() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let ticket = list.reset();
        list.complete(&ticket, page_of(1..11, 21, ticket.query()));
        let ticket = list.change_page(2).unwrap();
        list.complete(&ticket, page_of(21..22, 21, ticket.query()));
        assert_eq!(list.page(), 3);

        let reload = list.reload();
        list.complete(&reload, page_of(0..0, 20, reload.query()));
        let clamped = list.clamp_page().unwrap();
        assert_eq!(clamped.query().page, 2);
        assert!(list.clamp_page().is_none());
    }

    #[test]
    fn replace_mode_never_loads_more() {
        let mut list = ListController::new(PagingMode::Replace, 10);
        let ticket = list.reset();
        list.complete(&ticket, page_of(1..11, 30, ticket.query()));
        assert!(list.has_more());
        assert!(list.load_more().is_none());
    }
}
