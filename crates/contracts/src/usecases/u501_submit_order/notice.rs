/// Временное уведомление с номером показа.
///
/// Each [`Notice::show`] hands out a new ticket; [`Notice::expire`] clears the
/// text only for the ticket that is still current, so the timer of an older
/// notice cannot hide a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    ticket: u64,
    text: Option<String>,
}

impl Notice {
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.ticket += 1;
        self.text = Some(text.into());
        self.ticket
    }

    /// Returns whether the notice was cleared
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let mut notice = Notice::default();
        let first = notice.show("Order submitted successfully!");
        let second = notice.show("Order submitted successfully!");

        assert!(!notice.expire(first));
        assert!(notice.text().is_some());
        assert!(notice.expire(second));
        assert_eq!(notice.text(), None);
    }

    #[test]
    fn test_expire_twice() {
        let mut notice = Notice::default();
        let t = notice.show("done");
        assert!(notice.expire(t));
        assert!(!notice.expire(t));
    }
}
