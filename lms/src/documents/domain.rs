use chrono::NaiveDate;

pub mod model;

// Reservable is the capability shared by every document variant; lending only ever goes through it.
pub trait Reservable: Sync + Send {
    fn code(&self) -> &str;
    fn holder_id(&self) -> Option<&str>;
    fn is_currently_held(&self) -> bool;
    fn is_awaiting_verification(&self) -> bool;
    fn hold_window(&self) -> (NaiveDate, NaiveDate);

    // free documents are the only ones a catalog may list as Available
    fn is_free(&self) -> bool {
        !self.is_currently_held() && !self.is_awaiting_verification()
    }
}
