/// Source of the calendar year stamped into pages without a configured year.
pub trait Clock {
    fn current_year(&self) -> i32;
}
