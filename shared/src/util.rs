/// Today's calendar date in the server's local time zone
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
