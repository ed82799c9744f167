#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteFetch,
    ScheduleFetch(u64), // delay in milliseconds
    ShowMessage(String),
}
